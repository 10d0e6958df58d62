use serde_json::Value;

use crate::error::PollError;

/// The fixed set of review states the upstream API may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    pub fn from_code(code: &str) -> Result<Self, PollError> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(PollError::UnknownStatus(other.to_string())),
        }
    }

    #[must_use]
    pub fn verdict(self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// Validates the shape of an API response and returns the homework list.
///
/// The three possible violations each map to their own error variant: wrong
/// top-level type, missing key, wrong field type.
pub fn check_response(response: &Value) -> Result<&[Value], PollError> {
    let map = response.as_object().ok_or(PollError::NotAnObject)?;
    let homeworks = map.get("homeworks").ok_or(PollError::MissingHomeworksKey)?;
    let homeworks = homeworks.as_array().ok_or(PollError::HomeworksNotAList)?;
    Ok(homeworks)
}

/// Turns one homework record into the notification sentence.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let name = string_field(homework, "homework_name")?;
    let status = HomeworkStatus::from_code(string_field(homework, "status")?)?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}

fn string_field<'a>(record: &'a Value, key: &'static str) -> Result<&'a str, PollError> {
    record
        .get(key)
        .and_then(Value::as_str)
        .ok_or(PollError::MissingField(key))
}
