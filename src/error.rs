use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong inside one poll cycle.
///
/// Each violated invariant gets its own variant so the loop can report which
/// one broke. None of these terminate the loop; they are logged and relayed
/// to the chat, and the next cycle proceeds after the usual sleep.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("request to the homework API failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("homework API returned HTTP {0}")]
    Endpoint(StatusCode),

    #[error("response is not a JSON object")]
    NotAnObject,

    #[error("response has no `homeworks` key")]
    MissingHomeworksKey,

    #[error("`homeworks` is not a list")]
    HomeworksNotAList,

    #[error("homework record has no `{0}` field")]
    MissingField(&'static str),

    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),
}
