use std::env;

use anyhow::{Result, anyhow};
use teloxide::types::{ChatId, Recipient};

pub const PRACTICUM_TOKEN_ENV: &str = "PRACTICUM_TOKEN";
pub const TELEGRAM_TOKEN_ENV: &str = "TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TELEGRAM_CHAT_ID";

/// Credentials the bot needs for its whole lifetime.
///
/// All three are mandatory; a missing or empty value aborts startup before
/// any HTTP or Telegram call is made.
#[derive(Debug, Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub chat_id: Recipient,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(PRACTICUM_TOKEN_ENV).ok(),
            env::var(TELEGRAM_TOKEN_ENV).ok(),
            env::var(TELEGRAM_CHAT_ID_ENV).ok(),
        )
    }

    fn from_vars(
        practicum_token: Option<String>,
        telegram_token: Option<String>,
        chat_id: Option<String>,
    ) -> Result<Self> {
        let practicum_token = require(PRACTICUM_TOKEN_ENV, practicum_token)?;
        let telegram_token = require(TELEGRAM_TOKEN_ENV, telegram_token)?;
        let chat_id = parse_chat_id(&require(TELEGRAM_CHAT_ID_ENV, chat_id)?)?;

        Ok(Self {
            practicum_token,
            telegram_token,
            chat_id,
        })
    }
}

fn require(name: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(anyhow!("{name} environment variable is required")),
    }
}

// Telegram addresses chats either by numeric id or by public @username.
fn parse_chat_id(raw: &str) -> Result<Recipient> {
    let raw = raw.trim();
    if raw.starts_with('@') {
        return Ok(Recipient::ChannelUsername(raw.to_string()));
    }
    raw.parse::<i64>().map(ChatId).map(Recipient::Id).map_err(|_| {
        anyhow!("{TELEGRAM_CHAT_ID_ENV} must be a numeric chat id or an @username")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_set() -> (Option<String>, Option<String>, Option<String>) {
        (
            Some("practicum-token".to_string()),
            Some("telegram-token".to_string()),
            Some("123456789".to_string()),
        )
    }

    #[test]
    fn loads_when_all_tokens_present() {
        let (practicum, telegram, chat) = all_set();
        let config = Config::from_vars(practicum, telegram, chat).expect("config should load");
        assert_eq!(config.practicum_token, "practicum-token");
        assert_eq!(config.telegram_token, "telegram-token");
        assert_eq!(config.chat_id, Recipient::Id(ChatId(123456789)));
    }

    #[test]
    fn accepts_channel_username_chat_id() {
        let (practicum, telegram, _) = all_set();
        let config = Config::from_vars(practicum, telegram, Some("@my_channel".to_string()))
            .expect("config should load");
        assert_eq!(
            config.chat_id,
            Recipient::ChannelUsername("@my_channel".to_string())
        );
    }

    #[test]
    fn rejects_missing_practicum_token() {
        let (_, telegram, chat) = all_set();
        let err = Config::from_vars(None, telegram, chat).unwrap_err();
        assert!(err.to_string().contains(PRACTICUM_TOKEN_ENV));
    }

    #[test]
    fn rejects_missing_telegram_token() {
        let (practicum, _, chat) = all_set();
        let err = Config::from_vars(practicum, None, chat).unwrap_err();
        assert!(err.to_string().contains(TELEGRAM_TOKEN_ENV));
    }

    #[test]
    fn rejects_missing_chat_id() {
        let (practicum, telegram, _) = all_set();
        let err = Config::from_vars(practicum, telegram, None).unwrap_err();
        assert!(err.to_string().contains(TELEGRAM_CHAT_ID_ENV));
    }

    #[test]
    fn rejects_blank_token() {
        let (_, telegram, chat) = all_set();
        let err = Config::from_vars(Some("   ".to_string()), telegram, chat).unwrap_err();
        assert!(err.to_string().contains(PRACTICUM_TOKEN_ENV));
    }

    #[test]
    fn rejects_malformed_chat_id() {
        let (practicum, telegram, _) = all_set();
        let err =
            Config::from_vars(practicum, telegram, Some("not-a-chat".to_string())).unwrap_err();
        assert!(err.to_string().contains("numeric chat id"));
    }
}
