use anyhow::Result;
use async_trait::async_trait;
use teloxide::Bot;
use teloxide::prelude::{Request, Requester};
use teloxide::types::Recipient;

/// Outbound message sink.
///
/// The poller only ever needs "deliver this text once"; putting a trait at
/// that seam keeps the loop testable without a live bot.
#[async_trait]
pub trait Notify {
    /// Attempts one delivery. No retry; failure is logged at the send site
    /// and reported to the caller, which must not treat it as fatal.
    async fn send(&self, text: &str) -> Result<()>;
}

/// Sends notifications to a single Telegram chat.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    chat_id: Recipient,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(bot: Bot, chat_id: Recipient) -> Self {
        Self { bot, chat_id }
    }
}

#[async_trait]
impl Notify for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<()> {
        match self.bot.send_message(self.chat_id.clone(), text).send().await {
            Ok(_) => {
                tracing::debug!("notification delivered");
                Ok(())
            }
            Err(err) => {
                tracing::error!("failed to deliver notification: {err}");
                Err(err.into())
            }
        }
    }
}
