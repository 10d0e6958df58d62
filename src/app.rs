use anyhow::Result;
use teloxide::Bot;

use crate::api::PracticumClient;
use crate::config::Config;
use crate::notify::TelegramNotifier;
use crate::poller::Poller;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

/// Wires the client, notifier, and poller together and runs the loop.
pub async fn run(config: Config) -> Result<()> {
    let client = PracticumClient::new(config.practicum_token)?;
    let bot = Bot::new(config.telegram_token);
    let notifier = TelegramNotifier::new(bot, config.chat_id);

    tracing::info!("homework status bot started");
    let mut poller = Poller::new(client, notifier);
    poller.run().await;

    Ok(())
}
