use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde_json::Value;

use crate::api::PracticumClient;
use crate::error::PollError;
use crate::homework::{check_response, parse_status};
use crate::notify::Notify;

// Fixed cadence: connectivity failures retry at the same interval, with no
// jitter, backoff, or circuit breaker.
pub const RETRY_PERIOD: Duration = Duration::from_secs(600);

const STARTUP_MESSAGE: &str = "Начало работы";

/// The poll/compare/notify loop and its per-process state.
///
/// `last_sent` starts empty on every launch and is updated only after a
/// successful delivery, so an unchanged status is never re-announced and a
/// failed delivery is retried on the next status comparison.
pub struct Poller<N> {
    client: PracticumClient,
    notifier: N,
    last_sent: String,
    interval: Duration,
}

impl<N: Notify> Poller<N> {
    pub fn new(client: PracticumClient, notifier: N) -> Self {
        Self {
            client,
            notifier,
            last_sent: String::new(),
            interval: RETRY_PERIOD,
        }
    }

    /// Runs forever; only an external signal stops the process.
    pub async fn run(&mut self) {
        // Best effort, like every other notification.
        let _ = self.notifier.send(STARTUP_MESSAGE).await;

        let mut timestamp = unix_now();
        loop {
            if let Err(err) = self.poll_once(timestamp).await {
                self.report_failure(&err).await;
            }
            // The next query only asks for events after this check, whether
            // or not the fetch succeeded.
            timestamp = unix_now();
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Logs a failed cycle and relays it to the chat. The relay is best
    /// effort; a refused delivery is already logged at the send site and
    /// never stops the loop.
    async fn report_failure(&self, err: &PollError) {
        tracing::error!("poll cycle failed: {err}");
        let _ = self
            .notifier
            .send(&format!("Сбой в работе программы: {err}"))
            .await;
    }

    async fn poll_once(&mut self, timestamp: u64) -> Result<(), PollError> {
        let response = self.client.homework_statuses(timestamp).await?;
        self.process_response(&response).await
    }

    /// Validates one response and notifies the chat if the newest homework's
    /// status sentence changed since the last successful send.
    pub async fn process_response(&mut self, response: &Value) -> Result<(), PollError> {
        let homeworks = check_response(response)?;

        // The API returns homeworks newest-first; the first element is
        // trusted as the most recent submission and the list is not re-sorted.
        let Some(newest) = homeworks.first() else {
            tracing::debug!("no homework updates in the polled window");
            return Ok(());
        };

        let message = parse_status(newest)?;
        if message == self.last_sent {
            tracing::debug!("homework status unchanged, nothing to send");
            return Ok(());
        }

        if self.notifier.send(&message).await.is_ok() {
            self.last_sent = message;
        }
        Ok(())
    }

    #[must_use]
    pub fn last_sent(&self) -> &str {
        &self.last_sent
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
