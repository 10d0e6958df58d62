use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use crate::error::PollError;

const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

// Keeps a stalled endpoint from blocking the cycle forever; a timeout is a
// connectivity error like any other transport failure.
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the homework-review API.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    http: reqwest::Client,
    token: String,
}

impl PracticumClient {
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            http,
            token: token.into(),
        })
    }

    /// Fetches review events newer than `from_date` (epoch seconds).
    ///
    /// Any transport failure or non-200 response is a connectivity error;
    /// the body is returned as raw JSON for the caller to validate.
    pub async fn homework_statuses(&self, from_date: u64) -> Result<Value, PollError> {
        let response = self
            .http
            .get(ENDPOINT)
            .query(&[("from_date", from_date)])
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(PollError::Endpoint(response.status()));
        }

        Ok(response.json().await?)
    }
}
