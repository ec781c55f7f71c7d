//! HTTP check-in backend.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::{CheckinBackend, CheckinError, CheckinOutcome, CheckinResult};

pub const CHECKIN_PATH: &str = "/api/checkin/checkin";
pub const BOOKING_PATH: &str = "/createBooking";

/// Talks to the check-in service over JSON POSTs.
#[derive(Clone, Debug)]
pub struct HttpCheckinBackend {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpCheckinBackend {
    /// Creates a backend rooted at `base_url`. Each request gives up after
    /// `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, path: &str, body: serde_json::Value) -> CheckinOutcome<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| CheckinError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckinError::Status(status.as_u16()));
        }
        Ok(response)
    }
}

#[async_trait]
impl CheckinBackend for HttpCheckinBackend {
    async fn checkin(&self, phone: &str) -> CheckinOutcome<CheckinResult> {
        let response = self.post(CHECKIN_PATH, json!({ "phone": phone })).await?;
        let body = response
            .text()
            .await
            .map_err(|e| CheckinError::Transport(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| CheckinError::MalformedBody(e.to_string()))
    }

    async fn create_booking(&self, phone: &str) -> CheckinOutcome<()> {
        self.post(BOOKING_PATH, json!({ "customer_phone": phone }))
            .await
            .map(|_| ())
    }
}
