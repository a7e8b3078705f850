use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::thread;
use std::time::Duration;

use super::{FetchError, FetchLocalBodies, LbResponse};

/// Kerala State Election Commission local-body listing endpoint
pub const SEC_LB_URL: &str = "https://sec.kerala.gov.in/public/getalllbcmp/byd";

/// Total attempts per district, including the first
const RETRY_ATTEMPTS: usize = 5;

/// Base delay; doubles after every failed attempt
const BACKOFF_BASE: Duration = Duration::from_millis(200);

/// Blocking client for the SEC endpoint.
///
/// One instance is reused for all 14 district calls so the underlying
/// connection stays alive across requests.
pub struct SecClient {
    client: Client,
    endpoint: String,
}

impl SecClient {
    pub fn new(endpoint: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("kerala-lsg-to-sqlite")
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.unwrap_or_else(|| SEC_LB_URL.to_string()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// One POST attempt
    fn attempt(&self, district_objid: i64) -> std::result::Result<LbResponse, AttemptError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("objid={}", district_objid))
            .send()
            .map_err(|e| AttemptError::Transient(format!("request error: {}", e)))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(AttemptError::Transient(format!("server error: {}", status)));
        }
        if !status.is_success() {
            return Err(AttemptError::Fatal(FetchError::Status { status }));
        }

        let text = response
            .text()
            .map_err(|e| AttemptError::Transient(format!("failed to read response body: {}", e)))?;
        serde_json::from_str(&text).map_err(|e| AttemptError::Fatal(FetchError::Body(e.to_string())))
    }
}

/// Outcome of a single failed attempt
enum AttemptError {
    /// Transport error or 5xx; eligible for another attempt
    Transient(String),
    /// Surfaces immediately, no retry
    Fatal(FetchError),
}

impl FetchLocalBodies for SecClient {
    fn fetch_local_bodies(&self, district_objid: i64) -> Result<LbResponse, FetchError> {
        let mut last_error = String::new();

        for attempt in 1..=RETRY_ATTEMPTS {
            match self.attempt(district_objid) {
                Ok(response) => return Ok(response),
                Err(AttemptError::Fatal(err)) => return Err(err),
                Err(AttemptError::Transient(message)) => last_error = message,
            }
            if attempt < RETRY_ATTEMPTS {
                thread::sleep(backoff_delay(attempt));
            }
        }

        Err(FetchError::Exhausted {
            attempts: RETRY_ATTEMPTS,
            last_error,
        })
    }
}

/// Delay before the attempt following failed attempt number `attempt`
fn backoff_delay(attempt: usize) -> Duration {
    BACKOFF_BASE * (1u32 << (attempt - 1))
}
