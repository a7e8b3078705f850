pub mod client;

pub use client::*;

use crate::schema::RawLocalBody;

/// Fetch seam for the driver. The binary uses [`SecClient`]; tests use fakes.
pub trait FetchLocalBodies {
    fn fetch_local_bodies(&self, district_objid: i64) -> Result<LbResponse, FetchError>;
}

/// Parsed response from the SEC local-body endpoint.
///
/// A missing `ops1` field means zero records for the district, not an
/// error, but callers can log the two cases apart.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct LbResponse {
    pub ops1: Option<Vec<RawLocalBody>>,
}

impl LbResponse {
    pub fn records(&self) -> &[RawLocalBody] {
        self.ops1.as_deref().unwrap_or(&[])
    }
}

/// A fetch that did not produce a usable response
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport errors and 5xx responses, surfaced only once the retry
    /// budget is spent
    #[error("gave up after {attempts} attempts: {last_error}")]
    Exhausted { attempts: usize, last_error: String },
    /// Non-transient response (4xx). Not retried.
    #[error("endpoint returned {status}")]
    Status { status: reqwest::StatusCode },
    /// Response body that is not the expected JSON shape. Not retried.
    #[error("unexpected response body: {0}")]
    Body(String),
}
