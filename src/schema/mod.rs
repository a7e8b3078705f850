//! Core data model: districts, local bodies, and the raw SEC record shape

pub mod districts;

pub use districts::{district_by_code, DISTRICTS};

use serde::Deserialize;

/// A Kerala district from the static master list.
///
/// The master list is authoritative; districts are never derived from the
/// remote API. `district_objid` is the SEC API request key, `district_code`
/// the two-digit code local bodies reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct District {
    pub district_objid: i64,
    pub district_code: &'static str,
    pub district_name: &'static str,
}

/// Local-body classification, derived from the first character of `lb_code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LbType {
    /// Gram Panchayat (`G` prefix)
    Gp,
    /// Municipality (`M` prefix)
    Mun,
    /// Corporation (`C` prefix)
    Corp,
    /// Any other prefix
    Unknown,
}

impl LbType {
    /// Classify from the code's first character. Total: never fails.
    pub fn classify(code: &str) -> Self {
        match code.chars().next() {
            Some('G') => LbType::Gp,
            Some('M') => LbType::Mun,
            Some('C') => LbType::Corp,
            _ => LbType::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LbType::Gp => "GP",
            LbType::Mun => "MUN",
            LbType::Corp => "CORP",
            LbType::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for LbType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized local governing body, one row in `local_bodies`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBody {
    /// Unique code, first token of the raw "CODE-NAME" text. Primary key.
    pub lb_code: String,
    pub lb_name: String,
    pub lb_type: LbType,
    /// The OWNING district's two-digit code, supplied by the caller.
    /// Never sliced out of `lb_code`; the numbering schemes differ.
    pub district_code: String,
    /// Opaque SEC identifier for downstream look-ups against the API.
    pub sec_object_id: String,
    /// Original unparsed "CODE-NAME" text, kept for traceability.
    pub full_name: String,
}

/// One raw record as returned by the SEC endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLocalBody {
    /// "CODE-NAME" string, e.g. `"G07002-Kottuvally"`
    pub text: String,
    /// Opaque SEC object id
    pub value: String,
}
