use thiserror::Error;

use crate::schema::{LbType, LocalBody, RawLocalBody};

/// A raw record that could not be split into code and name
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("record text is empty")]
    EmptyText,
    #[error("no hyphen in record text: {0:?}")]
    MissingHyphen(String),
    #[error("empty code in record text: {0:?}")]
    EmptyCode(String),
    #[error("empty name in record text: {0:?}")]
    EmptyName(String),
}

/// Normalize one raw SEC record into a `LocalBody`.
///
/// The text is split on the FIRST hyphen only; names like "Kochi-North"
/// keep their remaining hyphens. `district_code` must be the owning
/// district's code, it is never derived from the record itself.
pub fn normalize_record(raw: &RawLocalBody, district_code: &str) -> Result<LocalBody, ParseError> {
    let text = raw.text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyText);
    }

    let (code, name) = text
        .split_once('-')
        .ok_or_else(|| ParseError::MissingHyphen(text.to_string()))?;

    let code = code.trim();
    let name = name.trim();

    if code.is_empty() {
        return Err(ParseError::EmptyCode(text.to_string()));
    }
    if name.is_empty() {
        return Err(ParseError::EmptyName(text.to_string()));
    }

    Ok(LocalBody {
        lb_code: code.to_string(),
        lb_name: name.to_string(),
        lb_type: LbType::classify(code),
        district_code: district_code.to_string(),
        sec_object_id: raw.value.clone(),
        full_name: text.to_string(),
    })
}
