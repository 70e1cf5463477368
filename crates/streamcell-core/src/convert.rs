//! Conversions from raw cell payloads to typed values
//!
//! All functions here are pure: they take the raw payload and, where needed,
//! the cell's current [`CellKind`], and never touch the cell itself.

use crate::error::{Error, Result};
use crate::kind::CellKind;
use crate::value::{CellError, RichText};

const TRUE_AS_STRING: &str = "1";

/// Raw token for a cell that explicitly carries no error
pub const NO_ERROR_TOKEN: &str = "(no error)";

/// Legacy code for [`NO_ERROR_TOKEN`]
pub const NO_ERROR_CODE: i8 = -1;

/// Text view of the content; absent content is the empty string
pub fn to_text(content: Option<&str>) -> String {
    content.map(str::to_string).unwrap_or_default()
}

/// Parse the raw payload as a number; absent payload is `0.0`
///
/// The grammar is the locale-independent float literal grammar, so `1,5`
/// is rejected while `1.5`, `-2e3` and ` 7 ` are accepted.
pub fn to_number(raw: Option<&str>) -> Result<f64> {
    match raw {
        None => Ok(0.0),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::MalformedNumeric(raw.to_string())),
    }
}

/// Boolean view of the raw payload
///
/// Only boolean and blank cells convert. Formula cells are refused outright
/// even though their cached result may be boolean.
pub fn to_boolean(kind: CellKind, raw: Option<&str>) -> Result<bool> {
    match kind {
        CellKind::Blank => Ok(false),
        CellKind::Boolean => Ok(raw == Some(TRUE_AS_STRING)),
        CellKind::Formula => Err(Error::UnsupportedOperation(
            "boolean value of a formula cell",
        )),
        actual => Err(Error::type_mismatch(CellKind::Boolean, actual)),
    }
}

/// Rich-text view of the content; only blank and text cells convert
pub fn to_rich_text(kind: CellKind, content: Option<&str>) -> Result<RichText> {
    match kind {
        CellKind::Blank => Ok(RichText::default()),
        CellKind::Text => Ok(RichText::new(to_text(content))),
        _ => Err(Error::UnsupportedOperation("rich text value of a non-text cell")),
    }
}

/// Map an error token to its legacy single-byte error code
pub fn legacy_error_code(token: Option<&str>) -> Result<i8> {
    match token {
        Some(NO_ERROR_TOKEN) => Ok(NO_ERROR_CODE),
        Some(token) => CellError::from_token(token)
            .map(|e| e.code() as i8)
            .ok_or(Error::UnsupportedOperation("unknown error token")),
        None => Err(Error::UnsupportedOperation("error code of an empty cell")),
    }
}
