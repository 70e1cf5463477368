//! Raw cell type tags and cell classification
//!
//! The sheet XML marks every `<c>` element with a `t` attribute. This module
//! maps that tag, together with whether the cell has content and whether it
//! carries a formula, onto a [`CellKind`].

use std::fmt;

use crate::error::{Error, Result};

/// Raw type tag of a cell, as written in the `t` attribute of a sheet cell
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellTypeTag {
    /// `n` - number (also the implied default)
    Numeric,
    /// `s` - index into the shared string table
    SharedString,
    /// `inlineStr` - string stored inside the cell
    InlineString,
    /// `str` - string result of a formula
    String,
    /// `f` - formula
    Formula,
    /// `b` - boolean stored as `0` / `1`
    Boolean,
    /// `e` - error token such as `#DIV/0!`
    Error,
    /// Any tag outside the vocabulary, kept verbatim
    Unknown(String),
}

impl CellTypeTag {
    /// Parse the tag from its XML token
    pub fn from_xml(token: &str) -> Self {
        match token {
            "n" => CellTypeTag::Numeric,
            "s" => CellTypeTag::SharedString,
            "inlineStr" => CellTypeTag::InlineString,
            "str" => CellTypeTag::String,
            "f" => CellTypeTag::Formula,
            "b" => CellTypeTag::Boolean,
            "e" => CellTypeTag::Error,
            other => CellTypeTag::Unknown(other.to_string()),
        }
    }

    /// The XML token for this tag
    pub fn as_xml(&self) -> &str {
        match self {
            CellTypeTag::Numeric => "n",
            CellTypeTag::SharedString => "s",
            CellTypeTag::InlineString => "inlineStr",
            CellTypeTag::String => "str",
            CellTypeTag::Formula => "f",
            CellTypeTag::Boolean => "b",
            CellTypeTag::Error => "e",
            CellTypeTag::Unknown(token) => token,
        }
    }

    /// Check if the tag denotes text content
    pub fn is_text(&self) -> bool {
        matches!(
            self,
            CellTypeTag::SharedString | CellTypeTag::InlineString | CellTypeTag::String
        )
    }
}

impl fmt::Display for CellTypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_xml())
    }
}

impl From<&str> for CellTypeTag {
    fn from(token: &str) -> Self {
        CellTypeTag::from_xml(token)
    }
}

/// Classification of a cell's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Blank,
    Numeric,
    Text,
    Formula,
    Boolean,
    Error,
}

impl CellKind {
    /// Lower-case name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            CellKind::Blank => "blank",
            CellKind::Numeric => "numeric",
            CellKind::Text => "text",
            CellKind::Formula => "formula",
            CellKind::Boolean => "boolean",
            CellKind::Error => "error",
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a cell from its raw tag, content presence and formula flag
///
/// The formula flag wins over everything else. Without content or without a
/// tag the cell is blank.
pub fn classify(tag: Option<&CellTypeTag>, has_content: bool, is_formula: bool) -> Result<CellKind> {
    if is_formula {
        return Ok(CellKind::Formula);
    }
    let tag = match tag {
        Some(tag) if has_content => tag,
        _ => return Ok(CellKind::Blank),
    };
    match tag {
        CellTypeTag::Formula => Ok(CellKind::Formula),
        other => literal_kind(other),
    }
}

/// Classify the cached result of a formula cell
///
/// Uses the same tag mapping as [`classify`] but has no formula case.
pub fn classify_cached_result(
    tag: Option<&CellTypeTag>,
    has_content: bool,
    is_formula: bool,
) -> Result<CellKind> {
    if !is_formula {
        return Err(Error::InvalidState("only formula cells have cached results"));
    }
    match tag {
        Some(tag) if has_content => literal_kind(tag),
        _ => Ok(CellKind::Blank),
    }
}

fn literal_kind(tag: &CellTypeTag) -> Result<CellKind> {
    match tag {
        CellTypeTag::Numeric => Ok(CellKind::Numeric),
        CellTypeTag::SharedString | CellTypeTag::InlineString | CellTypeTag::String => {
            Ok(CellKind::Text)
        }
        CellTypeTag::Boolean => Ok(CellKind::Boolean),
        CellTypeTag::Error => Ok(CellKind::Error),
        CellTypeTag::Formula | CellTypeTag::Unknown(_) => {
            log::debug!("unsupported cell type tag '{}'", tag);
            Err(Error::UnsupportedCellType(tag.as_xml().to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip_tokens() {
        for token in ["n", "s", "inlineStr", "str", "f", "b", "e"] {
            assert_eq!(CellTypeTag::from_xml(token).as_xml(), token);
        }
        assert_eq!(
            CellTypeTag::from_xml("d"),
            CellTypeTag::Unknown("d".to_string())
        );
    }

    #[test]
    fn test_formula_flag_dominates() {
        let tags = [
            None,
            Some(CellTypeTag::Numeric),
            Some(CellTypeTag::Boolean),
            Some(CellTypeTag::Unknown("zz".into())),
        ];
        for tag in &tags {
            assert_eq!(classify(tag.as_ref(), false, true), Ok(CellKind::Formula));
            assert_eq!(classify(tag.as_ref(), true, true), Ok(CellKind::Formula));
        }
    }

    #[test]
    fn test_blank_without_tag_or_content() {
        assert_eq!(classify(None, true, false), Ok(CellKind::Blank));
        assert_eq!(
            classify(Some(&CellTypeTag::Numeric), false, false),
            Ok(CellKind::Blank)
        );
        // An unknown tag is never inspected when there is no content
        assert_eq!(
            classify(Some(&CellTypeTag::Unknown("zz".into())), false, false),
            Ok(CellKind::Blank)
        );
    }

    #[test]
    fn test_literal_mapping() {
        let cases = [
            (CellTypeTag::Numeric, CellKind::Numeric),
            (CellTypeTag::SharedString, CellKind::Text),
            (CellTypeTag::InlineString, CellKind::Text),
            (CellTypeTag::String, CellKind::Text),
            (CellTypeTag::Formula, CellKind::Formula),
            (CellTypeTag::Boolean, CellKind::Boolean),
            (CellTypeTag::Error, CellKind::Error),
        ];
        for (tag, kind) in cases {
            assert_eq!(classify(Some(&tag), true, false), Ok(kind), "tag {tag}");
        }
    }

    #[test]
    fn test_unknown_tag_fails() {
        let err = classify(Some(&CellTypeTag::from_xml("d")), true, false).unwrap_err();
        assert_eq!(err, Error::UnsupportedCellType("d".into()));
    }

    #[test]
    fn test_cached_result_requires_formula() {
        let err = classify_cached_result(Some(&CellTypeTag::Numeric), true, false).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_cached_result_mapping() {
        let tag = |t: &str| CellTypeTag::from_xml(t);
        assert_eq!(
            classify_cached_result(Some(&tag("n")), true, true),
            Ok(CellKind::Numeric)
        );
        assert_eq!(
            classify_cached_result(Some(&tag("str")), true, true),
            Ok(CellKind::Text)
        );
        assert_eq!(
            classify_cached_result(Some(&tag("b")), true, true),
            Ok(CellKind::Boolean)
        );
        assert_eq!(
            classify_cached_result(Some(&tag("e")), true, true),
            Ok(CellKind::Error)
        );
        assert_eq!(
            classify_cached_result(Some(&tag("n")), false, true),
            Ok(CellKind::Blank)
        );
        assert_eq!(classify_cached_result(None, true, true), Ok(CellKind::Blank));
        assert_eq!(
            classify_cached_result(Some(&tag("f")), true, true),
            Err(Error::UnsupportedCellType("f".into()))
        );
    }
}
