//! Number format metadata
//!
//! Cells carry the number format of their style through unchanged. The model
//! never formats values, and the typed accessors never look at the format.
//! [`NumberFormat::is_date_format`] is a separate helper for callers that want
//! to know whether a numeric cell is meant to be shown as a date.

/// Number format of a cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Built-in format by ID
    BuiltIn(u16),

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// 0 - General
    pub const ID_GENERAL: u16 = 0;
    /// 14 - mm-dd-yy
    pub const ID_DATE_SHORT: u16 = 14;
    /// 22 - m/d/yy h:mm
    pub const ID_DATETIME: u16 = 22;
    /// 45 - mm:ss
    pub const ID_TIME_MINUTES: u16 = 45;
    /// 47 - mmss.0
    pub const ID_TIME_TENTHS: u16 = 47;

    /// Build the format from a cell's format code and format index
    ///
    /// The code wins when both are present, unless it is just the built-in
    /// string for that index.
    pub fn from_parts(code: Option<&str>, index: Option<u16>) -> Self {
        match (code, index) {
            (Some(code), Some(id)) if Self::builtin_format_string(id) == Some(code) => {
                Self::from_id(id)
            }
            (Some("General"), _) => NumberFormat::General,
            (Some(code), _) => NumberFormat::Custom(code.to_string()),
            (None, Some(id)) => Self::from_id(id),
            (None, None) => NumberFormat::General,
        }
    }

    /// Create a built-in format by ID
    pub fn from_id(id: u16) -> Self {
        if id == Self::ID_GENERAL {
            NumberFormat::General
        } else {
            NumberFormat::BuiltIn(id)
        }
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::BuiltIn(id) => Self::builtin_format_string(*id).unwrap_or("General"),
            NumberFormat::Custom(s) => s,
        }
    }

    /// Get built-in format string by ID
    fn builtin_format_string(id: u16) -> Option<&'static str> {
        let s = match id {
            0 => "General",
            1 => "0",
            2 => "0.00",
            3 => "#,##0",
            4 => "#,##0.00",
            9 => "0%",
            10 => "0.00%",
            11 => "0.00E+00",
            12 => "# ?/?",
            13 => "# ??/??",
            14 => "mm-dd-yy",
            15 => "d-mmm-yy",
            16 => "d-mmm",
            17 => "mmm-yy",
            18 => "h:mm AM/PM",
            19 => "h:mm:ss AM/PM",
            20 => "h:mm",
            21 => "h:mm:ss",
            22 => "m/d/yy h:mm",
            37 => "#,##0 ;(#,##0)",
            38 => "#,##0 ;[Red](#,##0)",
            39 => "#,##0.00;(#,##0.00)",
            40 => "#,##0.00;[Red](#,##0.00)",
            45 => "mm:ss",
            46 => "[h]:mm:ss",
            47 => "mmss.0",
            48 => "##0.0E+0",
            49 => "@",
            _ => return None,
        };
        Some(s)
    }

    /// Check if this is a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::BuiltIn(id) => matches!(
                *id,
                Self::ID_DATE_SHORT..=Self::ID_DATETIME | Self::ID_TIME_MINUTES..=Self::ID_TIME_TENTHS
            ),
            NumberFormat::Custom(s) => is_date_pattern(s),
            NumberFormat::General => false,
        }
    }
}

/// Check the first section of a custom format for date/time placeholders
///
/// Quoted literals, escaped characters, fill/padding characters and bracketed
/// sections (colors, conditions, locales) are ignored. Elapsed-time brackets
/// such as `[h]` count as time.
fn is_date_pattern(code: &str) -> bool {
    let section = code.split(';').next().unwrap_or_default();
    let mut chars = section.chars();
    let mut in_quote = false;
    let mut bare = String::with_capacity(section.len());

    while let Some(c) = chars.next() {
        match c {
            '"' => in_quote = !in_quote,
            _ if in_quote => {}
            '\\' | '_' | '*' => {
                chars.next();
            }
            '[' => {
                let inner: String = chars.by_ref().take_while(|&c| c != ']').collect();
                if !inner.is_empty()
                    && inner
                        .chars()
                        .all(|c| matches!(c.to_ascii_lowercase(), 'h' | 'm' | 's'))
                {
                    return true;
                }
            }
            c => bare.push(c.to_ascii_lowercase()),
        }
    }

    if bare.contains("general") {
        return false;
    }
    bare.chars().any(|c| matches!(c, 'y' | 'm' | 'd' | 'h' | 's'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts() {
        assert_eq!(NumberFormat::from_parts(None, None), NumberFormat::General);
        assert_eq!(NumberFormat::from_parts(None, Some(0)), NumberFormat::General);
        assert_eq!(
            NumberFormat::from_parts(Some("mm-dd-yy"), Some(14)),
            NumberFormat::BuiltIn(14)
        );
        assert_eq!(
            NumberFormat::from_parts(Some("yyyy-mm-dd"), Some(164)),
            NumberFormat::Custom("yyyy-mm-dd".into())
        );
        assert_eq!(
            NumberFormat::from_parts(Some("General"), Some(164)),
            NumberFormat::General
        );
    }

    #[test]
    fn test_format_string() {
        assert_eq!(NumberFormat::BuiltIn(4).format_string(), "#,##0.00");
        assert_eq!(NumberFormat::BuiltIn(200).format_string(), "General");
        assert_eq!(NumberFormat::Custom("0.0".into()).format_string(), "0.0");
    }

    #[test]
    fn test_builtin_date_formats() {
        for id in [14, 15, 18, 22, 45, 46, 47] {
            assert!(NumberFormat::BuiltIn(id).is_date_format(), "id {id}");
        }
        for id in [1, 2, 9, 11, 37, 48, 49] {
            assert!(!NumberFormat::BuiltIn(id).is_date_format(), "id {id}");
        }
        assert!(!NumberFormat::General.is_date_format());
    }

    #[test]
    fn test_custom_date_formats() {
        let is_date = |s: &str| NumberFormat::Custom(s.into()).is_date_format();
        assert!(is_date("yyyy-mm-dd"));
        assert!(is_date("dd/mm/yyyy hh:mm"));
        assert!(is_date("[h]:mm:ss"));
        assert!(is_date("[$-409]mmmm d, yyyy"));
        assert!(!is_date("0.00"));
        assert!(!is_date("#,##0 \"days\""));
        assert!(!is_date("[Red]0.00"));
        assert!(!is_date("0\\d"));
        assert!(!is_date("@"));
        assert!(!is_date("General;[Red]-General"));
    }
}
