//! The wide read/write cell shape
//!
//! Callers written against a full spreadsheet cell interface expect one
//! object that can both read and write a cell. A streamed cell is read-only, so
//! [`LegacyCell`] forwards the reads to [`StreamingCell`] and every write
//! (plus the comment, hyperlink and array-formula lookups, which the stream
//! never carries) fails with [`Error::UnsupportedOperation`] without touching
//! the cell.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::cell::StreamingCell;
use crate::error::{Error, Result};
use crate::kind::CellKind;
use crate::row::RowRef;
use crate::style::StyleRef;
use crate::value::RichText;

/// A cell comment (note)
#[derive(Debug, Clone, PartialEq)]
pub struct CellComment {
    /// Author of the comment
    pub author: String,
    /// Comment text content
    pub text: String,
}

impl CellComment {
    /// Create a new comment with the given author and text
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// A hyperlink attached to a cell
#[derive(Debug, Clone, PartialEq)]
pub struct Hyperlink {
    /// Link target (URL or in-workbook reference)
    pub target: String,
}

/// Zero-based bounds of an array-formula group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayFormulaRange {
    pub first_row: u32,
    pub first_col: u16,
    pub last_row: u32,
    pub last_col: u16,
}

/// Payload of [`LegacyCell::set_cell_value`]
#[derive(Debug, Clone, PartialEq)]
pub enum LegacyValue {
    Number(f64),
    Date(DateTime<Local>),
    LocalDateTime(NaiveDateTime),
    RichText(RichText),
    String(String),
    Boolean(bool),
}

fn unsupported<T>(operation: &'static str) -> Result<T> {
    log::debug!("rejected unsupported cell operation '{}'", operation);
    Err(Error::UnsupportedOperation(operation))
}

/// The legacy cell shape
///
/// Implementors provide the read side; the write side is fixed to fail.
pub trait LegacyCell {
    fn get_cell_type(&self) -> Result<CellKind>;
    fn get_string_cell_value(&self) -> String;
    fn get_numeric_cell_value(&self) -> Result<f64>;
    fn get_date_cell_value(&self) -> Result<Option<DateTime<Local>>>;
    fn get_local_date_time_cell_value(&self) -> Result<Option<NaiveDateTime>>;
    fn get_boolean_cell_value(&self) -> Result<bool>;
    fn get_rich_string_cell_value(&self) -> Result<RichText>;
    fn get_error_cell_value(&self) -> Result<i8>;
    fn get_cell_formula(&self) -> Result<String>;
    fn get_cached_formula_result_type(&self) -> Result<CellKind>;
    fn get_column_index(&self) -> u16;
    fn get_row_index(&self) -> u32;
    fn get_row(&self) -> Option<RowRef>;
    fn get_cell_style(&self) -> Option<StyleRef>;

    fn set_cell_type(&mut self, _kind: CellKind) -> Result<()> {
        unsupported("set_cell_type")
    }

    fn set_cell_value(&mut self, _value: LegacyValue) -> Result<()> {
        unsupported("set_cell_value")
    }

    fn set_cell_formula(&mut self, _formula: &str) -> Result<()> {
        unsupported("set_cell_formula")
    }

    fn set_cell_error_value(&mut self, _code: i8) -> Result<()> {
        unsupported("set_cell_error_value")
    }

    fn set_as_active_cell(&mut self) -> Result<()> {
        unsupported("set_as_active_cell")
    }

    fn set_cell_comment(&mut self, _comment: CellComment) -> Result<()> {
        unsupported("set_cell_comment")
    }

    fn get_cell_comment(&self) -> Result<CellComment> {
        unsupported("get_cell_comment")
    }

    fn remove_cell_comment(&mut self) -> Result<()> {
        unsupported("remove_cell_comment")
    }

    fn get_hyperlink(&self) -> Result<Hyperlink> {
        unsupported("get_hyperlink")
    }

    fn set_hyperlink(&mut self, _link: Hyperlink) -> Result<()> {
        unsupported("set_hyperlink")
    }

    fn remove_hyperlink(&mut self) -> Result<()> {
        unsupported("remove_hyperlink")
    }

    fn get_array_formula_range(&self) -> Result<ArrayFormulaRange> {
        unsupported("get_array_formula_range")
    }

    fn is_part_of_array_formula_group(&self) -> Result<bool> {
        unsupported("is_part_of_array_formula_group")
    }

    fn set_blank(&mut self) -> Result<()> {
        unsupported("set_blank")
    }

    fn remove_formula(&mut self) -> Result<()> {
        unsupported("remove_formula")
    }
}

impl LegacyCell for StreamingCell {
    fn get_cell_type(&self) -> Result<CellKind> {
        self.kind()
    }

    fn get_string_cell_value(&self) -> String {
        self.as_text()
    }

    fn get_numeric_cell_value(&self) -> Result<f64> {
        self.as_number()
    }

    fn get_date_cell_value(&self) -> Result<Option<DateTime<Local>>> {
        self.as_date()
    }

    fn get_local_date_time_cell_value(&self) -> Result<Option<NaiveDateTime>> {
        self.as_local_date_time()
    }

    fn get_boolean_cell_value(&self) -> Result<bool> {
        self.as_boolean()
    }

    fn get_rich_string_cell_value(&self) -> Result<RichText> {
        self.as_rich_text()
    }

    fn get_error_cell_value(&self) -> Result<i8> {
        self.as_error_code()
    }

    fn get_cell_formula(&self) -> Result<String> {
        self.formula_expression().map(str::to_string)
    }

    fn get_cached_formula_result_type(&self) -> Result<CellKind> {
        self.cached_result_kind()
    }

    fn get_column_index(&self) -> u16 {
        self.column_index()
    }

    fn get_row_index(&self) -> u32 {
        self.row_index()
    }

    fn get_row(&self) -> Option<RowRef> {
        self.row().cloned()
    }

    fn get_cell_style(&self) -> Option<StyleRef> {
        self.style().cloned()
    }
}
