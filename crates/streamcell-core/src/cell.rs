//! The streaming cell
//!
//! A [`StreamingCell`] is filled in by the sheet reader as it walks a `<c>`
//! element: coordinates first, then the raw type tag, the raw `<v>` text, an
//! optional formula and the style. Callers then read it through the typed
//! accessors, which classify the raw fields and convert on every call.
//!
//! The reader may reuse one instance for several cells. Values read from a
//! cell are stable only until the reader moves on; use
//! [`StreamingCell::to_value`] to keep a copy.

use chrono::{DateTime, Local, NaiveDateTime};

use crate::content::{ContentSource, LazyContent};
use crate::convert;
use crate::date::{self, DateSystem};
use crate::error::{Error, Result};
use crate::format::NumberFormat;
use crate::kind::{classify, classify_cached_result, CellKind, CellTypeTag};
use crate::row::RowRef;
use crate::style::StyleRef;
use crate::value::{CellError, CellValue, RichText};
use crate::{MAX_COLS, MAX_ROWS};

/// One cell of a streamed sheet
#[derive(Debug)]
pub struct StreamingCell {
    column_index: u16,
    row_index: u32,
    date_system: DateSystem,
    content: LazyContent,
    raw: Option<String>,
    tag: Option<CellTypeTag>,
    formula: Option<String>,
    is_formula: bool,
    numeric_format: Option<String>,
    numeric_format_index: Option<u16>,
    style: Option<StyleRef>,
    row: Option<RowRef>,
}

impl StreamingCell {
    /// Create an empty cell at the given zero-based coordinates
    pub fn new(column_index: u16, row_index: u32, date_system: DateSystem) -> Self {
        check_bounds(column_index, row_index);
        Self {
            column_index,
            row_index,
            date_system,
            content: LazyContent::absent(),
            raw: None,
            tag: None,
            formula: None,
            is_formula: false,
            numeric_format: None,
            numeric_format_index: None,
            style: None,
            row: None,
        }
    }

    // ===== Producer side =====

    /// Attach the source that resolves this cell's content on first use
    ///
    /// Replaces any earlier content, resolved or not. The new source runs on
    /// the next read.
    pub fn set_content_source<S>(&mut self, source: S)
    where
        S: ContentSource + 'static,
    {
        self.note_content_replaced();
        self.content = LazyContent::deferred(source);
    }

    /// Attach content that is already known
    pub fn set_content(&mut self, content: Option<String>) {
        self.note_content_replaced();
        self.content = LazyContent::ready(content);
    }

    fn note_content_replaced(&self) {
        if self.content.is_resolved() {
            log::trace!("replacing resolved content of {}", self.a1_reference());
        }
    }

    /// Set the raw text used by numeric, boolean and error conversions
    pub fn set_raw_contents(&mut self, raw: Option<String>) {
        self.raw = raw;
    }

    /// Set the raw type tag (`t` attribute)
    pub fn set_type_tag(&mut self, tag: Option<CellTypeTag>) {
        self.tag = tag;
    }

    /// Set the formula expression
    pub fn set_formula(&mut self, formula: Option<String>) {
        self.formula = formula;
    }

    /// Mark the cell as a formula cell
    pub fn set_formula_type(&mut self, is_formula: bool) {
        self.is_formula = is_formula;
    }

    /// Set the number format code of the cell's style
    pub fn set_numeric_format(&mut self, code: Option<String>) {
        self.numeric_format = code;
    }

    /// Set the number format index of the cell's style
    pub fn set_numeric_format_index(&mut self, index: Option<u16>) {
        self.numeric_format_index = index;
    }

    /// Set the cell's style
    pub fn set_style(&mut self, style: Option<StyleRef>) {
        self.style = style;
    }

    /// Set the row this cell belongs to
    pub fn set_row(&mut self, row: Option<RowRef>) {
        self.row = row;
    }

    /// Move a reused cell to new coordinates
    pub fn reposition(&mut self, column_index: u16, row_index: u32) {
        check_bounds(column_index, row_index);
        self.column_index = column_index;
        self.row_index = row_index;
    }

    /// Drop all content, tag, formula, format, style and row state
    ///
    /// Coordinates and the date system are kept.
    pub fn clear(&mut self) {
        self.content = LazyContent::absent();
        self.raw = None;
        self.tag = None;
        self.formula = None;
        self.is_formula = false;
        self.numeric_format = None;
        self.numeric_format_index = None;
        self.style = None;
        self.row = None;
    }

    // ===== Plain getters =====

    /// Zero-based column index
    pub fn column_index(&self) -> u16 {
        self.column_index
    }

    /// Zero-based row index
    pub fn row_index(&self) -> u32 {
        self.row_index
    }

    /// A1-style reference of the cell (e.g., "C7")
    pub fn a1_reference(&self) -> String {
        format!(
            "{}{}",
            column_to_letters(self.column_index),
            u64::from(self.row_index) + 1
        )
    }

    /// The workbook date system used for date conversions
    pub fn date_system(&self) -> DateSystem {
        self.date_system
    }

    /// The raw type tag, if any
    pub fn type_tag(&self) -> Option<&CellTypeTag> {
        self.tag.as_ref()
    }

    /// The raw text, if any
    pub fn raw_contents(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Check if the cell is flagged as a formula cell
    pub fn is_formula(&self) -> bool {
        self.is_formula
    }

    /// The cell's style, if any
    pub fn style(&self) -> Option<&StyleRef> {
        self.style.as_ref()
    }

    /// The row this cell belongs to, if the reader set one
    pub fn row(&self) -> Option<&RowRef> {
        self.row.as_ref()
    }

    /// The number format code, if any
    pub fn numeric_format(&self) -> Option<&str> {
        self.numeric_format.as_deref()
    }

    /// The number format index, if any
    pub fn numeric_format_index(&self) -> Option<u16> {
        self.numeric_format_index
    }

    /// The cell's number format, falling back to the style's
    pub fn number_format(&self) -> NumberFormat {
        match (&self.numeric_format, self.numeric_format_index, &self.style) {
            (None, None, Some(style)) => style.number_format.clone(),
            (code, index, _) => NumberFormat::from_parts(code.as_deref(), index),
        }
    }

    /// Check if the cell's number format displays a date or time
    pub fn is_date_formatted(&self) -> bool {
        self.number_format().is_date_format()
    }

    // ===== Typed accessors =====

    fn has_content(&self) -> bool {
        self.content.get().is_some()
    }

    /// Classify the cell
    pub fn kind(&self) -> Result<CellKind> {
        classify(self.tag.as_ref(), self.has_content(), self.is_formula)
    }

    /// Classify the cached result of a formula cell
    pub fn cached_result_kind(&self) -> Result<CellKind> {
        classify_cached_result(self.tag.as_ref(), self.has_content(), self.is_formula)
    }

    /// Check if a non-formula cell classifies as blank
    ///
    /// Same rule as [`classify`], without failing on unknown tags.
    fn is_literal_blank(&self) -> bool {
        !self.is_formula && (self.tag.is_none() || !self.has_content())
    }

    /// The content as text; blank cells give the empty string
    pub fn as_text(&self) -> String {
        if self.is_literal_blank() {
            return String::new();
        }
        convert::to_text(self.content.get())
    }

    /// The raw text as a number; blank cells give `0.0`
    pub fn as_number(&self) -> Result<f64> {
        if self.is_literal_blank() {
            return Ok(0.0);
        }
        convert::to_number(self.raw.as_deref())
    }

    /// The value as a date in the local time zone; blank cells give `None`
    pub fn as_date(&self) -> Result<Option<DateTime<Local>>> {
        if self.is_literal_blank() {
            return Ok(None);
        }
        if self.kind()? == CellKind::Text {
            return Err(Error::InvalidState("cannot get a date from a text cell"));
        }
        if self.raw.is_none() {
            return Ok(None);
        }
        let serial = self.as_number()?;
        Ok(date::serial_to_datetime(serial, self.date_system).map(date::to_local))
    }

    /// The value as a local wall-clock date and time
    pub fn as_local_date_time(&self) -> Result<Option<NaiveDateTime>> {
        Ok(self.as_date()?.map(|dt| dt.naive_local()))
    }

    /// The value as a boolean; blank cells give `false`
    pub fn as_boolean(&self) -> Result<bool> {
        convert::to_boolean(self.kind()?, self.raw.as_deref())
    }

    /// The value as rich text; only blank and text cells convert
    pub fn as_rich_text(&self) -> Result<RichText> {
        convert::to_rich_text(self.kind()?, self.content.get())
    }

    /// The legacy single-byte code of the cell's error token
    pub fn as_error_code(&self) -> Result<i8> {
        convert::legacy_error_code(self.raw.as_deref())
    }

    /// The formula expression of a formula cell
    pub fn formula_expression(&self) -> Result<&str> {
        if !self.is_formula {
            return Err(Error::InvalidState("this cell does not have a formula"));
        }
        Ok(self.formula.as_deref().unwrap_or_default())
    }

    /// Copy the typed value out of the cell
    ///
    /// Formula cells carry their cached result, classified with the same
    /// rules as literal cells.
    pub fn to_value(&self) -> Result<CellValue> {
        match self.kind()? {
            CellKind::Formula => {
                let cached = match self.cached_result_kind()? {
                    CellKind::Blank => None,
                    kind => Some(self.literal_value(kind)?),
                };
                Ok(CellValue::formula(self.formula_expression()?, cached))
            }
            kind => self.literal_value(kind),
        }
    }

    fn literal_value(&self, kind: CellKind) -> Result<CellValue> {
        let value = match kind {
            CellKind::Blank => CellValue::Empty,
            CellKind::Numeric => CellValue::Number(self.as_number()?),
            CellKind::Text => CellValue::String(self.as_text()),
            CellKind::Boolean => {
                CellValue::Boolean(convert::to_boolean(kind, self.raw.as_deref())?)
            }
            CellKind::Error => match self.raw.as_deref().and_then(CellError::from_token) {
                Some(e) => CellValue::Error(e),
                None => CellValue::String(self.as_text()),
            },
            CellKind::Formula => {
                return Err(Error::InvalidState("formula results cannot be formulas"))
            }
        };
        Ok(value)
    }
}

fn check_bounds(column_index: u16, row_index: u32) {
    if column_index >= MAX_COLS || row_index >= MAX_ROWS {
        log::warn!(
            "cell at column {} row {} is outside the sheet limits",
            column_index,
            row_index
        );
    }
}

/// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
fn column_to_letters(col: u16) -> String {
    let mut result = Vec::new();
    let mut n = col as u32 + 1;

    while n > 0 {
        n -= 1;
        result.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    result.iter().rev().map(|&b| b as char).collect()
}
