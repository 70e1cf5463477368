//! Cell descriptors in, typed reports out

use std::io::Write;

use serde::{Deserialize, Serialize};
use streamcell_core::{CellKind, CellTypeTag, DateSystem, StreamingCell};

/// One cell as the tokenizer would hand it over
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CellDescriptor {
    pub row: u32,
    pub col: u16,
    /// Raw `t` attribute
    #[serde(rename = "type")]
    pub tag: Option<String>,
    /// Resolved content (the looked-up string for shared strings)
    pub content: Option<String>,
    /// Raw `<v>` text; defaults to `content`
    pub raw: Option<String>,
    pub formula: Option<String>,
    pub format_code: Option<String>,
    pub format_index: Option<u16>,
}

impl CellDescriptor {
    /// Build the streaming cell this descriptor describes
    pub fn build(&self, date_system: DateSystem) -> StreamingCell {
        let mut cell = StreamingCell::new(self.col, self.row, date_system);
        cell.set_type_tag(self.tag.as_deref().map(CellTypeTag::from_xml));
        cell.set_raw_contents(self.raw.clone().or_else(|| self.content.clone()));
        if let Some(formula) = &self.formula {
            cell.set_formula_type(true);
            cell.set_formula(Some(formula.clone()));
        }
        cell.set_numeric_format(self.format_code.clone());
        cell.set_numeric_format_index(self.format_index);

        let content = self.content.clone();
        cell.set_content_source(move || content);
        cell
    }
}

type Outcome<T> = Result<T, String>;

/// Every typed view of one cell, with accessor failures kept as messages
#[derive(Debug, Serialize)]
pub struct CellReport {
    pub reference: String,
    pub kind: Outcome<CellKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cached_kind: Option<Outcome<CellKind>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    pub text: String,
    pub number: Outcome<f64>,
    pub date: Outcome<Option<String>>,
    pub boolean: Outcome<bool>,
    pub error_code: Outcome<i8>,
    /// Owned snapshot, formulas shown through their cached result
    pub value: Outcome<String>,
    /// Type of the snapshot's effective value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<&'static str>,
    pub date_formatted: bool,
}

impl CellReport {
    pub fn from_cell(cell: &StreamingCell) -> Self {
        let formula = cell.formula_expression().ok().map(str::to_string);
        let snapshot = cell.to_value();
        Self {
            reference: cell.a1_reference(),
            kind: cell.kind().map_err(|e| e.to_string()),
            cached_kind: formula
                .as_ref()
                .map(|_| cell.cached_result_kind().map_err(|e| e.to_string())),
            formula,
            text: cell.as_text(),
            number: cell.as_number().map_err(|e| e.to_string()),
            date: cell
                .as_local_date_time()
                .map(|d| d.map(|d| d.to_string()))
                .map_err(|e| e.to_string()),
            boolean: cell.as_boolean().map_err(|e| e.to_string()),
            error_code: cell.as_error_code().map_err(|e| e.to_string()),
            value_type: snapshot
                .as_ref()
                .ok()
                .map(|v| v.effective_value().type_name()),
            value: snapshot.map(|v| v.to_string()).map_err(|e| e.to_string()),
            date_formatted: cell.is_date_formatted(),
        }
    }

    /// Write the report as aligned text
    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "{}", self.reference)?;
        writeln!(out, "  kind:        {}", show(&self.kind))?;
        if let Some(cached) = &self.cached_kind {
            writeln!(out, "  cached kind: {}", show(cached))?;
        }
        if let Some(formula) = &self.formula {
            writeln!(out, "  formula:     ={}", formula)?;
        }
        writeln!(out, "  text:        {:?}", self.text)?;
        writeln!(out, "  number:      {}", show(&self.number))?;
        let date = match &self.date {
            Ok(Some(d)) => d.clone(),
            Ok(None) => "(none)".to_string(),
            Err(e) => format!("<{}>", e),
        };
        writeln!(out, "  date:        {}", date)?;
        writeln!(out, "  boolean:     {}", show(&self.boolean))?;
        writeln!(out, "  error code:  {}", show(&self.error_code))?;
        match (&self.value, self.value_type) {
            (Ok(v), Some(ty)) => writeln!(out, "  value:       {:?} ({})", v, ty)?,
            (value, _) => writeln!(out, "  value:       {}", show(value))?,
        }
        writeln!(out, "  date format: {}", self.date_formatted)
    }
}

fn show<T: std::fmt::Display>(outcome: &Outcome<T>) -> String {
    match outcome {
        Ok(v) => v.to_string(),
        Err(e) => format!("<{}>", e),
    }
}
