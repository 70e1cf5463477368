//! Style references carried by cells

use std::sync::Arc;

use crate::format::NumberFormat;

/// Shared handle to a cell style
///
/// Many cells point at the same entry of the workbook's style table.
pub type StyleRef = Arc<CellStyle>;

/// The parts of a style-table entry a streamed cell keeps
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    /// Index into the workbook's cell style table (`cellXfs`)
    pub index: u32,
    /// Number format of the style
    pub number_format: NumberFormat,
}

impl CellStyle {
    /// Create a style entry
    pub fn new(index: u32, number_format: NumberFormat) -> Self {
        Self {
            index,
            number_format,
        }
    }

    /// Wrap into a shared [`StyleRef`]
    pub fn into_ref(self) -> StyleRef {
        Arc::new(self)
    }
}
