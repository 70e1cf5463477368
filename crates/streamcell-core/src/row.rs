//! Owning-row references carried by cells

use std::sync::Arc;

/// Shared handle to the row a cell belongs to
///
/// The reader owns its rows and their cells; a cell only keeps this handle
/// to the row's metadata, set by the reader and handed back unchanged.
pub type RowRef = Arc<RowInfo>;

/// Row metadata as read from a `<row>` element
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowInfo {
    /// Row index (0-based)
    pub index: u32,
    /// Custom height in points (None = default)
    pub height: Option<f64>,
    /// Row is hidden
    pub hidden: bool,
    /// Outline/grouping level (0-7)
    pub outline_level: u8,
}

impl RowInfo {
    /// Create row metadata with default settings
    pub fn new(index: u32) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    /// Wrap into a shared [`RowRef`]
    pub fn into_ref(self) -> RowRef {
        Arc::new(self)
    }
}
