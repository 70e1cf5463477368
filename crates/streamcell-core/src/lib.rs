//! # streamcell-core
//!
//! Lazy cell value model for streaming spreadsheet readers.
//!
//! A streaming reader hands each cell over as an untyped payload: a raw type
//! tag taken from the sheet XML (`t="n"`, `t="s"`, ...) plus raw text. This
//! crate turns that payload into typed values:
//! - [`StreamingCell`] - One cell, with content resolved on first demand
//! - [`CellKind`] and [`CellTypeTag`] - Classification of a cell's content
//! - [`DateSystem`] - The workbook's 1900 / 1904 date epoch
//! - [`CellValue`] - An owned snapshot that outlives row reuse
//! - [`LegacyCell`] - The wide read/write cell shape, mostly unsupported
//!
//! ## Example
//!
//! ```rust
//! use streamcell_core::{CellKind, CellTypeTag, DateSystem, StreamingCell};
//!
//! let mut cell = StreamingCell::new(1, 0, DateSystem::Excel1900);
//! cell.set_type_tag(Some(CellTypeTag::Numeric));
//! cell.set_raw_contents(Some("42.5".to_string()));
//! cell.set_content_source(|| Some("42.5".to_string()));
//!
//! assert_eq!(cell.kind().unwrap(), CellKind::Numeric);
//! assert_eq!(cell.as_number().unwrap(), 42.5);
//! assert_eq!(cell.a1_reference(), "B1");
//! ```

pub mod cell;
pub mod content;
pub mod convert;
pub mod date;
pub mod error;
pub mod format;
pub mod kind;
pub mod legacy;
pub mod row;
pub mod style;
pub mod value;

// Re-exports for convenience
pub use cell::StreamingCell;
pub use content::{ContentSource, LazyContent};
pub use date::DateSystem;
pub use error::{Error, Result};
pub use format::NumberFormat;
pub use kind::{classify, classify_cached_result, CellKind, CellTypeTag};
pub use legacy::{ArrayFormulaRange, CellComment, Hyperlink, LegacyCell, LegacyValue};
pub use row::{RowInfo, RowRef};
pub use style::{CellStyle, StyleRef};
pub use value::{CellError, CellValue, RichText};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
