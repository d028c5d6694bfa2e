#![forbid(unsafe_code)]

//! Multi-column row layout.
//!
//! A row is a single horizontal band of columns. Each column claims width by
//! one of three policies:
//!
//! - [`WidthPolicy::Fixed`] - an exact outer width.
//! - [`WidthPolicy::FitContent`] - measured content plus insets, capped.
//! - [`WidthPolicy::Proportional`] - an equal share of what is left.
//!
//! The pipeline is three pure steps:
//!
//! 1. [`size_columns`] - per-column outer sizes (the only step that calls
//!    into [`ContentProvider::measure`]).
//! 2. [`assemble`] - absolute, pixel-snapped frames, left to right.
//! 3. [`place_borders`] - one [`BorderPlacement`] per column.
//!
//! [`layout_row`] runs all three; [`ColumnRow`] keeps the result applied to
//! a set of column slots across re-customizations.
//!
//! # Example
//!
//! ```
//! use multicol_layout::{Column, ColumnPolicy, ContentProvider, RowConfiguration, Size, size_columns};
//!
//! struct Label(&'static str);
//!
//! impl ContentProvider for Label {
//!     fn measure(&self, width: f64) -> Size {
//!         Size::new(width.min(self.0.len() as f64 * 8.0), 16.0)
//!     }
//!     fn reuse_key(&self) -> &str {
//!         "label"
//!     }
//!     fn content_hash(&self) -> u64 {
//!         self.0.len() as u64
//!     }
//! }
//!
//! let row = RowConfiguration::new([
//!     Column::new(ColumnPolicy::proportional(), Label("name")),
//!     Column::new(ColumnPolicy::fit_content_max(325.0), Label("status")),
//!     Column::new(ColumnPolicy::fixed(50.0), Label("x")),
//! ]);
//!
//! let columns = size_columns(&row, 375.0).unwrap();
//! let widths: Vec<f64> = columns.iter().map(|c| c.outer_size.width).collect();
//! assert_eq!(widths, vec![277.0, 48.0, 50.0]);
//! ```

pub mod assemble;
pub mod border;
pub mod content;
pub mod error;
pub mod hash;
pub mod policy;
pub mod row;
pub mod sizing;

pub use assemble::{ColumnFrame, assemble};
pub use border::{BorderDecoration, BorderPlacement, Stroke, place_borders};
pub use content::{Column, ContentProvider, ROW_IDENTIFIER_PREFIX, RowConfiguration};
pub use error::{LayoutError, Result};
pub use multicol_core::geometry::{Insets, Point, Rect, Size};
pub use multicol_core::Rgba;
pub use policy::{Border, ColumnPolicy, PolicyKind, VerticalAlignment, WidthPolicy};
pub use row::{ColumnRow, ColumnSlot, RowLayout, layout_row};
pub use sizing::{ColumnGeometry, row_height, row_height_of, size_columns};
