//! Row geometry assembly: sized columns to absolute frames.

use multicol_core::{Point, Rect, Size};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::policy::VerticalAlignment;
use crate::sizing::{ColumnGeometry, row_height_of};

/// Where one column lands in the row.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnFrame {
    /// The column's vertical band: its outer width, the full row height.
    pub slot: Rect,
    /// Pixel-snapped content rectangle inside the insets.
    pub content: Rect,
}

/// Lay columns out left to right, in configuration order.
///
/// `x` starts at 0 and advances by each column's outer width. The content
/// rectangle's `y` follows the column's alignment against the row height
/// (the tallest column), and is snapped to the smallest enclosing
/// whole-pixel rectangle.
pub fn assemble(columns: &[ColumnGeometry<'_>]) -> Vec<ColumnFrame> {
    let row_height = row_height_of(columns);
    let mut x = 0.0;

    columns
        .iter()
        .map(|column| {
            let frame = column_frame(column, x, row_height);
            x += column.outer_size.width;
            frame
        })
        .collect()
}

fn column_frame(column: &ColumnGeometry<'_>, x: f64, row_height: f64) -> ColumnFrame {
    let insets = column.insets;
    let inner = column.inner_size();

    let y = match column.alignment {
        VerticalAlignment::Top => insets.top,
        VerticalAlignment::Middle => (row_height - inner.height) / 2.0,
        VerticalAlignment::Bottom => row_height - inner.height - insets.bottom,
    };

    ColumnFrame {
        slot: Rect::new(x, 0.0, column.outer_size.width, row_height),
        content: Rect::from_origin_size(
            Point::new(x + insets.left, y),
            Size::new(inner.width, inner.height),
        )
        .integral(),
    }
}
