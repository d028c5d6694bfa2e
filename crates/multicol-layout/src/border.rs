//! Border placement.
//!
//! Every column gets a [`BorderPlacement`], decorated or not. A column with
//! no borders yields [`BorderDecoration::Cleared`] so a presenter reusing a
//! slot from an earlier pass drops any stale stroke.

use multicol_core::{Point, Rect, Rgba};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assemble::ColumnFrame;
use crate::policy::Border;
use crate::sizing::{ColumnGeometry, row_height_of};

/// A straight line in the coordinates of its placement frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stroke {
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: Rgba,
}

/// What to draw for one column.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", content = "strokes", rename_all = "snake_case")
)]
pub enum BorderDecoration {
    /// Remove whatever was drawn before.
    #[default]
    Cleared,
    /// Draw these strokes, in declaration order.
    Strokes(Vec<Stroke>),
}

/// Border decoration and the frame it is drawn in.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BorderPlacement {
    /// Column's left edge, outer width, full row height.
    pub frame: Rect,
    pub decoration: BorderDecoration,
}

impl BorderPlacement {
    pub fn is_cleared(&self) -> bool {
        self.decoration == BorderDecoration::Cleared
    }

    /// Strokes to draw; empty when cleared.
    pub fn strokes(&self) -> &[Stroke] {
        match &self.decoration {
            BorderDecoration::Cleared => &[],
            BorderDecoration::Strokes(strokes) => strokes,
        }
    }
}

/// Derive a border placement per column from its geometry and frame.
///
/// Left borders run from the top to the bottom of the row, not just of the
/// column, so separators line up across columns of different heights.
pub fn place_borders(
    columns: &[ColumnGeometry<'_>],
    frames: &[ColumnFrame],
) -> Vec<BorderPlacement> {
    debug_assert_eq!(columns.len(), frames.len());
    let row_height = row_height_of(columns);

    columns
        .iter()
        .zip(frames)
        .map(|(column, frame)| {
            let placement_frame = Rect::new(
                frame.slot.x,
                0.0,
                column.outer_size.width,
                row_height,
            );

            let decoration = if column.borders.is_empty() {
                BorderDecoration::Cleared
            } else {
                BorderDecoration::Strokes(
                    column
                        .borders
                        .iter()
                        .map(|border| stroke_for(border, row_height))
                        .collect(),
                )
            };

            BorderPlacement {
                frame: placement_frame,
                decoration,
            }
        })
        .collect()
}

fn stroke_for(border: &Border, row_height: f64) -> Stroke {
    match *border {
        Border::Left { width, color } => Stroke {
            from: Point::ZERO,
            to: Point::new(0.0, row_height),
            width,
            color,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::assemble;
    use crate::content::{Column, ContentProvider, RowConfiguration};
    use crate::policy::ColumnPolicy;
    use crate::sizing::size_columns;
    use multicol_core::{Insets, Size};

    struct Fill(f64);

    impl ContentProvider for Fill {
        fn measure(&self, width_constraint: f64) -> Size {
            Size::new(width_constraint, self.0)
        }

        fn reuse_key(&self) -> &str {
            "fill"
        }

        fn content_hash(&self) -> u64 {
            self.0.to_bits()
        }
    }

    fn placements(config: &RowConfiguration, width: f64) -> Vec<BorderPlacement> {
        let columns = size_columns(config, width).unwrap();
        let frames = assemble(&columns);
        place_borders(&columns, &frames)
    }

    #[test]
    fn left_border_spans_full_row_height() {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(40.0), Fill(50.0)),
            Column::new(
                ColumnPolicy::proportional().border(Border::left(1.0, Rgba::LIGHT_GRAY)),
                Fill(10.0),
            ),
        ]);
        let p = placements(&config, 100.0);
        assert_eq!(p[1].frame, Rect::new(40.0, 0.0, 60.0, 50.0));
        assert_eq!(
            p[1].strokes(),
            &[Stroke {
                from: Point::ZERO,
                to: Point::new(0.0, 50.0),
                width: 1.0,
                color: Rgba::LIGHT_GRAY,
            }]
        );
    }

    #[test]
    fn undecorated_columns_are_explicitly_cleared() {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(40.0), Fill(10.0)),
            Column::new(ColumnPolicy::proportional(), Fill(10.0)),
        ]);
        let p = placements(&config, 100.0);
        assert_eq!(p.len(), 2);
        assert!(p.iter().all(BorderPlacement::is_cleared));
        assert!(p[0].strokes().is_empty());
    }

    #[test]
    fn multiple_borders_keep_declaration_order() {
        let config = RowConfiguration::new([Column::new(
            ColumnPolicy::proportional()
                .border(Border::left(1.0, Rgba::BLACK))
                .border(Border::left(3.0, Rgba::WHITE)),
            Fill(8.0),
        )]);
        let p = placements(&config, 100.0);
        let widths: Vec<f64> = p[0].strokes().iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![1.0, 3.0]);
    }

    #[test]
    fn collapsed_column_drops_its_border() {
        let config = RowConfiguration::new([
            Column::new(ColumnPolicy::fixed(100.0), Fill(10.0)),
            Column::new(
                ColumnPolicy::proportional()
                    .insets(Insets::symmetric(0.0, 4.0))
                    .border(Border::left(1.0, Rgba::BLACK)),
                Fill(10.0),
            ),
        ]);
        let p = placements(&config, 100.0);
        assert!(p[1].is_cleared());
        assert_eq!(p[1].frame, Rect::new(100.0, 0.0, 0.0, 10.0));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn cleared_serializes_with_kind_tag() {
        let json = serde_json::to_string(&BorderDecoration::Cleared).unwrap();
        assert_eq!(json, r#"{"kind":"cleared"}"#);
    }
}
