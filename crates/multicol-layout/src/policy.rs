//! Column width policies and their decorations.
//!
//! A [`ColumnPolicy`] pairs a [`WidthPolicy`] (how the column claims
//! horizontal space) with the presentation shared by every policy: borders,
//! content insets and vertical alignment inside the row.

use multicol_core::{Insets, Rgba};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::hash::StructuralHasher;

/// A decoration drawn on one edge of a column.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "edge", rename_all = "snake_case")
)]
pub enum Border {
    /// Vertical stroke along the column's left edge, spanning the row height.
    Left { width: f64, color: Rgba },
}

impl Border {
    /// Left-edge stroke.
    pub const fn left(width: f64, color: Rgba) -> Self {
        Self::Left { width, color }
    }

    /// Stroke width.
    pub const fn width(&self) -> f64 {
        match self {
            Self::Left { width, .. } => *width,
        }
    }

    fn mix_into(&self, hasher: &mut StructuralHasher) {
        match self {
            Self::Left { width, color } => {
                hasher.mix(1);
                hasher.mix_f64(*width);
                hasher.mix_u32(color.0);
            }
        }
    }
}

/// Vertical placement of column content within the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum VerticalAlignment {
    /// Content starts at the top inset.
    #[default]
    Top,
    /// Content is centered in the row.
    Middle,
    /// Content ends at the bottom inset.
    Bottom,
}

impl VerticalAlignment {
    const fn tag(self) -> u8 {
        match self {
            Self::Top => 11,
            Self::Middle => 22,
            Self::Bottom => 33,
        }
    }
}

/// How a column claims width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum WidthPolicy {
    /// Equal share of whatever fixed and fit columns leave over.
    Proportional,
    /// Exactly `outer_width`, regardless of content.
    Fixed { outer_width: f64 },
    /// Measured content width plus insets, capped at `max_outer_width`.
    FitContent {
        #[cfg_attr(
            feature = "serde",
            serde(with = "unbounded", default = "unbounded::default")
        )]
        max_outer_width: f64,
    },
}

/// Discriminant of a [`WidthPolicy`], handy for tallies and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Proportional,
    Fixed,
    FitContent,
}

impl WidthPolicy {
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Proportional => PolicyKind::Proportional,
            Self::Fixed { .. } => PolicyKind::Fixed,
            Self::FitContent { .. } => PolicyKind::FitContent,
        }
    }
}

/// Full layout description of a single column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColumnPolicy {
    pub width: WidthPolicy,
    #[cfg_attr(feature = "serde", serde(default))]
    pub borders: Vec<Border>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub insets: Insets,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alignment: VerticalAlignment,
}

impl ColumnPolicy {
    fn with_width(width: WidthPolicy) -> Self {
        Self {
            width,
            borders: Vec::new(),
            insets: Insets::ZERO,
            alignment: VerticalAlignment::Top,
        }
    }

    /// Proportional column with no borders, zero insets, top alignment.
    pub fn proportional() -> Self {
        Self::with_width(WidthPolicy::Proportional)
    }

    /// Fixed-width column.
    pub fn fixed(outer_width: f64) -> Self {
        Self::with_width(WidthPolicy::Fixed { outer_width })
    }

    /// Fit-to-content column with no upper bound.
    pub fn fit_content() -> Self {
        Self::fit_content_max(f64::INFINITY)
    }

    /// Fit-to-content column capped at `max_outer_width`.
    pub fn fit_content_max(max_outer_width: f64) -> Self {
        Self::with_width(WidthPolicy::FitContent { max_outer_width })
    }

    /// Append a border.
    #[must_use]
    pub fn border(mut self, border: Border) -> Self {
        self.borders.push(border);
        self
    }

    /// Replace all borders.
    #[must_use]
    pub fn borders(mut self, borders: impl IntoIterator<Item = Border>) -> Self {
        self.borders = borders.into_iter().collect();
        self
    }

    /// Set the content insets.
    #[must_use]
    pub fn insets(mut self, insets: impl Into<Insets>) -> Self {
        self.insets = insets.into();
        self
    }

    /// Set the vertical alignment.
    #[must_use]
    pub fn alignment(mut self, alignment: VerticalAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub const fn kind(&self) -> PolicyKind {
        self.width.kind()
    }

    /// Reject negative, NaN or (except an unbounded fit maximum) infinite
    /// dimensions. `index` is the column position, used in the error.
    pub fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| Err(LayoutError::InvalidPolicy { index, reason });

        match self.width {
            WidthPolicy::Proportional => {}
            WidthPolicy::Fixed { outer_width } => {
                if !(outer_width.is_finite() && outer_width >= 0.0) {
                    return invalid(format!(
                        "fixed outer width must be finite and non-negative (outer_width={outer_width})"
                    ));
                }
            }
            WidthPolicy::FitContent { max_outer_width } => {
                if max_outer_width.is_nan() || max_outer_width < 0.0 {
                    return invalid(format!(
                        "fit maximum outer width must be non-negative (max_outer_width={max_outer_width})"
                    ));
                }
            }
        }

        if !self.insets.is_valid() {
            return invalid(format!(
                "insets must be finite and non-negative (insets={:?})",
                self.insets
            ));
        }

        if let Some(border) = self
            .borders
            .iter()
            .find(|b| !(b.width().is_finite() && b.width() >= 0.0))
        {
            return invalid(format!(
                "border width must be finite and non-negative (width={})",
                border.width()
            ));
        }

        Ok(())
    }

    pub(crate) fn mix_into(&self, hasher: &mut StructuralHasher) {
        match self.width {
            WidthPolicy::Proportional => hasher.mix(1),
            WidthPolicy::Fixed { outer_width } => {
                hasher.mix(2);
                hasher.mix_f64(outer_width);
            }
            WidthPolicy::FitContent { max_outer_width } => {
                hasher.mix(3);
                hasher.mix_f64(max_outer_width);
            }
        }
        hasher.mix_u64(self.borders.len() as u64);
        for border in &self.borders {
            border.mix_into(hasher);
        }
        let Insets {
            top,
            left,
            bottom,
            right,
        } = self.insets;
        for side in [top, left, bottom, right] {
            hasher.mix_f64(side);
        }
        hasher.mix(self.alignment.tag());
    }
}

/// Serde adapter mapping an unbounded (`+inf`) maximum to `null`/absent.
#[cfg(feature = "serde")]
mod unbounded {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_infinite() && value.is_sign_positive() {
            serializer.serialize_none()
        } else {
            serializer.serialize_some(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }

    pub fn default() -> f64 {
        f64::INFINITY
    }
}
