//! Column sizing.
//!
//! Width is resolved in two phases because the policies depend on each
//! other: a fit-to-content column's reservation depends on its measured
//! content, and every proportional share depends on all reservations.
//!
//! 1. **Pre-measure** every fit-to-content column at
//!    `min(available, max_outer_width) - insets.horizontal`, caching the size.
//! 2. **Reserve** fixed widths and measured fit widths; split what is left
//!    equally (floored) among proportional columns.
//! 3. **Resolve** each column in order: outer width, inner width, content
//!    size (cached or measured now), and the final ceiled outer size.
//!
//! The floor in step 2 leaves up to `proportional_count - 1` pixels
//! unallocated at the trailing edge. That slack is kept as is.

use multicol_core::{Insets, Size};

use crate::content::{Column, RowConfiguration};
use crate::error::{LayoutError, Result};
use crate::policy::{Border, PolicyKind, VerticalAlignment, WidthPolicy};

/// Float noise allowed when comparing a measured width against the inner
/// width re-derived from it.
const WIDTH_EPSILON: f64 = 1e-9;

/// Resolved geometry for one column of a sizing pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnGeometry<'a> {
    /// Position of the column in its configuration.
    pub index: usize,
    pub column: &'a Column,
    /// Whole-pixel footprint including insets.
    pub outer_size: Size,
    /// Insets in effect; zeroed for a collapsed column.
    pub insets: Insets,
    /// Borders in effect; empty for a collapsed column.
    pub borders: &'a [Border],
    pub alignment: VerticalAlignment,
}

impl ColumnGeometry<'_> {
    /// Outer size minus insets.
    pub fn inner_size(&self) -> Size {
        Size::new(
            self.outer_size.width - self.insets.horizontal(),
            self.outer_size.height - self.insets.vertical(),
        )
    }

    /// True for a proportional column that had no room and was hidden.
    pub fn is_collapsed(&self) -> bool {
        self.outer_size == Size::ZERO && self.column.policy.kind() == PolicyKind::Proportional
    }
}

/// Compute every column's geometry for a row `available_width` wide.
///
/// # Errors
///
/// - [`LayoutError::InvalidWidth`] when `available_width` is not positive.
/// - [`LayoutError::InvalidPolicy`] when a policy has a bad dimension.
/// - [`LayoutError::InsufficientWidth`] when fixed and fit columns need more
///   than is available, when a fixed or fit column's insets leave no inner
///   width, or when a provider measures wider than it was allowed.
pub fn size_columns(
    config: &RowConfiguration,
    available_width: f64,
) -> Result<Vec<ColumnGeometry<'_>>> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "size_columns",
        columns = config.columns.len(),
        available_width
    )
    .entered();

    if !(available_width.is_finite() && available_width > 0.0) {
        #[cfg(feature = "tracing")]
        tracing::warn!(available_width, "rejecting non-positive or non-finite row width");
        return Err(LayoutError::InvalidWidth {
            width: available_width,
        });
    }

    for (index, column) in config.columns.iter().enumerate() {
        if let Err(err) = column.policy.validate(index) {
            #[cfg(feature = "tracing")]
            tracing::warn!(index, error = %err, "rejecting invalid column policy");
            return Err(err);
        }
    }

    // 1. Pre-measure fit-to-content columns.
    let measured = config
        .columns
        .iter()
        .map(|column| premeasure(column, available_width))
        .collect::<Result<Vec<_>>>()?;

    // 2. Reserve fixed + fit widths, count proportional columns.
    let mut reserved = 0.0;
    let mut proportional_count = 0usize;
    for (column, measurement) in config.columns.iter().zip(&measured) {
        match column.policy.width {
            WidthPolicy::Proportional => proportional_count += 1,
            WidthPolicy::Fixed { outer_width } => reserved += outer_width,
            WidthPolicy::FitContent { .. } => {
                reserved += measurement
                    .map_or(0.0, |size| size.width + column.policy.insets.horizontal());
            }
        }
    }

    let remaining = available_width - reserved;
    if remaining < 0.0 {
        #[cfg(feature = "tracing")]
        tracing::warn!(reserved, available_width, "reserved width exceeds row width");
        return Err(LayoutError::insufficient(format!(
            "sum width of fixed and fit columns is greater than available width \
             (reserved={reserved}, available={available_width})"
        )));
    }

    let proportional_width = if proportional_count > 0 {
        (remaining / proportional_count as f64).floor()
    } else {
        0.0
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        reserved,
        remaining,
        proportional_count,
        proportional_width,
        "width reserved"
    );

    // 3. Resolve each column in order.
    config
        .columns
        .iter()
        .zip(measured)
        .enumerate()
        .map(|(index, (column, measurement))| {
            resolve_column(index, column, measurement, proportional_width)
        })
        .collect()
}

/// Row height for a sizing result: the tallest outer height, `0` when empty.
pub fn row_height_of(columns: &[ColumnGeometry<'_>]) -> f64 {
    columns
        .iter()
        .map(|c| c.outer_size.height)
        .fold(0.0, f64::max)
}

/// Height of the row for `config` at `available_width`.
///
/// Same computation as [`size_columns`], so the two always agree.
pub fn row_height(config: &RowConfiguration, available_width: f64) -> Result<f64> {
    size_columns(config, available_width).map(|columns| row_height_of(&columns))
}

/// Pass 1 for a single column. Only fit-to-content columns are measured, and
/// only when the constraint leaves positive room.
fn premeasure(column: &Column, available_width: f64) -> Result<Option<Size>> {
    let WidthPolicy::FitContent { max_outer_width } = column.policy.width else {
        return Ok(None);
    };

    let constraint = available_width.min(max_outer_width) - column.policy.insets.horizontal();
    if constraint <= 0.0 {
        return Ok(None);
    }

    let size = column.provider.measure(constraint);
    check_measured(column, size)?;
    Ok(Some(size))
}

fn resolve_column(
    index: usize,
    column: &Column,
    measurement: Option<Size>,
    proportional_width: f64,
) -> Result<ColumnGeometry<'_>> {
    let policy = &column.policy;
    let insets = policy.insets;

    let outer_width = match policy.width {
        WidthPolicy::Proportional => proportional_width,
        WidthPolicy::Fixed { outer_width } => outer_width,
        WidthPolicy::FitContent { max_outer_width } => measurement
            .map_or(0.0, |size| (size.width + insets.horizontal()).min(max_outer_width)),
    };
    let inner_width = outer_width - insets.horizontal();

    if inner_width <= 0.0 {
        if policy.kind() == PolicyKind::Proportional {
            #[cfg(feature = "tracing")]
            tracing::debug!(index, outer_width, "collapsing proportional column");
            return Ok(ColumnGeometry {
                index,
                column,
                outer_size: Size::ZERO,
                insets: Insets::ZERO,
                borders: &[],
                alignment: policy.alignment,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::warn!(index, outer_width, "insets leave no inner width");
        return Err(LayoutError::insufficient(format!(
            "inner width of column {index} is negative or 0, horizontal insets are wider \
             than the column (horizontal_insets={}, outer_width={outer_width})",
            insets.horizontal()
        )));
    }

    let content = match measurement {
        Some(size) => size,
        None => {
            let size = column.provider.measure(inner_width);
            check_measured(column, size)?;
            size
        }
    };

    if content.width > inner_width + WIDTH_EPSILON {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            index,
            measured = content.width,
            inner_width,
            "content measured wider than its constraint"
        );
        return Err(LayoutError::insufficient(format!(
            "content of column {index} ({}) is wider than the inner width of the column \
             (measured_width={}, inner_width={inner_width})",
            column.provider.reuse_key(),
            content.width
        )));
    }

    let outer_size = Size::new(outer_width, content.height + insets.vertical()).ceil();

    #[cfg(feature = "tracing")]
    tracing::trace!(
        index,
        kind = ?policy.kind(),
        outer_width = outer_size.width,
        outer_height = outer_size.height,
        "column resolved"
    );

    Ok(ColumnGeometry {
        index,
        column,
        outer_size,
        insets,
        borders: &policy.borders,
        alignment: policy.alignment,
    })
}

/// Reject measurements no layout can use: non-finite or negative sizes.
fn check_measured(column: &Column, size: Size) -> Result<()> {
    let usable = |v: f64| v.is_finite() && v >= 0.0;
    if usable(size.width) && usable(size.height) {
        return Ok(());
    }
    #[cfg(feature = "tracing")]
    tracing::warn!(
        width = size.width,
        height = size.height,
        "content measured a non-finite or negative size"
    );
    Err(LayoutError::insufficient(format!(
        "content provider {} returned a non-finite or negative size (width={}, height={})",
        column.provider.reuse_key(),
        size.width,
        size.height
    )))
}
