//! Headless row presenter.
//!
//! [`ColumnRow`] plays the role of the on-screen row: it owns one
//! [`ColumnSlot`] per column, keeps the managed row height, and re-runs the
//! full pipeline (sizing → assembly → border placement) whenever its
//! configuration or width changes. A pass either commits completely or
//! leaves the row exactly as it was.

use multicol_core::{Rect, Rgba};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::assemble::{ColumnFrame, assemble};
use crate::border::{BorderPlacement, place_borders};
use crate::content::RowConfiguration;
use crate::error::{LayoutError, Result};
use crate::sizing::{row_height_of, size_columns};

/// Snapshot of one complete layout pass.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RowLayout {
    /// Width the pass was computed for.
    pub width: f64,
    /// Managed row height: the tallest column's outer height.
    pub height: f64,
    pub frames: Vec<ColumnFrame>,
    pub borders: Vec<BorderPlacement>,
}

/// Run sizing, assembly and border placement for `config` at `width`.
pub fn layout_row(config: &RowConfiguration, width: f64) -> Result<RowLayout> {
    let columns = size_columns(config, width)?;
    let frames = assemble(&columns);
    let borders = place_borders(&columns, &frames);
    Ok(RowLayout {
        width,
        height: row_height_of(&columns),
        frames,
        borders,
    })
}

/// Presentation state of one column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSlot {
    /// Position of the slot in the row.
    pub index: usize,
    /// Reuse key of the content currently presented.
    pub reuse_key: String,
    /// Pixel-snapped content frame.
    pub frame: Rect,
    pub border: BorderPlacement,
}

/// A row of column slots with a managed height.
#[derive(Debug, Clone)]
pub struct ColumnRow {
    config: RowConfiguration,
    width: f64,
    height: f64,
    slots: Vec<ColumnSlot>,
}

impl ColumnRow {
    /// Build a row for `config` at `width` and lay it out.
    ///
    /// One slot is created per column; the column count is fixed from here
    /// on.
    pub fn new(config: RowConfiguration, width: f64) -> Result<Self> {
        let slots = config
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| ColumnSlot {
                index,
                reuse_key: column.provider.reuse_key().to_owned(),
                ..ColumnSlot::default()
            })
            .collect();

        let mut row = Self {
            config,
            width,
            height: 0.0,
            slots,
        };
        let layout = layout_row(&row.config, width)?;
        row.commit(layout);
        Ok(row)
    }

    /// Reuse identifier for rows built from `config`.
    pub fn identifier(config: &RowConfiguration) -> String {
        config.reuse_identifier()
    }

    /// Height a row built from `config` would take at `width`.
    pub fn height_for(config: &RowConfiguration, width: f64) -> Result<f64> {
        crate::sizing::row_height(config, width)
    }

    /// Replace the configuration and lay out again.
    ///
    /// # Errors
    ///
    /// [`LayoutError::ColumnCountMismatch`] when `config` has a different
    /// number of columns than the row was built with, or any sizing error.
    /// The row is unchanged on error.
    pub fn customize(&mut self, config: RowConfiguration) -> Result<()> {
        if config.columns.len() != self.slots.len() {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                expected = self.slots.len(),
                actual = config.columns.len(),
                "rejecting customization with a different column count"
            );
            return Err(LayoutError::ColumnCountMismatch {
                expected: self.slots.len(),
                actual: config.columns.len(),
            });
        }

        let layout = layout_row(&config, self.width)?;
        self.config = config;
        self.commit(layout);
        Ok(())
    }

    /// Lay out the current configuration at a new width.
    pub fn resize(&mut self, width: f64) -> Result<()> {
        let layout = layout_row(&self.config, width)?;
        self.width = width;
        self.commit(layout);
        Ok(())
    }

    fn commit(&mut self, layout: RowLayout) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = layout.width,
            height = layout.height,
            columns = self.slots.len(),
            "row layout committed"
        );

        self.height = layout.height;
        let RowLayout {
            frames, borders, ..
        } = layout;

        for ((slot, column), (frame, border)) in self
            .slots
            .iter_mut()
            .zip(&self.config.columns)
            .zip(frames.into_iter().zip(borders))
        {
            slot.reuse_key.clear();
            slot.reuse_key.push_str(column.provider.reuse_key());
            slot.frame = frame.content;
            slot.border = border;
            column.provider.present(slot);
        }
    }

    pub fn configuration(&self) -> &RowConfiguration {
        &self.config
    }

    pub fn background(&self) -> Option<Rgba> {
        self.config.background
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Managed row height from the last committed pass.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn slots(&self) -> &[ColumnSlot] {
        &self.slots
    }
}
