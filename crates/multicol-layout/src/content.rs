//! Column content and row configuration.
//!
//! A [`Column`] does not own any rendered output. It carries its
//! [`ColumnPolicy`] and a shared [`ContentProvider`] that knows how big the
//! content is at a given width and how to present itself into a slot.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use multicol_core::{Rgba, Size};

use crate::hash::StructuralHasher;
use crate::policy::ColumnPolicy;
use crate::row::ColumnSlot;

/// Prefix of every row reuse identifier.
pub const ROW_IDENTIFIER_PREFIX: &str = "MultiColumnRow";

/// Something that can be measured at a width and presented into a column.
pub trait ContentProvider: Send + Sync {
    /// Size the content needs when laid out at most `width_constraint` wide.
    ///
    /// The returned width must not exceed `width_constraint`; a wider answer
    /// fails the layout pass with `InsufficientWidth`.
    fn measure(&self, width_constraint: f64) -> Size;

    /// Stable key for view-recycling pools.
    fn reuse_key(&self) -> &str;

    /// Structural identity of the content, used by configuration hashing and
    /// equality. Equal content must return equal values.
    fn content_hash(&self) -> u64;

    /// Rendering hook, called after the slot received its frame and border.
    fn present(&self, _slot: &mut ColumnSlot) {}
}

/// One column of a row: a width policy plus its content.
#[derive(Clone)]
pub struct Column {
    pub policy: ColumnPolicy,
    pub provider: Arc<dyn ContentProvider>,
}

impl Column {
    pub fn new(policy: ColumnPolicy, provider: impl ContentProvider + 'static) -> Self {
        Self {
            policy,
            provider: Arc::new(provider),
        }
    }

    /// Build a column around an already shared provider.
    pub fn shared(policy: ColumnPolicy, provider: Arc<dyn ContentProvider>) -> Self {
        Self { policy, provider }
    }

    fn mix_into(&self, hasher: &mut StructuralHasher) {
        self.policy.mix_into(hasher);
        hasher.mix_str(self.provider.reuse_key());
        hasher.mix_u64(self.provider.content_hash());
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("policy", &self.policy)
            .field("reuse_key", &self.provider.reuse_key())
            .field("content_hash", &self.provider.content_hash())
            .finish()
    }
}

impl PartialEq for Column {
    fn eq(&self, other: &Self) -> bool {
        self.policy == other.policy
            && self.provider.reuse_key() == other.provider.reuse_key()
            && self.provider.content_hash() == other.provider.content_hash()
    }
}

/// Declarative description of one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowConfiguration {
    pub columns: Vec<Column>,
    pub background: Option<Rgba>,
}

impl RowConfiguration {
    pub fn new(columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            background: None,
        }
    }

    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = Some(color);
        self
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Deterministic hash over every column's policy and content identity
    /// plus the background. Structurally equal configurations hash equal.
    #[must_use]
    pub fn structural_hash(&self) -> u64 {
        let mut hasher = StructuralHasher::new();
        hasher.mix_u64(self.columns.len() as u64);
        for column in &self.columns {
            column.mix_into(&mut hasher);
        }
        match self.background {
            Some(color) => {
                hasher.mix(1);
                hasher.mix_u32(color.0);
            }
            None => hasher.mix(0),
        }
        hasher.finish()
    }

    /// Identifier for recycling pools: the fixed prefix followed by every
    /// column's reuse key, in column order.
    pub fn reuse_identifier(&self) -> String {
        let mut id = String::from(ROW_IDENTIFIER_PREFIX);
        for column in &self.columns {
            id.push_str(column.provider.reuse_key());
        }
        id
    }
}

impl Hash for RowConfiguration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structural_hash());
    }
}
