#![forbid(unsafe_code)]

//! Core: geometry and color primitives shared by the row layout crates.

pub mod color;
pub mod geometry;

pub use color::Rgba;
pub use geometry::{Insets, Point, Rect, Size};
