//! Core types shared by the code-action affordance: text positions, pixel
//! geometry and indentation measurement.

/// Pixel-space points and rectangles.
pub mod geometry;
/// Tab-aware indentation measurement.
pub mod indent;
/// 1-based text positions.
pub mod position;

pub use geometry::{Point, Rect, VisiblePosition};
pub use indent::indent_level;
pub use position::Position;
