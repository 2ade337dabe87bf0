//! Coordinate and geometry types shared across widgets and canvas backends.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod edges;
mod rect;
mod vec2;

pub use edges::Edges;
pub use rect::Rect;
pub use vec2::Vec2;
