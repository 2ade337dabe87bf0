//! Paint model shared between widgets and canvas backends.
//!
//! Rating strips only ever paint flat colors, so a paint source is a [`Color`].

pub mod color;

pub use color::Color;
