//! Starbar engine crate.
//!
//! Renderer-agnostic primitives shared by the rating widgets and by hosts:
//! coordinates, colors, the recorded draw stream and the canvas interface a
//! backend implements to replay it.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
