//! Canvas interface for backends that execute a [`DrawList`](crate::scene::DrawList).
//!
//! The engine never rasterizes. A host implements [`Canvas`] over whatever
//! 2D surface it owns (CPU pixmap, GPU path renderer, platform canvas) and
//! calls [`DrawList::replay`](crate::scene::DrawList::replay).

mod canvas;

pub use canvas::Canvas;
