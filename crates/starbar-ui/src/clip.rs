//! Partial-fill masks.
//!
//! A star is painted twice: once unclipped in the normal color, then again in
//! the fill color under a rectangular clip that starts at the star's left
//! edge. The mask chosen here decides how far right that clip reaches.

use std::rc::Rc;

use starbar_engine::scene::Path;

use crate::error::{Result, ensure_finite};
use crate::geometry::rect_mask;
use crate::rating::FillState;

/// Mask edge that covers the whole star.
pub const FULL_EDGE: f32 = 0.5;

/// Clip selection for one star.
#[derive(Debug, Clone, PartialEq)]
pub enum Mask {
    /// No foreground pass.
    None,
    /// Clip revealing the left part of the star.
    Partial(Rc<Path>),
    /// Clip covering the whole star.
    Full(Rc<Path>),
}

impl Mask {
    /// Clip path for the foreground pass, if any.
    pub fn path(&self) -> Option<&Rc<Path>> {
        match self {
            Mask::None => None,
            Mask::Partial(p) | Mask::Full(p) => Some(p),
        }
    }
}

/// Mask edge for a partial fraction in `[0, 1)`.
///
/// The rectangle builder measures its right edge from the star's center, so a
/// fraction measured from the left edge is shifted by half a width: `0` lands
/// on the left edge, `1` would land on the right edge.
#[inline]
pub fn partial_edge(fraction: f32) -> f32 {
    fraction - FULL_EDGE
}

/// Whole-star clip rectangle.
pub fn full_mask(radius: f32, width: f32, height: f32) -> Path {
    rect_mask(FULL_EDGE, radius, width, height)
}

/// Clip rectangle revealing the left `fraction` of the star's width.
pub fn partial_mask(fraction: f32, radius: f32, width: f32, height: f32) -> Path {
    rect_mask(partial_edge(fraction), radius, width, height)
}

/// Selects and builds the mask for a star whose signed fill fraction is
/// `percent_within_star`.
///
/// - `< 0`: [`Mask::None`]
/// - `[0, 1)`: [`Mask::Partial`]; `0` yields a zero-width clip
/// - `>= 1`: [`Mask::Full`], regardless of how far past one
pub fn build_mask(percent_within_star: f32, radius: f32, width: f32, height: f32) -> Result<Mask> {
    let percent = ensure_finite("fill_fraction", percent_within_star)?;
    Ok(match FillState::of(percent) {
        FillState::Empty => Mask::None,
        FillState::Partial(f) => Mask::Partial(Rc::new(partial_mask(f, radius, width, height))),
        FillState::Full => Mask::Full(Rc::new(full_mask(radius, width, height))),
    })
}
