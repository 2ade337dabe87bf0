//! Star outline and rectangle mask construction.
//!
//! Local frame: origin at the star's reference point (the circle center the
//! points are placed on), +x right, +y down. The first outer point sits
//! straight up at `(0, -radius)`.

use std::f64::consts::PI;
use std::rc::Rc;

use starbar_engine::coords::Vec2;
use starbar_engine::scene::Path;

use crate::error::{RatingError, Result, ensure_positive};

/// Points per star. Only five-pointed stars are drawn.
pub const STAR_SECTIONS: u32 = 5;

/// Outline polygon plus the layout metrics derived from the same radius.
#[derive(Debug, Clone, PartialEq)]
pub struct StarOutline {
    /// `2 * section_count` points: outer, inner, outer, inner, ...
    pub path: Rc<Path>,
    pub radius: f32,
    pub inner_radius: f32,
    /// Layout width, `2·r·sin(2π/n)`.
    pub width: f32,
    /// Layout height, `width·sin(2π/n)`.
    pub height: f32,
}

/// Layout metrics `(width, height)` for a star of `radius`.
///
/// These are the metrics the strip spacing was designed around and are kept
/// bit-for-bit, evaluated in `f64` and rounded to `f32`.
pub fn star_metrics(radius: f32, section_count: u32) -> (f32, f32) {
    let step = 2.0 * PI / f64::from(section_count);
    let width = 2.0 * f64::from(radius) * step.sin();
    (width as f32, (width * step.sin()) as f32)
}

/// Radius of the concave vertices between two outer points.
pub fn inner_radius(radius: f32, section_count: u32) -> f32 {
    let section = PI / f64::from(section_count);
    (f64::from(radius) * (section / 2.0).sin() / section.cos()) as f32
}

/// Builds the closed star outline for `radius`.
///
/// Point `k` (0-based, `0..2n`) sits at angle `k·π/n` clockwise from up;
/// even `k` on the outer circle, odd `k` on the inner circle.
pub fn build_outline(radius: f32, section_count: u32) -> Result<StarOutline> {
    if section_count < 3 {
        return Err(RatingError::InvalidGeometry { section_count });
    }
    let radius = ensure_positive("star_radius", radius)?;

    let inner = inner_radius(radius, section_count);
    let (width, height) = star_metrics(radius, section_count);
    let section = PI / f64::from(section_count);

    let points = (0..2 * section_count)
        .map(|k| {
            let r = f64::from(if k % 2 == 0 { radius } else { inner });
            let angle = section * f64::from(k);
            Vec2::new((r * angle.sin()) as f32, (-r * angle.cos()) as f32)
        })
        .collect();

    log::debug!(
        "star outline: radius={radius} inner={inner} width={width} height={height}"
    );

    Ok(StarOutline {
        path: Rc::new(Path::new(points)),
        radius,
        inner_radius: inner,
        width,
        height,
    })
}

/// Rectangle spanning the star's local frame from its left edge to
/// `width·edge`, and vertically from `-radius` to `height - radius`.
///
/// Corners are emitted right-top, right-bottom, left-bottom, left-top.
/// `edge = 0.5` covers the whole star.
pub fn rect_mask(edge: f32, radius: f32, width: f32, height: f32) -> Path {
    let right = width * edge;
    let left = -width / 2.0;
    let top = -radius;
    let bottom = height - radius;
    Path::quad(
        Vec2::new(right, top),
        Vec2::new(right, bottom),
        Vec2::new(left, bottom),
        Vec2::new(left, top),
    )
}
