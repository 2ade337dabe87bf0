use crate::coords::{Rect, Vec2};

/// Closed polygon in a local coordinate frame.
///
/// The last point implicitly connects back to the first. Paths are built
/// once and never edited; a changed shape means a new `Path`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Vec2>,
}

impl Path {
    #[inline]
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    /// Four-corner path in the given winding order.
    pub fn quad(a: Vec2, b: Vec2, c: Vec2, d: Vec2) -> Self {
        Self::new(vec![a, b, c, d])
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Edges as `(from, to)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| (self.points[i], self.points[(i + 1) % n]))
    }

    /// Axis-aligned bounds of the points, `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let first = *self.points.first()?;
        let (min, max) = self.points.iter().fold((first, first), |(lo, hi), p| {
            (Vec2::new(lo.x.min(p.x), lo.y.min(p.y)), Vec2::new(hi.x.max(p.x), hi.y.max(p.y)))
        });
        Some(Rect::from_corners(min, max))
    }

    /// Twice the signed area (shoelace). Positive for clockwise winding in a
    /// y-down frame.
    pub fn signed_area2(&self) -> f32 {
        self.edges().map(|(a, b)| a.x * b.y - b.x * a.y).sum()
    }

    /// Ray-casting point-in-polygon test.
    pub fn contains(&self, p: Vec2) -> bool {
        if self.points.len() < 3 {
            return false;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
        }
        inside
    }
}
