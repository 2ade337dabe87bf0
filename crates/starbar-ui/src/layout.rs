//! Horizontal placement of stars inside the host's content area.

use starbar_engine::coords::{Edges, Rect, Vec2};

use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::rating::fill_fraction_for;

/// Space the host makes available for one layout pass.
///
/// `size` already excludes padding; padding is added back when placing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentBounds {
    pub size: Vec2,
    pub padding: Edges,
}

impl ContentBounds {
    #[inline]
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width, height), padding: Edges::default() }
    }

    #[inline]
    pub fn with_padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Content bounds of a view of `view_size` with `padding` taken out.
    /// A view smaller than its padding has zero content size.
    pub fn from_view(view_size: Vec2, padding: Edges) -> Self {
        Self {
            size: Vec2::new(
                (view_size.x - padding.h()).max(0.0),
                (view_size.y - padding.v()).max(0.0),
            ),
            padding,
        }
    }

    /// Content area in view coordinates.
    pub fn content_rect(self) -> Rect {
        Rect::new(self.padding.left, self.padding.top, self.size.x, self.size.y)
    }

    pub fn validate(self) -> Result<()> {
        ensure_non_negative("content_width", self.size.x)?;
        ensure_non_negative("content_height", self.size.y)?;
        for (field, value) in self.padding.sides() {
            ensure_non_negative(field, value)?;
        }
        Ok(())
    }
}

/// Numeric inputs of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripMetrics {
    pub star_count: usize,
    pub star_width: f32,
    pub star_height: f32,
    pub radius: f32,
    pub margin: f32,
    pub rating: f32,
}

impl StripMetrics {
    pub fn validate(&self) -> Result<()> {
        ensure_positive("star_radius", self.radius)?;
        ensure_positive("star_width", self.star_width)?;
        ensure_positive("star_height", self.star_height)?;
        ensure_non_negative("star_margin", self.margin)?;
        ensure_finite("current_rating", self.rating)?;
        Ok(())
    }

    /// Width of all stars and the margins between them.
    ///
    /// With zero stars the single "missing" margin is subtracted, exactly as
    /// the centering formula does.
    #[inline]
    pub fn strip_width(&self) -> f32 {
        let n = self.star_count as f32;
        n * self.star_width + self.margin * (n - 1.0)
    }

    /// Size a host should reserve to show the whole strip without padding.
    pub fn natural_size(&self) -> Vec2 {
        if self.star_count == 0 {
            return Vec2::zero();
        }
        Vec2::new(self.strip_width(), self.star_height)
    }
}

/// Center and fill of one star, in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarPlacement {
    pub index: usize,
    pub center: Vec2,
    pub fill_fraction: f32,
}

/// Places `star_count` stars centered in `bounds`.
///
/// The strip is centered horizontally and may start at a negative x when it
/// is wider than the content; nothing is clamped. Each star's vertical
/// reference point sits `radius` below the top of its centered layout box.
pub fn layout(metrics: &StripMetrics, bounds: ContentBounds) -> Result<Vec<StarPlacement>> {
    metrics.validate()?;
    bounds.validate()?;

    let start_x = (bounds.size.x - metrics.strip_width()) / 2.0;
    let center_y = (bounds.size.y - metrics.star_height) / 2.0 + metrics.radius;

    if start_x < 0.0 && metrics.star_count > 0 {
        log::debug!(
            "star strip overflows content: {} > {}",
            metrics.strip_width(),
            bounds.size.x
        );
    }

    let placements = (0..metrics.star_count)
        .map(|i| {
            let fi = i as f32;
            let center_x = start_x
                + metrics.star_width * (2.0 * fi + 1.0) / 2.0
                + metrics.margin * fi;
            StarPlacement {
                index: i,
                center: Vec2::new(center_x + bounds.padding.left, center_y + bounds.padding.top),
                fill_fraction: fill_fraction_for(i, metrics.rating),
            }
        })
        .collect();

    Ok(placements)
}
