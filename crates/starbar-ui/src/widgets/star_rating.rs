use std::rc::Rc;

use starbar_engine::coords::Vec2;
use starbar_engine::paint::Color;
use starbar_engine::scene::{DrawList, Path};

use crate::clip::{Mask, build_mask, full_mask, partial_mask};
use crate::error::{Result, ensure_finite, ensure_non_negative, ensure_positive};
use crate::geometry::{STAR_SECTIONS, StarOutline, build_outline};
use crate::layout::{ContentBounds, StarPlacement, StripMetrics, layout};
use crate::painter::Painter;
use crate::rating::{FillState, rating_fraction};

// ── StripConfig ───────────────────────────────────────────────────────────

/// Caller-owned settings of a rating strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripConfig {
    pub star_count: usize,
    /// Rating in stars. Not clamped; values past `star_count` just fill
    /// every star.
    pub current_rating: f32,
    pub star_margin: f32,
    pub star_radius: f32,
    pub normal_color: Color,
    pub fill_color: Color,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            star_count: 0,
            current_rating: 0.0,
            star_margin: 4.0,
            star_radius: 40.0,
            normal_color: Color::YELLOW,
            fill_color: Color::RED,
        }
    }
}

impl StripConfig {
    pub fn star_count(mut self, v: usize) -> Self { self.star_count = v; self }
    pub fn current_rating(mut self, v: f32) -> Self { self.current_rating = v; self }
    pub fn star_margin(mut self, v: f32) -> Self { self.star_margin = v; self }
    pub fn star_radius(mut self, v: f32) -> Self { self.star_radius = v; self }
    pub fn normal_color(mut self, v: Color) -> Self { self.normal_color = v; self }
    pub fn fill_color(mut self, v: Color) -> Self { self.fill_color = v; self }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("star_radius", self.star_radius)?;
        ensure_non_negative("star_margin", self.star_margin)?;
        ensure_finite("current_rating", self.current_rating)?;
        Ok(())
    }
}

// ── StarCache ─────────────────────────────────────────────────────────────

/// Geometry derived from the radius and the rating's fractional part,
/// stored next to the keys that produced it.
///
/// Never edited: a key change builds a new cache that replaces the old one.
#[derive(Debug, Clone, PartialEq)]
struct StarCache {
    outline: StarOutline,
    full_mask: Rc<Path>,
    /// Key of `partial_mask`.
    rating_fraction: f32,
    partial_mask: Rc<Path>,
}

impl StarCache {
    fn build(radius: f32, rating: f32) -> Result<Self> {
        let outline = build_outline(radius, STAR_SECTIONS)?;
        let full = Rc::new(full_mask(outline.radius, outline.width, outline.height));
        log::debug!("star cache rebuilt for radius {radius}");
        Ok(Self::with_partial(outline, full, rating_fraction(rating)))
    }

    fn with_partial(outline: StarOutline, full_mask: Rc<Path>, fraction: f32) -> Self {
        let partial = partial_mask(fraction, outline.radius, outline.width, outline.height);
        Self { outline, full_mask, rating_fraction: fraction, partial_mask: Rc::new(partial) }
    }

    /// Cache for a new rating, sharing the outline and full mask.
    fn for_rating(&self, rating: f32) -> Self {
        let fraction = rating_fraction(rating);
        if fraction == self.rating_fraction {
            return self.clone();
        }
        log::trace!("partial mask rebuilt for fraction {fraction}");
        Self::with_partial(self.outline.clone(), Rc::clone(&self.full_mask), fraction)
    }
}

// ── StarRatingBar ─────────────────────────────────────────────────────────

/// A row of five-pointed stars filled left to right up to a fractional rating.
///
/// Each star is painted twice: the full outline in the normal color, then,
/// unless the star lies past the rating, the outline again in the fill color
/// under a rectangular clip. The clip is what makes 3.7 stars show 70% of the
/// fourth star.
///
/// # Example
/// ```rust,ignore
/// let mut bar = StarRatingBar::new(StripConfig::default().star_count(5).current_rating(3.7))?;
/// let draw_list = bar.render(ContentBounds::new(500.0, 100.0))?;
/// draw_list.replay(&mut canvas);
/// ```
#[derive(Debug, Clone)]
pub struct StarRatingBar {
    config: StripConfig,
    cache: StarCache,
    redraw_requested: bool,
}

impl StarRatingBar {
    pub fn new(config: StripConfig) -> Result<Self> {
        config.validate()?;
        let cache = StarCache::build(config.star_radius, config.current_rating)?;
        Ok(Self { config, cache, redraw_requested: true })
    }

    // ── getters ───────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &StripConfig { &self.config }
    #[inline]
    pub fn star_count(&self) -> usize { self.config.star_count }
    #[inline]
    pub fn current_rating(&self) -> f32 { self.config.current_rating }
    #[inline]
    pub fn star_margin(&self) -> f32 { self.config.star_margin }
    #[inline]
    pub fn star_radius(&self) -> f32 { self.config.star_radius }
    #[inline]
    pub fn normal_color(&self) -> Color { self.config.normal_color }
    #[inline]
    pub fn fill_color(&self) -> Color { self.config.fill_color }

    /// Outline and metrics for the current radius.
    #[inline]
    pub fn outline(&self) -> &StarOutline { &self.cache.outline }

    // ── setters ───────────────────────────────────────────────────────────
    //
    // Every setter requests a redraw. Invalid values are rejected before
    // anything changes.

    pub fn set_star_count(&mut self, v: usize) {
        self.config.star_count = v;
        self.request_redraw();
    }

    pub fn set_current_rating(&mut self, v: f32) -> Result<()> {
        let v = ensure_finite("current_rating", v)?;
        self.cache = self.cache.for_rating(v);
        self.config.current_rating = v;
        self.request_redraw();
        Ok(())
    }

    pub fn set_star_margin(&mut self, v: f32) -> Result<()> {
        self.config.star_margin = ensure_non_negative("star_margin", v)?;
        self.request_redraw();
        Ok(())
    }

    pub fn set_star_radius(&mut self, v: f32) -> Result<()> {
        let cache = StarCache::build(v, self.config.current_rating)?;
        self.cache = cache;
        self.config.star_radius = v;
        self.request_redraw();
        Ok(())
    }

    pub fn set_normal_color(&mut self, v: Color) {
        self.config.normal_color = v;
        self.request_redraw();
    }

    pub fn set_fill_color(&mut self, v: Color) {
        self.config.fill_color = v;
        self.request_redraw();
    }

    // ── redraw signalling ─────────────────────────────────────────────────

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
    }

    /// Returns and clears the pending redraw request.
    #[inline]
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    #[inline]
    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    // ── layout ────────────────────────────────────────────────────────────

    pub fn metrics(&self) -> StripMetrics {
        StripMetrics {
            star_count: self.config.star_count,
            star_width: self.cache.outline.width,
            star_height: self.cache.outline.height,
            radius: self.cache.outline.radius,
            margin: self.config.star_margin,
            rating: self.config.current_rating,
        }
    }

    /// Size needed to show every star, padding excluded.
    pub fn natural_size(&self) -> Vec2 {
        self.metrics().natural_size()
    }

    pub fn placements(&self, bounds: ContentBounds) -> Result<Vec<StarPlacement>> {
        layout(&self.metrics(), bounds)
    }

    /// Clip for a star with the given fill fraction, reusing cached masks.
    pub fn mask_for(&self, fraction: f32) -> Result<Mask> {
        match FillState::of(fraction) {
            FillState::Full => Ok(Mask::Full(Rc::clone(&self.cache.full_mask))),
            FillState::Partial(f) if f == self.cache.rating_fraction => {
                Ok(Mask::Partial(Rc::clone(&self.cache.partial_mask)))
            }
            _ => {
                let o = &self.cache.outline;
                build_mask(fraction, o.radius, o.width, o.height)
            }
        }
    }

    // ── painting ──────────────────────────────────────────────────────────

    /// Records every star into `painter`, left to right.
    pub fn paint(&self, painter: &mut Painter, bounds: ContentBounds) -> Result<()> {
        let outline = &self.cache.outline.path;
        for placement in self.placements(bounds)? {
            let mask = self.mask_for(placement.fill_fraction)?;
            log::trace!(
                "star {} at ({}, {}) fill {}",
                placement.index,
                placement.center.x,
                placement.center.y,
                placement.fill_fraction
            );

            painter.at(placement.center, |p| p.fill_path(outline, self.config.normal_color));

            let Some(clip) = mask.path() else { continue };
            painter.at(placement.center, |p| {
                p.clip_path(clip);
                p.fill_path(outline, self.config.fill_color);
            });
        }
        Ok(())
    }

    /// Builds a fresh draw list for `bounds`.
    pub fn render(&self, bounds: ContentBounds) -> Result<DrawList> {
        let mut list = DrawList::new();
        self.render_into(&mut list, bounds)?;
        Ok(list)
    }

    /// Clears `list` and records the strip into it, reusing its allocation.
    pub fn render_into(&self, list: &mut DrawList, bounds: ContentBounds) -> Result<()> {
        list.clear();
        self.paint(&mut Painter::new(list), bounds)
    }
}

#[cfg(test)]
mod tests {
    use starbar_engine::coords::Edges;
    use starbar_engine::scene::DrawCmd;

    use super::*;
    use crate::error::RatingError;

    fn bar(count: usize, rating: f32) -> StarRatingBar {
        StarRatingBar::new(StripConfig::default().star_count(count).current_rating(rating)).unwrap()
    }

    fn bounds() -> ContentBounds {
        ContentBounds::new(500.0, 100.0)
    }

    /// Splits a draw list into per-star groups: one entry per star holding
    /// its command names.
    fn per_star(list: &DrawList) -> Vec<Vec<&'static str>> {
        let mut stars: Vec<Vec<&'static str>> = Vec::new();
        let mut depth = 0;
        for cmd in list.cmds() {
            if depth == 0 && matches!(cmd, DrawCmd::Save) {
                stars.push(Vec::new());
            }
            match cmd {
                DrawCmd::Save => depth += 1,
                DrawCmd::Restore => depth -= 1,
                _ => {}
            }
            if let Some(last) = stars.last_mut() {
                last.push(cmd.name());
            }
        }
        // Merge foreground scopes into the preceding background scope.
        let mut merged: Vec<Vec<&'static str>> = Vec::new();
        for group in stars {
            if group.contains(&"clip-path") {
                if let Some(prev) = merged.last_mut() {
                    prev.extend(group);
                    continue;
                }
            }
            merged.push(group);
        }
        merged
    }

    const BACKGROUND: [&str; 4] = ["save", "translate", "fill-path", "restore"];
    const TWO_PASS: [&str; 9] = [
        "save", "translate", "fill-path", "restore",
        "save", "translate", "clip-path", "fill-path", "restore",
    ];

    // ── defaults & config ─────────────────────────────────────────────────

    #[test]
    fn defaults_match_the_legacy_widget() {
        let cfg = StripConfig::default();
        assert_eq!(cfg.star_count, 0);
        assert_eq!(cfg.current_rating, 0.0);
        assert_eq!(cfg.star_margin, 4.0);
        assert_eq!(cfg.star_radius, 40.0);
        assert_eq!(cfg.normal_color, Color::YELLOW);
        assert_eq!(cfg.fill_color, Color::RED);
    }

    #[test]
    fn new_rejects_bad_config() {
        let err = StarRatingBar::new(StripConfig::default().star_radius(0.0)).unwrap_err();
        assert_eq!(err, RatingError::InvalidConfig { field: "star_radius", value: 0.0 });
        assert!(StarRatingBar::new(StripConfig::default().star_margin(-4.0)).is_err());
        assert!(StarRatingBar::new(StripConfig::default().current_rating(f32::NAN)).is_err());
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn three_point_seven_of_five() {
        let b = bar(5, 3.7);
        let placements = b.placements(bounds()).unwrap();
        let states: Vec<_> = placements.iter().map(|p| FillState::of(p.fill_fraction)).collect();
        assert_eq!(&states[..3], &[FillState::Full; 3]);
        match states[3] {
            FillState::Partial(f) => assert!((f - 0.7).abs() < 1e-5),
            other => panic!("star 3 should be partial, got {other:?}"),
        }
        assert!((placements[4].fill_fraction + 0.3).abs() < 1e-5);
        assert_eq!(states[4], FillState::Empty);

        let list = b.render(bounds()).unwrap();
        let groups = per_star(&list);
        assert_eq!(groups.len(), 5);
        for g in &groups[..4] {
            assert_eq!(g.as_slice(), TWO_PASS);
        }
        assert_eq!(groups[4].as_slice(), BACKGROUND);
        assert!(list.is_balanced());
    }

    #[test]
    fn fourth_star_uses_the_cached_partial_mask() {
        let b = bar(5, 3.7);
        let list = b.render(bounds()).unwrap();
        let clips: Vec<_> = list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::ClipPath(p) => Some(Rc::clone(p)),
                _ => None,
            })
            .collect();
        assert_eq!(clips.len(), 4);
        assert!(Rc::ptr_eq(&clips[0], &b.cache.full_mask));
        assert!(Rc::ptr_eq(&clips[3], &b.cache.partial_mask));

        let w = b.outline().width;
        let revealed = clips[3].points()[0].x + w / 2.0;
        assert!((revealed - 0.7 * w).abs() < 1e-3);
    }

    #[test]
    fn zero_stars_draws_nothing() {
        let b = bar(0, 3.0);
        assert!(b.placements(bounds()).unwrap().is_empty());
        assert!(b.render(bounds()).unwrap().is_empty());
    }

    #[test]
    fn zero_rating_takes_partial_path_on_first_star_only() {
        let b = bar(3, 0.0);
        let list = b.render(bounds()).unwrap();
        let groups = per_star(&list);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].as_slice(), TWO_PASS);
        assert_eq!(groups[1].as_slice(), BACKGROUND);
        assert_eq!(groups[2].as_slice(), BACKGROUND);

        let Some(DrawCmd::ClipPath(clip)) = list.cmds().iter().find(|c| matches!(c, DrawCmd::ClipPath(_)))
        else {
            panic!("first star should be clipped");
        };
        assert_eq!(clip.bounds().unwrap().size.x, 0.0);
    }

    #[test]
    fn rating_past_count_fills_every_star() {
        let list = bar(3, 9.0).render(bounds()).unwrap();
        assert_eq!(list.clip_count(), 3);
        assert_eq!(list.fill_count(), 6);
    }

    #[test]
    fn passes_use_their_own_colors_in_order() {
        let b = StarRatingBar::new(
            StripConfig::default()
                .star_count(1)
                .current_rating(0.5)
                .normal_color(Color::WHITE)
                .fill_color(Color::RED),
        )
        .unwrap();
        let list = b.render(bounds()).unwrap();
        let colors: Vec<_> = list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::FillPath { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, [Color::WHITE, Color::RED]);
    }

    #[test]
    fn translations_follow_the_layout() {
        let b = bar(2, 0.5);
        let pads = ContentBounds::new(300.0, 100.0).with_padding(Edges::all(5.0));
        let centers: Vec<_> = b.placements(pads).unwrap().iter().map(|p| p.center).collect();
        let list = b.render(pads).unwrap();
        let translations: Vec<_> = list
            .cmds()
            .iter()
            .filter_map(|c| match c {
                DrawCmd::Translate(v) => Some(*v),
                _ => None,
            })
            .collect();
        assert_eq!(translations, [centers[0], centers[0], centers[1]]);
    }

    #[test]
    fn render_into_reuses_and_replaces() {
        let b = bar(2, 2.0);
        let mut list = DrawList::new();
        b.render_into(&mut list, bounds()).unwrap();
        let first = list.clone();
        b.render_into(&mut list, bounds()).unwrap();
        assert_eq!(list, first);
    }

    // ── setters & cache ───────────────────────────────────────────────────

    #[test]
    fn setters_round_trip_and_request_redraw() {
        let mut b = bar(0, 0.0);
        assert!(b.take_redraw_request());
        assert!(!b.needs_redraw());

        b.set_star_count(4);
        assert_eq!(b.star_count(), 4);
        assert!(b.take_redraw_request());

        b.set_star_margin(8.0).unwrap();
        assert_eq!(b.star_margin(), 8.0);
        assert!(b.take_redraw_request());

        b.set_normal_color(Color::WHITE);
        b.set_fill_color(Color::YELLOW);
        assert_eq!((b.normal_color(), b.fill_color()), (Color::WHITE, Color::YELLOW));
        assert!(b.take_redraw_request());
    }

    #[test]
    fn invalid_setter_leaves_state_untouched() {
        let mut b = bar(3, 1.5);
        b.take_redraw_request();
        let before = b.outline().clone();

        assert!(b.set_star_radius(-1.0).is_err());
        assert!(b.set_star_margin(f32::NAN).is_err());
        assert!(b.set_current_rating(f32::INFINITY).is_err());

        assert_eq!(b.star_radius(), 40.0);
        assert_eq!(b.star_margin(), 4.0);
        assert_eq!(b.current_rating(), 1.5);
        assert_eq!(b.outline(), &before);
        assert!(!b.needs_redraw());
    }

    #[test]
    fn radius_change_rebuilds_outline() {
        let mut b = bar(1, 0.5);
        let old = Rc::clone(&b.outline().path);
        b.set_star_radius(20.0).unwrap();
        assert!(!Rc::ptr_eq(&old, &b.outline().path));
        assert_eq!(b.outline().radius, 20.0);
        assert_eq!(b.outline().path.points()[0].y, -20.0);
        assert_eq!(b.cache.rating_fraction, 0.5);
    }

    #[test]
    fn rating_change_keeps_outline_and_replaces_partial_mask() {
        let mut b = bar(5, 3.7);
        let outline = Rc::clone(&b.outline().path);
        let partial = Rc::clone(&b.cache.partial_mask);

        b.set_current_rating(1.7).unwrap();
        assert!(Rc::ptr_eq(&outline, &b.outline().path));
        assert!(Rc::ptr_eq(&partial, &b.cache.partial_mask), "same fraction keeps the mask");

        b.set_current_rating(1.25).unwrap();
        assert!(Rc::ptr_eq(&outline, &b.outline().path));
        assert!(!Rc::ptr_eq(&partial, &b.cache.partial_mask));
        assert_eq!(b.cache.rating_fraction, 0.25);
    }

    #[test]
    fn mask_for_builds_when_fraction_is_not_cached() {
        let b = bar(5, 3.7);
        let mask = b.mask_for(0.5).unwrap();
        assert!(matches!(mask, Mask::Partial(_)));
        assert_eq!(mask.path().unwrap().points()[0].x, 0.0);
        assert_eq!(b.mask_for(-1.0).unwrap(), Mask::None);
    }

    #[test]
    fn natural_size_covers_stars_and_margins() {
        let b = bar(5, 0.0);
        let size = b.natural_size();
        let w = b.outline().width;
        assert!((size.x - (5.0 * w + 4.0 * 4.0)).abs() < 1e-3);
        assert_eq!(size.y, b.outline().height);
    }
}
