//! The seam between a rating strip and the view system that hosts it.
//!
//! A host owns the real view: it knows its bounds and padding and can
//! schedule a repaint. [`RatingView`] is the caller-side glue that forwards
//! setting changes to the bar and turns them into redraw requests.

use starbar_engine::paint::Color;
use starbar_engine::scene::DrawList;

use crate::error::Result;
use crate::layout::ContentBounds;
use crate::widgets::star_rating::StarRatingBar;

/// Services a view system provides to a rating strip.
pub trait Host {
    /// Schedule a repaint of the view showing the strip.
    fn notify_needs_redraw(&mut self);

    /// Content size (padding excluded) and padding for the next layout pass.
    fn current_content_bounds(&self) -> ContentBounds;
}

/// A [`StarRatingBar`] bound to its [`Host`].
pub struct RatingView<H: Host> {
    bar: StarRatingBar,
    host: H,
}

impl<H: Host> RatingView<H> {
    /// Binds `bar` to `host` and asks for a first paint.
    pub fn new(bar: StarRatingBar, host: H) -> Self {
        let mut view = Self { bar, host };
        view.flush_redraw();
        view
    }

    #[inline]
    pub fn bar(&self) -> &StarRatingBar { &self.bar }
    #[inline]
    pub fn host(&self) -> &H { &self.host }
    #[inline]
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    pub fn into_parts(self) -> (StarRatingBar, H) {
        (self.bar, self.host)
    }

    // ── setters ───────────────────────────────────────────────────────────

    pub fn set_star_count(&mut self, v: usize) {
        self.bar.set_star_count(v);
        self.flush_redraw();
    }

    pub fn set_current_rating(&mut self, v: f32) -> Result<()> {
        self.bar.set_current_rating(v)?;
        self.flush_redraw();
        Ok(())
    }

    pub fn set_star_margin(&mut self, v: f32) -> Result<()> {
        self.bar.set_star_margin(v)?;
        self.flush_redraw();
        Ok(())
    }

    pub fn set_star_radius(&mut self, v: f32) -> Result<()> {
        self.bar.set_star_radius(v)?;
        self.flush_redraw();
        Ok(())
    }

    pub fn set_normal_color(&mut self, v: Color) {
        self.bar.set_normal_color(v);
        self.flush_redraw();
    }

    pub fn set_fill_color(&mut self, v: Color) {
        self.bar.set_fill_color(v);
        self.flush_redraw();
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Lays out against the host's current bounds and records the strip.
    pub fn draw(&self) -> Result<DrawList> {
        self.bar.render(self.host.current_content_bounds())
    }

    /// Like [`draw`](Self::draw) but records into an existing list.
    pub fn draw_into(&self, list: &mut DrawList) -> Result<()> {
        self.bar.render_into(list, self.host.current_content_bounds())
    }

    fn flush_redraw(&mut self) {
        if self.bar.take_redraw_request() {
            self.host.notify_needs_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use starbar_engine::coords::{Edges, Vec2};

    use super::*;
    use crate::widgets::star_rating::StripConfig;

    #[derive(Default)]
    struct FakeHost {
        redraws: usize,
        view_size: Vec2,
        padding: Edges,
    }

    impl Host for FakeHost {
        fn notify_needs_redraw(&mut self) {
            self.redraws += 1;
        }

        fn current_content_bounds(&self) -> ContentBounds {
            ContentBounds::from_view(self.view_size, self.padding)
        }
    }

    fn view() -> RatingView<FakeHost> {
        let bar = StarRatingBar::new(StripConfig::default().star_count(5).current_rating(3.7)).unwrap();
        let host = FakeHost { view_size: Vec2::new(500.0, 100.0), ..FakeHost::default() };
        RatingView::new(bar, host)
    }

    #[test]
    fn binding_requests_first_paint() {
        assert_eq!(view().host().redraws, 1);
    }

    #[test]
    fn every_successful_setter_notifies_once() {
        let mut v = view();
        v.set_star_count(3);
        v.set_current_rating(2.0).unwrap();
        v.set_star_margin(2.0).unwrap();
        v.set_star_radius(30.0).unwrap();
        v.set_normal_color(Color::WHITE);
        v.set_fill_color(Color::YELLOW);
        assert_eq!(v.host().redraws, 7);
    }

    #[test]
    fn rejected_setter_does_not_notify() {
        let mut v = view();
        assert!(v.set_star_radius(0.0).is_err());
        assert!(v.set_current_rating(f32::NAN).is_err());
        assert_eq!(v.host().redraws, 1);
    }

    #[test]
    fn draw_uses_host_bounds() {
        let mut v = view();
        let plain = v.draw().unwrap();
        v.host_mut().padding = Edges { left: 10.0, ..Edges::default() };
        let padded = v.draw().unwrap();
        assert_eq!(plain.len(), padded.len());
        assert_ne!(plain, padded);

        let mut reused = DrawList::new();
        v.draw_into(&mut reused).unwrap();
        assert_eq!(reused, padded);
    }
}
