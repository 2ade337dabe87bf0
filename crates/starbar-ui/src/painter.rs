use std::rc::Rc;

use starbar_engine::coords::Vec2;
use starbar_engine::paint::Color;
use starbar_engine::scene::{DrawList, Path};

/// Drawing surface passed to widget `paint` implementations.
///
/// Wraps the engine's `DrawList` with scoped helpers so a widget can never
/// leave a translation or clip active for the next widget.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list }
    }

    // ── scoping ───────────────────────────────────────────────────────────

    /// Runs `f` between a save and its matching restore.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.draw_list.save();
        let out = f(self);
        self.draw_list.restore();
        out
    }

    /// Runs `f` with the origin moved to `origin`, restoring afterwards.
    pub fn at<R>(&mut self, origin: Vec2, f: impl FnOnce(&mut Self) -> R) -> R {
        self.scoped(|p| {
            p.draw_list.translate(origin);
            f(p)
        })
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Solid fill of a closed path in the current frame.
    pub fn fill_path(&mut self, path: &Rc<Path>, color: Color) {
        self.draw_list.fill_path(Rc::clone(path), color);
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Restricts later fills in the current scope to the inside of `path`.
    ///
    /// Cleared by the enclosing scope's restore.
    pub fn clip_path(&mut self, path: &Rc<Path>) {
        self.draw_list.clip_path(Rc::clone(path));
    }
}
