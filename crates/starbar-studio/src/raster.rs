//! CPU canvas backend: replays a draw list into a `tiny_skia::Pixmap`.

use anyhow::{Context, Result};
use starbar_engine::coords::Vec2;
use starbar_engine::paint::Color;
use starbar_engine::render::Canvas;
use starbar_engine::scene::Path;
use tiny_skia::{FillRule, Mask, Paint, PathBuilder, Pixmap, Transform};

/// Canvas state captured by `save`.
#[derive(Clone)]
struct State {
    transform: Transform,
    clip: Option<Mask>,
}

pub struct PixmapCanvas {
    pixmap: Pixmap,
    state: State,
    stack: Vec<State>,
}

impl PixmapCanvas {
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let mut pixmap = Pixmap::new(width, height)
            .with_context(|| format!("could not create a {width}x{height} pixmap"))?;
        pixmap.fill(skia_color(background));
        Ok(Self {
            pixmap,
            state: State { transform: Transform::identity(), clip: None },
            stack: Vec::new(),
        })
    }

    pub fn save_png(&self, path: &std::path::Path) -> Result<()> {
        self.pixmap
            .save_png(path)
            .with_context(|| format!("failed to write {}", path.display()))
    }

    /// Straight-alpha RGBA of one pixel.
    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Mask that hides everything.
    fn empty_mask(&self) -> Option<Mask> {
        Mask::new(self.pixmap.width(), self.pixmap.height())
    }
}

impl Canvas for PixmapCanvas {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(state) => self.state = state,
            None => log::warn!("PixmapCanvas: restore without save ignored"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.state.transform = self.state.transform.pre_translate(offset.x, offset.y);
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        let Some(path) = skia_path(path) else {
            log::debug!("PixmapCanvas: degenerate fill path skipped");
            return;
        };
        let mut paint = Paint::default();
        let [r, g, b, a] = color.to_srgb_u8();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        self.pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            self.state.transform,
            self.state.clip.as_ref(),
        );
    }

    fn clip_path(&mut self, path: &Path) {
        let transform = self.state.transform;
        // A zero-area clip (e.g. an empty partial fill) hides everything.
        let Some(path) = skia_path(path) else {
            self.state.clip = self.empty_mask();
            return;
        };
        if let Some(mask) = self.state.clip.as_mut() {
            mask.intersect_path(&path, FillRule::Winding, true, transform);
            return;
        }
        let Some(mut mask) = self.empty_mask() else { return };
        mask.fill_path(&path, FillRule::Winding, true, transform);
        self.state.clip = Some(mask);
    }
}

fn skia_color(color: Color) -> tiny_skia::Color {
    let [r, g, b, a] = color.to_srgb_u8();
    tiny_skia::Color::from_rgba8(r, g, b, a)
}

fn skia_path(path: &Path) -> Option<tiny_skia::Path> {
    let (first, rest) = path.points().split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}
