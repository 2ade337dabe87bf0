use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, Path};

/// A 2D surface that supports scoped state, translation, path fill and path
/// clipping. Any backend with arbitrary path clipping can render a rating
/// strip, since partial fills are expressed as a clipped repaint.
pub trait Canvas {
    /// Pushes the current transform and clip.
    fn save(&mut self);

    /// Pops the most recent [`save`](Self::save).
    fn restore(&mut self);

    /// Moves the origin by `offset` in the current frame.
    fn translate(&mut self, offset: Vec2);

    /// Fills `path` (nonzero winding), honoring the active clip.
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Intersects the active clip with `path`.
    fn clip_path(&mut self, path: &Path);
}

impl DrawList {
    /// Executes every command against `canvas` in paint order.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        debug_assert!(self.is_balanced(), "replaying a draw list with an open save");
        for cmd in self.cmds() {
            match cmd {
                DrawCmd::Save => canvas.save(),
                DrawCmd::Restore => canvas.restore(),
                DrawCmd::Translate(offset) => canvas.translate(*offset),
                DrawCmd::FillPath { path, color } => canvas.fill_path(path, *color),
                DrawCmd::ClipPath(path) => canvas.clip_path(path),
            }
        }
        log::trace!("replayed {} draw commands", self.len());
    }
}
