use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, Path};

/// Recorded draw stream for a frame.
///
/// Commands are replayed strictly in insertion order; paint order is the
/// order in which widgets pushed them.
///
/// # Scoping
///
/// Use [`save`](Self::save) / [`restore`](Self::restore) to scope translation
/// and clipping. Calls must be balanced before the list is handed to a canvas.
///
/// ```rust,ignore
/// draw_list.save();
/// draw_list.translate(center);
/// draw_list.clip_path(mask);
/// draw_list.fill_path(outline, color);
/// draw_list.restore();
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DrawList {
    cmds: Vec<DrawCmd>,
    /// Number of `Save` commands not yet matched by a `Restore`.
    depth: usize,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.cmds.clear();
        self.depth = 0;
    }

    /// Returns commands in paint order.
    #[inline]
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    /// `true` when every `save` has a matching `restore`.
    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        match &cmd {
            DrawCmd::Save => self.depth += 1,
            DrawCmd::Restore => {
                debug_assert!(self.depth > 0, "restore called without matching save");
                self.depth = self.depth.saturating_sub(1);
            }
            _ => {}
        }
        self.cmds.push(cmd);
    }

    /// Snapshots transform and clip. Must be paired with [`restore`](Self::restore).
    #[inline]
    pub fn save(&mut self) {
        self.push(DrawCmd::Save);
    }

    /// Returns to the most recent snapshot, dropping any clip set since.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `save`.
    #[inline]
    pub fn restore(&mut self) {
        self.push(DrawCmd::Restore);
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.push(DrawCmd::Translate(offset));
    }

    #[inline]
    pub fn fill_path(&mut self, path: Rc<Path>, color: Color) {
        self.push(DrawCmd::FillPath { path, color });
    }

    #[inline]
    pub fn clip_path(&mut self, path: Rc<Path>) {
        self.push(DrawCmd::ClipPath(path));
    }

    /// Number of fill commands recorded.
    pub fn fill_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, DrawCmd::FillPath { .. })).count()
    }

    /// Number of clip commands recorded.
    pub fn clip_count(&self) -> usize {
        self.cmds.iter().filter(|c| matches!(c, DrawCmd::ClipPath(_))).count()
    }
}
