use std::rc::Rc;

use crate::coords::Vec2;
use crate::paint::Color;

use super::Path;

/// Renderer-agnostic draw command stream.
///
/// `Save` snapshots the canvas transform and clip; `Restore` pops back to the
/// most recent snapshot, which is also how an active clip is cleared.
/// `Translate` and `ClipPath` only affect commands up to the matching `Restore`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Save,
    Restore,
    Translate(Vec2),
    /// Fill a closed path (nonzero winding) with a flat color.
    FillPath { path: Rc<Path>, color: Color },
    /// Intersect the current clip with a closed path.
    ClipPath(Rc<Path>),
}

impl DrawCmd {
    /// Short label for logs and test diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            DrawCmd::Save => "save",
            DrawCmd::Restore => "restore",
            DrawCmd::Translate(_) => "translate",
            DrawCmd::FillPath { .. } => "fill-path",
            DrawCmd::ClipPath(_) => "clip-path",
        }
    }
}
