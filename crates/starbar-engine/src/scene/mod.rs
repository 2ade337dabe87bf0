//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - keep paint order equal to insertion order
//! - track save/restore balance so scoped state never leaks between items

mod cmd;
mod list;
mod path;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use path::Path;
