//! Starbar UI: fractional star-rating strips on top of `starbar-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use starbar_ui::prelude::*;
//!
//! let bar = StarRatingBar::new(StripConfig::default().star_count(5).current_rating(3.7))?;
//!
//! // Per redraw, with the host's content size and padding:
//! let draw_list = bar.render(ContentBounds::new(500.0, 100.0))?;
//! draw_list.replay(&mut my_canvas);
//! ```
//!
//! The building blocks are public and pure: [`geometry`] builds the star
//! outline, [`clip`] picks the partial-fill mask, [`layout`] places stars and
//! [`rating`] maps one rating onto per-star fractions.

pub mod clip;
pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod painter;
pub mod rating;
pub mod widgets;

/// Everything a host needs. Import this where the strip is wired up.
pub mod prelude {
    pub use crate::clip::Mask;
    pub use crate::error::RatingError;
    pub use crate::geometry::{STAR_SECTIONS, StarOutline};
    pub use crate::host::{Host, RatingView};
    pub use crate::layout::{ContentBounds, StarPlacement};
    pub use crate::painter::Painter;
    pub use crate::rating::FillState;
    pub use crate::widgets::star_rating::{StarRatingBar, StripConfig};

    // Re-export the engine primitives everyone needs.
    pub use starbar_engine::coords::{Edges, Rect, Vec2};
    pub use starbar_engine::paint::Color;
    pub use starbar_engine::render::Canvas;
    pub use starbar_engine::scene::{DrawCmd, DrawList, Path};
}
