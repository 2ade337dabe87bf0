//! Reference host: renders one rating strip into a PNG.

mod args;
mod raster;

use anyhow::{Context, Result};
use starbar_engine::logging::{LoggingConfig, init_logging};
use starbar_ui::prelude::*;

use crate::args::Parsed;
use crate::raster::PixmapCanvas;

/// A fixed-size off-screen view.
struct StudioHost {
    view_size: Vec2,
    padding: Edges,
    redraws: usize,
}

impl Host for StudioHost {
    fn notify_needs_redraw(&mut self) {
        self.redraws += 1;
    }

    fn current_content_bounds(&self) -> ContentBounds {
        ContentBounds::from_view(self.view_size, self.padding)
    }
}

fn main() -> Result<()> {
    let opts = match args::parse(std::env::args().skip(1))? {
        Parsed::Run(opts) => opts,
        Parsed::Help => {
            args::print_usage();
            return Ok(());
        }
    };

    init_logging(LoggingConfig { env_filter: opts.log_filter.clone(), ..LoggingConfig::default() });

    anyhow::ensure!(
        opts.view_size.x >= 1.0 && opts.view_size.y >= 1.0,
        "view must be at least 1x1 px, got {}x{}",
        opts.view_size.x,
        opts.view_size.y
    );

    let bar = StarRatingBar::new(opts.strip).context("invalid star rating configuration")?;
    let host = StudioHost { view_size: opts.view_size, padding: opts.padding, redraws: 0 };
    let view = RatingView::new(bar, host);

    let natural = view.bar().natural_size();
    if natural.x > view.host().current_content_bounds().size.x {
        log::warn!(
            "{} stars need {:.1} px but only {:.1} px are available; the strip will be cut off",
            view.bar().star_count(),
            natural.x,
            view.host().current_content_bounds().size.x
        );
    }

    let draw_list = view.draw().context("failed to lay out the star strip")?;
    log::info!(
        "rating {} of {}: {} commands, {} clipped passes ({} redraw requests)",
        view.bar().current_rating(),
        view.bar().star_count(),
        draw_list.len(),
        draw_list.clip_count(),
        view.host().redraws
    );

    let mut canvas = PixmapCanvas::new(
        opts.view_size.x.ceil() as u32,
        opts.view_size.y.ceil() as u32,
        Color::WHITE,
    )?;
    draw_list.replay(&mut canvas);
    canvas.save_png(&opts.output)?;

    log::info!("wrote {}", opts.output.display());
    Ok(())
}
