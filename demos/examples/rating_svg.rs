// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render a rating selector to SVG.
//!
//! Commits a rating of 3.5 and writes the two-row star markup to stdout.
//!
//! Run:
//! - `cargo run -p understory_demos --example rating_svg > rating.svg`

use kurbo::Point;
use peniko::color::palette;
use understory_demos::{SvgPainter, init_tracing};
use understory_rating::config::{RatingAppearance, RatingConfig};
use understory_rating::controller::{NoopObserver, RatingController};
use understory_rating::icon::RatingLayout;

fn main() {
    init_tracing();

    let appearance = RatingAppearance::<()>::default()
        .with_icon_size(32.0)
        .with_colors(palette::css::GRAY, palette::css::ORANGE);
    let config = RatingConfig::default();

    let mut rating = RatingController::new(config, NoopObserver);
    let track = RatingLayout::new(Point::ZERO, config.icon_count, appearance.icon_size, 0.0)
        .track_bounds();
    rating.set_track_bounds(track);
    // 3.5 of 5 icons.
    rating.pointer_down(Point::new(track.width() * 0.7, 16.0));

    let layout = RatingLayout::new(
        Point::ZERO,
        config.icon_count,
        appearance.icon_size,
        rating.display_ratio(),
    );
    let mut painter = SvgPainter::new();
    layout.paint(&appearance, &mut painter);
    print!("{}", painter.finish(track.width(), track.height()));
}
