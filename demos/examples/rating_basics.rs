// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating selector basics.
//!
//! A host application keeps its own copy of the rating and updates it from
//! the commit callback, while hover previews only change what is drawn.
//!
//! Run:
//! - `cargo run -p understory_demos --example rating_basics`
//! - `RUST_LOG=debug cargo run -p understory_demos --example rating_basics`

use kurbo::Point;
use understory_demos::init_tracing;
use understory_rating::config::{RatingAppearance, RatingConfig};
use understory_rating::controller::RatingController;
use understory_rating::icon::RatingLayout;

fn main() {
    init_tracing();

    let appearance = RatingAppearance::<()>::default();
    let config = RatingConfig::default().with_hoverable(true);

    // The value the host shows next to the stars.
    let mut shown = 0.0;
    let mut rating = RatingController::new(config, |r: f64| shown = r);
    let layout = RatingLayout::new(
        Point::new(20.0, 20.0),
        config.icon_count,
        appearance.icon_size,
        0.0,
    );
    rating.set_track_bounds(layout.track_bounds());
    println!("track: {:?}", rating.track_bounds());

    let script = [
        ("move", 45.0),
        ("move", 47.0),
        ("move", 130.0),
        ("down", 130.0),
        ("move", 200.0),
        ("leave", 0.0),
    ];
    for (what, x) in script {
        let pos = Point::new(x, 40.0);
        match what {
            "move" => rating.pointer_move(pos),
            "down" => rating.pointer_down(pos),
            _ => rating.pointer_leave(),
        }
        println!(
            "{what:>5} x={x:>5}: phase={:?} fill={:.0}%",
            rating.state().phase(),
            rating.display_ratio() * 100.0
        );
    }
    drop(rating);
    println!("host shows: {shown}");

    // A misconfigured selector still works; the problem shows up in the log.
    let broken = RatingController::new(
        RatingConfig::default().with_initial_rating(Some(7.0)),
        |r: f64| println!("synchronized initial rating {r}"),
    );
    println!("warnings: {:?}", broken.state().warnings());
}
