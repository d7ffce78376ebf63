// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_rating --heading-base-level=0

//! Understory Rating: a headless rating selector.
//!
//! This crate models the interaction logic of a "star rating" control: a row
//! of icons where the pointer position picks a value, optionally previewed
//! while hovering and committed on press. It is split into small pieces:
//!
//! - [`precision`]: the rating calculator, mapping a track offset to a value on
//!   a tenth/half/whole grid.
//! - [`config`]: behavioral configuration, appearance, and non-fatal
//!   validation warnings.
//! - [`state`]: the committed/preview state machine, returning transition events.
//! - [`controller`]: pointer positions in, observer notifications out.
//! - [`icon`]: icon row layout and the painter seam for rendering.
//!
//! The crate does not draw anything and does not assume a UI framework. Hosts
//! supply the track geometry and pointer positions, and render by
//! implementing [`icon::IconPainter`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_rating::config::{RatingAppearance, RatingConfig};
//! use understory_rating::controller::RatingController;
//! use understory_rating::icon::RatingLayout;
//!
//! let appearance = RatingAppearance::<()>::default();
//! let config = RatingConfig::default().with_hoverable(true);
//! let mut last = None;
//! let mut rating = RatingController::new(config, |r: f64| last = Some(r));
//!
//! // Lay out five 40px icons at the origin and use that as the track.
//! let layout = RatingLayout::new(Point::ZERO, 5, appearance.icon_size, rating.display_ratio());
//! rating.set_track_bounds(layout.track_bounds());
//!
//! // Hovering previews without committing.
//! rating.pointer_move(Point::new(150.0, 20.0));
//! assert_eq!(rating.display_ratio(), 0.8);
//! assert_eq!(rating.state().committed(), 0.0);
//!
//! // Pressing commits and notifies.
//! rating.pointer_down(Point::new(150.0, 20.0));
//! rating.pointer_leave();
//! assert_eq!(rating.display_ratio(), 0.8);
//! drop(rating);
//! assert_eq!(last, Some(4.0));
//! ```
//!
//! ## Diagnostics
//!
//! Invalid configuration (zero icons, an initial rating outside the icon
//! range) is reported as [`config::ConfigWarning`] through `tracing` at warn
//! level and kept on the state for inspection. It never stops the selector
//! from working.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod icon;
pub mod precision;
pub mod state;
