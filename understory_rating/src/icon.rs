// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon rows and the painter seam.
//!
//! A rating selector is drawn as two rows of identical icons: an empty row,
//! and a filled row clipped to the [display ratio](crate::state::RatingState::display_ratio).
//! [`RatingLayout`] computes where everything goes and drives an
//! [`IconPainter`]; how an icon actually looks is up to the painter. The
//! default star outline is available as [`StarIcon`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_rating::config::RatingAppearance;
//! use understory_rating::icon::{IconPainter, IconParams, RatingLayout};
//!
//! #[derive(Default)]
//! struct Count { icons: usize, clip: Option<Rect> }
//!
//! impl IconPainter for Count {
//!     fn paint_icon(&mut self, _origin: Point, _params: &IconParams<'_>) {
//!         self.icons += 1;
//!     }
//!     fn push_clip(&mut self, clip: Rect) {
//!         self.clip = Some(clip);
//!     }
//! }
//!
//! let appearance = RatingAppearance::<()>::default();
//! let layout = RatingLayout::new(Point::ZERO, 5, appearance.icon_size, 0.5);
//! let mut painter = Count::default();
//! layout.paint(&appearance, &mut painter);
//!
//! assert_eq!(painter.icons, 10);
//! assert_eq!(painter.clip, Some(Rect::new(0.0, 0.0, 100.0, 40.0)));
//! ```

use kurbo::{Affine, BezPath, Point, Rect, Vec2};
use peniko::Color;

use crate::config::RatingAppearance;

/// Everything a painter needs to draw one icon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconParams<'a, S = ()> {
    /// Edge length of the square icon cell.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Custom style payload, passed through unchanged.
    pub style: Option<&'a S>,
}

/// Draws icons for a rating row.
///
/// Implementations decide what an icon looks like; the default star is one
/// option ([`StarIcon`]), a caller-supplied shape or image is another.
pub trait IconPainter<S = ()> {
    /// Paints one icon whose square cell has its top-left corner at `origin`.
    fn paint_icon(&mut self, origin: Point, params: &IconParams<'_, S>);

    /// Restricts subsequent painting to `clip` until the matching [`pop_clip`](Self::pop_clip).
    fn push_clip(&mut self, clip: Rect) {
        let _ = clip;
    }

    /// Ends the most recent [`push_clip`](Self::push_clip).
    fn pop_clip(&mut self) {}
}

/// The default five-pointed star.
#[derive(Copy, Clone, Debug, Default)]
pub struct StarIcon;

impl StarIcon {
    /// Star vertices in a `-100..100` square, tip pointing up.
    pub const POINTS: [(f64, f64); 10] = [
        (0.0, -100.0),
        (29.39, -40.45),
        (95.11, -30.9),
        (47.55, 15.45),
        (58.78, 80.9),
        (0.0, 50.0),
        (-58.78, 80.9),
        (-47.55, 15.45),
        (-95.11, -30.9),
        (-29.39, -40.45),
    ];

    /// The star outline scaled into the square cell at `origin` with edge `size`.
    #[must_use]
    pub fn path(origin: Point, size: f64) -> BezPath {
        let transform = Affine::translate(origin.to_vec2() + Vec2::new(size, size) * 0.5)
            * Affine::scale(size / 200.0);
        let mut path = BezPath::new();
        for (i, &(x, y)) in Self::POINTS.iter().enumerate() {
            let p = transform * Point::new(x, y);
            if i == 0 {
                path.move_to(p);
            } else {
                path.line_to(p);
            }
        }
        path.close_path();
        path
    }
}

/// Placement of the empty row, the filled row, and the fill clip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingLayout {
    origin: Point,
    icon_count: u32,
    icon_size: f64,
    ratio: f64,
}

impl RatingLayout {
    /// Lays out `icon_count` icons of `icon_size` left to right from `origin`.
    ///
    /// `ratio` is the filled fraction, normally
    /// [`RatingState::display_ratio`](crate::state::RatingState::display_ratio).
    /// It is clamped to `0.0..=1.0` for drawing.
    #[must_use]
    pub fn new(origin: Point, icon_count: u32, icon_size: f64, ratio: f64) -> Self {
        let ratio = if ratio.is_nan() {
            0.0
        } else {
            ratio.clamp(0.0, 1.0)
        };
        Self {
            origin,
            icon_count,
            icon_size,
            ratio,
        }
    }

    /// The rectangle spanning all icons, suitable as the controller's track bounds.
    #[must_use]
    pub fn track_bounds(&self) -> Rect {
        Rect::from_origin_size(
            self.origin,
            (f64::from(self.icon_count) * self.icon_size, self.icon_size),
        )
    }

    /// The region the filled row is clipped to.
    #[must_use]
    pub fn fill_clip(&self) -> Rect {
        let track = self.track_bounds();
        Rect::new(
            track.x0,
            track.y0,
            track.x0 + track.width() * self.ratio,
            track.y1,
        )
    }

    /// Top-left corners of each icon cell.
    pub fn icon_origins(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.icon_count)
            .map(move |i| self.origin + Vec2::new(f64::from(i) * self.icon_size, 0.0))
    }

    /// Paints the empty row, then the filled row inside [`fill_clip`](Self::fill_clip).
    pub fn paint<S, P>(&self, appearance: &RatingAppearance<S>, painter: &mut P)
    where
        P: IconPainter<S> + ?Sized,
    {
        let empty = IconParams {
            size: self.icon_size,
            color: appearance.empty_color,
            style: appearance.style.as_ref(),
        };
        for origin in self.icon_origins() {
            painter.paint_icon(origin, &empty);
        }

        let filled = IconParams {
            color: appearance.fill_color,
            ..empty
        };
        painter.push_clip(self.fill_clip());
        for origin in self.icon_origins() {
            painter.paint_icon(origin, &filled);
        }
        painter.pop_clip();
    }
}
