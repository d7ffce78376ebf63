// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating calculator: map a pointer offset along the track to a discretized rating.
//!
//! ## Minimal example
//!
//! ```
//! use understory_rating::precision::{Precision, calculate};
//!
//! // 5 icons over a 200px track, half-step precision.
//! assert_eq!(calculate(100.0, 200.0, 5, Precision::Half), 2.5);
//! assert_eq!(calculate(0.0, 200.0, 5, Precision::Half), 0.0);
//! assert_eq!(calculate(200.0, 200.0, 5, Precision::Half), 5.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Discretization granularity of a rating.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Tenths: `0.1`, `0.2`, ...
    Tenth,
    /// Halves: `0.5`, `1.0`, `1.5`, ...
    #[default]
    Half,
    /// Whole units: `1`, `2`, `3`, ...
    Whole,
}

impl Precision {
    /// Maps a step size coming from a host (`0.1`, `0.5` or `1.0`) to a precision.
    ///
    /// Returns `None` for any other value.
    #[must_use]
    pub fn from_step(step: f64) -> Option<Self> {
        if step == 0.1 {
            Some(Self::Tenth)
        } else if step == 0.5 {
            Some(Self::Half)
        } else if step == 1.0 {
            Some(Self::Whole)
        } else {
            None
        }
    }

    /// The step size between two adjacent ratings.
    #[must_use]
    pub fn step(self) -> f64 {
        match self {
            Self::Tenth => 0.1,
            Self::Half => 0.5,
            Self::Whole => 1.0,
        }
    }

    /// Number of buckets per icon.
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::Tenth => 10.0,
            Self::Half => 2.0,
            Self::Whole => 1.0,
        }
    }

    /// Snaps an arbitrary value onto this precision's grid.
    #[must_use]
    pub fn snap(self, value: f64) -> f64 {
        let factor = self.factor();
        (value * factor).round() / factor
    }
}

/// Computes the rating for a pointer `offset` along a track of `track_width`.
///
/// The raw value `(offset / track_width) * icon_count` is rounded to the
/// nearest multiple of `precision`. No clamping is performed: callers pass an
/// offset taken from a pointer inside the track.
///
/// `track_width` must be non-zero; otherwise the result is not finite.
#[must_use]
pub fn calculate(offset: f64, track_width: f64, icon_count: u32, precision: Precision) -> f64 {
    let raw = (offset / track_width) * f64::from(icon_count);
    precision.snap(raw)
}
