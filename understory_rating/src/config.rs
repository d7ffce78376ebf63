// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating configuration, appearance, and validation.
//!
//! Configuration problems are never fatal. [`RatingConfig::validate`] reports
//! them as [`ConfigWarning`]s and the widget keeps running in a best-effort
//! state (for example, zero icons simply render nothing).
//!
//! ```
//! use understory_rating::config::{ConfigWarning, RatingConfig};
//! use understory_rating::precision::Precision;
//!
//! let config = RatingConfig::default()
//!     .with_precision(Precision::Whole)
//!     .with_initial_rating(Some(7.0));
//!
//! assert_eq!(
//!     config.validate(),
//!     vec![ConfigWarning::InitialRatingOutOfRange { initial_rating: 7.0, icon_count: 5 }]
//! );
//! ```

use alloc::vec::Vec;

use peniko::Color;
use peniko::color::palette;

use crate::precision::Precision;

/// Non-fatal configuration diagnostics.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    /// The icon count is zero, so nothing can be displayed or selected.
    #[error("icon count must be at least 1, got {icon_count}")]
    InvalidIconCount {
        /// The configured icon count.
        icon_count: u32,
    },
    /// The initial rating lies outside `0..=icon_count`.
    #[error("initial rating {initial_rating} is outside 0..={icon_count}")]
    InitialRatingOutOfRange {
        /// The configured initial rating.
        initial_rating: f64,
        /// The configured icon count.
        icon_count: u32,
    },
}

/// Behavioral configuration of a rating selector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatingConfig {
    /// Number of icons in the track.
    pub icon_count: u32,
    /// Discretization of the rating.
    pub precision: Precision,
    /// When set, pointer input is ignored entirely.
    pub readonly: bool,
    /// When set, pointer movement shows a preview of the rating.
    pub hoverable: bool,
    /// Rating to start from; `None` starts at zero.
    pub initial_rating: Option<f64>,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            icon_count: 5,
            precision: Precision::Half,
            readonly: false,
            hoverable: false,
            initial_rating: None,
        }
    }
}

impl RatingConfig {
    /// Returns a copy with the given icon count.
    #[must_use]
    pub fn with_icon_count(mut self, icon_count: u32) -> Self {
        self.icon_count = icon_count;
        self
    }

    /// Returns a copy with the given precision.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Returns a copy with the readonly flag set.
    #[must_use]
    pub fn with_readonly(mut self, readonly: bool) -> Self {
        self.readonly = readonly;
        self
    }

    /// Returns a copy with the hoverable flag set.
    #[must_use]
    pub fn with_hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Returns a copy with the given initial rating.
    #[must_use]
    pub fn with_initial_rating(mut self, initial_rating: Option<f64>) -> Self {
        self.initial_rating = initial_rating;
        self
    }

    /// Checks the configuration and returns every problem found.
    ///
    /// An empty result means the configuration is valid. An out-of-range
    /// initial rating is reported but is not clamped by the state machine.
    #[must_use]
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        if self.icon_count == 0 {
            warnings.push(ConfigWarning::InvalidIconCount {
                icon_count: self.icon_count,
            });
        }
        if let Some(initial_rating) = self.initial_rating {
            let in_range = initial_rating.is_finite()
                && initial_rating >= 0.0
                && initial_rating <= f64::from(self.icon_count);
            if !in_range {
                warnings.push(ConfigWarning::InitialRatingOutOfRange {
                    initial_rating,
                    icon_count: self.icon_count,
                });
            }
        }
        warnings
    }
}

/// Presentation parameters handed to the icon painter.
///
/// The core never interprets these; `S` is an opaque style payload passed
/// through to custom painters unchanged.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingAppearance<S = ()> {
    /// Edge length of one square icon cell.
    pub icon_size: f64,
    /// Color of the empty icon row.
    pub empty_color: Color,
    /// Color of the filled overlay row.
    pub fill_color: Color,
    /// Custom style payload.
    pub style: Option<S>,
}

impl<S> Default for RatingAppearance<S> {
    fn default() -> Self {
        Self {
            icon_size: 40.0,
            empty_color: palette::css::SILVER,
            fill_color: palette::css::GOLD,
            style: None,
        }
    }
}

impl<S> RatingAppearance<S> {
    /// Returns a copy with the given icon size.
    #[must_use]
    pub fn with_icon_size(mut self, icon_size: f64) -> Self {
        self.icon_size = icon_size;
        self
    }

    /// Returns a copy with the given empty and fill colors.
    #[must_use]
    pub fn with_colors(mut self, empty_color: Color, fill_color: Color) -> Self {
        self.empty_color = empty_color;
        self.fill_color = fill_color;
        self
    }

    /// Returns a copy carrying a custom style payload.
    #[must_use]
    pub fn with_style(mut self, style: S) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn defaults_match_a_five_star_half_step_widget() {
        let config = RatingConfig::default();
        assert_eq!(config.icon_count, 5);
        assert_eq!(config.precision, Precision::Half);
        assert!(!config.readonly);
        assert!(!config.hoverable);
        assert_eq!(config.initial_rating, None);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn zero_icons_is_reported() {
        let config = RatingConfig::default().with_icon_count(0);
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::InvalidIconCount { icon_count: 0 }]
        );
    }

    #[test]
    fn initial_rating_above_icon_count_is_reported() {
        let config = RatingConfig::default().with_initial_rating(Some(7.0));
        assert_eq!(
            config.validate(),
            vec![ConfigWarning::InitialRatingOutOfRange {
                initial_rating: 7.0,
                icon_count: 5,
            }]
        );
    }

    #[test]
    fn initial_rating_at_bounds_is_valid() {
        assert!(
            RatingConfig::default()
                .with_initial_rating(Some(5.0))
                .validate()
                .is_empty()
        );
        assert!(
            RatingConfig::default()
                .with_initial_rating(Some(0.0))
                .validate()
                .is_empty()
        );
    }

    #[test]
    fn negative_or_nan_initial_rating_is_reported() {
        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let warnings = RatingConfig::default()
                .with_initial_rating(Some(bad))
                .validate();
            assert_eq!(warnings.len(), 1, "expected one warning for {bad}");
            assert!(matches!(
                warnings[0],
                ConfigWarning::InitialRatingOutOfRange { icon_count: 5, .. }
            ));
        }
    }

    #[test]
    fn both_problems_are_reported_together() {
        let config = RatingConfig::default()
            .with_icon_count(0)
            .with_initial_rating(Some(1.0));
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn warnings_render_readable_messages() {
        let message = alloc::format!("{}", ConfigWarning::InvalidIconCount { icon_count: 0 });
        assert_eq!(message, "icon count must be at least 1, got 0");
    }

    #[test]
    fn default_appearance_is_silver_and_gold() {
        let appearance = RatingAppearance::<()>::default();
        assert_eq!(appearance.icon_size, 40.0);
        assert_eq!(appearance.empty_color, palette::css::SILVER);
        assert_eq!(appearance.fill_color, palette::css::GOLD);
        assert!(appearance.style.is_none());
    }
}
