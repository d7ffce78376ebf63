// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating state machine: committed rating, hover preview, and their transitions.
//!
//! [`RatingState`] owns two cells: the committed rating and an optional
//! preview. Pointer handlers take a track-relative `offset` and the track
//! `width`, run the [calculator](crate::precision::calculate), and return the
//! [`RatingEvent`] that resulted, if any. Nothing is notified from here; the
//! caller decides how to surface events (see
//! [`RatingController`](crate::controller::RatingController)).
//!
//! ## Usage
//!
//! 1) Construct with [`RatingState::new`] and forward the returned event, if any.
//! 2) On pointer down, call [`RatingState::pointer_down`].
//! 3) On pointer move, call [`RatingState::pointer_move`]; it only reports a
//!    change when the pointer crosses into another bucket.
//! 4) On pointer leave, call [`RatingState::pointer_leave`].
//! 5) Read [`RatingState::display_ratio`] when rendering.
//!
//! ## Minimal example
//!
//! ```
//! use understory_rating::config::RatingConfig;
//! use understory_rating::state::{RatingEvent, RatingState};
//!
//! let config = RatingConfig::default().with_hoverable(true);
//! let (mut state, initial) = RatingState::new(config);
//! assert_eq!(initial, None);
//!
//! // Hover over the middle of a 200px track: preview 2.5.
//! assert_eq!(state.pointer_move(100.0, 200.0), Some(RatingEvent::PreviewChanged(Some(2.5))));
//! // Same bucket, nothing to do.
//! assert_eq!(state.pointer_move(101.0, 200.0), None);
//! assert_eq!(state.display_ratio(), 0.5);
//!
//! // Leaving drops the preview and the committed rating shows again.
//! assert_eq!(state.pointer_leave(), Some(RatingEvent::PreviewChanged(None)));
//! assert_eq!(state.display_ratio(), 0.0);
//! ```

use alloc::vec::Vec;

use crate::config::{ConfigWarning, RatingConfig};
use crate::precision::calculate;

/// A change produced by a [`RatingState`] transition.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RatingEvent {
    /// The committed rating was set to this value.
    Committed(f64),
    /// The preview rating changed; `None` means it was cleared.
    PreviewChanged(Option<f64>),
}

/// The current interaction phase.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RatingPhase {
    /// No preview is shown.
    Idle {
        /// The committed rating.
        committed: f64,
    },
    /// The pointer is hovering and a preview is shown.
    Previewing {
        /// The committed rating.
        committed: f64,
        /// The previewed rating.
        preview: f64,
    },
}

/// Cursor the host should show over the track.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    /// The track is inert.
    #[default]
    Default,
    /// The track accepts clicks.
    Pointer,
}

/// Committed and preview rating for one rating selector.
#[derive(Clone, Debug, PartialEq)]
pub struct RatingState {
    config: RatingConfig,
    committed: f64,
    preview: Option<f64>,
    warnings: Vec<ConfigWarning>,
}

impl RatingState {
    /// Creates a state from `config`.
    ///
    /// Configuration problems are logged and kept in [`warnings`](Self::warnings);
    /// construction never fails. When the configuration carries a non-zero
    /// initial rating, the returned event reports it as a commit so observers
    /// can synchronize once.
    #[must_use]
    pub fn new(config: RatingConfig) -> (Self, Option<RatingEvent>) {
        let mut state = Self {
            config,
            committed: 0.0,
            preview: None,
            warnings: Vec::new(),
        };
        state.revalidate();
        let event = state.sync_initial_rating();
        (state, event)
    }

    /// Applies a new configuration.
    ///
    /// Validation reruns when the icon count or initial rating changed. The
    /// committed rating is re-synchronized only when the initial rating
    /// changed to a new non-zero value. A preview that the new configuration
    /// no longer allows is dropped.
    pub fn set_config(&mut self, config: RatingConfig) -> Option<RatingEvent> {
        let old = core::mem::replace(&mut self.config, config);
        // Bitwise, so that a NaN initial rating compares equal to itself.
        let initial_changed =
            old.initial_rating.map(f64::to_bits) != config.initial_rating.map(f64::to_bits);
        if old.icon_count != config.icon_count || initial_changed {
            self.revalidate();
        }

        let synced = if initial_changed {
            self.sync_initial_rating()
        } else {
            None
        };

        if synced.is_some() {
            // A commit already ends any preview.
            return synced;
        }
        if self.preview.is_some() && !self.tracks_hover() {
            self.preview = None;
            return Some(RatingEvent::PreviewChanged(None));
        }
        None
    }

    /// Handles a pointer press at `offset` along a track of `width`.
    ///
    /// Readonly selectors ignore the press. Otherwise the computed rating
    /// becomes the committed rating and any preview ends.
    pub fn pointer_down(&mut self, offset: f64, width: f64) -> Option<RatingEvent> {
        if self.config.readonly {
            return None;
        }
        let value = self.calculate(offset, width);
        self.committed = value;
        self.preview = None;
        tracing::debug!(rating = value, "rating committed");
        Some(RatingEvent::Committed(value))
    }

    /// Handles pointer movement at `offset` along a track of `width`.
    ///
    /// Only hoverable, non-readonly selectors track movement. Moves that stay
    /// within the current bucket produce no event.
    pub fn pointer_move(&mut self, offset: f64, width: f64) -> Option<RatingEvent> {
        if !self.tracks_hover() {
            return None;
        }
        let value = self.calculate(offset, width);
        if self.preview == Some(value) {
            return None;
        }
        self.preview = Some(value);
        Some(RatingEvent::PreviewChanged(Some(value)))
    }

    /// Handles the pointer leaving the track.
    pub fn pointer_leave(&mut self) -> Option<RatingEvent> {
        if !self.tracks_hover() {
            return None;
        }
        self.preview.take()?;
        Some(RatingEvent::PreviewChanged(None))
    }

    /// The committed rating.
    #[must_use]
    pub fn committed(&self) -> f64 {
        self.committed
    }

    /// The preview rating, if the pointer is hovering.
    #[must_use]
    pub fn preview(&self) -> Option<f64> {
        self.preview
    }

    /// The rating currently shown: the preview while hovering, else the committed rating.
    #[must_use]
    pub fn active_rating(&self) -> f64 {
        match self.preview {
            Some(preview) if self.config.hoverable => preview,
            _ => self.committed,
        }
    }

    /// Fraction of the track covered by the filled overlay.
    ///
    /// Zero icons yield `0.0`.
    #[must_use]
    pub fn display_ratio(&self) -> f64 {
        if self.config.icon_count == 0 {
            return 0.0;
        }
        self.active_rating() / f64::from(self.config.icon_count)
    }

    /// The current interaction phase.
    #[must_use]
    pub fn phase(&self) -> RatingPhase {
        match self.preview {
            Some(preview) => RatingPhase::Previewing {
                committed: self.committed,
                preview,
            },
            None => RatingPhase::Idle {
                committed: self.committed,
            },
        }
    }

    /// Cursor the host should show over the track.
    #[must_use]
    pub fn cursor(&self) -> CursorHint {
        if self.config.readonly {
            CursorHint::Default
        } else {
            CursorHint::Pointer
        }
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    /// Problems found the last time the configuration was validated.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    fn tracks_hover(&self) -> bool {
        self.config.hoverable && !self.config.readonly
    }

    fn calculate(&self, offset: f64, width: f64) -> f64 {
        calculate(offset, width, self.config.icon_count, self.config.precision)
    }

    fn revalidate(&mut self) {
        self.warnings = self.config.validate();
        for warning in &self.warnings {
            tracing::warn!(%warning, "invalid rating configuration");
        }
    }

    fn sync_initial_rating(&mut self) -> Option<RatingEvent> {
        // Zero and NaN start from nothing, like an absent initial rating.
        let initial = self
            .config
            .initial_rating
            .filter(|&rating| rating != 0.0 && !rating.is_nan())?;
        self.committed = initial;
        self.preview = None;
        Some(RatingEvent::Committed(initial))
    }
}
