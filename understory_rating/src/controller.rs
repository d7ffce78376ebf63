// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rating controller: pointer positions in, observer notifications out.
//!
//! [`RatingController`] wraps a [`RatingState`] with the track geometry and a
//! [`RatingObserver`]. The host feeds it pointer positions in the same
//! coordinate space as the track bounds; the controller derives the
//! track-relative offset, updates the state, and only then notifies the
//! observer, so observers always see the updated state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_rating::config::RatingConfig;
//! use understory_rating::controller::RatingController;
//!
//! let mut commits = Vec::new();
//! let mut rating = RatingController::new(RatingConfig::default(), |r: f64| commits.push(r));
//! rating.set_track_bounds(Rect::new(10.0, 0.0, 210.0, 40.0));
//!
//! // Click in the middle of the track.
//! rating.pointer_down(Point::new(110.0, 20.0));
//! assert_eq!(rating.state().committed(), 2.5);
//! drop(rating);
//! assert_eq!(commits, [2.5]);
//! ```

use kurbo::{Point, Rect};

use crate::config::RatingConfig;
use crate::state::{RatingEvent, RatingState};

/// Receives notifications from a [`RatingController`].
///
/// Implemented for any `FnMut(f64)` closure, which receives committed ratings.
pub trait RatingObserver {
    /// Called after the committed rating was set, including the initial synchronization.
    ///
    /// `state` already holds the new rating.
    fn on_commit(&mut self, rating: f64, state: &RatingState);

    /// Called after any change that affects what should be displayed.
    fn on_invalidate(&mut self, state: &RatingState) {
        let _ = state;
    }
}

impl<F: FnMut(f64)> RatingObserver for F {
    fn on_commit(&mut self, rating: f64, _state: &RatingState) {
        self(rating);
    }
}

/// An observer that ignores every notification.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopObserver;

impl RatingObserver for NoopObserver {
    fn on_commit(&mut self, _rating: f64, _state: &RatingState) {}
}

/// Pointer-driven rating selector.
#[derive(Clone, Debug)]
pub struct RatingController<O> {
    state: RatingState,
    track: Rect,
    observer: O,
}

impl<O: RatingObserver> RatingController<O> {
    /// Creates a controller and synchronizes `observer` with the initial rating.
    ///
    /// The track starts out empty; call [`set_track_bounds`](Self::set_track_bounds)
    /// once the host has laid out the icons.
    pub fn new(config: RatingConfig, observer: O) -> Self {
        let (state, event) = RatingState::new(config);
        let mut controller = Self {
            state,
            track: Rect::ZERO,
            observer,
        };
        controller.dispatch(event);
        controller
    }

    /// Applies a new configuration, notifying the observer of any resulting change.
    pub fn set_config(&mut self, config: RatingConfig) {
        let event = self.state.set_config(config);
        self.dispatch(event);
    }

    /// Sets the interactive region spanning all icons.
    pub fn set_track_bounds(&mut self, track: Rect) {
        self.track = track;
    }

    /// The interactive region spanning all icons.
    #[must_use]
    pub fn track_bounds(&self) -> Rect {
        self.track
    }

    /// Handles a pointer press at `pos`.
    pub fn pointer_down(&mut self, pos: Point) {
        let Some((offset, width)) = self.locate(pos) else {
            return;
        };
        let event = self.state.pointer_down(offset, width);
        self.dispatch(event);
    }

    /// Handles pointer movement to `pos`.
    pub fn pointer_move(&mut self, pos: Point) {
        let Some((offset, width)) = self.locate(pos) else {
            return;
        };
        let event = self.state.pointer_move(offset, width);
        self.dispatch(event);
    }

    /// Handles the pointer leaving the track.
    pub fn pointer_leave(&mut self) {
        let event = self.state.pointer_leave();
        self.dispatch(event);
    }

    /// The underlying state.
    #[must_use]
    pub fn state(&self) -> &RatingState {
        &self.state
    }

    /// Fraction of the track covered by the filled overlay.
    #[must_use]
    pub fn display_ratio(&self) -> f64 {
        self.state.display_ratio()
    }

    /// The observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Mutable access to the observer.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the controller, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Track-relative offset and width.
    ///
    /// `None` for a degenerate track or a pointer horizontally outside it,
    /// which keeps every computed rating within `0..=icon_count`.
    fn locate(&self, pos: Point) -> Option<(f64, f64)> {
        let width = self.track.width();
        if !(width.is_finite() && width > 0.0) {
            tracing::debug!(?pos, track = ?self.track, "ignoring pointer over empty track");
            return None;
        }
        let offset = pos.x - self.track.x0;
        if !(0.0..=width).contains(&offset) {
            tracing::debug!(?pos, track = ?self.track, "ignoring pointer outside track");
            return None;
        }
        Some((offset, width))
    }

    fn dispatch(&mut self, event: Option<RatingEvent>) {
        let Some(event) = event else {
            return;
        };
        if let RatingEvent::Committed(rating) = event {
            self.observer.on_commit(rating, &self.state);
        }
        self.observer.on_invalidate(&self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::Precision;
    use alloc::vec::Vec;

    #[derive(Debug, Default)]
    struct Recorder {
        commits: Vec<f64>,
        seen_on_commit: Vec<f64>,
        invalidations: usize,
    }

    impl RatingObserver for Recorder {
        fn on_commit(&mut self, rating: f64, state: &RatingState) {
            self.commits.push(rating);
            self.seen_on_commit.push(state.committed());
        }

        fn on_invalidate(&mut self, _state: &RatingState) {
            self.invalidations += 1;
        }
    }

    fn track() -> Rect {
        Rect::new(50.0, 10.0, 250.0, 50.0)
    }

    fn controller(config: RatingConfig) -> RatingController<Recorder> {
        let mut c = RatingController::new(config, Recorder::default());
        c.set_track_bounds(track());
        c
    }

    #[test]
    fn pointer_down_uses_track_relative_offset() {
        let mut c = controller(RatingConfig::default());
        c.pointer_down(Point::new(150.0, 30.0));
        assert_eq!(c.state().committed(), 2.5);
        assert_eq!(c.observer().commits, [2.5]);
        assert_eq!(c.observer().invalidations, 1);
    }

    #[test]
    fn observer_sees_updated_state() {
        let mut c = controller(RatingConfig::default().with_precision(Precision::Whole));
        c.pointer_down(Point::new(130.0, 30.0));
        c.pointer_down(Point::new(250.0, 30.0));
        assert_eq!(c.observer().commits, [2.0, 5.0]);
        assert_eq!(c.observer().seen_on_commit, c.observer().commits);
    }

    #[test]
    fn initial_rating_notifies_once_on_construction() {
        let config = RatingConfig::default()
            .with_precision(Precision::Whole)
            .with_initial_rating(Some(3.0));
        let c = controller(config);
        assert_eq!(c.observer().commits, [3.0]);
        assert_eq!(c.observer().invalidations, 1);
    }

    #[test]
    fn readonly_press_does_not_notify() {
        let config = RatingConfig::default()
            .with_readonly(true)
            .with_initial_rating(Some(1.0));
        let mut c = controller(config);
        c.pointer_down(Point::new(250.0, 30.0));
        assert_eq!(c.state().committed(), 1.0);
        assert_eq!(c.observer().commits, [1.0]);
    }

    #[test]
    fn preview_invalidates_without_committing() {
        let mut c = controller(RatingConfig::default().with_hoverable(true));
        c.pointer_move(Point::new(150.0, 30.0));
        c.pointer_move(Point::new(151.0, 30.0));
        c.pointer_leave();
        assert!(c.observer().commits.is_empty());
        assert_eq!(c.observer().invalidations, 2);
        assert_eq!(c.display_ratio(), 0.0);
    }

    #[test]
    fn empty_track_ignores_pointer() {
        let mut c = RatingController::new(RatingConfig::default(), Recorder::default());
        c.pointer_down(Point::new(10.0, 10.0));
        assert_eq!(c.state().committed(), 0.0);
        assert!(c.observer().commits.is_empty());
        assert_eq!(c.observer().invalidations, 0);
    }

    #[test]
    fn presses_beside_the_track_are_ignored() {
        let mut c = controller(RatingConfig::default().with_precision(Precision::Whole));
        // Track spans x = 50..250.
        c.pointer_down(Point::new(310.0, 30.0));
        c.pointer_down(Point::new(-10.0, 30.0));
        assert_eq!(c.state().committed(), 0.0);
        assert_eq!(c.display_ratio(), 0.0);
        assert!(c.observer().commits.is_empty());

        // Edges are still inside.
        c.pointer_down(Point::new(250.0, 30.0));
        c.pointer_down(Point::new(50.0, 30.0));
        assert_eq!(c.observer().commits, [5.0, 0.0]);
    }

    #[test]
    fn hover_beside_the_track_keeps_the_preview() {
        let mut c = controller(RatingConfig::default().with_hoverable(true));
        c.pointer_move(Point::new(150.0, 30.0));
        c.pointer_move(Point::new(400.0, 30.0));
        assert_eq!(c.state().preview(), Some(2.5));
        assert_eq!(c.observer().invalidations, 1);
    }

    #[test]
    fn noop_observer_still_updates_state() {
        let mut c = RatingController::new(RatingConfig::default(), NoopObserver);
        c.set_track_bounds(track());
        c.pointer_down(Point::new(250.0, 30.0));
        assert_eq!(c.display_ratio(), 1.0);
    }

    #[test]
    fn closures_receive_commits() {
        let mut seen = Vec::new();
        let mut c = RatingController::new(RatingConfig::default(), |r: f64| seen.push(r));
        c.set_track_bounds(track());
        c.pointer_down(Point::new(70.0, 30.0));
        drop(c);
        assert_eq!(seen, [0.5]);
    }

    #[test]
    fn nan_initial_rating_never_notifies() {
        let config = RatingConfig::default().with_initial_rating(Some(f64::NAN));
        let mut c = controller(config);
        c.set_config(config);
        c.set_config(config);
        assert_eq!(c.state().committed(), 0.0);
        assert!(c.observer().commits.is_empty());
        assert_eq!(c.observer().invalidations, 0);
    }

    #[test]
    fn config_change_dispatches_resync() {
        let mut c = controller(RatingConfig::default());
        c.set_config(RatingConfig::default().with_initial_rating(Some(4.0)));
        assert_eq!(c.into_observer().commits, [4.0]);
    }
}
