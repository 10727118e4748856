// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based reveal animation.
//!
//! [`AnimationDriver`] turns wall-clock timestamps into draw progress in `[0, 1]`:
//!
//! ```text
//! NotStarted --start--> Running --progress reaches 1--> Complete
//!                          |                               |
//!                          +--cancel/abort--> Cancelled <--abort
//! ```
//!
//! Only the frame whose token matches the outstanding request is processed, so frames
//! arriving after teardown, or duplicated by the host, are ignored.

use crate::scheduler::{FrameToken, Scheduler};

/// Animation lifecycle state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationState {
    /// `start` has not been called.
    NotStarted,
    /// Frames are being requested.
    Running {
        /// Timestamp passed to `start`, in milliseconds.
        started_at_ms: f64,
        /// The outstanding frame request.
        pending: FrameToken,
    },
    /// The final (`progress == 1`) frame has been produced.
    Complete,
    /// Stopped before completion; no frame is outstanding.
    Cancelled,
}

/// What the caller should draw for a delivered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    /// The frame is stale or unexpected; draw nothing.
    Ignored,
    /// Draw at this progress (`< 1`); the next frame is already requested.
    Partial(f64),
    /// Draw at progress `1`; this happens exactly once per animation.
    Final,
}

impl FrameOutcome {
    /// Returns the progress to draw, if any.
    pub fn progress(self) -> Option<f64> {
        match self {
            Self::Ignored => None,
            Self::Partial(p) => Some(p),
            Self::Final => Some(1.0),
        }
    }
}

/// Maps elapsed time to draw progress and keeps exactly one frame request outstanding while
/// running.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    duration_ms: f64,
    state: AnimationState,
    last_progress: f64,
}

impl AnimationDriver {
    /// Creates a driver for an animation lasting `duration_ms`.
    pub fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms: f64::from(duration_ms),
            state: AnimationState::NotStarted,
            last_progress: 0.0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Returns the progress handed out by the most recent processed frame.
    pub fn last_progress(&self) -> f64 {
        self.last_progress
    }

    /// Returns `true` while frames are being requested.
    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimationState::Running { .. })
    }

    /// Starts the animation at `now_ms` and requests the first frame.
    ///
    /// Returns `false` (and does nothing) unless the driver is in `NotStarted`.
    pub fn start(&mut self, scheduler: &mut impl Scheduler, now_ms: f64) -> bool {
        if self.state != AnimationState::NotStarted {
            return false;
        }
        let pending = scheduler.request_frame();
        self.state = AnimationState::Running {
            started_at_ms: now_ms,
            pending,
        };
        log::debug!("animation started at {now_ms}ms over {}ms", self.duration_ms);
        true
    }

    /// Processes a delivered frame.
    ///
    /// Progress is `clamp((now - start) / duration, 0, 1)`, never lower than the previous
    /// frame's. Below `1` the next frame is requested; at `1` the driver completes.
    pub fn on_frame(
        &mut self,
        scheduler: &mut impl Scheduler,
        token: FrameToken,
        now_ms: f64,
    ) -> FrameOutcome {
        let AnimationState::Running {
            started_at_ms,
            pending,
        } = self.state
        else {
            log::trace!("ignoring frame {token:?} in state {:?}", self.state);
            return FrameOutcome::Ignored;
        };
        if token != pending {
            log::warn!("ignoring stale frame {token:?}, waiting for {pending:?}");
            return FrameOutcome::Ignored;
        }

        let progress = self.progress_at(started_at_ms, now_ms);
        self.last_progress = progress;
        if progress < 1.0 {
            let pending = scheduler.request_frame();
            self.state = AnimationState::Running {
                started_at_ms,
                pending,
            };
            log::trace!("frame {token:?}: progress {progress}");
            FrameOutcome::Partial(progress)
        } else {
            self.state = AnimationState::Complete;
            log::debug!("animation complete after {}ms", now_ms - started_at_ms);
            FrameOutcome::Final
        }
    }

    /// Cancels the outstanding frame request, if any.
    ///
    /// A running animation moves to `Cancelled`; other states are left unchanged.
    pub fn cancel(&mut self, scheduler: &mut impl Scheduler) {
        if let AnimationState::Running { pending, .. } = self.state {
            scheduler.cancel(pending);
            self.state = AnimationState::Cancelled;
            log::debug!("animation cancelled at progress {}", self.last_progress);
        }
    }

    /// Stops the animation after the caller failed to draw the frame it was handed.
    ///
    /// Like [`Self::cancel`], but also applies to the final frame: a driver that just moved
    /// to `Complete` becomes `Cancelled`, since that frame was never shown.
    pub fn abort(&mut self, scheduler: &mut impl Scheduler) {
        match self.state {
            AnimationState::Running { .. } => self.cancel(scheduler),
            AnimationState::Complete => {
                self.state = AnimationState::Cancelled;
                log::debug!("animation aborted on its final frame");
            }
            AnimationState::NotStarted | AnimationState::Cancelled => {}
        }
    }

    fn progress_at(&self, started_at_ms: f64, now_ms: f64) -> f64 {
        let raw = (now_ms - started_at_ms) / self.duration_ms;
        let progress = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
        progress.max(self.last_progress)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[derive(Debug, Default)]
    struct ManualScheduler {
        next: u64,
        pending: Vec<FrameToken>,
        cancelled: Vec<FrameToken>,
    }

    impl Scheduler for ManualScheduler {
        fn request_frame(&mut self) -> FrameToken {
            self.next += 1;
            let token = FrameToken(self.next);
            self.pending.push(token);
            token
        }

        fn cancel(&mut self, token: FrameToken) {
            self.pending.retain(|t| *t != token);
            self.cancelled.push(token);
        }
    }

    impl ManualScheduler {
        fn take(&mut self) -> FrameToken {
            assert_eq!(self.pending.len(), 1, "expected one outstanding frame");
            self.pending.remove(0)
        }
    }

    #[test]
    fn progress_is_monotonic_and_ends_at_one_exactly_once() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(100);
        assert!(driver.start(&mut sched, 1000.0));

        let mut seen = Vec::new();
        // The clock jumps backwards once; progress must not.
        for now in [1000.0, 1030.0, 1020.0, 1070.0, 1099.0, 1100.0] {
            let token = sched.take();
            match driver.on_frame(&mut sched, token, now) {
                FrameOutcome::Partial(p) => seen.push(p),
                FrameOutcome::Final => {
                    seen.push(1.0);
                    break;
                }
                FrameOutcome::Ignored => panic!("frame should have been processed"),
            }
        }

        assert_eq!(seen, [0.0, 0.3, 0.3, 0.7, 0.99, 1.0]);
        assert_eq!(seen.iter().filter(|p| **p == 1.0).count(), 1);
        assert_eq!(driver.state(), AnimationState::Complete);
        assert!(sched.pending.is_empty());
    }

    #[test]
    fn late_frames_clamp_to_one() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        driver.start(&mut sched, 0.0);
        let token = sched.take();
        assert_eq!(driver.on_frame(&mut sched, token, 5000.0), FrameOutcome::Final);
        assert_eq!(driver.last_progress(), 1.0);
    }

    #[test]
    fn frames_after_completion_are_ignored() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        driver.start(&mut sched, 0.0);
        let token = sched.take();
        assert_eq!(driver.on_frame(&mut sched, token, 10.0), FrameOutcome::Final);
        assert_eq!(
            driver.on_frame(&mut sched, token, 20.0),
            FrameOutcome::Ignored
        );
    }

    #[test]
    fn stale_and_unstarted_frames_are_ignored() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        assert_eq!(
            driver.on_frame(&mut sched, FrameToken(1), 0.0),
            FrameOutcome::Ignored
        );

        driver.start(&mut sched, 0.0);
        assert_eq!(
            driver.on_frame(&mut sched, FrameToken(99), 5.0),
            FrameOutcome::Ignored
        );
        assert!(driver.is_running());
    }

    #[test]
    fn start_twice_is_refused() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        assert!(driver.start(&mut sched, 0.0));
        assert!(!driver.start(&mut sched, 1.0));
        assert_eq!(sched.pending.len(), 1);
    }

    #[test]
    fn abort_undoes_completion() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        driver.start(&mut sched, 0.0);
        let token = sched.take();
        assert_eq!(driver.on_frame(&mut sched, token, 50.0), FrameOutcome::Final);
        assert_eq!(driver.state(), AnimationState::Complete);

        driver.abort(&mut sched);
        assert_eq!(driver.state(), AnimationState::Cancelled);
        assert!(sched.cancelled.is_empty());
        assert!(!driver.start(&mut sched, 60.0));
    }

    #[test]
    fn abort_while_running_cancels_the_request() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(100);
        driver.start(&mut sched, 0.0);
        let first = sched.take();
        driver.on_frame(&mut sched, first, 10.0);
        let second = sched.pending[0];

        driver.abort(&mut sched);
        assert_eq!(driver.state(), AnimationState::Cancelled);
        assert_eq!(sched.cancelled, [second]);
    }

    #[test]
    fn abort_before_start_does_nothing() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(10);
        driver.abort(&mut sched);
        assert_eq!(driver.state(), AnimationState::NotStarted);
    }

    #[test]
    fn cancel_releases_the_pending_request() {
        let mut sched = ManualScheduler::default();
        let mut driver = AnimationDriver::new(100);
        driver.start(&mut sched, 0.0);
        let first = sched.take();
        driver.on_frame(&mut sched, first, 10.0);
        let second = sched.pending[0];

        driver.cancel(&mut sched);
        assert_eq!(driver.state(), AnimationState::Cancelled);
        assert!(sched.pending.is_empty());
        assert_eq!(sched.cancelled, [second]);

        // The cancelled token may still be delivered by a sloppy host.
        assert_eq!(
            driver.on_frame(&mut sched, second, 20.0),
            FrameOutcome::Ignored
        );
    }
}
