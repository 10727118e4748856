// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A queue-backed frame scheduler.

use pie_chart_core::{FrameToken, Scheduler};

/// Hands out monotonically increasing frame tokens and keeps the outstanding ones until the
/// host takes or cancels them.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next: u64,
    pending: Vec<FrameToken>,
}

impl FrameQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every outstanding token, oldest first.
    pub fn take_pending(&mut self) -> Vec<FrameToken> {
        std::mem::take(&mut self.pending)
    }

    /// Returns the number of outstanding requests.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if no request is outstanding.
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameToken {
        self.next += 1;
        let token = FrameToken(self.next);
        self.pending.push(token);
        token
    }

    fn cancel(&mut self, token: FrameToken) {
        let before = self.pending.len();
        self.pending.retain(|t| *t != token);
        if self.pending.len() == before {
            log::trace!("cancel of unknown frame {token:?}");
        }
    }
}
