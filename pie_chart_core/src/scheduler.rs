// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame scheduling capability.
//!
//! A frame request yields a [`FrameToken`]. The host later delivers the frame by handing the
//! same token back to [`crate::PieChart::on_frame`], or the chart cancels it on teardown.

/// Identifies one outstanding frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// A host that delivers per-frame callbacks.
pub trait Scheduler {
    /// Requests one frame callback.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a request. Cancelling an already delivered or unknown token is a no-op.
    fn cancel(&mut self, token: FrameToken);
}
