// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart component: engine, animation and interaction behind one lifecycle.
//!
//! The host drives it explicitly:
//! 1. [`PieChart::init`] validates inputs and creates the surface primitives.
//! 2. [`PieChart::start`] begins the reveal and requests the first frame.
//! 3. [`PieChart::on_frame`] is called with each delivered frame token.
//! 4. [`PieChart::teardown`] cancels any outstanding frame.
//!
//! Pointer events are forwarded with [`PieChart::hover_enter`] and [`PieChart::hover_leave`].

use core::fmt;

use crate::animation::{AnimationDriver, AnimationState, FrameOutcome};
use crate::engine::ChartEngine;
use crate::error::{ComputationError, ConfigurationError};
use crate::interaction::{InteractionDispatcher, LabelTransition, SliceHoverEvent, SubscriptionId};
use crate::scheduler::{FrameToken, Scheduler};
use crate::series::PieChartSpec;
use crate::surface::RenderSurface;

/// Result of delivering a frame to the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameStatus {
    /// The frame was stale, early, or arrived after teardown; nothing was drawn.
    Ignored,
    /// The chart was drawn at this partial progress and another frame was requested.
    Drawn(f64),
    /// The final frame was drawn (labels placed); no further frames will be requested.
    Completed,
}

/// An animated pie/donut chart bound to a render surface.
pub struct PieChart<S: RenderSurface> {
    engine: ChartEngine<S>,
    driver: AnimationDriver,
    interaction: InteractionDispatcher,
}

impl<S: RenderSurface + fmt::Debug> fmt::Debug for PieChart<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PieChart")
            .field("engine", &self.engine)
            .field("driver", &self.driver)
            .field("interaction", &self.interaction)
            .finish()
    }
}

impl<S: RenderSurface> PieChart<S> {
    /// Validates `spec` and creates the chart's primitives on `surface`.
    ///
    /// Nothing is drawn until the first frame (or [`Self::redraw`]).
    pub fn init(spec: PieChartSpec, surface: S) -> Result<Self, ConfigurationError> {
        let duration = spec.config.animation_duration_ms;
        let engine = ChartEngine::new(spec, surface)?;
        Ok(Self {
            engine,
            driver: AnimationDriver::new(duration),
            interaction: InteractionDispatcher::new(),
        })
    }

    /// Starts the reveal animation. Returns `false` if it was already started.
    pub fn start(&mut self, scheduler: &mut impl Scheduler, now_ms: f64) -> bool {
        self.driver.start(scheduler, now_ms)
    }

    /// Delivers a frame.
    ///
    /// A `ComputationError` stops the animation in the `Cancelled` state (any pending request
    /// is cancelled, even when the failed frame was the final one) and leaves the surface
    /// untouched for this cycle.
    pub fn on_frame(
        &mut self,
        scheduler: &mut impl Scheduler,
        token: FrameToken,
        now_ms: f64,
    ) -> Result<FrameStatus, ComputationError> {
        let outcome = self.driver.on_frame(scheduler, token, now_ms);
        let Some(progress) = outcome.progress() else {
            return Ok(FrameStatus::Ignored);
        };
        if let Err(err) = self.engine.draw(progress) {
            self.driver.abort(scheduler);
            return Err(err);
        }
        Ok(match outcome {
            FrameOutcome::Final => FrameStatus::Completed,
            _ => FrameStatus::Drawn(progress),
        })
    }

    /// Cancels any outstanding frame and hides the active label state.
    ///
    /// Frames delivered afterwards are ignored.
    pub fn teardown(&mut self, scheduler: &mut impl Scheduler) {
        self.driver.cancel(scheduler);
        if let Some(index) = self.interaction.active_label() {
            self.engine.set_label_active(index, false);
        }
        self.interaction.reset();
        log::debug!("chart torn down in state {:?}", self.driver.state());
    }

    /// Draws immediately at `progress`, outside the animation.
    pub fn redraw(&mut self, progress: f64) -> Result<(), ComputationError> {
        self.engine.draw(progress)
    }

    /// Forwards a pointer-enter on slice `index`.
    pub fn hover_enter(&mut self, index: usize) {
        let transition = self
            .interaction
            .hover_enter(index, self.engine.has_label(index));
        self.apply(transition);
    }

    /// Forwards a pointer-leave on slice `index`.
    pub fn hover_leave(&mut self, index: usize) {
        let transition = self.interaction.hover_leave(index);
        self.apply(transition);
    }

    /// Registers an observer for hover-enter notifications.
    pub fn subscribe(&mut self, handler: impl FnMut(&SliceHoverEvent) + 'static) -> SubscriptionId {
        self.interaction.subscribe(handler)
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.interaction.unsubscribe(id)
    }

    /// Returns the animation state.
    pub fn animation_state(&self) -> AnimationState {
        self.driver.state()
    }

    /// Returns the slice whose label is shown.
    pub fn active_label(&self) -> Option<usize> {
        self.interaction.active_label()
    }

    /// Returns the engine.
    pub fn engine(&self) -> &ChartEngine<S> {
        &self.engine
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        self.engine.surface()
    }

    /// Returns the surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        self.engine.surface_mut()
    }

    /// Consumes the chart and returns the surface.
    pub fn into_surface(self) -> S {
        self.engine.into_surface()
    }

    fn apply(&mut self, transition: LabelTransition) {
        if let Some(index) = transition.deactivate {
            self.engine.set_label_active(index, false);
        }
        if let Some(index) = transition.activate {
            self.engine.set_label_active(index, true);
        }
    }
}
