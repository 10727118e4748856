// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover handling: which label is visible, and who hears about it.
//!
//! The dispatcher does not touch the surface. It returns a [`LabelTransition`] that the caller
//! applies, so it can be driven and tested without a host.

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// Notification emitted when the pointer enters a slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceHoverEvent {
    /// Position of the hovered slice in the series.
    pub index: usize,
}

/// Identifies a registered observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Label visibility changes produced by a hover event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LabelTransition {
    /// Label to hide, if any.
    pub deactivate: Option<usize>,
    /// Label to show, if any.
    pub activate: Option<usize>,
}

type Handler = Box<dyn FnMut(&SliceHoverEvent)>;

/// Tracks the active label and fans hover notifications out to observers.
///
/// At most one label is active at a time.
#[derive(Default)]
pub struct InteractionDispatcher {
    active_label: Option<usize>,
    observers: Vec<(SubscriptionId, Handler)>,
    next_id: u64,
}

impl fmt::Debug for InteractionDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionDispatcher")
            .field("active_label", &self.active_label)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl InteractionDispatcher {
    /// Creates a dispatcher with no active label and no observers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for hover-enter notifications.
    pub fn subscribe(&mut self, handler: impl FnMut(&SliceHoverEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(handler)));
        id
    }

    /// Removes an observer. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != before
    }

    /// Returns the number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Returns the slice whose label is currently shown.
    pub fn active_label(&self) -> Option<usize> {
        self.active_label
    }

    /// Handles the pointer entering slice `index`.
    ///
    /// Observers are always notified. The slice's label becomes active only if it exists
    /// (`has_label`); any other active label is hidden.
    pub fn hover_enter(&mut self, index: usize, has_label: bool) -> LabelTransition {
        log::trace!("hover enter {index}");
        let event = SliceHoverEvent { index };
        for (_, handler) in &mut self.observers {
            handler(&event);
        }

        let deactivate = self.active_label.filter(|&prev| prev != index);
        let activate = has_label.then_some(index);
        self.active_label = activate;
        LabelTransition {
            deactivate,
            activate,
        }
    }

    /// Handles the pointer leaving slice `index`. Emits no notification.
    pub fn hover_leave(&mut self, index: usize) -> LabelTransition {
        log::trace!("hover leave {index}");
        if self.active_label == Some(index) {
            self.active_label = None;
            LabelTransition {
                deactivate: Some(index),
                activate: None,
            }
        } else {
            LabelTransition::default()
        }
    }

    /// Forgets the active label without emitting anything.
    pub fn reset(&mut self) {
        self.active_label = None;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    use super::*;

    fn recorder(d: &mut InteractionDispatcher) -> (SubscriptionId, Rc<RefCell<Vec<usize>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = d.subscribe(move |e| sink.borrow_mut().push(e.index));
        (id, seen)
    }

    #[test]
    fn enter_activates_label_and_notifies() {
        let mut d = InteractionDispatcher::new();
        let (_, seen) = recorder(&mut d);

        let t = d.hover_enter(2, true);
        assert_eq!(
            t,
            LabelTransition {
                deactivate: None,
                activate: Some(2)
            }
        );
        assert_eq!(d.active_label(), Some(2));
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn leave_clears_label_silently() {
        let mut d = InteractionDispatcher::new();
        let (_, seen) = recorder(&mut d);
        d.hover_enter(2, true);

        let t = d.hover_leave(2);
        assert_eq!(t.deactivate, Some(2));
        assert_eq!(t.activate, None);
        assert_eq!(d.active_label(), None);
        assert_eq!(*seen.borrow(), vec![2]);
    }

    #[test]
    fn enter_without_label_still_notifies() {
        let mut d = InteractionDispatcher::new();
        let (_, seen) = recorder(&mut d);
        let t = d.hover_enter(7, false);
        assert_eq!(t, LabelTransition::default());
        assert_eq!(d.active_label(), None);
        assert_eq!(*seen.borrow(), vec![7]);
    }

    #[test]
    fn entering_another_slice_hides_the_previous_label() {
        let mut d = InteractionDispatcher::new();
        d.hover_enter(0, true);
        let t = d.hover_enter(1, true);
        assert_eq!(t.deactivate, Some(0));
        assert_eq!(t.activate, Some(1));
        // Re-entering the active slice does not hide it.
        assert_eq!(d.hover_enter(1, true).deactivate, None);
    }

    #[test]
    fn leaving_an_inactive_slice_changes_nothing() {
        let mut d = InteractionDispatcher::new();
        d.hover_enter(0, true);
        assert_eq!(d.hover_leave(3), LabelTransition::default());
        assert_eq!(d.active_label(), Some(0));
    }

    #[test]
    fn unsubscribed_observers_stop_receiving() {
        let mut d = InteractionDispatcher::new();
        let (a, seen_a) = recorder(&mut d);
        let (_, seen_b) = recorder(&mut d);
        assert_eq!(d.observer_count(), 2);

        d.hover_enter(0, false);
        assert!(d.unsubscribe(a));
        assert!(!d.unsubscribe(a));
        d.hover_enter(1, false);

        assert_eq!(*seen_a.borrow(), vec![0]);
        assert_eq!(*seen_b.borrow(), vec![0, 1]);
    }
}
