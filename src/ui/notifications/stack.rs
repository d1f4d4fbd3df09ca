// SPDX-License-Identifier: MPL-2.0
//! Toasts on screen and the ones waiting for a free slot.
//!
//! Time is passed in by the caller, so expiry follows the application tick
//! and tests can move the clock by hand.

use super::toast::{Severity, Toast, ToastId};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_SHOWN: usize = 3;

/// A toast on screen.
#[derive(Debug, Clone)]
pub struct Shown {
    id: ToastId,
    toast: Toast,
    expires_at: Option<Instant>,
}

impl Shown {
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }
}

#[derive(Debug, Default)]
pub struct ToastStack {
    /// Oldest first.
    shown: Vec<Shown>,
    waiting: VecDeque<(ToastId, Toast)>,
    next_id: u64,
}

impl ToastStack {
    pub fn push(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;
        self.waiting.push_back((id, toast));
        self.fill(now);
        id
    }

    /// Removes a toast whether it is shown or still waiting.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) {
        self.shown.retain(|shown| shown.id != id);
        self.waiting.retain(|(waiting, _)| *waiting != id);
        self.fill(now);
    }

    /// Drops shown toasts whose display time ran out at `now`.
    pub fn expire(&mut self, now: Instant) {
        self.shown
            .retain(|shown| shown.expires_at.is_none_or(|at| now < at));
        self.fill(now);
    }

    /// Drops every failure toast; used once a later capture succeeds.
    pub fn clear_failures(&mut self, now: Instant) {
        self.shown
            .retain(|shown| shown.toast.severity() != Severity::Error);
        self.waiting
            .retain(|(_, toast)| toast.severity() != Severity::Error);
        self.fill(now);
    }

    pub fn shown(&self) -> impl Iterator<Item = &Shown> {
        self.shown.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shown.is_empty() && self.waiting.is_empty()
    }

    /// Moves waiting toasts on screen; their lifetime starts now.
    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_SHOWN {
            let Some((id, toast)) = self.waiting.pop_front() else {
                break;
            };
            let expires_at = toast.severity().lifetime().map(|life| now + life);
            self.shown.push(Shown {
                id,
                toast,
                expires_at,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::WorkflowError;
    use std::time::Duration;

    fn keys(stack: &ToastStack) -> Vec<&str> {
        stack.shown().map(|shown| shown.toast().key()).collect()
    }

    fn failure() -> Toast {
        Toast::failure(&WorkflowError::Encoding("gone".into()))
    }

    #[test]
    fn new_stack_is_empty() {
        assert!(ToastStack::default().is_empty());
    }

    #[test]
    fn fourth_toast_waits_for_a_free_slot() {
        let t0 = Instant::now();
        let mut stack = ToastStack::default();
        let first = stack.push(failure(), t0);
        stack.push(failure(), t0);
        stack.push(failure(), t0);
        stack.push(Toast::busy(), t0);
        assert_eq!(stack.shown().count(), MAX_SHOWN);
        assert!(!keys(&stack).contains(&"notification-busy"));

        stack.dismiss(first, t0);
        assert_eq!(stack.shown().count(), MAX_SHOWN);
        assert_eq!(keys(&stack).last(), Some(&"notification-busy"));
    }

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let t0 = Instant::now();
        let mut stack = ToastStack::default();
        stack.push(Toast::busy(), t0);
        stack.push(Toast::settings_warning("notification-config-load-error"), t0);
        stack.push(failure(), t0);

        stack.expire(t0 + Duration::from_millis(2_900));
        assert_eq!(stack.shown().count(), 3);

        stack.expire(t0 + Duration::from_secs(3));
        assert_eq!(
            keys(&stack),
            ["notification-config-load-error", "notification-recognition-failed"]
        );

        stack.expire(t0 + Duration::from_secs(60));
        assert_eq!(keys(&stack), ["notification-recognition-failed"]);
    }

    #[test]
    fn waiting_toast_gets_full_lifetime_once_shown() {
        let t0 = Instant::now();
        let mut stack = ToastStack::default();
        for _ in 0..MAX_SHOWN {
            stack.push(Toast::busy(), t0);
        }
        stack.push(Toast::recognized("Apple", "Calories: 95".into()), t0);

        let t3 = t0 + Duration::from_secs(3);
        stack.expire(t3);
        assert_eq!(keys(&stack), ["notification-recognized"]);

        stack.expire(t3 + Duration::from_secs(2));
        assert!(!stack.is_empty());
        stack.expire(t3 + Duration::from_secs(3));
        assert!(stack.is_empty());
    }

    #[test]
    fn clearing_failures_keeps_other_toasts_and_refills() {
        let t0 = Instant::now();
        let mut stack = ToastStack::default();
        stack.push(failure(), t0);
        stack.push(failure(), t0);
        stack.push(Toast::busy(), t0);
        stack.push(failure(), t0);
        stack.push(Toast::recognized("Apple", String::new()), t0);

        stack.clear_failures(t0);

        assert_eq!(keys(&stack), ["notification-busy", "notification-recognized"]);
    }

    #[test]
    fn dismissing_unknown_id_changes_nothing() {
        let t0 = Instant::now();
        let mut stack = ToastStack::default();
        let id = stack.push(Toast::busy(), t0);
        stack.dismiss(id, t0);
        stack.push(failure(), t0);
        stack.dismiss(id, t0);
        assert_eq!(stack.shown().count(), 1);
    }
}
