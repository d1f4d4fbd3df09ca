// SPDX-License-Identifier: MPL-2.0
//! Timer subscription for the application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Tick interval while something on screen is animating or expiring.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Ticks only while an attempt is running (spinner, stage timings) or
/// toasts are showing (auto-dismiss).
pub fn create_tick_subscription(is_busy: bool, has_toasts: bool) -> Subscription<Message> {
    if is_busy || has_toasts {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
