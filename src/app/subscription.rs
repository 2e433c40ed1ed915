// SPDX-License-Identifier: MPL-2.0
//! Timer and frame subscriptions driving the toast stack.

use super::Message;
use iced::{time, window, Subscription};
use std::time::Duration;

/// Periodic tick that fires expired toasts, active only while toasts exist.
pub fn create_tick_subscription(interval: Duration, has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Frame stream used to measure new cards and finish their entrance.
pub fn create_frame_subscription(needs_frame: bool) -> Subscription<Message> {
    if needs_frame {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
