// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window lifecycle events are always routed; animation frames are only
//! requested while a scroll or reveal fade is running.

use super::Message;
use iced::{event, window, Subscription};

/// Routes window open, resize and close requests.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowOpened(window_id, size))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Per-frame ticks while the page is animating.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}
