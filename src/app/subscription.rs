// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard navigation and the periodic tick are the only native events
//! the application listens for. Keyboard events already captured by a
//! widget (a focused text input in particular) are never routed here.

use super::Message;
use iced::keyboard::key::Named;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Arrow keys move between modules; clicks outside widgets close menus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Captured events belong to a focused widget, typically a text
        // input; routing them would hijack typing.
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, .. }) => {
                match key.as_ref() {
                    Key::Named(Named::ArrowLeft) => Some(Message::NavigatePrevious),
                    Key::Named(Named::ArrowRight) => Some(Message::NavigateNext),
                    _ => None,
                }
            }
            event::Event::Mouse(iced::mouse::Event::ButtonPressed(
                iced::mouse::Button::Left,
            )) => Some(Message::BackgroundPressed),
            _ => None,
        }
    })
}

/// Periodic tick, running only while something needs it.
pub fn create_tick_subscription(
    has_notification: bool,
    has_copied_badge: bool,
) -> Subscription<Message> {
    if has_notification || has_copied_badge {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
