//! Core update loop translating user interactions into session actions.

use std::time::Instant;

use crate::app::message::{Effect, Message};
use crate::telemetry::Event as TelemetryEvent;

use super::desktop::TodoDesktop;

impl TodoDesktop {
    pub(super) fn react(&mut self, message: Message) -> Effect {
        self.record(&message);
        self.session.dispatch(message.into_action(), Instant::now());
        Effect::none()
    }

    fn record(&self, message: &Message) {
        let event = match message {
            Message::TaskToggled(id, completed) => TelemetryEvent::TaskToggled {
                task_id: id.get(),
                completed: *completed,
            },
            Message::MenuPressed if !self.session.panel().is_open() => TelemetryEvent::PanelOpened,
            Message::PanelDismissed if self.session.panel().is_open() => {
                TelemetryEvent::PanelClosed
            }
            Message::MenuEntrySelected(entry) => {
                TelemetryEvent::MenuSelected(entry.label().to_string())
            }
            Message::AddTaskPressed => TelemetryEvent::AddTaskRequested,
            Message::MenuPressed | Message::PanelDismissed | Message::Frame => return,
        };
        self.telemetry.record(event);
    }
}
