//! Collects lightweight desktop telemetry so interaction flows can be checked while prototyping.

use std::collections::VecDeque;

use parking_lot::Mutex;

/// Oldest events are dropped once this many are buffered.
pub const MAX_EVENTS: usize = 256;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    PanelOpened,
    PanelClosed,
    TaskToggled { task_id: u32, completed: bool },
    MenuSelected(String),
    AddTaskRequested,
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<VecDeque<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(VecDeque::with_capacity(MAX_EVENTS)),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::PanelOpened => tracing::debug!("desktop telemetry panel opened"),
                Event::PanelClosed => tracing::debug!("desktop telemetry panel closed"),
                Event::TaskToggled { task_id, completed } => tracing::debug!(
                    task_id,
                    completed,
                    "desktop telemetry task toggled"
                ),
                Event::MenuSelected(entry) => {
                    tracing::debug!(entry = entry.as_str(), "desktop telemetry menu selected")
                }
                Event::AddTaskRequested => {
                    tracing::debug!("desktop telemetry add task requested")
                }
            }
            let mut events = self.events.lock();
            if events.len() == MAX_EVENTS {
                events.pop_front();
            }
            events.push_back(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn last_event(&self) -> Option<Event> {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().back().cloned()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}
