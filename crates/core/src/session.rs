//! One screen's worth of state and the single reducer that mutates it.
//!
//! Front ends turn widget or key events into [`Action`]s and hand them to
//! [`Session::dispatch`]; state flows back down through the read accessors.

use std::time::Instant;

use crate::config::AppConfig;
use crate::model::TaskId;
use crate::notify::Notifications;
use crate::panel::{MenuEntry, Panel};
use crate::row::RowView;
use crate::store::TaskStore;

pub const SCREEN_TITLE: &str = "My To-Do List";
pub const ADD_TASK_NOTIFICATION: &str = "Adding new task...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTask { id: TaskId, completed: bool },
    OpenPanel,
    ClosePanel,
    MenuSelected(MenuEntry),
    AddTaskRequested,
    /// Frame tick: advances the panel animation and expires toasts.
    Tick,
}

#[derive(Debug, Clone)]
pub struct Session {
    store: TaskStore,
    panel: Panel,
    notifications: Notifications,
    last_frame: Option<Instant>,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(TaskStore::seeded(), config)
    }

    pub fn with_store(store: TaskStore, config: &AppConfig) -> Self {
        Self {
            store,
            panel: Panel::new(config.panel_animation),
            notifications: Notifications::new(config.toast_duration),
            last_frame: None,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn rows(&self) -> Vec<RowView> {
        self.store.tasks().iter().map(RowView::from).collect()
    }

    pub fn current_toast(&self) -> Option<&str> {
        self.notifications
            .current()
            .map(|toast| toast.message.as_str())
    }

    /// Whether the front end should keep delivering [`Action::Tick`].
    pub fn needs_ticks(&self) -> bool {
        self.panel.is_animating() || !self.notifications.is_empty()
    }

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::ToggleTask { id, completed } => {
                self.store.toggle(id, completed);
            }
            Action::OpenPanel => {
                if self.panel.open() {
                    self.last_frame = Some(now);
                }
            }
            Action::ClosePanel => {
                if self.panel.close() {
                    self.last_frame = Some(now);
                }
            }
            Action::MenuSelected(entry) => {
                tracing::info!(entry = entry.label(), "menu entry selected");
                self.dispatch(Action::ClosePanel, now);
                self.notifications.push(entry.notification(), now);
            }
            Action::AddTaskRequested => {
                tracing::info!("task creation requested; not available");
                self.notifications.push(ADD_TASK_NOTIFICATION, now);
            }
            Action::Tick => self.on_tick(now),
        }
    }

    fn on_tick(&mut self, now: Instant) {
        if self.panel.is_animating() {
            let elapsed = self
                .last_frame
                .map(|last| now.saturating_duration_since(last))
                .unwrap_or_default();
            self.panel.advance(elapsed);
            self.last_frame = Some(now);
        } else {
            self.last_frame = None;
        }
        self.notifications.prune(now);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
