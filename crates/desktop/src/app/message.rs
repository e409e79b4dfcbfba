//! Message definitions passed around the desktop update loop.

use iced::Task;
use todo_core::{Action, MenuEntry, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Message {
    TaskToggled(TaskId, bool),
    MenuPressed,
    PanelDismissed,
    MenuEntrySelected(MenuEntry),
    AddTaskPressed,
    Frame,
}

impl Message {
    /// Session action this message stands for.
    pub(crate) fn into_action(self) -> Action {
        match self {
            Message::TaskToggled(id, completed) => Action::ToggleTask { id, completed },
            Message::MenuPressed => Action::OpenPanel,
            Message::PanelDismissed => Action::ClosePanel,
            Message::MenuEntrySelected(entry) => Action::MenuSelected(entry),
            Message::AddTaskPressed => Action::AddTaskRequested,
            Message::Frame => Action::Tick,
        }
    }
}

pub(crate) type Effect = Task<Message>;
