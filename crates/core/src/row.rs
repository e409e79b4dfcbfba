//! Front-end agnostic description of how one task row looks.

use crate::model::{Task, TaskId};
use crate::session::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleDecoration {
    None,
    Strikethrough,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: TaskId,
    pub checked: bool,
    pub title: String,
    pub decoration: TitleDecoration,
}

impl RowView {
    /// Action emitted when the row's checkbox is activated.
    pub fn on_checkbox(&self) -> Action {
        Action::ToggleTask {
            id: self.id,
            completed: !self.checked,
        }
    }
}

impl From<&Task> for RowView {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            checked: task.completed,
            title: task.title.clone(),
            decoration: if task.completed {
                TitleDecoration::Strikethrough
            } else {
                TitleDecoration::None
            },
        }
    }
}
