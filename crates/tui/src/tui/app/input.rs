use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Action;

use super::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ListAction {
    Quit,
    SelectNext,
    SelectPrev,
    SelectFirst,
    SelectLast,
    ToggleSelected,
    OpenMenu,
    AddTask,
}

impl ListAction {
    pub(crate) fn from_event(key: &KeyEvent) -> Option<Self> {
        if is_ctrl_c(key) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Self::SelectNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Self::SelectPrev),
            KeyCode::Home => Some(Self::SelectFirst),
            KeyCode::End => Some(Self::SelectLast),
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => {
                Some(Self::ToggleSelected)
            }
            KeyCode::Char('m') | KeyCode::Tab => Some(Self::OpenMenu),
            KeyCode::Char('a') | KeyCode::Char('+') => Some(Self::AddTask),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PanelAction {
    Quit,
    Next,
    Prev,
    Choose,
    Close,
}

impl PanelAction {
    pub(crate) fn from_event(key: &KeyEvent) -> Option<Self> {
        if is_ctrl_c(key) {
            return Some(Self::Quit);
        }

        match key.code {
            KeyCode::Char('q') => Some(Self::Quit),
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => Some(Self::Next),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => Some(Self::Prev),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Self::Choose),
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Left => Some(Self::Close),
            _ => None,
        }
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c')) && key.modifiers.contains(KeyModifiers::CONTROL)
}

impl App {
    pub(crate) fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if self.session.panel().is_open() {
            if let Some(action) = PanelAction::from_event(&key) {
                self.execute_panel_action(action, now);
            }
        } else if let Some(action) = ListAction::from_event(&key) {
            self.execute_list_action(action, now);
        }
    }

    fn execute_list_action(&mut self, action: ListAction, now: Instant) {
        match action {
            ListAction::Quit => self.should_quit = true,
            ListAction::SelectNext => self.move_selection(1),
            ListAction::SelectPrev => self.move_selection(-1),
            ListAction::SelectFirst => self.select_task(0),
            ListAction::SelectLast => self.select_task(usize::MAX),
            ListAction::ToggleSelected => {
                if let Some(row) = self.selected_row() {
                    self.session.dispatch(row.on_checkbox(), now);
                }
            }
            ListAction::OpenMenu => {
                self.menu_index = 0;
                self.session.dispatch(Action::OpenPanel, now);
            }
            ListAction::AddTask => self.session.dispatch(Action::AddTaskRequested, now),
        }
    }

    fn execute_panel_action(&mut self, action: PanelAction, now: Instant) {
        match action {
            PanelAction::Quit => self.should_quit = true,
            PanelAction::Next => self.move_menu(1),
            PanelAction::Prev => self.move_menu(-1),
            PanelAction::Choose => {
                let entry = self.selected_menu_entry();
                self.session.dispatch(Action::MenuSelected(entry), now);
            }
            PanelAction::Close => self.session.dispatch(Action::ClosePanel, now),
        }
    }
}
