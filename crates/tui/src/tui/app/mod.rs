use std::time::Instant;

use ratatui::widgets::ListState;

use crate::core::{Action, AppConfig, MenuEntry, RowView, Session};

mod input;
mod render;
#[cfg(test)]
mod tests;

pub(crate) struct App {
    session: Session,
    selected: usize,
    list_state: ListState,
    menu_index: usize,
    should_quit: bool,
}

impl App {
    pub(crate) fn new(config: &AppConfig) -> Self {
        let session = Session::new(config);
        let mut list_state = ListState::default();
        if !session.store().is_empty() {
            list_state.select(Some(0));
        }
        Self {
            session,
            selected: 0,
            list_state,
            menu_index: 0,
            should_quit: false,
        }
    }

    pub(crate) fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(crate) fn on_tick(&mut self, now: Instant) {
        self.session.dispatch(Action::Tick, now);
    }

    fn selected_row(&self) -> Option<RowView> {
        self.session.store().tasks().get(self.selected).map(RowView::from)
    }

    fn selected_menu_entry(&self) -> MenuEntry {
        MenuEntry::ALL
            .get(self.menu_index)
            .copied()
            .unwrap_or(MenuEntry::Home)
    }

    fn select_task(&mut self, index: usize) {
        let len = self.session.store().len();
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
            return;
        }
        self.selected = index.min(len - 1);
        self.list_state.select(Some(self.selected));
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.session.store().len();
        if len == 0 {
            return;
        }
        let next = (self.selected as isize + delta).rem_euclid(len as isize);
        self.select_task(next as usize);
    }

    fn move_menu(&mut self, delta: isize) {
        let len = MenuEntry::ALL.len() as isize;
        self.menu_index = (self.menu_index as isize + delta).rem_euclid(len) as usize;
    }
}
