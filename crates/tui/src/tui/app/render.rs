use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph};
use ratatui::Frame;

use crate::core::{MenuEntry, SCREEN_TITLE};
use crate::tui::constants::{APP_VERSION, DRAWER_WIDTH, FAB_LABEL, HINT_LIST, HINT_PANEL};
use crate::tui::helpers::{
    bottom_center_rect, bottom_right_rect, drawer_rect, row_spans, BG_ACCENT, BG_BAR, BG_BASE,
    BG_PANEL, FG_ACCENT,
};

use super::App;

impl App {
    pub(crate) fn draw(&mut self, f: &mut Frame<'_>) {
        let size = f.size();
        f.render_widget(Clear, size);
        f.render_widget(Block::default().style(Style::default().bg(BG_BASE)), size);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(size);

        self.draw_top_bar(f, chunks[0]);
        self.draw_tasks(f, chunks[1]);
        self.draw_footer(f, chunks[2]);
        self.draw_action_button(f, chunks[1]);
        self.draw_toast(f, chunks[1]);

        if self.session.panel().is_visible() {
            self.draw_drawer(f, size);
        }
    }

    fn draw_top_bar(&self, f: &mut Frame<'_>, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" ☰ ", Style::default().fg(Color::White)),
            Span::styled(
                SCREEN_TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().bg(BG_BAR)),
            area,
        );

        let version = Paragraph::new(Span::styled(
            format!("v{} ", APP_VERSION),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Right)
        .style(Style::default().bg(BG_BAR));
        f.render_widget(version, area);
    }

    fn draw_tasks(&mut self, f: &mut Frame<'_>, area: Rect) {
        let items: Vec<ListItem> = self
            .session
            .rows()
            .iter()
            .map(|row| ListItem::new(Line::from(row_spans(row))))
            .collect();

        let store = self.session.store();
        let title = format!(" {}/{} done ", store.completed_count(), store.len());
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(FG_ACCENT)))
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1))
                    .style(Style::default().bg(BG_PANEL)),
            )
            .highlight_symbol("› ")
            .highlight_style(Style::default().bg(BG_ACCENT));

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    fn draw_footer(&self, f: &mut Frame<'_>, area: Rect) {
        let hint = if self.session.panel().is_open() {
            HINT_PANEL
        } else {
            HINT_LIST
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(Color::DarkGray)))
                .style(Style::default().bg(BG_BASE)),
            area,
        );
    }

    fn draw_action_button(&self, f: &mut Frame<'_>, area: Rect) {
        let width = FAB_LABEL.chars().count() as u16 + 2;
        let rect = bottom_right_rect(width, 3, area, 1);
        let fab = Paragraph::new(Span::styled(
            FAB_LABEL,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FG_ACCENT))
                .style(Style::default().bg(BG_BAR)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(fab, rect);
    }

    fn draw_toast(&self, f: &mut Frame<'_>, area: Rect) {
        let Some(message) = self.session.current_toast() else {
            return;
        };
        let width = message.chars().count() as u16 + 4;
        let rect = bottom_center_rect(width, 1, area, 4);
        f.render_widget(Clear, rect);
        f.render_widget(
            Paragraph::new(format!("  {}  ", message))
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Black).bg(Color::Gray)),
            rect,
        );
    }

    fn draw_drawer(&self, f: &mut Frame<'_>, area: Rect) {
        let rect = drawer_rect(area, DRAWER_WIDTH, self.session.panel().progress());
        if rect.width == 0 {
            return;
        }

        let items: Vec<ListItem> = MenuEntry::ALL
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let mut style = Style::default().fg(Color::Gray);
                if entry.is_selected() {
                    style = style.fg(Color::White).add_modifier(Modifier::BOLD);
                }
                if index == self.menu_index {
                    style = style.bg(BG_ACCENT);
                }
                ListItem::new(Line::from(vec![
                    Span::raw(" "),
                    Span::raw(entry.icon()),
                    Span::raw("  "),
                    Span::raw(entry.label()),
                ]))
                .style(style)
            })
            .collect();

        let menu = List::new(items).block(
            Block::default()
                .borders(Borders::RIGHT)
                .border_style(Style::default().fg(FG_ACCENT))
                .padding(Padding::vertical(1))
                .style(Style::default().bg(BG_PANEL)),
        );
        f.render_widget(Clear, rect);
        f.render_widget(menu, rect);
    }
}
