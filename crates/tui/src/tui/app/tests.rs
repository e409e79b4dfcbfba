use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::Terminal;
use rstest::rstest;

use super::input::{ListAction, PanelAction};
use super::App;
use crate::core::{AppConfig, PanelPhase, TaskStore};
use crate::tui::helpers::{bottom_right_rect, checkbox_glyph, drawer_rect};

fn instant_config() -> AppConfig {
    AppConfig {
        panel_animation: Duration::ZERO,
        ..AppConfig::default()
    }
}

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
}

fn render(app: &mut App) -> Buffer {
    let backend = TestBackend::new(60, 16);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.draw(f)).unwrap();
    terminal.backend().buffer().clone()
}

fn line_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer.get(x, y).symbol())
        .collect()
}

fn find_text(buffer: &Buffer, needle: &str) -> Option<(u16, u16)> {
    (0..buffer.area.height).find_map(|y| {
        let line = line_text(buffer, y);
        line.find(needle).map(|byte_index| {
            let column = line[..byte_index].chars().count() as u16;
            (column, y)
        })
    })
}

#[rstest]
#[case(KeyCode::Char(' '), Some(ListAction::ToggleSelected))]
#[case(KeyCode::Enter, Some(ListAction::ToggleSelected))]
#[case(KeyCode::Char('m'), Some(ListAction::OpenMenu))]
#[case(KeyCode::Char('a'), Some(ListAction::AddTask))]
#[case(KeyCode::Down, Some(ListAction::SelectNext))]
#[case(KeyCode::Char('z'), None)]
fn list_keys_map_to_actions(#[case] code: KeyCode, #[case] expected: Option<ListAction>) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    assert_eq!(ListAction::from_event(&key), expected);
}

#[test]
fn ctrl_c_quits_from_either_mode() {
    let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(ListAction::from_event(&key), Some(ListAction::Quit));
    assert_eq!(PanelAction::from_event(&key), Some(PanelAction::Quit));
}

#[test]
fn space_toggles_the_selected_task() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));

    let flags: Vec<bool> = app
        .session
        .store()
        .tasks()
        .iter()
        .map(|task| task.completed)
        .collect();
    assert_eq!(flags, vec![false, true, false]);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.session.store().tasks(), TaskStore::seeded().tasks());
}

#[test]
fn selection_wraps_around() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected, 2);
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected, 0);
}

#[test]
fn add_key_notifies_without_adding() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.session.store().len(), 3);
    assert_eq!(app.session.current_toast(), Some("Adding new task..."));
}

#[test]
fn menu_flow_closes_panel_and_toasts() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.session.panel().phase(), PanelPhase::Open);

    // Keys go to the panel while it is open.
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected, 0);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.session.panel().phase(), PanelPhase::Closed);
    assert_eq!(app.session.current_toast(), Some("Settings Clicked"));
    assert_eq!(app.session.store(), &TaskStore::seeded());
}

#[test]
fn escape_closes_panel() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Esc);
    assert!(!app.session.panel().is_visible());
}

#[test]
fn tick_expires_toast() {
    let config = AppConfig {
        toast_duration: Duration::from_millis(100),
        ..instant_config()
    };
    let mut app = App::new(&config);
    let start = Instant::now();
    app.on_key(
        KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
        start,
    );
    app.on_tick(start + Duration::from_millis(150));
    assert_eq!(app.session.current_toast(), None);
}

#[test]
fn completed_rows_render_crossed_out() {
    let mut app = App::new(&instant_config());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    let buffer = render(&mut app);

    let (x, y) = find_text(&buffer, "Go to the store").expect("store row rendered");
    assert!(buffer.get(x, y).modifier.contains(Modifier::CROSSED_OUT));
    assert!(line_text(&buffer, y).contains("[x]"));

    let (x, y) = find_text(&buffer, "Go to the gym").expect("gym row rendered");
    assert!(!buffer.get(x, y).modifier.contains(Modifier::CROSSED_OUT));
    assert!(line_text(&buffer, y).contains("[ ]"));
}

#[test]
fn screen_shows_title_and_drawer_entries() {
    let mut app = App::new(&instant_config());
    let buffer = render(&mut app);
    assert!(find_text(&buffer, "My To-Do List").is_some());
    assert!(find_text(&buffer, "Settings").is_none());

    press(&mut app, KeyCode::Char('m'));
    let buffer = render(&mut app);
    assert!(find_text(&buffer, "Home").is_some());
    assert!(find_text(&buffer, "Settings").is_some());
}

#[test]
fn drawer_rect_scales_with_progress() {
    let area = Rect::new(0, 0, 80, 24);
    assert_eq!(drawer_rect(area, 28, 0.0).width, 0);
    assert_eq!(drawer_rect(area, 28, 0.5).width, 14);
    assert_eq!(drawer_rect(area, 28, 1.0).width, 28);
    assert_eq!(drawer_rect(Rect::new(0, 0, 10, 5), 28, 1.0).width, 10);
}

#[test]
fn bottom_right_rect_stays_inside_area() {
    let area = Rect::new(2, 1, 40, 12);
    let rect = bottom_right_rect(5, 3, area, 1);
    assert_eq!(rect, Rect::new(36, 9, 5, 3));

    let tiny = Rect::new(0, 0, 3, 2);
    let rect = bottom_right_rect(5, 3, tiny, 1);
    assert!(rect.width <= tiny.width && rect.height <= tiny.height);
}

#[test]
fn checkbox_glyph_reflects_state() {
    assert_eq!(checkbox_glyph(true), "[x]");
    assert_eq!(checkbox_glyph(false), "[ ]");
}
