use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use todo_core::session::ADD_TASK_NOTIFICATION;
use todo_core::{
    Action, AppConfig, MenuEntry, PanelPhase, Session, Task, TaskId, TaskStore, TitleDecoration,
};

fn seed_sequence() -> Vec<Task> {
    vec![
        Task::new(1, "Go to the gym", false),
        Task::new(2, "Go to the store", false),
        Task::new(3, "Go to the park", false),
    ]
}

#[test]
fn toggle_round_trip_matches_seed_sequence() {
    let now = Instant::now();
    let mut session = Session::default();
    assert_eq!(session.store().tasks(), seed_sequence().as_slice());

    session.dispatch(
        Action::ToggleTask {
            id: TaskId(2),
            completed: true,
        },
        now,
    );
    assert_eq!(
        session.store().tasks(),
        &[
            Task::new(1, "Go to the gym", false),
            Task::new(2, "Go to the store", true),
            Task::new(3, "Go to the park", false),
        ]
    );

    session.dispatch(
        Action::ToggleTask {
            id: TaskId(2),
            completed: false,
        },
        now,
    );
    assert_eq!(session.store().tasks(), seed_sequence().as_slice());
}

#[test]
fn unknown_task_toggle_leaves_session_untouched() {
    let mut session = Session::default();
    session.dispatch(
        Action::ToggleTask {
            id: TaskId(99),
            completed: true,
        },
        Instant::now(),
    );
    assert_eq!(session.store(), &TaskStore::seeded());
}

#[test]
fn add_button_only_notifies() {
    let now = Instant::now();
    let mut session = Session::default();
    for _ in 0..3 {
        session.dispatch(Action::AddTaskRequested, now);
    }
    assert_eq!(session.store().len(), 3);
    assert_eq!(session.store().version(), 0);
    assert_eq!(session.current_toast(), Some(ADD_TASK_NOTIFICATION));
}

#[test]
fn rows_follow_store_order_and_flags() {
    let mut session = Session::default();
    session.dispatch(
        Action::ToggleTask {
            id: TaskId(3),
            completed: true,
        },
        Instant::now(),
    );
    let decorations: Vec<TitleDecoration> = session
        .rows()
        .iter()
        .map(|row| row.decoration)
        .collect();
    assert_eq!(
        decorations,
        vec![
            TitleDecoration::None,
            TitleDecoration::None,
            TitleDecoration::Strikethrough
        ]
    );
}

#[test]
fn menu_selection_closes_panel_and_notifies() {
    let config = AppConfig {
        panel_animation: Duration::from_millis(100),
        ..AppConfig::default()
    };
    let start = Instant::now();
    let mut session = Session::new(&config);

    session.dispatch(Action::OpenPanel, start);
    assert_eq!(session.panel().phase(), PanelPhase::Opening);
    assert!(session.needs_ticks());

    session.dispatch(Action::Tick, start + Duration::from_millis(100));
    assert_eq!(session.panel().phase(), PanelPhase::Open);

    let picked = start + Duration::from_millis(200);
    session.dispatch(Action::MenuSelected(MenuEntry::Settings), picked);
    assert_eq!(session.panel().phase(), PanelPhase::Closing);
    assert_eq!(session.current_toast(), Some("Settings Clicked"));

    session.dispatch(Action::Tick, picked + Duration::from_millis(100));
    assert_eq!(session.panel().phase(), PanelPhase::Closed);
    assert_eq!(session.store(), &TaskStore::seeded());
}

#[test]
fn toasts_dismiss_themselves_on_tick() {
    let config = AppConfig {
        toast_duration: Duration::from_millis(300),
        ..AppConfig::default()
    };
    let start = Instant::now();
    let mut session = Session::new(&config);

    session.dispatch(Action::MenuSelected(MenuEntry::Home), start);
    assert_eq!(session.current_toast(), Some("Home Clicked"));

    session.dispatch(Action::Tick, start + Duration::from_millis(301));
    assert_eq!(session.current_toast(), None);
    assert!(!session.needs_ticks());
}

#[test]
fn first_tick_after_idle_does_not_jump_the_animation() {
    let config = AppConfig {
        panel_animation: Duration::from_millis(200),
        ..AppConfig::default()
    };
    let start = Instant::now();
    let mut session = Session::new(&config);

    session.dispatch(Action::Tick, start);
    let later = start + Duration::from_secs(10);
    session.dispatch(Action::OpenPanel, later);
    session.dispatch(Action::Tick, later + Duration::from_millis(50));

    assert_eq!(session.panel().phase(), PanelPhase::Opening);
    assert!(session.panel().progress() < 0.5);
}
