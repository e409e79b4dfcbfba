pub use todo_tui::cli;
pub use todo_tui::config;
pub use todo_tui::tui;
pub use todo_tui::AppConfig;

pub use todo_core as core;
pub use todo_core::model;
pub use todo_core::session;
pub use todo_core::store;

pub use todo_desktop as desktop;
pub use todo_desktop::DesktopOptions;
