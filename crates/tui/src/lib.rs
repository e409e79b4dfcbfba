pub mod cli;
pub mod config;
pub mod tui;

pub use todo_core as core;
pub use todo_core::model;

pub use todo_core::AppConfig;
