//! Desktop application wiring that composes the shell, the task list and the session.

pub use self::desktop::run;
pub use self::options::DesktopOptions;

mod desktop;
mod helpers;
mod message;
mod options;
mod theme;
mod update;
mod views;
