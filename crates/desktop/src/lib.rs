//! Desktop crate facade exposing the iced-based to-do screen to the wider workspace.

mod app;
mod telemetry;

pub use app::{run, DesktopOptions};
