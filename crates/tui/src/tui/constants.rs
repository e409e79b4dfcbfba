use std::time::Duration;

pub(crate) const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Fast enough for the panel slide to read as motion.
pub(crate) const TICK_RATE: Duration = Duration::from_millis(50);

pub(crate) const DRAWER_WIDTH: u16 = 28;
pub(crate) const FAB_LABEL: &str = " + ";

pub(crate) const HINT_LIST: &str =
    "↑/↓ move • Space toggle • m menu • a add task • q quit";
pub(crate) const HINT_PANEL: &str = "↑/↓ choose • Enter select • Esc close • q quit";
