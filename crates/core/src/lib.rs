pub mod config;
pub mod model;
pub mod notify;
pub mod panel;
pub mod row;
pub mod session;
pub mod store;

pub use config::{AppConfig, ConfigOverrides, ThemeChoice};
pub use model::*;
pub use notify::{Notifications, Toast};
pub use panel::{MenuEntry, Panel, PanelPhase};
pub use row::{RowView, TitleDecoration};
pub use session::{Action, Session, SCREEN_TITLE};
pub use store::{TaskStore, ToggleOutcome};
