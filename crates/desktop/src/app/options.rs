//! Configuration surfaces for tailoring the desktop shell.

use todo_core::AppConfig;

#[derive(Debug, Clone, Default)]
pub struct DesktopOptions {
    pub config: AppConfig,
    /// Tracing filter directive; `RUST_LOG` still refines it.
    pub log_filter: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct DesktopFlags {
    pub(crate) config: AppConfig,
}

impl From<DesktopOptions> for DesktopFlags {
    fn from(options: DesktopOptions) -> Self {
        Self {
            config: options.config,
        }
    }
}
