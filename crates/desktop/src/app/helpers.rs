//! Helper utilities for resolving environment defaults.

use dark_light::Mode as ThemePreference;
use iced::Theme;
use todo_core::ThemeChoice;

pub(crate) fn detect_theme() -> Theme {
    match dark_light::detect() {
        ThemePreference::Dark => Theme::Dark,
        ThemePreference::Light => Theme::Light,
        ThemePreference::Default => Theme::Dark,
    }
}

pub(crate) fn resolve_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Auto => detect_theme(),
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
    }
}

pub(crate) fn is_dark(theme: &Theme) -> bool {
    matches!(theme, Theme::Dark)
}
