//! Palette definitions for the to-do screen in light and dark variants.

use iced::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) background: Color,
    pub(crate) card: Color,
    pub(crate) card_border: Color,
    pub(crate) top_bar: Color,
    pub(crate) top_bar_text: Color,
    pub(crate) primary: Color,
    pub(crate) primary_hover: Color,
    pub(crate) primary_text: Color,
    pub(crate) ghost_hover: Color,
    pub(crate) drawer_background: Color,
    pub(crate) drawer_active: Color,
    pub(crate) drawer_hover: Color,
    pub(crate) drawer_text: Color,
    pub(crate) drawer_text_muted: Color,
    pub(crate) scrim: Color,
    pub(crate) checkbox_border: Color,
    pub(crate) text_primary: Color,
    pub(crate) text_muted: Color,
    pub(crate) toast_background: Color,
    pub(crate) toast_text: Color,
}

impl Palette {
    pub(crate) fn for_theme(theme: &iced::Theme) -> Self {
        match theme {
            iced::Theme::Dark => Self {
                background: Color::from_rgb(0.07, 0.07, 0.09),
                card: Color::from_rgb(0.13, 0.13, 0.16),
                card_border: Color::from_rgba(0.55, 0.60, 0.85, 0.18),
                top_bar: Color::from_rgb(0.11, 0.16, 0.36),
                top_bar_text: Color::WHITE,
                primary: Color::from_rgb(0.16, 0.26, 0.58),
                primary_hover: Color::from_rgb(0.22, 0.34, 0.70),
                primary_text: Color::WHITE,
                ghost_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.12),
                drawer_background: Color::from_rgb(0.12, 0.12, 0.15),
                drawer_active: Color::from_rgba(0.40, 0.52, 0.95, 0.30),
                drawer_hover: Color::from_rgba(0.40, 0.52, 0.95, 0.15),
                drawer_text: Color::from_rgb(0.92, 0.93, 0.97),
                drawer_text_muted: Color::from_rgba(0.80, 0.82, 0.90, 0.75),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.55),
                checkbox_border: Color::from_rgb(0.62, 0.66, 0.80),
                text_primary: Color::from_rgb(0.93, 0.94, 0.97),
                text_muted: Color::from_rgb(0.52, 0.54, 0.62),
                toast_background: Color::from_rgb(0.88, 0.89, 0.93),
                toast_text: Color::from_rgb(0.08, 0.08, 0.10),
            },
            _ => Self {
                background: Color::from_rgb(0.97, 0.96, 0.99),
                card: Color::from_rgb(0.99, 0.98, 1.0),
                card_border: Color::from_rgba(0.20, 0.22, 0.40, 0.12),
                top_bar: Color::from_rgb(0.11, 0.16, 0.36),
                top_bar_text: Color::WHITE,
                primary: Color::from_rgb(0.05, 0.14, 0.40),
                primary_hover: Color::from_rgb(0.10, 0.22, 0.52),
                primary_text: Color::WHITE,
                ghost_hover: Color::from_rgba(1.0, 1.0, 1.0, 0.16),
                drawer_background: Color::from_rgb(0.96, 0.95, 0.99),
                drawer_active: Color::from_rgba(0.30, 0.38, 0.80, 0.22),
                drawer_hover: Color::from_rgba(0.30, 0.38, 0.80, 0.10),
                drawer_text: Color::from_rgb(0.10, 0.11, 0.16),
                drawer_text_muted: Color::from_rgba(0.20, 0.22, 0.30, 0.75),
                scrim: Color::from_rgba(0.0, 0.0, 0.0, 0.32),
                checkbox_border: Color::from_rgb(0.36, 0.38, 0.48),
                text_primary: Color::from_rgb(0.10, 0.11, 0.16),
                text_muted: Color::from_rgb(0.50, 0.52, 0.58),
                toast_background: Color::from_rgb(0.20, 0.20, 0.23),
                toast_text: Color::from_rgb(0.96, 0.96, 0.98),
            },
        }
    }
}
