use iced::border::{Border, Radius};
use iced::widget::{button, container};
use iced::{Background, Color, Shadow, Vector};

use crate::app::theme::Palette;

pub(super) fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

pub(super) fn darken(color: Color, factor: f32) -> Color {
    let clamp = |value: f32| value.clamp(0.0, 1.0);
    Color {
        r: clamp(color.r * factor),
        g: clamp(color.g * factor),
        b: clamp(color.b * factor),
        ..color
    }
}

/// Round, raised button used for the floating "add task" action.
pub(super) fn fab_style(palette: Palette, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: Some(Background::Color(palette.primary)),
        border: Border {
            color: palette.primary,
            width: 0.0,
            radius: Radius::from(16.0),
        },
        text_color: palette.primary_text,
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.35),
            offset: Vector::new(0.0, 3.0),
            blur_radius: 8.0,
            ..Shadow::default()
        },
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered => {
            style.background = Some(Background::Color(palette.primary_hover));
            style.border.color = palette.primary_hover;
        }
        button::Status::Pressed => {
            let pressed = darken(palette.primary, 0.8);
            style.background = Some(Background::Color(pressed));
            style.border.color = pressed;
            style.shadow.offset = Vector::new(0.0, 1.0);
        }
        button::Status::Disabled => {
            style.background = Some(Background::Color(with_alpha(palette.primary, 0.6)));
            style.text_color = with_alpha(palette.primary_text, 0.6);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn ghost_button_style(
    palette: Palette,
    text_color: Color,
    status: button::Status,
) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            radius: Radius::from(20.0),
            ..Border::default()
        },
        text_color,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            style.background = Some(Background::Color(palette.ghost_hover));
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(text_color, 0.6);
        }
        button::Status::Active => {}
    }

    style
}

pub(super) fn card_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.card)),
        border: Border {
            color: palette.card_border,
            width: 1.0,
            radius: Radius::from(12.0),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.18),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 4.0,
            ..Shadow::default()
        },
        ..container::Style::default()
    }
}

pub(super) fn solid_style(color: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
