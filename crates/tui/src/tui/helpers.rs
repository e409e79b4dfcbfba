use std::cmp::min;

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::{RowView, TitleDecoration};

pub const BG_BASE: Color = Color::Rgb(14, 17, 23);
pub const BG_PANEL: Color = Color::Rgb(22, 26, 34);
pub const BG_BAR: Color = Color::Rgb(28, 41, 92);
pub const BG_ACCENT: Color = Color::Rgb(32, 37, 47);
pub const FG_ACCENT: Color = Color::Rgb(120, 161, 255);

/// Rectangle anchored to the bottom-right corner of `area`.
pub fn bottom_right_rect(width: u16, height: u16, area: Rect, margin: u16) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + area.width.saturating_sub(w + margin).min(area.width - w),
        y: area.y + area.height.saturating_sub(h + margin).min(area.height - h),
        width: w,
        height: h,
    }
}

pub fn bottom_center_rect(width: u16, height: u16, area: Rect, margin: u16) -> Rect {
    let w = min(width, area.width);
    let h = min(height, area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + area.height.saturating_sub(h + margin).min(area.height - h),
        width: w,
        height: h,
    }
}

/// Left-anchored slice of `area` whose width follows the panel's progress.
pub fn drawer_rect(area: Rect, full_width: u16, progress: f32) -> Rect {
    let full = min(full_width, area.width);
    let width = (f32::from(full) * progress.clamp(0.0, 1.0)).round() as u16;
    Rect {
        width: width.min(full),
        ..area
    }
}

pub fn checkbox_glyph(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}

pub fn row_spans(row: &RowView) -> Vec<Span<'static>> {
    let title_style = match row.decoration {
        TitleDecoration::Strikethrough => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
        TitleDecoration::None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    };
    let box_style = if row.checked {
        Style::default().fg(FG_ACCENT)
    } else {
        Style::default().fg(Color::Gray)
    };

    vec![
        Span::styled(checkbox_glyph(row.checked), box_style),
        Span::raw("  "),
        Span::styled(row.title.clone(), title_style),
    ]
}
