use iced::alignment::Vertical;
use iced::border::{Border, Radius};
use iced::font::Weight as FontWeight;
use iced::widget::{button, column, container, lazy, row, rule, scrollable, stack, text};
use iced::{Alignment, Background, Color, Element, Font, Length, Shadow};
use todo_core::{RowView, TitleDecoration};

use crate::app::helpers::is_dark;
use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::TodoDesktop;
use super::styles::{card_style, with_alpha};

const CHECKBOX_SIZE: f32 = 24.0;

impl TodoDesktop {
    pub(crate) fn task_list(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let rows = self.session.rows();
        // Rebuilt only when a toggle lands or the theme changes.
        let dependency = (self.session.store().version(), is_dark(&self.theme));

        let list = lazy(dependency, move |_| render_rows(rows.clone(), palette));

        scrollable(container(list).width(Length::Fill).padding(16))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn render_rows(rows: Vec<RowView>, palette: Palette) -> Element<'static, Message> {
    rows.into_iter()
        .fold(column![].spacing(8), |list, row_view| {
            list.push(task_row(row_view, palette))
        })
        .width(Length::Fill)
        .into()
}

/// One card: checkbox on the left, title filling the rest.
fn task_row(row_view: RowView, palette: Palette) -> Element<'static, Message> {
    let toggle = Message::TaskToggled(row_view.id, !row_view.checked);

    let checkbox = button(checkbox_mark(row_view.checked, palette))
        .padding(0)
        .on_press(toggle)
        .style(move |_, status| checkbox_style(palette, row_view.checked, status));

    let title = task_title(&row_view, palette);

    container(
        row![checkbox, title]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(16)
    .style(move |_| card_style(palette))
    .into()
}

fn checkbox_mark(checked: bool, palette: Palette) -> Element<'static, Message> {
    let mark = if checked { "✓" } else { "" };
    container(text(mark).size(16).color(palette.primary_text))
        .center_x(Length::Fixed(CHECKBOX_SIZE))
        .center_y(Length::Fixed(CHECKBOX_SIZE))
        .into()
}

fn task_title(row_view: &RowView, palette: Palette) -> Element<'static, Message> {
    let color = match row_view.decoration {
        TitleDecoration::Strikethrough => palette.text_muted,
        TitleDecoration::None => palette.text_primary,
    };
    let label = text(row_view.title.clone())
        .size(20)
        .color(color)
        .font(Font {
            weight: FontWeight::Bold,
            ..Font::DEFAULT
        });

    match row_view.decoration {
        TitleDecoration::None => label.into(),
        TitleDecoration::Strikethrough => {
            // The label sizes the stack, so the line spans exactly the title.
            let strike = container(rule::horizontal(2).style(move |_| strike_style(color)))
                .height(Length::Fill)
                .align_y(Vertical::Center);
            stack![label, strike].into()
        }
    }
}

fn checkbox_style(palette: Palette, checked: bool, status: button::Status) -> button::Style {
    let fill = if checked {
        Some(Background::Color(palette.primary))
    } else {
        Some(Background::Color(Color::TRANSPARENT))
    };
    let mut style = button::Style {
        background: fill,
        border: Border {
            color: if checked {
                palette.primary
            } else {
                palette.checkbox_border
            },
            width: 2.0,
            radius: Radius::from(4.0),
        },
        text_color: palette.primary_text,
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            if !checked {
                style.background = Some(Background::Color(with_alpha(palette.primary, 0.15)));
            }
        }
        button::Status::Disabled => {
            style.border.color = with_alpha(style.border.color, 0.5);
        }
        button::Status::Active => {}
    }

    style
}

fn strike_style(color: Color) -> rule::Style {
    rule::Style {
        color,
        radius: Radius::from(0.0),
        fill_mode: rule::FillMode::Full,
        snap: true,
    }
}
