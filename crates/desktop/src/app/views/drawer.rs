use iced::border::{Border, Radius};
use iced::font::Weight as FontWeight;
use iced::widget::{button, column, container, mouse_area, opaque, row, text, Space};
use iced::{Alignment, Background, Element, Font, Length, Shadow};
use todo_core::MenuEntry;

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::TodoDesktop;
use super::styles::{solid_style, with_alpha};

const DRAWER_WIDTH: f32 = 280.0;

impl TodoDesktop {
    /// Modal navigation drawer. Its width and the scrim follow the panel animation.
    pub(crate) fn drawer(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let progress = self.session.panel().progress();

        let mut menu = column![Space::new().height(Length::Fixed(12.0))]
            .spacing(4)
            .width(Length::Fixed(DRAWER_WIDTH))
            .padding([0, 12]);
        for entry in MenuEntry::ALL {
            menu = menu.push(menu_item(*entry, palette));
        }

        let sheet = container(menu)
            .width(Length::Fixed(DRAWER_WIDTH * progress))
            .height(Length::Fill)
            .clip(true)
            .style(move |_| solid_style(palette.drawer_background));

        let scrim_color = with_alpha(palette.scrim, palette.scrim.a * progress);
        let scrim = mouse_area(
            container(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(move |_| solid_style(scrim_color)),
        )
        .on_press(Message::PanelDismissed);

        opaque(
            row![sheet, scrim]
                .width(Length::Fill)
                .height(Length::Fill),
        )
    }
}

fn menu_item(entry: MenuEntry, palette: Palette) -> Element<'static, Message> {
    let selected = entry.is_selected();
    let weight = if selected {
        FontWeight::Bold
    } else {
        FontWeight::Normal
    };

    let label = row![
        text(entry.icon()).size(18),
        text(entry.label()).size(15).font(Font {
            weight,
            ..Font::DEFAULT
        }),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    button(label)
        .width(Length::Fill)
        .padding([14, 16])
        .on_press(Message::MenuEntrySelected(entry))
        .style(move |_, status| menu_item_style(palette, selected, status))
        .into()
}

fn menu_item_style(palette: Palette, selected: bool, status: button::Status) -> button::Style {
    let mut style = button::Style {
        background: None,
        border: Border {
            radius: Radius::from(28.0),
            ..Border::default()
        },
        text_color: if selected {
            palette.drawer_text
        } else {
            palette.drawer_text_muted
        },
        shadow: Shadow::default(),
        ..button::Style::default()
    };

    if selected {
        style.background = Some(Background::Color(palette.drawer_active));
    }

    match status {
        button::Status::Hovered | button::Status::Pressed => {
            if !selected {
                style.background = Some(Background::Color(palette.drawer_hover));
                style.text_color = palette.drawer_text;
            }
        }
        button::Status::Disabled => {
            style.text_color = with_alpha(style.text_color, 0.6);
        }
        button::Status::Active => {}
    }

    style
}
