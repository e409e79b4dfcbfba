use iced::font::Weight as FontWeight;
use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Font, Length};
use todo_core::SCREEN_TITLE;

use crate::app::message::Message;

use super::super::desktop::TodoDesktop;
use super::styles::{ghost_button_style, solid_style};

impl TodoDesktop {
    pub(crate) fn top_bar(&self) -> Element<'_, Message> {
        let palette = self.palette;

        let menu_button = button(text("☰").size(22).color(palette.top_bar_text))
            .padding([6, 12])
            .on_press(Message::MenuPressed)
            .style(move |_, status| ghost_button_style(palette, palette.top_bar_text, status));

        let title = text(SCREEN_TITLE)
            .size(22)
            .color(palette.top_bar_text)
            .font(Font {
                weight: FontWeight::Semibold,
                ..Font::DEFAULT
            });

        container(
            row![menu_button, title]
                .spacing(12)
                .align_y(Alignment::Center),
        )
        .width(Length::Fill)
        .padding([12, 8])
        .style(move |_| solid_style(palette.top_bar))
        .into()
    }
}
