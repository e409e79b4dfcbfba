use iced::alignment::{Horizontal, Vertical};
use iced::border::{Border, Radius};
use iced::widget::{button, container, text};
use iced::{Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::TodoDesktop;
use super::styles::fab_style;

const FAB_SIZE: f32 = 56.0;

impl TodoDesktop {
    /// Floating "add task" button pinned to the bottom-right corner.
    pub(crate) fn action_button(&self) -> Element<'_, Message> {
        let palette = self.palette;
        let fab = button(
            container(text("+").size(28).color(palette.primary_text))
                .center_x(Length::Fixed(FAB_SIZE))
                .center_y(Length::Fixed(FAB_SIZE)),
        )
        .padding(0)
        .on_press(Message::AddTaskPressed)
        .style(move |_, status| fab_style(palette, status));

        container(fab)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .into()
    }

    pub(crate) fn toast(&self) -> Option<Element<'_, Message>> {
        let message = self.session.current_toast()?;
        let palette = self.palette;

        let bubble = container(text(message).size(14).color(palette.toast_text))
            .padding([10, 18])
            .style(move |_| toast_style(palette));

        Some(
            container(bubble)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding([96, 24])
                .align_x(Horizontal::Center)
                .align_y(Vertical::Bottom)
                .into(),
        )
    }
}

fn toast_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.toast_background)),
        border: Border {
            color: palette.toast_background,
            width: 0.0,
            radius: Radius::from(18.0),
        },
        text_color: Some(palette.toast_text),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
