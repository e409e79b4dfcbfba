use iced::widget::{column, container, stack};
use iced::border::Border;
use iced::{Background, Element, Length, Shadow};

use crate::app::message::Message;
use crate::app::theme::Palette;

use super::super::desktop::TodoDesktop;

pub(crate) fn compose(app: &TodoDesktop) -> Element<'_, Message> {
    let screen = container(
        column![app.top_bar(), app.task_list()]
            .spacing(0)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| app_background_style(app.palette));

    let mut layers = stack![screen, app.action_button()];

    if let Some(toast) = app.toast() {
        layers = layers.push(toast);
    }

    if app.session.panel().is_visible() {
        layers = layers.push(app.drawer());
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}

fn app_background_style(palette: Palette) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette.background)),
        border: Border::default(),
        shadow: Shadow::default(),
        ..container::Style::default()
    }
}
