//! Application view rendering

use iced::widget::{column, container, text};
use iced::{Element, Fill};

use super::state::{HEADER_HEIGHT, PAGE_PADDING};
use super::{App, Message};
use crate::ui::{components, theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let header = container(
            text("Featured")
                .size(28)
                .font(iced::Font {
                    weight: theme::BOLD_WEIGHT,
                    ..Default::default()
                })
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                }),
        )
        .height(HEADER_HEIGHT)
        .align_y(iced::alignment::Vertical::Center);

        let banner = components::carousel_banner::view(&self.banner);

        // No spacing above the banner: CoreState::carousel_bounds derives the
        // banner rectangle from PAGE_PADDING and HEADER_HEIGHT alone.
        let hint = container(
            text("Drag to browse, click a slide to open it")
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        )
        .padding(iced::Padding::new(0.0).top(12.0));

        container(column![header, banner, hint])
            .width(Fill)
            .height(Fill)
            .padding(PAGE_PADDING)
            .style(theme::page)
            .into()
    }
}
