//! Carousel banner component
//!
//! Renders the padded slide track on a canvas, translated by the animated
//! pixel offset, with navigation arrows and indicator dots layered on top.

use std::collections::HashMap;
use std::path::PathBuf;

use iced::widget::{Space, button, canvas, column, container, row, svg, text};
use iced::{
    Alignment, Background, Color, Element, Fill, Padding, Rectangle, Renderer, Size, Theme, mouse,
};

use super::slide;
use crate::app::{BannerState, Message};
use crate::carousel::CarouselItem;
use crate::ui::theme;

pub const BANNER_HEIGHT: f32 = 280.0;
const INDICATOR_SIZE: f32 = 8.0;
const INDICATOR_SPACING: f32 = 8.0;

struct TrackDrawer<'a> {
    padded: &'a [CarouselItem],
    images: &'a HashMap<u64, (PathBuf, u32, u32)>,
    from: f32,
    to: f32,
    progress: f32,
    animated: bool,
    slide_width: f32,
}

impl<'a, Message> canvas::Program<Message> for TrackDrawer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let offset = if self.animated && self.progress < 1.0 {
            // Ease out cubic for smoother feel
            let eased = 1.0 - (1.0 - self.progress).powi(3);
            self.from + (self.to - self.from) * eased
        } else {
            self.to
        };

        let slide_size = Size::new(self.slide_width, bounds.height);
        for (index, item) in self.padded.iter().enumerate() {
            let x = offset + index as f32 * self.slide_width;
            // Cull slides outside the visible window
            if x + self.slide_width <= 0.0 || x >= bounds.width {
                continue;
            }
            slide::draw(&mut frame, item, self.images.get(&item.id), slide_size, x);
        }

        vec![frame.into_geometry()]
    }
}

/// Build the carousel banner component
pub fn view<'a>(banner: &'a BannerState) -> Element<'a, Message> {
    if banner.items.is_empty() {
        return view_placeholder();
    }

    let now = iced::time::Instant::now();
    let controller = &banner.controller;
    let progress = banner.animation.interpolate(0.0_f32, 1.0_f32, now);

    let track: Element<'_, Message> = canvas(TrackDrawer {
        padded: &banner.padded,
        images: &banner.images,
        from: controller.last_offset(),
        to: controller.offset(),
        progress,
        animated: controller.animated(),
        slide_width: controller.slide_width(),
    })
    .width(Fill)
    .height(BANNER_HEIGHT)
    .into();

    // Navigation arrows
    let left_arrow = button(
        svg(svg::Handle::from_memory(
            crate::ui::icons::CHEVRON_LEFT.as_bytes(),
        ))
        .width(24)
        .height(24),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(Message::Navigate(-1));

    let right_arrow = button(
        svg(svg::Handle::from_memory(
            crate::ui::icons::CHEVRON_RIGHT.as_bytes(),
        ))
        .width(24)
        .height(24),
    )
    .padding(12)
    .style(theme::carousel_nav_button)
    .on_press(Message::Navigate(1));

    // Page indicators (dots)
    let active = controller.real_index();
    let indicators: Element<'_, Message> = row(banner
        .items
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let is_active = i == active;
            container(Space::new().width(INDICATOR_SIZE).height(INDICATOR_SIZE))
                .style(move |theme| container::Style {
                    background: Some(
                        if is_active {
                            Color::WHITE
                        } else {
                            theme::indicator_inactive(theme)
                        }
                        .into(),
                    ),
                    border: iced::Border {
                        radius: (INDICATOR_SIZE / 2.0).into(),
                        ..Default::default()
                    },
                    ..Default::default()
                })
                .into()
        })
        .collect::<Vec<_>>())
    .spacing(INDICATOR_SPACING)
    .align_y(Alignment::Center)
    .into();

    // Bottom row with indicators on the right
    let bottom_row = row![Space::new().width(Fill), indicators]
        .align_y(Alignment::Center)
        .padding(Padding::new(0.0).left(32.0).right(32.0));

    // Gradient overlay so captions and dots stay readable over any image
    let gradient_overlay = container(
        column![Space::new().height(Fill), bottom_row].padding(Padding::new(24.0).bottom(32.0)),
    )
    .width(Fill)
    .height(Fill)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Gradient(iced::Gradient::Linear(
            iced::gradient::Linear::new(iced::Radians(std::f32::consts::PI))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, Color::TRANSPARENT)
                .add_stop(1.0, theme::banner_gradient_bottom()),
        ))),
        ..Default::default()
    });

    // Navigation overlay (arrows)
    let nav_overlay = row![
        container(left_arrow)
            .height(BANNER_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
        Space::new().width(Fill),
        container(right_arrow)
            .height(BANNER_HEIGHT)
            .align_y(Alignment::Center)
            .padding(Padding::new(8.0)),
    ]
    .width(Fill)
    .height(BANNER_HEIGHT);

    let stacked = iced::widget::stack![track, gradient_overlay, nav_overlay]
        .width(Fill)
        .height(BANNER_HEIGHT);

    container(stacked)
        .width(Fill)
        .height(BANNER_HEIGHT)
        .style(theme::hero_banner)
        .into()
}

/// Placeholder view while no items are loaded
fn view_placeholder() -> Element<'static, Message> {
    let illustration = container(Space::new().width(Fill).height(BANNER_HEIGHT))
        .width(Fill)
        .height(BANNER_HEIGHT)
        .style(move |theme| container::Style {
            background: Some(Background::Color(theme::banner_placeholder(theme))),
            ..Default::default()
        });

    let overlay_content = column![
        text("Nothing to show yet")
            .size(36)
            .font(iced::Font {
                weight: theme::BOLD_WEIGHT,
                ..Default::default()
            })
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme))
            }),
        text("Drop a banners.json into the config directory to get started")
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme))
            }),
    ]
    .spacing(8)
    .padding(Padding::new(32.0));

    container(iced::widget::stack![
        illustration,
        container(overlay_content)
            .width(Fill)
            .height(BANNER_HEIGHT)
            .align_y(iced::alignment::Vertical::Bottom)
            .align_x(iced::alignment::Horizontal::Left),
    ])
    .width(Fill)
    .height(BANNER_HEIGHT)
    .style(theme::hero_banner)
    .into()
}
