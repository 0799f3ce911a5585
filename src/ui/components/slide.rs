//! Stateless slide renderer
//!
//! Draws a single carousel item into the track canvas. The renderer owns no
//! interaction state; click suppression lives in the controller.

use std::path::PathBuf;

use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size};

use crate::carousel::CarouselItem;
use crate::ui::theme;

/// Draw one slide at horizontal offset `x` within the track frame.
///
/// Uses the pre-probed image when available (contain-fit, centered) and a
/// deterministic per-item fill otherwise, so a missing asset degrades to a
/// colored card instead of an error.
pub fn draw(
    frame: &mut canvas::Frame,
    item: &CarouselItem,
    image: Option<&(PathBuf, u32, u32)>,
    slide: Size,
    x: f32,
) {
    let fill = theme::slide_fill(item.id);

    if let Some((path, width, height)) = image {
        let img_w = *width as f32;
        let img_h = *height as f32;

        if img_w > 0.0 && img_h > 0.0 {
            let scale = (slide.width / img_w).min(slide.height / img_h);
            let final_w = img_w * scale;
            let final_h = img_h * scale;

            // Fill the gaps the contained image leaves around itself
            if final_w < slide.width || final_h < slide.height {
                frame.fill_rectangle(Point::new(x, 0.0), slide, fill);
            }

            frame.draw_image(
                Rectangle::new(
                    Point::new(
                        x + (slide.width - final_w) / 2.0,
                        (slide.height - final_h) / 2.0,
                    ),
                    Size::new(final_w, final_h),
                ),
                canvas::Image::new(path),
            );
        } else {
            frame.fill_rectangle(Point::new(x, 0.0), slide, fill);
        }
    } else {
        frame.fill_rectangle(Point::new(x, 0.0), slide, fill);
    }

    frame.fill_text(canvas::Text {
        content: item.title.clone(),
        position: Point::new(x + 24.0, slide.height - 48.0),
        color: Color::WHITE,
        size: 20.0.into(),
        ..canvas::Text::default()
    });
}

/// Activation target of a slide, if it has one.
pub fn landing_url(item: &CarouselItem) -> Option<&str> {
    item.landing_page.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_url_is_the_optional_landing_page() {
        let item = CarouselItem {
            id: 1,
            title: "First".into(),
            image: String::new(),
            landing_page: Some("https://example.com".into()),
        };
        assert_eq!(landing_url(&item), Some("https://example.com"));

        let bare = CarouselItem {
            landing_page: None,
            ..item
        };
        assert_eq!(landing_url(&bare), None);
    }
}
