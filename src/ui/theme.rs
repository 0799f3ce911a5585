//! Theme system for the carousel showcase
//! Supports both dark and light modes with a small shared palette

use iced::color;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x0d0d11);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xf7f7fa);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
}

/// Bold font weight used for headings and captions
pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Page background container
pub fn page(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Hero banner container (rounded, tinted)
pub fn hero_banner(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x1a1a2e)
    } else {
        color!(0xe8e8f0)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Carousel navigation arrow button
pub fn carousel_nav_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.3))),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.7))),
            ..base
        },
        _ => base,
    }
}

/// Banner placeholder color (empty item list)
pub fn banner_placeholder(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.1, 0.05, 0.2)
    } else {
        Color::from_rgb(0.9, 0.85, 0.95)
    }
}

/// Banner gradient bottom
pub fn banner_gradient_bottom() -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, 0.8)
}

/// Indicator dot inactive color
pub fn indicator_inactive(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.35)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.25)
    }
}

/// Deterministic fill for slides without a usable image, keyed by item id so
/// clones of the same item render identically on both sides of the seam.
pub fn slide_fill(id: u64) -> Color {
    const PALETTE: [Color; 6] = [
        color!(0x2d1b4e),
        color!(0x1b3a4e),
        color!(0x1b4e38),
        color!(0x4e3a1b),
        color!(0x4e1b2d),
        color!(0x33334e),
    ];
    PALETTE[(id % PALETTE.len() as u64) as usize]
}
