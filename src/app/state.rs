//! Application state

use std::collections::HashMap;
use std::path::PathBuf;

use iced::{Point, Rectangle, Size};

use crate::carousel::{CarouselItem, Controller, Tuning, track};
use crate::features::Settings;
use crate::ui::components::BANNER_HEIGHT;

/// Initial window size; kept in state until the first resize event arrives.
pub const WINDOW_SIZE: Size = Size::new(1100.0, 640.0);

/// Outer page padding around the content column.
pub const PAGE_PADDING: f32 = 24.0;

/// Height reserved for the page header above the banner.
pub const HEADER_HEIGHT: f32 = 64.0;

/// Top-level application state
pub struct App {
    pub core: CoreState,
    pub banner: BannerState,
}

/// Settings, window geometry and cursor tracking
pub struct CoreState {
    pub settings: Settings,
    pub window_size: Size,
    /// Last known cursor position, updated from the global event stream.
    pub cursor: Point,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_size: WINDOW_SIZE,
            cursor: Point::ORIGIN,
        }
    }

    /// Screen rectangle the banner currently occupies. Pointer presses and
    /// hover detection are resolved against this.
    pub fn carousel_bounds(&self) -> Rectangle {
        Rectangle {
            x: PAGE_PADDING,
            y: PAGE_PADDING + HEADER_HEIGHT,
            width: (self.window_size.width - 2.0 * PAGE_PADDING).max(0.0),
            height: BANNER_HEIGHT,
        }
    }

    /// Live slide-width measurement (one slide spans the banner).
    pub fn slide_width(&self) -> f32 {
        self.carousel_bounds().width
    }
}

/// Carousel items, pre-probed images and interaction state
pub struct BannerState {
    /// Source items in their original order.
    pub items: Vec<CarouselItem>,
    /// Items padded with boundary clones, rebuilt whenever `items` changes.
    pub padded: Vec<CarouselItem>,
    /// Probed slide images: item id -> (path, width, height). Clones share
    /// their real item's entry.
    pub images: HashMap<u64, (PathBuf, u32, u32)>,
    pub controller: Controller,
    /// Transition/snap-back animation; recreated for every committed move.
    pub animation: iced::animation::Animation<bool>,
}

impl BannerState {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            items: Vec::new(),
            padded: Vec::new(),
            images: HashMap::new(),
            controller: Controller::new(0, tuning),
            animation: iced::animation::Animation::new(false),
        }
    }

    /// Install a freshly loaded item list and rebuild the padded track.
    pub fn set_items(&mut self, items: Vec<CarouselItem>, tuning: Tuning, slide_width: f32) {
        self.controller = Controller::new(items.len(), tuning);
        self.controller.set_slide_width(slide_width);
        self.padded = track::padded_sequence(&items, self.controller.clone_count());
        self.items = items;
        self.images.clear();
    }

    /// Start the transition animation for a move committed just now.
    pub fn start_transition(&mut self, now: iced::time::Instant) {
        self.animation = iced::animation::Animation::new(false).slow();
        self.animation.go_mut(true, now);
    }

    pub fn is_animating(&self, now: iced::time::Instant) -> bool {
        self.animation.is_animating(now)
    }

    /// The real item the carousel currently shows.
    pub fn current_item(&self) -> Option<&CarouselItem> {
        self.items.get(self.controller.real_index())
    }
}
