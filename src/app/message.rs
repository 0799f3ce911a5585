//! Application messages

use std::path::PathBuf;

use iced::{Point, Size};

use crate::carousel::CarouselItem;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// No-op message for discarded async results
    Noop,

    // ============ Startup ============
    /// Carousel items finished loading
    ItemsLoaded(Vec<CarouselItem>),
    /// Image probed for a slide: id, path, width, height
    SlideImageReady(u64, PathBuf, u32, u32),

    // ============ Carousel ============
    /// Auto-advance timer fired
    AutoAdvance,
    /// Arrow navigation (-1 previous, +1 next)
    Navigate(i32),
    /// Left mouse button pressed (position comes from the tracked cursor)
    PointerPressed,
    /// Cursor moved (tracked globally so drags survive leaving the widget)
    PointerMoved(Point),
    /// Left mouse button released
    PointerReleased,
    /// Touch began at a position
    TouchBegan(Point),
    /// Touch moved
    TouchMoved(Point),
    /// Touch lifted
    TouchEnded,
    /// Animation frame while a transition or snap-back is playing
    AnimationTick,

    // ============ Window ============
    /// Window resized (re-measure the slide width)
    WindowResized(Size),
}
