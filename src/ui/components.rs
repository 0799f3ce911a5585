//! UI components module - composite views with Message handling
//!
//! Components are the only UI layer that imports from `crate::app`.

pub mod carousel_banner;
pub mod slide;

pub use carousel_banner::BANNER_HEIGHT;
