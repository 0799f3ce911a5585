//! Core carousel logic: loop geometry and the interaction state machine
//!
//! Everything in here is UI-free and deterministic. The rendering layer
//! (`crate::ui`) only reads positions and offsets; all mutation goes through
//! [`Controller`].

pub mod controller;
pub mod track;

use serde::{Deserialize, Serialize};

pub use controller::{Controller, Phase, Release, Tuning};

/// One entry of the carousel, supplied by the embedding application.
///
/// Items are immutable once loaded; `id` must be unique within the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselItem {
    pub id: u64,
    pub title: String,
    /// Image path or URL. Missing/unreadable images render as a placeholder.
    pub image: String,
    /// Opened in the system browser when the slide is activated.
    #[serde(default)]
    pub landing_page: Option<String>,
}
