//! Application features beyond the UI itself

pub mod settings;

pub use settings::{CarouselSettings, DisplaySettings, Settings, SettingsError};
