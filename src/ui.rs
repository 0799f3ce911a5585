//! UI module for the carousel showcase
//!
//! - **Components** (`components`): composite views with Message handling
//! - **Theme** (`theme`): palette and style helpers for both modes

pub mod components;
pub mod icons;
pub mod theme;
