//! swatch Library
//!
//! Theme presets for a web design system, applied as CSS custom properties.

// Module declarations
pub mod commands;
pub mod headless;

// Re-export workspace crates
pub use swatch_app as app;
pub use swatch_core as core;
pub use swatch_core::prelude;

pub use commands::{ApplyOptions, Context};
