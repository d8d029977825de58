//! # swatch-app - Theme Switching
//!
//! Registry of built-in color presets, the applicator that writes them into a
//! style variable namespace, and the preference storage that remembers the
//! user's choice.
//!
//! ## Public API
//!
//! ### Registry (`registry`)
//! - [`THEME_PRESETS`], [`DEFAULT_THEME_ID`], [`find_preset()`]
//! - [`ThemePreset`], [`ThemeColors`], [`ButtonStyle`], [`ColorSlot`]
//!
//! ### Applying (`applicator`, `style`, `events`)
//! - [`ThemeApplicator`] - resolves ids and writes variables into a [`StyleSink`]
//! - [`StyleVariables`] - in-memory namespace
//! - [`Stylesheet`] - CSS file whose `:root` rule is rewritten in place
//! - [`ThemeEvents`] / [`ThemeChanged`] - synchronous change notification
//!
//! ### Preferences (`storage`, `manager`)
//! - [`PreferenceStorage`] with [`FileStorage`], [`MemoryStorage`], [`NoopStorage`]
//! - [`ThemeManager`] - `get_current_theme_id`, `save_theme_preference`, `init_theme`
//!
//! ### Configuration (`config`)
//! - [`config::Settings`] loaded from `config.toml`

pub mod applicator;
pub mod config;
pub mod events;
pub mod manager;
pub mod registry;
pub mod storage;
pub mod style;
pub mod stylesheet;

pub use applicator::ThemeApplicator;
pub use events::{SubscriptionId, ThemeChanged, ThemeEvents, THEME_CHANGED_EVENT};
pub use manager::{stored_theme_id, ThemeManager};
pub use registry::{
    default_preset, find_preset, preset_ids, ButtonStyle, ColorSlot, ThemeColors, ThemePreset,
    DEFAULT_THEME_ID, THEME_PRESETS,
};
pub use storage::{FileStorage, MemoryStorage, NoopStorage, PreferenceStorage, PREFERENCE_KEY};
pub use style::{StyleSink, StyleVariables, BUTTON_RADIUS_VAR, BUTTON_SHADOW_VAR};
pub use stylesheet::Stylesheet;
