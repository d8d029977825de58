//! Theme applicator
//!
//! Resolves a theme id against the registry and writes its values into a
//! [`StyleSink`]. Unknown ids degrade to the default theme; nothing here
//! returns an error.

use swatch_core::prelude::*;

use crate::events::{ThemeChanged, ThemeEvents};
use crate::registry::{default_preset, find_preset, ThemePreset};
use crate::style::{StyleSink, BUTTON_RADIUS_VAR, BUTTON_SHADOW_VAR};

/// Writes presets into a style namespace and notifies observers
#[derive(Debug)]
pub struct ThemeApplicator<S> {
    sink: S,
    events: ThemeEvents,
}

impl<S: StyleSink> ThemeApplicator<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            events: ThemeEvents::new(),
        }
    }

    /// Apply `theme_id`, falling back to the default theme when unknown
    ///
    /// Emits exactly one change notification per call, carrying the id that
    /// was actually written.
    pub fn apply_theme(&mut self, theme_id: &str) -> &'static ThemePreset {
        let preset = resolve(theme_id);
        self.write_preset(preset);

        debug!("Applied theme {}", preset.id);
        self.events.emit(&ThemeChanged::new(preset.id, theme_id));
        preset
    }

    fn write_preset(&mut self, preset: &ThemePreset) {
        for (slot, value) in preset.colors.slots() {
            self.sink.set_variable(slot.css_variable(), value);
        }

        // Unset or empty overrides leave whatever value was there before
        if let Some(button) = preset.button {
            if let Some(radius) = button.radius.filter(|v| !v.is_empty()) {
                self.sink.set_variable(BUTTON_RADIUS_VAR, radius);
            }
            if let Some(shadow) = button.shadow.filter(|v| !v.is_empty()) {
                self.sink.set_variable(BUTTON_SHADOW_VAR, shadow);
            }
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn events_mut(&mut self) -> &mut ThemeEvents {
        &mut self.events
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Look up `theme_id`, substituting the default on a miss
fn resolve(theme_id: &str) -> &'static ThemePreset {
    match find_preset(theme_id) {
        Some(preset) => preset,
        None => {
            warn!("Theme {:?} not found, using default", theme_id);
            default_preset()
        }
    }
}
