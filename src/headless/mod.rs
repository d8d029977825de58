//! Headless output - NDJSON events for scripts and web build hooks
//!
//! With `--json` the CLI prints one JSON object per line instead of CSS.
//! Each object has an "event" field naming its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"theme-changed","themeId":"coastal-sage","requestedId":"coastal-sage","fallback":false,"timestamp":1704700001000}
//! ```

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use swatch_app::ThemeChanged;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum HeadlessEvent {
    /// A theme was written to the style namespace
    #[serde(rename_all = "camelCase")]
    ThemeChanged {
        theme_id: String,
        requested_id: String,
        fallback: bool,
        timestamp: i64,
    },

    /// A theme preference was persisted
    #[serde(rename_all = "camelCase")]
    PreferenceSaved { theme_id: String, timestamp: i64 },

    /// Something went wrong
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn theme_changed(event: &ThemeChanged) -> Self {
        Self::ThemeChanged {
            theme_id: event.theme_id.clone(),
            requested_id: event.requested_id.clone(),
            fallback: event.is_fallback(),
            timestamp: Self::now(),
        }
    }

    pub fn preference_saved(theme_id: &str) -> Self {
        Self::PreferenceSaved {
            theme_id: theme_id.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>, fatal: bool) -> Self {
        Self::Error {
            message: message.into(),
            fatal,
            timestamp: Self::now(),
        }
    }
}

impl From<&ThemeChanged> for HeadlessEvent {
    fn from(event: &ThemeChanged) -> Self {
        Self::theme_changed(event)
    }
}
