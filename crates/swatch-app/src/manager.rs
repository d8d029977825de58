//! Theme preference management
//!
//! [`ThemeManager`] ties the applicator to a preference storage: it reads the
//! saved theme at startup and persists every user selection.

use swatch_core::prelude::*;

use crate::applicator::ThemeApplicator;
use crate::events::ThemeEvents;
use crate::registry::{ThemePreset, DEFAULT_THEME_ID};
use crate::storage::{PreferenceStorage, PREFERENCE_KEY};
use crate::style::StyleSink;

/// Applies themes and remembers the user's choice
#[derive(Debug)]
pub struct ThemeManager<S, P> {
    applicator: ThemeApplicator<S>,
    storage: P,
}

impl<S: StyleSink, P: PreferenceStorage> ThemeManager<S, P> {
    pub fn new(sink: S, storage: P) -> Self {
        Self {
            applicator: ThemeApplicator::new(sink),
            storage,
        }
    }

    /// The stored theme id, or the default when there is none
    ///
    /// The id is returned as stored; it is only checked against the registry
    /// when applied.
    pub fn get_current_theme_id(&self) -> String {
        stored_theme_id(&self.storage)
    }

    /// Persist `theme_id` (best-effort) and apply it
    pub fn save_theme_preference(&mut self, theme_id: &str) -> &'static ThemePreset {
        if self.storage.is_available() {
            match self.storage.set(PREFERENCE_KEY, theme_id) {
                Ok(()) => debug!("Saved theme preference {}", theme_id),
                Err(e) => warn!("Could not save theme preference {}: {}", theme_id, e),
            }
        }
        self.applicator.apply_theme(theme_id)
    }

    /// Apply the stored preference. Intended as the single startup call.
    pub fn init_theme(&mut self) -> &'static ThemePreset {
        let theme_id = self.get_current_theme_id();
        info!("Initializing theme {}", theme_id);
        self.applicator.apply_theme(&theme_id)
    }

    pub fn apply_theme(&mut self, theme_id: &str) -> &'static ThemePreset {
        self.applicator.apply_theme(theme_id)
    }

    pub fn events_mut(&mut self) -> &mut ThemeEvents {
        self.applicator.events_mut()
    }

    pub fn sink(&self) -> &S {
        self.applicator.sink()
    }

    pub fn storage(&self) -> &P {
        &self.storage
    }

    pub fn into_parts(self) -> (S, P) {
        (self.applicator.into_sink(), self.storage)
    }
}

/// Read the theme id from `storage`, defaulting when unavailable or unset
pub fn stored_theme_id<P: PreferenceStorage + ?Sized>(storage: &P) -> String {
    if !storage.is_available() {
        return DEFAULT_THEME_ID.to_string();
    }

    match storage.get(PREFERENCE_KEY) {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_THEME_ID.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ThemeChanged;
    use crate::registry::THEME_PRESETS;
    use crate::storage::{MemoryStorage, NoopStorage};
    use crate::style::StyleVariables;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage that is available but refuses every write
    struct ReadOnlyStorage(Option<String>);

    impl PreferenceStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Option<String> {
            self.0.clone()
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::storage("read-only"))
        }
    }

    #[test]
    fn test_current_defaults_when_unset() {
        let manager = ThemeManager::new(StyleVariables::new(), MemoryStorage::new());
        assert_eq!(manager.get_current_theme_id(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_current_defaults_without_storage() {
        let manager = ThemeManager::new(StyleVariables::new(), NoopStorage);
        assert_eq!(manager.get_current_theme_id(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_current_defaults_on_empty_value() {
        let mut storage = MemoryStorage::new();
        storage.set(PREFERENCE_KEY, "").unwrap();
        let manager = ThemeManager::new(StyleVariables::new(), storage);
        assert_eq!(manager.get_current_theme_id(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_save_then_current_round_trip() {
        let mut manager = ThemeManager::new(StyleVariables::new(), MemoryStorage::new());
        for preset in THEME_PRESETS {
            manager.save_theme_preference(preset.id);
            assert_eq!(manager.get_current_theme_id(), preset.id);
        }
    }

    #[test]
    fn test_save_applies_immediately() {
        let mut manager = ThemeManager::new(StyleVariables::new(), MemoryStorage::new());
        let applied = manager.save_theme_preference("navy-gold");

        assert_eq!(applied.id, "navy-gold");
        assert_eq!(manager.sink().get("--color-theme-primary"), Some("#1e3a5f"));
    }

    #[test]
    fn test_save_without_storage_still_applies() {
        let mut manager = ThemeManager::new(StyleVariables::new(), NoopStorage);
        manager.save_theme_preference("warm-earth");

        assert_eq!(manager.sink().get("--color-theme-primary"), Some("#92400e"));
        assert_eq!(manager.get_current_theme_id(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_failed_write_still_applies() {
        let mut manager = ThemeManager::new(StyleVariables::new(), ReadOnlyStorage(None));
        let applied = manager.save_theme_preference("modern-sky");

        assert_eq!(applied.id, "modern-sky");
        assert_eq!(manager.get_current_theme_id(), DEFAULT_THEME_ID);
    }

    #[test]
    fn test_unknown_saved_id_is_stored_but_default_applied() {
        let mut manager = ThemeManager::new(StyleVariables::new(), MemoryStorage::new());
        let applied = manager.save_theme_preference("retired-theme");

        assert_eq!(applied.id, DEFAULT_THEME_ID);
        assert_eq!(manager.get_current_theme_id(), "retired-theme");
    }

    #[test]
    fn test_init_theme_uses_stored_preference() {
        let mut storage = MemoryStorage::new();
        storage.set(PREFERENCE_KEY, "elegant-wine").unwrap();

        let mut manager = ThemeManager::new(StyleVariables::new(), storage);
        let applied = manager.init_theme();

        assert_eq!(applied.id, "elegant-wine");
        assert_eq!(manager.sink().get("--color-theme-primary"), Some("#7c2d4d"));
    }

    #[test]
    fn test_init_theme_falls_back_for_stale_preference() {
        let mut manager = ThemeManager::new(
            StyleVariables::new(),
            ReadOnlyStorage(Some("old-theme".to_string())),
        );
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        manager
            .events_mut()
            .subscribe(move |e: &ThemeChanged| log.borrow_mut().push(e.clone()));

        let applied = manager.init_theme();

        assert_eq!(applied.id, DEFAULT_THEME_ID);
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0], ThemeChanged::new(DEFAULT_THEME_ID, "old-theme"));
    }

    #[test]
    fn test_into_parts() {
        let mut manager = ThemeManager::new(StyleVariables::new(), MemoryStorage::new());
        manager.save_theme_preference("coastal-sage");

        let (vars, storage) = manager.into_parts();
        assert_eq!(vars.get("--color-theme-accent-orange"), Some("#ea580c"));
        assert_eq!(
            storage.get(PREFERENCE_KEY).as_deref(),
            Some("coastal-sage")
        );
    }
}
