//! Style variable namespace
//!
//! The applicator writes through a [`StyleSink`] rather than a global
//! document root, so any host (a browser bridge, a [`Stylesheet`], a test)
//! can receive the variables.
//!
//! [`Stylesheet`]: crate::stylesheet::Stylesheet

/// Custom property for the optional button radius override
pub const BUTTON_RADIUS_VAR: &str = "--button-radius";

/// Custom property for the optional button shadow override
pub const BUTTON_SHADOW_VAR: &str = "--button-shadow";

/// Receiver for style variable writes
///
/// A write is visible immediately to anything reading the namespace.
#[cfg_attr(test, mockall::automock)]
pub trait StyleSink {
    fn set_variable(&mut self, name: &str, value: &str);
}

/// In-memory variable namespace
///
/// Keeps first-write order; overwriting a variable keeps its original
/// position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleVariables {
    entries: Vec<(String, String)>,
}

impl StyleVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl StyleSink for StyleVariables {
    fn set_variable(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((name.to_string(), value.to_string())),
        }
    }
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn set_variable(&mut self, name: &str, value: &str) {
        (**self).set_variable(name, value);
    }
}
