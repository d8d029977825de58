//! Built-in theme presets
//!
//! The registry is a compile-time constant. Lookup is by exact `id` match
//! and the first match wins.

use serde::Serialize;
use swatch_core::ColorTokens;

/// Identifier of the theme used when nothing else applies
pub const DEFAULT_THEME_ID: &str = "healthcare-teal";

/// One selectable visual theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemePreset {
    /// Stable identifier, used as lookup and persistence key
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub colors: ThemeColors,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button: Option<ButtonStyle>,
}

/// The nine semantic color slots every preset fills
///
/// Values are opaque CSS color strings and are never parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: &'static str,
    pub primary_dark: &'static str,
    pub primary_darker: &'static str,
    pub primary_light: &'static str,
    pub primary_lighter: &'static str,
    pub accent_sky: &'static str,
    pub accent_sky_light: &'static str,
    pub accent_orange: &'static str,
    pub accent_orange_light: &'static str,
}

/// Optional button overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ButtonStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<&'static str>,
}

/// A named color slot and its CSS custom property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Primary,
    PrimaryDark,
    PrimaryDarker,
    PrimaryLight,
    PrimaryLighter,
    AccentSky,
    AccentSkyLight,
    AccentOrange,
    AccentOrangeLight,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 9] = [
        ColorSlot::Primary,
        ColorSlot::PrimaryDark,
        ColorSlot::PrimaryDarker,
        ColorSlot::PrimaryLight,
        ColorSlot::PrimaryLighter,
        ColorSlot::AccentSky,
        ColorSlot::AccentSkyLight,
        ColorSlot::AccentOrange,
        ColorSlot::AccentOrangeLight,
    ];

    /// CSS custom property written for this slot
    pub fn css_variable(&self) -> &'static str {
        match self {
            ColorSlot::Primary => "--color-theme-primary",
            ColorSlot::PrimaryDark => "--color-theme-primary-dark",
            ColorSlot::PrimaryDarker => "--color-theme-primary-darker",
            ColorSlot::PrimaryLight => "--color-theme-primary-light",
            ColorSlot::PrimaryLighter => "--color-theme-primary-lighter",
            ColorSlot::AccentSky => "--color-theme-accent-sky",
            ColorSlot::AccentSkyLight => "--color-theme-accent-sky-light",
            ColorSlot::AccentOrange => "--color-theme-accent-orange",
            ColorSlot::AccentOrangeLight => "--color-theme-accent-orange-light",
        }
    }
}

impl ThemeColors {
    pub fn get(&self, slot: ColorSlot) -> &'static str {
        match slot {
            ColorSlot::Primary => self.primary,
            ColorSlot::PrimaryDark => self.primary_dark,
            ColorSlot::PrimaryDarker => self.primary_darker,
            ColorSlot::PrimaryLight => self.primary_light,
            ColorSlot::PrimaryLighter => self.primary_lighter,
            ColorSlot::AccentSky => self.accent_sky,
            ColorSlot::AccentSkyLight => self.accent_sky_light,
            ColorSlot::AccentOrange => self.accent_orange,
            ColorSlot::AccentOrangeLight => self.accent_orange_light,
        }
    }

    /// All nine slots with their values, in declaration order
    pub fn slots(&self) -> impl Iterator<Item = (ColorSlot, &'static str)> + '_ {
        ColorSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    /// Primary family as design-system color tokens
    pub fn to_color_tokens(&self) -> ColorTokens {
        ColorTokens {
            primary: self.primary.to_string(),
            primary_dark: self.primary_dark.to_string(),
            primary_darker: self.primary_darker.to_string(),
            primary_light: self.primary_light.to_string(),
            primary_lighter: self.primary_lighter.to_string(),
        }
    }
}

/// Built-in presets, in display order
pub const THEME_PRESETS: &[ThemePreset] = &[
    ThemePreset {
        id: "healthcare-teal",
        name: "Healthcare Teal",
        description: "Default medical/healthcare theme",
        colors: ThemeColors {
            primary: "#0d9488",
            primary_dark: "#0f766e",
            primary_darker: "#115e59",
            primary_light: "#14b8a6",
            primary_lighter: "#5eead4",
            accent_sky: "#0ea5e9",
            accent_sky_light: "#0ea5e9cc",
            accent_orange: "#fb923c",
            accent_orange_light: "#fb923ccc",
        },
        button: None,
    },
    ThemePreset {
        id: "navy-gold",
        name: "Navy Gold",
        description: "Professional and luxurious",
        colors: ThemeColors {
            primary: "#1e3a5f",
            primary_dark: "#152a45",
            primary_darker: "#0f1f33",
            primary_light: "#2d5a8a",
            primary_lighter: "#5b8fc4",
            accent_sky: "#d4a853",
            accent_sky_light: "#d4a853cc",
            accent_orange: "#c9944a",
            accent_orange_light: "#c9944acc",
        },
        button: None,
    },
    ThemePreset {
        id: "warm-earth",
        name: "Warm Earth",
        description: "Natural and grounded",
        colors: ThemeColors {
            primary: "#92400e",
            primary_dark: "#78350f",
            primary_darker: "#5c2d0e",
            primary_light: "#b45309",
            primary_lighter: "#d97706",
            accent_sky: "#059669",
            accent_sky_light: "#059669cc",
            accent_orange: "#dc2626",
            accent_orange_light: "#dc2626cc",
        },
        button: None,
    },
    ThemePreset {
        id: "modern-sky",
        name: "Modern Sky",
        description: "Clean and contemporary",
        colors: ThemeColors {
            primary: "#0369a1",
            primary_dark: "#075985",
            primary_darker: "#0c4a6e",
            primary_light: "#0284c7",
            primary_lighter: "#38bdf8",
            accent_sky: "#8b5cf6",
            accent_sky_light: "#8b5cf6cc",
            accent_orange: "#f97316",
            accent_orange_light: "#f97316cc",
        },
        button: None,
    },
    ThemePreset {
        id: "elegant-wine",
        name: "Elegant Wine",
        description: "Sophisticated and refined",
        colors: ThemeColors {
            primary: "#7c2d4d",
            primary_dark: "#6b2343",
            primary_darker: "#5a1a38",
            primary_light: "#9d3d63",
            primary_lighter: "#c76b8f",
            accent_sky: "#0891b2",
            accent_sky_light: "#0891b2cc",
            accent_orange: "#ca8a04",
            accent_orange_light: "#ca8a04cc",
        },
        button: None,
    },
    ThemePreset {
        id: "coastal-sage",
        name: "Coastal Sage",
        description: "Calm and refreshing",
        colors: ThemeColors {
            primary: "#4d7c6f",
            primary_dark: "#3d6359",
            primary_darker: "#2d4a43",
            primary_light: "#5e9585",
            primary_lighter: "#8fbfb0",
            accent_sky: "#6366f1",
            accent_sky_light: "#6366f1cc",
            accent_orange: "#ea580c",
            accent_orange_light: "#ea580ccc",
        },
        button: None,
    },
];

/// Find a preset by exact id
pub fn find_preset(id: &str) -> Option<&'static ThemePreset> {
    THEME_PRESETS.iter().find(|preset| preset.id == id)
}

/// The preset named by [`DEFAULT_THEME_ID`]
pub fn default_preset() -> &'static ThemePreset {
    find_preset(DEFAULT_THEME_ID).unwrap_or(&THEME_PRESETS[0])
}

/// Ids of all presets, in display order
pub fn preset_ids() -> impl Iterator<Item = &'static str> {
    THEME_PRESETS.iter().map(|preset| preset.id)
}
