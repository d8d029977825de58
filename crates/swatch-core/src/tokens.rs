//! Design tokens and UI prop contracts
//!
//! The string forms of every enum here are shared with the web components
//! that consume the theme, so they must not change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Declares a prop enum with a fixed wire string per variant.
///
/// Generates `ALL`, `as_str`, `Display`, `FromStr` and serde impls that all
/// agree on the same strings.
macro_rules! prop_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok($name::$variant),)+
                    other => Err(Error::unknown_variant($kind, other)),
                }
            }
        }
    };
}

prop_enum! {
    /// Visual style of a button
    ButtonVariant, "button variant" {
        Primary => "primary",
        PrimaryDark => "primary-dark",
        White => "white",
        WhiteOutline => "white-outline",
    }
}

prop_enum! {
    /// Button padding scale
    ButtonSize, "button size" {
        Base => "base",
        Lg => "lg",
    }
}

prop_enum! {
    /// Semantic heading element
    HeadingLevel, "heading level" {
        H1 => "h1",
        H2 => "h2",
        H3 => "h3",
        H4 => "h4",
        H5 => "h5",
        H6 => "h6",
    }
}

prop_enum! {
    /// Body/heading text size scale
    TextSize, "text size" {
        Base => "base",
        Lg => "lg",
        Xl => "xl",
        Xl2 => "2xl",
        Xl3 => "3xl",
        Xl4 => "4xl",
    }
}

prop_enum! {
    /// Font weight scale
    TextWeight, "text weight" {
        Normal => "normal",
        Medium => "medium",
        Semibold => "semibold",
        Bold => "bold",
    }
}

impl HeadingLevel {
    /// Numeric level, 1 through 6
    pub fn level(&self) -> u8 {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Design Tokens
// ─────────────────────────────────────────────────────────────────────────────

/// Full token set consumed by the design system's components
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignTokens {
    #[serde(default)]
    pub colors: ColorTokens,
    #[serde(default)]
    pub spacing: SpacingTokens,
    #[serde(default)]
    pub typography: TypographyTokens,
}

/// Primary brand color family
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: String,
    pub primary_dark: String,
    pub primary_darker: String,
    pub primary_light: String,
    pub primary_lighter: String,
}

/// Button padding, base and large
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub button_px: String,
    pub button_py: String,
    pub button_px_lg: String,
    pub button_py_lg: String,
}

/// Responsive type scale
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyTokens {
    pub h1_mobile: String,
    pub h1_desktop: String,
    pub h2_mobile: String,
    pub h2_desktop: String,
    pub h3_mobile: String,
    pub h3_desktop: String,
    pub body_mobile: String,
    pub body_desktop: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_variant_strings() {
        let strings: Vec<&str> = ButtonVariant::ALL.iter().map(|v| v.as_str()).collect();
        assert_eq!(
            strings,
            vec!["primary", "primary-dark", "white", "white-outline"]
        );
    }

    #[test]
    fn test_enum_counts_match_contract() {
        assert_eq!(ButtonSize::ALL.len(), 2);
        assert_eq!(HeadingLevel::ALL.len(), 6);
        assert_eq!(TextSize::ALL.len(), 6);
        assert_eq!(TextWeight::ALL.len(), 4);
    }

    #[test]
    fn test_from_str_accepts_wire_form() {
        assert_eq!("2xl".parse::<TextSize>().unwrap(), TextSize::Xl2);
        assert_eq!("h4".parse::<HeadingLevel>().unwrap(), HeadingLevel::H4);
        assert_eq!(
            "white-outline".parse::<ButtonVariant>().unwrap(),
            ButtonVariant::WhiteOutline
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "heavy".parse::<TextWeight>().unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownVariant {
                kind: "text weight",
                ..
            }
        ));
        // Case matters: the web side only emits lowercase
        assert!("LG".parse::<ButtonSize>().is_err());
    }

    #[test]
    fn test_serde_uses_wire_form() {
        let json = serde_json::to_string(&TextSize::Xl3).unwrap();
        assert_eq!(json, "\"3xl\"");

        let size: ButtonSize = serde_json::from_str("\"lg\"").unwrap();
        assert_eq!(size, ButtonSize::Lg);
    }

    #[test]
    fn test_display_matches_as_str() {
        for weight in TextWeight::ALL {
            assert_eq!(weight.to_string(), weight.as_str());
        }
    }

    #[test]
    fn test_heading_level_numbers() {
        let levels: Vec<u8> = HeadingLevel::ALL.iter().map(|h| h.level()).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_design_tokens_deserialize_camel_case() {
        let json = r##"{
            "colors": {
                "primary": "#0d9488",
                "primaryDark": "#0f766e",
                "primaryDarker": "#115e59",
                "primaryLight": "#14b8a6",
                "primaryLighter": "#5eead4"
            },
            "spacing": {
                "buttonPx": "1.5rem",
                "buttonPy": "0.75rem",
                "buttonPxLg": "2rem",
                "buttonPyLg": "1rem"
            }
        }"##;

        let tokens: DesignTokens = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.colors.primary_darker, "#115e59");
        assert_eq!(tokens.spacing.button_px_lg, "2rem");
        // Missing section falls back to empty strings
        assert_eq!(tokens.typography, TypographyTokens::default());
    }
}
