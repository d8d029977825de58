//! # swatch-core - Core Types
//!
//! Foundation crate for swatch. Provides error handling, logging setup and
//! the design-token and UI prop types shared with the web components.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with a `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Design Tokens (`tokens`)
//! - [`ButtonVariant`], [`ButtonSize`], [`HeadingLevel`], [`TextSize`], [`TextWeight`]
//! - [`DesignTokens`] with [`ColorTokens`], [`SpacingTokens`], [`TypographyTokens`]
//!
//! ## Prelude
//!
//! ```rust
//! use swatch_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod tokens;

/// Prelude for common imports used throughout the swatch crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use tokens::{
    ButtonSize, ButtonVariant, ColorTokens, DesignTokens, HeadingLevel, SpacingTokens, TextSize,
    TextWeight, TypographyTokens,
};
