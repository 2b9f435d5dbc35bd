//! Global string utilities
//!
//! This module provides the string helpers of the crate, accessible through
//! the `U` namespace.
//!
//! # Usage
//! ```rust
//! use strutil::U;
//!
//! let greeting = U::format(Some("Hello {}!"), &[&"world"]);
//! let fixed = U::replace_last(Some("1,2,3,"), ',', '.');
//! let bits = U::to_binary("A", Some("us-ascii"), None).unwrap();
//! ```

pub mod encoding;
pub mod string;

/// Global utilities module - the main entry point for all helper functions
///
/// Direct helpers live on `U::`, the full modules are reachable as
/// `U::String::` and `U::Encoding::`.
#[allow(non_snake_case)]
pub mod U {
    use super::*;
    #[cfg(feature = "config")]
    use crate::config::StringsConfig;
    use crate::error::Result;
    use std::fmt::Display;
    use std::string::String as StdString;

    /// String utilities namespace
    pub mod String {
        pub use super::super::string::*;
    }

    /// Encoding utilities namespace
    pub mod Encoding {
        pub use super::super::encoding::*;
    }

    /// Substitute `{}` placeholders leniently
    ///
    /// # Example
    /// ```rust
    /// use strutil::U;
    ///
    /// assert_eq!(U::format(Some("{}-{}"), &[&1, &2, &3]), "1-2");
    /// ```
    pub fn format(pattern: Option<&str>, args: &[&dyn Display]) -> StdString {
        string::format(pattern, args)
    }

    /// Replace the last occurrence of a character
    pub fn replace_last(input: Option<&str>, target: char, replacement: char) -> Option<StdString> {
        string::replace_last(input, target, replacement)
    }

    /// Convert a string to binary text
    ///
    /// # Example
    /// ```rust
    /// use strutil::U;
    ///
    /// assert_eq!(U::to_binary("A", Some("us-ascii"), None).unwrap(), "01000001");
    /// ```
    pub fn to_binary(
        input: &str,
        charset: Option<&str>,
        separator: Option<&str>,
    ) -> Result<StdString> {
        encoding::to_binary(input, charset, separator)
    }

    /// Convert binary text back to a string
    pub fn from_binary(
        bits: &str,
        charset: Option<&str>,
        separator: Option<&str>,
    ) -> Result<StdString> {
        encoding::from_binary(bits, charset, separator)
    }

    /// Convert a string to binary text using configured defaults
    #[cfg(feature = "config")]
    pub fn to_binary_with(input: &str, config: &StringsConfig) -> Result<StdString> {
        encoding::to_binary(
            input,
            config.charset.as_deref(),
            config.separator.as_deref(),
        )
    }

    /// Convert binary text back to a string using configured defaults
    #[cfg(feature = "config")]
    pub fn from_binary_with(bits: &str, config: &StringsConfig) -> Result<StdString> {
        encoding::from_binary(bits, config.charset.as_deref(), config.separator.as_deref())
    }
}

// Alternative name for compatibility
pub use U as Utils;
