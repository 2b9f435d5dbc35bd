//! strutil - small string helpers
//!
//! strutil provides a handful of pure string functions:
//! - Lenient `{}` placeholder formatting that tolerates count mismatches
//! - Replacing the last occurrence of a character
//! - Dumping a string's encoded bytes as binary text, and parsing it back
//!
//! Every function is stateless and safe to call from any thread.

// Enforce error handling best practices
#![cfg_attr(
    not(test),
    warn(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
    )
)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used,))]

#[cfg(feature = "config")]
pub mod config;
pub mod error;
pub mod utils;

// Re-export main types for public API
#[cfg(feature = "config")]
pub use config::StringsConfig;
pub use error::{Error, Result};
pub use utils::encoding::Charset;
pub use utils::{Utils, U};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::lenient_format;
    pub use crate::utils::encoding::{from_binary, to_binary, Charset};
    pub use crate::utils::string::{format, replace_last};
    pub use crate::utils::{Utils, U};
    pub use crate::{Error, Result};
}
