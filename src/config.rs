use crate::error::Result;
use crate::utils::encoding::Charset;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Defaults applied by the binary helpers
///
/// Loaded from TOML, either as top-level keys or under a `[strings]` table:
///
/// ```toml
/// [strings]
/// charset = "utf-8"
/// separator = " "
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StringsConfig {
    /// Charset label, UTF-8 when absent
    #[serde(default)]
    pub charset: Option<String>,

    /// Text written after each byte
    #[serde(default)]
    pub separator: Option<String>,
}

#[derive(Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    strings: Option<StringsConfig>,

    #[serde(flatten)]
    top_level: StringsConfig,
}

impl StringsConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let document: ConfigDocument = toml::from_str(content)?;
        let config = document.strings.unwrap_or(document.top_level);
        log::debug!(
            "Strings configuration loaded (charset: {}, separator: {:?})",
            config.charset.as_deref().unwrap_or("default"),
            config.separator
        );
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
            .map_err(|e| e.with_context(format!("Invalid config file {}", path.as_ref().display())))
    }

    /// Resolve the configured charset
    pub fn charset(&self) -> Result<Charset> {
        Charset::resolve(self.charset.as_deref())
    }

    /// Check that the configured charset can be resolved
    pub fn validate(&self) -> Result<()> {
        self.charset().map(|_| ())
    }
}
