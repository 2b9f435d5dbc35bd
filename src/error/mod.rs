use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for strutil
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported charset: {0}")]
    UnsupportedCharset(String),

    #[error("Invalid binary input: {0}")]
    InvalidBinary(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[cfg(feature = "config")]
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Error with context chain
    #[error("{message}")]
    WithContext {
        message: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub fn unsupported_charset(name: impl Into<String>) -> Self {
        Self::UnsupportedCharset(name.into())
    }

    pub fn invalid_binary(msg: impl Into<String>) -> Self {
        Self::InvalidBinary(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    // Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            message: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code, e.g. for logs or API payloads
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::UnsupportedCharset(_) => "E_UNSUPPORTED_CHARSET",
            Error::InvalidBinary(_) => "E_INVALID_BINARY",
            Error::Decode(_) => "E_DECODE",
            #[cfg(feature = "config")]
            Error::Config(_) => "E_CONFIG",
            Error::Io(_) => "E_IO",
            Error::WithContext { source, .. } => source.error_code(),
        }
    }
}
