//! Error types for Fog.
//!
//! Every error raised while planning or carving a layout is a
//! [`ConfigError`]: a bad configuration cannot correct itself, so these are
//! fatal at startup and are returned to the caller instead of producing a
//! zero-capacity layout. [`Error`] wraps them together with the I/O and
//! parsing failures that can occur while loading a descriptor.

use thiserror::Error;

/// A layout configuration that cannot be planned or carved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A descriptor field or planning parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The memory budget cannot hold a single record per attribute buffer,
    /// or a single vertex per processing unit.
    #[error(
        "insufficient memory: a budget of {budget_bytes} bytes cannot hold \
         {record_size}-byte attribute records for every processing unit"
    )]
    InsufficientMemory {
        /// The configured memory budget in bytes.
        budget_bytes: u64,
        /// Size of one attribute record in bytes.
        record_size: u64,
    },

    /// The supplied memory region is smaller than the carved buffers need.
    #[error("memory region too small: {required_bytes} bytes required, {available_bytes} available")]
    RegionTooSmall {
        /// Bytes needed to hold every carved buffer.
        required_bytes: u64,
        /// Bytes actually supplied.
        available_bytes: u64,
    },
}

impl ConfigError {
    /// Creates an [`ConfigError::InvalidConfiguration`] from a message.
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        ConfigError::InvalidConfiguration(msg.into())
    }
}

/// The main error type for Fog operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The layout configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// I/O errors while reading configuration files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Result type alias for Fog operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::RegionTooSmall {
            required_bytes: 1024,
            available_bytes: 512,
        };
        assert_eq!(
            err.to_string(),
            "memory region too small: 1024 bytes required, 512 available"
        );

        let err = ConfigError::invalid("processor_count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: processor_count must be at least 1"
        );
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: Error = ConfigError::InsufficientMemory {
            budget_bytes: 16,
            record_size: 1024,
        }
        .into();
        assert!(matches!(
            err,
            Error::Config(ConfigError::InsufficientMemory { .. })
        ));
        assert!(err.to_string().starts_with("insufficient memory"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
