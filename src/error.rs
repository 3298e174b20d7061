// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use thiserror::Error as ThisError;

#[derive(Debug, Clone, ThisError)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Markup Error: {0}")]
    Markup(String),
    #[error("Load Error: {0}")]
    Load(#[from] LoadError),
}

/// Failure to fetch or parse the translation table.
///
/// The engine never surfaces this to its callers: a failed load leaves the
/// document untranslated but usable.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum LoadError {
    /// The resource could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// The payload is not a `{ locale: { key: string } }` mapping.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The resource does not exist in the source.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The configured load timeout elapsed first.
    #[error("Timed out after {0:?}")]
    TimedOut(Duration),
}

/// A locale code outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Unsupported locale: {0:?}")]
pub struct InvalidLocale(pub String);

/// Persistent storage could not be read or written.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("Storage unavailable: {0}")]
pub struct StorageError(pub String);

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Markup(err.to_string())
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn load_error_wraps_into_crate_error() {
        let err: Error = LoadError::NotFound("translations.json".into()).into();
        assert_eq!(
            format!("{}", err),
            "Load Error: Resource not found: translations.json"
        );
    }

    #[test]
    fn json_error_becomes_parse_variant() {
        let json_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: LoadError = json_error.into();
        assert!(matches!(err, LoadError::Parse(_)));
    }

    #[test]
    fn invalid_locale_quotes_the_rejected_code() {
        let err = InvalidLocale("fr".into());
        assert_eq!(format!("{}", err), "Unsupported locale: \"fr\"");
    }
}
