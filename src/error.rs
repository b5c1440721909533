// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only configuration I/O and the profile fetch can fail. Queue operations
//! never return errors: duplicate or stale operations are reported as `false`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Parse error: {0}")]
    Parse(String),
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

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Fetch(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_via_question_mark() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/here.toml")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }

    #[test]
    fn toml_errors_map_to_config() {
        let err: Error = toml::from_str::<toml::Table>("not = [valid")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn json_errors_map_to_parse() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Parse(_)));
    }
}
