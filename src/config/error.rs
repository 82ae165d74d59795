use std::num::ParseIntError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not parse {var}='{value}' as a number: {source}")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("update interval must be greater than zero")]
    ZeroUpdateInterval,
    #[error("'{0}' must not be empty")]
    EmptyValue(&'static str),
    #[error("'{key}' must start with '/', got '{path}'")]
    InvalidPath { key: &'static str, path: String },
    #[error("'{key}' is not a plain host name, got '{host}'")]
    InvalidHost { key: &'static str, host: String },
    #[error("could not form URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("light and humidity sensors are both assigned to pin {0}")]
    PinConflict(u8),
}
