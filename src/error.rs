// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised while reading or writing `settings.toml`.
///
/// The toast lifecycle itself never fails; only the settings file does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The file or its directory could not be read or written.
    Io(String),
    /// The file is not valid TOML or holds out-of-range values.
    Parse(String),
    /// The configuration could not be turned into TOML.
    Serialize(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(message) => write!(f, "settings file I/O failed: {message}"),
            Error::Parse(message) => write!(f, "invalid settings file: {message}"),
            Error::Serialize(message) => write!(f, "cannot encode settings: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Parse(err.message().to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
