//! Error types for `rolodex-core`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// One or more of name, phone, email was absent or blank.
  #[error("Name, phone, and email are required")]
  MissingRequiredFields { missing: Vec<&'static str> },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
