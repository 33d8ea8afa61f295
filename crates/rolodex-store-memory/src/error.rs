//! Error type for `rolodex-store-memory`.

use rolodex_core::contact::ContactId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  /// Two pre-loaded records share an id.
  #[error("duplicate contact id in seed data: {0}")]
  DuplicateId(ContactId),

  /// The id counter cannot advance any further.
  #[error("contact id space exhausted")]
  IdSpaceExhausted,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
