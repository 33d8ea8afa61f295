//! In-memory backend for the Rolodex contact store.
//!
//! State lives for the lifetime of the process; nothing is written to disk.

mod sample;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::MemoryStore;

#[cfg(test)]
mod tests;
