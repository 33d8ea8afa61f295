//! The `ContactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `rolodex-store-memory`).
//! Higher layers (`rolodex-api`, `rolodex-server`) depend on this abstraction,
//! not on any concrete backend.

use std::future::Future;

use crate::contact::{Contact, ContactId, ContactPatch, NewContact};

/// Abstraction over a Rolodex contact store backend.
///
/// "Not found" is reported as `None`, never as an error; `Self::Error` is
/// reserved for failures of the backend itself.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait ContactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Every contact, in insertion order.
  fn list_contacts(
    &self,
  ) -> impl Future<Output = Result<Vec<Contact>, Self::Error>> + Send + '_;

  /// Retrieve a contact by id. Returns `None` if not found.
  fn get_contact(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Assign the next id to `input`, append it, and return the stored record.
  fn create_contact(
    &self,
    input: NewContact,
  ) -> impl Future<Output = Result<Contact, Self::Error>> + Send + '_;

  /// Apply `patch` to the contact with `id` and return the updated record.
  /// Returns `None` if not found.
  fn update_contact(
    &self,
    id: ContactId,
    patch: ContactPatch,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Remove the contact with `id` and return it. Returns `None` if not found.
  fn delete_contact(
    &self,
    id: ContactId,
  ) -> impl Future<Output = Result<Option<Contact>, Self::Error>> + Send + '_;

  /// Distinct categories currently in use, each once, in the order they are
  /// first seen when walking the contacts in insertion order.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;
}
