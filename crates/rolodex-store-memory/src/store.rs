//! [`MemoryStore`] — the in-memory implementation of [`ContactStore`].

use std::{collections::HashSet, sync::Arc};

use tokio::sync::Mutex;

use rolodex_core::{
  contact::{Contact, ContactId, ContactPatch, NewContact, distinct_categories},
  store::ContactStore,
};

use crate::{Error, Result, sample::sample_contacts};

// ─── State ───────────────────────────────────────────────────────────────────

struct Inner {
  /// Insertion order is the list order.
  contacts: Vec<Contact>,
  /// Always greater than every id ever assigned or pre-loaded.
  next_id:  ContactId,
}

impl Inner {
  fn position(&self, id: ContactId) -> Option<usize> {
    self.contacts.iter().position(|c| c.id == id)
  }
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A contact store held entirely in process memory.
///
/// Cloning is cheap and clones share state. Every operation holds the lock
/// for its whole duration, so operations are atomic with respect to each
/// other.
#[derive(Clone)]
pub struct MemoryStore {
  inner: Arc<Mutex<Inner>>,
}

impl Default for MemoryStore {
  fn default() -> Self { Self::new() }
}

impl MemoryStore {
  /// An empty store; the first contact created gets id 1.
  pub fn new() -> Self {
    Self::from_inner(Inner {
      contacts: Vec::new(),
      next_id:  1,
    })
  }

  /// A store pre-loaded with `contacts`, kept in the given order. New ids
  /// start above the largest pre-loaded id.
  pub fn with_contacts(contacts: Vec<Contact>) -> Result<Self> {
    let mut ids = HashSet::with_capacity(contacts.len());
    for c in &contacts {
      if !ids.insert(c.id) {
        return Err(Error::DuplicateId(c.id));
      }
    }

    let next_id = match contacts.iter().map(|c| c.id).max() {
      Some(max) => max.checked_add(1).ok_or(Error::IdSpaceExhausted)?,
      None => 1,
    };

    Ok(Self::from_inner(Inner { contacts, next_id }))
  }

  /// A store holding the three demo contacts (ids 1–3).
  pub fn with_sample_contacts() -> Result<Self> { Self::with_contacts(sample_contacts()) }

  fn from_inner(inner: Inner) -> Self {
    Self {
      inner: Arc::new(Mutex::new(inner)),
    }
  }
}

impl ContactStore for MemoryStore {
  type Error = Error;

  async fn list_contacts(&self) -> Result<Vec<Contact>> {
    Ok(self.inner.lock().await.contacts.clone())
  }

  async fn get_contact(&self, id: ContactId) -> Result<Option<Contact>> {
    let inner = self.inner.lock().await;
    Ok(inner.contacts.iter().find(|c| c.id == id).cloned())
  }

  async fn create_contact(&self, input: NewContact) -> Result<Contact> {
    let mut inner = self.inner.lock().await;

    let id = inner.next_id;
    inner.next_id = id.checked_add(1).ok_or(Error::IdSpaceExhausted)?;

    let contact = Contact::from_new(id, input);
    inner.contacts.push(contact.clone());
    tracing::debug!(id, category = %contact.category, "contact created");

    Ok(contact)
  }

  async fn update_contact(
    &self,
    id: ContactId,
    patch: ContactPatch,
  ) -> Result<Option<Contact>> {
    let mut inner = self.inner.lock().await;
    let Some(idx) = inner.position(id) else {
      return Ok(None);
    };

    let contact = &mut inner.contacts[idx];
    contact.apply(patch);
    tracing::debug!(id, "contact updated");

    Ok(Some(contact.clone()))
  }

  async fn delete_contact(&self, id: ContactId) -> Result<Option<Contact>> {
    let mut inner = self.inner.lock().await;
    let removed = inner.position(id).map(|idx| inner.contacts.remove(idx));
    if removed.is_some() {
      tracing::debug!(id, remaining = inner.contacts.len(), "contact deleted");
    }
    Ok(removed)
  }

  async fn list_categories(&self) -> Result<Vec<String>> {
    let inner = self.inner.lock().await;
    Ok(distinct_categories(&inner.contacts))
  }
}
