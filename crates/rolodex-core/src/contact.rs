//! Contact types — the single entity held by the store.
//!
//! A [`Contact`] is created from a validated [`NewContact`], mutated in place
//! by a [`ContactPatch`], and removed by id. Only the `id` is immutable.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned contact identifier.
pub type ContactId = u64;

/// Category given to contacts created without one.
pub const DEFAULT_CATEGORY: &str = "General";

// ─── Contact ─────────────────────────────────────────────────────────────────

/// A stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
  pub id:       ContactId,
  pub name:     String,
  pub phone:    String,
  pub email:    String,
  pub category: String,
}

impl Contact {
  /// Build the record for a freshly-assigned `id`.
  pub fn from_new(id: ContactId, input: NewContact) -> Self {
    Self {
      id,
      name: input.name,
      phone: input.phone,
      email: input.email,
      category: input.category,
    }
  }

  /// Overwrite the fields present in `patch`; everything else is retained.
  pub fn apply(&mut self, patch: ContactPatch) {
    let ContactPatch {
      name,
      phone,
      email,
      category,
    } = patch;

    overwrite(&mut self.name, name);
    overwrite(&mut self.phone, phone);
    overwrite(&mut self.email, email);
    overwrite(&mut self.category, category);
  }
}

fn overwrite(field: &mut String, value: Option<String>) {
  if let Some(v) = value.filter(|v| !is_blank(v)) {
    *field = v;
  }
}

fn is_blank(s: &str) -> bool { s.trim().is_empty() }

// ─── NewContact ──────────────────────────────────────────────────────────────

/// A creation request that has passed validation.
///
/// The fields are private so the only way in is [`NewContact::new`]; a
/// `NewContact` in hand always has non-blank name, phone and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContact {
  name:     String,
  phone:    String,
  email:    String,
  category: String,
}

impl NewContact {
  /// Validate raw input. Missing or blank `name`, `phone` or `email` is an
  /// [`Error::MissingRequiredFields`]; a missing or blank `category` becomes
  /// [`DEFAULT_CATEGORY`].
  pub fn new(
    name: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    category: Option<String>,
  ) -> Result<Self> {
    let mut missing = Vec::new();
    let mut require = |field: &'static str, value: Option<String>| {
      match value.filter(|v| !is_blank(v)) {
        Some(v) => v,
        None => {
          missing.push(field);
          String::new()
        }
      }
    };

    let name = require("name", name);
    let phone = require("phone", phone);
    let email = require("email", email);

    if !missing.is_empty() {
      return Err(Error::MissingRequiredFields { missing });
    }

    Ok(Self {
      name,
      phone,
      email,
      category: category
        .filter(|c| !is_blank(c))
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
    })
  }

  pub fn name(&self) -> &str { &self.name }

  pub fn phone(&self) -> &str { &self.phone }

  pub fn email(&self) -> &str { &self.email }

  pub fn category(&self) -> &str { &self.category }
}

// ─── ContactPatch ────────────────────────────────────────────────────────────

/// A partial update. `None` and blank strings both mean "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub phone:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email:    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
}

// ─── Categories ──────────────────────────────────────────────────────────────

/// Each distinct category of `contacts` exactly once, in first-seen order.
pub fn distinct_categories<'a>(
  contacts: impl IntoIterator<Item = &'a Contact>,
) -> Vec<String> {
  let mut seen: Vec<String> = Vec::new();
  for c in contacts {
    if !seen.iter().any(|s| *s == c.category) {
      seen.push(c.category.clone());
    }
  }
  seen
}

// ─── Email shape ─────────────────────────────────────────────────────────────

/// Loose `local@domain.tld` check used by clients before submitting.
///
/// No whitespace, exactly one `@`, and a `.` in the domain part with
/// text on either side of it. The server does not enforce this.
///
/// ```
/// use rolodex_core::contact::is_plausible_email;
///
/// assert!(is_plausible_email("jane.smith@example.com"));
/// assert!(!is_plausible_email("jane.smith@localhost"));
/// ```
pub fn is_plausible_email(s: &str) -> bool {
  if s.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = s.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  domain
    .char_indices()
    .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
