//! Add / edit form state.

use rolodex_core::contact::{
  Contact, ContactId, ContactPatch, DEFAULT_CATEGORY, NewContact, is_plausible_email,
};

/// Categories offered by the form's selector.
pub const CATEGORY_OPTIONS: [&str; 5] = ["General", "Work", "Personal", "Family", "Friends"];

pub const MSG_REQUIRED: &str = "Please fill in all required fields";
pub const MSG_BAD_EMAIL: &str = "Please enter a valid email address";

// ─── Field focus ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Name,
  Phone,
  Email,
  Category,
}

impl FormField {
  pub const ALL: [FormField; 4] = [Self::Name, Self::Phone, Self::Email, Self::Category];

  pub fn next(self) -> Self {
    match self {
      Self::Name => Self::Phone,
      Self::Phone => Self::Email,
      Self::Email => Self::Category,
      Self::Category => Self::Name,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      Self::Name => Self::Category,
      Self::Phone => Self::Name,
      Self::Email => Self::Phone,
      Self::Category => Self::Email,
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Self::Name => "Name *",
      Self::Phone => "Phone *",
      Self::Email => "Email *",
      Self::Category => "Category",
    }
  }

  pub fn placeholder(self) -> &'static str {
    match self {
      Self::Name => "John Doe",
      Self::Phone => "+1-234-567-8900",
      Self::Email => "john@example.com",
      Self::Category => "",
    }
  }
}

// ─── Form ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
  pub name:     String,
  pub phone:    String,
  pub email:    String,
  pub category: String,
  /// `Some` when editing an existing contact.
  pub editing:  Option<ContactId>,
  pub focus:    FormField,
}

impl Default for ContactForm {
  fn default() -> Self {
    Self {
      name:     String::new(),
      phone:    String::new(),
      email:    String::new(),
      category: DEFAULT_CATEGORY.to_string(),
      editing:  None,
      focus:    FormField::Name,
    }
  }
}

impl ContactForm {
  /// A form prefilled from `contact`.
  pub fn edit(contact: &Contact) -> Self {
    Self {
      name:     contact.name.clone(),
      phone:    contact.phone.clone(),
      email:    contact.email.clone(),
      category: contact.category.clone(),
      editing:  Some(contact.id),
      focus:    FormField::Name,
    }
  }

  pub fn title(&self) -> &'static str {
    if self.editing.is_some() { "Edit Contact" } else { "New Contact" }
  }

  pub fn submit_label(&self) -> &'static str {
    if self.editing.is_some() { "Update Contact" } else { "Add Contact" }
  }

  pub fn value(&self, field: FormField) -> &str {
    match field {
      FormField::Name => &self.name,
      FormField::Phone => &self.phone,
      FormField::Email => &self.email,
      FormField::Category => &self.category,
    }
  }

  /// The focused field's text, unless it is the category selector.
  fn focused_text_mut(&mut self) -> Option<&mut String> {
    match self.focus {
      FormField::Name => Some(&mut self.name),
      FormField::Phone => Some(&mut self.phone),
      FormField::Email => Some(&mut self.email),
      FormField::Category => None,
    }
  }

  pub fn insert_char(&mut self, c: char) {
    if let Some(text) = self.focused_text_mut() {
      text.push(c);
    }
  }

  pub fn backspace(&mut self) {
    if let Some(text) = self.focused_text_mut() {
      text.pop();
    }
  }

  /// Step through [`CATEGORY_OPTIONS`]. A category not in the list (set by
  /// another client) moves to the first or last option.
  pub fn cycle_category(&mut self, forward: bool) {
    let n = CATEGORY_OPTIONS.len();
    let next = match CATEGORY_OPTIONS.iter().position(|c| *c == self.category) {
      Some(i) if forward => (i + 1) % n,
      Some(i) => (i + n - 1) % n,
      None if forward => 0,
      None => n - 1,
    };
    self.category = CATEGORY_OPTIONS[next].to_string();
  }

  /// Client-side convenience checks; the server validates independently.
  pub fn validate(&self) -> Result<(), &'static str> {
    let blank = |s: &str| s.trim().is_empty();
    if blank(&self.name) || blank(&self.phone) || blank(&self.email) {
      return Err(MSG_REQUIRED);
    }
    if !is_plausible_email(self.email.trim()) {
      return Err(MSG_BAD_EMAIL);
    }
    Ok(())
  }

  pub fn to_new_contact(&self) -> rolodex_core::Result<NewContact> {
    NewContact::new(
      Some(self.name.clone()),
      Some(self.phone.clone()),
      Some(self.email.clone()),
      Some(self.category.clone()),
    )
  }

  /// The whole form as an update body.
  pub fn to_patch(&self) -> ContactPatch {
    ContactPatch {
      name:     Some(self.name.clone()),
      phone:    Some(self.phone.clone()),
      email:    Some(self.email.clone()),
      category: Some(self.category.clone()),
    }
  }
}
