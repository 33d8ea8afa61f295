//! Application state machine and event dispatcher.
//!
//! The contact list is only ever replaced wholesale by a fetch from the
//! server; every mutation is followed by a refetch.

use std::{
  collections::BTreeMap,
  sync::Arc,
  time::{Duration, Instant},
};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use rolodex_core::contact::{Contact, ContactId, distinct_categories};

use crate::{
  client::ApiClient,
  form::{ContactForm, FormField},
};

/// How long a success message stays on screen.
pub const MESSAGE_TTL: Duration = Duration::from_secs(3);

/// Label of the category tab that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
  /// Focus on the contact list; right pane previews the contact under the
  /// cursor.
  ContactList,
  /// The add / edit form has keyboard focus.
  ContactForm,
  /// Waiting for y/n on deleting a contact.
  ConfirmDelete(ContactId),
}

// ─── Status message ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
  Success,
  Error,
}

#[derive(Debug, Clone)]
pub struct Message {
  pub kind:     MessageKind,
  pub text:     String,
  pub shown_at: Instant,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// The last list fetched from the server.
  pub contacts: Vec<Contact>,

  /// `None` shows every category.
  pub selected_category: Option<String>,

  /// Current fuzzy-filter string (only editable when `filter_active`).
  pub filter: String,

  /// Whether the user is typing a filter query.
  pub filter_active: bool,

  /// Cursor position within [`App::visible_contacts`].
  pub list_cursor: usize,

  /// Add / edit form; meaningful while `screen` is `ContactForm`.
  pub form: ContactForm,

  /// True from [`App::request_reload`] until the fetch completes. The event
  /// loop draws a frame in this state before fetching.
  pub loading: bool,

  /// Transient message shown in the status bar.
  pub message: Option<Message>,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] with an empty contact list.
  pub fn new(client: ApiClient) -> Self {
    Self {
      screen: Screen::ContactList,
      contacts: Vec::new(),
      selected_category: None,
      filter: String::new(),
      filter_active: false,
      list_cursor: 0,
      form: ContactForm::default(),
      loading: false,
      message: None,
      client: Arc::new(client),
    }
  }

  // ── Messages ──────────────────────────────────────────────────────────────

  fn set_message(&mut self, kind: MessageKind, text: impl Into<String>) {
    self.message = Some(Message {
      kind,
      text: text.into(),
      shown_at: Instant::now(),
    });
  }

  /// Drop a success message once it has been visible for [`MESSAGE_TTL`].
  /// Errors stay until something replaces them.
  pub fn expire_message(&mut self, now: Instant) {
    let expired = self.message.as_ref().is_some_and(|m| {
      m.kind == MessageKind::Success && now.duration_since(m.shown_at) >= MESSAGE_TTL
    });
    if expired {
      self.message = None;
    }
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Mark the list stale. The event loop draws the loading state, then
  /// calls [`App::load_contacts`].
  pub fn request_reload(&mut self) { self.loading = true; }

  /// Replace the local list with the server's. On failure the previous list
  /// is kept and an error message is shown.
  pub async fn load_contacts(&mut self) {
    self.loading = true;
    match self.client.list_contacts().await {
      Ok(contacts) => {
        self.contacts = contacts;
        if self
          .selected_category
          .as_ref()
          .is_some_and(|c| !self.contacts.iter().any(|x| &x.category == c))
        {
          self.selected_category = None;
        }
        self.clamp_cursor();
      }
      Err(e) => {
        tracing::warn!(error = %e, "fetching contacts failed");
        self.set_message(MessageKind::Error, "Error fetching contacts");
      }
    }
    self.loading = false;
  }

  // ── Derived views ─────────────────────────────────────────────────────────

  /// `All` followed by each category present in the list.
  pub fn category_tabs(&self) -> Vec<String> {
    let mut tabs = vec![ALL_CATEGORIES.to_string()];
    tabs.extend(distinct_categories(&self.contacts));
    tabs
  }

  /// Index into [`App::category_tabs`] of the current selection.
  pub fn selected_tab(&self) -> usize {
    match &self.selected_category {
      None => 0,
      Some(c) => self
        .category_tabs()
        .iter()
        .position(|t| t == c)
        .unwrap_or(0),
    }
  }

  /// Contacts passing the category and text filters, in list order.
  pub fn filtered_contacts(&self) -> Vec<&Contact> {
    let matcher = SkimMatcherV2::default();
    self
      .contacts
      .iter()
      .filter(|c| {
        self
          .selected_category
          .as_ref()
          .is_none_or(|cat| &c.category == cat)
      })
      .filter(|c| {
        self.filter.is_empty()
          || [&c.name, &c.phone, &c.email]
            .iter()
            .any(|field| matcher.fuzzy_match(field, &self.filter).is_some())
      })
      .collect()
  }

  /// Filtered contacts keyed by category, categories sorted by name.
  pub fn grouped_contacts(&self) -> BTreeMap<&str, Vec<&Contact>> {
    let mut groups: BTreeMap<&str, Vec<&Contact>> = BTreeMap::new();
    for c in self.filtered_contacts() {
      groups.entry(c.category.as_str()).or_default().push(c);
    }
    groups
  }

  /// Contacts in on-screen order: grouped by category under `All`, a flat
  /// list otherwise.
  pub fn visible_contacts(&self) -> Vec<&Contact> {
    if self.selected_category.is_none() {
      self.grouped_contacts().into_values().flatten().collect()
    } else {
      self.filtered_contacts()
    }
  }

  /// The contact under the list cursor, if any.
  pub fn cursor_contact(&self) -> Option<&Contact> {
    self.visible_contacts().get(self.list_cursor).copied()
  }

  fn clamp_cursor(&mut self) {
    let len = self.visible_contacts().len();
    self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
  }

  /// Move the category selection by one tab, wrapping.
  pub fn cycle_category(&mut self, forward: bool) {
    let tabs = self.category_tabs();
    let n = tabs.len();
    let current = self.selected_tab();
    let next = if forward { (current + 1) % n } else { (current + n - 1) % n };
    self.selected_category = (next != 0).then(|| tabs[next].clone());
    self.list_cursor = 0;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.filter_active {
      self.handle_filter_key(key);
      return true;
    }

    match self.screen {
      Screen::ContactList => self.handle_list_key(key).await,
      Screen::ContactForm => {
        self.handle_form_key(key).await;
        true
      }
      Screen::ConfirmDelete(id) => {
        self.handle_confirm_key(key, id).await;
        true
      }
    }
  }

  fn handle_filter_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.filter_active = false;
        self.filter.clear();
      }
      KeyCode::Enter => self.filter_active = false,
      KeyCode::Backspace => {
        self.filter.pop();
      }
      KeyCode::Char(c) => self.filter.push(c),
      _ => return,
    }
    self.list_cursor = 0;
  }

  async fn handle_list_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      // Quit
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        let len = self.visible_contacts().len();
        if self.list_cursor + 1 < len {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.list_cursor = self.list_cursor.saturating_sub(1);
      }

      // Category filter
      KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.cycle_category(true),
      KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.cycle_category(false),

      // Text filter
      KeyCode::Char('/') => {
        self.filter_active = true;
        self.filter.clear();
        self.list_cursor = 0;
      }
      KeyCode::Esc if !self.filter.is_empty() => {
        self.filter.clear();
        self.list_cursor = 0;
      }

      // Mutations
      KeyCode::Char('a') => self.open_new_form(),
      KeyCode::Enter | KeyCode::Char('e') => self.open_edit_form(),
      KeyCode::Char('d') | KeyCode::Delete => {
        if let Some(id) = self.cursor_contact().map(|c| c.id) {
          self.screen = Screen::ConfirmDelete(id);
        }
      }

      KeyCode::Char('r') => self.request_reload(),

      _ => {}
    }
    true
  }

  async fn handle_form_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => self.cancel_form(),
      KeyCode::Enter => self.submit_form().await,
      KeyCode::Tab | KeyCode::Down => self.form.focus = self.form.focus.next(),
      KeyCode::BackTab | KeyCode::Up => self.form.focus = self.form.focus.prev(),
      KeyCode::Left if self.form.focus == FormField::Category => self.form.cycle_category(false),
      KeyCode::Right if self.form.focus == FormField::Category => self.form.cycle_category(true),
      KeyCode::Backspace => self.form.backspace(),
      KeyCode::Char(c) => self.form.insert_char(c),
      _ => {}
    }
  }

  async fn handle_confirm_key(&mut self, key: KeyEvent, id: ContactId) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') => {
        self.screen = Screen::ContactList;
        self.delete_contact(id).await;
      }
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.screen = Screen::ContactList;
      }
      _ => {}
    }
  }

  // ── Form lifecycle ────────────────────────────────────────────────────────

  pub fn open_new_form(&mut self) {
    self.form = ContactForm::default();
    self.screen = Screen::ContactForm;
  }

  pub fn open_edit_form(&mut self) {
    if let Some(form) = self.cursor_contact().map(ContactForm::edit) {
      self.form = form;
      self.screen = Screen::ContactForm;
    }
  }

  pub fn cancel_form(&mut self) {
    self.form = ContactForm::default();
    self.screen = Screen::ContactList;
  }

  /// Validate locally, send the create or update, then request a refetch.
  /// The form stays open if validation or the request fails.
  pub async fn submit_form(&mut self) {
    if let Err(msg) = self.form.validate() {
      self.set_message(MessageKind::Error, msg);
      return;
    }

    let result = match self.form.editing {
      Some(id) => self
        .client
        .update_contact(id, &self.form.to_patch())
        .await
        .map(|_| "Contact updated successfully!"),
      None => match self.form.to_new_contact() {
        Ok(input) => self
          .client
          .create_contact(&input)
          .await
          .map(|_| "Contact added successfully!"),
        Err(e) => Err(e.into()),
      },
    };

    match result {
      Ok(msg) => {
        self.set_message(MessageKind::Success, msg);
        self.cancel_form();
        self.request_reload();
      }
      Err(e) => {
        tracing::warn!(error = %e, "saving contact failed");
        self.set_message(MessageKind::Error, "Error saving contact");
      }
    }
  }

  /// Delete `id` on the server, then request a refetch.
  pub async fn delete_contact(&mut self, id: ContactId) {
    match self.client.delete_contact(id).await {
      Ok(()) => {
        self.set_message(MessageKind::Success, "Contact deleted successfully!");
        self.request_reload();
      }
      Err(e) => {
        tracing::warn!(error = %e, id, "deleting contact failed");
        self.set_message(MessageKind::Error, "Error deleting contact");
      }
    }
  }
}
