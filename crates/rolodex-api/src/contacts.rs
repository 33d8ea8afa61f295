//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | All contacts, insertion order |
//! | `GET`    | `/contacts/:id` | 404 if not found |
//! | `POST`   | `/contacts` | Body: [`NewContactBody`]; returns 201 + stored contact |
//! | `PUT`    | `/contacts/:id` | Body: [`ContactPatch`], may be empty; 404 if not found |
//! | `DELETE` | `/contacts/:id` | Returns `{"message":...}`; 404 if not found |
//!
//! An `:id` that is not a number cannot match any contact and yields 404.

use std::sync::Arc;

use axum::{
  Json,
  body::Bytes,
  extract::{
    Path, State,
    rejection::{JsonRejection, PathRejection},
  },
  http::{HeaderMap, StatusCode, header},
  response::IntoResponse,
};
use rolodex_core::{
  contact::{Contact, ContactId, ContactPatch, NewContact},
  store::ContactStore,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::ApiError;

/// Unwrap a path id; anything unparseable is treated as an unknown id.
fn contact_id(path: Result<Path<ContactId>, PathRejection>) -> Result<ContactId, ApiError> {
  path
    .map(|Path(id)| id)
    .map_err(|_| ApiError::contact_not_found())
}

/// Unwrap a JSON body, turning extractor rejections into 400s.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
  body
    .map(|Json(b)| b)
    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// Whether `headers` declare a JSON body (`application/json` or `*/*+json`).
fn is_json(headers: &HeaderMap) -> bool {
  let Some(content_type) = headers
    .get(header::CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
  else {
    return false;
  };
  let essence = content_type
    .split(';')
    .next()
    .unwrap_or_default()
    .trim()
    .to_ascii_lowercase();
  essence == "application/json"
    || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Parse a patch body. A missing, empty, or non-JSON body is an empty patch;
/// only malformed JSON is rejected.
fn patch_body(headers: &HeaderMap, body: &Bytes) -> Result<ContactPatch, ApiError> {
  if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
    return Ok(ContactPatch::default());
  }
  Json::<ContactPatch>::from_bytes(body)
    .map(|Json(patch)| patch)
    .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<Contact>>, ApiError>
where
  S: ContactStore,
{
  let contacts = store.list_contacts().await.map_err(ApiError::store)?;
  Ok(Json(contacts))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /contacts/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = contact_id(path)?;
  let contact = store
    .get_contact(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  Ok(Json(contact))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /contacts`.
///
/// Every field is optional at the wire level so that a missing required field
/// surfaces as a 400 with a readable message rather than a parse failure.
#[derive(Debug, Deserialize)]
pub struct NewContactBody {
  pub name:     Option<String>,
  pub phone:    Option<String>,
  pub email:    Option<String>,
  pub category: Option<String>,
}

impl TryFrom<NewContactBody> for NewContact {
  type Error = rolodex_core::Error;

  fn try_from(b: NewContactBody) -> Result<Self, Self::Error> {
    NewContact::new(b.name, b.phone, b.email, b.category)
  }
}

/// `POST /contacts` — returns 201 + the stored [`Contact`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<NewContactBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let input = NewContact::try_from(json_body(body)?)?;
  let contact = store.create_contact(input).await.map_err(ApiError::store)?;
  tracing::info!(id = contact.id, "created contact");
  Ok((StatusCode::CREATED, Json(contact)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/:id` — body is a partial [`Contact`]; absent or blank fields
/// keep their current value, and any `id` in the body is ignored. A request
/// without a JSON body changes nothing.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<ContactId>, PathRejection>,
  headers: HeaderMap,
  body: Bytes,
) -> Result<Json<Contact>, ApiError>
where
  S: ContactStore,
{
  let id = contact_id(path)?;
  let patch = patch_body(&headers, &body)?;
  let contact = store
    .update_contact(id, patch)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "updated contact");
  Ok(Json(contact))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/:id` — `{"message":"Contact deleted successfully"}`.
pub async fn delete<S>(
  State(store): State<Arc<S>>,
  path: Result<Path<ContactId>, PathRejection>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let id = contact_id(path)?;
  store
    .delete_contact(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(ApiError::contact_not_found)?;
  tracing::info!(id, "deleted contact");
  Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
