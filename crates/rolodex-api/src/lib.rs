//! JSON REST API for Rolodex.
//!
//! Exposes an axum [`Router`] backed by any [`rolodex_core::store::ContactStore`].
//! Tracing, CORS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", rolodex_api::api_router(store.clone()))
//! ```

pub mod categories;
pub mod contacts;
pub mod error;

use std::sync::Arc;

use axum::{Json, Router, routing::get};
use rolodex_core::store::ContactStore;
use serde_json::{Value, json};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: ContactStore + 'static,
{
  Router::new()
    .route("/", get(index))
    // Contacts
    .route("/contacts", get(contacts::list::<S>).post(contacts::create::<S>))
    .route(
      "/contacts/{id}",
      get(contacts::get_one::<S>)
        .put(contacts::update::<S>)
        .delete(contacts::delete::<S>),
    )
    // Categories
    .route("/categories", get(categories::list::<S>))
    .with_state(store)
}

/// `GET /` — identifies the service.
pub async fn index() -> Json<Value> { Json(json!({ "message": "Contact Manager API" })) }

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rolodex_store_memory::MemoryStore;
  use tower::ServiceExt as _;

  fn app(store: MemoryStore) -> Router {
    Router::new().nest("/api", api_router(Arc::new(store)))
  }

  async fn send(
    store: &MemoryStore,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
      Some(b) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(b.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
      Value::Null
    } else {
      serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
  }

  async fn count(store: &MemoryStore) -> usize {
    let (_, body) = send(store, "GET", "/api/contacts", None).await;
    body.as_array().unwrap().len()
  }

  // ── Index ───────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn index_returns_message() {
    let store = MemoryStore::new();
    let (status, body) = send(&store, "GET", "/api", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Contact Manager API" }));
  }

  // ── List / get ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_returns_contacts_in_insertion_order() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(&store, "GET", "/api/contacts", None).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<u64> = body
      .as_array()
      .unwrap()
      .iter()
      .map(|c| c["id"].as_u64().unwrap())
      .collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(body[0]["email"], "john.doe@example.com");
  }

  #[tokio::test]
  async fn get_existing_contact() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(&store, "GET", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({
      "id": 2,
      "name": "Jane Smith",
      "phone": "+1-234-567-8901",
      "email": "jane.smith@example.com",
      "category": "Personal",
    }));
  }

  #[tokio::test]
  async fn get_unknown_id_returns_404() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(&store, "GET", "/api/contacts/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact not found");
  }

  #[tokio::test]
  async fn non_numeric_id_returns_404() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, _) = send(&store, "GET", "/api/contacts/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&store, "DELETE", "/api/contacts/-1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Create ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_assigns_id_and_default_category() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(
      &store,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "A", "phone": "1", "email": "a@a.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 4);
    assert_eq!(body["category"], "General");

    let (status, fetched) = send(&store, "GET", "/api/contacts/4", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
  }

  #[tokio::test]
  async fn create_missing_required_field_returns_400_and_changes_nothing() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    for body in [
      json!({ "phone": "1", "email": "a@a.com" }),
      json!({ "name": "A", "email": "a@a.com" }),
      json!({ "name": "A", "phone": "1", "email": "" }),
    ] {
      let (status, resp) = send(&store, "POST", "/api/contacts", Some(body)).await;
      assert_eq!(status, StatusCode::BAD_REQUEST);
      assert_eq!(resp["message"], "Name, phone, and email are required");
    }
    assert_eq!(count(&store).await, 3);
  }

  #[tokio::test]
  async fn create_with_malformed_body_returns_400() {
    let store = MemoryStore::new();
    let req = Request::builder()
      .method("POST")
      .uri("/api/contacts")
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from("{not json"))
      .unwrap();
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count(&store).await, 0);
  }

  // ── Update ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_preserves_fields_not_in_body() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(
      &store,
      "PUT",
      "/api/contacts/1",
      Some(json!({ "id": 77, "phone": "555-0199" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({
      "id": 1,
      "name": "John Doe",
      "phone": "555-0199",
      "email": "john.doe@example.com",
      "category": "Work",
    }));
    let (_, fetched) = send(&store, "GET", "/api/contacts/1", None).await;
    assert_eq!(fetched, body);
  }

  #[tokio::test]
  async fn update_unknown_id_returns_404() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) =
      send(&store, "PUT", "/api/contacts/99", Some(json!({ "name": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact not found");
  }

  #[tokio::test]
  async fn update_without_body_changes_nothing_or_404s() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (_, before) = send(&store, "GET", "/api/contacts/1", None).await;

    let (status, body) = send(&store, "PUT", "/api/contacts/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, before);

    let (status, body) = send(&store, "PUT", "/api/contacts/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Contact not found");
  }

  #[tokio::test]
  async fn update_with_empty_json_body_is_an_empty_patch() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    for (uri, expected) in [
      ("/api/contacts/2", StatusCode::OK),
      ("/api/contacts/99", StatusCode::NOT_FOUND),
    ] {
      let req = Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
      let resp = app(store.clone()).oneshot(req).await.unwrap();
      assert_eq!(resp.status(), expected, "{uri}");
    }
    let (_, jane) = send(&store, "GET", "/api/contacts/2", None).await;
    assert_eq!(jane["name"], "Jane Smith");
  }

  #[tokio::test]
  async fn update_with_malformed_json_returns_400() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let req = Request::builder()
      .method("PUT")
      .uri("/api/contacts/1")
      .header(header::CONTENT_TYPE, "application/json; charset=utf-8")
      .body(Body::from("{\"name\":"))
      .unwrap();
    let resp = app(store.clone()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let (_, john) = send(&store, "GET", "/api/contacts/1", None).await;
    assert_eq!(john["name"], "John Doe");
  }

  // ── Delete ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_then_get_returns_404() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    let (status, body) = send(&store, "DELETE", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Contact deleted successfully");
    assert_eq!(count(&store).await, 2);

    let (status, _) = send(&store, "GET", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(&store, "DELETE", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Categories ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn categories_are_distinct() {
    let store = MemoryStore::with_sample_contacts().unwrap();
    send(
      &store,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "C", "phone": "2", "email": "c@c.com", "category": "Work" })),
    )
    .await;
    let (status, body) = send(&store, "GET", "/api/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(["Work", "Personal"]));
  }

  // ── End to end ──────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn create_delete_walkthrough() {
    let store = MemoryStore::with_sample_contacts().unwrap();

    let (status, created) = send(
      &store,
      "POST",
      "/api/contacts",
      Some(json!({ "name": "A", "phone": "1", "email": "a@a.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 4);
    assert_eq!(created["category"], "General");
    assert_eq!(count(&store).await, 4);

    let (status, _) = send(&store, "DELETE", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&store).await, 3);

    let (status, _) = send(&store, "GET", "/api/contacts/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }
}
