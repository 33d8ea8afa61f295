//! Handler for `GET /categories`.

use std::sync::Arc;

use axum::{Json, extract::State};
use rolodex_core::store::ContactStore;

use crate::error::ApiError;

/// `GET /categories` — each category in use exactly once.
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<Vec<String>>, ApiError>
where
  S: ContactStore,
{
  let categories = store.list_categories().await.map_err(ApiError::store)?;
  Ok(Json(categories))
}
