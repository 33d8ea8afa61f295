//! HTTP server assembly for Rolodex.
//!
//! Mounts the JSON API from `rolodex-api` under `/api`, adds request tracing
//! and CORS, and owns the runtime configuration.

use std::{path::Path, sync::Arc};

use axum::{Router, routing::get};
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use rolodex_core::store::ContactStore;
use rolodex_store_memory::MemoryStore;
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROLODEX_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:             String,
  #[serde(default = "default_port")]
  pub port:             u16,
  /// Start with the three demo contacts instead of an empty store.
  #[serde(default = "default_seed_sample_data")]
  pub seed_sample_data: bool,
}

fn default_host() -> String { "127.0.0.1".to_string() }

fn default_port() -> u16 { 3001 }

fn default_seed_sample_data() -> bool { true }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             default_host(),
      port:             default_port(),
      seed_sample_data: default_seed_sample_data(),
    }
  }
}

impl ServerConfig {
  /// Read `path` (if it exists), then let `ROLODEX_*` variables override it.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_builder(
      Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("ROLODEX").try_parsing(true)),
    )
  }

  fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
    builder.build()?.try_deserialize()
  }

  /// `host:port`, suitable for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// The store this configuration asks for.
  pub fn store(&self) -> rolodex_store_memory::Result<MemoryStore> {
    if self.seed_sample_data {
      MemoryStore::with_sample_contacts()
    } else {
      Ok(MemoryStore::new())
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: the API under `/api`, wrapped in HTTP
/// tracing and a permissive CORS policy.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: ContactStore + 'static,
{
  Router::new()
    // Nesting only matches `/api` itself; serve the index with the slash too.
    .route("/api/", get(rolodex_api::index))
    .nest("/api", rolodex_api::api_router(store))
    .layer(TraceLayer::new_for_http())
    .layer(CorsLayer::permissive())
}
