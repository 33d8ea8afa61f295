//! Live-server fixtures for client and app tests.

use std::sync::Arc;

use rolodex_store_memory::MemoryStore;
use tokio::net::TcpListener;

/// Serve the full API, seeded with the demo contacts, on an ephemeral port.
/// Returns the base URL.
pub(crate) async fn spawn_server() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  let app = rolodex_server::router(Arc::new(MemoryStore::with_sample_contacts().unwrap()));
  tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
  format!("http://{addr}")
}

/// A base URL on which nothing is listening.
pub(crate) async fn unreachable_url() -> String {
  let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  drop(listener);
  format!("http://{addr}")
}
