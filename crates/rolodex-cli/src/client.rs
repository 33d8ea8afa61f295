//! Async HTTP client wrapping the Rolodex JSON API.

use anyhow::{Context, Result, anyhow};
use reqwest::{Client, Response, StatusCode};
use rolodex_core::contact::{Contact, ContactId, ContactPatch, NewContact};
use serde::Deserialize;
use std::time::Duration;

/// Connection settings for the Rolodex API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  /// Server origin, e.g. `http://localhost:3001`. `/api` is appended.
  pub base_url: String,
}

/// Async HTTP client for the Rolodex JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
}

/// Shape of the API's error bodies.
#[derive(Deserialize)]
struct ErrorBody {
  message: String,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config })
  }

  pub fn base_url(&self) -> &str { &self.config.base_url }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  /// Pass `resp` through if it has status `expected`; otherwise turn it into
  /// an error carrying the server's message.
  async fn expect(resp: Response, expected: StatusCode, what: &str) -> Result<Response> {
    let status = resp.status();
    if status == expected {
      return Ok(resp);
    }
    let message = resp
      .json::<ErrorBody>()
      .await
      .map(|b| b.message)
      .unwrap_or_default();
    Err(anyhow!("{what} → {status} {message}"))
  }

  // ── Contacts ──────────────────────────────────────────────────────────────

  /// `GET /api/contacts`
  pub async fn list_contacts(&self) -> Result<Vec<Contact>> {
    let resp = self
      .client
      .get(self.url("/contacts"))
      .send()
      .await
      .context("GET /contacts failed")?;

    Self::expect(resp, StatusCode::OK, "GET /contacts")
      .await?
      .json()
      .await
      .context("deserialising contacts")
  }

  /// `POST /api/contacts`
  pub async fn create_contact(&self, input: &NewContact) -> Result<Contact> {
    let resp = self
      .client
      .post(self.url("/contacts"))
      .json(input)
      .send()
      .await
      .context("POST /contacts failed")?;

    Self::expect(resp, StatusCode::CREATED, "POST /contacts")
      .await?
      .json()
      .await
      .context("deserialising created contact")
  }

  /// `PUT /api/contacts/<id>`
  pub async fn update_contact(&self, id: ContactId, patch: &ContactPatch) -> Result<Contact> {
    let what = format!("PUT /contacts/{id}");
    let resp = self
      .client
      .put(self.url(&format!("/contacts/{id}")))
      .json(patch)
      .send()
      .await
      .with_context(|| format!("{what} failed"))?;

    Self::expect(resp, StatusCode::OK, &what)
      .await?
      .json()
      .await
      .context("deserialising updated contact")
  }

  /// `DELETE /api/contacts/<id>`
  pub async fn delete_contact(&self, id: ContactId) -> Result<()> {
    let what = format!("DELETE /contacts/{id}");
    let resp = self
      .client
      .delete(self.url(&format!("/contacts/{id}")))
      .send()
      .await
      .with_context(|| format!("{what} failed"))?;

    Self::expect(resp, StatusCode::OK, &what).await?;
    Ok(())
  }
}
