//! HTTP adapter for the remote lens service.
//!
//! Speaks the service's JSON wire contract:
//! - `POST {base}/api/v1/session` → `{"sessionId": "..."}`
//! - `POST {base}/api/v1/process` → `{"outputs": {lens: text}}`
//! - `POST {base}/api/v1/synthesize` → `{"outputs": {...}, "synthesis": "..."}`
//!
//! The session token rides in an `x-session-id` header (omitted when no
//! token is attached). Any transport failure or non-2xx status maps to
//! `RemoteError::Unavailable`; a 2xx body that fails to parse or names an
//! unrecognized lens maps to `RemoteError::Malformed`.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use trivium_core::error::RemoteError;
use trivium_core::lens::LensKind;
use trivium_core::service::LensService;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote lens service.
pub struct RemoteClient {
    base_url: String,
    session: Option<String>,
    client: reqwest::Client,
}

impl RemoteClient {
    /// Create a client for the given base URL (trailing slash stripped).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout. A timeout that fires
    /// surfaces as `RemoteError::Unavailable` like any other transport
    /// failure.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: None,
            client,
        }
    }

    /// Attach a session token to all subsequent requests.
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session = Some(token.into());
        self
    }

    /// The currently attached session token, if any.
    pub fn session(&self) -> Option<&str> {
        self.session.as_deref()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        let mut builder = self.client.post(url);
        if let Some(token) = &self.session {
            builder = builder.header("x-session-id", token);
        }
        builder
    }

    async fn read_body<T: serde::de::DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, RemoteError> {
        let status = response.status();
        if !status.is_success() {
            warn!(endpoint, status = status.as_u16(), "Remote service returned an error status");
            return Err(RemoteError::Unavailable(format!(
                "{endpoint} returned status {status}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            RemoteError::Malformed(format!("failed to parse {endpoint} response: {e}"))
        })
    }
}

#[async_trait]
impl LensService for RemoteClient {
    async fn open_session(&self) -> Result<String, RemoteError> {
        debug!(base_url = %self.base_url, "Requesting new session");

        let response = self
            .post("/api/v1/session")
            .send()
            .await
            .map_err(|e| RemoteError::Unavailable(e.to_string()))?;

        let body: SessionResponse = Self::read_body("session", response).await?;
        Ok(body.session_id)
    }

    async fn process(
        &self,
        text: &str,
        lenses: &[LensKind],
    ) -> Result<BTreeMap<LensKind, String>, RemoteError> {
        let body = serde_json::json!({
            "text": text,
            "lenses": lens_names(lenses),
        });

        debug!(lenses = lenses.len(), "Sending process request");

        let response = self
            .post("/api/v1/process")
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Unavailable(e.to_string()))?;

        let body: ProcessResponse = Self::read_body("process", response).await?;
        convert_outputs(body.outputs)
    }

    async fn process_and_synthesize(
        &self,
        text: &str,
        lenses: &[LensKind],
        blend: f64,
    ) -> Result<(BTreeMap<LensKind, String>, String), RemoteError> {
        let body = serde_json::json!({
            "text": text,
            "lenses": lens_names(lenses),
            "blend": blend,
        });

        debug!(lenses = lenses.len(), blend, "Sending synthesize request");

        let response = self
            .post("/api/v1/synthesize")
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteError::Unavailable(e.to_string()))?;

        let body: SynthesizeResponse = Self::read_body("synthesize", response).await?;
        let outputs = convert_outputs(body.outputs)?;
        Ok((outputs, body.synthesis))
    }
}

fn lens_names(lenses: &[LensKind]) -> Vec<&'static str> {
    lenses.iter().map(|l| l.as_str()).collect()
}

/// Convert wire output keys back into typed lenses. An unrecognized key is
/// a protocol violation, not unavailability.
fn convert_outputs(
    raw: BTreeMap<String, String>,
) -> Result<BTreeMap<LensKind, String>, RemoteError> {
    let mut outputs = BTreeMap::new();
    for (name, text) in raw {
        let lens = LensKind::parse(&name)
            .ok_or_else(|| RemoteError::Malformed(format!("unrecognized lens name: {name}")))?;
        outputs.insert(lens, text);
    }
    Ok(outputs)
}

// --- Wire types ---

#[derive(Debug, Deserialize)]
struct SessionResponse {
    #[serde(rename = "sessionId")]
    session_id: String,
}

#[derive(Debug, Deserialize)]
struct ProcessResponse {
    outputs: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    outputs: BTreeMap<String, String>,
    synthesis: String,
}
