//! The processing engine — remote first, local fallback, one uniform
//! result shape.
//!
//! Per call the state machine is `START → REMOTE_ATTEMPT → {SUCCESS |
//! FALLBACK} → RESULT`: the remote service is tried exactly once, the
//! local path runs exactly once if needed, and there is no retry loop.
//! `RemoteError::Unavailable` never escapes an engine operation;
//! `RemoteError::Malformed` always does.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use trivium_backends::local;
use trivium_backends::remote::RemoteClient;
use trivium_core::error::{RemoteError, Result};
use trivium_core::lens::LensKind;
use trivium_core::pattern::{Pattern, PatternCatalog};
use trivium_core::result::ProcessResult;
use trivium_core::service::{LensService, LOCAL_SESSION};

/// Blend ratio used when the caller does not specify one.
pub const DEFAULT_BLEND: f64 = 0.5;

/// The cognitive lens processing engine.
///
/// Holds one immutable session token and the read-only pattern catalog;
/// all methods take `&self`, so one engine can be shared across tasks.
pub struct TriviumEngine {
    service: Arc<dyn LensService>,
    session: String,
    catalog: PatternCatalog,
}

impl TriviumEngine {
    /// Connect to a remote service at `base_url`.
    ///
    /// When no session token is supplied, one `open_session` attempt is
    /// made; on any failure the engine degrades to the [`LOCAL_SESSION`]
    /// sentinel and stays usable offline. Construction never fails.
    pub async fn connect(base_url: impl Into<String>, session: Option<String>) -> Self {
        Self::connect_with_timeout(base_url, session, Duration::from_secs(30)).await
    }

    /// Like [`TriviumEngine::connect`] with an explicit request timeout.
    pub async fn connect_with_timeout(
        base_url: impl Into<String>,
        session: Option<String>,
        timeout: Duration,
    ) -> Self {
        let client = RemoteClient::with_timeout(base_url, timeout);
        let session = negotiate_session(&client, session).await;
        let client = client.with_session(session.clone());

        Self {
            service: Arc::new(client),
            session,
            catalog: PatternCatalog::builtin(),
        }
    }

    /// Build an engine over any [`LensService`] implementation. The same
    /// bootstrap rules apply: a missing token is negotiated once, with the
    /// sentinel as the degraded outcome.
    pub async fn with_service(service: Arc<dyn LensService>, session: Option<String>) -> Self {
        let session = negotiate_session(service.as_ref(), session).await;
        Self {
            service,
            session,
            catalog: PatternCatalog::builtin(),
        }
    }

    /// The session token this engine operates under. Equals
    /// [`LOCAL_SESSION`] when the bootstrap could not reach the service.
    pub fn session(&self) -> &str {
        &self.session
    }

    /// The read-only pattern catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Process text through the given lenses.
    ///
    /// Remote when reachable; otherwise the whole request is served by the
    /// local fallback. A malformed remote response is a hard error.
    pub async fn process_text(
        &self,
        text: &str,
        lenses: &[LensKind],
    ) -> Result<ProcessResult> {
        let outputs = match self.service.process(text, lenses).await {
            Ok(outputs) => outputs,
            Err(RemoteError::Unavailable(reason)) => {
                debug!(%reason, "Remote process unavailable, using local fallback");
                local::process(text, lenses)
            }
            Err(err @ RemoteError::Malformed(_)) => return Err(err.into()),
        };
        Ok(ProcessResult::new(outputs))
    }

    /// Process text using a predefined pattern. The result records the
    /// pattern regardless of which path produced the outputs.
    pub async fn process_with_pattern(
        &self,
        text: &str,
        pattern: &Pattern,
    ) -> Result<ProcessResult> {
        let result = self.process_text(text, &pattern.lenses).await?;
        Ok(result.with_pattern(pattern.clone()))
    }

    /// Resolve a pattern by name from the catalog, then process with it.
    /// An unknown name fails immediately; no fallback applies.
    pub async fn process_with_pattern_name(
        &self,
        text: &str,
        name: &str,
    ) -> Result<ProcessResult> {
        let pattern = self.catalog.get(name)?.clone();
        self.process_with_pattern(text, &pattern).await
    }

    /// Process text and blend the outputs into one synthesis narrative.
    /// Both paths carry `synthesis` and `synthesis_blend` in the result.
    pub async fn process_and_synthesize(
        &self,
        text: &str,
        lenses: &[LensKind],
        blend: f64,
    ) -> Result<ProcessResult> {
        let (outputs, synthesis) = match self
            .service
            .process_and_synthesize(text, lenses, blend)
            .await
        {
            Ok(pair) => pair,
            Err(RemoteError::Unavailable(reason)) => {
                debug!(%reason, "Remote synthesize unavailable, using local fallback");
                let outputs = local::process(text, lenses);
                let synthesis = local::synthesize(&outputs, blend);
                (outputs, synthesis)
            }
            Err(err @ RemoteError::Malformed(_)) => return Err(err.into()),
        };
        Ok(ProcessResult::new(outputs).with_synthesis(synthesis, blend))
    }

    /// Suggest a catalog pattern for a free-text context description.
    pub fn suggest_pattern(&self, context: &str) -> &Pattern {
        crate::suggest::suggest(&self.catalog, context)
    }
}

/// One bootstrap attempt: a supplied token wins, otherwise `open_session`
/// is tried exactly once and any failure degrades to the sentinel.
async fn negotiate_session(service: &dyn LensService, supplied: Option<String>) -> String {
    if let Some(token) = supplied {
        return token;
    }
    match service.open_session().await {
        Ok(token) => token,
        Err(err) => {
            warn!(%err, "Session bootstrap failed, continuing with local fallback");
            LOCAL_SESSION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// A mock service that always succeeds, echoing one line per lens.
    struct SuccessService {
        calls: Mutex<usize>,
    }

    impl SuccessService {
        fn new() -> Self {
            Self {
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LensService for SuccessService {
        async fn open_session(&self) -> std::result::Result<String, RemoteError> {
            Ok("sess_remote".into())
        }

        async fn process(
            &self,
            _text: &str,
            lenses: &[LensKind],
        ) -> std::result::Result<BTreeMap<LensKind, String>, RemoteError> {
            *self.calls.lock().unwrap() += 1;
            Ok(lenses
                .iter()
                .map(|l| (*l, format!("remote {l} output")))
                .collect())
        }

        async fn process_and_synthesize(
            &self,
            text: &str,
            lenses: &[LensKind],
            _blend: f64,
        ) -> std::result::Result<(BTreeMap<LensKind, String>, String), RemoteError> {
            let outputs = self.process(text, lenses).await?;
            Ok((outputs, "remote synthesis".into()))
        }
    }

    /// A mock service that always reports unavailability.
    struct DownService {
        calls: Mutex<usize>,
    }

    impl DownService {
        fn new() -> Self {
            Self {
                calls: Mutex::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LensService for DownService {
        async fn open_session(&self) -> std::result::Result<String, RemoteError> {
            Err(RemoteError::Unavailable("connection refused".into()))
        }

        async fn process(
            &self,
            _text: &str,
            _lenses: &[LensKind],
        ) -> std::result::Result<BTreeMap<LensKind, String>, RemoteError> {
            *self.calls.lock().unwrap() += 1;
            Err(RemoteError::Unavailable("connection refused".into()))
        }

        async fn process_and_synthesize(
            &self,
            _text: &str,
            _lenses: &[LensKind],
            _blend: f64,
        ) -> std::result::Result<(BTreeMap<LensKind, String>, String), RemoteError> {
            *self.calls.lock().unwrap() += 1;
            Err(RemoteError::Unavailable("connection refused".into()))
        }
    }

    /// A mock service whose responses violate the protocol.
    struct MalformedService;

    #[async_trait]
    impl LensService for MalformedService {
        async fn open_session(&self) -> std::result::Result<String, RemoteError> {
            Ok("sess_bad".into())
        }

        async fn process(
            &self,
            _text: &str,
            _lenses: &[LensKind],
        ) -> std::result::Result<BTreeMap<LensKind, String>, RemoteError> {
            Err(RemoteError::Malformed("unrecognized lens name: quantum".into()))
        }

        async fn process_and_synthesize(
            &self,
            _text: &str,
            _lenses: &[LensKind],
            _blend: f64,
        ) -> std::result::Result<(BTreeMap<LensKind, String>, String), RemoteError> {
            Err(RemoteError::Malformed("missing synthesis field".into()))
        }
    }

    const LENSES: [LensKind; 2] = [LensKind::Ethical, LensKind::Logical];

    #[tokio::test]
    async fn remote_success_path() {
        let service = Arc::new(SuccessService::new());
        let engine = TriviumEngine::with_service(service.clone(), None).await;

        let result = engine.process_text("review this", &LENSES).await.unwrap();
        assert_eq!(result.outputs.len(), 2);
        assert_eq!(result.outputs[&LensKind::Ethical], "remote ethical output");
        assert!(result.pattern.is_none());
        assert!(result.synthesis().is_none());
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn unavailable_falls_back_without_error() {
        let service = Arc::new(DownService::new());
        let engine = TriviumEngine::with_service(service.clone(), None).await;

        let result = engine.process_text("review this", &LENSES).await.unwrap();
        assert_eq!(result.outputs.len(), 2);
        assert!(result.outputs[&LensKind::Ethical].starts_with("Ethical analysis of:"));
        assert!(result.pattern.is_none());
        assert!(result.synthesis().is_none());
        // Exactly one remote attempt, no retries.
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn malformed_response_is_a_hard_error() {
        let engine = TriviumEngine::with_service(Arc::new(MalformedService), None).await;

        let err = engine.process_text("review this", &LENSES).await.unwrap_err();
        assert!(err.to_string().contains("quantum"));
    }

    #[tokio::test]
    async fn pattern_is_recorded_on_the_remote_path() {
        let engine =
            TriviumEngine::with_service(Arc::new(SuccessService::new()), None).await;

        let result = engine
            .process_with_pattern_name("review this", "CODE_REVIEW")
            .await
            .unwrap();
        assert_eq!(result.pattern.as_ref().unwrap().name, "CODE_REVIEW");
    }

    #[tokio::test]
    async fn pattern_is_recorded_on_the_fallback_path() {
        let engine = TriviumEngine::with_service(Arc::new(DownService::new()), None).await;

        let result = engine
            .process_with_pattern_name("review this", "CODE_REVIEW")
            .await
            .unwrap();
        assert_eq!(result.pattern.as_ref().unwrap().name, "CODE_REVIEW");
    }

    #[tokio::test]
    async fn unknown_pattern_fails_without_touching_the_service() {
        let service = Arc::new(DownService::new());
        let engine = TriviumEngine::with_service(service.clone(), None).await;

        let err = engine
            .process_with_pattern_name("text", "TAROT_READING")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("TAROT_READING"));
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn synthesis_carries_blend_on_the_remote_path() {
        let engine =
            TriviumEngine::with_service(Arc::new(SuccessService::new()), None).await;

        let result = engine
            .process_and_synthesize("review this", &LENSES, 0.7)
            .await
            .unwrap();
        assert_eq!(result.synthesis(), Some("remote synthesis"));
        assert_eq!(result.synthesis_blend(), Some(0.7));
    }

    #[tokio::test]
    async fn synthesis_carries_blend_on_the_fallback_path() {
        let engine = TriviumEngine::with_service(Arc::new(DownService::new()), None).await;

        let result = engine
            .process_and_synthesize("review this", &LENSES, 0.25)
            .await
            .unwrap();
        assert_eq!(result.synthesis_blend(), Some(0.25));
        let synthesis = result.synthesis().unwrap();
        assert!(!synthesis.is_empty());
        assert!(synthesis.contains("2 perspectives"));
        assert!(synthesis.contains("25.0% integration"));
    }

    #[tokio::test]
    async fn malformed_synthesize_does_not_fall_back() {
        let engine = TriviumEngine::with_service(Arc::new(MalformedService), None).await;

        let err = engine
            .process_and_synthesize("text", &LENSES, DEFAULT_BLEND)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("synthesis"));
    }

    #[tokio::test]
    async fn bootstrap_takes_the_remote_token() {
        let engine =
            TriviumEngine::with_service(Arc::new(SuccessService::new()), None).await;
        assert_eq!(engine.session(), "sess_remote");
    }

    #[tokio::test]
    async fn bootstrap_degrades_to_the_sentinel() {
        let engine = TriviumEngine::with_service(Arc::new(DownService::new()), None).await;
        assert_eq!(engine.session(), LOCAL_SESSION);
    }

    #[tokio::test]
    async fn supplied_token_skips_bootstrap() {
        let engine = TriviumEngine::with_service(
            Arc::new(DownService::new()),
            Some("sess_mine".into()),
        )
        .await;
        assert_eq!(engine.session(), "sess_mine");
    }

    #[tokio::test]
    async fn connect_against_unreachable_endpoint_never_fails() {
        // Discard port on localhost: refused immediately.
        let engine = TriviumEngine::connect_with_timeout(
            "http://127.0.0.1:9",
            None,
            Duration::from_secs(2),
        )
        .await;
        assert_eq!(engine.session(), LOCAL_SESSION);

        // And the engine is fully usable offline.
        let result = engine.process_text("offline text", &LENSES).await.unwrap();
        assert_eq!(result.outputs.len(), 2);
    }

    #[tokio::test]
    async fn offline_result_omits_unsupported_lenses() {
        let engine = TriviumEngine::with_service(Arc::new(DownService::new()), None).await;

        let result = engine
            .process_text("text", &[LensKind::Logical, LensKind::Temporal])
            .await
            .unwrap();
        assert_eq!(result.outputs.len(), 1);
        assert!(!result.outputs.contains_key(&LensKind::Temporal));
    }
}
