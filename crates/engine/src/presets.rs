//! Convenience entry points — thin parameter presets over the engine.

use trivium_core::error::Result;
use trivium_core::lens::LensKind;
use trivium_core::result::ProcessResult;

use crate::engine::TriviumEngine;

/// Quick code analysis. `preset` selects `"code_review"` or `"debugging"`;
/// anything else runs a plain logical/ethical pass.
pub async fn analyze_code(
    engine: &TriviumEngine,
    code: &str,
    preset: &str,
) -> Result<ProcessResult> {
    match preset {
        "code_review" | "code-review" => {
            engine.process_with_pattern_name(code, "CODE_REVIEW").await
        }
        "debugging" => engine.process_with_pattern_name(code, "DEBUGGING").await,
        _ => {
            engine
                .process_text(code, &[LensKind::Logical, LensKind::Ethical])
                .await
        }
    }
}

/// Analyze a data-processing description, optionally with the ethical
/// focus of the DATA_ANALYSIS pattern.
pub async fn analyze_data(
    engine: &TriviumEngine,
    description: &str,
    ethical_focus: bool,
) -> Result<ProcessResult> {
    if ethical_focus {
        engine
            .process_with_pattern_name(description, "DATA_ANALYSIS")
            .await
    } else {
        engine.process_text(description, &[LensKind::Logical]).await
    }
}

/// Comprehensive ML model validation via the ML_VALIDATION pattern.
pub async fn validate_ml_model(
    engine: &TriviumEngine,
    model_description: &str,
) -> Result<ProcessResult> {
    engine
        .process_with_pattern_name(model_description, "ML_VALIDATION")
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Arc;
    use trivium_core::error::RemoteError;
    use trivium_core::service::LensService;

    /// Records the lenses of the last process call.
    struct RecordingService {
        last_lenses: std::sync::Mutex<Vec<LensKind>>,
    }

    impl RecordingService {
        fn new() -> Self {
            Self {
                last_lenses: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn last_lenses(&self) -> Vec<LensKind> {
            self.last_lenses.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LensService for RecordingService {
        async fn open_session(&self) -> std::result::Result<String, RemoteError> {
            Ok("sess_test".into())
        }

        async fn process(
            &self,
            _text: &str,
            lenses: &[LensKind],
        ) -> std::result::Result<BTreeMap<LensKind, String>, RemoteError> {
            *self.last_lenses.lock().unwrap() = lenses.to_vec();
            Ok(lenses.iter().map(|l| (*l, format!("{l} view"))).collect())
        }

        async fn process_and_synthesize(
            &self,
            text: &str,
            lenses: &[LensKind],
            _blend: f64,
        ) -> std::result::Result<(BTreeMap<LensKind, String>, String), RemoteError> {
            let outputs = self.process(text, lenses).await?;
            Ok((outputs, "synthesis".into()))
        }
    }

    async fn engine_with(service: Arc<RecordingService>) -> TriviumEngine {
        TriviumEngine::with_service(service, None).await
    }

    #[tokio::test]
    async fn analyze_code_defaults_to_code_review_pattern() {
        let service = Arc::new(RecordingService::new());
        let engine = engine_with(service.clone()).await;

        let result = analyze_code(&engine, "fn main() {}", "code_review")
            .await
            .unwrap();
        assert_eq!(result.pattern.as_ref().unwrap().name, "CODE_REVIEW");
        assert_eq!(
            service.last_lenses(),
            vec![LensKind::Ethical, LensKind::Logical]
        );
    }

    #[tokio::test]
    async fn analyze_code_unknown_preset_uses_plain_lenses() {
        let service = Arc::new(RecordingService::new());
        let engine = engine_with(service.clone()).await;

        let result = analyze_code(&engine, "fn main() {}", "whatever")
            .await
            .unwrap();
        assert!(result.pattern.is_none());
        assert_eq!(
            service.last_lenses(),
            vec![LensKind::Logical, LensKind::Ethical]
        );
    }

    #[tokio::test]
    async fn analyze_data_without_ethics_is_logical_only() {
        let service = Arc::new(RecordingService::new());
        let engine = engine_with(service.clone()).await;

        let result = analyze_data(&engine, "nightly ETL job", false).await.unwrap();
        assert!(result.pattern.is_none());
        assert_eq!(service.last_lenses(), vec![LensKind::Logical]);
    }

    #[tokio::test]
    async fn validate_ml_model_uses_ml_validation() {
        let service = Arc::new(RecordingService::new());
        let engine = engine_with(service.clone()).await;

        let result = validate_ml_model(&engine, "churn classifier").await.unwrap();
        assert_eq!(result.pattern.as_ref().unwrap().name, "ML_VALIDATION");
    }
}
