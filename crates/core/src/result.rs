//! The uniform output of any processing call.
//!
//! A `ProcessResult` looks the same whether the remote service or the local
//! fallback produced it; callers never branch on which path ran.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::lens::LensKind;
use crate::pattern::Pattern;

/// Per-lens outputs plus optional pattern and synthesis metadata.
///
/// Invariant: a synthesis narrative is always accompanied by its blend
/// ratio. Both are private and only settable together through
/// [`ProcessResult::with_synthesis`], so the invariant holds by
/// construction.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessResult {
    /// One produced text per lens the engine could serve. In fallback mode
    /// this map may hold fewer entries than were requested.
    pub outputs: BTreeMap<LensKind, String>,

    /// The pattern that drove this call, when one was used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    #[serde(skip_serializing_if = "Option::is_none")]
    synthesis_blend: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    synthesis: Option<String>,
}

impl ProcessResult {
    /// A result holding only per-lens outputs.
    pub fn new(outputs: BTreeMap<LensKind, String>) -> Self {
        Self {
            outputs,
            pattern: None,
            synthesis_blend: None,
            synthesis: None,
        }
    }

    /// Record the pattern that produced this result.
    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Attach a synthesis narrative together with its blend ratio.
    pub fn with_synthesis(mut self, synthesis: impl Into<String>, blend: f64) -> Self {
        self.synthesis = Some(synthesis.into());
        self.synthesis_blend = Some(blend);
        self
    }

    /// The synthesis narrative, if one was computed.
    pub fn synthesis(&self) -> Option<&str> {
        self.synthesis.as_deref()
    }

    /// The blend ratio the synthesis was computed with.
    pub fn synthesis_blend(&self) -> Option<f64> {
        self.synthesis_blend
    }
}
