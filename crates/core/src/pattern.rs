//! Named lens combinations and the read-only catalog that holds them.
//!
//! A pattern is a reusable analysis preset: an ordered list of lenses plus
//! descriptive metadata. The catalog is populated once at startup and never
//! mutated afterwards, so no synchronization is needed anywhere downstream.

use serde::Serialize;

use crate::error::Error;
use crate::lens::LensKind;

/// A named, immutable combination of lenses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    /// Unique catalog key, e.g. `"CODE_REVIEW"`.
    pub name: String,

    /// The lenses applied, in presentation order.
    pub lenses: Vec<LensKind>,

    /// Short focus label.
    pub focus: String,

    /// Prose description.
    pub description: String,
}

impl Pattern {
    fn preset(name: &str, lenses: &[LensKind], focus: &str, description: &str) -> Self {
        Self {
            name: name.into(),
            lenses: lenses.to_vec(),
            focus: focus.into(),
            description: description.into(),
        }
    }
}

/// The read-only registry of built-in patterns.
///
/// Lookup is by normalized name: case-insensitive, with `-` and `_`
/// treated as equivalent, so the CLI's `code-review` resolves to
/// `CODE_REVIEW`.
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    /// Build the catalog of the eleven built-in patterns.
    pub fn builtin() -> Self {
        use LensKind::*;
        let patterns = vec![
            Pattern::preset(
                "CODE_REVIEW",
                &[Ethical, Logical],
                "Security, efficiency, and maintainability analysis",
                "Combines ethical considerations (security, privacy) with logical analysis (structure, performance)",
            ),
            Pattern::preset(
                "DEBUGGING",
                &[Logical, Emotional],
                "Systematic problem-solving with user empathy",
                "Balances technical analysis with understanding user impact and frustration",
            ),
            Pattern::preset(
                "DOCUMENTATION",
                &[Symbolic, Emotional],
                "Clear communication and user understanding",
                "Creates intuitive explanations using metaphors and empathetic user perspective",
            ),
            Pattern::preset(
                "DATA_ANALYSIS",
                &[Logical, Ethical],
                "Statistical rigor with ethical data handling",
                "Combines analytical precision with consideration of data privacy and bias",
            ),
            Pattern::preset(
                "ML_VALIDATION",
                &[Logical, Ethical, Emotional],
                "Model performance, fairness, and user impact",
                "Comprehensive ML model evaluation including technical metrics and social impact",
            ),
            Pattern::preset(
                "PERFORMANCE_OPTIMIZATION",
                &[Energetic, Logical, Temporal],
                "Resource efficiency and long-term performance",
                "Analyzes energy consumption, algorithmic efficiency, and performance evolution",
            ),
            Pattern::preset(
                "PRODUCT_STRATEGY",
                &[Transcendent, Relational, Temporal, Ethical],
                "Vision-driven product development with ethical foundations",
                "Combines higher purpose, stakeholder relationships, time dynamics, and ethical considerations",
            ),
            Pattern::preset(
                "SECURITY_AUDIT",
                &[Ethical, Survival, Logical],
                "Comprehensive security and threat assessment",
                "Evaluates vulnerabilities, privacy, resilience, and systematic security measures",
            ),
            Pattern::preset(
                "UX_DESIGN",
                &[Emotional, Aesthetic, Transcendent],
                "Meaningful user experiences and transformational design",
                "Combines empathy, beauty, and higher purpose for impactful user interactions",
            ),
            Pattern::preset(
                "TECHNICAL_DEBT",
                &[Temporal, Energetic, Survival, Ethical],
                "Long-term code health and sustainability assessment",
                "Evaluates time impact, resource costs, system robustness, and maintenance ethics",
            ),
            Pattern::preset(
                "COMPLETE_ANALYSIS",
                &LensKind::ALL,
                "Full archetypal cognitive analysis using all perspectives",
                "Comprehensive analysis through all 10 cognitive lenses for complete understanding",
            ),
        ];
        Self { patterns }
    }

    /// Look up a pattern by (normalized) name.
    pub fn get(&self, name: &str) -> Result<&Pattern, Error> {
        let normalized = Self::normalize(name);
        self.patterns
            .iter()
            .find(|p| p.name == normalized)
            .ok_or_else(|| Error::UnknownPattern(name.to_string()))
    }

    /// All patterns, in definition order.
    pub fn all(&self) -> &[Pattern] {
        &self.patterns
    }

    /// All pattern names, in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.patterns.iter().map(|p| p.name.as_str()).collect()
    }

    fn normalize(name: &str) -> String {
        name.trim().to_uppercase().replace('-', "_")
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
