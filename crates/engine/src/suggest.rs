//! Pattern suggestion — fixed keyword groups in fixed precedence.
//!
//! Matching is substring containment on the lower-cased context; the first
//! matching group wins and there is no scoring across groups.

use trivium_core::pattern::{Pattern, PatternCatalog};

/// Keyword groups in priority order, each mapping to a catalog pattern.
const RULES: &[(&[&str], &str)] = &[
    (&["review", "audit", "security"], "CODE_REVIEW"),
    (&["debug", "bug", "error", "exception"], "DEBUGGING"),
    (&["doc", "readme", "guide", "manual"], "DOCUMENTATION"),
    (&["data", "dataset", "analysis", "statistics"], "DATA_ANALYSIS"),
    (&["model", "ml", "machine learning", "ai"], "ML_VALIDATION"),
];

/// The pattern suggested when no keyword group matches.
const DEFAULT_PATTERN: &str = "CODE_REVIEW";

/// Map a free-text context description to one catalog pattern.
pub fn suggest<'a>(catalog: &'a PatternCatalog, context: &str) -> &'a Pattern {
    let context = context.to_lowercase();
    let name = RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| context.contains(k)))
        .map(|(_, name)| *name)
        .unwrap_or(DEFAULT_PATTERN);

    // Every rule target is a builtin pattern name.
    catalog
        .get(name)
        .expect("suggestion rules reference builtin patterns")
}
