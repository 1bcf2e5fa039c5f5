//! The closed set of cognitive lens identifiers.
//!
//! A lens is a named interpretive perspective applied to input text. The
//! set is fixed: both the remote service and the local fallback agree on
//! these ten names, so the wire protocol never renegotiates vocabulary.

use serde::{Deserialize, Serialize};

/// One of the ten cognitive lenses.
///
/// Wire names are the lowercase identifier strings (e.g. `"ethical"`).
/// `Ord` is derived so output maps keyed by lens iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensKind {
    Ethical,
    Emotional,
    Logical,
    Symbolic,
    Temporal,
    Energetic,
    Aesthetic,
    Survival,
    Relational,
    Transcendent,
}

impl LensKind {
    /// Every lens, in canonical order.
    pub const ALL: [LensKind; 10] = [
        LensKind::Ethical,
        LensKind::Emotional,
        LensKind::Logical,
        LensKind::Symbolic,
        LensKind::Temporal,
        LensKind::Energetic,
        LensKind::Aesthetic,
        LensKind::Survival,
        LensKind::Relational,
        LensKind::Transcendent,
    ];

    /// The lowercase wire name for this lens.
    pub fn as_str(&self) -> &'static str {
        match self {
            LensKind::Ethical => "ethical",
            LensKind::Emotional => "emotional",
            LensKind::Logical => "logical",
            LensKind::Symbolic => "symbolic",
            LensKind::Temporal => "temporal",
            LensKind::Energetic => "energetic",
            LensKind::Aesthetic => "aesthetic",
            LensKind::Survival => "survival",
            LensKind::Relational => "relational",
            LensKind::Transcendent => "transcendent",
        }
    }

    /// Parse a wire name back into a lens. Case-insensitive; returns
    /// `None` for anything outside the closed set.
    pub fn parse(name: &str) -> Option<LensKind> {
        let name = name.trim().to_lowercase();
        LensKind::ALL.iter().copied().find(|l| l.as_str() == name)
    }
}

impl std::fmt::Display for LensKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
