//! Local fallback — deterministic, offline lens processing.
//!
//! Produces human-readable stub text rather than real analysis: a fixed
//! template per lens around an excerpt of the input, and a one-line
//! synthesis acknowledgment. Only four of the ten lenses have a local
//! template (ethical, emotional, logical, symbolic); requests for the
//! others yield no entry while offline, so a fallback result may hold
//! fewer outputs than were requested. Callers that care can compare
//! `outputs.len()` against the request.

use std::collections::BTreeMap;

use trivium_core::lens::LensKind;

/// Hard truncation boundary for the excerpt embedded in stub text.
/// Measured in characters, not bytes, so multibyte input never splits a
/// code point.
pub const EXCERPT_CHARS: usize = 100;

fn excerpt(text: &str) -> String {
    text.chars().take(EXCERPT_CHARS).collect()
}

/// Produce the stub output for one lens, or `None` when the lens has no
/// local template.
pub fn lens_output(lens: LensKind, text: &str) -> Option<String> {
    let excerpt = excerpt(text);
    let output = match lens {
        LensKind::Ethical => format!(
            "Ethical analysis of: {excerpt}... Consider privacy, security, and fairness implications."
        ),
        LensKind::Emotional => format!(
            "Emotional perspective on: {excerpt}... Focus on user experience and empathy."
        ),
        LensKind::Logical => format!(
            "Logical analysis of: {excerpt}... Examine structure, efficiency, and reasoning."
        ),
        LensKind::Symbolic => format!(
            "Symbolic interpretation of: {excerpt}... Look for patterns and deeper meaning."
        ),
        _ => return None,
    };
    Some(output)
}

/// Process text through every requested lens that has a local template.
pub fn process(text: &str, lenses: &[LensKind]) -> BTreeMap<LensKind, String> {
    lenses
        .iter()
        .filter_map(|lens| lens_output(*lens, text).map(|output| (*lens, output)))
        .collect()
}

/// A templated synthesis acknowledgment: reports the perspective count and
/// the blend as a percentage, independent of the output contents.
pub fn synthesize(outputs: &BTreeMap<LensKind, String>, blend: f64) -> String {
    format!(
        "Synthesis of {} perspectives with {:.1}% integration: \
         Consider all viewpoints for a balanced approach to this challenge.",
        outputs.len(),
        blend * 100.0
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_deterministic() {
        let a = lens_output(LensKind::Ethical, "collect user emails").unwrap();
        let b = lens_output(LensKind::Ethical, "collect user emails").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn short_text_is_embedded_whole() {
        let text = "fn main() {}";
        let output = lens_output(LensKind::Logical, text).unwrap();
        assert!(output.contains("Logical analysis of: fn main() {}..."));
    }

    #[test]
    fn long_text_is_cut_at_exactly_one_hundred_chars() {
        let text = "x".repeat(250);
        let output = lens_output(LensKind::Symbolic, &text).unwrap();
        let expected = "x".repeat(100);
        assert!(output.contains(&format!("of: {expected}...")));
        assert!(!output.contains(&"x".repeat(101)));
    }

    #[test]
    fn boundary_text_of_one_hundred_chars_is_kept_whole() {
        let text = "y".repeat(100);
        let output = lens_output(LensKind::Emotional, &text).unwrap();
        assert!(output.contains(&text));
    }

    #[test]
    fn truncation_counts_chars_not_bytes() {
        // 150 two-byte chars; a byte-based cut at 100 would split one.
        let text = "é".repeat(150);
        let output = lens_output(LensKind::Ethical, &text).unwrap();
        assert!(output.contains(&"é".repeat(100)));
        assert!(!output.contains(&"é".repeat(101)));
    }

    #[test]
    fn unsupported_lenses_produce_nothing() {
        for lens in [
            LensKind::Temporal,
            LensKind::Energetic,
            LensKind::Aesthetic,
            LensKind::Survival,
            LensKind::Relational,
            LensKind::Transcendent,
        ] {
            assert!(lens_output(lens, "anything").is_none());
        }
    }

    #[test]
    fn process_silently_omits_unsupported_lenses() {
        let outputs = process(
            "review this",
            &[LensKind::Logical, LensKind::Temporal, LensKind::Ethical],
        );
        assert_eq!(outputs.len(), 2);
        assert!(outputs.contains_key(&LensKind::Logical));
        assert!(outputs.contains_key(&LensKind::Ethical));
        assert!(!outputs.contains_key(&LensKind::Temporal));
    }

    #[test]
    fn synthesis_reports_count_and_percentage() {
        let outputs = process("text", &[LensKind::Ethical, LensKind::Logical]);
        let line = synthesize(&outputs, 0.5);
        assert!(line.starts_with("Synthesis of 2 perspectives with 50.0% integration:"));
    }

    #[test]
    fn synthesis_ignores_output_contents() {
        let a = process("one input", &[LensKind::Ethical, LensKind::Logical]);
        let b = process("completely different", &[LensKind::Emotional, LensKind::Symbolic]);
        assert_eq!(synthesize(&a, 0.3), synthesize(&b, 0.3));
    }

    #[test]
    fn synthesis_formats_fractional_blends() {
        let outputs = process("text", &[LensKind::Logical]);
        let line = synthesize(&outputs, 0.825);
        assert!(line.contains("82.5% integration"));
    }
}
