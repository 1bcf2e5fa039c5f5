//! # Trivium Engine
//!
//! The dual-path processing engine: every public operation tries the
//! remote lens service exactly once and, when it is unavailable, falls
//! back to the deterministic local approximation — callers always get a
//! usable [`trivium_core::ProcessResult`], online or offline.

pub mod engine;
pub mod presets;
pub mod suggest;

pub use engine::{TriviumEngine, DEFAULT_BLEND};
pub use presets::{analyze_code, analyze_data, validate_ml_model};
