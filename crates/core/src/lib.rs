//! # Trivium Core
//!
//! Domain types, traits, and error definitions for the Trivium cognitive
//! lens client. This crate has **zero framework dependencies** — it defines
//! the domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The seam between the engine and the remote service is the [`LensService`]
//! trait defined here. The HTTP implementation lives in `trivium-backends`;
//! the engine in `trivium-engine` depends only on the trait. This enables:
//! - Swapping the transport via configuration
//! - Easy testing with mock/stub services
//! - Clean dependency graph (all crates depend inward on core)

pub mod error;
pub mod lens;
pub mod pattern;
pub mod result;
pub mod service;

// Re-export key types at crate root for ergonomics
pub use error::{Error, RemoteError, Result};
pub use lens::LensKind;
pub use pattern::{Pattern, PatternCatalog};
pub use result::ProcessResult;
pub use service::{LensService, LOCAL_SESSION};
