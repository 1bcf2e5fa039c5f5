//! Lens processing backends for Trivium.
//!
//! `remote` implements the `trivium_core::LensService` trait over HTTP;
//! `local` is the deterministic offline approximation the engine falls
//! back to when the remote service is unreachable.

pub mod local;
pub mod remote;

pub use remote::RemoteClient;
