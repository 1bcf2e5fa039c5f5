//! LensService trait — the seam between the engine and the remote service.
//!
//! The HTTP adapter in `trivium-backends` implements this trait; the engine
//! calls it without knowing whether a real transport or a test mock is on
//! the other side.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::RemoteError;
use crate::lens::LensKind;

/// Session token used when the remote service could not be reached at
/// startup. The engine keeps working offline under this sentinel.
pub const LOCAL_SESSION: &str = "local_session";

/// The three operations of the remote lens service.
///
/// Every failure collapses to a [`RemoteError`]: `Unavailable` for
/// transport trouble and non-2xx statuses, `Malformed` for 2xx bodies that
/// violate the protocol. Implementations hold no state beyond their
/// transport handle and session token.
#[async_trait]
pub trait LensService: Send + Sync {
    /// Request a new session token.
    async fn open_session(&self) -> Result<String, RemoteError>;

    /// Submit text for analysis through the given lenses.
    async fn process(
        &self,
        text: &str,
        lenses: &[LensKind],
    ) -> Result<BTreeMap<LensKind, String>, RemoteError>;

    /// Submit text for analysis plus a synthesis narrative. The blend is
    /// passed through unvalidated; clamping is the remote side's concern.
    async fn process_and_synthesize(
        &self,
        text: &str,
        lenses: &[LensKind],
        blend: f64,
    ) -> Result<(BTreeMap<LensKind, String>, String), RemoteError>;
}
