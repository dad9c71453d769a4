//! Driven port for verifying login identities.
//!
//! Adapters behind this port talk to whatever actually checks credentials (a
//! remote identity provider, a configured credential pair, a test double).
//! The coordinator only sees the outcome, so handler and coordinator tests
//! stay deterministic by substituting a double.

use async_trait::async_trait;

use crate::domain::{AuthenticationOutcome, Identity};

/// Port that verifies one identity per call.
///
/// The returned future yields its outcome at most once. It may complete
/// immediately or stay pending while another task finishes the check; callers
/// must not assume either. A future that never completes is allowed and
/// leaves the attempt pending for good.
///
/// Rejections are reported as [`AuthenticationOutcome::Failed`], never by
/// panicking.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationService: Send + Sync {
    /// Verify the identity and report the outcome.
    async fn authenticate(&self, identity: &Identity) -> AuthenticationOutcome;
}
