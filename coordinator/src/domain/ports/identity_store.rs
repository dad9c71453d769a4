//! Port for recording authenticated identities.
//!
//! The interface is synchronous: stores are local, append-only, and must not
//! surface failures to the coordinator.

use crate::domain::Identity;

/// Optional persistence collaborator for successful logins.
///
/// Implementations own their record set. The coordinator only writes through
/// [`IdentityStore::record`] and never reads the set back itself.
#[cfg_attr(test, mockall::automock)]
pub trait IdentityStore: Send + Sync {
    /// Append the identity to the record set.
    ///
    /// Errors, if an implementation has any, stay inside the implementation.
    fn record(&self, identity: &Identity);

    /// Whether some recorded identity has exactly this name.
    ///
    /// Matching is case-sensitive and performs no normalisation.
    fn contains_name(&self, name: &str) -> bool;
}
