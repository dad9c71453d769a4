//! Login identity: the name/password pair submitted for one attempt.
//!
//! The coordinator never validates an [`Identity`]; the optional
//! [`Identity::try_from_parts`] constructor exists for inbound adapters that
//! want to reject blank names before talking to the coordinator.

use std::fmt;

use zeroize::Zeroizing;

/// Validation errors returned by [`Identity::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityValidationError {
    /// Name was missing or blank once trimmed.
    #[error("identity name must not be empty")]
    EmptyName,
}

/// Immutable credential pair representing the subject of a login attempt.
///
/// ## Invariants
/// - Never mutated after construction.
/// - `password` is zeroed on drop and never rendered by `Debug`.
///
/// Value equality compares both fields. Stores key identities by name only;
/// use [`Identity::same_name`] for that comparison.
///
/// # Examples
/// ```
/// use login_coordinator::domain::Identity;
///
/// let identity = Identity::new("Mock", "Mock");
/// assert_eq!(identity.name(), "Mock");
/// assert!(identity.same_name(&Identity::new("Mock", "other")));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Identity {
    name: String,
    password: Zeroizing<String>,
}

impl Identity {
    /// Build an identity without validating either component.
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: Zeroizing::new(password.into()),
        }
    }

    /// Fallible constructor rejecting names that are blank once trimmed.
    ///
    /// The stored name is kept exactly as given; stores match names without
    /// normalisation.
    pub fn try_from_parts(name: &str, password: &str) -> Result<Self, IdentityValidationError> {
        if name.trim().is_empty() {
            return Err(IdentityValidationError::EmptyName);
        }
        Ok(Self::new(name, password))
    }

    /// Name used for lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Password supplied by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Whether both identities share the exact same name.
    #[must_use]
    pub fn same_name(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Identity")
            .field("name", &self.name)
            .field("password", &"<redacted>")
            .finish()
    }
}
