//! Result of one authentication attempt.
//!
//! Failures are values, not control flow: authentication services report a
//! rejected identity through [`AuthenticationOutcome::Failed`] and the
//! coordinator inspects and discards it.

use thiserror::Error;

/// Reason an authentication service rejected an identity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationError {
    /// The service declined the identity.
    #[error("authentication failed: {reason}")]
    Failed {
        /// Implementation-defined explanation.
        reason: String,
    },
}

impl AuthenticationError {
    /// Construct a [`AuthenticationError::Failed`] value.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }

    /// Explanation supplied by the authentication service.
    #[must_use]
    pub fn reason(&self) -> &str {
        match self {
            Self::Failed { reason } => reason.as_str(),
        }
    }
}

/// Two-variant outcome produced once per authentication attempt.
///
/// # Examples
/// ```
/// use login_coordinator::domain::AuthenticationOutcome;
///
/// let outcome = AuthenticationOutcome::failed("locked out");
/// assert!(!outcome.is_authenticated());
/// assert_eq!(outcome.failure().map(|err| err.reason()), Some("locked out"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// The identity was verified.
    Authenticated,
    /// The identity was rejected.
    Failed(AuthenticationError),
}

impl AuthenticationOutcome {
    /// Shorthand for a failed outcome with the given reason.
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(AuthenticationError::failed(reason))
    }

    /// Whether the identity was verified.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }

    /// Rejection reason, if the attempt failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&AuthenticationError> {
        match self {
            Self::Authenticated => None,
            Self::Failed(error) => Some(error),
        }
    }
}

impl From<Result<(), AuthenticationError>> for AuthenticationOutcome {
    fn from(value: Result<(), AuthenticationError>) -> Self {
        match value {
            Ok(()) => Self::Authenticated,
            Err(error) => Self::Failed(error),
        }
    }
}

impl From<AuthenticationOutcome> for Result<(), AuthenticationError> {
    fn from(value: AuthenticationOutcome) -> Self {
        match value {
            AuthenticationOutcome::Authenticated => Ok(()),
            AuthenticationOutcome::Failed(error) => Err(error),
        }
    }
}
