//! Configuration-driven `AuthenticationService` adapter.
//!
//! Answers synchronously from an in-memory rule: either accept every identity
//! or accept one exact name/password pair. Useful where no real identity
//! provider is wired yet, and as the default adapter for local runs.

use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::config::{AuthenticationSettings, AuthenticationSettingsError};
use crate::domain::ports::AuthenticationService;
use crate::domain::{AuthenticationOutcome, Identity};

const INVALID_CREDENTIALS: &str = "invalid credentials";

#[derive(Clone)]
enum Mode {
    AcceptAll,
    Credentials {
        name: String,
        password: Zeroizing<String>,
    },
}

/// Authentication adapter backed by static rules.
///
/// # Examples
/// ```
/// use login_coordinator::domain::Identity;
/// use login_coordinator::domain::ports::AuthenticationService;
/// use login_coordinator::outbound::StaticAuthenticationService;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let service = StaticAuthenticationService::with_credentials("Mock", "Mock");
/// assert!(service.authenticate(&Identity::new("Mock", "Mock")).await.is_authenticated());
/// assert!(!service.authenticate(&Identity::new("Mock", "nope")).await.is_authenticated());
/// # });
/// ```
#[derive(Clone)]
pub struct StaticAuthenticationService {
    mode: Mode,
}

impl StaticAuthenticationService {
    /// Authenticate every identity.
    #[must_use]
    pub const fn accept_all() -> Self {
        Self {
            mode: Mode::AcceptAll,
        }
    }

    /// Authenticate only the exact name/password pair given.
    #[must_use]
    pub fn with_credentials(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            mode: Mode::Credentials {
                name: name.into(),
                password: Zeroizing::new(password.into()),
            },
        }
    }

    /// Build the adapter described by validated settings.
    pub fn from_settings(
        settings: &AuthenticationSettings,
    ) -> Result<Self, AuthenticationSettingsError> {
        settings.validate()?;
        if settings.accept_all {
            Ok(Self::accept_all())
        } else {
            Ok(Self::with_credentials(
                settings.username(),
                settings.password(),
            ))
        }
    }

    fn check(&self, identity: &Identity) -> AuthenticationOutcome {
        match &self.mode {
            Mode::AcceptAll => AuthenticationOutcome::Authenticated,
            Mode::Credentials { name, password }
                if identity.name() == name && identity.password() == password.as_str() =>
            {
                AuthenticationOutcome::Authenticated
            }
            Mode::Credentials { .. } => AuthenticationOutcome::failed(INVALID_CREDENTIALS),
        }
    }
}

#[async_trait]
impl AuthenticationService for StaticAuthenticationService {
    async fn authenticate(&self, identity: &Identity) -> AuthenticationOutcome {
        self.check(identity)
    }
}
