//! Login coordinator.
//!
//! Drives each login attempt from the caller's point of view:
//! authenticate through the [`AuthenticationService`] port, remember the
//! identity on success, hand it to the attached [`IdentityStore`], then tell
//! the caller the attempt is over.
//!
//! Concurrent attempts are not serialised. Each attempt applies its outcome
//! when the port answers, so the last applied success wins.

use std::sync::{Arc, PoisonError, RwLock, Weak};

use thiserror::Error;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::domain::ports::{AuthenticationService, IdentityStore};
use crate::domain::{AuthenticationOutcome, Identity};

/// Errors raised while starting a background login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginCoordinatorError {
    /// No Tokio runtime is available to run the attempt on.
    #[error("no tokio runtime is available to run the login attempt")]
    NoRuntime,
}

/// Coordinates login attempts and owns the current identity.
///
/// ## Invariants
/// - The current identity only ever comes from an attempt whose outcome was
///   [`AuthenticationOutcome::Authenticated`].
/// - A failed attempt leaves the current identity untouched, including any
///   identity set by an earlier success.
/// - The identity store is held weakly; the coordinator never keeps it alive.
pub struct LoginCoordinator<A: ?Sized> {
    authenticator: Arc<A>,
    identity_store: RwLock<Option<Weak<dyn IdentityStore>>>,
    current_identity: RwLock<Option<Identity>>,
}

impl<A: ?Sized> LoginCoordinator<A> {
    /// Create an idle coordinator with no identity store attached.
    #[must_use]
    pub const fn new(authenticator: Arc<A>) -> Self {
        Self {
            authenticator,
            identity_store: RwLock::new(None),
            current_identity: RwLock::new(None),
        }
    }

    /// Attach the store that receives successful identities.
    ///
    /// Replaces any previously attached store. Only a weak handle is kept, so
    /// once the caller drops its last `Arc` the coordinator behaves as if no
    /// store were attached.
    pub fn attach_identity_store<S>(&self, store: &Arc<S>)
    where
        S: IdentityStore + 'static,
    {
        let weak: Weak<S> = Arc::downgrade(store);
        self.replace_identity_store(weak);
    }

    /// Attach a type-erased store, such as one returned by
    /// [`Self::identity_store`].
    ///
    /// Behaves exactly like [`Self::attach_identity_store`].
    pub fn attach_dyn_identity_store(&self, store: &Arc<dyn IdentityStore>) {
        self.replace_identity_store(Arc::downgrade(store));
    }

    fn replace_identity_store(&self, handle: Weak<dyn IdentityStore>) {
        *self
            .identity_store
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(handle);
    }

    /// The attached store, if one is attached and still alive.
    #[must_use]
    pub fn identity_store(&self) -> Option<Arc<dyn IdentityStore>> {
        self.identity_store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Identity from the most recently applied successful attempt.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.current_identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn apply_success(&self, identity: Identity) {
        *self
            .current_identity
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(identity.clone());

        match self.identity_store() {
            Some(store) => store.record(&identity),
            None => debug!(name = identity.name(), "no identity store attached; skipping record"),
        }
    }
}

impl<A> LoginCoordinator<A>
where
    A: AuthenticationService + ?Sized,
{
    /// Run one attempt and return its outcome once it has been applied.
    ///
    /// By the time this resolves the current identity and the attached store
    /// already reflect the outcome. If the authentication service never
    /// answers, neither does this future.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use login_coordinator::domain::{Identity, LoginCoordinator};
    /// use login_coordinator::outbound::StaticAuthenticationService;
    ///
    /// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
    /// let coordinator = LoginCoordinator::new(Arc::new(StaticAuthenticationService::accept_all()));
    /// let outcome = coordinator.login(Identity::new("Mock", "Mock")).await;
    /// assert!(outcome.is_authenticated());
    /// assert_eq!(coordinator.current_identity(), Some(Identity::new("Mock", "Mock")));
    /// # });
    /// ```
    pub async fn login(&self, identity: Identity) -> AuthenticationOutcome {
        debug!(name = identity.name(), "login attempt started");
        let outcome = self.authenticator.authenticate(&identity).await;

        match &outcome {
            AuthenticationOutcome::Authenticated => {
                info!(name = identity.name(), "login succeeded");
                self.apply_success(identity);
            }
            AuthenticationOutcome::Failed(error) => {
                warn!(name = identity.name(), reason = error.reason(), "login failed");
            }
        }

        outcome
    }
}

impl<A> LoginCoordinator<A>
where
    A: AuthenticationService + ?Sized + 'static,
{
    /// Start an attempt in the background and call `on_complete` when done.
    ///
    /// The attempt runs on the Tokio runtime the caller is executing in.
    /// `on_complete` runs exactly once, after the outcome has been applied,
    /// whether the attempt succeeded or failed. It never runs if the
    /// authentication service never answers or if the returned handle is
    /// aborted first. Dropping the handle does not cancel the attempt.
    ///
    /// # Errors
    ///
    /// Returns [`LoginCoordinatorError::NoRuntime`] when called outside a
    /// Tokio runtime. Nothing is started and `on_complete` is dropped unrun;
    /// use [`Self::attempt_login_on`] to supply a runtime explicitly.
    pub fn attempt_login<F>(
        self: &Arc<Self>,
        identity: Identity,
        on_complete: F,
    ) -> Result<JoinHandle<()>, LoginCoordinatorError>
    where
        F: FnOnce(&AuthenticationOutcome) + Send + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| LoginCoordinatorError::NoRuntime)?;
        Ok(self.attempt_login_on(&runtime, identity, on_complete))
    }

    /// Start an attempt on the given runtime and call `on_complete` when done.
    ///
    /// Completion semantics match [`Self::attempt_login`].
    #[must_use = "the handle is the only way to await or abort the attempt"]
    pub fn attempt_login_on<F>(
        self: &Arc<Self>,
        runtime: &Handle,
        identity: Identity,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(&AuthenticationOutcome) + Send + 'static,
    {
        let coordinator = Arc::clone(self);
        runtime.spawn(async move {
            let outcome = coordinator.login(identity).await;
            on_complete(&outcome);
        })
    }
}

#[cfg(test)]
#[path = "login_coordinator_tests.rs"]
mod tests;
