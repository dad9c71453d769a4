//! Test doubles for the login coordinator ports.
//!
//! One double per flavour: a dummy that never answers, a fake with a tiny
//! working rule, a stub with canned outcomes, a deferred service resolved by
//! the test, a spy that records calls, and a mock that verifies expectations.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use login_coordinator::domain::ports::{AuthenticationService, IdentityStore};
use login_coordinator::domain::{AuthenticationOutcome, Identity};
use tokio::sync::{mpsc, oneshot};

/// Never answers; any attempt against it stays pending.
#[derive(Debug, Default)]
pub struct DummyAuthenticationService;

#[async_trait]
impl AuthenticationService for DummyAuthenticationService {
    async fn authenticate(&self, _identity: &Identity) -> AuthenticationOutcome {
        std::future::pending().await
    }
}

/// Knows a fixed set of names and rejects everyone else.
#[derive(Debug)]
pub struct FakeAuthenticationService {
    known_names: Vec<String>,
}

impl FakeAuthenticationService {
    /// Accept exactly the listed names.
    pub fn knowing(names: &[&str]) -> Self {
        Self {
            known_names: names.iter().map(|name| (*name).to_owned()).collect(),
        }
    }
}

#[async_trait]
impl AuthenticationService for FakeAuthenticationService {
    async fn authenticate(&self, identity: &Identity) -> AuthenticationOutcome {
        if self.known_names.iter().any(|name| name == identity.name()) {
            AuthenticationOutcome::Authenticated
        } else {
            AuthenticationOutcome::failed("unknown user")
        }
    }
}

/// Returns a canned outcome, optionally overridden per name.
#[derive(Debug)]
pub struct StubAuthenticationService {
    default_outcome: AuthenticationOutcome,
    overrides: HashMap<String, AuthenticationOutcome>,
}

impl StubAuthenticationService {
    /// Authenticate every identity.
    pub fn succeeding() -> Self {
        Self {
            default_outcome: AuthenticationOutcome::Authenticated,
            overrides: HashMap::new(),
        }
    }

    /// Reject every identity with `reason`.
    pub fn failing(reason: &str) -> Self {
        Self {
            default_outcome: AuthenticationOutcome::failed(reason),
            overrides: HashMap::new(),
        }
    }

    /// Reject `name` with `reason`, keeping the default for everyone else.
    pub fn failing_for(mut self, name: &str, reason: &str) -> Self {
        self.overrides
            .insert(name.to_owned(), AuthenticationOutcome::failed(reason));
        self
    }
}

#[async_trait]
impl AuthenticationService for StubAuthenticationService {
    async fn authenticate(&self, identity: &Identity) -> AuthenticationOutcome {
        self.overrides
            .get(identity.name())
            .unwrap_or(&self.default_outcome)
            .clone()
    }
}

/// Holds every attempt until the test resolves it by name.
///
/// Each pending attempt owns a oneshot sender; resolving consumes it, so a
/// second answer for the same attempt cannot be sent.
pub struct DeferredAuthenticationService {
    pending: Mutex<HashMap<String, oneshot::Sender<AuthenticationOutcome>>>,
    arrivals: mpsc::UnboundedSender<String>,
}

impl DeferredAuthenticationService {
    /// Build the service plus a receiver announcing each arriving attempt.
    pub fn with_arrivals() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (arrivals, announcements) = mpsc::unbounded_channel();
        let service = Self {
            pending: Mutex::new(HashMap::new()),
            arrivals,
        };
        (service, announcements)
    }

    /// Answer the pending attempt for `name`.
    pub fn resolve(&self, name: &str, outcome: AuthenticationOutcome) {
        let sender = self
            .pending
            .lock()
            .expect("pending lock")
            .remove(name)
            .unwrap_or_else(|| panic!("no pending attempt for {name}"));
        assert!(
            sender.send(outcome).is_ok(),
            "attempt for {name} was dropped before it was resolved"
        );
    }
}

#[async_trait]
impl AuthenticationService for DeferredAuthenticationService {
    async fn authenticate(&self, identity: &Identity) -> AuthenticationOutcome {
        let (sender, receiver) = oneshot::channel();
        let previous = self
            .pending
            .lock()
            .expect("pending lock")
            .insert(identity.name().to_owned(), sender);
        assert!(previous.is_none(), "one pending attempt per name");
        self.arrivals
            .send(identity.name().to_owned())
            .expect("arrival receiver alive");
        receiver.await.expect("test resolved every attempt it started")
    }
}

/// Records every call so tests can inspect them afterwards.
#[derive(Debug, Default)]
pub struct SpyIdentityStore {
    records: Mutex<Vec<Identity>>,
    record_calls: AtomicUsize,
}

impl SpyIdentityStore {
    /// Number of `record` calls seen so far.
    pub fn record_calls(&self) -> usize {
        self.record_calls.load(Ordering::SeqCst)
    }

    /// Identities passed to `record`, in call order.
    pub fn recorded(&self) -> Vec<Identity> {
        self.records.lock().expect("records lock").clone()
    }
}

impl IdentityStore for SpyIdentityStore {
    fn record(&self, identity: &Identity) {
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .lock()
            .expect("records lock")
            .push(identity.clone());
    }

    fn contains_name(&self, name: &str) -> bool {
        self.records
            .lock()
            .expect("records lock")
            .iter()
            .any(|identity| identity.name() == name)
    }
}

/// Fails verification unless exactly the expected names were recorded, in
/// order.
#[derive(Debug, Default)]
pub struct MockIdentityStore {
    expected: Mutex<Vec<String>>,
    actual: Mutex<Vec<String>>,
}

impl MockIdentityStore {
    /// Queue the next name `record` must receive.
    pub fn expect_record(&self, name: &str) {
        self.expected
            .lock()
            .expect("expected lock")
            .push(name.to_owned());
    }

    /// Assert every queued expectation was met.
    pub fn verify(&self) {
        let expected = self.expected.lock().expect("expected lock");
        let actual = self.actual.lock().expect("actual lock");
        assert_eq!(*actual, *expected, "recorded names differ from expectations");
    }
}

impl IdentityStore for MockIdentityStore {
    fn record(&self, identity: &Identity) {
        let mut actual = self.actual.lock().expect("actual lock");
        let position = actual.len();
        let expected = self.expected.lock().expect("expected lock");
        assert_eq!(
            expected.get(position).map(String::as_str),
            Some(identity.name()),
            "unexpected record call #{position}"
        );
        actual.push(identity.name().to_owned());
    }

    fn contains_name(&self, name: &str) -> bool {
        self.actual
            .lock()
            .expect("actual lock")
            .iter()
            .any(|recorded| recorded == name)
    }
}
