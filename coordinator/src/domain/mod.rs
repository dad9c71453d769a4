//! Domain primitives, ports and the login coordinator.
//!
//! Purpose: keep the login control flow independent of any concrete
//! authentication backend or storage. Adapters plug in through the traits in
//! [`ports`].
//!
//! Public surface:
//! - Identity — name/password pair submitted for a login attempt.
//! - AuthenticationOutcome / AuthenticationError — result of one attempt.
//! - LoginCoordinator — orchestrates attempts and owns the current identity.
//! - LoginCoordinatorError — why a background attempt could not start.

mod identity;
mod login_coordinator;
mod outcome;
pub mod ports;

pub use self::identity::{Identity, IdentityValidationError};
pub use self::login_coordinator::{LoginCoordinator, LoginCoordinatorError};
pub use self::outcome::{AuthenticationError, AuthenticationOutcome};
