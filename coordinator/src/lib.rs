//! Login coordination core.
//!
//! A [`LoginCoordinator`](domain::LoginCoordinator) takes an
//! [`Identity`](domain::Identity), asks an
//! [`AuthenticationService`](domain::ports::AuthenticationService) to verify
//! it, remembers the identity on success, forwards it to an optional
//! [`IdentityStore`](domain::ports::IdentityStore), and signals completion.
//!
//! The crate is laid out hexagonally: `domain` holds the types, ports and the
//! coordinator; `outbound` holds stock adapters; `config` holds the settings
//! those adapters are built from.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use login_coordinator::domain::{Identity, LoginCoordinator};
//! use login_coordinator::domain::ports::IdentityStore;
//! use login_coordinator::outbound::{InMemoryIdentityStore, StaticAuthenticationService};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let coordinator = Arc::new(LoginCoordinator::new(Arc::new(
//!     StaticAuthenticationService::accept_all(),
//! )));
//! let store = Arc::new(InMemoryIdentityStore::new());
//! coordinator.attach_identity_store(&store);
//!
//! coordinator
//!     .attempt_login(Identity::new("Hoang", "Hoang"), |_| {})
//!     .expect("called inside a runtime")
//!     .await
//!     .expect("attempt finishes");
//!
//! assert!(store.contains_name("Hoang"));
//! # });
//! ```

pub mod config;
pub mod domain;
pub mod outbound;
