//! Domain ports and supporting types for the hexagonal boundary.

mod authentication_service;
mod identity_store;

#[cfg(test)]
pub(crate) use authentication_service::MockAuthenticationService;
pub use authentication_service::AuthenticationService;
#[cfg(test)]
pub(crate) use identity_store::MockIdentityStore;
pub use identity_store::IdentityStore;
