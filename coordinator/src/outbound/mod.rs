//! Outbound adapters implementing the domain ports.

mod memory_identity_store;
mod static_authentication;

pub use memory_identity_store::InMemoryIdentityStore;
pub use static_authentication::StaticAuthenticationService;
