//! Authentication settings loaded via OrthoConfig.
//!
//! These settings drive [`StaticAuthenticationService`], the stock
//! authentication adapter. Values come from CLI arguments, configuration
//! files, or `LOGIN_AUTH_*` environment variables.
//!
//! [`StaticAuthenticationService`]: crate::outbound::StaticAuthenticationService

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "password";

/// Errors raised while validating [`AuthenticationSettings`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthenticationSettingsError {
    /// Credential mode is active but the configured username is blank.
    #[error("login username must not be empty unless accept_all is enabled")]
    EmptyUsername,
}

/// Configuration values for the static authentication adapter.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN_AUTH")]
pub struct AuthenticationSettings {
    /// Authenticate every identity regardless of credentials.
    #[ortho_config(default = false)]
    pub accept_all: bool,
    /// Username accepted in credential mode.
    pub username: Option<String>,
    /// Password accepted in credential mode.
    pub password: Option<String>,
}

impl AuthenticationSettings {
    /// Return the configured username, falling back to the default.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or(DEFAULT_USERNAME)
    }

    /// Return the configured password, falling back to the default.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or(DEFAULT_PASSWORD)
    }

    /// Check that the settings describe a usable adapter.
    pub fn validate(&self) -> Result<(), AuthenticationSettingsError> {
        if !self.accept_all && self.username().trim().is_empty() {
            return Err(AuthenticationSettingsError::EmptyUsername);
        }
        Ok(())
    }
}
