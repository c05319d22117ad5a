//! Credential management for Bitget API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the API key.
pub const API_KEY_VAR: &str = "BITGET_API_KEY";
/// Default environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BITGET_API_SECRET";
/// Default environment variable holding the API passphrase.
pub const API_PASSPHRASE_VAR: &str = "BITGET_API_PASSPHRASE";

/// API credentials: key, secret and passphrase.
///
/// The secret is only ever used as the HMAC key. Secret and passphrase are
/// redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    api_secret: SecretString,
    api_passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
            api_passphrase: SecretString::from(api_passphrase.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Get the passphrase sent in the `ACCESS-PASSPHRASE` header.
    pub fn expose_passphrase(&self) -> &str {
        self.api_passphrase.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("api_passphrase", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        api_passphrase: impl Into<String>,
    ) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret, api_passphrase),
        }
    }
}

impl From<Credentials> for StaticCredentials {
    fn from(credentials: Credentials) -> Self {
        Self { credentials }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads `BITGET_API_KEY`, `BITGET_API_SECRET` and `BITGET_API_PASSPHRASE`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if any of the variables is not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR, API_PASSPHRASE_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if any of the variables is not set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, passphrase_var: &str) -> Self {
        let read = |var: &str| {
            std::env::var(var).unwrap_or_else(|_| panic!("Environment variable {var} not set"))
        };

        Self {
            credentials: Credentials::new(read(key_var), read(secret_var), read(passphrase_var)),
        }
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if any of the variables is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(API_KEY_VAR, API_SECRET_VAR, API_PASSPHRASE_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if any of the variables is not set.
    pub fn try_from_env_vars(
        key_var: &str,
        secret_var: &str,
        passphrase_var: &str,
    ) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        let api_passphrase = std::env::var(passphrase_var).ok()?;

        Some(Self {
            credentials: Credentials::new(api_key, api_secret, api_passphrase),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret", "my_passphrase");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("my_passphrase"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret", "passphrase");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
        assert_eq!(creds.expose_passphrase(), "passphrase");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        assert!(
            EnvCredentials::try_from_env_vars(
                "BITGET_TEST_UNSET_KEY",
                "BITGET_TEST_UNSET_SECRET",
                "BITGET_TEST_UNSET_PASSPHRASE",
            )
            .is_none()
        );
    }
}
