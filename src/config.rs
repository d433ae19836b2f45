// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{defaults, env as vars};
use crate::error::{ManifestError, Result};
use std::env;
use tracing::warn;

/// Registry login used for the image pull secret
#[derive(Clone)]
pub struct RegistryConfig {
    pub server: String,
    pub username: String,
    pub password: String,
    pub email: String,
}

impl std::fmt::Debug for RegistryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistryConfig")
            .field("server", &self.server)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// Synthesis configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub registry: RegistryConfig,
    /// Fail instead of falling back to placeholder credentials
    pub require_credentials: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let require_credentials: bool = get(vars::REQUIRE_CREDENTIALS)
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        let credential = |key: &str, placeholder: &str| -> Result<String> {
            match get(key) {
                Some(value) => Ok(value),
                None if require_credentials => Err(ManifestError::MissingCredential(key.to_string())),
                None => {
                    warn!(
                        "{} not set, using placeholder value; the generated pull secret will not authenticate",
                        key
                    );
                    Ok(placeholder.to_string())
                }
            }
        };

        let registry = RegistryConfig {
            server: get(vars::REGISTRY_SERVER).unwrap_or(defaults::REGISTRY_SERVER.to_string()),
            username: credential(vars::USERNAME, defaults::USERNAME)?,
            password: credential(vars::TOKEN, defaults::TOKEN)?,
            email: credential(vars::EMAIL, defaults::EMAIL)?,
        };

        Ok(Config {
            registry,
            require_credentials,
        })
    }
}
