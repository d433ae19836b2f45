// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Building and encoding `.dockerconfigjson` payloads.
//!
//! The encoded document is the value Kubernetes expects under the
//! `.dockerconfigjson` key of a `kubernetes.io/dockerconfigjson` secret.

use crate::error::{ManifestError, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One registry login entry. `auth` is always derived from the username and password.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(try_from = "RawCredential")]
pub struct RegistryCredential {
    username: String,
    password: String,
    email: String,
    auth: String,
}

impl RegistryCredential {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        let username = username.into();
        let password = password.into();
        let auth = general_purpose::STANDARD.encode(format!("{}:{}", username, password));

        RegistryCredential {
            username,
            password,
            email: email.into(),
            auth,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Base64 of `username:password`
    pub fn auth(&self) -> &str {
        &self.auth
    }
}

/// Wire form of a credential. `email` is optional in the wild, `auth` must agree
/// with the username and password when present.
#[derive(Deserialize)]
struct RawCredential {
    username: String,
    password: String,
    #[serde(default)]
    email: String,
    auth: Option<String>,
}

impl TryFrom<RawCredential> for RegistryCredential {
    type Error = String;

    fn try_from(raw: RawCredential) -> std::result::Result<Self, Self::Error> {
        let credential = RegistryCredential::new(raw.username, raw.password, raw.email);
        match raw.auth {
            Some(auth) if auth != credential.auth => Err(format!(
                "auth field for user {:?} does not match its username and password",
                credential.username
            )),
            _ => Ok(credential),
        }
    }
}

/// Docker client config document, keyed by registry server
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DockerConfigDocument {
    auths: BTreeMap<String, RegistryCredential>,
}

impl DockerConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a login for `server`, replacing any earlier entry for the same server
    pub fn with_registry(mut self, server: impl Into<String>, credential: RegistryCredential) -> Self {
        self.auths.insert(server.into(), credential);
        self
    }

    pub fn auths(&self) -> &BTreeMap<String, RegistryCredential> {
        &self.auths
    }

    /// Compact JSON text of the document
    pub fn to_json(&self) -> String {
        // String-keyed maps of plain strings cannot fail to serialize.
        serde_json::to_string(self).expect("docker config document serializes to JSON")
    }

    /// Base64 of the JSON text
    pub fn encode(&self) -> String {
        general_purpose::STANDARD.encode(self.to_json())
    }
}

/// Encode a single-registry `.dockerconfigjson` payload.
///
/// Total over all inputs: empty strings produce a well-formed document.
pub fn encode(server: &str, username: &str, password: &str, email: &str) -> String {
    DockerConfigDocument::new()
        .with_registry(server, RegistryCredential::new(username, password, email))
        .encode()
}

/// Decode a payload produced by [`encode`] back into its document
pub fn decode(encoded: &str) -> Result<DockerConfigDocument> {
    let json = general_purpose::STANDARD.decode(encoded)?;
    serde_json::from_slice(&json).map_err(ManifestError::InvalidDockerConfig)
}
