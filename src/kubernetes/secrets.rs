// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Image pull secret manifests

use crate::constants::pull_secret;
use crate::registry::DockerConfigDocument;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Build a `kubernetes.io/dockerconfigjson` secret holding `document`.
///
/// `data` carries the raw JSON; the API representation base64-encodes it,
/// so the serialized value equals `document.encode()`.
pub fn docker_config_secret(name: &str, namespace: &str, document: &DockerConfigDocument) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        type_: Some(pull_secret::TYPE.to_string()),
        data: Some(BTreeMap::from([(
            pull_secret::DATA_KEY.to_string(),
            ByteString(document.to_json().into_bytes()),
        )])),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{decode, encode, RegistryCredential};

    fn make_document() -> DockerConfigDocument {
        DockerConfigDocument::new().with_registry(
            "gitea.example.com",
            RegistryCredential::new("alice", "tok123", "a@example.com"),
        )
    }

    #[test]
    fn test_docker_config_secret_metadata() {
        let secret = docker_config_secret("pull", "training-cicd", &make_document());

        assert_eq!(secret.metadata.name.as_deref(), Some("pull"));
        assert_eq!(secret.metadata.namespace.as_deref(), Some("training-cicd"));
        assert_eq!(secret.type_.as_deref(), Some(pull_secret::TYPE));
    }

    #[test]
    fn test_docker_config_secret_has_single_data_key() {
        let secret = docker_config_secret("pull", "training-cicd", &make_document());

        let data = secret.data.unwrap();
        assert_eq!(data.len(), 1);
        assert!(data.contains_key(pull_secret::DATA_KEY));
    }

    #[test]
    fn test_serialized_payload_equals_encoded_document() {
        let secret = docker_config_secret("pull", "training-cicd", &make_document());
        let value = serde_json::to_value(&secret).unwrap();

        let payload = value["data"][pull_secret::DATA_KEY].as_str().unwrap();
        assert_eq!(
            payload,
            encode("gitea.example.com", "alice", "tok123", "a@example.com")
        );
        assert_eq!(decode(payload).unwrap(), make_document());
    }
}
