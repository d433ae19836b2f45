// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to render YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to render JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid docker config payload: {0}")]
    InvalidDockerConfig(#[source] serde_json::Error),

    #[error("Invalid base64 payload: {0}")]
    DecodeError(#[from] base64::DecodeError),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing registry credential: {0} is not set")]
    MissingCredential(String),
}

pub type Result<T> = std::result::Result<T, ManifestError>;
