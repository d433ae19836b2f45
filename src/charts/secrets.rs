// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The standalone registry secret chart

use super::Chart;
use crate::config::RegistryConfig;
use crate::constants::{pull_secret, NAMESPACE};
use crate::kubernetes::docker_config_secret;
use crate::registry::{DockerConfigDocument, RegistryCredential};
use k8s_openapi::api::core::v1::Secret;

pub const CHART_NAME: &str = "secrets";

/// The image pull secret for the configured registry
pub fn registry_pull_secret(registry: &RegistryConfig) -> Secret {
    let document = DockerConfigDocument::new().with_registry(
        registry.server.as_str(),
        RegistryCredential::new(
            registry.username.as_str(),
            registry.password.as_str(),
            registry.email.as_str(),
        ),
    );

    docker_config_secret(pull_secret::NAME, NAMESPACE, &document)
}

/// Chart containing only the registry pull secret
pub fn secrets_chart(registry: &RegistryConfig) -> Chart {
    Chart::new(CHART_NAME).with(registry_pull_secret(registry))
}
