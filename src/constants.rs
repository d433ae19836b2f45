// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Namespace all workshop resources live in
pub const NAMESPACE: &str = "training-cicd";

/// The field manager used for server-side apply
pub const FIELD_MANAGER: &str = "workshop-manifests";

/// Label key used to tie deployments, pods and services together
pub const APP_LABEL: &str = "app";

/// Registry pull secret settings
pub mod pull_secret {
    pub const NAME: &str = "gitea-registry-secret";
    pub const TYPE: &str = "kubernetes.io/dockerconfigjson";
    /// The single data key of a dockerconfigjson secret
    pub const DATA_KEY: &str = ".dockerconfigjson";
}

/// Environment variables read by `Config::from_env`
pub mod env {
    pub const REGISTRY_SERVER: &str = "REGISTRY_SERVER";
    pub const USERNAME: &str = "GITEA_USERNAME";
    pub const TOKEN: &str = "GITEA_TOKEN";
    pub const EMAIL: &str = "GITEA_EMAIL";
    pub const REQUIRE_CREDENTIALS: &str = "REQUIRE_REGISTRY_CREDENTIALS";
}

/// Values substituted when a credential variable is unset or empty
pub mod defaults {
    pub const REGISTRY_SERVER: &str = "gitea.arpce.fnstack.dev";
    pub const USERNAME: &str = "your-username";
    pub const TOKEN: &str = "your-token";
    pub const EMAIL: &str = "your-email@domain.local";
}

/// Deployment rollout settings applied to every workload
pub mod rollout {
    pub const MAX_SURGE: &str = "25%";
    pub const MAX_UNAVAILABLE: &str = "25%";
    pub const PROGRESS_DEADLINE_SECS: i32 = 600;
}
