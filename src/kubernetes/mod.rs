// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes resource builders and server-side apply.

pub mod apply;
pub mod namespaces;
pub mod secrets;
pub mod units;
pub mod workloads;

pub use apply::apply_chart;
pub use namespaces::namespace;
pub use secrets::docker_config_secret;
pub use workloads::{deployment, node_port_service, AppSpec, ResourceLimits};
