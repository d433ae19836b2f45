// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Charts: named, ordered collections of Kubernetes resources.

pub mod secrets;
pub mod workshop;

pub use secrets::secrets_chart;
pub use workshop::workshop_chart;

use crate::config::RegistryConfig;
use clap::ValueEnum;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Secret, Service};
use kube::ResourceExt;
use serde::Serialize;

/// Any resource a chart can contain
#[derive(Serialize, Clone, Debug)]
#[serde(untagged)]
pub enum Resource {
    Namespace(Namespace),
    Secret(Secret),
    Deployment(Deployment),
    Service(Service),
}

impl Resource {
    pub fn kind(&self) -> &'static str {
        match self {
            Resource::Namespace(_) => "Namespace",
            Resource::Secret(_) => "Secret",
            Resource::Deployment(_) => "Deployment",
            Resource::Service(_) => "Service",
        }
    }

    pub fn name(&self) -> String {
        match self {
            Resource::Namespace(r) => r.name_any(),
            Resource::Secret(r) => r.name_any(),
            Resource::Deployment(r) => r.name_any(),
            Resource::Service(r) => r.name_any(),
        }
    }
}

impl From<Namespace> for Resource {
    fn from(r: Namespace) -> Self {
        Resource::Namespace(r)
    }
}

impl From<Secret> for Resource {
    fn from(r: Secret) -> Self {
        Resource::Secret(r)
    }
}

impl From<Deployment> for Resource {
    fn from(r: Deployment) -> Self {
        Resource::Deployment(r)
    }
}

impl From<Service> for Resource {
    fn from(r: Service) -> Self {
        Resource::Service(r)
    }
}

/// A named set of resources synthesized into one manifest file
#[derive(Clone, Debug)]
pub struct Chart {
    name: String,
    resources: Vec<Resource>,
}

impl Chart {
    pub fn new(name: impl Into<String>) -> Self {
        Chart {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// Append a resource; resources keep insertion order
    pub fn with(mut self, resource: impl Into<Resource>) -> Self {
        self.resources.push(resource.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

/// Which charts to synthesize or apply
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartSelection {
    TrainingCicd,
    Secrets,
    All,
}

impl ChartSelection {
    pub fn build(self, registry: &RegistryConfig) -> Vec<Chart> {
        match self {
            ChartSelection::TrainingCicd => vec![workshop_chart(registry)],
            ChartSelection::Secrets => vec![secrets_chart(registry)],
            ChartSelection::All => vec![workshop_chart(registry), secrets_chart(registry)],
        }
    }
}
