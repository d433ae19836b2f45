// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Deployment and Service manifests for a single application

use crate::constants::{rollout, APP_LABEL};
use crate::kubernetes::units::{Cpu, Memory};
use k8s_openapi::api::apps::v1::{
    Deployment, DeploymentSpec, DeploymentStrategy, RollingUpdateDeployment,
};
use k8s_openapi::api::core::v1::{
    Container, ContainerPort, EnvVar, LocalObjectReference, PodSecurityContext, PodSpec,
    PodTemplateSpec, ResourceRequirements, SecurityContext, Service, ServicePort, ServiceSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// CPU and memory requests and limits for a container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceLimits {
    pub cpu_request: Cpu,
    pub cpu_limit: Cpu,
    pub memory_request: Memory,
    pub memory_limit: Memory,
}

impl ResourceLimits {
    fn requirements(&self) -> ResourceRequirements {
        ResourceRequirements {
            requests: Some(BTreeMap::from([
                ("cpu".to_string(), self.cpu_request.quantity()),
                ("memory".to_string(), self.memory_request.quantity()),
            ])),
            limits: Some(BTreeMap::from([
                ("cpu".to_string(), self.cpu_limit.quantity()),
                ("memory".to_string(), self.memory_limit.quantity()),
            ])),
            ..Default::default()
        }
    }
}

/// A single-container application exposed through a NodePort service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub name: String,
    pub image: String,
    pub port: u16,
    pub node_port: u16,
    pub replicas: i32,
    pub env: Vec<(String, String)>,
    pub resources: ResourceLimits,
}

impl AppSpec {
    /// Name of the service exposing this app
    pub fn service_name(&self) -> String {
        format!("{}-service", self.name)
    }

    fn labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(APP_LABEL.to_string(), self.name.clone())])
    }

    fn container(&self) -> Container {
        let env = self
            .env
            .iter()
            .map(|(name, value)| EnvVar {
                name: name.clone(),
                value: Some(value.clone()),
                ..Default::default()
            })
            .collect();

        Container {
            name: self.name.clone(),
            image: Some(self.image.clone()),
            image_pull_policy: Some("Always".to_string()),
            ports: Some(vec![ContainerPort {
                container_port: i32::from(self.port),
                ..Default::default()
            }]),
            env: Some(env),
            resources: Some(self.resources.requirements()),
            security_context: Some(SecurityContext {
                run_as_non_root: Some(true),
                read_only_root_filesystem: Some(true),
                allow_privilege_escalation: Some(false),
                privileged: Some(false),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

/// Build the deployment for `app`, pulling images with `pull_secret`
pub fn deployment(app: &AppSpec, namespace: &str, pull_secret: &str) -> Deployment {
    let labels = app.labels();

    let pod_spec = PodSpec {
        containers: vec![app.container()],
        image_pull_secrets: Some(vec![LocalObjectReference {
            name: pull_secret.to_string(),
        }]),
        restart_policy: Some("Always".to_string()),
        automount_service_account_token: Some(false),
        security_context: Some(PodSecurityContext {
            run_as_non_root: Some(true),
            fs_group_change_policy: Some("Always".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    };

    Deployment {
        metadata: ObjectMeta {
            name: Some(app.name.clone()),
            namespace: Some(namespace.to_string()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(app.replicas),
            selector: LabelSelector {
                match_labels: Some(labels.clone()),
                ..Default::default()
            },
            strategy: Some(DeploymentStrategy {
                type_: Some("RollingUpdate".to_string()),
                rolling_update: Some(RollingUpdateDeployment {
                    max_surge: Some(IntOrString::String(rollout::MAX_SURGE.to_string())),
                    max_unavailable: Some(IntOrString::String(
                        rollout::MAX_UNAVAILABLE.to_string(),
                    )),
                }),
            }),
            progress_deadline_seconds: Some(rollout::PROGRESS_DEADLINE_SECS),
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(labels),
                    ..Default::default()
                }),
                spec: Some(pod_spec),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the NodePort service selecting `app`'s pods
pub fn node_port_service(app: &AppSpec, namespace: &str) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(app.service_name()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            type_: Some("NodePort".to_string()),
            selector: Some(app.labels()),
            ports: Some(vec![ServicePort {
                port: i32::from(app.port),
                target_port: Some(IntOrString::Int(i32::from(app.port))),
                node_port: Some(i32::from(app.node_port)),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
