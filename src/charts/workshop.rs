// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The CI/CD workshop chart: namespace, pull secret, API and web front end.

use super::secrets::registry_pull_secret;
use super::Chart;
use crate::config::RegistryConfig;
use crate::constants::{pull_secret, NAMESPACE};
use crate::kubernetes::units::{Cpu, Memory};
use crate::kubernetes::{deployment, namespace, node_port_service, AppSpec, ResourceLimits};

pub const CHART_NAME: &str = "training-cicd";

/// Applications deployed by the workshop, with images pulled from `server`
pub fn workshop_apps(server: &str) -> Vec<AppSpec> {
    vec![
        AppSpec {
            name: "dotnet-api".to_string(),
            image: format!("{}/fnstack/dotnet-api", server),
            port: 8080,
            node_port: 30001,
            replicas: 2,
            env: vec![(
                "ASPNETCORE_ENVIRONMENT".to_string(),
                "Production".to_string(),
            )],
            resources: ResourceLimits {
                cpu_request: Cpu::millis(200),
                cpu_limit: Cpu::millis(1000),
                memory_request: Memory::mebibytes(256),
                memory_limit: Memory::gibibytes(1),
            },
        },
        AppSpec {
            name: "web-app".to_string(),
            image: format!("{}/fnstack/web-app", server),
            port: 3000,
            node_port: 30002,
            replicas: 2,
            env: vec![(
                "NEXT_PUBLIC_API_URL".to_string(),
                "http://dotnet-api-service:8080".to_string(),
            )],
            resources: ResourceLimits {
                cpu_request: Cpu::millis(100),
                cpu_limit: Cpu::millis(500),
                memory_request: Memory::mebibytes(128),
                memory_limit: Memory::mebibytes(512),
            },
        },
    ]
}

pub fn workshop_chart(registry: &RegistryConfig) -> Chart {
    let mut chart = Chart::new(CHART_NAME)
        .with(namespace(NAMESPACE))
        .with(registry_pull_secret(registry));

    for app in workshop_apps(&registry.server) {
        chart = chart
            .with(deployment(&app, NAMESPACE, pull_secret::NAME))
            .with(node_port_service(&app, NAMESPACE));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::tests::make_registry;
    use crate::charts::Resource;

    #[test]
    fn test_workshop_chart_resource_order() {
        let chart = workshop_chart(&make_registry());

        let listing: Vec<(&str, String)> = chart
            .resources()
            .iter()
            .map(|r| (r.kind(), r.name()))
            .collect();

        assert_eq!(
            listing,
            vec![
                ("Namespace", "training-cicd".to_string()),
                ("Secret", "gitea-registry-secret".to_string()),
                ("Deployment", "dotnet-api".to_string()),
                ("Service", "dotnet-api-service".to_string()),
                ("Deployment", "web-app".to_string()),
                ("Service", "web-app-service".to_string()),
            ]
        );
    }

    #[test]
    fn test_workshop_images_use_configured_registry() {
        let apps = workshop_apps("gitea.example.com");

        assert_eq!(apps[0].image, "gitea.example.com/fnstack/dotnet-api");
        assert_eq!(apps[1].image, "gitea.example.com/fnstack/web-app");
    }

    #[test]
    fn test_web_app_points_at_api_service() {
        let apps = workshop_apps("gitea.example.com");
        let api_url = format!("http://{}:{}", apps[0].service_name(), apps[0].port);

        assert_eq!(apps[1].env[0].1, api_url);
    }

    #[test]
    fn test_workshop_node_ports() {
        let chart = workshop_chart(&make_registry());

        let node_ports: Vec<i32> = chart
            .resources()
            .iter()
            .filter_map(|r| match r {
                Resource::Service(svc) => svc.spec.as_ref()?.ports.as_ref()?[0].node_port,
                _ => None,
            })
            .collect();

        assert_eq!(node_ports, vec![30001, 30002]);
    }

    #[test]
    fn test_namespaced_resources_live_in_workshop_namespace() {
        let chart = workshop_chart(&make_registry());

        for resource in &chart.resources()[1..] {
            let value = serde_json::to_value(resource).unwrap();
            assert_eq!(value["metadata"]["namespace"], NAMESPACE, "{}", resource.name());
        }
    }
}
