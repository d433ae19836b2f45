// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply of synthesized charts

use crate::charts::{Chart, Resource};
use crate::constants::{FIELD_MANAGER, NAMESPACE};
use crate::error::Result;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument};

/// Apply every resource of `chart`, in chart order
#[instrument(skip(client, chart), fields(chart = %chart.name()))]
pub async fn apply_chart(client: &Client, chart: &Chart) -> Result<()> {
    let pp = PatchParams::apply(FIELD_MANAGER).force();

    for resource in chart.resources() {
        debug!("Applying {} {}", resource.kind(), resource.name());
        match resource {
            Resource::Namespace(ns) => apply_object(Api::all(client.clone()), ns, &pp).await?,
            Resource::Secret(secret) => {
                apply_object(namespaced_api(client, secret), secret, &pp).await?
            }
            Resource::Deployment(deployment) => {
                apply_object(namespaced_api(client, deployment), deployment, &pp).await?
            }
            Resource::Service(service) => {
                apply_object(namespaced_api(client, service), service, &pp).await?
            }
        }
    }

    info!(
        "Applied {} resources from chart {}",
        chart.resources().len(),
        chart.name()
    );
    Ok(())
}

fn namespaced_api<K>(client: &Client, object: &K) -> Api<K>
where
    K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
    <K as kube::Resource>::DynamicType: Default,
{
    let namespace = object.namespace().unwrap_or_else(|| NAMESPACE.to_string());
    Api::namespaced(client.clone(), &namespace)
}

async fn apply_object<K>(api: Api<K>, object: &K, pp: &PatchParams) -> Result<()>
where
    K: kube::Resource + Clone + DeserializeOwned + Serialize + Debug,
{
    let name = object.name_any();
    api.patch(&name, pp, &Patch::Apply(object)).await?;
    Ok(())
}
