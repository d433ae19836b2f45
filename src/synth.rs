// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering charts to manifest files

use crate::charts::{Chart, Resource};
use crate::error::{ManifestError, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Manifest file format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Multi-document YAML stream
    Yaml,
    /// A `v1/List` object
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceList<'a> {
    api_version: &'static str,
    kind: &'static str,
    items: &'a [Resource],
}

/// Render `chart` in `format`
pub fn render(chart: &Chart, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => render_yaml(chart),
        OutputFormat::Json => render_json(chart),
    }
}

fn render_yaml(chart: &Chart) -> Result<String> {
    let documents = chart
        .resources()
        .iter()
        .map(serde_yaml::to_string)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(documents.join("---\n"))
}

fn render_json(chart: &Chart) -> Result<String> {
    let list = ResourceList {
        api_version: "v1",
        kind: "List",
        items: chart.resources(),
    };

    let mut json = serde_json::to_string_pretty(&list)?;
    json.push('\n');
    Ok(json)
}

/// File name a chart is written to, e.g. `training-cicd.k8s.yaml`
pub fn manifest_file_name(chart: &Chart, format: OutputFormat) -> String {
    format!("{}.k8s.{}", chart.name(), format.extension())
}

/// Render `chart` and write it into `outdir`, creating the directory if needed
#[instrument(skip(chart), fields(chart = %chart.name()))]
pub async fn write_chart(chart: &Chart, outdir: &Path, format: OutputFormat) -> Result<PathBuf> {
    let rendered = render(chart, format)?;
    let path = outdir.join(manifest_file_name(chart, format));

    tokio::fs::create_dir_all(outdir)
        .await
        .map_err(|source| ManifestError::WriteError {
            path: outdir.to_path_buf(),
            source,
        })?;

    debug!("Writing {} bytes to {}", rendered.len(), path.display());
    tokio::fs::write(&path, rendered)
        .await
        .map_err(|source| ManifestError::WriteError {
            path: path.clone(),
            source,
        })?;

    info!(
        "Synthesized {} resources to {}",
        chart.resources().len(),
        path.display()
    );
    Ok(path)
}
