// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workshop_manifests::cli::{Cli, Command};
use workshop_manifests::config::Config;
use workshop_manifests::kubernetes::apply_chart;
use workshop_manifests::synth::write_chart;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "Configuration loaded: registry={}, require_credentials={}",
        config.registry.server, config.require_credentials
    );

    match cli.command {
        Command::Synth {
            chart,
            output,
            format,
        } => {
            for chart in chart.build(&config.registry) {
                write_chart(&chart, &output, format)
                    .await
                    .with_context(|| format!("Failed to synthesize chart {}", chart.name()))?;
            }
        }
        Command::Apply { chart } => {
            let client = Client::try_default().await?;
            info!("Connected to Kubernetes cluster");

            for chart in chart.build(&config.registry) {
                apply_chart(&client, &chart)
                    .await
                    .with_context(|| format!("Failed to apply chart {}", chart.name()))?;
            }
        }
    }

    Ok(())
}
