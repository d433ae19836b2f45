// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line interface

use crate::charts::ChartSelection;
use crate::synth::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Synthesize and apply the CI/CD workshop Kubernetes manifests
#[derive(Parser, Debug)]
#[command(name = "workshop-manifests", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write manifests to the output directory
    Synth {
        #[arg(long, value_enum, default_value_t = ChartSelection::All)]
        chart: ChartSelection,

        /// Output directory
        #[arg(short, long, default_value = "dist")]
        output: PathBuf,

        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// Server-side apply the manifests to the current kubeconfig context
    Apply {
        #[arg(long, value_enum, default_value_t = ChartSelection::All)]
        chart: ChartSelection,
    },
}
