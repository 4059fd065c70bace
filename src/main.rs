// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use std::io;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use kubedemo::config::{Cli, Config};
use kubedemo::kubernetes::create_client;
use kubedemo::workflow::{demo_plan, Gate, NoPause, Runner, Stage, StdinGate};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the walkthrough narration
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let config = Config::from_cli(Cli::parse());
    info!(
        "Configuration loaded: kubeconfig={:?} namespace={}",
        config.kubeconfig, config.namespace
    );

    let client = create_client(&config)
        .await
        .context("Failed to connect to the Kubernetes cluster")?;

    let plan = demo_plan(&config.demo_names());
    if config.pause {
        run(client, StdinGate::new(), &config, &plan).await
    } else {
        run(client, NoPause, &config, &plan).await
    }
}

async fn run<G: Gate>(client: Client, gate: G, config: &Config, plan: &[Stage]) -> Result<()> {
    let mut runner = Runner::new(client, gate, io::stdout(), config.run_options());
    runner.run(plan).await.context("Walkthrough aborted")?;
    info!("Walkthrough complete");
    Ok(())
}
