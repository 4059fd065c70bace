// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from a kubeconfig file, a master URL or the in-cluster environment

use crate::config::Config;
use crate::error::{DemoError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Create an authenticated Kubernetes client for the configured cluster
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let client_config = load_client_config(config).await?;
    info!("Using API server {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create client: {}", e)))
}

/// Resolve the client configuration the way `--kubeconfig` and `--master` combine:
/// a kubeconfig file wins, `--master` overrides its server, and with neither
/// the in-cluster service account is used.
pub async fn load_client_config(config: &Config) -> Result<KConfig> {
    match (&config.kubeconfig, &config.master) {
        (Some(path), master) => {
            let mut client_config =
                load_kubeconfig_file(path, config.context.as_deref()).await?;
            if let Some(master) = master {
                debug!(
                    "Overriding cluster URL {} with {}",
                    client_config.cluster_url, master
                );
                client_config.cluster_url = parse_master(master)?;
            }
            Ok(client_config)
        }
        (None, Some(master)) => Ok(KConfig::new(parse_master(master)?)),
        (None, None) => {
            warn!("Neither --kubeconfig nor --master was specified. Using the inClusterConfig.");
            KConfig::incluster().map_err(|e| {
                DemoError::KubeconfigError(format!("Failed to load in-cluster config: {}", e))
            })
        }
    }
}

async fn load_kubeconfig_file(path: &Path, context: Option<&str>) -> Result<KConfig> {
    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        DemoError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    create_config_from_kubeconfig(&kubeconfig, context).await
}

/// Build a client configuration from a kubeconfig string
async fn create_config_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<KConfig> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    KConfig::from_custom_kubeconfig(kubeconfig_parsed, &options)
        .await
        .map_err(|e| DemoError::KubeconfigError(format!("Failed to create config: {}", e)))
}

fn parse_master(master: &str) -> Result<http::Uri> {
    master
        .parse()
        .map_err(|e| DemoError::KubeconfigError(format!("Invalid master URL {}: {}", master, e)))
}
