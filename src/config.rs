// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{names, DELETION_TIMEOUT_SECS};
use crate::kubernetes::Backoff;
use crate::workflow::{DemoNames, RunOptions};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Walk through creating, updating and deleting a deployment, a namespace
/// and a node-port service.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Cli {
    /// (optional) absolute path to the kubeconfig file [default: ~/.kube/config]
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current context
    #[arg(long)]
    pub context: Option<String>,

    /// API server URL, overriding the server in the kubeconfig
    #[arg(long)]
    pub master: Option<String>,

    /// Scratch namespace created and deleted by the walkthrough
    #[arg(long, default_value = names::SCRATCH_NAMESPACE)]
    pub namespace: String,

    /// Run every step without waiting for Return
    #[arg(long, env = "KUBEDEMO_NO_PAUSE")]
    pub no_pause: bool,

    /// Block after each delete until the object is gone
    #[arg(long)]
    pub wait_for_deletion: bool,

    /// Seconds to wait for a deleted object to disappear
    #[arg(long, default_value_t = DELETION_TIMEOUT_SECS)]
    pub deletion_timeout: u64,
}

/// Resolved run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file; `None` when no home directory resolves and none was given
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    pub master: Option<String>,
    pub namespace: String,
    pub pause: bool,
    pub wait_for_deletion: Option<Duration>,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Config {
            kubeconfig: cli.kubeconfig.or_else(default_kubeconfig_path),
            context: cli.context,
            master: cli.master,
            namespace: cli.namespace,
            pause: !cli.no_pause,
            wait_for_deletion: cli
                .wait_for_deletion
                .then(|| Duration::from_secs(cli.deletion_timeout)),
        }
    }

    pub fn demo_names(&self) -> DemoNames {
        DemoNames {
            scratch_namespace: self.namespace.clone(),
            ..DemoNames::default()
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            backoff: Backoff::default(),
            wait_for_deletion: self.wait_for_deletion,
        }
    }
}

/// `~/.kube/config`, when a home directory can be resolved
pub fn default_kubeconfig_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kube").join("config"))
}
