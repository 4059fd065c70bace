// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Update of {name} still conflicting after {attempts} attempts")]
    ConflictRetriesExhausted {
        name: String,
        attempts: u32,
        #[source]
        source: Box<DemoError>,
    },

    #[error("Malformed resource: {0}")]
    MalformedResource(String),

    #[error("Failed waiting for deletion: {0}")]
    WaitError(#[from] kube_runtime::wait::Error),

    #[error("{kind} {name} was not removed within {timeout:?}")]
    DeletionTimeout {
        kind: &'static str,
        name: String,
        timeout: Duration,
    },

    #[error("Console I/O failed: {0}")]
    IoError(#[from] std::io::Error),
}

impl DemoError {
    /// Write rejected because the submitted resourceVersion is stale
    pub fn is_conflict(&self) -> bool {
        self.api_status()
            .is_some_and(|(code, reason)| code == 409 && reason == "Conflict")
    }

    pub fn is_already_exists(&self) -> bool {
        self.api_status()
            .is_some_and(|(code, reason)| code == 409 && reason == "AlreadyExists")
    }

    pub fn is_not_found(&self) -> bool {
        self.api_status().is_some_and(|(code, _)| code == 404)
    }

    fn api_status(&self) -> Option<(u16, &str)> {
        match self {
            DemoError::KubeError(kube::Error::Api(err)) => Some((err.code, err.reason.as_str())),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
