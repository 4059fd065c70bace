// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The fixed walkthrough: an ordered plan of steps and the driver that runs it.

pub mod gate;
pub mod runner;

pub use gate::{Gate, NoPause, StdinGate};
pub use runner::{RunOptions, Runner};

use crate::constants::{names, workload};
use crate::kubernetes::deployments::demo_selector;
use crate::kubernetes::DeploymentChange;

/// Names of the objects the walkthrough creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoNames {
    pub default_namespace: String,
    pub scratch_namespace: String,
    pub deployment: String,
    pub service: String,
}

impl Default for DemoNames {
    fn default() -> Self {
        Self {
            default_namespace: names::DEFAULT_NAMESPACE.to_string(),
            scratch_namespace: names::SCRATCH_NAMESPACE.to_string(),
            deployment: names::DEPLOYMENT.to_string(),
            service: names::SERVICE.to_string(),
        }
    }
}

/// A single operation against the cluster, or a line of narration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Section(String),
    CreateDeployment {
        namespace: String,
        name: String,
        desired: DeploymentChange,
    },
    ListDeployments {
        namespace: String,
        selector: Option<String>,
    },
    UpdateDeployment {
        namespace: String,
        name: String,
        change: DeploymentChange,
    },
    DeleteDeployment {
        namespace: String,
        name: String,
    },
    CreateNamespace {
        name: String,
    },
    ListNamespaces,
    DeleteNamespace {
        name: String,
    },
    CreateService {
        namespace: String,
        name: String,
    },
    DeleteService {
        namespace: String,
        name: String,
    },
}

/// A step, optionally preceded by a manual pause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub pause: bool,
    pub step: Step,
}

impl Stage {
    pub fn now(step: Step) -> Self {
        Self { pause: false, step }
    }

    pub fn after_pause(step: Step) -> Self {
        Self { pause: true, step }
    }
}

/// The walkthrough: a deployment in the default namespace, then a scratch
/// namespace holding a deployment and a node-port service, all torn down again.
pub fn demo_plan(names: &DemoNames) -> Vec<Stage> {
    let default_ns = &names.default_namespace;
    let scratch_ns = &names.scratch_namespace;
    let initial = DeploymentChange::new(2, workload::INITIAL_IMAGE);

    let delete_deployment_in = |namespace: &String| Step::DeleteDeployment {
        namespace: namespace.clone(),
        name: names.deployment.clone(),
    };
    let list_in = |namespace: &String, selector: Option<String>| Step::ListDeployments {
        namespace: namespace.clone(),
        selector,
    };

    vec![
        Stage::now(Step::Section(
            "Creating first resource in default namespace...".to_string(),
        )),
        Stage::now(Step::CreateDeployment {
            namespace: default_ns.clone(),
            name: names.deployment.clone(),
            desired: initial.clone(),
        }),
        Stage::after_pause(list_in(default_ns, None)),
        Stage::after_pause(Step::UpdateDeployment {
            namespace: default_ns.clone(),
            name: names.deployment.clone(),
            change: DeploymentChange::new(1, workload::UPDATED_IMAGE),
        }),
        Stage::after_pause(list_in(default_ns, None)),
        Stage::after_pause(delete_deployment_in(default_ns)),
        Stage::now(Step::Section("Creating Second Resource".to_string())),
        Stage::now(Step::CreateNamespace {
            name: scratch_ns.clone(),
        }),
        Stage::after_pause(Step::ListNamespaces),
        Stage::now(Step::Section(format!(
            "Creating deployments in namespace {:?}:",
            scratch_ns
        ))),
        Stage::now(Step::CreateDeployment {
            namespace: scratch_ns.clone(),
            name: names.deployment.clone(),
            desired: initial,
        }),
        Stage::after_pause(list_in(scratch_ns, None)),
        Stage::after_pause(Step::UpdateDeployment {
            namespace: scratch_ns.clone(),
            name: names.deployment.clone(),
            change: DeploymentChange::new(5, workload::UPDATED_IMAGE),
        }),
        Stage::now(Step::Section(format!(
            "Creating service in namespace {:?}:",
            scratch_ns
        ))),
        Stage::now(Step::CreateService {
            namespace: scratch_ns.clone(),
            name: names.service.clone(),
        }),
        Stage::after_pause(list_in(scratch_ns, Some(demo_selector()))),
        Stage::after_pause(delete_deployment_in(scratch_ns)),
        Stage::after_pause(Step::DeleteService {
            namespace: scratch_ns.clone(),
            name: names.service.clone(),
        }),
        Stage::after_pause(Step::DeleteNamespace {
            name: scratch_ns.clone(),
        }),
    ]
}
