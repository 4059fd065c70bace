// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Executes a plan step by step, narrating to a writer and stopping at the first error.

use crate::constants::service;
use crate::error::Result;
use crate::kubernetes::deployments::{
    create_deployment, delete_deployment, demo_deployment, list_deployments, replica_count,
    update_deployment,
};
use crate::kubernetes::namespaces::{create_namespace, delete_namespace, list_namespaces};
use crate::kubernetes::services::{create_service, delete_service, node_port_service};
use crate::kubernetes::Backoff;
use crate::workflow::{Gate, Stage, Step};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Namespace, Service};
use kube::{Api, Client, ResourceExt};
use std::io::Write;
use std::time::Duration;
use tracing::{debug, instrument};

/// Tunables for a run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub backoff: Backoff,
    /// Wait this long for deleted objects to disappear; `None` returns as soon
    /// as the delete is accepted
    pub wait_for_deletion: Option<Duration>,
}

pub struct Runner<G, W> {
    client: Client,
    gate: G,
    out: W,
    options: RunOptions,
}

impl<G: Gate, W: Write> Runner<G, W> {
    pub fn new(client: Client, gate: G, out: W, options: RunOptions) -> Self {
        Self {
            client,
            gate,
            out,
            options,
        }
    }

    /// Run every stage in order; the first failure aborts the rest
    pub async fn run(&mut self, plan: &[Stage]) -> Result<()> {
        for (index, stage) in plan.iter().enumerate() {
            if stage.pause {
                self.pause().await?;
            }
            debug!(stage = index, "Running {:?}", stage.step);
            self.execute(&stage.step).await?;
        }
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.out
    }

    async fn pause(&mut self) -> Result<()> {
        let Some(prompt) = self.gate.prompt() else {
            return Ok(());
        };
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.gate.wait().await?;
        writeln!(self.out)?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn execute(&mut self, step: &Step) -> Result<()> {
        let wait = self.options.wait_for_deletion;

        match step {
            Step::Section(text) => {
                writeln!(self.out, "{}", text)?;
            }
            Step::CreateDeployment {
                namespace,
                name,
                desired,
            } => {
                writeln!(self.out, "Creating deployment...")?;
                let created =
                    create_deployment(&self.deployments(namespace), &demo_deployment(name, desired))
                        .await?;
                writeln!(self.out, "Created deployment {:?}.", created.name_any())?;
            }
            Step::ListDeployments {
                namespace,
                selector,
            } => {
                match selector {
                    Some(selector) => {
                        writeln!(self.out, "{}", selector)?;
                        writeln!(
                            self.out,
                            "Listing deployments using label selector in namespace {:?}:",
                            namespace
                        )?;
                    }
                    None => {
                        writeln!(self.out, "Listing deployments in namespace {:?}:", namespace)?;
                    }
                }
                let deployments =
                    list_deployments(&self.deployments(namespace), selector.as_deref()).await?;
                for d in &deployments {
                    writeln!(self.out, " * {} ({} replicas)", d.name_any(), replica_count(d))?;
                }
            }
            Step::UpdateDeployment {
                namespace,
                name,
                change,
            } => {
                writeln!(self.out, "Updating deployment...")?;
                update_deployment(&self.deployments(namespace), name, change, &self.options.backoff)
                    .await?;
                writeln!(self.out, "Updated deployment...")?;
            }
            Step::DeleteDeployment { namespace, name } => {
                writeln!(self.out, "Deleting deployment...")?;
                delete_deployment(&self.deployments(namespace), name, wait).await?;
                writeln!(self.out, "Deleted deployment.")?;
            }
            Step::CreateNamespace { name } => {
                writeln!(self.out, "Creating namespace...")?;
                let created = create_namespace(&self.namespaces(), name).await?;
                writeln!(self.out, "Created namespace {:?}.", created.name_any())?;
            }
            Step::ListNamespaces => {
                writeln!(self.out, "Listing Namespaces")?;
                for ns in list_namespaces(&self.namespaces()).await? {
                    writeln!(self.out, "{}", ns.name_any())?;
                }
            }
            Step::DeleteNamespace { name } => {
                writeln!(self.out, "Deleting Namespace...")?;
                delete_namespace(&self.namespaces(), name, wait).await?;
                writeln!(self.out, "Deleted Namespace")?;
            }
            Step::CreateService { namespace, name } => {
                writeln!(self.out, "Creating service")?;
                let desired =
                    node_port_service(name, service::PORT, service::TARGET_PORT, service::NODE_PORT);
                let created = create_service(&self.services(namespace), &desired).await?;
                writeln!(self.out, "Created service {:?}.", created.name_any())?;
            }
            Step::DeleteService { namespace, name } => {
                writeln!(self.out, "Deleting Service...")?;
                delete_service(&self.services(namespace), name, wait).await?;
                writeln!(self.out, "Deleted Service")?;
            }
        }

        Ok(())
    }

    fn deployments(&self, namespace: &str) -> Api<Deployment> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn services(&self, namespace: &str) -> Api<Service> {
        Api::namespaced(self.client.clone(), namespace)
    }

    fn namespaces(&self) -> Api<Namespace> {
        Api::all(self.client.clone())
    }
}
