// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Demo deployment descriptor and its create/list/update/delete calls

use crate::constants::{labels, workload};
use crate::error::{DemoError, Result};
use crate::kubernetes::deletion::delete_foreground;
use crate::kubernetes::retry::{retry_on_conflict, Backoff};
use k8s_openapi::api::apps::v1::{Deployment, DeploymentSpec};
use k8s_openapi::api::core::v1::{Container, ContainerPort, PodSpec, PodTemplateSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, ResourceExt,
};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Replica count and image the demo drives a deployment to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentChange {
    pub replicas: i32,
    pub image: String,
}

impl DeploymentChange {
    pub fn new(replicas: i32, image: &str) -> Self {
        Self {
            replicas,
            image: image.to_string(),
        }
    }

    /// Apply the change to a freshly fetched deployment
    pub fn apply(&self, deployment: &mut Deployment) -> Result<()> {
        let name = deployment.name_any();
        let spec = deployment.spec.as_mut().ok_or_else(|| {
            DemoError::MalformedResource(format!("Deployment {} has no spec", name))
        })?;

        let container = spec
            .template
            .spec
            .as_mut()
            .and_then(|pod| pod.containers.first_mut())
            .ok_or_else(|| {
                DemoError::MalformedResource(format!("Deployment {} has no containers", name))
            })?;

        container.image = Some(self.image.clone());
        spec.replicas = Some(self.replicas);
        Ok(())
    }
}

/// Labels shared by the selector and the pod template
pub fn demo_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(labels::APP_KEY.to_string(), labels::APP_VALUE.to_string())])
}

/// `app=demo`, the selector matching the demo pods
pub fn demo_selector() -> String {
    format!("{}={}", labels::APP_KEY, labels::APP_VALUE)
}

/// Build the demo deployment: one nginx container exposing port 80.
///
/// The deployment itself carries the demo labels too, so label-selector
/// listings find it.
pub fn demo_deployment(name: &str, desired: &DeploymentChange) -> Deployment {
    Deployment {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            labels: Some(demo_labels()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(desired.replicas),
            selector: LabelSelector {
                match_labels: Some(demo_labels()),
                ..Default::default()
            },
            template: PodTemplateSpec {
                metadata: Some(ObjectMeta {
                    labels: Some(demo_labels()),
                    ..Default::default()
                }),
                spec: Some(PodSpec {
                    containers: vec![Container {
                        name: workload::CONTAINER_NAME.to_string(),
                        image: Some(desired.image.clone()),
                        ports: Some(vec![ContainerPort {
                            name: Some(workload::PORT_NAME.to_string()),
                            protocol: Some("TCP".to_string()),
                            container_port: workload::CONTAINER_PORT,
                            ..Default::default()
                        }]),
                        ..Default::default()
                    }],
                    ..Default::default()
                }),
            },
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Replica count as reported by the API server, which defaults it to 1
pub fn replica_count(deployment: &Deployment) -> i32 {
    deployment
        .spec
        .as_ref()
        .and_then(|s| s.replicas)
        .unwrap_or(1)
}

/// Create a deployment; an existing one with the same name is an error
#[instrument(skip(api, deployment), fields(deployment = %deployment.name_any()))]
pub async fn create_deployment(api: &Api<Deployment>, deployment: &Deployment) -> Result<Deployment> {
    let created = api.create(&PostParams::default(), deployment).await?;
    info!("Created deployment {}", created.name_any());
    Ok(created)
}

/// List deployments, optionally restricted by a label selector
#[instrument(skip(api))]
pub async fn list_deployments(api: &Api<Deployment>, selector: Option<&str>) -> Result<Vec<Deployment>> {
    let params = match selector {
        Some(selector) => ListParams::default().labels(selector),
        None => ListParams::default(),
    };
    let list = api.list(&params).await?;
    debug!("Listed {} deployments", list.items.len());
    Ok(list.items)
}

/// Read-modify-write `change` onto the named deployment, retrying on conflict
#[instrument(skip(api, backoff))]
pub async fn update_deployment(
    api: &Api<Deployment>,
    name: &str,
    change: &DeploymentChange,
    backoff: &Backoff,
) -> Result<Deployment> {
    let updated = retry_on_conflict(name, backoff, move || async move {
        let mut current = api.get(name).await?;
        debug!(
            "Fetched deployment {} at resourceVersion {:?}",
            name,
            current.resource_version()
        );
        change.apply(&mut current)?;
        let updated = api.replace(name, &PostParams::default(), &current).await?;
        Ok::<_, DemoError>(updated)
    })
    .await?;

    info!(
        "Updated deployment {} to {} replicas of {}",
        name, change.replicas, change.image
    );
    Ok(updated)
}

#[instrument(skip(api))]
pub async fn delete_deployment(
    api: &Api<Deployment>,
    name: &str,
    wait: Option<Duration>,
) -> Result<()> {
    delete_foreground(api, "Deployment", name, wait).await
}
