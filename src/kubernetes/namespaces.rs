// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace creation, listing and deletion

use crate::error::Result;
use crate::kubernetes::deletion::delete_foreground;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub fn demo_namespace(name: &str) -> Namespace {
    Namespace {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Create a namespace; fails if it already exists
#[instrument(skip(api))]
pub async fn create_namespace(api: &Api<Namespace>, name: &str) -> Result<Namespace> {
    let created = api
        .create(&PostParams::default(), &demo_namespace(name))
        .await?;
    info!("Namespace {} created successfully", created.name_any());
    Ok(created)
}

#[instrument(skip(api))]
pub async fn list_namespaces(api: &Api<Namespace>) -> Result<Vec<Namespace>> {
    let list = api.list(&ListParams::default()).await?;
    debug!("Listed {} namespaces", list.items.len());
    Ok(list.items)
}

/// Delete a namespace together with everything in it
#[instrument(skip(api))]
pub async fn delete_namespace(api: &Api<Namespace>, name: &str, wait: Option<Duration>) -> Result<()> {
    delete_foreground(api, "Namespace", name, wait).await
}
