// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Node-port service descriptor and its create/list/delete calls

use crate::error::Result;
use crate::kubernetes::deletion::delete_foreground;
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, ResourceExt,
};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const NODE_PORT_TYPE: &str = "NodePort";

/// Build a `NodePort` service exposing `port` on every node at `node_port`.
///
/// The service carries no selector, so it does not route to any pods.
pub fn node_port_service(name: &str, port: i32, target_port: i32, node_port: i32) -> Service {
    Service {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            ports: Some(vec![ServicePort {
                port,
                target_port: Some(IntOrString::Int(target_port)),
                node_port: Some(node_port),
                ..Default::default()
            }]),
            type_: Some(NODE_PORT_TYPE.to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[instrument(skip(api, service), fields(service = %service.name_any()))]
pub async fn create_service(api: &Api<Service>, service: &Service) -> Result<Service> {
    let created = api.create(&PostParams::default(), service).await?;
    info!("Created service {}", created.name_any());
    Ok(created)
}

#[instrument(skip(api))]
pub async fn list_services(api: &Api<Service>) -> Result<Vec<Service>> {
    let list = api.list(&ListParams::default()).await?;
    debug!("Listed {} services", list.items.len());
    Ok(list.items)
}

#[instrument(skip(api))]
pub async fn delete_service(api: &Api<Service>, name: &str, wait: Option<Duration>) -> Result<()> {
    delete_foreground(api, "Service", name, wait).await
}
