// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Foreground deletion, optionally waiting until the object is gone

use crate::error::{DemoError, Result};
use kube::{api::DeleteParams, Api, Resource, ResourceExt};
use kube_runtime::wait::{await_condition, conditions};
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// Delete `name` with foreground propagation so dependents go first.
///
/// A missing object is an error. With `wait` set, block until the API server
/// has actually removed the object, failing after the given duration.
#[instrument(skip(api))]
pub async fn delete_foreground<K>(
    api: &Api<K>,
    kind: &'static str,
    name: &str,
    wait: Option<Duration>,
) -> Result<()>
where
    K: Resource + Clone + DeserializeOwned + Debug + Send + 'static,
{
    let response = api.delete(name, &DeleteParams::foreground()).await?;
    info!("Deletion of {} {} accepted", kind, name);

    let Some(limit) = wait else {
        return Ok(());
    };

    let Some(uid) = response.left().and_then(|obj| obj.uid()) else {
        debug!("{} {} was removed immediately", kind, name);
        return Ok(());
    };

    info!("Waiting up to {:?} for {} {} to be removed", limit, kind, name);
    timeout(limit, await_condition(api.clone(), name, conditions::is_deleted(&uid)))
        .await
        .map_err(|_| DemoError::DeletionTimeout {
            kind,
            name: name.to_string(),
            timeout: limit,
        })??;

    info!("{} {} is gone", kind, name);
    Ok(())
}
