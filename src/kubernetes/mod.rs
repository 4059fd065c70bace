// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and the typed calls the walkthrough makes.

pub mod client;
pub mod deletion;
pub mod deployments;
pub mod namespaces;
pub mod retry;
pub mod services;

pub use client::create_client;
pub use deployments::DeploymentChange;
pub use retry::{retry_on_conflict, Backoff};
