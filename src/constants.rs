// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Names of the objects the demo creates
pub mod names {
    pub const DEFAULT_NAMESPACE: &str = "default";
    pub const SCRATCH_NAMESPACE: &str = "test-namespace";
    pub const DEPLOYMENT: &str = "demo-deployment";
    pub const SERVICE: &str = "service-np";
}

/// Labels tying the deployment's pods to its selector
pub mod labels {
    pub const APP_KEY: &str = "app";
    pub const APP_VALUE: &str = "demo";
}

/// Pod template of the demo deployment
pub mod workload {
    pub const CONTAINER_NAME: &str = "web";
    pub const PORT_NAME: &str = "http";
    pub const CONTAINER_PORT: i32 = 80;
    pub const INITIAL_IMAGE: &str = "nginx:1.12";
    pub const UPDATED_IMAGE: &str = "nginx:1.13";
}

/// Ports of the node-port service
pub mod service {
    pub const PORT: i32 = 80;
    pub const TARGET_PORT: i32 = 80;
    pub const NODE_PORT: i32 = 31000;
}

/// Conflict retry policy, matching client-go's `retry.DefaultRetry`
pub mod retry {
    pub const STEPS: u32 = 5;
    pub const INITIAL_DELAY_MILLIS: u64 = 10;
    pub const FACTOR: f64 = 1.0;
}

/// Default bound on `--wait-for-deletion`
pub const DELETION_TIMEOUT_SECS: u64 = 60;

pub const PAUSE_PROMPT: &str = "-> Press Return key to continue.";
