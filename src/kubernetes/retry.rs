// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Optimistic-concurrency retry for read-modify-write updates

use crate::constants::retry::{FACTOR, INITIAL_DELAY_MILLIS, STEPS};
use crate::error::{DemoError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Bounded backoff between conflicting attempts
#[derive(Debug, Clone, PartialEq)]
pub struct Backoff {
    /// Maximum number of attempts
    pub steps: u32,
    /// Delay after the first conflict
    pub duration: Duration,
    /// Multiplier applied to the delay after each conflict
    pub factor: f64,
    /// Upper bound on a single delay
    pub cap: Option<Duration>,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            steps: STEPS,
            duration: Duration::from_millis(INITIAL_DELAY_MILLIS),
            factor: FACTOR,
            cap: None,
        }
    }
}

impl Backoff {
    /// Delay before attempt `attempt + 1`, counting from zero
    pub fn delay(&self, attempt: u32) -> Duration {
        let delay = self.duration.mul_f64(self.factor.powi(attempt as i32));
        match self.cap {
            Some(cap) => delay.min(cap),
            None => delay,
        }
    }
}

/// Run `op` until it succeeds, fails with anything but a write conflict, or
/// the backoff runs out of steps.
///
/// Each attempt must fetch the object afresh so a retried update is always
/// computed from the latest stored state.
pub async fn retry_on_conflict<T, F, Fut>(name: &str, backoff: &Backoff, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let steps = backoff.steps.max(1);
    let mut attempt = 0;

    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_conflict() => {
                attempt += 1;
                if attempt >= steps {
                    warn!("Giving up on {} after {} conflicting attempts", name, attempt);
                    return Err(DemoError::ConflictRetriesExhausted {
                        name: name.to_string(),
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
                let delay = backoff.delay(attempt - 1);
                debug!("Conflict updating {}, retrying in {:?}", name, delay);
                sleep(delay).await;
            }
            Err(e) => return Err(e),
        }
    }
}
