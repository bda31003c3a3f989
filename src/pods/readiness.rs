// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod readiness polling.
//!
//! Polls pod status at a fixed interval until the pod is running, a
//! terminal state is observed, or the caller's deadline expires.

use crate::constants::poll;
use crate::error::{HelmsmanError, Result};
use crate::session::Session;
use crate::types::status::PodStatusSnapshot;
use k8s_openapi::api::core::v1::Pod;
use kube::{api::ListParams, Api};
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, instrument};

/// Polling knobs for the readiness wait
#[derive(Debug, Clone)]
pub struct WaitOptions {
    /// Time between status fetches
    pub interval: Duration,
    /// Overall bound on the wait. `None` polls until a terminal state,
    /// matching the classic behavior; callers wanting an abort signal
    /// set a deadline.
    pub deadline: Option<Duration>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        WaitOptions {
            interval: Duration::from_millis(poll::INTERVAL_MS),
            deadline: None,
        }
    }
}

impl Session {
    /// Wait until the named pod is running. Fails immediately when a
    /// terminal state (Succeeded, Failed, or a pending deletion) is
    /// observed, and on any transport error.
    #[instrument(skip(self, options))]
    pub async fn wait_for_pod_ready(
        &self,
        name: &str,
        namespace: Option<&str>,
        options: &WaitOptions,
    ) -> Result<()> {
        let pods: Api<Pod> = self.namespaced(namespace);
        let started = Instant::now();

        loop {
            if let Some(deadline) = options.deadline {
                if started.elapsed() >= deadline {
                    return Err(HelmsmanError::DeadlineExceeded {
                        pod: name.to_string(),
                        waited: started.elapsed(),
                    });
                }
            }

            let pod = pods
                .get_status(name)
                .await
                .map_err(HelmsmanError::pod_not_found(name))?;
            let snapshot = PodStatusSnapshot::from_pod(&pod);

            if snapshot.is_ready() {
                debug!("Pod {} is ready", name);
                return Ok(());
            }
            if snapshot.is_terminal() {
                return Err(HelmsmanError::TerminalState {
                    pod: name.to_string(),
                    state: snapshot.state_label(),
                });
            }

            debug!(
                "Pod {} in phase {}, polling again in {:?}",
                name, snapshot.phase, options.interval
            );
            tokio::time::sleep(options.interval).await;
        }
    }

    /// Resolve a short pod name by substring match and wait for the
    /// matched pod. Candidate names are sorted so a multi-match always
    /// picks the same pod. Accepts a prefetched pod list to avoid
    /// re-listing on every call.
    pub async fn wait_for_required_pod(
        &self,
        short_name: &str,
        candidates: Option<&[Pod]>,
        namespace: Option<&str>,
        options: &WaitOptions,
    ) -> Result<()> {
        let fetched;
        let pods = match candidates {
            Some(list) => list,
            None => {
                let api: Api<Pod> = self.namespaced(namespace);
                fetched = api.list(&ListParams::default()).await?.items;
                &fetched
            }
        };

        let mut names: Vec<&str> = pods
            .iter()
            .filter_map(|p| p.metadata.name.as_deref())
            .collect();
        names.sort_unstable();

        let full_name = names
            .iter()
            .copied()
            .find(|n| n.contains(short_name))
            .ok_or_else(|| HelmsmanError::PodNotFound(short_name.to_string()))?;

        self.wait_for_pod_ready(full_name, namespace, options).await
    }

    /// Wait for a set of pods in order. The pod list is fetched once;
    /// later pods are not polled until earlier ones are ready, and the
    /// first failure aborts the remaining waits.
    #[instrument(skip(self, options))]
    pub async fn wait_for_pods(
        &self,
        short_names: &[&str],
        namespace: Option<&str>,
        options: &WaitOptions,
    ) -> Result<()> {
        let api: Api<Pod> = self.namespaced(namespace);
        let pods = api.list(&ListParams::default()).await?.items;

        for short_name in short_names {
            self.wait_for_required_pod(short_name, Some(&pods), namespace, options)
                .await?;
        }
        Ok(())
    }
}
