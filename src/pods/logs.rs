// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod log reading and follow-mode streaming.
//!
//! Snapshot reads parse the server's line timestamps; follow-mode
//! opens one stream per container and forwards lines into a shared
//! channel.

use crate::constants::logs as log_constants;
use crate::error::{HelmsmanError, Result};
use crate::session::Session;
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use futures::{AsyncBufReadExt, TryStreamExt};
use k8s_openapi::api::core::v1::Pod;
use kube::api::LogParams;
use kube::Api;
use serde::Serialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{instrument, warn};

/// Local-offset timestamps, e.g. `2024-01-01T10:00:00.123+00:00`
const OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%:z";
/// Zone-letter timestamps, e.g. `2024-01-01T10:00:00.123Z`
const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// One line from a snapshot log read. A line whose prefix matches
/// neither timestamp format keeps its full text and a `None` timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub line: String,
}

/// One line delivered by a follow-mode stream
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogRecord {
    pub container: String,
    pub line: String,
}

/// Parse a single log line, trying the local-offset format first and
/// the zone-letter format second.
pub fn parse_log_line(line: &str) -> LogEntry {
    if let Some((prefix, rest)) = line.split_once(' ') {
        if let Ok(ts) = DateTime::parse_from_str(prefix, OFFSET_FORMAT) {
            return LogEntry {
                timestamp: Some(ts),
                line: rest.to_string(),
            };
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(prefix, UTC_FORMAT) {
            return LogEntry {
                timestamp: Some(naive.and_utc().fixed_offset()),
                line: rest.to_string(),
            };
        }
    }
    LogEntry {
        timestamp: None,
        line: line.to_string(),
    }
}

impl Session {
    /// Snapshot read of a pod's logs with timestamps. An empty log body
    /// is a distinct failure from a transport error.
    #[instrument(skip(self))]
    pub async fn pod_logs(&self, pod_name: &str, namespace: Option<&str>) -> Result<Vec<LogEntry>> {
        let pods: Api<Pod> = self.namespaced(namespace);
        let params = LogParams {
            timestamps: true,
            ..Default::default()
        };
        let raw = pods
            .logs(pod_name, &params)
            .await
            .map_err(HelmsmanError::pod_not_found(pod_name))?;

        if raw.is_empty() {
            return Err(HelmsmanError::NoLogs(pod_name.to_string()));
        }
        Ok(raw.lines().map(parse_log_line).collect())
    }

    /// Open a follow-mode log stream for every container of the pod,
    /// forwarding lines into `sink`. Returns once all per-container
    /// setups have been attempted; a single container's setup failure
    /// is logged and does not abort its siblings.
    #[instrument(skip(self, sink))]
    pub async fn stream_logs(
        &self,
        pod_name: &str,
        namespace: Option<&str>,
        sink: mpsc::Sender<LogRecord>,
    ) -> Result<Vec<JoinHandle<()>>> {
        let pods: Api<Pod> = self.namespaced(namespace);
        let pod = pods
            .get(pod_name)
            .await
            .map_err(HelmsmanError::pod_not_found(pod_name))?;
        let containers = pod.spec.map(|spec| spec.containers).unwrap_or_default();

        let setups = containers.into_iter().map(|container| {
            let pods = pods.clone();
            let sink = sink.clone();
            let pod_name = pod_name.to_string();
            async move {
                let params = LogParams {
                    container: Some(container.name.clone()),
                    follow: true,
                    since_seconds: Some(log_constants::LOOKBACK_SECS),
                    timestamps: true,
                    ..Default::default()
                };
                match pods.log_stream(&pod_name, &params).await {
                    Ok(stream) => {
                        Some(tokio::spawn(forward(container.name, Box::pin(stream), sink)))
                    }
                    Err(e) => {
                        warn!(
                            "Failed to open log stream for {}/{}: {}",
                            pod_name, container.name, e
                        );
                        None
                    }
                }
            }
        });

        let handles = futures::future::join_all(setups)
            .await
            .into_iter()
            .flatten()
            .collect();
        Ok(handles)
    }
}

async fn forward(
    container: String,
    stream: impl futures::AsyncBufRead + Unpin,
    sink: mpsc::Sender<LogRecord>,
) {
    let mut lines = stream.lines();
    loop {
        match lines.try_next().await {
            Ok(Some(line)) => {
                let record = LogRecord {
                    container: container.clone(),
                    line,
                };
                if sink.send(record).await.is_err() {
                    break;
                }
            }
            Ok(None) => break,
            Err(e) => {
                warn!("Log stream for container {} failed: {}", container, e);
                break;
            }
        }
    }
}
