// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelmsmanError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Context not found: {0}")]
    ContextNotFound(String),

    #[error("Pod not found: {0}")]
    PodNotFound(String),

    #[error("Pod {pod} has no containers")]
    NoContainers { pod: String },

    #[error("Pod {pod} reached terminal state {state}")]
    TerminalState { pod: String, state: String },

    #[error("Deadline exceeded after {waited:?} waiting for pod {pod}")]
    DeadlineExceeded { pod: String, waited: Duration },

    #[error("No logs found for pod {0}")]
    NoLogs(String),

    #[error("Exec channel error: {0}")]
    Exec(String),

    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl HelmsmanError {
    /// Map a kube API 404 to a resolution error for the named pod,
    /// keeping every other failure as a transport error.
    pub(crate) fn pod_not_found(pod: &str) -> impl FnOnce(kube::Error) -> Self + '_ {
        move |err| match err {
            kube::Error::Api(ref resp) if resp.code == 404 => {
                HelmsmanError::PodNotFound(pod.to_string())
            }
            other => HelmsmanError::Kube(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelmsmanError>;
