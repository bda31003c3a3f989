// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod status snapshots and colorized status labels

use k8s_openapi::api::core::v1::{ContainerState, Pod};
use serde::Serialize;
use std::fmt;

pub const FG_RED: &str = "\x1b[31m";
pub const FG_GREEN: &str = "\x1b[32m";
pub const FG_LIGHT_GREEN: &str = "\x1b[92m";
pub const RESET: &str = "\x1b[0m";

/// Coarse pod lifecycle phase as reported by the API server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PodPhase {
    Pending,
    Running,
    Succeeded,
    Failed,
    Unknown,
}

impl PodPhase {
    pub fn parse(phase: Option<&str>) -> Self {
        match phase {
            Some("Pending") => PodPhase::Pending,
            Some("Running") => PodPhase::Running,
            Some("Succeeded") => PodPhase::Succeeded,
            Some("Failed") => PodPhase::Failed,
            _ => PodPhase::Unknown,
        }
    }
}

impl fmt::Display for PodPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PodPhase::Pending => "Pending",
            PodPhase::Running => "Running",
            PodPhase::Succeeded => "Succeeded",
            PodPhase::Failed => "Failed",
            PodPhase::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Label for the most recent container state in a pod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContainerStateLabel {
    Running,
    Terminating,
    Waiting,
    Unknown,
}

impl ContainerStateLabel {
    pub fn from_state(state: &ContainerState) -> Self {
        if state.running.is_some() {
            ContainerStateLabel::Running
        } else if state.terminated.is_some() {
            ContainerStateLabel::Terminating
        } else if state.waiting.is_some() {
            ContainerStateLabel::Waiting
        } else {
            ContainerStateLabel::Unknown
        }
    }
}

impl fmt::Display for ContainerStateLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContainerStateLabel::Running => "Running",
            ContainerStateLabel::Terminating => "Terminating",
            ContainerStateLabel::Waiting => "Waiting",
            ContainerStateLabel::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Point-in-time view of a pod's status, recomputed on each poll
#[derive(Debug, Clone, Serialize)]
pub struct PodStatusSnapshot {
    pub pod_name: String,
    pub phase: PodPhase,
    pub last_container_state: ContainerStateLabel,
    /// Set when the pod carries a deletion timestamp
    pub terminating: bool,
}

impl PodStatusSnapshot {
    pub fn from_pod(pod: &Pod) -> Self {
        let pod_name = pod.metadata.name.clone().unwrap_or_default();
        let phase = PodPhase::parse(
            pod.status
                .as_ref()
                .and_then(|s| s.phase.as_deref()),
        );
        let last_container_state = pod
            .status
            .as_ref()
            .and_then(|s| s.container_statuses.as_ref())
            .and_then(|cs| cs.last())
            .and_then(|c| c.state.as_ref())
            .map(ContainerStateLabel::from_state)
            .unwrap_or(ContainerStateLabel::Unknown);
        let terminating = pod.metadata.deletion_timestamp.is_some();

        PodStatusSnapshot {
            pod_name,
            phase,
            last_container_state,
            terminating,
        }
    }

    /// The pod has reached a state the readiness wait treats as success
    pub fn is_ready(&self) -> bool {
        !self.terminating && self.phase == PodPhase::Running
    }

    /// The pod can no longer become ready
    pub fn is_terminal(&self) -> bool {
        self.terminating || matches!(self.phase, PodPhase::Succeeded | PodPhase::Failed)
    }

    /// Human-readable state used in terminal-state errors
    pub fn state_label(&self) -> String {
        if self.terminating {
            "Terminating".to_string()
        } else {
            self.phase.to_string()
        }
    }

    /// Colorized phase label for terminal display
    pub fn colorized_phase(&self) -> String {
        colorize(&self.state_label())
    }

    /// Colorized label of the last container state
    pub fn colorized_container_state(&self) -> String {
        colorize(&self.last_container_state.to_string())
    }
}

/// Colorize a status label the way the status listing renders it
pub fn colorize(status: &str) -> String {
    match status {
        "Running" => format!("{FG_LIGHT_GREEN}{status}{RESET}"),
        "Succeeded" => format!("{FG_GREEN}{status}{RESET}"),
        "Failed" | "Terminating" | "Terminated" => format!("{FG_RED}{status}{RESET}"),
        "" => "Unknown".to_string(),
        other => other.to_string(),
    }
}
