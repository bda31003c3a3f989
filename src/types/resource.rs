// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The closed set of resource kinds the facade can delete

use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespaced (plus the namespace kind itself) resources the delete
/// dispatch handles. Matched exhaustively, so adding a variant forces
/// every dispatch site to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKind {
    Pod,
    Namespace,
    Deployment,
    DaemonSet,
    StatefulSet,
    Service,
    Secret,
    ConfigMap,
    ServiceAccount,
    Job,
    CronJob,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceKind::Pod => "pods",
            ResourceKind::Namespace => "namespaces",
            ResourceKind::Deployment => "deployments",
            ResourceKind::DaemonSet => "daemonsets",
            ResourceKind::StatefulSet => "statefulsets",
            ResourceKind::Service => "services",
            ResourceKind::Secret => "secrets",
            ResourceKind::ConfigMap => "configmaps",
            ResourceKind::ServiceAccount => "serviceaccounts",
            ResourceKind::Job => "jobs",
            ResourceKind::CronJob => "cronjobs",
        };
        f.write_str(s)
    }
}
