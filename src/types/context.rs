// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubeconfig context views

use kube::config::Kubeconfig;
use serde::Serialize;

/// One configured cluster context, as read from the kubeconfig
#[derive(Debug, Clone, Serialize)]
pub struct ContextInfo {
    pub name: String,
    pub cluster: Option<String>,
    pub user: Option<String>,
    pub namespace: Option<String>,
    pub is_current: bool,
}

/// Enumerate configured contexts in the order the kubeconfig stores them
pub fn contexts_from_kubeconfig(kubeconfig: &Kubeconfig) -> Vec<ContextInfo> {
    let current = kubeconfig.current_context.as_deref();

    kubeconfig
        .contexts
        .iter()
        .map(|ctx| ContextInfo {
            name: ctx.name.clone(),
            cluster: ctx.context.as_ref().map(|c| c.cluster.clone()),
            user: ctx.context.as_ref().and_then(|c| c.user.clone()),
            namespace: ctx.context.as_ref().and_then(|c| c.namespace.clone()),
            is_current: current == Some(ctx.name.as_str()),
        })
        .collect()
}
