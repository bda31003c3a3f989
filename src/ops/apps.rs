// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Apps API group operations: deployments, daemon sets, stateful sets.

use crate::error::Result;
use crate::session::Session;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::autoscaling::v1::Scale;
use kube::api::{ListParams, Patch, PatchParams};
use kube::Api;
use tracing::instrument;

impl Session {
    pub async fn deployments(&self, namespace: Option<&str>) -> Result<Vec<Deployment>> {
        let api: Api<Deployment> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn all_deployments(&self) -> Result<Vec<Deployment>> {
        let api: Api<Deployment> = self.cluster();
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn deployment(&self, name: &str, namespace: Option<&str>) -> Result<Deployment> {
        let api: Api<Deployment> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    /// Set the replica count through the scale subresource
    #[instrument(skip(self))]
    pub async fn scale_deployment(
        &self,
        name: &str,
        replicas: i32,
        namespace: Option<&str>,
    ) -> Result<Scale> {
        let api: Api<Deployment> = self.namespaced(namespace);
        let patch = serde_json::json!({ "spec": { "replicas": replicas } });
        Ok(api
            .patch_scale(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?)
    }

    pub async fn daemon_sets(&self, namespace: Option<&str>) -> Result<Vec<DaemonSet>> {
        let api: Api<DaemonSet> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn daemon_set(&self, name: &str, namespace: Option<&str>) -> Result<DaemonSet> {
        let api: Api<DaemonSet> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    pub async fn stateful_sets(&self, namespace: Option<&str>) -> Result<Vec<StatefulSet>> {
        let api: Api<StatefulSet> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn stateful_set(&self, name: &str, namespace: Option<&str>) -> Result<StatefulSet> {
        let api: Api<StatefulSet> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }
}
