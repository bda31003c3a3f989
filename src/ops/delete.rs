// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Delete dispatch over the closed resource-kind set.

use crate::error::Result;
use crate::session::Session;
use crate::types::resource::ResourceKind;
use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, StatefulSet};
use k8s_openapi::api::batch::v1::{CronJob, Job};
use k8s_openapi::api::core::v1::{
    ConfigMap, Namespace, Pod, Secret, Service, ServiceAccount,
};
use kube::api::DeleteParams;
use kube::Api;
use tracing::instrument;

impl Session {
    /// Delete a namespaced resource of the given kind. The match is
    /// exhaustive over [`ResourceKind`], so an unhandled kind cannot
    /// compile.
    #[instrument(skip(self))]
    pub async fn delete_resource(
        &self,
        kind: ResourceKind,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<()> {
        let params = DeleteParams::default();
        match kind {
            ResourceKind::Pod => {
                self.namespaced::<Pod>(namespace).delete(name, &params).await?;
            }
            ResourceKind::Namespace => {
                self.cluster::<Namespace>().delete(name, &params).await?;
            }
            ResourceKind::Deployment => {
                self.namespaced::<Deployment>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::DaemonSet => {
                self.namespaced::<DaemonSet>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::StatefulSet => {
                self.namespaced::<StatefulSet>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Service => {
                self.namespaced::<Service>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Secret => {
                self.namespaced::<Secret>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::ConfigMap => {
                self.namespaced::<ConfigMap>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::ServiceAccount => {
                self.namespaced::<ServiceAccount>(namespace)
                    .delete(name, &params)
                    .await?;
            }
            ResourceKind::Job => {
                self.namespaced::<Job>(namespace).delete(name, &params).await?;
            }
            ResourceKind::CronJob => {
                self.namespaced::<CronJob>(namespace)
                    .delete(name, &params)
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HelmsmanError;
    use crate::test_utils::MockService;

    const STATUS_OK: &str =
        r#"{"kind":"Status","apiVersion":"v1","status":"Success","code":200}"#;

    #[tokio::test]
    async fn test_delete_pod_is_namespaced() {
        let mock = MockService::new().on_delete(
            "/api/v1/namespaces/apps/pods/web-1",
            200,
            STATUS_OK,
        );
        let session = Session::with_client(mock.clone().into_client(), "apps");

        session
            .delete_resource(ResourceKind::Pod, "web-1", None)
            .await
            .unwrap();

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "DELETE");
        assert_eq!(requests[0].1, "/api/v1/namespaces/apps/pods/web-1");
    }

    #[tokio::test]
    async fn test_delete_namespace_is_cluster_scoped() {
        let mock = MockService::new().on_delete("/api/v1/namespaces/staging", 200, STATUS_OK);
        let session = Session::with_client(mock.clone().into_client(), "apps");

        session
            .delete_resource(ResourceKind::Namespace, "staging", None)
            .await
            .unwrap();
        assert_eq!(mock.requests()[0].1, "/api/v1/namespaces/staging");
    }

    #[tokio::test]
    async fn test_delete_deployment_uses_apps_group() {
        let mock = MockService::new().on_delete(
            "/apis/apps/v1/namespaces/apps/deployments/web",
            200,
            STATUS_OK,
        );
        let session = Session::with_client(mock.clone().into_client(), "apps");

        session
            .delete_resource(ResourceKind::Deployment, "web", None)
            .await
            .unwrap();
        assert_eq!(
            mock.requests()[0].1,
            "/apis/apps/v1/namespaces/apps/deployments/web"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_resource_surfaces_error() {
        let mock = MockService::new();
        let session = Session::with_client(mock.into_client(), "apps");

        let err = session
            .delete_resource(ResourceKind::Secret, "ghost", None)
            .await
            .unwrap_err();
        assert!(matches!(err, HelmsmanError::Kube(_)));
    }
}
