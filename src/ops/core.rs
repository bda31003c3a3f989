// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Core API group operations: namespaces, pods, services, and service
//! accounts.

use crate::error::{HelmsmanError, Result};
use crate::session::Session;
use crate::types::status::PodStatusSnapshot;
use k8s_openapi::api::core::v1::{Namespace, Pod, Service, ServiceAccount};
use kube::api::ListParams;
use kube::Api;
use tracing::instrument;

impl Session {
    pub async fn namespaces(&self) -> Result<Vec<Namespace>> {
        let api: Api<Namespace> = self.cluster();
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn pods(&self, namespace: Option<&str>) -> Result<Vec<Pod>> {
        let api: Api<Pod> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn pod(&self, name: &str, namespace: Option<&str>) -> Result<Pod> {
        let api: Api<Pod> = self.namespaced(namespace);
        api.get(name)
            .await
            .map_err(HelmsmanError::pod_not_found(name))
    }

    /// Derived status view of one pod, recomputed on every call
    #[instrument(skip(self))]
    pub async fn pod_status(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<PodStatusSnapshot> {
        let api: Api<Pod> = self.namespaced(namespace);
        let pod = api
            .get_status(name)
            .await
            .map_err(HelmsmanError::pod_not_found(name))?;
        Ok(PodStatusSnapshot::from_pod(&pod))
    }

    pub async fn services(&self, namespace: Option<&str>) -> Result<Vec<Service>> {
        let api: Api<Service> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn service(&self, name: &str, namespace: Option<&str>) -> Result<Service> {
        let api: Api<Service> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    /// Raw GET through the service proxy subresource
    pub async fn service_proxy(&self, name: &str, namespace: Option<&str>) -> Result<String> {
        let path = format!(
            "/api/v1/namespaces/{}/services/{}/proxy",
            namespace.unwrap_or(self.namespace()),
            name
        );
        let request = http::Request::get(path)
            .body(Vec::new())
            .map_err(kube::Error::HttpError)?;
        Ok(self.client().request_text(request).await?)
    }

    pub async fn service_accounts(&self, namespace: Option<&str>) -> Result<Vec<ServiceAccount>> {
        let api: Api<ServiceAccount> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn service_account(
        &self,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<ServiceAccount> {
        let api: Api<ServiceAccount> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }
}
