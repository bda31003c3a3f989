// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Config map operations, including the create-or-update convenience
//! built from file readers.
//!
//! Create-or-update checks existence by listing and then branches; the
//! check and the act are two requests, so concurrent callers can race.
//! Callers needing stronger guarantees should use server-side apply.

use super::kebab_case;
use crate::error::Result;
use crate::session::Session;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::api::{ListParams, ObjectMeta, Patch, PatchParams, PostParams};
use kube::Api;
use std::collections::BTreeMap;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::instrument;

/// Read (filename, reader) pairs into config map data
async fn read_files<R>(files: Vec<(String, R)>) -> Result<BTreeMap<String, String>>
where
    R: AsyncRead + Unpin,
{
    let mut data = BTreeMap::new();
    for (filename, mut reader) in files {
        let mut contents = String::new();
        reader.read_to_string(&mut contents).await?;
        data.insert(filename, contents);
    }
    Ok(data)
}

impl Session {
    pub async fn config_maps(&self, namespace: Option<&str>) -> Result<Vec<ConfigMap>> {
        let api: Api<ConfigMap> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn config_map(&self, name: &str, namespace: Option<&str>) -> Result<ConfigMap> {
        let api: Api<ConfigMap> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    /// Check existence by listing the namespace and scanning for the
    /// kebab-cased name
    pub async fn config_map_exists(&self, name: &str, namespace: Option<&str>) -> Result<bool> {
        let target = kebab_case(name);
        Ok(self
            .config_maps(namespace)
            .await?
            .iter()
            .any(|cm| cm.metadata.name.as_deref() == Some(target.as_str())))
    }

    /// Create a config map holding a single value keyed by the raw name
    #[instrument(skip(self, value))]
    pub async fn create_config_map(
        &self,
        name: &str,
        value: &str,
        namespace: Option<&str>,
    ) -> Result<ConfigMap> {
        let data = BTreeMap::from([(name.to_string(), value.to_string())]);
        self.create_config_map_with_data(name, data, namespace).await
    }

    pub async fn create_config_map_from_readers<R>(
        &self,
        name: &str,
        files: Vec<(String, R)>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap>
    where
        R: AsyncRead + Unpin,
    {
        let data = read_files(files).await?;
        self.create_config_map_with_data(name, data, namespace).await
    }

    pub async fn replace_config_map_from_readers<R>(
        &self,
        name: &str,
        files: Vec<(String, R)>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap>
    where
        R: AsyncRead + Unpin,
    {
        let data = read_files(files).await?;
        self.replace_config_map_with_data(name, data, namespace)
            .await
    }

    /// Create the config map when absent, replace it when present.
    /// Existence-then-act is best-effort, not atomic.
    #[instrument(skip(self, files))]
    pub async fn create_or_update_config_map_from_readers<R>(
        &self,
        name: &str,
        files: Vec<(String, R)>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap>
    where
        R: AsyncRead + Unpin,
    {
        let data = read_files(files).await?;
        if self.config_map_exists(name, namespace).await? {
            self.replace_config_map_with_data(name, data, namespace)
                .await
        } else {
            self.create_config_map_with_data(name, data, namespace).await
        }
    }

    /// Merge-patch the data of an existing config map
    pub async fn patch_config_map(
        &self,
        name: &str,
        data: BTreeMap<String, String>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap> {
        let api: Api<ConfigMap> = self.namespaced(namespace);
        let patch = serde_json::json!({ "data": data });
        Ok(api
            .patch(name, &PatchParams::default(), &Patch::Merge(&patch))
            .await?)
    }

    async fn create_config_map_with_data(
        &self,
        name: &str,
        data: BTreeMap<String, String>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap> {
        let api: Api<ConfigMap> = self.namespaced(namespace);
        let config_map = self.build_config_map(name, data, namespace);
        Ok(api.create(&PostParams::default(), &config_map).await?)
    }

    async fn replace_config_map_with_data(
        &self,
        name: &str,
        data: BTreeMap<String, String>,
        namespace: Option<&str>,
    ) -> Result<ConfigMap> {
        let api: Api<ConfigMap> = self.namespaced(namespace);
        let object_name = kebab_case(name);
        let config_map = self.build_config_map(name, data, namespace);
        Ok(api
            .replace(&object_name, &PostParams::default(), &config_map)
            .await?)
    }

    fn build_config_map(
        &self,
        name: &str,
        data: BTreeMap<String, String>,
        namespace: Option<&str>,
    ) -> ConfigMap {
        ConfigMap {
            metadata: ObjectMeta {
                name: Some(kebab_case(name)),
                namespace: Some(namespace.unwrap_or(self.namespace()).to_string()),
                ..Default::default()
            },
            data: Some(data),
            ..Default::default()
        }
    }
}
