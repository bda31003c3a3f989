// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Opaque secret operations with the same best-effort create-or-update
//! shape as config maps.

use super::kebab_case;
use crate::error::Result;
use crate::session::Session;
use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::api::{ListParams, ObjectMeta, PostParams};
use kube::Api;
use std::collections::BTreeMap;
use tracing::instrument;

impl Session {
    pub async fn secrets(&self, namespace: Option<&str>) -> Result<Vec<Secret>> {
        let api: Api<Secret> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn secret(&self, name: &str, namespace: Option<&str>) -> Result<Secret> {
        let api: Api<Secret> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    pub async fn secret_exists(&self, name: &str, namespace: Option<&str>) -> Result<bool> {
        let target = kebab_case(name);
        Ok(self
            .secrets(namespace)
            .await?
            .iter()
            .any(|s| s.metadata.name.as_deref() == Some(target.as_str())))
    }

    /// Create an Opaque secret holding a single value keyed by the raw
    /// name; the object name is kebab-cased
    #[instrument(skip(self, value))]
    pub async fn create_secret(
        &self,
        name: &str,
        value: &str,
        namespace: Option<&str>,
    ) -> Result<Secret> {
        let api: Api<Secret> = self.namespaced(namespace);
        let secret = self.build_secret(name, value, namespace);
        Ok(api.create(&PostParams::default(), &secret).await?)
    }

    /// Replace an existing Opaque secret's value
    #[instrument(skip(self, value))]
    pub async fn update_secret(
        &self,
        name: &str,
        value: &str,
        namespace: Option<&str>,
    ) -> Result<Secret> {
        let api: Api<Secret> = self.namespaced(namespace);
        let object_name = kebab_case(name);
        let secret = self.build_secret(name, value, namespace);
        Ok(api
            .replace(&object_name, &PostParams::default(), &secret)
            .await?)
    }

    /// Create the secret when absent, replace when present. The
    /// existence check and the write are separate requests, so
    /// concurrent callers can race.
    pub async fn create_or_update_secret(
        &self,
        name: &str,
        value: &str,
        namespace: Option<&str>,
    ) -> Result<Secret> {
        if self.secret_exists(name, namespace).await? {
            self.update_secret(name, value, namespace).await
        } else {
            self.create_secret(name, value, namespace).await
        }
    }

    fn build_secret(&self, name: &str, value: &str, namespace: Option<&str>) -> Secret {
        Secret {
            metadata: ObjectMeta {
                name: Some(kebab_case(name)),
                namespace: Some(namespace.unwrap_or(self.namespace()).to_string()),
                ..Default::default()
            },
            type_: Some("Opaque".to_string()),
            data: Some(BTreeMap::from([(
                name.to_string(),
                ByteString(value.as_bytes().to_vec()),
            )])),
            ..Default::default()
        }
    }
}
