// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Batch API group operations: jobs and cron jobs.

use crate::error::Result;
use crate::session::Session;
use k8s_openapi::api::batch::v1::{CronJob, Job};
use kube::api::ListParams;
use kube::Api;

impl Session {
    pub async fn jobs(&self, namespace: Option<&str>) -> Result<Vec<Job>> {
        let api: Api<Job> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }

    pub async fn job(&self, name: &str, namespace: Option<&str>) -> Result<Job> {
        let api: Api<Job> = self.namespaced(namespace);
        Ok(api.get(name).await?)
    }

    pub async fn cron_jobs(&self, namespace: Option<&str>) -> Result<Vec<CronJob>> {
        let api: Api<CronJob> = self.namespaced(namespace);
        Ok(api.list(&ListParams::default()).await?.items)
    }
}
