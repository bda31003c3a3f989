// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! A `Session` binds a client to one cluster context and a default
//! namespace. Every facade operation takes the session explicitly, so
//! there is no hidden global state and each caller can hold its own.

use crate::config::Config;
use crate::constants::EVENTS_API_GROUP;
use crate::error::{HelmsmanError, Result};
use crate::kubernetes::{
    client_for_context, client_from_kubeconfig_text, negotiate_events_api, EventsApiVersion,
};
use crate::types::context::{contexts_from_kubeconfig, ContextInfo};
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use kube::{config::Kubeconfig, Api, Client};
use tracing::{info, instrument};

pub struct Session {
    client: Client,
    namespace: String,
    context: Option<String>,
    events_api: EventsApiVersion,
}

impl Session {
    /// Connect using the current kubeconfig context and the default
    /// namespace from [`Config`]
    pub async fn connect() -> Result<Self> {
        Self::connect_with_config(Config::from_env()).await
    }

    pub async fn connect_with_config(config: Config) -> Result<Self> {
        let client = client_for_context(None).await?;
        let events_api = negotiate_events_api(&client).await?;
        let context = Kubeconfig::read().ok().and_then(|kc| kc.current_context);

        Ok(Session {
            client,
            namespace: config.default_namespace,
            context,
            events_api,
        })
    }

    /// Connect bound to a named kubeconfig context
    pub async fn connect_with_context(context: &str) -> Result<Self> {
        let client = client_for_context(Some(context)).await?;
        let events_api = negotiate_events_api(&client).await?;

        Ok(Session {
            client,
            namespace: Config::from_env().default_namespace,
            context: Some(context.to_string()),
            events_api,
        })
    }

    /// Connect from a kubeconfig document held in memory
    pub async fn connect_with_kubeconfig_text(text: &str, context: Option<&str>) -> Result<Self> {
        let client = client_from_kubeconfig_text(text, context).await?;
        let events_api = negotiate_events_api(&client).await?;

        Ok(Session {
            client,
            namespace: Config::from_env().default_namespace,
            context: context.map(String::from),
            events_api,
        })
    }

    /// Wrap a pre-built client. Skips the events negotiation and assumes
    /// the v1 events API; used by tests and callers that construct their
    /// own client.
    pub fn with_client(client: Client, namespace: &str) -> Self {
        Session {
            client,
            namespace: namespace.to_string(),
            context: None,
            events_api: EventsApiVersion::V1,
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn set_namespace(&mut self, namespace: impl Into<String>) {
        self.namespace = namespace.into();
    }

    /// Name of the context this session is bound to, when known
    pub fn current_context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    /// Enumerate configured contexts, in kubeconfig file order
    pub fn list_contexts() -> Result<Vec<ContextInfo>> {
        let kubeconfig = Kubeconfig::read()
            .map_err(|e| HelmsmanError::Kubeconfig(format!("Failed to read kubeconfig: {}", e)))?;
        Ok(contexts_from_kubeconfig(&kubeconfig))
    }

    /// Switch to another context. Builds a fresh client and re-runs the
    /// events negotiation; the session keeps its previous handles when
    /// any step fails, so it is never left half-rebuilt.
    #[instrument(skip(self))]
    pub async fn set_context(&mut self, context: &str) -> Result<()> {
        let kubeconfig = Kubeconfig::read()
            .map_err(|e| HelmsmanError::Kubeconfig(format!("Failed to read kubeconfig: {}", e)))?;
        if !kubeconfig.contexts.iter().any(|c| c.name == context) {
            return Err(HelmsmanError::ContextNotFound(context.to_string()));
        }

        let client = client_for_context(Some(context)).await?;
        let events_api = negotiate_events_api(&client).await?;

        self.client = client;
        self.events_api = events_api;
        self.context = Some(context.to_string());
        info!("Switched to context {}", context);
        Ok(())
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn events_api_version(&self) -> EventsApiVersion {
        self.events_api
    }

    /// Events API handle for the negotiated variant
    pub fn events(&self, namespace: Option<&str>) -> Api<DynamicObject> {
        let gvk = GroupVersionKind::gvk(EVENTS_API_GROUP, self.events_api.as_str(), "Event");
        let resource = ApiResource::from_gvk(&gvk);
        Api::namespaced_with(
            self.client.clone(),
            namespace.unwrap_or(&self.namespace),
            &resource,
        )
    }

    pub(crate) fn namespaced<K>(&self, namespace: Option<&str>) -> Api<K>
    where
        K: kube::Resource<Scope = k8s_openapi::NamespaceResourceScope>,
        <K as kube::Resource>::DynamicType: Default,
    {
        Api::namespaced(self.client.clone(), namespace.unwrap_or(&self.namespace))
    }

    pub(crate) fn cluster<K>(&self) -> Api<K>
    where
        K: kube::Resource,
        <K as kube::Resource>::DynamicType: Default,
    {
        Api::all(self.client.clone())
    }
}
