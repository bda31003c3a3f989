// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from kubeconfig contexts, plus the events API
//! capability negotiation performed on every context (re)build.

use crate::constants::EVENTS_API_GROUP;
use crate::error::{HelmsmanError, Result};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::APIGroup;
use kube::{config::KubeConfigOptions, Client, Config};
use tracing::{debug, instrument};

/// The events API variant advertised as preferred by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsApiVersion {
    V1,
    V1beta1,
}

impl EventsApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventsApiVersion::V1 => "v1",
            EventsApiVersion::V1beta1 => "v1beta1",
        }
    }
}

/// Create a client for the named kubeconfig context, or the current
/// context when `None`
pub async fn client_for_context(context: Option<&str>) -> Result<Client> {
    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };
    let config = Config::from_kubeconfig(&options)
        .await
        .map_err(|e| HelmsmanError::Kubeconfig(format!("Failed to load kubeconfig: {}", e)))?;

    Client::try_from(config).map_err(HelmsmanError::Kube)
}

/// Create a client from a kubeconfig document held in memory, e.g. one
/// fetched from a secret rather than read from disk
pub async fn client_from_kubeconfig_text(text: &str, context: Option<&str>) -> Result<Client> {
    use kube::config::Kubeconfig;

    let kubeconfig: Kubeconfig = serde_yaml::from_str(text)
        .map_err(|e| HelmsmanError::Kubeconfig(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(String::from),
        ..Default::default()
    };
    let config = Config::from_custom_kubeconfig(kubeconfig, &options)
        .await
        .map_err(|e| HelmsmanError::Kubeconfig(format!("Failed to create config: {}", e)))?;

    Client::try_from(config).map_err(HelmsmanError::Kube)
}

/// Ask the server which events API variant it prefers. One request, no
/// fallback loop: anything other than a preferred `v1` selects the
/// legacy beta variant.
#[instrument(skip(client))]
pub async fn negotiate_events_api(client: &Client) -> Result<EventsApiVersion> {
    let request = http::Request::get(format!("/apis/{}", EVENTS_API_GROUP))
        .body(Vec::new())
        .map_err(kube::Error::HttpError)?;
    let group: APIGroup = client.request(request).await?;

    let preferred = group
        .preferred_version
        .as_ref()
        .map(|v| v.version.as_str());
    let version = if preferred == Some("v1") {
        EventsApiVersion::V1
    } else {
        EventsApiVersion::V1beta1
    };
    debug!("Negotiated events API version {}", version.as_str());
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{api_group_json, MockService};

    #[tokio::test]
    async fn test_negotiate_prefers_v1() {
        let mock = MockService::new().on_get(
            "/apis/events.k8s.io",
            200,
            &api_group_json("events.k8s.io", "v1"),
        );
        let client = mock.clone().into_client();

        let version = negotiate_events_api(&client).await.unwrap();
        assert_eq!(version, EventsApiVersion::V1);
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_negotiate_falls_back_to_beta() {
        let mock = MockService::new().on_get(
            "/apis/events.k8s.io",
            200,
            &api_group_json("events.k8s.io", "v1beta1"),
        );
        let client = mock.clone().into_client();

        let version = negotiate_events_api(&client).await.unwrap();
        assert_eq!(version, EventsApiVersion::V1beta1);
    }

    #[tokio::test]
    async fn test_negotiate_surfaces_transport_error() {
        let mock = MockService::new();
        let client = mock.into_client();

        // Unstubbed path returns 404, which must surface as an API error
        let result = negotiate_events_api(&client).await;
        assert!(result.is_err());
    }
}
