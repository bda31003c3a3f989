// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses based on
/// request paths and records every request it serves, so tests can
/// assert on call counts and ordering.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    /// Add a response for PUT requests matching the exact path
    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    /// Add a response for PATCH requests matching the exact path
    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Add a response for DELETE requests matching the exact path
    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Requests served so far, as (method, path) pairs in arrival order
    pub fn requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        let responses = self.responses.lock().unwrap();

        // Try exact match first
        if let Some(resp) = responses.get(&(method.to_string(), path.to_string())) {
            return Some(resp.clone());
        }

        // Try prefix match for paths like /api/v1/namespaces/foo
        for ((m, p), resp) in responses.iter() {
            if m == method && path.starts_with(p) {
                return Some(resp.clone());
            }
        }

        None
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        self.requests
            .lock()
            .unwrap()
            .push((method.clone(), path.clone()));

        let response = self.find_response(&method, &path);

        Box::pin(async move {
            match response {
                Some((status, body)) => Ok(Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(body.into_bytes()))
                    .unwrap()),
                None => {
                    // Default 404 for unmatched requests
                    let body = r#"{"kind":"Status","apiVersion":"v1","status":"Failure","message":"not found","reason":"NotFound","code":404}"#;
                    Ok(Response::builder()
                        .status(404)
                        .header("content-type", "application/json")
                        .body(Body::from(body.as_bytes().to_vec()))
                        .unwrap())
                }
            }
        })
    }
}

/// Create a mock pod JSON response with the given phase
pub fn pod_json(name: &str, namespace: &str, phase: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "containers": [
                { "name": "main", "image": "busybox" }
            ]
        },
        "status": {
            "phase": phase
        }
    })
    .to_string()
}

/// Create a mock pod that carries a deletion timestamp
pub fn terminating_pod_json(name: &str, namespace: &str, phase: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid",
            "deletionTimestamp": "2024-01-01T10:00:00Z"
        },
        "spec": {
            "containers": [
                { "name": "main", "image": "busybox" }
            ]
        },
        "status": {
            "phase": phase
        }
    })
    .to_string()
}

/// Create a mock pod with no containers in its spec
pub fn empty_pod_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        },
        "spec": {
            "containers": []
        }
    })
    .to_string()
}

/// Create a mock pod list JSON response from (name, phase) pairs
pub fn pod_list_json(namespace: &str, pods: &[(&str, &str)]) -> String {
    let items: Vec<serde_json::Value> = pods
        .iter()
        .map(|(name, phase)| {
            serde_json::json!({
                "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
                "spec": { "containers": [{ "name": "main", "image": "busybox" }] },
                "status": { "phase": phase }
            })
        })
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "PodList",
        "metadata": {},
        "items": items
    })
    .to_string()
}

/// Create a mock config map JSON response
pub fn config_map_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
        "data": {}
    })
    .to_string()
}

/// Create a mock config map list JSON response
pub fn config_map_list_json(namespace: &str, names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
                "data": {}
            })
        })
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMapList",
        "metadata": {},
        "items": items
    })
    .to_string()
}

/// Create a mock secret list JSON response
pub fn secret_list_json(namespace: &str, names: &[&str]) -> String {
    let items: Vec<serde_json::Value> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
                "type": "Opaque"
            })
        })
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "SecretList",
        "metadata": {},
        "items": items
    })
    .to_string()
}

/// Create a mock secret JSON response
pub fn secret_json(name: &str, namespace: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Secret",
        "metadata": { "name": name, "namespace": namespace, "uid": "test-uid" },
        "type": "Opaque"
    })
    .to_string()
}

/// Create a mock API group discovery response
pub fn api_group_json(group: &str, preferred_version: &str) -> String {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "APIGroup",
        "name": group,
        "versions": [
            { "groupVersion": format!("{}/{}", group, preferred_version), "version": preferred_version }
        ],
        "preferredVersion": {
            "groupVersion": format!("{}/{}", group, preferred_version),
            "version": preferred_version
        }
    })
    .to_string()
}
