// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and capability negotiation.

pub mod client;

pub use client::{client_for_context, client_from_kubeconfig_text, negotiate_events_api};
pub use client::EventsApiVersion;
