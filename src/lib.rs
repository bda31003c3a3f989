// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! A session-oriented convenience layer over the Kubernetes API:
//! namespaced resource operations, pod readiness polling, interactive
//! exec sessions, and log streaming.

pub mod config;
pub mod constants;
pub mod error;
pub mod kubernetes;
pub mod ops;
pub mod pods;
pub mod session;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{HelmsmanError, Result};
pub use kubernetes::EventsApiVersion;
pub use pods::{LogEntry, LogRecord, WaitOptions};
pub use session::Session;
pub use types::{ContainerStateLabel, ContextInfo, PodPhase, PodStatusSnapshot, ResourceKind};
