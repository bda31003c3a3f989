// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain types derived from cluster state: pod status snapshots,
//! kubeconfig context views, and the closed resource-kind set.

pub mod context;
pub mod resource;
pub mod status;

pub use context::ContextInfo;
pub use resource::ResourceKind;
pub use status::{ContainerStateLabel, PodPhase, PodStatusSnapshot};
