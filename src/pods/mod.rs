// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod-level behaviors: readiness polling, interactive exec sessions,
//! and log reading/streaming.

pub mod exec;
pub mod logs;
pub mod readiness;

pub use logs::{LogEntry, LogRecord};
pub use readiness::WaitOptions;
