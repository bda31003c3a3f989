// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Readiness polling configuration
pub mod poll {
    /// Default interval between pod status fetches in milliseconds
    pub const INTERVAL_MS: u64 = 2000;
}

/// Log streaming configuration
pub mod logs {
    /// Lookback window for follow-mode streams in seconds
    pub const LOOKBACK_SECS: i64 = 120;
}

/// Interactive exec configuration
pub mod exec {
    /// Shell spawned when the caller does not name one
    pub const DEFAULT_SHELL: &str = "bash";
}

/// API group queried for the events capability negotiation
pub const EVENTS_API_GROUP: &str = "events.k8s.io";
