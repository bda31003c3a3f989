// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use std::env;

/// Library configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace used when an operation does not specify one
    pub default_namespace: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default_namespace =
            env::var("HELMSMAN_DEFAULT_NAMESPACE").unwrap_or_else(|_| "default".to_string());

        Config { default_namespace }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_namespace: "default".to_string(),
        }
    }
}
