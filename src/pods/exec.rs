// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Interactive exec sessions into a running container.
//!
//! Wires the local terminal to a remote shell over the kube exec
//! channel: local stdin is forwarded raw to the remote process, remote
//! output is written to local stdout. With a pseudo-terminal requested
//! the server merges stderr into stdout.

use crate::constants::exec::DEFAULT_SHELL;
use crate::error::{HelmsmanError, Result};
use crate::session::Session;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use k8s_openapi::api::core::v1::Pod;
use kube::api::{AttachParams, AttachedProcess};
use kube::Api;
use tracing::{debug, instrument};

/// Puts the terminal into raw mode and restores it when dropped, so
/// every exit path of the session leaves the terminal usable.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        enable_raw_mode()?;
        Ok(RawModeGuard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl Session {
    /// Run an interactive shell in the first container of the named
    /// pod, defaulting to `bash` when no shell is given. Completes when
    /// the remote channel closes; a dropped session is a terminal
    /// failure, there is no reconnection.
    #[instrument(skip(self))]
    pub async fn exec_shell(
        &self,
        pod_name: &str,
        namespace: Option<&str>,
        shell: Option<&str>,
    ) -> Result<()> {
        let shell = shell.unwrap_or(DEFAULT_SHELL);
        let pods: Api<Pod> = self.namespaced(namespace);
        let pod = pods
            .get(pod_name)
            .await
            .map_err(HelmsmanError::pod_not_found(pod_name))?;

        // Exec targets the first container; multi-container selection
        // is out of scope.
        let container = pod
            .spec
            .as_ref()
            .and_then(|spec| spec.containers.first())
            .map(|c| c.name.clone())
            .ok_or_else(|| HelmsmanError::NoContainers {
                pod: pod_name.to_string(),
            })?;
        debug!("Opening exec channel to {}/{}", pod_name, container);

        let params = AttachParams::interactive_tty().container(&container);
        let attached = pods
            .exec(pod_name, [shell], &params)
            .await
            .map_err(|e| HelmsmanError::Exec(format!("Failed to open exec channel: {}", e)))?;

        let _raw = RawModeGuard::enable()?;
        pump(attached).await
    }
}

/// Forward local stdin to the remote process and remote output to
/// local stdout until the channel closes.
async fn pump(mut attached: AttachedProcess) -> Result<()> {
    let mut remote_stdin = attached
        .stdin()
        .ok_or_else(|| HelmsmanError::Exec("Exec channel has no stdin".to_string()))?;
    let mut remote_stdout = attached
        .stdout()
        .ok_or_else(|| HelmsmanError::Exec("Exec channel has no stdout".to_string()))?;

    let stdin_task = tokio::spawn(async move {
        let mut local_stdin = tokio::io::stdin();
        let _ = tokio::io::copy(&mut local_stdin, &mut remote_stdin).await;
    });

    let mut local_stdout = tokio::io::stdout();
    let copied = tokio::io::copy(&mut remote_stdout, &mut local_stdout).await;

    let outcome = attached
        .join()
        .await
        .map_err(|e| HelmsmanError::Exec(e.to_string()));

    // The remote side is gone either way; stop reading local stdin.
    stdin_task.abort();

    copied?;
    outcome
}
