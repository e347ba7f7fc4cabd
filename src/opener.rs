//! Hands link URLs to the system browser.
//!
//! The browser runs as its own process, so nothing about this session
//! (referrer, window handle) reaches the destination page.

use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result, anyhow};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opener {
    command: String,
}

impl Opener {
    /// Priority: config `opener`, then `$BROWSER`, then the platform default.
    pub fn from_config(configured: Option<String>) -> Self {
        Self::new(resolve_command(configured, std::env::var("BROWSER").ok()))
    }

    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Program and arguments used to open `url`.
    pub fn invocation(&self, url: &str) -> Result<(String, Vec<String>)> {
        let mut parts = self.command.split_whitespace();
        let program = parts
            .next()
            .ok_or_else(|| anyhow!("no command configured for opening links"))?;
        let mut args: Vec<String> = parts.map(ToString::to_string).collect();
        args.push(url.to_string());
        Ok((program.to_string(), args))
    }

    /// Launch the opener without waiting for it to exit.
    pub fn open(&self, url: &str) -> Result<()> {
        let (program, args) = self.invocation(url)?;
        let child = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("failed to launch {:?} for {}", self.command, url))?;
        info!(url, opener = %self.command, pid = child.id(), "opened link");

        reap(child, self.command.clone())?;
        Ok(())
    }
}

/// Wait for `child` on a background thread and log a failing exit.
fn reap(mut child: Child, command: String) -> Result<JoinHandle<Option<ExitStatus>>> {
    thread::Builder::new()
        .name("opener-reaper".to_string())
        .spawn(move || match child.wait() {
            Ok(status) => {
                if !status.success() {
                    warn!(opener = %command, %status, "link opener exited with an error");
                }
                Some(status)
            }
            Err(err) => {
                warn!(opener = %command, error = %err, "failed to wait for link opener");
                None
            }
        })
        .context("failed to start opener reaper thread")
}

fn resolve_command(configured: Option<String>, browser_env: Option<String>) -> String {
    if let Some(c) = configured.filter(|v| !v.trim().is_empty()) {
        return c;
    }
    if let Some(b) = browser_env.filter(|v| !v.trim().is_empty()) {
        return b;
    }
    platform_default().to_string()
}

fn platform_default() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    }
}
