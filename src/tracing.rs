//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging snap
//! transitions, dock reflows and drag gestures.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=drag=debug,hit_test=trace` - scoped filtering
//! - `RUST_LOG=snapdock::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/snapdock/logs/snapdock.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::Snapshot;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`) and goes to stderr so it
/// never mixes with snapshot output on stdout. File logging is always at
/// debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "snapdock.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {:#}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight summary of a snapshot for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutDigest {
    pub panel_count: usize,
    pub dock_count: usize,
    pub panels: Vec<PanelInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelInfo {
    pub uid: String,
    pub snapped_to: Option<String>,
    pub z_index: i64,
    pub is_visible: bool,
}

impl LayoutDigest {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            panel_count: snapshot.panels.len(),
            dock_count: snapshot.docks.len(),
            panels: snapshot
                .panels
                .values()
                .map(|p| PanelInfo {
                    uid: p.uid.to_string(),
                    snapped_to: p.snapped_dock_uid.as_ref().map(ToString::to_string),
                    z_index: p.z_index,
                    is_visible: p.is_visible,
                })
                .collect(),
        }
    }

    /// Generate a diff description between two digests
    pub fn diff(&self, other: &LayoutDigest) -> Option<String> {
        if self.panel_count != other.panel_count || self.dock_count != other.dock_count {
            return Some(format!(
                "panels: {} → {}, docks: {} → {}",
                self.panel_count, other.panel_count, self.dock_count, other.dock_count
            ));
        }

        let mut changes = Vec::new();
        for (before, after) in self.panels.iter().zip(&other.panels) {
            if before.snapped_to != after.snapped_to {
                changes.push(format!(
                    "{}: {} → {}",
                    after.uid,
                    before.snapped_to.as_deref().unwrap_or("free"),
                    after.snapped_to.as_deref().unwrap_or("free")
                ));
            }
            if before.z_index != after.z_index {
                changes.push(format!("{}: z {} → {}", after.uid, before.z_index, after.z_index));
            }
            if before.is_visible != after.is_visible {
                let status = if after.is_visible { "shown" } else { "hidden" };
                changes.push(format!("{}: {}", after.uid, status));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}
