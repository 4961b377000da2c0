//! Showcase project catalog: the "files" `ls` and `cat` expose.
//!
//! Catalog files are TOML:
//!
//! ```toml
//! [[projects]]
//! key = "retlister"
//! name = "RetLister"
//! summary = "Win32 Legacy Bridge"
//! description = "Bridged modern Axum backends with legacy Windows XP hardware."
//! stack = ["Rust", "Tauri", "Win32 API"]
//! link = "https://github.com/ernestoCruz05/RetLister"
//! color = "#0052cc"
//! category = "systems"
//! ```

use std::collections::HashSet;
use std::path::Path;

use faky_shared::{FakyError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One showcased project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Lookup key typed after `cat`; lowercase, no whitespace.
    pub key: String,
    /// Display name.
    pub name: String,
    /// One-line tagline.
    pub summary: String,
    /// Longer description shown on the card.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Public repository link; `None` for internal projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Accent color as `#rrggbb`.
    #[serde(default = "default_color")]
    pub color: String,
    /// Group shown by `tree`.
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_color() -> String {
    "#3b82f6".into()
}
fn default_category() -> String {
    "misc".into()
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<Project>,
}

/// Ordered set of projects. Iteration order is declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting empty, non-lowercase, or duplicate keys.
    pub fn new(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            let key = project.key.as_str();
            if key.is_empty() || key.chars().any(char::is_whitespace) {
                return Err(FakyError::validation(format!(
                    "project key {key:?} must be a single non-empty word"
                )));
            }
            if key != key.to_lowercase() {
                return Err(FakyError::validation(format!(
                    "project key {key:?} must be lowercase"
                )));
            }
            if !seen.insert(key) {
                return Err(FakyError::validation(format!("duplicate project key {key:?}")));
            }
        }
        Ok(Self { projects })
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|e| FakyError::config(format!("invalid project catalog: {e}")))?;
        Self::new(file.projects)
    }

    /// Load a catalog file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FakyError::io(path, e))?;
        let catalog = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), projects = catalog.len(), "loaded project catalog");
        Ok(catalog)
    }

    /// Built-in catalog, or the file at `path` when given.
    pub fn load_or_builtin(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::builtin()),
        }
    }

    /// The six projects the showcase ships with.
    pub fn builtin() -> Self {
        Self {
            projects: vec![
                project(
                    "retlister",
                    "RetLister",
                    "Win32 Legacy Bridge",
                    "Bridged modern Axum backends with legacy Windows XP hardware. Engineered a custom TCP-to-HTTPS Proxy in Rust (embedded in Tauri) to enable secure communication for C-based Win32 clients.",
                    &["Rust", "Tauri", "Win32 API"],
                    Some("https://github.com/ernestoCruz05/RetLister"),
                    "#0052cc",
                    "systems",
                ),
                project(
                    "rustyroom",
                    "RustyRoom",
                    "Async TCP Chat Server",
                    "A high-concurrency TCP chat server built in Rust. Manages raw sockets, asynchronous I/O (Tokio), and custom packet framing to handle thousands of concurrent connections with minimal memory footprint.",
                    &["Rust", "Tokio", "WebSockets"],
                    Some("https://github.com/ernestoCruz05/RustyRoom"),
                    "#d60045",
                    "systems",
                ),
                project(
                    "librenms",
                    "LibreNMS",
                    "Network Observability Stack",
                    "Deployed a full network monitoring solution using LibreNMS on Docker. Configured SNMP polling, alerting pipelines, and custom dashboards for infrastructure visibility.",
                    &["Docker", "Alpine", "SNMP", "MySQL"],
                    None,
                    "#00a3ff",
                    "networking",
                ),
                project(
                    "unix-ipc",
                    "Unix IPC Bus",
                    "Low-level Message Queue",
                    "Implemented inter-process communication using Unix domain sockets, named pipes, and message queues. Designed for high-throughput, low-latency data exchange between system processes.",
                    &["C", "Syscalls", "POSIX IPC"],
                    Some("https://github.com/ernestoCruz05/unix-topic-chat"),
                    "#22c55e",
                    "infrastructure",
                ),
                project(
                    "packet-sniffer",
                    "Packet Sniffer",
                    "Raw Socket Analyzer",
                    "Built a network packet analyzer using raw sockets in Python. Captures and decodes Ethernet frames, IP headers, TCP/UDP segments for traffic inspection and debugging.",
                    &["Python", "TCP/IP", "Raw Sockets"],
                    None,
                    "#8b5cf6",
                    "networking",
                ),
                project(
                    "homelab",
                    "Home Lab",
                    "Proxmox Cluster",
                    "Self-hosted virtualization cluster running Proxmox VE with ZFS storage, high-availability configuration, and automated VM provisioning via Ansible.",
                    &["Proxmox", "ZFS", "Ansible", "HA"],
                    None,
                    "#f59e0b",
                    "infrastructure",
                ),
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    /// First key (in catalog order) starting with `prefix`, ignoring case.
    pub fn first_with_prefix(&self, prefix: &str) -> Option<&str> {
        let prefix = prefix.to_lowercase();
        self.keys().find(|key| key.starts_with(&prefix))
    }

    /// Categories in order of first appearance, each with its projects.
    pub fn categories(&self) -> Vec<(&str, Vec<&Project>)> {
        let mut groups: Vec<(&str, Vec<&Project>)> = Vec::new();
        for project in &self.projects {
            match groups.iter_mut().find(|(name, _)| *name == project.category) {
                Some((_, members)) => members.push(project),
                None => groups.push((project.category.as_str(), vec![project])),
            }
        }
        groups
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    key: &str,
    name: &str,
    summary: &str,
    description: &str,
    stack: &[&str],
    link: Option<&str>,
    color: &str,
    category: &str,
) -> Project {
    Project {
        key: key.into(),
        name: name.into(),
        summary: summary.into(),
        description: description.into(),
        stack: stack.iter().map(|s| (*s).to_string()).collect(),
        link: link.map(String::from),
        color: color.into(),
        category: category.into(),
    }
}
