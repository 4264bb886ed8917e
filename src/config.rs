// Copyright (c) 2025 - Cowboy AI, Inc.
//! Daemon configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::errors::{DaemonError, DaemonResult};
use crate::index::BY_INSTANCE_IP_INDEX;

/// Configuration shared by the validator and the reconciliation driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Node this daemon runs on
    pub node_name: String,

    /// `tracing` filter directive (e.g. `info`, `dualstack_netd=debug`)
    pub log_filter: String,

    /// Name of the address reverse index
    pub instance_index: String,

    /// Cluster snapshot to validate
    pub snapshot_path: Option<PathBuf>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            node_name: "localhost".to_string(),
            log_filter: "info".to_string(),
            instance_index: BY_INSTANCE_IP_INDEX.to_string(),
            snapshot_path: None,
        }
    }
}

impl DaemonConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> DaemonResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> DaemonResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let node_name = lookup("NODE_NAME").unwrap_or(defaults.node_name);
        if node_name.trim().is_empty() {
            return Err(DaemonError::Configuration("NODE_NAME is empty".to_string()));
        }

        let instance_index = lookup("DUALSTACK_INSTANCE_INDEX").unwrap_or(defaults.instance_index);
        if instance_index.is_empty() {
            return Err(DaemonError::Configuration(
                "DUALSTACK_INSTANCE_INDEX is empty".to_string(),
            ));
        }

        Ok(Self {
            node_name,
            log_filter: lookup("DUALSTACK_LOG").unwrap_or(defaults.log_filter),
            instance_index,
            snapshot_path: lookup("DUALSTACK_SNAPSHOT")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Snapshot path, required by the validator
    pub fn require_snapshot_path(&self) -> DaemonResult<&PathBuf> {
        self.snapshot_path
            .as_ref()
            .ok_or_else(|| DaemonError::Configuration("DUALSTACK_SNAPSHOT not set".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DaemonConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, DaemonConfig::default());
        assert!(config.require_snapshot_path().is_err());
    }

    #[test]
    fn test_overrides() {
        let config = DaemonConfig::from_lookup(lookup(&[
            ("NODE_NAME", "node-1"),
            ("DUALSTACK_LOG", "debug"),
            ("DUALSTACK_SNAPSHOT", "/tmp/snapshot.json"),
        ]))
        .unwrap();
        assert_eq!(config.node_name, "node-1");
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.require_snapshot_path().unwrap(),
            &PathBuf::from("/tmp/snapshot.json")
        );
    }

    #[test]
    fn test_empty_node_name_rejected() {
        let err = DaemonConfig::from_lookup(lookup(&[("NODE_NAME", " ")])).unwrap_err();
        assert!(matches!(err, DaemonError::Configuration(_)));
    }
}
