// Copyright (c) 2025 - Cowboy AI, Inc.
//! Dual-stack Snapshot Validator
//!
//! Dry-run of the reconciliation seam against a dumped cluster snapshot:
//! - every subnet range is parsed (failures reported per subnet)
//! - every claimed address is resolved through the reverse index
//! - each valid subnet is matched to the managers that would program it
//!
//! No kernel state is touched.
//!
//! Environment:
//! - `DUALSTACK_SNAPSHOT` - path to the snapshot JSON (required)
//! - `DUALSTACK_LOG` - tracing filter (default `info`)
//! - `NODE_NAME` - node name used in log output

use anyhow::{Context, Result};
use dualstack_netd::reconcile::{check_address_ownership, index_instances};
use dualstack_netd::{
    validate_subnets, ClusterSnapshot, DaemonConfig, DualStack, InstanceResolver, IpVersion,
    MemoryAddressIndex, NetworkManagers,
};
use std::fmt;
use tracing::{error, info};

/// Stand-in for a kernel manager: names what would be programmed
#[derive(Debug, Clone, Copy)]
struct PlannedManager {
    kind: &'static str,
    version: IpVersion,
}

impl fmt::Display for PlannedManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.version)
    }
}

fn planned_pair(kind: &'static str) -> DualStack<PlannedManager> {
    DualStack::new(
        PlannedManager { kind, version: IpVersion::V4 },
        PlannedManager { kind, version: IpVersion::V6 },
    )
}

fn main() -> Result<()> {
    let config = DaemonConfig::from_env().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .init();

    info!(node = %config.node_name, "starting dual-stack snapshot validation");

    let snapshot_path = config.require_snapshot_path()?;
    let snapshot = ClusterSnapshot::load(snapshot_path)
        .with_context(|| format!("Failed to load snapshot {}", snapshot_path.display()))?;
    info!(
        subnets = snapshot.subnets.len(),
        ip_instances = snapshot.ip_instances.len(),
        "snapshot loaded"
    );

    let managers = NetworkManagers::new(
        planned_pair("route"),
        planned_pair("neigh"),
        planned_pair("firewall"),
    );

    let report = validate_subnets(&snapshot.subnets);
    for subnet in &report.valid {
        let version = subnet.ip_version();
        info!(
            subnet = %subnet.name,
            cidr = %subnet.range.cidr(),
            route = %managers.select_route_manager(version),
            neigh = %managers.select_neigh_manager(version),
            firewall = %managers.select_firewall_manager(version),
            "subnet ready"
        );
    }

    let index = MemoryAddressIndex::new(config.instance_index.clone());
    let unindexed = index_instances(&index, &snapshot.ip_instances);
    let resolver = InstanceResolver::with_index_name(index, config.instance_index.clone());

    let ownership_problems = check_address_ownership(&resolver, snapshot.claimed_addresses());
    for problem in &ownership_problems {
        error!("{}", problem);
    }

    if !report.is_clean() || !unindexed.is_empty() || !ownership_problems.is_empty() {
        anyhow::bail!(
            "{} invalid subnet(s), {} unindexable ip instance(s), {} address ownership problem(s)",
            report.failed.len(),
            unindexed.len(),
            ownership_problems.len()
        );
    }

    info!("snapshot is consistent");
    Ok(())
}
