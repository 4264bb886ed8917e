// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet validation pass
//!
//! Reconciliation validates every subnet's range before the subnet can be
//! used for allocation or routes. A malformed range is an error scoped to
//! that subnet; the remaining subnets are still validated.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::diagnostics::message_wrapper;
use crate::domain::{parse_range, AddressRangeSpec, IpInstance, IpVersion, ParsedAddressRange, RangeError};
use crate::errors::{DaemonError, DaemonResult};
use crate::index::{instance_ip_keys, AddressIndex, IndexError, MemoryAddressIndex};
use crate::resolver::{InstanceResolver, ResolveError};

/// Cluster subnet object, reduced to what the daemon reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    pub name: String,

    #[serde(default)]
    pub network: String,

    #[serde(default)]
    pub range: Option<AddressRangeSpec>,
}

/// Range error scoped to one subnet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubnetError {
    pub subnet: String,
    pub message: String,
    #[source]
    pub source: RangeError,
}

/// Subnet whose range parsed cleanly
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedSubnet {
    pub name: String,
    pub network: String,
    pub range: ParsedAddressRange,
}

impl ValidatedSubnet {
    pub fn ip_version(&self) -> IpVersion {
        self.range.ip_version()
    }
}

/// Outcome of validating a batch of subnets
#[derive(Debug, Default)]
pub struct SubnetValidationReport {
    pub valid: Vec<ValidatedSubnet>,
    pub failed: Vec<SubnetError>,
}

impl SubnetValidationReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Validate one subnet's range
pub fn validate_subnet(subnet: &Subnet) -> Result<ValidatedSubnet, SubnetError> {
    let wrap = message_wrapper(format!("subnet {}: ", subnet.name));

    match parse_range(subnet.range.as_ref()) {
        Ok(range) => {
            debug!(subnet = %subnet.name, cidr = %range.cidr(), "subnet range validated");
            Ok(ValidatedSubnet {
                name: subnet.name.clone(),
                network: subnet.network.clone(),
                range,
            })
        }
        Err(source) => Err(SubnetError {
            subnet: subnet.name.clone(),
            message: wrap(format_args!("{source}")),
            source,
        }),
    }
}

/// Validate every subnet, collecting failures instead of stopping at the first
pub fn validate_subnets<'a, I>(subnets: I) -> SubnetValidationReport
where
    I: IntoIterator<Item = &'a Subnet>,
{
    let mut report = SubnetValidationReport::default();
    for subnet in subnets {
        match validate_subnet(subnet) {
            Ok(valid) => report.valid.push(valid),
            Err(err) => {
                warn!(subnet = %err.subnet, field = err.source.field(), "{}", err.message);
                report.failed.push(err);
            }
        }
    }
    info!(
        valid = report.valid.len(),
        failed = report.failed.len(),
        "subnet validation finished"
    );
    report
}

/// Resolve each address and collect the ones whose ownership is broken
pub fn check_address_ownership<I, A>(resolver: &InstanceResolver<I>, addresses: A) -> Vec<ResolveError>
where
    I: AddressIndex,
    A: IntoIterator<Item = IpAddr>,
{
    addresses
        .into_iter()
        .filter_map(|address| resolver.resolve_by_address(address).err())
        .collect()
}

/// Index every instance, collecting the ones that cannot be keyed instead of
/// stopping at the first
pub fn index_instances<'a, I>(index: &MemoryAddressIndex, instances: I) -> Vec<IndexError>
where
    I: IntoIterator<Item = &'a IpInstance>,
{
    let mut failed = Vec::new();
    for instance in instances {
        if let Err(err) = index.insert_instance(instance.clone()) {
            warn!(instance = %instance.key(), "{}", err);
            failed.push(err);
        }
    }
    failed
}

/// Subnets and IP instances as dumped from the cluster
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSnapshot {
    #[serde(default)]
    pub subnets: Vec<Subnet>,

    #[serde(default)]
    pub ip_instances: Vec<IpInstance>,
}

impl ClusterSnapshot {
    /// Load a JSON snapshot from disk
    pub fn load(path: impl AsRef<Path>) -> DaemonResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            DaemonError::Configuration(format!("cannot read snapshot {}: {}", path.display(), e))
        })?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Distinct addresses claimed by the snapshot's instances.
    ///
    /// Instances with an unparseable address claim nothing here;
    /// [`index_instances`] reports them.
    pub fn claimed_addresses(&self) -> BTreeSet<IpAddr> {
        self.ip_instances
            .iter()
            .filter_map(|instance| instance_ip_keys(instance).ok())
            .flatten()
            .filter_map(|key| key.parse().ok())
            .collect()
    }
}
