// Copyright (c) 2025 - Cowboy AI, Inc.
//! IP Instance Record
//!
//! One cluster-declared IP assignment. The daemon only reads the address
//! attribute (to key the reverse index); everything else is carried through
//! untouched for whoever programs the kernel.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::IpVersion;

/// Cluster IP assignment record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpInstance {
    pub name: String,

    #[serde(default)]
    pub namespace: String,

    #[serde(default = "Uuid::nil")]
    pub uid: Uuid,

    pub spec: IpInstanceSpec,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpInstanceSpec {
    #[serde(default)]
    pub network: String,

    #[serde(default)]
    pub subnet: String,

    pub address: InstanceAddress,
}

/// Address attribute of an IP instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceAddress {
    /// Assigned address, usually in CIDR form (`10.0.0.9/24`)
    pub ip: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,

    #[serde(default)]
    pub version: IpVersion,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
}

impl IpInstance {
    /// Create a record with a fresh uid
    pub fn new(name: impl Into<String>, namespace: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            uid: Uuid::now_v7(),
            spec: IpInstanceSpec {
                address: InstanceAddress {
                    ip: ip.into(),
                    ..Default::default()
                },
                ..Default::default()
            },
        }
    }

    /// Set the subnet this instance was allocated from
    pub fn with_subnet(mut self, network: impl Into<String>, subnet: impl Into<String>) -> Self {
        self.spec.network = network.into();
        self.spec.subnet = subnet.into();
        self
    }

    /// Set the address family tag
    pub fn with_version(mut self, version: IpVersion) -> Self {
        self.spec.address.version = version;
        self
    }

    /// `namespace/name`, or just `name` for cluster-scoped records
    pub fn key(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }

    /// Raw address attribute as declared
    pub fn address(&self) -> &str {
        &self.spec.address.ip
    }
}
