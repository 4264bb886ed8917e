// Copyright (c) 2025 - Cowboy AI, Inc.
//! Address Reverse Index
//!
//! The watch/cache layer maintains a reverse index from canonical address
//! strings to the cluster records claiming them. This module defines the
//! lookup capability the resolver consumes, the key function used to build
//! the `instanceIP` index, and an in-memory implementation.
//!
//! Entries are tagged: a lookup yields either a typed [`IpInstance`] or an
//! [`IndexEntry::Unrecognized`] marker for storage that holds something else
//! under the same key.

pub mod memory;

use ipnet::IpNet;
use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;

use crate::domain::IpInstance;

pub use memory::MemoryAddressIndex;

/// Name of the index keyed by instance address
pub const BY_INSTANCE_IP_INDEX: &str = "instanceIP";

/// Index backend error
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IndexError {
    #[error("index {0:?} does not exist")]
    UnknownIndex(String),

    #[error("instance {instance} has unparseable address {raw:?}")]
    InvalidAddress { instance: String, raw: String },

    #[error("index storage lock poisoned")]
    Poisoned,
}

/// One value stored under an index key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexEntry {
    Instance(Arc<IpInstance>),
    Unrecognized { kind: String },
}

impl IndexEntry {
    pub fn instance(&self) -> Option<&Arc<IpInstance>> {
        match self {
            IndexEntry::Instance(instance) => Some(instance),
            IndexEntry::Unrecognized { .. } => None,
        }
    }
}

impl From<IpInstance> for IndexEntry {
    fn from(instance: IpInstance) -> Self {
        IndexEntry::Instance(Arc::new(instance))
    }
}

impl From<Arc<IpInstance>> for IndexEntry {
    fn from(instance: Arc<IpInstance>) -> Self {
        IndexEntry::Instance(instance)
    }
}

/// Read-only lookup against a locally materialized index snapshot.
///
/// Each call is one atomic read; implementations must not block on the
/// control plane.
pub trait AddressIndex: Send + Sync {
    fn by_index(&self, index_name: &str, key: &str) -> Result<Vec<IndexEntry>, IndexError>;
}

impl<T: AddressIndex + ?Sized> AddressIndex for Arc<T> {
    fn by_index(&self, index_name: &str, key: &str) -> Result<Vec<IndexEntry>, IndexError> {
        (**self).by_index(index_name, key)
    }
}

impl<T: AddressIndex + ?Sized> AddressIndex for &T {
    fn by_index(&self, index_name: &str, key: &str) -> Result<Vec<IndexEntry>, IndexError> {
        (**self).by_index(index_name, key)
    }
}

/// Canonical index key for an address.
///
/// IPv4-mapped IPv6 addresses (`::ffff:10.0.0.9`) key as their IPv4 form, so
/// an address seen on a v6 socket finds the same owner as the dotted quad.
pub fn address_key(address: IpAddr) -> String {
    address.to_canonical().to_string()
}

/// Key function of the `instanceIP` index.
///
/// The address attribute may be in CIDR form (`10.0.0.9/24`) or a bare
/// address; either way the key is the canonical address string.
pub fn instance_ip_keys(instance: &IpInstance) -> Result<Vec<String>, IndexError> {
    let raw = instance.address();
    let address = raw
        .parse::<IpNet>()
        .map(|net| net.addr())
        .or_else(|_| raw.parse::<IpAddr>())
        .map_err(|_| IndexError::InvalidAddress {
            instance: instance.key(),
            raw: raw.to_string(),
        })?;

    Ok(vec![address_key(address)])
}
