// Copyright (c) 2025 - Cowboy AI, Inc.
//! Address ownership resolution
//!
//! Maps an address observed on the node back to the single IP instance that
//! claims it. Ownership must be unique: more than one claimant means the
//! index (or the cluster state behind it) is corrupt, and that is reported
//! rather than resolved by picking one.

use std::net::IpAddr;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::diagnostics::message_wrapper;
use crate::domain::IpInstance;
use crate::index::{address_key, AddressIndex, IndexEntry, IndexError, BY_INSTANCE_IP_INDEX};

/// Resolution failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("get ip instance by ip {address} indexer failed: {source}")]
    IndexLookup {
        address: String,
        #[source]
        source: IndexError,
    },

    #[error("get more than one ip instance for ip {address}: {count} records claim it")]
    IndexCorruption { address: String, count: usize },

    #[error("index entry for ip {address} is not an ip instance (found {kind})")]
    InternalTypeMismatch { address: String, kind: String },
}

/// Resolves addresses through an [`AddressIndex`]
#[derive(Debug, Clone)]
pub struct InstanceResolver<I> {
    index: I,
    index_name: String,
}

impl<I: AddressIndex> InstanceResolver<I> {
    /// Resolver over the default `instanceIP` index
    pub fn new(index: I) -> Self {
        Self::with_index_name(index, BY_INSTANCE_IP_INDEX)
    }

    pub fn with_index_name(index: I, index_name: impl Into<String>) -> Self {
        Self {
            index,
            index_name: index_name.into(),
        }
    }

    pub fn index(&self) -> &I {
        &self.index
    }

    /// Look up the record owning `address`.
    ///
    /// `Ok(None)` means the address is simply unowned.
    pub fn resolve_by_address(&self, address: IpAddr) -> Result<Option<Arc<IpInstance>>, ResolveError> {
        let key = address_key(address);
        let wrap = message_wrapper(format!("resolve {key}: "));

        let mut entries = self
            .index
            .by_index(&self.index_name, &key)
            .map_err(|source| ResolveError::IndexLookup {
                address: key.clone(),
                source,
            })?;

        if entries.len() > 1 {
            warn!(
                address = %key,
                count = entries.len(),
                "{}",
                wrap(format_args!("ownership is not unique"))
            );
            return Err(ResolveError::IndexCorruption {
                address: key,
                count: entries.len(),
            });
        }

        match entries.pop() {
            None => {
                debug!("{}", wrap(format_args!("no owner")));
                Ok(None)
            }
            Some(IndexEntry::Instance(instance)) => {
                debug!("{}", wrap(format_args!("owned by {}", instance.key())));
                Ok(Some(instance))
            }
            Some(IndexEntry::Unrecognized { kind }) => {
                warn!("{}", wrap(format_args!("index holds a {kind} entry")));
                Err(ResolveError::InternalTypeMismatch { address: key, kind })
            }
        }
    }
}
