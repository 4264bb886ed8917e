// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Networking Domain Models
//!
//! Value objects shared by the resolver, the manager router and the subnet
//! validation pass.
//!
//! - [`IpVersion`] - address family tag with default-to-IPv4 interpretation
//! - [`AddressRangeSpec`] / [`ParsedAddressRange`] - raw and validated subnet ranges
//! - [`IpInstance`] - cluster IP assignment record

pub mod address_range;
pub mod ip_instance;
pub mod ip_version;

pub use address_range::{parse_range, AddressRangeSpec, ParsedAddressRange, RangeError};
pub use ip_instance::{InstanceAddress, IpInstance, IpInstanceSpec};
pub use ip_version::IpVersion;
