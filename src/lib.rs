//! Dual-stack host networking core
//!
//! The seam between declarative cluster state and the kernel: subnet range
//! validation, address ownership resolution through the reverse index, and
//! per-IP-version selection of route, neighbor and firewall managers.

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod errors;
pub mod index;
pub mod managers;
pub mod reconcile;
pub mod resolver;

// Re-export commonly used types
pub use config::DaemonConfig;
pub use diagnostics::message_wrapper;
pub use domain::{
    parse_range, AddressRangeSpec, IpInstance, IpVersion, ParsedAddressRange, RangeError,
};
pub use errors::{DaemonError, DaemonResult};
pub use index::{AddressIndex, IndexEntry, IndexError, MemoryAddressIndex, BY_INSTANCE_IP_INDEX};
pub use managers::{DualStack, NetworkManagers};
pub use reconcile::{validate_subnet, validate_subnets, ClusterSnapshot, Subnet, SubnetError};
pub use resolver::{InstanceResolver, ResolveError};
