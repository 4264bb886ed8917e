// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for dualstack-netd
//!
//! Deterministic subnet ranges and IP instance records shared by the
//! integration tests. Record uids are fixed so comparisons are stable.

#![allow(dead_code)]

use uuid::Uuid;

use dualstack_netd::domain::{AddressRangeSpec, IpInstance, IpVersion};

pub const INSTANCE_UID_1: &str = "01934f4a-1000-7000-8000-000000001000";
pub const INSTANCE_UID_2: &str = "01934f4a-2000-7000-8000-000000002000";

/// Parse a fixed UUID from a constant string
pub fn parse_uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).expect("Invalid UUID in test fixture")
}

/// The documented IPv4 range: every field populated
pub fn v4_range_fixture() -> AddressRangeSpec {
    AddressRangeSpec {
        cidr: "10.0.0.0/24".to_string(),
        gateway: "10.0.0.1".to_string(),
        start: "10.0.0.10".to_string(),
        end: "10.0.0.100".to_string(),
        exclude_ips: vec!["10.0.0.5".to_string()],
        reserved_ips: vec!["10.0.0.200".to_string()],
    }
}

/// IPv6 range with no start/end bounds
pub fn v6_range_fixture() -> AddressRangeSpec {
    AddressRangeSpec {
        cidr: "fd00:10::/64".to_string(),
        gateway: "fd00:10::1".to_string(),
        start: String::new(),
        end: String::new(),
        exclude_ips: vec!["fd00:10::2".to_string(), "fd00:10::3".to_string()],
        reserved_ips: vec![],
    }
}

/// IP instance claiming `ip`, with a fixed uid
pub fn instance_fixture(name: &str, ip: &str, uid: &str) -> IpInstance {
    let mut instance = IpInstance::new(name, "default", ip)
        .with_subnet("underlay", "subnet-a")
        .with_version(if ip.contains(':') { IpVersion::V6 } else { IpVersion::V4 });
    instance.uid = parse_uuid(uid);
    instance
}
