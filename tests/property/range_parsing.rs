// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Range Parsing
//!
//! Any spec built from well-formed literals parses, and every populated field
//! comes back equal to the address it was written from. Parsing has no hidden
//! state: the same spec always yields the same result or the same error.

use dualstack_netd::domain::{parse_range, AddressRangeSpec, IpVersion, RangeError};
use proptest::prelude::*;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

// ============================================================================
// Strategies
// ============================================================================

/// Address of either family
fn any_ip() -> impl Strategy<Value = IpAddr> {
    prop_oneof![
        any::<Ipv4Addr>().prop_map(IpAddr::V4),
        any::<Ipv6Addr>().prop_map(IpAddr::V6),
    ]
}

/// CIDR literal with a prefix valid for its family
fn any_cidr() -> impl Strategy<Value = (IpAddr, u8)> {
    prop_oneof![
        (any::<Ipv4Addr>(), 0u8..=32).prop_map(|(a, p)| (IpAddr::V4(a), p)),
        (any::<Ipv6Addr>(), 0u8..=128).prop_map(|(a, p)| (IpAddr::V6(a), p)),
    ]
}

/// Optional bound: `None` is written as an empty string
fn optional_ip() -> impl Strategy<Value = Option<IpAddr>> {
    prop::option::of(any_ip())
}

/// Strings that are never valid addresses
fn garbage() -> impl Strategy<Value = String> {
    "[g-z][a-z0-9.-]{0,12}"
}

fn render(ips: &[IpAddr]) -> Vec<String> {
    ips.iter().map(ToString::to_string).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: well-formed specs parse and round-trip field by field
    #[test]
    fn prop_valid_spec_round_trips(
        (net, prefix) in any_cidr(),
        gateway in any_ip(),
        start in optional_ip(),
        end in optional_ip(),
        exclude in prop::collection::vec(any_ip(), 0..8),
        reserved in prop::collection::vec(any_ip(), 0..8),
    ) {
        let spec = AddressRangeSpec {
            cidr: format!("{net}/{prefix}"),
            gateway: gateway.to_string(),
            start: start.map(|ip| ip.to_string()).unwrap_or_default(),
            end: end.map(|ip| ip.to_string()).unwrap_or_default(),
            exclude_ips: render(&exclude),
            reserved_ips: render(&reserved),
        };

        let range = parse_range(Some(&spec)).unwrap();

        prop_assert_eq!(range.cidr().addr(), net);
        prop_assert_eq!(range.cidr().prefix_len(), prefix);
        prop_assert_eq!(range.ip_version(), IpVersion::of(&net));
        prop_assert_eq!(range.gateway(), gateway);
        prop_assert_eq!(range.start(), start);
        prop_assert_eq!(range.end(), end);
        prop_assert!(exclude.iter().all(|ip| range.exclude_ips().contains(ip)));
        prop_assert!(reserved.iter().all(|ip| range.reserved_ips().contains(ip)));
        prop_assert!(range.exclude_ips().len() <= exclude.len());
    }

    /// Property: parsing is deterministic for valid and invalid specs alike
    #[test]
    fn prop_parse_is_idempotent(
        (net, prefix) in any_cidr(),
        gateway in prop_oneof![any_ip().prop_map(|ip| ip.to_string()), garbage()],
        exclude in prop::collection::vec(prop_oneof![any_ip().prop_map(|ip| ip.to_string()), garbage()], 0..4),
    ) {
        let spec = AddressRangeSpec {
            cidr: format!("{net}/{prefix}"),
            gateway,
            exclude_ips: exclude,
            ..Default::default()
        };

        prop_assert_eq!(parse_range(Some(&spec)), parse_range(Some(&spec)));
    }

    /// Property: a bad exclude entry is reported by its literal, whatever follows
    #[test]
    fn prop_first_bad_exclude_is_named(
        valid in prop::collection::vec(any_ip(), 0..4),
        bad in garbage(),
        tail in prop::collection::vec(garbage(), 0..3),
    ) {
        let mut exclude_ips = render(&valid);
        exclude_ips.push(bad.clone());
        exclude_ips.extend(tail);

        let spec = AddressRangeSpec {
            cidr: "10.0.0.0/16".to_string(),
            gateway: "10.0.0.1".to_string(),
            exclude_ips,
            ..Default::default()
        };

        prop_assert_eq!(parse_range(Some(&spec)), Err(RangeError::InvalidExcludeIp { raw: bad }));
    }
}
