// Copyright (c) 2025 - Cowboy AI, Inc.
//! Subnet Address Range Parsing
//!
//! A subnet declares its usable addresses as plain strings. Before the range
//! can feed address allocation or route computation it is parsed into a
//! [`ParsedAddressRange`].
//!
//! # Parsing Rules
//!
//! Parsing is strict and fail-fast. Fields are checked in declaration order:
//!
//! 1. CIDR (mandatory, `address/prefix`)
//! 2. Gateway (mandatory)
//! 3. Start (optional, empty means unbounded)
//! 4. End (optional, empty means unbounded)
//! 5. Exclude IPs, element by element
//! 6. Reserved IPs, element by element
//!
//! The first invalid field aborts parsing and is the one reported. A partially
//! valid spec never produces a partially populated range.
//!
//! No semantic checks happen here: start/end and gateway are not required to
//! lie inside the CIDR, and exclude/reserved sets may overlap. Those belong to
//! address allocation.
//!
//! # Examples
//!
//! ```rust
//! use dualstack_netd::domain::{AddressRangeSpec, ParsedAddressRange};
//!
//! let spec = AddressRangeSpec {
//!     cidr: "10.0.0.0/24".to_string(),
//!     gateway: "10.0.0.1".to_string(),
//!     ..Default::default()
//! };
//!
//! let range = ParsedAddressRange::try_from(&spec).unwrap();
//! assert_eq!(range.gateway().to_string(), "10.0.0.1");
//! assert!(range.start().is_none());
//! ```

use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::IpAddr;
use thiserror::Error;

use super::IpVersion;

/// Range parsing error, naming the first invalid field and its raw value
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    #[error("cannot parse a nil range")]
    NilSpec,

    #[error("failed to parse subnet cidr {raw:?}")]
    InvalidCidr { raw: String },

    #[error("invalid gateway ip {raw:?}")]
    InvalidGateway { raw: String },

    #[error("invalid start ip {raw:?}")]
    InvalidStart { raw: String },

    #[error("invalid end ip {raw:?}")]
    InvalidEnd { raw: String },

    #[error("invalid exclude ip {raw:?}")]
    InvalidExcludeIp { raw: String },

    #[error("invalid reserved ip {raw:?}")]
    InvalidReservedIp { raw: String },
}

impl RangeError {
    /// Name of the spec field that failed to parse
    pub fn field(&self) -> &'static str {
        match self {
            RangeError::NilSpec => "range",
            RangeError::InvalidCidr { .. } => "cidr",
            RangeError::InvalidGateway { .. } => "gateway",
            RangeError::InvalidStart { .. } => "start",
            RangeError::InvalidEnd { .. } => "end",
            RangeError::InvalidExcludeIp { .. } => "excludeIPs",
            RangeError::InvalidReservedIp { .. } => "reservedIPs",
        }
    }

    /// Offending literal, if the error is tied to one
    pub fn raw(&self) -> Option<&str> {
        match self {
            RangeError::NilSpec => None,
            RangeError::InvalidCidr { raw }
            | RangeError::InvalidGateway { raw }
            | RangeError::InvalidStart { raw }
            | RangeError::InvalidEnd { raw }
            | RangeError::InvalidExcludeIp { raw }
            | RangeError::InvalidReservedIp { raw } => Some(raw),
        }
    }
}

/// Address range exactly as authored on a subnet object
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRangeSpec {
    #[serde(default)]
    pub cidr: String,

    #[serde(default)]
    pub gateway: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end: String,

    #[serde(default, rename = "excludeIPs", skip_serializing_if = "Vec::is_empty")]
    pub exclude_ips: Vec<String>,

    #[serde(default, rename = "reservedIPs", skip_serializing_if = "Vec::is_empty")]
    pub reserved_ips: Vec<String>,
}

impl AddressRangeSpec {
    /// Parse this spec into a validated range
    pub fn parse(&self) -> Result<ParsedAddressRange, RangeError> {
        parse_range(Some(self))
    }
}

/// Fully validated address range
///
/// Only obtainable through [`parse_range`] (or the `TryFrom` impls), so every
/// instance has passed all parsing rules.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAddressRange {
    cidr: IpNet,
    gateway: IpAddr,
    start: Option<IpAddr>,
    end: Option<IpAddr>,
    #[serde(rename = "excludeIPs")]
    exclude_ips: BTreeSet<IpAddr>,
    #[serde(rename = "reservedIPs")]
    reserved_ips: BTreeSet<IpAddr>,
}

impl ParsedAddressRange {
    /// Subnet block, with the address kept as written
    pub fn cidr(&self) -> IpNet {
        self.cidr
    }

    /// Network address of the block (host bits cleared)
    pub fn network(&self) -> IpAddr {
        self.cidr.network()
    }

    pub fn gateway(&self) -> IpAddr {
        self.gateway
    }

    pub fn start(&self) -> Option<IpAddr> {
        self.start
    }

    pub fn end(&self) -> Option<IpAddr> {
        self.end
    }

    pub fn exclude_ips(&self) -> &BTreeSet<IpAddr> {
        &self.exclude_ips
    }

    pub fn reserved_ips(&self) -> &BTreeSet<IpAddr> {
        &self.reserved_ips
    }

    /// Address family, taken from the CIDR
    pub fn ip_version(&self) -> IpVersion {
        IpVersion::of(&self.cidr.addr())
    }
}

impl TryFrom<&AddressRangeSpec> for ParsedAddressRange {
    type Error = RangeError;

    fn try_from(spec: &AddressRangeSpec) -> Result<Self, Self::Error> {
        parse_range(Some(spec))
    }
}

impl TryFrom<AddressRangeSpec> for ParsedAddressRange {
    type Error = RangeError;

    fn try_from(spec: AddressRangeSpec) -> Result<Self, Self::Error> {
        parse_range(Some(&spec))
    }
}

/// Parse a subnet's raw range declaration.
///
/// `None` models a subnet object without a range and fails with
/// [`RangeError::NilSpec`].
pub fn parse_range(spec: Option<&AddressRangeSpec>) -> Result<ParsedAddressRange, RangeError> {
    let spec = spec.ok_or(RangeError::NilSpec)?;

    let cidr: IpNet = spec.cidr.parse().map_err(|_| RangeError::InvalidCidr {
        raw: spec.cidr.clone(),
    })?;

    let gateway = parse_ip(&spec.gateway).ok_or_else(|| RangeError::InvalidGateway {
        raw: spec.gateway.clone(),
    })?;

    let start = parse_optional_ip(&spec.start, |raw| RangeError::InvalidStart { raw })?;
    let end = parse_optional_ip(&spec.end, |raw| RangeError::InvalidEnd { raw })?;

    let exclude_ips = parse_ip_list(&spec.exclude_ips, |raw| RangeError::InvalidExcludeIp { raw })?;
    let reserved_ips =
        parse_ip_list(&spec.reserved_ips, |raw| RangeError::InvalidReservedIp { raw })?;

    Ok(ParsedAddressRange {
        cidr,
        gateway,
        start,
        end,
        exclude_ips,
        reserved_ips,
    })
}

fn parse_ip(raw: &str) -> Option<IpAddr> {
    raw.parse().ok()
}

fn parse_optional_ip(
    raw: &str,
    err: impl FnOnce(String) -> RangeError,
) -> Result<Option<IpAddr>, RangeError> {
    if raw.is_empty() {
        return Ok(None);
    }
    parse_ip(raw).map(Some).ok_or_else(|| err(raw.to_string()))
}

fn parse_ip_list(
    raws: &[String],
    err: impl Fn(String) -> RangeError,
) -> Result<BTreeSet<IpAddr>, RangeError> {
    raws.iter()
        .map(|raw| parse_ip(raw).ok_or_else(|| err(raw.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(cidr: &str, gateway: &str) -> AddressRangeSpec {
        AddressRangeSpec {
            cidr: cidr.to_string(),
            gateway: gateway.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_nil_spec() {
        assert_eq!(parse_range(None), Err(RangeError::NilSpec));
    }

    #[test]
    fn test_minimal_range() {
        let range = spec("10.0.0.0/24", "10.0.0.1").parse().unwrap();
        assert_eq!(range.cidr().to_string(), "10.0.0.0/24");
        assert_eq!(range.gateway().to_string(), "10.0.0.1");
        assert_eq!(range.start(), None);
        assert_eq!(range.end(), None);
        assert!(range.exclude_ips().is_empty());
        assert!(range.reserved_ips().is_empty());
        assert_eq!(range.ip_version(), IpVersion::V4);
    }

    #[test]
    fn test_cidr_keeps_host_bits() {
        let range = spec("10.0.0.7/24", "10.0.0.1").parse().unwrap();
        assert_eq!(range.cidr().addr().to_string(), "10.0.0.7");
        assert_eq!(range.network().to_string(), "10.0.0.0");
    }

    #[test]
    fn test_cidr_requires_prefix() {
        let err = spec("10.0.0.0", "10.0.0.1").parse().unwrap_err();
        assert_eq!(err, RangeError::InvalidCidr { raw: "10.0.0.0".to_string() });
    }

    #[test]
    fn test_empty_gateway_is_rejected() {
        let err = spec("fd00::/64", "").parse().unwrap_err();
        assert_eq!(err.field(), "gateway");
        assert_eq!(err.raw(), Some(""));
    }

    #[test]
    fn test_first_bad_exclude_is_reported() {
        let mut s = spec("10.0.0.0/24", "10.0.0.1");
        s.exclude_ips = vec!["10.0.0.2".into(), "bogus".into(), "also-bogus".into()];
        s.reserved_ips = vec!["nope".into()];
        assert_eq!(
            s.parse().unwrap_err(),
            RangeError::InvalidExcludeIp { raw: "bogus".to_string() }
        );
    }

    #[test]
    fn test_serde_field_names() {
        let s: AddressRangeSpec = serde_json::from_str(
            r#"{"cidr":"fd00::/64","gateway":"fd00::1","excludeIPs":["fd00::2"],"reservedIPs":[]}"#,
        )
        .unwrap();
        assert_eq!(s.exclude_ips, vec!["fd00::2".to_string()]);
        assert_eq!(s.parse().unwrap().ip_version(), IpVersion::V6);
    }
}
