// Copyright (c) 2025 - Cowboy AI, Inc.
//! IP Version Tag

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::IpAddr;

/// IP address family of a subnet, an IP instance or a manager handle.
///
/// Cluster objects carry the version as a tag string (`"4"` or `"6"`).
/// Only the explicit IPv6 tag selects [`IpVersion::V6`]; every other tag,
/// including an empty or unknown one, falls back to [`IpVersion::V4`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IpVersion {
    #[default]
    V4,
    V6,
}

impl IpVersion {
    /// Tag used by cluster objects for IPv4
    pub const V4_TAG: &'static str = "4";

    /// Tag used by cluster objects for IPv6
    pub const V6_TAG: &'static str = "6";

    /// Interpret a raw version tag, defaulting to IPv4 for anything but `"6"`.
    pub fn from_tag(tag: &str) -> Self {
        if tag == Self::V6_TAG {
            IpVersion::V6
        } else {
            IpVersion::V4
        }
    }

    /// Cluster object tag for this version
    pub fn as_tag(&self) -> &'static str {
        match self {
            IpVersion::V4 => Self::V4_TAG,
            IpVersion::V6 => Self::V6_TAG,
        }
    }

    /// Address family of a concrete address
    pub fn of(address: &IpAddr) -> Self {
        match address {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

impl From<String> for IpVersion {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<&str> for IpVersion {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<IpVersion> for String {
    fn from(version: IpVersion) -> Self {
        version.as_tag().to_string()
    }
}

impl From<IpAddr> for IpVersion {
    fn from(address: IpAddr) -> Self {
        Self::of(&address)
    }
}
