// Copyright (c) 2025 - Cowboy AI, Inc.
//! Per-version manager selection
//!
//! The daemon constructs one route, neighbor and firewall manager per address
//! family at startup. Reconciliation code asks for the one matching an
//! [`IpVersion`]; this module only picks, it never creates or drops handles.
//!
//! Selection is total. [`IpVersion::V6`] selects the IPv6 handle and every
//! other version value selects the IPv4 handle.

use crate::domain::IpVersion;

/// A pair of handles, one per address family
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualStack<T> {
    v4: T,
    v6: T,
}

impl<T> DualStack<T> {
    pub fn new(v4: T, v6: T) -> Self {
        Self { v4, v6 }
    }

    /// Handle for `version`, defaulting to IPv4
    pub fn select(&self, version: IpVersion) -> &T {
        match version {
            IpVersion::V6 => &self.v6,
            _ => &self.v4,
        }
    }

    /// Handle for a raw cluster version tag
    pub fn select_by_tag(&self, tag: &str) -> &T {
        self.select(IpVersion::from_tag(tag))
    }

    pub fn v4(&self) -> &T {
        &self.v4
    }

    pub fn v6(&self) -> &T {
        &self.v6
    }
}

/// Route, neighbor and firewall managers for both address families
#[derive(Debug, Clone)]
pub struct NetworkManagers<R, N, F> {
    route: DualStack<R>,
    neigh: DualStack<N>,
    firewall: DualStack<F>,
}

impl<R, N, F> NetworkManagers<R, N, F> {
    pub fn new(route: DualStack<R>, neigh: DualStack<N>, firewall: DualStack<F>) -> Self {
        Self {
            route,
            neigh,
            firewall,
        }
    }

    pub fn select_route_manager(&self, version: IpVersion) -> &R {
        self.route.select(version)
    }

    pub fn select_neigh_manager(&self, version: IpVersion) -> &N {
        self.neigh.select(version)
    }

    pub fn select_firewall_manager(&self, version: IpVersion) -> &F {
        self.firewall.select(version)
    }

    pub fn route_managers(&self) -> &DualStack<R> {
        &self.route
    }

    pub fn neigh_managers(&self) -> &DualStack<N> {
        &self.neigh
    }

    pub fn firewall_managers(&self) -> &DualStack<F> {
        &self.firewall
    }
}
