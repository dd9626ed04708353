//! LAN address resolution.
//!
//! Determines the IPv4 address at which this host is reachable from other
//! devices on the local network, for building the access URL printed at
//! startup.
//!
//! The gateway-subnet match is authoritative: the address picked is the
//! first up, non-loopback, global-unicast interface address whose subnet
//! contains the default gateway. When no gateway can be discovered (non-
//! Linux targets, or a route table without a default entry), resolution
//! falls back to the first non-loopback IPv4 interface address, and to
//! `localhost` on loopback-only hosts.

mod gateway;

pub use gateway::default_gateway;

use std::fmt;
use std::net::Ipv4Addr;

use if_addrs::IfAddr;

use crate::error::{Error, Result};

/// Address used by LAN clients to reach this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkAddress {
    /// A routable interface address on the local network.
    Lan(Ipv4Addr),
    /// Loopback-only host; only the machine itself can connect.
    Localhost,
}

impl fmt::Display for NetworkAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkAddress::Lan(ip) => ip.fmt(f),
            NetworkAddress::Localhost => f.write_str("localhost"),
        }
    }
}

/// An interface IPv4 address together with its netmask.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    ip: Ipv4Addr,
    netmask: Ipv4Addr,
}

/// Resolve the address for the access URL.
///
/// Fails with [`Error::NoRouteFound`] when a gateway is known but no
/// interface address shares its subnet.
pub fn resolve() -> Result<NetworkAddress> {
    let candidates = interface_addresses();

    match default_gateway() {
        Some(gw) => {
            tracing::debug!("default gateway: {gw}");
            lan_ip_for_gateway(&candidates, gw)
                .map(NetworkAddress::Lan)
                .ok_or(Error::NoRouteFound)
        }
        None => {
            tracing::debug!("gateway discovery unavailable, using first interface address");
            Ok(first_non_loopback(&candidates)
                .map(NetworkAddress::Lan)
                .unwrap_or(NetworkAddress::Localhost))
        }
    }
}

/// Enumerate assigned IPv4 addresses. An enumeration failure is logged and
/// treated as an empty scan rather than aborting resolution.
fn interface_addresses() -> Vec<Candidate> {
    let ifaces = match if_addrs::get_if_addrs() {
        Ok(ifaces) => ifaces,
        Err(e) => {
            tracing::warn!("failed to enumerate network interfaces: {e}");
            return Vec::new();
        }
    };

    ifaces
        .into_iter()
        .filter_map(|iface| match iface.addr {
            IfAddr::V4(v4) => Some(Candidate {
                ip: v4.ip,
                netmask: v4.netmask,
            }),
            IfAddr::V6(_) => None,
        })
        .collect()
}

/// Pick the global-unicast address whose subnet contains the gateway.
fn lan_ip_for_gateway(candidates: &[Candidate], gateway: Ipv4Addr) -> Option<Ipv4Addr> {
    candidates
        .iter()
        .filter(|c| is_global_unicast(c.ip))
        .find(|c| subnet_contains(c.ip, c.netmask, gateway))
        .map(|c| c.ip)
}

fn first_non_loopback(candidates: &[Candidate]) -> Option<Ipv4Addr> {
    candidates.iter().map(|c| c.ip).find(|ip| !ip.is_loopback())
}

fn subnet_contains(ip: Ipv4Addr, netmask: Ipv4Addr, other: Ipv4Addr) -> bool {
    let mask = u32::from(netmask);
    (u32::from(ip) & mask) == (u32::from(other) & mask)
}

fn is_global_unicast(ip: Ipv4Addr) -> bool {
    !ip.is_unspecified()
        && !ip.is_loopback()
        && !ip.is_link_local()
        && !ip.is_multicast()
        && !ip.is_broadcast()
}
