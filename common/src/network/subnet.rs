//! # Team Subnet Model
//!
//! A team owns the /24 `10.<second>.<third>.0/24`. Inside it the low end
//! (`.0`-`.19`) is kept for routers and infrastructure, the high end
//! (`.200`-`.255`) for overflow, and `.20`-`.199` is assignable.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;
use serde::{Deserialize, Serialize};

use crate::error::SubnetError;
use crate::network::range::AssignableRange;
use crate::team::TeamNumber;

pub const FIRST_OCTET: u8 = 10;
pub const CIDR_PREFIX: u8 = 24;
pub const FIRST_ASSIGNABLE_OFFSET: u32 = 20;
pub const LAST_ASSIGNABLE_OFFSET: u32 = 199;

/// The subnet derived for one team. Every value is computed from the
/// network, so the fields can never disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetDescriptor {
    team: TeamNumber,
    network: Ipv4Network,
}

impl SubnetDescriptor {
    /// Builds the descriptor for `10.<second>.<third>.0/24`.
    ///
    /// Octet decomposition belongs to the deriver; this only assembles the
    /// network once the octets are known to be valid.
    pub fn from_octets(team: TeamNumber, second: u8, third: u8) -> Result<Self, SubnetError> {
        let base = Ipv4Addr::new(FIRST_OCTET, second, third, 0);
        let network = Ipv4Network::new(base, CIDR_PREFIX)?;
        Ok(Self { team, network })
    }

    pub fn team(&self) -> TeamNumber {
        self.team
    }

    pub fn network(&self) -> Ipv4Network {
        self.network
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn cidr_prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn first_assignable_ip(&self) -> Ipv4Addr {
        self.offset(FIRST_ASSIGNABLE_OFFSET)
    }

    pub fn last_assignable_ip(&self) -> Ipv4Addr {
        self.offset(LAST_ASSIGNABLE_OFFSET)
    }

    pub fn assignable_range(&self) -> AssignableRange {
        AssignableRange::new(self.first_assignable_ip(), self.last_assignable_ip())
    }

    pub fn second_octet(&self) -> u8 {
        self.network_address().octets()[1]
    }

    pub fn third_octet(&self) -> u8 {
        self.network_address().octets()[2]
    }

    /// `10.<second>.<third>`
    pub fn base_ip_prefix(&self) -> String {
        let [first, second, third, _] = self.network_address().octets();
        format!("{first}.{second}.{third}")
    }

    /// `10.<second>.<third>.0/24`
    pub fn subnet_cidr(&self) -> String {
        format!("{}/{}", self.network_address(), self.cidr_prefix())
    }

    pub fn to_record(&self) -> SubnetRecord {
        SubnetRecord::from(self)
    }

    fn offset(&self, offset: u32) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network.network()) + offset)
    }
}

/// Flat, serializable view of a [`SubnetDescriptor`] as handed to
/// templating and automation hosts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubnetRecord {
    pub network: Ipv4Addr,
    pub subnet_cidr: String,
    pub base_ip_prefix: String,
    pub cidr_prefix: u8,
    pub broadcast_ip: Ipv4Addr,
    pub first_assignable_ip: Ipv4Addr,
    pub last_assignable_ip: Ipv4Addr,
    pub valid: bool,
}

impl From<&SubnetDescriptor> for SubnetRecord {
    fn from(descriptor: &SubnetDescriptor) -> Self {
        Self {
            network: descriptor.network_address(),
            subnet_cidr: descriptor.subnet_cidr(),
            base_ip_prefix: descriptor.base_ip_prefix(),
            cidr_prefix: descriptor.cidr_prefix(),
            broadcast_ip: descriptor.broadcast_address(),
            first_assignable_ip: descriptor.first_assignable_ip(),
            last_assignable_ip: descriptor.last_assignable_ip(),
            valid: true,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(team: u32, second: u8, third: u8) -> SubnetDescriptor {
        let team = TeamNumber::try_from(team).unwrap();
        SubnetDescriptor::from_octets(team, second, third).unwrap()
    }

    #[test]
    fn test_addresses() {
        let subnet = descriptor(1234, 12, 34);
        assert_eq!(subnet.network_address(), Ipv4Addr::new(10, 12, 34, 0));
        assert_eq!(subnet.broadcast_address(), Ipv4Addr::new(10, 12, 34, 255));
        assert_eq!(subnet.first_assignable_ip(), Ipv4Addr::new(10, 12, 34, 20));
        assert_eq!(subnet.last_assignable_ip(), Ipv4Addr::new(10, 12, 34, 199));
        assert_eq!(subnet.cidr_prefix(), 24);
        assert_eq!(subnet.second_octet(), 12);
        assert_eq!(subnet.third_octet(), 34);
    }

    #[test]
    fn test_strings() {
        let subnet = descriptor(5, 0, 5);
        assert_eq!(subnet.base_ip_prefix(), "10.0.5");
        assert_eq!(subnet.subnet_cidr(), "10.0.5.0/24");
    }

    #[test]
    fn test_highest_network_stays_inside() {
        let subnet = descriptor(25599, 255, 99);
        assert_eq!(subnet.broadcast_address(), Ipv4Addr::new(10, 255, 99, 255));
        assert!(subnet.network().contains(subnet.last_assignable_ip()));
    }

    #[test]
    fn test_record_shape() {
        let record = descriptor(12345, 123, 45).to_record();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "network": "10.123.45.0",
                "subnet_cidr": "10.123.45.0/24",
                "base_ip_prefix": "10.123.45",
                "cidr_prefix": 24,
                "broadcast_ip": "10.123.45.255",
                "first_assignable_ip": "10.123.45.20",
                "last_assignable_ip": "10.123.45.199",
                "valid": true,
            })
        );
    }
}
