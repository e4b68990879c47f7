//! Reverse lookup: which team owns a given subnet.
//!
//! Under either split policy the team to subnet mapping is injective, so a
//! team subnet names exactly one team. The candidate is always re-derived
//! and compared before it is returned.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;
use tracing::debug;

use teamnet_common::SubnetError;
use teamnet_common::config::SplitPolicy;
use teamnet_common::network::subnet::{CIDR_PREFIX, FIRST_OCTET};
use teamnet_common::team::TeamNumber;

use crate::deriver;

/// Finds the team whose subnet is `subnet`.
///
/// Accepts a /24 in CIDR notation (`10.12.34.0/24`) or any single address
/// inside a team subnet (`10.12.34.57`).
pub fn identify(subnet: &str, policy: SplitPolicy) -> Result<TeamNumber, SubnetError> {
    let not_team = || SubnetError::NotTeamSubnet {
        input: subnet.to_string(),
    };

    let trimmed = subnet.trim();
    let network: Ipv4Network = if trimmed.contains('/') {
        trimmed.parse()?
    } else {
        let addr = trimmed.parse::<Ipv4Addr>().map_err(|_| not_team())?;
        Ipv4Network::new(addr, CIDR_PREFIX)?
    };

    if network.prefix() != CIDR_PREFIX {
        return Err(not_team());
    }

    let [first, second, third, _] = network.network().octets();
    if first != FIRST_OCTET {
        return Err(not_team());
    }

    let candidate = candidate_team(second, third).ok_or_else(not_team)?;
    let team = TeamNumber::try_from(candidate).map_err(|_| not_team())?;
    let derived = deriver::derive(team, policy).map_err(|_| not_team())?;

    if derived.network_address() != network.network() {
        return Err(not_team());
    }

    debug!(team = team.get(), subnet = %derived.subnet_cidr(), "identified team subnet");
    Ok(team)
}

/// Undoes the digit split. A second octet of zero means the whole number
/// sits in the third octet; otherwise the third octet holds the last two
/// digits.
fn candidate_team(second: u8, third: u8) -> Option<u32> {
    let (second, third) = (u32::from(second), u32::from(third));
    match second {
        0 => Some(third),
        _ if third < 100 => Some(second * 100 + third),
        _ => None,
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
