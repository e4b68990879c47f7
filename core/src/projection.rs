//! The two output shapes of a derivation: the bare CIDR string and the
//! full details record. Both are views of the same [`SubnetDescriptor`].

use serde_json::Value;

use teamnet_common::SubnetError;
use teamnet_common::config::Config;
use teamnet_common::network::subnet::{SubnetDescriptor, SubnetRecord};

use crate::deriver::{self, TeamInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// `"10.<second>.<third>.0/24"`
    Cidr,
    /// Every field of [`SubnetRecord`].
    Details,
}

impl Projection {
    pub fn project(self, descriptor: &SubnetDescriptor) -> Result<Value, SubnetError> {
        match self {
            Projection::Cidr => Ok(Value::String(descriptor.subnet_cidr())),
            Projection::Details => Ok(serde_json::to_value(descriptor.to_record())?),
        }
    }
}

/// CIDR string of a team, or `None` when lenient mode skipped it.
pub fn subnet_cidr<I>(input: &I, cfg: &Config) -> Result<Option<String>, SubnetError>
where
    I: TeamInput + ?Sized,
{
    Ok(deriver::derive_with(input, cfg)?.map(|descriptor| descriptor.subnet_cidr()))
}

/// Details record of a team, or `None` when lenient mode skipped it.
pub fn subnet_details<I>(input: &I, cfg: &Config) -> Result<Option<SubnetRecord>, SubnetError>
where
    I: TeamInput + ?Sized,
{
    Ok(deriver::derive_with(input, cfg)?.map(|descriptor| descriptor.to_record()))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
