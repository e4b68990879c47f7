//! Turns a team identifier into its /24.
//!
//! The pipeline is fixed: parse the input into a [`TeamNumber`], split it
//! into second and third octet by digit count, check both fit into a byte,
//! then assemble the network. Any step may fail; nothing is ever clamped.

use serde_json::Value;
use tracing::{debug, warn};

use teamnet_common::config::{Config, SplitPolicy};
use teamnet_common::network::subnet::SubnetDescriptor;
use teamnet_common::team::TeamNumber;
use teamnet_common::{Octet, SubnetError};

/// Anything a caller may hand over as a team identifier.
pub trait TeamInput {
    fn to_team(&self) -> Result<TeamNumber, SubnetError>;

    /// The input as the caller wrote it, for error messages.
    fn describe(&self) -> String;
}

impl TeamInput for str {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        self.parse()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl TeamInput for String {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        self.as_str().to_team()
    }

    fn describe(&self) -> String {
        self.clone()
    }
}

impl TeamInput for i64 {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        TeamNumber::try_from(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl TeamInput for u32 {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        TeamNumber::try_from(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl TeamInput for TeamNumber {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        Ok(*self)
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl TeamInput for Value {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        TeamNumber::try_from(self)
    }

    fn describe(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

impl<T: TeamInput> TeamInput for Option<T> {
    fn to_team(&self) -> Result<TeamNumber, SubnetError> {
        match self {
            Some(input) => input.to_team(),
            None => Err(SubnetError::InvalidInput {
                input: self.describe(),
            }),
        }
    }

    fn describe(&self) -> String {
        self.as_ref()
            .map_or_else(|| "null".to_string(), |input| input.describe())
    }
}

/// Splits a team number into raw `(second, third)` octet values.
///
/// The values are not range checked; 5-digit numbers above 25599 and
/// 3-digit numbers above 255 (standard policy) produce values over 255.
pub fn decompose(team: TeamNumber, policy: SplitPolicy) -> (u32, u32) {
    let n = team.get();
    match (team.digits(), policy) {
        (1..=2, _) | (3, SplitPolicy::Standard) => (0, n),
        _ => (n / 100, n % 100),
    }
}

/// Derives the subnet of a validated team number.
pub fn derive(team: TeamNumber, policy: SplitPolicy) -> Result<SubnetDescriptor, SubnetError> {
    let (second, third) = decompose(team, policy);
    let second = octet(second, Octet::Second, team)?;
    let third = octet(third, Octet::Third, team)?;

    let descriptor = SubnetDescriptor::from_octets(team, second, third)?;
    debug!(team = team.get(), subnet = %descriptor.subnet_cidr(), "derived team subnet");
    Ok(descriptor)
}

/// Parses and derives in one step, failing on the first problem.
pub fn try_derive<I>(input: &I, policy: SplitPolicy) -> Result<SubnetDescriptor, SubnetError>
where
    I: TeamInput + ?Sized,
{
    let team = input.to_team()?;
    derive(team, policy).map_err(|err| match err {
        SubnetError::OctetOverflow { octet, value, .. } => SubnetError::OctetOverflow {
            input: input.describe(),
            octet,
            value,
        },
        other => other,
    })
}

/// Derives according to the configured [`ErrorMode`](teamnet_common::config::ErrorMode).
///
/// Strict mode returns the error. Lenient mode logs it and returns
/// `Ok(None)`, so callers iterating over many identifiers can move on.
pub fn derive_with<I>(input: &I, cfg: &Config) -> Result<Option<SubnetDescriptor>, SubnetError>
where
    I: TeamInput + ?Sized,
{
    match try_derive(input, cfg.policy) {
        Ok(descriptor) => Ok(Some(descriptor)),
        Err(err) if cfg.mode.is_lenient() => {
            warn!(input = %input.describe(), kind = err.kind(), "skipping team: {err}");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn octet(value: u32, octet: Octet, team: TeamNumber) -> Result<u8, SubnetError> {
    u8::try_from(value).map_err(|_| SubnetError::OctetOverflow {
        input: team.to_string(),
        octet,
        value,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
