use std::fmt;

use pnet::ipnetwork::IpNetworkError;
use thiserror::Error;

/// The variable octets of a team subnet, `10.<second>.<third>.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Octet {
    Second,
    Third,
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Octet::Second => f.write_str("second"),
            Octet::Third => f.write_str("third"),
        }
    }
}

/// Everything that can stop a team identifier from becoming a subnet.
#[derive(Debug, Error)]
pub enum SubnetError {
    /// The input is not an integer at all (null, empty, non-numeric).
    #[error("invalid team identifier '{input}': not an integer")]
    InvalidInput { input: String },

    /// The integer is non-positive or has more than five digits.
    #[error("invalid team identifier '{input}': expected 1 to 5 digits (1-99999)")]
    InvalidLength { input: String },

    /// A derived octet does not fit into 0-255.
    #[error("team identifier '{input}' overflows the {octet} octet ({value} > 255)")]
    OctetOverflow { input: String, octet: Octet, value: u32 },

    #[error("'{input}' is not a team subnet")]
    NotTeamSubnet { input: String },

    #[error("invalid team selection '{input}': {reason}")]
    InvalidSelection { input: String, reason: String },

    #[error("network error: {0}")]
    Network(#[from] IpNetworkError),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl SubnetError {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            SubnetError::InvalidInput { .. } => "InvalidInput",
            SubnetError::InvalidLength { .. } => "InvalidLength",
            SubnetError::OctetOverflow { .. } => "OctetOverflow",
            SubnetError::NotTeamSubnet { .. } => "NotTeamSubnet",
            SubnetError::InvalidSelection { .. } => "InvalidSelection",
            SubnetError::Network(_) => "Network",
            SubnetError::Serialize(_) => "Serialize",
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
