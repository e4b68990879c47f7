//! Named, side-effect-free functions for templating and automation hosts.
//!
//! The table is a plain constant. A host binds the names into its own
//! environment however it likes; nothing here registers itself anywhere.
//! Values cross the boundary as [`serde_json::Value`], the common currency
//! of template engines.

use serde_json::Value;

use teamnet_common::SubnetError;
use teamnet_common::config::{Config, ErrorMode, SplitPolicy};

use crate::deriver;
use crate::projection::Projection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    pub name: &'static str,
    pub summary: &'static str,
    pub projection: Projection,
    pub mode: ErrorMode,
}

pub const FILTERS: &[Filter] = &[
    Filter {
        name: "team_subnet_cidr",
        summary: "CIDR string of a team subnet, fails on invalid input",
        projection: Projection::Cidr,
        mode: ErrorMode::Strict,
    },
    Filter {
        name: "team_subnet_cidr_or_none",
        summary: "CIDR string of a team subnet, null on invalid input",
        projection: Projection::Cidr,
        mode: ErrorMode::Lenient,
    },
    Filter {
        name: "team_subnet_details",
        summary: "Full subnet record of a team, fails on invalid input",
        projection: Projection::Details,
        mode: ErrorMode::Strict,
    },
    Filter {
        name: "generate_subnet_details_filter",
        summary: "Full subnet record of a team, null on invalid input",
        projection: Projection::Details,
        mode: ErrorMode::Lenient,
    },
];

pub fn lookup(name: &str) -> Option<&'static Filter> {
    FILTERS.iter().find(|filter| filter.name == name)
}

impl Filter {
    /// Runs the filter. Lenient filters return `Value::Null` where strict
    /// ones return the error.
    pub fn apply(&self, input: &Value) -> Result<Value, SubnetError> {
        self.apply_with(input, SplitPolicy::default())
    }

    /// Same as [`Filter::apply`] with an explicit split policy.
    pub fn apply_with(&self, input: &Value, policy: SplitPolicy) -> Result<Value, SubnetError> {
        let cfg = Config {
            mode: self.mode,
            policy,
            ..Config::default()
        };

        match deriver::derive_with(input, &cfg)? {
            Some(descriptor) => self.projection.project(&descriptor),
            None => Ok(Value::Null),
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
