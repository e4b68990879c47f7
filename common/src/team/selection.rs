//! # Team Selection Model
//!
//! Parses compact descriptions of many team identifiers at once:
//! * A single identifier (e.g., `42`).
//! * An inclusive range (e.g., `100-120`).
//! * A comma-separated list of both (e.g., `1-5, 1234, 20000`).
//!
//! Single entries are kept verbatim and validated later by the deriver, so
//! a bad entry is reported (or skipped) like any other bad identifier.

use std::str::FromStr;

use crate::error::SubnetError;

/// Upper bound on the number of identifiers one selection may expand to.
pub const MAX_SELECTION_LEN: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamSelection {
    /// One identifier, as written.
    Single { input: String },
    /// Every integer in `start..=end`.
    Range { start: u64, end: u64 },
    /// Holds a list of selections
    Multi { selections: Vec<TeamSelection> },
}

impl FromStr for TeamSelection {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            return parse_commas(s);
        }

        if let Some(selection) = parse_range(s)? {
            return Ok(selection);
        }

        Ok(TeamSelection::Single {
            input: s.trim().to_string(),
        })
    }
}

impl TeamSelection {
    /// Expands the selection into raw identifiers, in the order written.
    pub fn expand(&self) -> Result<Vec<String>, SubnetError> {
        let mut inputs = Vec::new();
        self.expand_into(&mut inputs)?;
        Ok(inputs)
    }

    fn expand_into(&self, inputs: &mut Vec<String>) -> Result<(), SubnetError> {
        match self {
            TeamSelection::Single { input } => inputs.push(input.clone()),
            TeamSelection::Range { start, end } => {
                let len = end.checked_sub(*start).map_or(0, |span| span.saturating_add(1));
                if (inputs.len() as u64).saturating_add(len) > MAX_SELECTION_LEN as u64 {
                    return Err(too_large(&format!("{start}-{end}")));
                }
                inputs.extend((*start..=*end).map(|n| n.to_string()));
            }
            TeamSelection::Multi { selections } => {
                for selection in selections {
                    selection.expand_into(inputs)?;
                }
            }
        }

        if inputs.len() > MAX_SELECTION_LEN {
            return Err(too_large(&format!("{} entries", inputs.len())));
        }
        Ok(())
    }
}

fn too_large(input: &str) -> SubnetError {
    SubnetError::InvalidSelection {
        input: input.to_string(),
        reason: format!("expands to more than {MAX_SELECTION_LEN} identifiers"),
    }
}

/// Parses a comma-separated list of selections (e.g., "1-5, 1234").
pub fn parse_commas(s: &str) -> Result<TeamSelection, SubnetError> {
    let mut selections = Vec::new();

    for part in s.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        selections.push(TeamSelection::from_str(part)?);
    }

    if selections.is_empty() {
        return Err(SubnetError::InvalidSelection {
            input: s.to_string(),
            reason: "no identifiers given".to_string(),
        });
    }

    Ok(TeamSelection::Multi { selections })
}

/// Parses a range string like "100-120".
fn parse_range(s: &str) -> Result<Option<TeamSelection>, SubnetError> {
    let Some((start_str, end_str)) = s.split_once('-') else {
        return Ok(None);
    };

    let start = parse_bound(start_str, s, "start")?;
    let end = parse_bound(end_str, s, "end")?;

    if start > end {
        return Err(SubnetError::InvalidSelection {
            input: s.to_string(),
            reason: format!("range start {start} is greater than end {end}"),
        });
    }

    Ok(Some(TeamSelection::Range { start, end }))
}

fn parse_bound(bound: &str, original_s: &str, which: &str) -> Result<u64, SubnetError> {
    bound
        .trim()
        .parse::<u64>()
        .map_err(|e| SubnetError::InvalidSelection {
            input: original_s.to_string(),
            reason: format!("invalid range {which} '{}': {e}", bound.trim()),
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
