//! Derives many team identifiers in one call.
//!
//! Work is spread over rayon's pool; the report keeps the input order.

use rayon::prelude::*;
use tracing::{info, warn};

use teamnet_common::config::Config;
use teamnet_common::network::subnet::SubnetDescriptor;
use teamnet_common::{SubnetError, success};

use crate::deriver;

/// An input lenient mode left out, with the reason.
#[derive(Debug)]
pub struct Skipped {
    pub input: String,
    pub error: SubnetError,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub derived: Vec<SubnetDescriptor>,
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    pub fn derived_count(&self) -> usize {
        self.derived.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_empty(&self) -> bool {
        self.derived.is_empty() && self.skipped.is_empty()
    }
}

/// Derives every input.
///
/// Strict mode fails with the first error in input order. Lenient mode
/// collects the failures in [`BatchReport::skipped`] instead.
pub fn derive_all(inputs: &[String], cfg: &Config) -> Result<BatchReport, SubnetError> {
    info!("Deriving subnets for {} team identifier(s)", inputs.len());

    let results: Vec<Result<SubnetDescriptor, SubnetError>> = inputs
        .par_iter()
        .map(|input| deriver::try_derive(input.as_str(), cfg.policy))
        .collect();

    let mut report = BatchReport::default();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(descriptor) => report.derived.push(descriptor),
            Err(error) if cfg.mode.is_lenient() => {
                warn!(input = %input, kind = error.kind(), "skipping team: {error}");
                report.skipped.push(Skipped {
                    input: input.clone(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }

    let derived = report.derived_count();
    let unit: &str = if derived == 1 { "subnet has been" } else { "subnets have been" };
    success!("{derived} {unit} derived, {} skipped", report.skipped_count());

    Ok(report)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
