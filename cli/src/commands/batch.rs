use anyhow::Context;

use teamnet_common::config::Config;
use teamnet_common::team::selection::TeamSelection;
use teamnet_core::batch;

use crate::commands::OutputFormat;
use crate::commands::derive::{self, Outcome};
use crate::terminal::print;

pub fn batch(selection: &TeamSelection, format: OutputFormat, cfg: &Config) -> anyhow::Result<()> {
    let inputs: Vec<String> = selection.expand()?;
    let report = batch::derive_all(&inputs, cfg).context("batch derivation aborted")?;

    let outcomes: Vec<Outcome> = report
        .derived
        .iter()
        .map(|descriptor| (descriptor.team().to_string(), Some(*descriptor)))
        .collect();

    derive::emit(&outcomes, format)?;

    if format == OutputFormat::Table {
        print::summary(report.derived_count(), report.skipped_count(), cfg.quiet);
    }
    Ok(())
}
