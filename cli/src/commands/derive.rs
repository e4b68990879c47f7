use anyhow::Context;
use colored::*;

use teamnet_common::config::Config;
use teamnet_common::network::subnet::{SubnetDescriptor, SubnetRecord};
use teamnet_core::deriver;

use crate::commands::OutputFormat;
use crate::terminal::{colors, format, print};

/// One requested team and what came of it. `None` means lenient mode skipped it.
pub type Outcome = (String, Option<SubnetDescriptor>);

pub fn derive(teams: &[String], format: OutputFormat, cfg: &Config) -> anyhow::Result<()> {
    let mut outcomes: Vec<Outcome> = Vec::with_capacity(teams.len());

    for team in teams {
        let descriptor = deriver::derive_with(team.as_str(), cfg)
            .with_context(|| format!("failed to derive subnet for team '{team}'"))?;
        outcomes.push((team.clone(), descriptor));
    }

    emit(&outcomes, format)
}

/// Writes the outcomes to stdout in the requested format.
pub fn emit(outcomes: &[Outcome], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            for (idx, (team, descriptor)) in outcomes.iter().enumerate() {
                print_tree(idx, team, descriptor.as_ref());
                if idx + 1 != outcomes.len() {
                    print::print("");
                }
            }
        }
        OutputFormat::Cidr => {
            for descriptor in outcomes.iter().filter_map(|(_, descriptor)| descriptor.as_ref()) {
                print::print(&descriptor.subnet_cidr());
            }
        }
        OutputFormat::Json => {
            let records: Vec<Option<SubnetRecord>> = outcomes
                .iter()
                .map(|(_, descriptor)| descriptor.as_ref().map(SubnetDescriptor::to_record))
                .collect();
            let json = serde_json::to_string_pretty(&records).context("encoding subnet records")?;
            print::print(&json);
        }
    }
    Ok(())
}

fn print_tree(idx: usize, team: &str, descriptor: Option<&SubnetDescriptor>) {
    print::tree_head(idx, &format!("team {team}"));
    match descriptor {
        Some(descriptor) => print::as_tree_one_level(format::subnet_to_detail(descriptor)),
        None => print::as_tree_one_level(vec![(
            "Status".to_string(),
            "skipped".color(colors::WARNING),
        )]),
    }
}
