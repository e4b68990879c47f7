use anyhow::Context;

use teamnet_common::config::Config;
use teamnet_core::{deriver, lookup};

use crate::terminal::{format, print};

pub fn identify(subnet: &str, cfg: &Config) -> anyhow::Result<()> {
    let team = lookup::identify(subnet, cfg.policy)
        .with_context(|| format!("no team owns '{subnet}'"))?;

    if cfg.quiet > 0 {
        print::print(&team.to_string());
        return Ok(());
    }

    let descriptor = deriver::derive(team, cfg.policy)?;
    print::tree_head(0, &format!("team {team}"));
    print::as_tree_one_level(format::subnet_to_detail(&descriptor));
    Ok(())
}
