use anyhow::Context;
use serde_json::Value;

use teamnet_common::config::{Config, ErrorMode};
use teamnet_core::filters::{self, FILTERS};

use crate::terminal::print;

pub fn list(cfg: &Config) {
    if cfg.quiet > 0 {
        for filter in FILTERS {
            print::print(filter.name);
        }
        return;
    }

    let width = FILTERS.iter().map(|filter| filter.name.len()).max().unwrap_or(0);
    print::set_key_width(width);
    for filter in FILTERS {
        let mode = match filter.mode {
            ErrorMode::Strict => "strict",
            ErrorMode::Lenient => "lenient",
        };
        print::aligned_line(filter.name, format!("{} ({mode})", filter.summary));
    }
}

/// Runs a named function on a value. Anything that is not valid JSON is
/// passed on as a plain string, so `call team_subnet_cidr 42` just works.
pub fn call(name: &str, raw: &str, cfg: &Config) -> anyhow::Result<()> {
    let filter = filters::lookup(name).with_context(|| format!("unknown function '{name}'"))?;
    let input: Value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let output = filter
        .apply_with(&input, cfg.policy)
        .with_context(|| format!("{name} failed"))?;

    print::print(&serde_json::to_string_pretty(&output)?);
    Ok(())
}
