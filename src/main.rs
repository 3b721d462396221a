use anyhow::{Context, Result};
use clap::Parser;

use snapdock::cli::CliArgs;
use snapdock::config::LayoutConfig;
use snapdock::model::Snapshot;
use snapdock::scenario::Scenario;

fn main() -> Result<()> {
    snapdock::tracing::init();

    let args = CliArgs::parse();

    let config = match &args.config {
        Some(path) => LayoutConfig::load_from(path)?,
        None => LayoutConfig::load(),
    };

    let scenario = Scenario::load(&args.scenario)?;
    tracing::info!(
        steps = scenario.steps.len(),
        "replaying {}",
        args.scenario.display()
    );

    let run = scenario.replay(config);

    if args.every_publish {
        for snapshot in &run.published {
            println!("{}", render(snapshot, args.pretty)?);
        }
    } else {
        println!("{}", render(&run.final_snapshot, args.pretty)?);
    }

    Ok(())
}

fn render(snapshot: &Snapshot, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    };
    json.context("Failed to serialize snapshot")
}
