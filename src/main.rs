//! Tangle command line
//!
//! Replays graph operation scripts and prints the resulting graphs as JSON.

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tangle::{Runner, Script};
use tangle_core::core::{init_logging, Config};
use tangle_core::system::gather_text;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("run", sub)) => run(sub),
        Some(("metrics", sub)) => metrics(sub),
        _ => unreachable!("subcommand is required"),
    }
}

fn cli() -> Command {
    let script = Arg::new("script")
        .value_name("SCRIPT")
        .required(true)
        .help("JSON operation script");
    let config = Arg::new("config")
        .short('c')
        .long("config")
        .value_name("FILE")
        .help("Configuration file path");
    let log_level = Arg::new("log-level")
        .long("log-level")
        .value_name("LEVEL")
        .help("Log level (trace, debug, info, warn, error)");

    Command::new("tangle")
        .version(tangle::VERSION)
        .about("Build mutable graphs from operation scripts.")
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Replay a script and print the resulting graphs")
                .arg(script.clone())
                .arg(config.clone())
                .arg(log_level.clone())
                .arg(
                    Arg::new("pretty")
                        .long("pretty")
                        .action(ArgAction::SetTrue)
                        .help("Pretty-print the JSON report"),
                ),
        )
        .subcommand(
            Command::new("metrics")
                .about("Replay a script and print Prometheus metrics")
                .arg(script)
                .arg(config)
                .arg(log_level),
        )
}

/// Load configuration and apply CLI overrides, then start logging
fn setup(matches: &ArgMatches) -> anyhow::Result<Config> {
    let path = matches.get_one::<String>("config").map(String::as_str);
    let mut config = tangle::load_config(path)?;
    if let Some(level) = matches.get_one::<String>("log-level") {
        config.logging.level = level.clone();
    }
    config.validate()?;

    init_logging(&config.logging);
    info!("Starting {} v{}", tangle::NAME, tangle::VERSION);
    if let Some(path) = path {
        info!("Loaded configuration from: {}", path);
    }
    Ok(config)
}

fn replay(matches: &ArgMatches, config: &Config) -> anyhow::Result<(Runner, tangle::Report)> {
    let path = matches
        .get_one::<String>("script")
        .context("Missing script path")?;
    let script = Script::from_file(path)?;
    let mut runner = Runner::new(config);
    let report = runner.run(&script)?;
    Ok((runner, report))
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = setup(matches)?;
    let (_, report) = replay(matches, &config)?;

    let json = if matches.get_flag("pretty") {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);
    Ok(())
}

fn metrics(matches: &ArgMatches) -> anyhow::Result<()> {
    let config = setup(matches)?;
    replay(matches, &config)?;
    print!("{}", gather_text()?);
    Ok(())
}
