// ABOUTME: Command-line driver for the territory registry.
// ABOUTME: Loads a grant file, then checks, lists, demos, or runs a REPL.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rustyline::DefaultEditor;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use territory::prelude::*;

const GRANTS_FILE_NAME: &str = ".territory.json";

#[derive(Debug, Parser)]
#[command(name = "territory", version, about = "Check film distribution rights by region")]
struct Cli {
    /// Grant file to load (JSON)
    #[arg(long, global = true, env = "TERRITORY_GRANTS")]
    grants: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether a distributor may distribute in a region
    Check {
        distributor: String,
        region: String,
        /// Print the reason instead of true/false
        #[arg(long)]
        explain: bool,
    },
    /// Print the loaded grants as JSON
    List,
    /// Run the sample distribution and print each check
    Demo,
    /// Interactive session for adding and checking rights
    Repl,
}

// ============================================================================
// Configuration
// ============================================================================

fn find_grants(explicit: Option<PathBuf>) -> Option<PathBuf> {
    if explicit.is_some() {
        return explicit;
    }

    // Try .territory.json in current directory
    let local = PathBuf::from(GRANTS_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    // Try ~/.territory.json
    if let Some(home) = dirs::home_dir() {
        let global = home.join(GRANTS_FILE_NAME);
        if global.exists() {
            return Some(global);
        }
    }

    None
}

fn load_registry(explicit: Option<PathBuf>) -> Result<Registry> {
    let Some(path) = find_grants(explicit) else {
        debug!("no grant file found, starting empty");
        return Ok(Registry::new());
    };

    let grants = GrantsFile::load(&path)?;
    Ok(Registry::from_grants(&grants))
}

// ============================================================================
// Demo
// ============================================================================

fn sample_registry() -> Registry {
    Registry::builder()
        .include("DISTRIBUTOR1", "INDIA")
        .include("DISTRIBUTOR1", "UNITEDSTATES")
        .exclude("DISTRIBUTOR1", "KARNATAKA-INDIA")
        .exclude("DISTRIBUTOR1", "CHENNAI-TAMILNADU-INDIA")
        // DISTRIBUTOR2 resells part of DISTRIBUTOR1's territory
        .include("DISTRIBUTOR2", "INDIA")
        .exclude("DISTRIBUTOR2", "TAMILNADU-INDIA")
        // DISTRIBUTOR3 resells part of DISTRIBUTOR2's territory
        .include("DISTRIBUTOR3", "HUBLI-KARNATAKA-INDIA")
        .build()
}

const SAMPLE_CHECKS: &[(&str, &str)] = &[
    ("DISTRIBUTOR1", "CHICAGO-ILLINOIS-UNITEDSTATES"),
    ("DISTRIBUTOR1", "CHENNAI-TAMILNADU-INDIA"),
    ("DISTRIBUTOR1", "BANGALORE-KARNATAKA-INDIA"),
    ("DISTRIBUTOR2", "CHICAGO-ILLINOIS-UNITEDSTATES"),
    ("DISTRIBUTOR2", "TIRUCHIRAPPALLI-TAMILNADU-INDIA"),
    ("DISTRIBUTOR3", "HUBLI-KARNATAKA-INDIA"),
    ("DISTRIBUTOR3", "BANGALORE-KARNATAKA-INDIA"),
];

fn run_demo() {
    let registry = sample_registry();
    for (distributor, region) in SAMPLE_CHECKS {
        println!(
            "{} {} {}",
            distributor,
            region,
            registry.check_permission(distributor, region)
        );
    }
}

// ============================================================================
// REPL
// ============================================================================

const REPL_HELP: &str = "\
Commands:
  include <DISTRIBUTOR> <REGION>   grant a region
  exclude <DISTRIBUTOR> <REGION>   withhold a region
  check <DISTRIBUTOR> <REGION>     print true/false
  explain <DISTRIBUTOR> <REGION>   print why a region is or isn't granted
  list                             print all grants as JSON
  save <FILE>                      write all grants to a file
  help                             show this message
  quit                             leave

The distributor is the first word; the region is the rest of the line,
so regions may contain spaces.";

/// Split `<DISTRIBUTOR> <REGION...>` into its two parts.
fn distributor_and_region(args: &str) -> Option<(&str, &str)> {
    let (distributor, region) = args.split_once(char::is_whitespace)?;
    let region = region.trim();
    (!region.is_empty()).then_some((distributor, region))
}

/// Run one REPL line against the registry. Returns false when the session should end.
fn handle_line(registry: &mut Registry, line: &str) -> Result<bool> {
    let line = line.trim();
    let (command, args) = line
        .split_once(char::is_whitespace)
        .map(|(command, args)| (command, args.trim()))
        .unwrap_or((line, ""));

    match (command, args) {
        ("", _) => {}
        ("quit" | "exit", "") => return Ok(false),
        ("help", "") => println!("{}", REPL_HELP),
        ("list", "") => println!("{}", registry.to_grants().to_json()?),
        ("save", path) if !path.is_empty() => {
            registry.to_grants().save(path)?;
            println!("Saved {} distributors to {}", registry.len(), path);
        }
        ("include" | "exclude" | "check" | "explain", args) => {
            let Some((distributor, region)) = distributor_and_region(args) else {
                bail!("Usage: {} <DISTRIBUTOR> <REGION>", command);
            };
            match command {
                "include" => registry.add_permission(distributor, region, ""),
                "exclude" => registry.add_permission(distributor, "", region),
                "check" => println!("{}", registry.check_permission(distributor, region)),
                _ => println!("{}", registry.explain(distributor, region)),
            }
        }
        _ => bail!("Unrecognized command: {} (try 'help')", line),
    }
    Ok(true)
}

fn run_repl(mut registry: Registry) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Type 'help' for commands, 'quit' to exit.\n");

    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(_) => break,
        };

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let _ = rl.add_history_entry(line);
        match handle_line(&mut registry, line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    // .env may set RUST_LOG, so read it before the subscriber
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Failed to read .env: {}", e);
        }
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            distributor,
            region,
            explain,
        } => {
            let registry = load_registry(cli.grants)?;
            if explain {
                println!("{}", registry.explain(&distributor, &region));
            } else {
                println!("{}", registry.check_permission(&distributor, &region));
            }
        }
        Commands::List => {
            let registry = load_registry(cli.grants)?;
            println!("{}", registry.to_grants().to_json()?);
        }
        Commands::Demo => run_demo(),
        Commands::Repl => run_repl(load_registry(cli.grants)?)?,
    }

    Ok(())
}
