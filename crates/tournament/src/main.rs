//! Tournament CLI
//!
//! Show standings and compute Swiss pairings for an event file.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use swiss_core::{DrawStrategy, PairingEngine, RepairPolicy};
use tournament::{pairings_report, standings_report, to_json, EventFile, Tournament};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Swiss Tournament Pairings");
    println!();
    println!("Usage:");
    println!("  tournament standings <event.toml> [--json]");
    println!("  tournament pair <event.toml> [--json] [--seed N] [--repair POLICY]");
    println!();
    println!("Repair policies:");
    println!("  single-swap   - Replace a rematch once, keep the replacement (default)");
    println!("  scan-pool     - Take the first unplayed opponent in the pool");
    println!("  backtrack     - Search the whole field for a rematch-free round");
    println!();
    println!("Examples:");
    println!("  tournament standings club_night.toml");
    println!("  tournament pair club_night.toml --seed 7 --repair backtrack");
}

/// Options shared by the subcommands
struct Options {
    json: bool,
    seed: Option<u64>,
    repair: Option<RepairPolicy>,
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        json: false,
        seed: None,
        repair: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" | "-j" => options.json = true,
            "--seed" | "-s" => {
                let value = args.get(i + 1).ok_or("--seed requires a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("Invalid seed: {}", value))?;
                options.seed = Some(seed);
                i += 1;
            }
            "--repair" | "-r" => {
                let value = args.get(i + 1).ok_or("--repair requires a value")?;
                let repair = RepairPolicy::from_name(value)
                    .ok_or_else(|| format!("Unknown repair policy: {}", value))?;
                options.repair = Some(repair);
                i += 1;
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
        i += 1;
    }

    Ok(options)
}

fn load(args: &[String]) -> Result<(EventFile, Options), String> {
    let path = args.first().ok_or("Missing event file")?;
    let options = parse_options(&args[1..])?;
    let event = EventFile::load(Path::new(path)).map_err(|e| e.to_string())?;
    Ok((event, options))
}

fn show_standings(args: &[String]) -> Result<(), String> {
    let (event, options) = load(args)?;
    let tournament = Tournament::from_event(&event).map_err(|e| e.to_string())?;
    let standings = tournament.player_standings();

    if options.json {
        println!("{}", to_json(&standings).map_err(|e| e.to_string())?);
    } else {
        println!("{}", standings_report(&tournament.name, &standings));
    }
    Ok(())
}

fn show_pairings(args: &[String]) -> Result<(), String> {
    let (event, options) = load(args)?;
    let tournament = Tournament::from_event(&event).map_err(|e| e.to_string())?;

    let mut config = event.pairing;
    if let Some(seed) = options.seed {
        config.draw = DrawStrategy::Seeded(seed);
    }
    if let Some(repair) = options.repair {
        config.repair = repair;
    }
    tracing::debug!(?config, "pairing configuration");

    let pairings = tournament
        .swiss_pairings(&PairingEngine::new(config))
        .map_err(|e| e.to_string())?;

    if options.json {
        println!("{}", to_json(&pairings).map_err(|e| e.to_string())?);
    } else {
        println!("{}", pairings_report(&tournament.name, &pairings));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "standings" => show_standings(&args[2..]),
        "pair" | "pairings" => show_pairings(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("Unknown command: {}", other)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
