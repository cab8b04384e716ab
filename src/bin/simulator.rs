//! Flappy Headless Simulator
//!
//! Plays seeded runs with the autopilot using the same `Session` as the
//! terminal game, then prints a score report.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs with incrementing seeds (default: 100)
//!   --seed N        Seed of the first run (default: 42)
//!   --max-ticks N   Tick limit per run (default: 50000)
//!   --json          Print the report as JSON
//!   --frames        Print one JSON render state per tick of a single run
//!   --verbose       One line per run
//!   --quiet         Only the final summary line
//!
//! `--frames` plays exactly one run with `--seed`, so it cannot be combined
//! with `--runs`, `--json`, `--verbose` or `--quiet`.

use flappy::simulator::{run_simulation, simulate_single_run, SimConfig};
use flappy::{logging, FlappyError, Result};
use std::io::{self, Write};
use tracing::info;

#[derive(Debug, Default)]
struct CliOptions {
    json: bool,
    frames: bool,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T> {
    let value = value.cloned().unwrap_or_default();
    value.parse().map_err(|_| FlappyError::InvalidArgument {
        flag: flag.to_string(),
        value,
    })
}

fn parse_args(args: &[String]) -> Result<Option<(SimConfig, CliOptions)>> {
    let mut config = SimConfig::default();
    let mut options = CliOptions::default();
    // Flags that only make sense for a batch of runs
    let mut batch_flags = Vec::new();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                config.num_runs = parse_number("--runs", args.get(i))?;
                batch_flags.push("--runs");
            }
            "--seed" => {
                i += 1;
                config.seed = Some(parse_number("--seed", args.get(i))?);
            }
            "--max-ticks" => {
                i += 1;
                config.max_ticks_per_run = parse_number("--max-ticks", args.get(i))?;
            }
            "--json" => {
                options.json = true;
                batch_flags.push("--json");
            }
            "--frames" => options.frames = true,
            "--verbose" => {
                config.verbosity = 2;
                batch_flags.push("--verbose");
            }
            "--quiet" => {
                config.verbosity = 0;
                batch_flags.push("--quiet");
            }
            "--help" | "-h" => return Ok(None),
            other => return Err(FlappyError::UnknownCommand(other.to_string())),
        }
        i += 1;
    }

    if options.frames {
        if let Some(flag) = batch_flags.first() {
            return Err(FlappyError::ConflictingFlags {
                flag: flag.to_string(),
                other: "--frames".to_string(),
            });
        }
        config.num_runs = 1;
    }
    Ok(Some((config, options)))
}

fn print_usage() {
    eprintln!(
        "Flappy Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 100)\n\
         \x20 --seed N        Seed of the first run (default: 42)\n\
         \x20 --max-ticks N   Tick limit per run (default: 50000)\n\
         \x20 --json          Print the report as JSON\n\
         \x20 --frames        Print one JSON render state per tick of a single run\n\
         \x20 --verbose       One line per run\n\
         \x20 --quiet         Only the final summary line\n\
         \x20 --help, -h      Show this help\n\
         \n\
         --frames plays one run with --seed and cannot be combined with\n\
         --runs, --json, --verbose or --quiet."
    );
}

fn run(config: SimConfig, options: CliOptions) -> Result<()> {
    info!(
        runs = config.num_runs,
        seed = ?config.seed,
        max_ticks = config.max_ticks_per_run,
        "starting simulation"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if options.frames {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut write_error = None;
        simulate_single_run(&config, seed, |render| {
            if write_error.is_some() {
                return;
            }
            let line = serde_json::to_string(render).map_err(FlappyError::from);
            let written = line.and_then(|l| writeln!(out, "{}", l).map_err(FlappyError::from));
            if let Err(e) = written {
                write_error = Some(e);
            }
        })?;
        if let Some(e) = write_error {
            return Err(e);
        }
        return Ok(());
    }

    let report = run_simulation(&config)?;
    if options.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else if config.verbosity == 0 {
        writeln!(out, "{}", report.summary_line())?;
    } else {
        write!(out, "{}", report.summary())?;
    }
    Ok(())
}

fn main() {
    logging::init("info");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match parse_args(&args) {
        Ok(Some((config, options))) => run(config, options),
        Ok(None) => {
            print_usage();
            Ok(())
        }
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("simulator: {}", e);
        if matches!(
            e,
            FlappyError::UnknownCommand(_) | FlappyError::ConflictingFlags { .. }
        ) {
            print_usage();
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let (config, options) = parse_args(&[]).unwrap().unwrap();
        assert_eq!(config.num_runs, 100);
        assert_eq!(config.seed, Some(42));
        assert!(!options.json);
        assert!(!options.frames);
    }

    #[test]
    fn test_batch_flags() {
        let (config, options) = parse_args(&args(&[
            "--runs", "5", "--seed", "9", "--max-ticks", "100", "--json", "--quiet",
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.max_ticks_per_run, 100);
        assert_eq!(config.verbosity, 0);
        assert!(options.json);
    }

    #[test]
    fn test_frames_plays_one_seeded_run() {
        let (config, options) = parse_args(&args(&["--frames", "--seed", "3"]))
            .unwrap()
            .unwrap();
        assert!(options.frames);
        assert_eq!(config.num_runs, 1);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_frames_rejects_batch_flags() {
        let cases: [&[&str]; 4] = [&["--runs", "5"], &["--json"], &["--quiet"], &["--verbose"]];
        for case in cases {
            let mut list = vec!["--frames"];
            list.extend_from_slice(case);
            let err = parse_args(&args(&list)).unwrap_err();
            assert!(
                matches!(err, FlappyError::ConflictingFlags { ref flag, .. } if flag == list[1]),
                "{:?} accepted with --frames",
                list
            );
        }
    }

    #[test]
    fn test_bad_number() {
        let err = parse_args(&args(&["--runs", "many"])).unwrap_err();
        assert!(matches!(err, FlappyError::InvalidArgument { .. }));
    }

    #[test]
    fn test_help() {
        assert!(parse_args(&args(&["--help"])).unwrap().is_none());
    }
}
