//! Tournament CLI
//!
//! Run matches between engines, compare the two searches, or play against one.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use classical_engine::{Algorithm, ClassicalEngine, LineCount};
use rand::rngs::StdRng;
use rand::SeedableRng;
use random_engine::RandomEngine;
use tournament::{
    compare_searches, load_config, Game, MatchConfig, MatchReport, MatchRunner, Status,
    TournamentConfig,
};
use tracing_subscriber::EnvFilter;
use ttt_core::{coord_to_cell, Engine, Grid};

fn print_usage() {
    println!("Tic-tac-toe Tournament Runner");
    println!();
    println!("Usage:");
    println!("  tournament match <engine1> <engine2> [--games N] [--seed S] [--json]");
    println!("  tournament compare <grid> [--computer-second] [--json]");
    println!("  tournament play [--engine E]");
    println!();
    println!("Every command accepts --config <path> (default: $TTT_CONFIG or tournament.toml).");
    println!();
    println!("Engines:");
    println!("  minimax               - Minimax, open-line evaluation");
    println!("  alphabeta             - Alpha-beta, open-line evaluation");
    println!("  minimax:linecount     - Minimax, line-count evaluation");
    println!("  alphabeta:linecount   - Alpha-beta, line-count evaluation");
    println!("  random                - Uniform random empty cell");
    println!();
    println!("Grids are 9 cells of X, O or . read row by row, e.g. \"XX.OO....\"");
    println!();
    println!("Examples:");
    println!("  tournament match alphabeta random --games 20");
    println!("  tournament compare \"OO.XX....\"");
}

fn create_engine(spec: &str, seed: Option<u64>) -> Result<Box<dyn Engine>> {
    // Anything after the first ':' is the evaluator; a second ':' lands in
    // it and is rejected.
    let (name, evaluator) = match spec.split_once(':') {
        Some((name, evaluator)) => (name, Some(evaluator.to_lowercase())),
        None => (spec, None),
    };
    let line_count = match evaluator.as_deref() {
        None | Some("openlines") => false,
        Some("linecount") => true,
        Some(other) => bail!("unknown evaluator '{}' in '{}'", other, spec),
    };

    let algorithm = match name.to_lowercase().as_str() {
        "minimax" | "mm" => Algorithm::Minimax,
        "alphabeta" | "ab" | "alpha-beta" => Algorithm::AlphaBeta,
        "random" => {
            if evaluator.is_some() {
                bail!("the random engine takes no evaluator: '{}'", spec);
            }
            let engine: Box<dyn Engine> = match seed {
                Some(s) => Box::new(RandomEngine::seeded(s)),
                None => Box::new(RandomEngine::new()),
            };
            return Ok(engine);
        }
        other => bail!("unknown engine '{}'", other),
    };

    let engine: Box<dyn Engine> = if line_count {
        Box::new(ClassicalEngine::with_evaluator(algorithm, LineCount))
    } else {
        Box::new(ClassicalEngine::new(algorithm))
    };
    Ok(engine)
}

/// Flags shared by all commands, plus leftover positional arguments.
struct Args {
    positional: Vec<String>,
    config: Option<PathBuf>,
    games: Option<u32>,
    seed: Option<u64>,
    engine: Option<String>,
    json: bool,
    computer_second: bool,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut out = Args {
        positional: Vec::new(),
        config: None,
        games: None,
        seed: None,
        engine: None,
        json: false,
        computer_second: false,
    };

    fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a String> {
        *i += 1;
        args.get(*i)
            .ok_or_else(|| anyhow!("{} requires a value", args[*i - 1]))
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-g" => out.games = Some(value(args, &mut i)?.parse().context("--games")?),
            "--seed" | "-s" => out.seed = Some(value(args, &mut i)?.parse().context("--seed")?),
            "--config" | "-c" => out.config = Some(PathBuf::from(value(args, &mut i)?)),
            "--engine" | "-e" => out.engine = Some(value(args, &mut i)?.clone()),
            "--json" => out.json = true,
            "--computer-second" => out.computer_second = true,
            flag if flag.starts_with("--") => bail!("unknown option '{}'", flag),
            other => out.positional.push(other.to_string()),
        }
        i += 1;
    }
    Ok(out)
}

fn config_for(args: &Args) -> Result<TournamentConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(games) = args.games {
        config.games = games;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run_match(args: &Args) -> Result<()> {
    let [engine1_spec, engine2_spec] = args.positional.as_slice() else {
        print_usage();
        bail!("match requires two engine specifications");
    };

    let mut config = config_for(args)?;
    if args.json {
        config.verbose = false;
    }

    // Distinct seeds so two random engines do not mirror each other
    let mut engine1 = create_engine(engine1_spec, config.seed)?;
    let mut engine2 = create_engine(engine2_spec, config.seed.map(|s| s.wrapping_add(1)))?;

    if !args.json {
        println!("=== Match: {} vs {} ===", engine1_spec, engine2_spec);
        println!("Games: {}", config.games);
        println!();
    }

    let runner = MatchRunner::new(MatchConfig::from(&config));
    let result = runner.run_match(engine1.as_mut(), engine2.as_mut())?;
    let report = MatchReport::new(engine1_spec, engine2_spec, result);

    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!();
        report.print_report();
    }
    Ok(())
}

fn run_compare(args: &Args) -> Result<()> {
    let [grid_str] = args.positional.as_slice() else {
        print_usage();
        bail!("compare requires one grid");
    };
    let grid: Grid = grid_str.parse()?;
    let computer_moves_first = !args.computer_second;
    let cmp = compare_searches(&grid, computer_moves_first)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&cmp)?);
        return Ok(());
    }

    println!("{grid}");
    println!(
        "Computer plays {}",
        if computer_moves_first { "X" } else { "O" }
    );
    println!("{:<12} {:>6} {:>10}", "Search", "Move", "Nodes");
    println!("{:<12} {:>6} {:>10}", "minimax", cmp.minimax_move, cmp.minimax_nodes);
    println!(
        "{:<12} {:>6} {:>10}",
        "alpha-beta", cmp.alphabeta_move, cmp.alphabeta_nodes
    );
    println!("Pruned: {:.1}%", cmp.pruned_fraction() * 100.0);
    Ok(())
}

fn parse_cell(input: &str) -> Option<usize> {
    input
        .parse::<usize>()
        .ok()
        .or_else(|| coord_to_cell(input))
}

fn run_play(args: &Args) -> Result<()> {
    let config = config_for(args)?;
    let spec = args.engine.as_deref().unwrap_or("alphabeta");
    let mut engine = create_engine(spec, config.seed)?;
    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let delay = Duration::from_millis(config.think_delay_ms);

    let mut game = Game::random(&mut rng);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!("Commands: <cell 0-8 | a1..c3>, back <n>, restart, quit");
    loop {
        println!();
        println!("{}", game.current());
        println!("{}", game.status());
        if let Some(turn) = game.last_turn() {
            println!("Computer played {} ({} nodes)", turn.cell, turn.nodes);
        }

        if !game.is_over() && game.is_computer_turn() {
            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
            game.play_computer(engine.as_mut())?;
            continue;
        }

        if let Status::Winner(m) = game.status() {
            println!(
                "{}",
                if m == game.computer_mark() { "Computer wins." } else { "You win." }
            );
        }

        print!("> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();

        match words.as_slice() {
            [] => {}
            ["quit"] | ["q"] | ["exit"] => return Ok(()),
            ["restart"] => {
                game.restart(&mut rng);
                engine.new_game();
            }
            ["back", n] => match n.parse::<usize>() {
                Ok(n) => {
                    if let Err(e) = game.jump_to(n) {
                        println!("{e}");
                    }
                }
                Err(_) => println!("back needs a move number"),
            },
            [cell] => match parse_cell(cell) {
                Some(cell) => {
                    if let Err(e) = game.play_human(cell) {
                        println!("{e}");
                    }
                }
                None => println!("unknown command '{cell}'"),
            },
            _ => println!("unknown command '{line}'"),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return Ok(());
    }

    let rest = parse_args(&args[2..])?;
    match args[1].as_str() {
        "match" => run_match(&rest),
        "compare" => run_compare(&rest),
        "play" => run_play(&rest),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            bail!("unknown command: {}", other)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_engine_specs() {
        assert_eq!(create_engine("minimax", None).unwrap().name(), "Minimax");
        assert_eq!(create_engine("AB:linecount", None).unwrap().name(), "Alpha-Beta");
        assert_eq!(create_engine("alphabeta:openlines", None).unwrap().name(), "Alpha-Beta");
        assert_eq!(create_engine("random", Some(1)).unwrap().name(), "Random");
    }

    #[test]
    fn test_create_engine_rejects_bad_specs() {
        assert!(create_engine("minimax:linecount:junk", None).is_err());
        assert!(create_engine("alphabeta:", None).is_err());
        assert!(create_engine("random:linecount", None).is_err());
        assert!(create_engine("negamax", None).is_err());
    }
}
