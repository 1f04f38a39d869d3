use std::path::PathBuf;

use clap::ArgMatches;

use cave_logic::{
    explorer::{Explorer, Status},
    procedures::resolution::resolution_with_counters,
    reports::Entailment,
    structures::clause::Clause,
    types::err::{self},
    world::grid::GridWorld,
};

mod misc;
mod parse;

use parse::config::{cli_config_from_args, config_from_args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    match matches.subcommand() {
        Some(("explore", args)) => explore(args),
        Some(("query", args)) => query(args),
        _ => {
            println!("c A subcommand is required");
            std::process::exit(1);
        }
    }
}

fn explore(args: &ArgMatches) {
    let config = match config_from_args(args) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e}");
            std::process::exit(1);
        }
    };
    let cli_config = cli_config_from_args(args);

    let cave = match args.try_get_one::<u64>("random") {
        Ok(Some(seed)) => {
            let width = args.try_get_one::<i32>("width").ok().flatten().copied().unwrap_or(8);
            let height = args.try_get_one::<i32>("height").ok().flatten().copied().unwrap_or(8);
            let walls = args.try_get_one::<f64>("walls").ok().flatten().copied().unwrap_or(0.2);
            GridWorld::random(width, height, walls, *seed).map_err(err::ErrorKind::from)
        }

        _ => match args.try_get_one::<PathBuf>("layout") {
            Ok(Some(path)) => {
                println!("c Reading layout from {path:?}");
                misc::load_layout(path)
            }
            _ => {
                println!("c A layout or a seed is required");
                std::process::exit(1);
            }
        },
    };

    let cave = match cave {
        Ok(cave) => cave,
        Err(e) => {
            println!("c {e}");
            std::process::exit(1);
        }
    };

    if cli_config.show_layout {
        println!("{cave}");
    }

    let outcome = match Explorer::new(&cave, config).explore() {
        Ok(outcome) => outcome,
        Err(e) => {
            println!("c {e}");
            std::process::exit(2);
        }
    };

    let path = outcome
        .path
        .iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("p {path}");

    let actions = outcome
        .actions
        .iter()
        .map(|action| action.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("a {actions}");

    if cli_config.show_beliefs {
        let mut beliefs = outcome.beliefs.iter().collect::<Vec<_>>();
        beliefs.sort_by_key(|(cell, _)| cell.weight());
        for (cell, label) in beliefs {
            println!("b {label}{cell}");
        }
    }

    if cli_config.stats {
        println!("c Queries: {}", outcome.queries);
        println!("c {}", outcome.counters);
    }

    println!("s {}", outcome.status);

    match outcome.status {
        Status::Goal => std::process::exit(10),
        Status::Stuck => std::process::exit(20),
        Status::StepLimit => std::process::exit(30),
        Status::Perished => std::process::exit(40),
    }
}

fn query(args: &ArgMatches) {
    let cli_config = cli_config_from_args(args);

    let premises = match args.try_get_one::<PathBuf>("premises") {
        Ok(Some(path)) => match misc::load_clauses(path) {
            Ok(clauses) => clauses,
            Err(e) => {
                println!("c {e}");
                std::process::exit(1);
            }
        },
        _ => {
            println!("c Premises are required");
            std::process::exit(1);
        }
    };

    let goal = match args.try_get_one::<String>("goal") {
        Ok(Some(text)) => match text.parse::<Clause>() {
            Ok(goal) => goal,
            Err(e) => {
                println!("c Could not read the goal: {e:?}");
                std::process::exit(1);
            }
        },
        _ => {
            println!("c A goal is required");
            std::process::exit(1);
        }
    };

    println!("c Read {} clauses", premises.len());

    let (report, counters) = resolution_with_counters(premises, &goal);

    if cli_config.stats {
        println!("c {counters}");
    }

    println!("s {report}");

    match report {
        Entailment::Entailed => std::process::exit(10),
        Entailment::NotEntailed => std::process::exit(20),
    }
}
