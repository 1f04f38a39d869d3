use std::path::PathBuf;

use clap::{value_parser, Arg, Command};

use cave_logic::config::{Config, FrontierPreference, MemoryScope};

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("cave_cli")
        .about("Explores a cave by resolution, or answers a single entailment query")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)

        .subcommand(Command::new("explore")
            .about("Explore a cave, from a layout file or a random layout")

            .arg(Arg::new("layout")
                .required_unless_present("random")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("The layout to explore.")
                .long_help("The layout to explore.

Each line is a row of the cave, with the first line the northmost row.
  % wall        P start
  W wumpus      C poison
  T teleporter  . or space, open"))

            .arg(Arg::new("random")
                .long("random")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .required(false)
                .num_args(1)
                .conflicts_with("layout")
                .help("Explore a random layout generated from SEED."))

            .arg(Arg::new("width")
                .long("width")
                .value_parser(value_parser!(i32))
                .required(false)
                .num_args(1)
                .default_value("8")
                .help("The width of a random layout."))

            .arg(Arg::new("height")
                .long("height")
                .value_parser(value_parser!(i32))
                .required(false)
                .num_args(1)
                .default_value("8")
                .help("The height of a random layout."))

            .arg(Arg::new("walls")
                .long("walls")
                .value_name("PROBABILITY")
                .value_parser(value_parser!(f64))
                .required(false)
                .num_args(1)
                .default_value("0.2")
                .help("The probability of a wall on each free cell of a random layout."))

            .arg(Arg::new("max_steps")
                .long("max-steps")
                .value_name("STEPS")
                .value_parser(value_parser!(usize))
                .required(false)
                .num_args(1)
                .help(format!("The most steps to take.
Default: {}", defaults.max_steps.value)))

            .arg(Arg::new("frontier")
                .long("frontier")
                .value_name("PREFERENCE")
                .value_parser(clap::builder::ValueParser::new(frontier_parser))
                .required(false)
                .num_args(1)
                .help(format!("Where to look when no adjacent cell is known to be safe.
Default: {}", defaults.frontier_preference.value))
                .long_help(format!("Where to look when no adjacent cell is known to be safe.
Default: {}

  - adjacent: Adjacent cells without a conclusion, then stored cells
  - stored  : Stored safe cells, then adjacent cells without a conclusion", defaults.frontier_preference.value)))

            .arg(Arg::new("memory")
                .long("memory")
                .value_name("SCOPE")
                .value_parser(clap::builder::ValueParser::new(memory_parser))
                .required(false)
                .num_args(1)
                .help(format!("Which remembered facts to use in a query.
Default: {}", defaults.memory_scope.value))
                .long_help(format!("Which remembered facts to use in a query.
Default: {}

  - local : Facts for the current cell and its successors
  - global: Facts for every visited cell", defaults.memory_scope.value)))

            .arg(Arg::new("exclusivity")
                .long("exclusivity")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Assert that at most one label holds at each cell."))

            .arg(Arg::new("parallel")
                .long("parallel")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Answer the queries of each step in parallel."))

            .arg(Arg::new("show_layout")
                .long("show-layout")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Display the layout before exploring."))

            .arg(Arg::new("show_beliefs")
                .long("show-beliefs")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Display the conclusions drawn on completion."))

            .arg(Arg::new("stats")
                .short('s')
                .long("stats")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Display counts from the queries made on completion.")))

        .subcommand(Command::new("query")
            .about("Determine whether some premises entail a goal")

            .arg(Arg::new("premises")
                .required(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("The premises, one clause per line.")
                .long_help("The premises, one clause per line.

Literals are written [-|~]SYMBOL[(x,y)] and separated by whitespace.
Lines beginning '#' or 'c ' are skipped."))

            .arg(Arg::new("goal")
                .short('g')
                .long("goal")
                .value_name("CLAUSE")
                .value_parser(value_parser!(String))
                .required(true)
                .num_args(1)
                .help("The goal clause."))

            .arg(Arg::new("stats")
                .short('s')
                .long("stats")
                .value_parser(value_parser!(bool))
                .required(false)
                .num_args(0)
                .help("Display counts from the query.")))
}

fn frontier_parser(arg: &str) -> Result<FrontierPreference, std::io::Error> {
    arg.parse::<FrontierPreference>().map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Unknown frontier preference",
        )
    })
}

fn memory_parser(arg: &str) -> Result<MemoryScope, std::io::Error> {
    arg.parse::<MemoryScope>().map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "Unknown memory scope")
    })
}
