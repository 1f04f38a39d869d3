use clap::ArgMatches;

use cave_logic::config::{Config, FrontierPreference, MemoryScope};

/// A collection of configuration options relevant only to the CLI.
#[derive(Default)]
pub struct CliConfig {
    /// Whether to display the layout before exploring.
    pub show_layout: bool,

    /// Whether to display conclusions on completion.
    pub show_beliefs: bool,

    /// Whether to display counts on completion.
    pub stats: bool,
}

pub enum ConfigError {
    OutOfBounds(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::OutOfBounds(name) => write!(f, "{name} is out of bounds"),
        }
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    if let Ok(Some(steps)) = args.try_get_one::<usize>("max_steps") {
        if !the_config.max_steps.set(*steps) {
            return Err(ConfigError::OutOfBounds(the_config.max_steps.name));
        }
    };

    if let Ok(Some(preference)) = args.try_get_one::<FrontierPreference>("frontier") {
        the_config.frontier_preference.value = *preference
    };

    if let Ok(Some(scope)) = args.try_get_one::<MemoryScope>("memory") {
        the_config.memory_scope.value = *scope
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("exclusivity") {
        the_config.exclusivity_axioms.value = *value
    };

    if let Ok(Some(value)) = args.try_get_one::<bool>("parallel") {
        the_config.parallel_queries.value = *value
    };

    Ok(the_config)
}

pub fn cli_config_from_args(args: &ArgMatches) -> CliConfig {
    let flag = |name: &str| matches!(args.try_get_one::<bool>(name), Ok(Some(true)));

    CliConfig {
        show_layout: flag("show_layout"),
        show_beliefs: flag("show_beliefs"),
        stats: flag("stats"),
    }
}
