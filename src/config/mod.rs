/*!
Configuration of an exploration.

All configuration for an [explorer](crate::explorer::Explorer) is contained within [Config].
Queries to the [resolution engine](crate::procedures::resolution) take no configuration, as the procedure is fixed.

```rust
# use cave_logic::config::{Config, FrontierPreference, MemoryScope};
let mut config = Config::default();

assert_eq!(config.max_steps.value, 1000);
assert_eq!(config.frontier_preference.value, FrontierPreference::Adjacent);
assert_eq!(config.memory_scope.value, MemoryScope::Local);

assert!(config.max_steps.set(20));
assert!(!config.max_steps.set(0));
assert_eq!(config.max_steps.value, 20);
```
*/

mod config_option;
pub use config_option::ConfigOption;

mod frontier_preference;
pub use frontier_preference::FrontierPreference;

mod memory_scope;
pub use memory_scope::MemoryScope;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most steps an exploration may take before it is abandoned.
    pub max_steps: ConfigOption<usize>,

    /// Whether adjacent cells or stored frontier entries are preferred when no adjacent cell is known to be safe.
    pub frontier_preference: ConfigOption<FrontierPreference>,

    /// Which remembered facts are asserted in a query.
    pub memory_scope: ConfigOption<MemoryScope>,

    /// Assert that at most one label holds at each successor.
    pub exclusivity_axioms: ConfigOption<bool>,

    /// Answer the queries of a step on a pool of scoped threads.
    pub parallel_queries: ConfigOption<bool>,
}

impl Default for Config {
    /// The default configuration follows the decision policy as stated, with facts limited to the neighbourhood of the current cell.
    fn default() -> Self {
        Config {
            max_steps: ConfigOption {
                name: "max_steps",
                min: 1,
                max: usize::MAX,
                value: 1000,
            },

            frontier_preference: ConfigOption {
                name: "frontier_preference",
                min: FrontierPreference::MIN,
                max: FrontierPreference::MAX,
                value: FrontierPreference::Adjacent,
            },

            memory_scope: ConfigOption {
                name: "memory_scope",
                min: MemoryScope::MIN,
                max: MemoryScope::MAX,
                value: MemoryScope::Local,
            },

            exclusivity_axioms: ConfigOption {
                name: "exclusivity_axioms",
                min: false,
                max: true,
                value: false,
            },

            parallel_queries: ConfigOption {
                name: "parallel_queries",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
