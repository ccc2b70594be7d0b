/*!
Configuration of a context.

All configuration of a context is contained within [Config], and each configurable value is a [ConfigOption] which notes the range of permitted values.

The options bound a resolution, as a search may otherwise be unbounded:
- `bounce_limit`, the count of [bounces](crate::backtracking::Outcome::Bounce) permitted to a resolution.
- `solution_limit`, the count of solutions after which a resolution stops.
- `time_limit`, the time permitted to a resolution.

For each, a value of zero is no limit.

# Example

```rust
# use yogic::config::Config;
# use yogic::types::err;
let mut config = Config::default();

assert!(config.bounce_limit.set(10_000).is_ok());
assert_eq!(config.bounce_limit.value, 10_000);

let mut option = config.solution_limit.clone();
option.max = 10;
assert_eq!(option.set(11), Err(err::ConfigError::OutOfRange("solution_limit")));
```
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The count of bounces permitted to a resolution, with zero for no limit.
    pub bounce_limit: ConfigOption<usize>,

    /// The count of solutions after which a resolution stops, with zero for all solutions.
    pub solution_limit: ConfigOption<usize>,

    /// The time permitted to a resolution, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Default for Config {
    /// The default configuration places no bound on a resolution.
    fn default() -> Self {
        Config {
            bounce_limit: ConfigOption {
                name: "bounce_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            solution_limit: ConfigOption {
                name: "solution_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
