/*!
The context --- within which bounded resolutions take place.

A context holds a [configuration](crate::config), counters, and the solutions of the most recent solve.

- [resolve](Context::resolve) returns the lazy solutions to a goal, bounded by the bounce and time limits of the configuration.
- [solve](Context::solve) collects the solutions to a goal, bounded further by the solution limit of the configuration, and reports whether every solution was found.

# Example
```rust
# use yogic::combinators::unify_any;
# use yogic::config::Config;
# use yogic::context::Context;
# use yogic::reports::Report;
# use yogic::structures::{term::Term, variable::var};
let mut config = Config::default();
config.solution_limit.value = 2;

let mut the_context = Context::from_config(config);

let x = var();
let goal = unify_any(&x, ["socrates", "plato", "archimedes"]);

assert_eq!(the_context.solve(&goal), Ok(Report::Truncated));
assert_eq!(the_context.values_of(&x), ["socrates", "plato"].map(Term::from));
assert_eq!(the_context.counters.total_solutions, 2);
```
*/

use std::time::Instant;

mod counters;
pub use counters::Counters;

use crate::{
    backtracking::{trampoline::Solutions, Goal},
    config::Config,
    misc::log::targets::{self},
    reports::Report,
    structures::{substitution::Subst, term::Term, variable::Variable},
    types::err::{self},
};

/// A context, see the [module documentation](crate::context).
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters over every solve of the context.
    pub counters: Counters,

    solutions: Vec<Subst>,
}

impl Context {
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            solutions: Vec::default(),
        }
    }

    /// The solutions to `goal`, bounded by the bounce and time limits of the configuration.
    pub fn resolve(&self, goal: &Goal) -> Solutions {
        let mut solutions = crate::procedures::resolve::resolve(goal);

        if self.config.bounce_limit.value > 0 {
            solutions = solutions.with_bounce_limit(self.config.bounce_limit.value);
        }

        if !self.config.time_limit.value.is_zero() {
            solutions = solutions.with_time_limit(self.config.time_limit.value);
        }

        solutions
    }

    /// Collects the solutions to `goal`, within the limits of the configuration.
    ///
    /// On an error, the solutions found before the error remain available.
    pub fn solve(&mut self, goal: &Goal) -> Result<Report, err::ErrorKind> {
        let start = Instant::now();
        self.solutions.clear();

        let limit = self.config.solution_limit.value;
        let mut solutions = self.resolve(goal);

        let result = loop {
            if limit > 0 && self.solutions.len() >= limit {
                break Ok(Report::Truncated);
            }

            match solutions.try_next() {
                Ok(Some(solution)) => self.solutions.push(solution),
                Ok(None) => break Ok(Report::Exhausted),
                Err(e) => break Err(err::ErrorKind::from(e)),
            }
        };

        let elapsed = start.elapsed();
        self.counters.resolutions += 1;
        self.counters.total_bounces += solutions.bounces();
        self.counters.total_solutions += self.solutions.len();
        self.counters.time += elapsed;

        log::info!(target: targets::CONTEXT, "Solve {}: {} solutions, {} bounces, {elapsed:?}, {result:?}", self.counters.resolutions, self.solutions.len(), solutions.bounces());

        result
    }

    /// The solutions of the most recent solve.
    pub fn solutions(&self) -> &[Subst] {
        &self.solutions
    }

    /// The value of `variable` in each solution of the most recent solve.
    pub fn values_of(&self, variable: &Variable) -> Vec<Term> {
        self.solutions
            .iter()
            .map(|solution| solution.get(variable))
            .collect()
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::from_config(Config::default())
    }
}
