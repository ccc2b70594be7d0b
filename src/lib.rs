//! A library for resolving first-order logic queries built from combinators.
//!
//! yogic performs unification-driven, backtracking proof search over goals built algebraically in Rust, with cut, negation as failure, and a trampoline so that deep proofs do not exhaust the native stack.
//!
//! There is no surface syntax.
//! Clauses are written as Rust functions returning goals, and a query is a goal.
//!
//! # Orientation
//!
//! - The [structures] of a resolution: [variables](structures::variable), [terms](structures::term), and [substitutions](structures::substitution).
//! - The [combinators], from which goals are built.
//! - The [procedures] of a resolution: [unification](procedures::unification) and [resolve](procedures::resolve).
//! - The [continuation protocol](backtracking) underlying goals, and the [trampoline](backtracking::trampoline) which drives a resolution.
//! - A [context], for bounded resolutions configured through a [config].
//!
//! # Examples
//!
//! + A family tree, with a recursive rule.
//!
//! ```rust
//! # use yogic::combinators::{amb, lazy, unify, Goal};
//! # use yogic::procedures::resolve::resolve;
//! # use yogic::structures::{term::Term, variable::{var, vars}};
//! fn child(a: &Term, b: &Term) -> Goal {
//!     amb([
//!         unify([a, b], ["jim", "bob"]),
//!         unify([a, b], ["joe", "bob"]),
//!         unify([a, b], ["ian", "jim"]),
//!     ])
//! }
//!
//! // a is a descendant of c iff a is a child of c, or a is a child of some b which is a descendant of c.
//! fn descendant(a: Term, c: Term) -> Goal {
//!     lazy(move || {
//!         let b = Term::from(var());
//!         child(&a, &c) | (child(&a, &b) & descendant(b, c.clone()))
//!     })
//! }
//!
//! let [x, y] = vars();
//! let pairs = resolve(&descendant(Term::from(&x), Term::from(&y)))
//!     .map(|s| format!("{} {}", s.get(&x), s.get(&y)))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(pairs, ["jim bob", "joe bob", "ian jim", "ian bob"]);
//! ```
//!
//! + Appending pair-encoded lists, where `[]` is the empty list and `[head, tail]` is a list with a head and a tail.
//!
//! ```rust
//! # use yogic::combinators::{lazy, seq, unify, Goal};
//! # use yogic::procedures::resolve::resolve;
//! # use yogic::structures::{term::Term, variable::vars};
//! fn append(a: Term, b: Term, c: Term) -> Goal {
//!     lazy(move || {
//!         let [head, tail, rest] = vars().map(Term::from);
//!         let empty = unify(&a, Term::nil()) & unify(&b, &c);
//!         let cons = seq([
//!             unify(&a, [&head, &tail]),
//!             unify(&c, [&head, &rest]),
//!             append(tail.clone(), b.clone(), rest.clone()),
//!         ]);
//!         empty | cons
//!     })
//! }
//!
//! fn list(items: &[i64]) -> Term {
//!     items.iter().rev().fold(Term::nil(), |tail, item| Term::from([Term::from(*item), tail]))
//! }
//!
//! let [x, y] = vars();
//! let splits = resolve(&append(Term::from(&x), Term::from(&y), list(&[1, 2])))
//!     .map(|s| format!("{} + {}", s.get(&x), s.get(&y)))
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(splits, ["[] + [1, [2, []]]", "[1, []] + [2, []]", "[1, [2, []]] + []"]);
//! ```
//!
//! # Guiding principles
//!
//! ## The algebra of goals
//!
//! Goals form a lattice, with [then](combinators::then) as meet, [choice](combinators::choice) as join, [unit](combinators::unit) as top, and [fail](combinators::fail) as bottom.
//! The lattice is not commutative: solutions are found depth first and left to right, and a [cut](combinators::cut) prunes alternatives to its right.
//!
//! ## Explicit continuations
//!
//! A goal is run with three continuations --- one for success, one for backtracking, and one for escaping to the enclosing choice point on a cut.
//! Cut is no more than the choice of which continuation to pass on, and so requires no sentinel or unwinding.
//!
//! ## Bounded stack use
//!
//! Continuations return to a [trampoline](backtracking::trampoline) rather than calling one another directly, and so the native stack depth of a resolution does not depend on the depth of a proof or on the count of choice points.
//!
//! ## Persistence
//!
//! A [substitution](structures::substitution) is never mutated.
//! Backtracking resumes with an earlier substitution, and so there is no trail and nothing to undo.
//!
//! # Soundness
//!
//! - There is no occurs check.
//!   Unifying a variable with a term containing the variable creates a cyclic binding, and reifying a cyclic binding does not terminate.
//! - [Negation](combinators::no) is negation as failure.
//!   Negating a goal with unbound variables asks whether the goal fails for every value of those variables.
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No logger is installed by the library.
//!
//! For example, with a logger which filters on targets:
//! - Bindings made during unification are logged at trace level to `unification`.
//! - Summaries of solves are logged at info level to `context`.

#![allow(clippy::single_match)]

pub mod backtracking;
pub mod combinators;
pub mod procedures;
pub mod structures;

pub mod config;
pub mod context;
pub mod reports;
pub mod types;

pub mod misc;
