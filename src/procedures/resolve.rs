//! Finds the solutions to a goal.
//!
//! # Overview
//!
//! [resolve] applies a goal to the empty substitution, and the resulting step is run with:
//! - A `yes` continuation which hands each solution, together with the continuation to search for more, back to the [trampoline](crate::backtracking::trampoline).
//! - A `no` continuation which reports exhaustion.
//! - An `esc` continuation equal to the `no` continuation, as at the top level there is nothing for a cut to prune.
//!
//! The solutions are returned as a lazy iterator, in resolution order --- left to right, and depth first.
//! Work towards a solution is done only when the solution is requested, and so a goal with unboundedly many solutions may be resolved, so long as only finitely many are requested.
//!
//! Goals are pure functions of a substitution, and so resolving a goal a second time repeats the resolution from scratch.
//!
//! Bounds on the resolution (a count of bounces, a time limit, a count of solutions) are available through a [context](crate::context).
//!
//! # Example
//!
//! ```rust
//! # use yogic::combinators::{amb, lazy, seq, Goal};
//! # use yogic::procedures::{resolve::resolve, unification::unify};
//! # use yogic::structures::{term::Term, variable::{var, Variable}};
//! fn child(a: &Term, b: &Term) -> Goal {
//!     amb([
//!         unify([a, b], ["jim", "bob"]),
//!         unify([a, b], ["joe", "bob"]),
//!         unify([a, b], ["ian", "jim"]),
//!     ])
//! }
//!
//! fn descendant(a: Term, c: Term) -> Goal {
//!     lazy(move || {
//!         let b = Term::from(var());
//!         amb([
//!             child(&a, &c),
//!             seq([child(&a, &b), descendant(b, c.clone())]),
//!         ])
//!     })
//! }
//!
//! let x = Variable::named("x");
//! let descendants = resolve(&descendant(Term::from(&x), Term::from("bob")))
//!     .map(|solution| solution.get(&x).to_string())
//!     .collect::<Vec<_>>();
//!
//! assert_eq!(descendants, ["jim", "joe", "ian"]);
//! ```

use crate::{
    backtracking::{trampoline::Solutions, Goal},
    misc::log::targets::{self},
};

/// The solutions to `goal`, in resolution order.
///
/// For documentation, see [procedures::resolve](crate::procedures::resolve).
pub fn resolve(goal: &Goal) -> Solutions {
    log::trace!(target: targets::RESOLUTION, "Resolving {goal:?}");
    Solutions::new(goal.clone())
}
