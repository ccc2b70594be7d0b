/*!
Combinators, from which goals are built.

# Overview

Goals are built algebraically:

| Combinator | Solutions |
|------------|-----------|
| [unit] | The given substitution, once. |
| [fail] | None. |
| [cut] | The given substitution, once, and then commits to the current alternative of the enclosing choice point. |
| [then], [seq] | For each solution of the first goal, the solutions of the second goal. |
| [choice], [amb] | The solutions of each goal, in order, with [amb] a choice point. |
| [no] | The given substitution, once, if the goal has no solutions, and otherwise none. |
| [unify], [unify_any] | See [unification](crate::procedures::unification). |

[then] with [unit], and [choice] with [fail], form monoids.
And, the two together form a distributive lattice, with [then] as meet and [choice] as join.
The lattice is not commutative, as solutions are found, and cuts prune, strictly from left to right.

For convenience, `&` is [then], `|` is [choice], and `!` is [no].

# Cut

A [choice point](amb) captures the `no` continuation in effect when the choice point is reached, and passes this as the `esc` continuation to each of its alternatives.
A [cut] succeeds once, and on backtracking invokes `esc` rather than `no`.
So, backtracking past a cut resumes the search from the choice point itself, skipping any remaining alternatives and any further solutions to goals before the cut.

The scope of a cut is the innermost enclosing choice point.
[choice] (and so `|`) passes `esc` on unchanged, and so regrouping choices does not change what a cut discards, while regrouping choice points does.

# Predicates

A predicate is an ordinary function returning a goal.
If the predicate is recursive, the goal must be built [lazily](lazy), as otherwise building the goal does not terminate.

```rust
# use yogic::combinators::{amb, lazy, unify, unify_any, Goal};
# use yogic::procedures::resolve::resolve;
# use yogic::structures::{term::Term, variable::var};
fn human(a: &Term) -> Goal {
    unify_any(a, ["socrates", "plato", "archimedes"])
}

fn dog(a: &Term) -> Goal {
    unify_any(a, ["fluffy", "daisy", "fifi"])
}

fn child(a: &Term, b: &Term) -> Goal {
    amb([
        unify([a, b], ["fifi", "fluffy"]),
        unify([a, b], ["fluffy", "daisy"]),
    ])
}

fn mortal(a: Term) -> Goal {
    lazy(move || {
        let b = Term::from(var());
        human(&a) | dog(&a) | (child(&a, &b) & mortal(b))
    })
}

let x = var();
let goal = mortal(Term::from(&x)) & !dog(&Term::from(&x));

let mortals = resolve(&goal).map(|s| s.get(&x).to_string()).collect::<Vec<_>>();
assert_eq!(mortals, ["socrates", "plato", "archimedes"]);
```
*/

use std::rc::Rc;

pub use crate::{
    backtracking::Goal,
    procedures::unification::{unify, unify_any},
};

use crate::{
    backtracking::{bounce, Emit, Next, Step},
    structures::substitution::Subst,
};

mod ops;

/// Succeeds once with the given substitution.
///
/// The identity of [then].
pub fn unit() -> Goal {
    Goal::new(|subst| Step::new(move |yes, no, _esc| yes(subst, no)))
}

/// Never succeeds.
///
/// The identity of [choice].
pub fn fail() -> Goal {
    Goal::new(|_| Step::new(|_yes, no, _esc| no()))
}

/// Succeeds once with the given substitution, and on backtracking resumes from the enclosing choice point.
pub fn cut() -> Goal {
    Goal::new(|subst| Step::new(move |yes, _no, esc| yes(subst, esc)))
}

/// The step which runs `goal` for each success of `step`.
///
/// Backtracking out of `goal` resumes `step`.
pub fn bind(step: Step, goal: Goal) -> Step {
    Step::new(move |yes, no, esc| {
        let on_success: Emit = {
            let esc = esc.clone();
            Rc::new(move |subst: Subst, backtrack: Next| {
                let (goal, yes, esc) = (goal.clone(), yes.clone(), esc.clone());
                bounce(move || goal.apply(subst).run(yes, backtrack, esc))
            })
        };
        step.run(on_success, no, esc)
    })
}

/// The solutions of `second`, for each solution of `first`.
pub fn then(first: Goal, second: Goal) -> Goal {
    Goal::new(move |subst| bind(first.apply(subst), second.clone()))
}

/// The solutions of each of `goals` in sequence.
///
/// The empty sequence is [unit].
pub fn seq(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let goals: Rc<[Goal]> = goals.into_iter().collect();
    seq_from(goals, 0)
}

fn seq_from(goals: Rc<[Goal]>, index: usize) -> Goal {
    match goals.len() - index {
        0 => unit(),
        1 => goals[index].clone(),
        _ => {
            let first = goals[index].clone();
            let rest = Goal::new(move |subst| seq_from(goals.clone(), index + 1).apply(subst));
            then(first, rest)
        }
    }
}

/// The solutions of `first`, followed by the solutions of `second`.
///
/// Unlike [amb], a choice is not a choice point.
/// The escape continuation is passed on unchanged, so a cut in either goal prunes to the choice point enclosing the choice.
/// And so, `a | b | c` prunes exactly as `amb([a, b, c])` does.
pub fn choice(first: Goal, second: Goal) -> Goal {
    alternatives_from(Rc::from([first, second]), 0)
}

/// A choice point between each of `goals`, in order.
///
/// The empty choice is [fail].
pub fn amb(goals: impl IntoIterator<Item = Goal>) -> Goal {
    let goals: Rc<[Goal]> = goals.into_iter().collect();
    if goals.is_empty() {
        return fail();
    }

    let alternatives = alternatives_from(goals, 0);
    Goal::new(move |subst| {
        let alternatives = alternatives.clone();
        // The `no` on entry is the escape for every alternative.
        Step::new(move |yes, no, _esc| {
            bounce(move || alternatives.apply(subst).run(yes, no.clone(), no))
        })
    })
}

/// The alternatives from `index`, in order, without any revision to the escape continuation.
fn alternatives_from(goals: Rc<[Goal]>, index: usize) -> Goal {
    if goals.len() - index == 1 {
        return goals[index].clone();
    }

    Goal::new(move |subst: Subst| {
        let first = goals[index].clone();
        let goals = goals.clone();

        Step::new(move |yes, no, esc| {
            let on_failure: Next = {
                let (subst, yes, esc) = (subst.clone(), yes.clone(), esc.clone());
                Rc::new(move || {
                    let (goals, subst, yes, no, esc) =
                        (goals.clone(), subst.clone(), yes.clone(), no.clone(), esc.clone());
                    bounce(move || alternatives_from(goals, index + 1).apply(subst).run(yes, no, esc))
                })
            };
            first.apply(subst).run(yes, on_failure, esc)
        })
    })
}

/// Succeeds once with the given substitution if `goal` has no solutions under the substitution, and otherwise fails.
///
/// Any bindings made while resolving `goal` are discarded.
/// A cut within `goal` is local to `goal`.
///
/// - Soundness
///   + Negation as failure is not logical negation.
///     If `goal` contains unbound variables, `no(goal)` asks whether `goal` fails for *every* value of those variables.
///     So, with `x` unbound, `no(unify(x, "a"))` fails.
pub fn no(goal: Goal) -> Goal {
    amb([seq([amb([goal]), cut(), fail()]), unit()])
}

/// A goal built by `body` when applied, rather than when constructed.
///
/// Required by recursive predicates, and useful for expensive goals which may never be reached.
/// The body is built and applied by the trampoline, so a predicate called in the first position of its own body does not nest native calls.
pub fn lazy(body: impl Fn() -> Goal + 'static) -> Goal {
    let body = Rc::new(body);
    Goal::new(move |subst| {
        let body = body.clone();
        Step::new(move |yes, no, esc| bounce(move || body().apply(subst).run(yes, no, esc)))
    })
}
