/*!
The continuation protocol of a resolution.

# Overview

A resolution is a search for proofs, and a proof search is written in continuation-passing style with three continuations:

- `yes`, an [Emit], is called with a substitution each time a proof is found, together with a [Next] which resumes the search for further proofs.
- `no`, a [Next], resumes the search after the current alternative has been exhausted (i.e. backtracks).
- `esc`, a [Next], is the escape target of a [cut](crate::combinators::cut).
  It resumes the search from the innermost choice point enclosing the cut, discarding any alternatives in between.

These continuations are passed to a [Step], which is a single resolvable unit.
And, a [Goal] is a function from a substitution to a step --- i.e. a computation parameterised by the substitution in effect when the goal is reached.

# Outcomes and the trampoline

Written directly, every sequential step and every choice point nests one more live call, and a deep search exhausts the call stack.
So, no continuation performs its work in the frame of its caller.
Instead, continuations return an [Outcome]:

- [Exhausted](Outcome::Exhausted), the search space is exhausted.
- [Solution](Outcome::Solution), a proof was found, with a [Next] to search for more.
- [Bounce](Outcome::Bounce), some work is pending, and is handed back.

The [trampoline](crate::backtracking::trampoline) drives a resolution by repeatedly unwrapping outcomes, and the native stack depth is bounded regardless of proof depth or count of choice points.

The protocol, then, is:
- An [Emit] or [Next] built by a combinator returns a [Bounce](Outcome::Bounce) rather than running any part of the search in the frame of its caller.
- The primitive steps (unit, fail, cut) call their continuations directly, as those calls return at once.

# Example

A hand-written goal which succeeds twice with the substitution it was given:

```rust
# use std::rc::Rc;
# use yogic::backtracking::{bounce, Goal, Outcome, Step};
# use yogic::procedures::resolve::resolve;
let twice = Goal::new(|subst| {
    Step::new(move |yes, no, _esc| {
        let again = subst.clone();
        let yes_again = yes.clone();
        let retry = Rc::new(move || {
            let (again, yes_again, no) = (again.clone(), yes_again.clone(), no.clone());
            bounce(move || yes_again(again, no))
        });
        yes(subst, retry)
    })
});

assert_eq!(resolve(&twice).count(), 2);
```
*/

use std::rc::Rc;

use crate::structures::substitution::Subst;

pub mod trampoline;

/// The result of invoking a continuation.
pub enum Outcome {
    /// There are no (further) proofs.
    Exhausted,

    /// A proof, and the continuation to search for further proofs.
    Solution(Subst, Next),

    /// Pending work, to be run by the trampoline.
    Bounce(Thunk),
}

/// Work handed back to the trampoline.
pub type Thunk = Box<dyn FnOnce() -> Outcome>;

/// Resumes a search.
pub type Next = Rc<dyn Fn() -> Outcome>;

/// Called on success, with the reached substitution and a continuation to search for further proofs.
pub type Emit = Rc<dyn Fn(Subst, Next) -> Outcome>;

/// Wraps some work as a [Bounce](Outcome::Bounce).
pub fn bounce(work: impl FnOnce() -> Outcome + 'static) -> Outcome {
    Outcome::Bounce(Box::new(work))
}

/// A continuation which reports exhaustion.
pub fn exhausted() -> Next {
    Rc::new(|| Outcome::Exhausted)
}

/// A single resolvable unit, run with `yes`, `no`, and `esc` continuations.
///
/// A step is run at most once, and so is consumed by [run](Step::run).
pub struct Step(Box<dyn FnOnce(Emit, Next, Next) -> Outcome>);

impl Step {
    pub fn new(step: impl FnOnce(Emit, Next, Next) -> Outcome + 'static) -> Self {
        Step(Box::new(step))
    }

    /// Runs the step.
    pub fn run(self, yes: Emit, no: Next, esc: Next) -> Outcome {
        (self.0)(yes, no, esc)
    }
}

/// A function from a substitution to a [Step].
///
/// Goals are pure, and so a goal may be applied any number of times and cloning a goal is cheap.
#[derive(Clone)]
pub struct Goal(Rc<dyn Fn(Subst) -> Step>);

impl Goal {
    pub fn new(goal: impl Fn(Subst) -> Step + 'static) -> Self {
        Goal(Rc::new(goal))
    }

    /// The step of the goal, given `subst`.
    pub fn apply(&self, subst: Subst) -> Step {
        (self.0)(subst)
    }
}

impl std::fmt::Debug for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Goal({:p})", Rc::as_ptr(&self.0))
    }
}
