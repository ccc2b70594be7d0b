//! Unification of terms.
//!
//! # Overview
//!
//! Two terms unify under a substitution if some extension of the substitution makes the terms equal.
//! [unify_terms] finds the least such extension, if one exists:
//!
//! - Both terms are walked.
//! - If the walked terms are the same variable, or equal atomic terms, unification succeeds without extension.
//! - If either is an unbound variable, it is bound to the other (the left term first, when both are variables).
//! - If both are compounds of the same arity, the components are unified in order, each unification extending the substitution produced by the previous.
//! - Otherwise, unification fails.
//!
//! Unification is all-or-nothing --- on failure the given substitution is untouched, as extension never mutates a substitution.
//! And, the components of a compound are kept on a work list, so deep terms do not grow the native stack.
//!
//! There is no occurs check.
//! So, `unify(x, [x])` succeeds, with a cyclic binding.
//!
//! # Goals
//!
//! - [unify] is the goal which succeeds once with the unifying extension, or fails.
//! - [unify_any] is a choice point over unifying a term with each of some candidates, in order.
//!
//! # Example
//!
//! ```rust
//! # use yogic::procedures::{resolve::resolve, unification::unify};
//! # use yogic::structures::{term::Term, variable::vars};
//! let [x, y, z] = vars();
//!
//! // [x, y, test] = [y, z, x]
//! let goal = unify([Term::from(&x), Term::from(&y), Term::from("test")], [&y, &z, &x]);
//!
//! let solution = resolve(&goal).next().unwrap();
//! assert_eq!(solution.get(&x), Term::from("test"));
//! assert_eq!(solution.get(&y), Term::from("test"));
//! assert_eq!(solution.get(&z), Term::from("test"));
//! ```

use crate::{
    backtracking::{Goal, Step},
    combinators::amb,
    misc::log::targets::{self},
    structures::{substitution::Subst, term::Term},
};

/// The least extension of `subst` under which `this` and `that` are equal, if one exists.
///
/// For documentation, see [procedures::unification](crate::procedures::unification).
pub fn unify_terms(subst: &Subst, this: &Term, that: &Term) -> Option<Subst> {
    let mut subst = subst.clone();
    let mut pending = vec![(this.clone(), that.clone())];

    while let Some((this, that)) = pending.pop() {
        let (this, that) = (subst.walk(&this), subst.walk(&that));

        match (&this, &that) {
            (Term::Var(this), Term::Var(that)) if this == that => {}

            (Term::Var(variable), value) | (value, Term::Var(variable)) => {
                log::trace!(target: targets::UNIFICATION, "Binding {variable:?} to {value:?}");
                subst = subst.extend(variable.clone(), value.clone());
            }

            (Term::Compound(these), Term::Compound(those)) => {
                if these.len() != those.len() {
                    log::trace!(target: targets::UNIFICATION, "Arity mismatch {} against {}", these.len(), those.len());
                    return None;
                }

                // Reversed, as the work list is a stack and components are unified left to right.
                pending.extend(these.iter().cloned().zip(those.iter().cloned()).rev());
            }

            _ => {
                if this != that {
                    log::trace!(target: targets::UNIFICATION, "Mismatch {this:?} against {that:?}");
                    return None;
                }
            }
        }
    }

    Some(subst)
}

/// The goal which unifies `this` and `that`.
///
/// Succeeds at most once.
pub fn unify(this: impl Into<Term>, that: impl Into<Term>) -> Goal {
    let this = this.into();
    let that = that.into();

    Goal::new(move |subst| {
        let this = this.clone();
        let that = that.clone();

        Step::new(move |yes, no, _esc| match unify_terms(&subst, &this, &that) {
            Some(unified) => yes(unified, no),
            None => no(),
        })
    })
}

/// A choice point over unifying `term` with each of `candidates`, in order.
///
/// ```rust
/// # use yogic::procedures::{resolve::resolve, unification::unify_any};
/// # use yogic::structures::{term::Term, variable::var};
/// let x = var();
/// let dogs = resolve(&unify_any(&x, ["fluffy", "daisy", "fifi"]))
///     .map(|solution| solution.get(&x))
///     .collect::<Vec<_>>();
///
/// assert_eq!(dogs, ["fluffy", "daisy", "fifi"].map(Term::from));
/// ```
pub fn unify_any<I, T>(term: impl Into<Term>, candidates: I) -> Goal
where
    I: IntoIterator<Item = T>,
    T: Into<Term>,
{
    let term = term.into();
    amb(candidates
        .into_iter()
        .map(|candidate| unify(term.clone(), candidate)))
}
