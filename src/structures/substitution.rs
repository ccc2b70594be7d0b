/*!
Substitutions --- the bindings of variables accumulated during a resolution.

# Overview

A substitution is an immutable, incrementally extended, finite map from [variables](Variable) to [terms](Term).
Extension returns a new substitution and leaves the original untouched, so backtracking to some earlier point of a resolution is nothing more than resuming with the substitution which was current at that point.

Internally, a substitution is a persistent hash map from variables to their bindings, with structure shared between every substitution which extends it.
So, both extension and lookup take (effectively) constant time, regardless of the count of bindings.

A variable may be bound to another variable, and so lookup of a value is a chase through a chain of bindings:
- [walk](Subst::walk) follows the chain of a term to an unbound variable or a non-variable term.
- [reify](Subst::reify) walks a term, and further walks each component of a compound, to give the term as it stands under the substitution.
  Components are kept on a work list, so reifying a deeply nested term does not grow the native stack.

- Soundness
  + There is no occurs check, and so unifying a variable with a compound containing that variable produces a cyclic binding.
    Walking a cyclic binding terminates, but reifying one does not.

# Example

```rust
# use yogic::structures::{substitution::Subst, term::Term, variable::vars};
let [x, y] = vars();

let empty = Subst::default();
let one = empty.extend(x.clone(), Term::from(&y));
let two = one.extend(y.clone(), Term::from("bob"));

assert_eq!(one.get(&x), Term::from(&y));
assert_eq!(two.get(&x), Term::from("bob"));
assert!(empty.is_empty());
```
*/

use crate::structures::{term::Term, variable::Variable};

#[derive(Clone)]
struct Binding {
    /// The count of bindings made before this binding.
    position: usize,

    value: Term,
}

/// A substitution, see the [module documentation](crate::structures::substitution).
#[derive(Clone, Default)]
pub struct Subst {
    bindings: im::HashMap<Variable, Binding>,
}

impl Subst {
    /// The substitution with one further binding of `variable` to `value`.
    ///
    /// `variable` is expected to be unbound in `self`.
    /// If it is not, the new binding replaces the existing binding.
    pub fn extend(&self, variable: Variable, value: Term) -> Subst {
        let binding = Binding {
            position: self.len(),
            value,
        };

        Subst {
            bindings: self.bindings.update(variable, binding),
        }
    }

    /// The term directly bound to `variable`, if any.
    pub fn lookup(&self, variable: &Variable) -> Option<&Term> {
        self.bindings.get(variable).map(|binding| &binding.value)
    }

    /// Follows the bindings of `term` until an unbound variable or a non-variable term is found.
    pub fn walk(&self, term: &Term) -> Term {
        let mut current = term;
        while let Term::Var(variable) = current {
            match self.lookup(variable) {
                Some(value) => current = value,
                None => break,
            }
        }
        current.clone()
    }

    /// The term as it stands under the substitution, with every bound variable replaced by its value.
    ///
    /// Unbound variables are left in place.
    pub fn reify(&self, term: &Term) -> Term {
        enum Task {
            Visit(Term),
            /// Gather this many reified sub-terms into a compound.
            Gather(usize),
        }

        let mut tasks = vec![Task::Visit(term.clone())];
        let mut reified: Vec<Term> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(term) => {
                    let walked = self.walk(&term);
                    let items = match &walked {
                        Term::Compound(items) if !items.is_empty() => Some(items.clone()),
                        _ => None,
                    };

                    match items {
                        Some(items) => {
                            tasks.push(Task::Gather(items.len()));
                            tasks.extend(items.iter().rev().cloned().map(Task::Visit));
                        }
                        None => reified.push(walked),
                    }
                }

                Task::Gather(arity) => {
                    let items = reified.split_off(reified.len() - arity);
                    reified.push(Term::compound(items));
                }
            }
        }

        // Every visit leaves one term, and every gather replaces its sub-terms with one term.
        reified.pop().unwrap_or_else(|| term.clone())
    }

    /// The value of `variable` as it stands under the substitution.
    pub fn get(&self, variable: &Variable) -> Term {
        self.reify(&Term::Var(variable.clone()))
    }

    /// The count of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The bindings, from least recent to most recent.
    pub fn bindings(&self) -> Vec<(&Variable, &Term)> {
        let mut bindings = self
            .bindings
            .iter()
            .map(|(variable, binding)| (binding.position, variable, &binding.value))
            .collect::<Vec<_>>();
        bindings.sort_unstable_by_key(|(position, _, _)| *position);

        bindings
            .into_iter()
            .map(|(_, variable, value)| (variable, value))
            .collect()
    }
}

impl std::fmt::Display for Subst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{")?;
        for (index, (variable, _)) in self.bindings().into_iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{variable}: {}", self.get(variable))?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Debug for Subst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.bindings()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::variable::{var, vars};

    #[test]
    fn extension_is_persistent() {
        let [x, y] = vars();

        let base = Subst::default().extend(x.clone(), Term::from(1));
        let left = base.extend(y.clone(), Term::from("left"));
        let right = base.extend(y.clone(), Term::from("right"));

        assert_eq!(base.len(), 1);
        assert_eq!(base.lookup(&y), None);
        assert_eq!(left.get(&y), Term::from("left"));
        assert_eq!(right.get(&y), Term::from("right"));
        assert_eq!(left.get(&x), right.get(&x));
    }

    #[test]
    fn walk_is_shallow_reify_is_deep() {
        let [x, y, z] = vars();

        let subst = Subst::default()
            .extend(x.clone(), Term::from(&y))
            .extend(y.clone(), Term::compound([Term::from(&z), Term::from("b")]))
            .extend(z.clone(), Term::from("a"));

        assert_eq!(
            subst.walk(&Term::from(&x)),
            Term::compound([Term::from(&z), Term::from("b")])
        );
        assert_eq!(subst.get(&x), Term::from(["a", "b"]));
    }

    #[test]
    fn unbound_walks_to_itself() {
        let x = var();
        let subst = Subst::default();

        assert_eq!(subst.walk(&Term::from(&x)), Term::from(&x));
        assert_eq!(subst.get(&x), Term::from(&x));
    }

    #[test]
    fn many_bindings() {
        let variables = (0..200_000).map(|_| var()).collect::<Vec<_>>();

        let mut subst = Subst::default();
        for (value, variable) in variables.iter().enumerate() {
            subst = subst.extend(variable.clone(), Term::from(value as i64));
        }

        assert_eq!(subst.len(), 200_000);
        assert_eq!(subst.lookup(&variables[0]), Some(&Term::from(0)));
        assert_eq!(subst.lookup(&variables[199_999]), Some(&Term::from(199_999)));
        assert_eq!(subst.lookup(&var()), None);
    }

    #[test]
    fn reify_deep_chain() {
        // Each cell of a list is bound to a variable, and each variable to the next cell.
        let cells = (0..100_000).map(|_| var()).collect::<Vec<_>>();

        let mut subst = Subst::default();
        for (index, cell) in cells.iter().enumerate() {
            let tail = match cells.get(index + 1) {
                Some(next) => Term::from(next),
                None => Term::nil(),
            };
            subst = subst.extend(cell.clone(), Term::from([Term::from(index as i64), tail]));
        }

        let list = subst.get(&cells[0]);

        let mut length = 0;
        let mut current = &list;
        while let Some([head, tail]) = current.as_compound() {
            assert_eq!(head, &Term::from(length as i64));
            length += 1;
            current = tail;
        }

        assert_eq!(length, 100_000);
        assert_eq!(current, &Term::nil());
        assert_eq!(list, subst.get(&cells[0]));
        drop(list);
    }

    #[test]
    fn display_in_binding_order() {
        let x = Variable::named("x");
        let y = Variable::named("y");

        let subst = Subst::default()
            .extend(x.clone(), Term::from(&y))
            .extend(y.clone(), Term::from("bob"));

        assert_eq!(subst.to_string(), "{x: bob, y: bob}");
    }
}
