/*!
Terms --- the values unification works over.

A term is one of:
- An atom, a symbolic constant such as `socrates`.
- An integer.
- A [variable](crate::structures::variable).
- A compound, an ordered sequence of sub-terms.

Atoms and integers are *atomic*, and two atomic terms unify only if they are equal.
Compounds unify component-wise, and only with compounds of the same arity.
The empty compound is a perfectly good term, and is displayed as `[]`.

Terms are cheap to clone, as atoms and compounds are reference counted.

Comparison, hashing, display and dropping all keep pending sub-terms on a work list, so a term may be nested (e.g. a long pair-encoded list) to any depth.

Conversions are provided from the obvious Rust values, and so terms are rarely built by hand:

```rust
# use yogic::structures::{term::Term, variable::var};
let x = var();
let pair = Term::from(["jim", "bob"]);
let mixed = Term::compound([Term::from(1), Term::from(&x), Term::from("end")]);

assert_eq!(pair.to_string(), "[jim, bob]");
assert!(mixed.is_compound());
assert_eq!(Term::from(&x).as_var(), Some(&x));
```

# Serialization

Terms implement [Serialize](serde::Serialize), with atoms as strings, integers as integers, compounds as sequences, and variables as their display string.
Reify a term with a [substitution](crate::structures::substitution::Subst::reify) before serializing to export a solution.
Serialization, unlike the other operations on terms, recurses once per level of nesting.
*/

use std::{
    hash::{Hash, Hasher},
    rc::Rc,
};

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::structures::variable::Variable;

/// A term, see the [module documentation](crate::structures::term).
#[derive(Clone)]
pub enum Term {
    /// A symbolic constant.
    Atom(Rc<str>),

    /// An integer constant.
    Int(i64),

    /// A logical variable.
    Var(Variable),

    /// An ordered sequence of sub-terms.
    Compound(Rc<[Term]>),
}

impl Term {
    /// An atom with the given symbol.
    pub fn atom(symbol: &str) -> Self {
        Term::Atom(Rc::from(symbol))
    }

    /// A compound of the given sub-terms, in order.
    pub fn compound<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Term>,
    {
        Term::Compound(items.into_iter().map(Into::into).collect())
    }

    /// The empty compound.
    pub fn nil() -> Self {
        Term::Compound(Rc::from([]))
    }

    /// The variable, if the term is a variable.
    pub fn as_var(&self) -> Option<&Variable> {
        match self {
            Term::Var(variable) => Some(variable),
            _ => None,
        }
    }

    /// The sub-terms, if the term is a compound.
    pub fn as_compound(&self) -> Option<&[Term]> {
        match self {
            Term::Compound(items) => Some(items),
            _ => None,
        }
    }

    /// Whether the term is an atom or an integer.
    pub fn is_atomic(&self) -> bool {
        matches!(self, Term::Atom(_) | Term::Int(_))
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Term::Compound(_))
    }

    pub fn is_var(&self) -> bool {
        matches!(self, Term::Var(_))
    }
}

impl From<&str> for Term {
    fn from(symbol: &str) -> Self {
        Term::atom(symbol)
    }
}

impl From<String> for Term {
    fn from(symbol: String) -> Self {
        Term::Atom(Rc::from(symbol))
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Term::Int(value)
    }
}

impl From<i32> for Term {
    fn from(value: i32) -> Self {
        Term::Int(value as i64)
    }
}

impl From<u32> for Term {
    fn from(value: u32) -> Self {
        Term::Int(value as i64)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Var(variable)
    }
}

impl From<&Variable> for Term {
    fn from(variable: &Variable) -> Self {
        Term::Var(variable.clone())
    }
}

impl From<&Term> for Term {
    fn from(term: &Term) -> Self {
        term.clone()
    }
}

impl<T: Into<Term>> From<Vec<T>> for Term {
    fn from(items: Vec<T>) -> Self {
        Term::compound(items)
    }
}

impl<T: Into<Term>, const N: usize> From<[T; N]> for Term {
    fn from(items: [T; N]) -> Self {
        Term::compound(items)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some(pair) = pending.pop() {
            match pair {
                (Term::Atom(this), Term::Atom(that)) if this == that => {}
                (Term::Int(this), Term::Int(that)) if this == that => {}
                (Term::Var(this), Term::Var(that)) if this == that => {}

                (Term::Compound(these), Term::Compound(those)) => {
                    if Rc::ptr_eq(these, those) {
                        continue;
                    }
                    if these.len() != those.len() {
                        return false;
                    }
                    pending.extend(these.iter().zip(those.iter()));
                }

                _ => return false,
            }
        }

        true
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut pending = vec![self];

        while let Some(term) = pending.pop() {
            std::mem::discriminant(term).hash(state);
            match term {
                Term::Atom(symbol) => symbol.hash(state),
                Term::Int(value) => value.hash(state),
                Term::Var(variable) => variable.hash(state),
                Term::Compound(items) => {
                    items.len().hash(state);
                    pending.extend(items.iter().rev());
                }
            }
        }
    }
}

impl Drop for Term {
    // Uniquely owned compounds are detached onto a work list, as the default drop recurses once per level.
    fn drop(&mut self) {
        let mut pending = match self {
            Term::Compound(items) if detachable(items) => vec![std::mem::replace(items, Rc::from([]))],
            _ => return,
        };

        while let Some(mut items) = pending.pop() {
            if let Some(items) = Rc::get_mut(&mut items) {
                for item in items.iter_mut() {
                    if let Term::Compound(nested) = item {
                        if detachable(nested) {
                            pending.push(std::mem::replace(nested, Rc::from([])));
                        }
                    }
                }
            }
        }
    }
}

/// Whether dropping `items` would free a non-empty slice of terms.
fn detachable(items: &Rc<[Term]>) -> bool {
    !items.is_empty() && Rc::strong_count(items) == 1
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        enum Piece<'t> {
            Term(&'t Term),
            Text(&'static str),
        }

        let mut pending = vec![Piece::Term(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Term(Term::Atom(symbol)) => write!(f, "{symbol}")?,
                Piece::Term(Term::Int(value)) => write!(f, "{value}")?,
                Piece::Term(Term::Var(variable)) => write!(f, "{variable}")?,
                Piece::Term(Term::Compound(items)) => {
                    f.write_str("[")?;
                    pending.push(Piece::Text("]"));
                    for (index, item) in items.iter().enumerate().rev() {
                        pending.push(Piece::Term(item));
                        if index > 0 {
                            pending.push(Piece::Text(", "));
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Atom(symbol) => write!(f, "{symbol:?}"),
            Term::Int(value) => write!(f, "{value}"),
            Term::Var(variable) => write!(f, "{variable:?}"),
            Term::Compound(items) => f.debug_list().entries(items.iter()).finish(),
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::Atom(symbol) => serializer.serialize_str(symbol),
            Term::Int(value) => serializer.serialize_i64(*value),
            Term::Var(variable) => serializer.collect_str(variable),
            Term::Compound(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items.iter() {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}
