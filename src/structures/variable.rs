/*!
Logical variables.

A variable is an opaque identity cell.
Two variables are the same variable only if they are the same cell --- a pair of variables with the same display name are still distinct.

Variables carry no value.
Values are given to variables by a [substitution](crate::structures::substitution), and so the same variable may have different values in different substitutions (or none at all).

# Example

```rust
# use yogic::structures::variable::Variable;
let x = Variable::named("x");
let y = Variable::named("x");

assert_ne!(x, y);
assert_eq!(x, x.clone());
assert_eq!(x.to_string(), "x");
```
*/

use std::{
    hash::{Hash, Hasher},
    rc::Rc,
    sync::atomic::{AtomicUsize, Ordering},
};

/// Source of display numbers for anonymous variables.
///
/// Numbers are used only when presenting a variable, never for comparison.
static DISPLAY_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct Cell {
    number: usize,
    name: Option<Rc<str>>,
}

/// A logical variable, compared by identity.
#[derive(Clone)]
pub struct Variable(Rc<Cell>);

impl Variable {
    /// A fresh variable, distinct from every other variable.
    pub fn fresh() -> Self {
        Variable(Rc::new(Cell {
            number: DISPLAY_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: None,
        }))
    }

    /// A fresh variable with a name used when displaying the variable.
    pub fn named(name: &str) -> Self {
        Variable(Rc::new(Cell {
            number: DISPLAY_COUNTER.fetch_add(1, Ordering::Relaxed),
            name: Some(Rc::from(name)),
        }))
    }

    /// The display name of the variable, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.0.name.as_deref()
    }

    /// The display number of the variable.
    pub fn number(&self) -> usize {
        self.0.number
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state)
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "_G{}", self.number()),
        }
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "?{name}#{}", self.number()),
            None => write!(f, "?_G{}", self.number()),
        }
    }
}

/// A fresh anonymous variable.
pub fn var() -> Variable {
    Variable::fresh()
}

/// An array of fresh anonymous variables.
///
/// ```rust
/// # use yogic::structures::variable::vars;
/// let [x, y, z] = vars();
/// assert_ne!(x, y);
/// assert_ne!(y, z);
/// ```
pub fn vars<const N: usize>() -> [Variable; N] {
    std::array::from_fn(|_| Variable::fresh())
}
