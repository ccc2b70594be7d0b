//! Operators on goals, following the lattice of goals.
//!
//! - `a & b` is [then](super::then), the meet.
//! - `a | b` is [choice](super::choice), the join.
//! - `!a` is [no](super::no).

use std::ops::{BitAnd, BitOr, Not};

use super::{choice, no, then, Goal};

impl BitAnd for Goal {
    type Output = Goal;

    fn bitand(self, rhs: Goal) -> Goal {
        then(self, rhs)
    }
}

impl BitOr for Goal {
    type Output = Goal;

    fn bitor(self, rhs: Goal) -> Goal {
        choice(self, rhs)
    }
}

impl Not for Goal {
    type Output = Goal;

    fn not(self) -> Goal {
        no(self)
    }
}
