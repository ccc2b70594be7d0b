/*!
The abstract elements of a resolution, and their representation.

- [Variables](variable), logical unknowns compared by identity.
- [Terms](term), the values variables stand for and unification works over.
- [Substitutions](substitution), the bindings of variables reached at some point of a resolution.
*/

pub mod substitution;
pub mod term;
pub mod variable;
