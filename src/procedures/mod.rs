/*!
Procedures of a resolution.

- [Unification](unification), which extends a substitution to make two terms equal.
- [Resolution](resolve), which finds the solutions to a goal.
*/

pub mod resolve;
pub mod unification;
