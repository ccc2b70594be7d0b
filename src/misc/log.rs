/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for writing predicates and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [unification](crate::procedures::unification)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [the trampoline](crate::backtracking::trampoline)
    pub const TRAMPOLINE: &str = "trampoline";

    /// Logs related to [resolution](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to a [context](crate::context)
    pub const CONTEXT: &str = "context";
}
