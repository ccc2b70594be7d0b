/*!
Reports for the context.
*/

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Every solution was found.
    Exhausted,

    /// The solution limit was reached, and there may be further solutions.
    Truncated,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exhausted => write!(f, "Exhausted"),
            Self::Truncated => write!(f, "Truncated"),
        }
    }
}
