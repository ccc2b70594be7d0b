//! Error types used in the library.
//!
//! - Failure to find a proof is not an error.
//!   A goal without solutions is simply exhausted, whether through [fail](crate::combinators::fail), [negation](crate::combinators::no), or a unification mismatch.
//! - Misuse of the continuation protocol is ruled out by types: a malformed term cannot be built, and a [Step](crate::backtracking::Step) is consumed when run.
//!
//! And so, errors arise only from bounds placed on a resolution, and from configuring those bounds.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Resolution(ResolutionError),
}

/// Noted errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the range of the option.
    OutOfRange(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors during a resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionError {
    /// The configured limit on bounces of the trampoline was reached.
    BounceLimit,

    /// The configured time limit was reached.
    TimeLimit,
}

impl From<ResolutionError> for ErrorKind {
    fn from(e: ResolutionError) -> Self {
        ErrorKind::Resolution(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(ConfigError::OutOfRange(name)) => write!(f, "{name} is out of range"),
            Self::Resolution(ResolutionError::BounceLimit) => write!(f, "bounce limit reached"),
            Self::Resolution(ResolutionError::TimeLimit) => write!(f, "time limit reached"),
        }
    }
}

impl std::error::Error for ErrorKind {}
