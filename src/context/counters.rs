use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Debug)]
pub struct Counters {
    /// A count of every solve.
    pub resolutions: usize,

    /// A count of bounces of the trampoline, over every solve.
    pub total_bounces: usize,

    /// A count of solutions found, over every solve.
    pub total_solutions: usize,

    /// The time taken, over every solve.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            resolutions: 0,
            total_bounces: 0,
            total_solutions: 0,
            time: Duration::from_secs(0),
        }
    }
}
