//! The driver of a resolution.
//!
//! [Solutions] holds the pending continuation of a resolution, and on request for a solution repeatedly invokes continuations until an [Outcome] other than a [Bounce](Outcome::Bounce) is returned.
//! Each continuation returns to the driver before the next is invoked, and so the native stack depth of a resolution is independent of the depth of a proof.
//!
//! Solutions are found only when requested.
//! So, an unbounded search space may be explored one solution at a time, and a resolution is cancelled by dropping the iterator.
//!
//! # Bounds
//!
//! By default the driver is unbounded.
//! A limit on the count of bounces, or on the time spent on the resolution, may be set.
//! If a limit is reached, [try_next](Solutions::try_next) returns an error and the resolution ends.
//! The [Iterator] implementation logs the error and ends the sequence.

use std::time::{Duration, Instant};

use crate::{
    backtracking::{exhausted, Emit, Goal, Next, Outcome},
    misc::log::targets::{self},
    structures::substitution::Subst,
    types::err::{self},
};

/// Bounces between checks of the time limit.
const TIME_CHECK_INTERVAL: usize = 1024;

enum Pending {
    /// The goal, not yet applied.
    Start(Goal),

    /// The continuation of the most recent solution.
    Resume(Next),
}

/// A lazy sequence of the solutions to a goal, in resolution order.
pub struct Solutions {
    pending: Option<Pending>,

    bounces: usize,
    found: usize,

    bounce_limit: Option<usize>,
    time_limit: Option<Duration>,
    started: Option<Instant>,
}

impl Solutions {
    /// The (unbounded) solutions to `goal`.
    pub fn new(goal: Goal) -> Self {
        Solutions {
            pending: Some(Pending::Start(goal)),
            bounces: 0,
            found: 0,
            bounce_limit: None,
            time_limit: None,
            started: None,
        }
    }

    /// Ends the resolution with an error after `limit` bounces.
    pub fn with_bounce_limit(mut self, limit: usize) -> Self {
        self.bounce_limit = Some(limit);
        self
    }

    /// Ends the resolution with an error after `limit` time has elapsed since the first request for a solution.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// The count of bounces made so far.
    pub fn bounces(&self) -> usize {
        self.bounces
    }

    /// The count of solutions found so far.
    pub fn found(&self) -> usize {
        self.found
    }

    /// The next solution, if there is one, or an error if a limit was reached while searching for the solution.
    pub fn try_next(&mut self) -> Result<Option<Subst>, err::ResolutionError> {
        let mut outcome = match self.pending.take() {
            None => return Ok(None),

            Some(Pending::Start(goal)) => {
                log::trace!(target: targets::TRAMPOLINE, "Resolution started");
                self.started = Some(Instant::now());

                let yes: Emit = std::rc::Rc::new(Outcome::Solution);
                let no = exhausted();
                goal.apply(Subst::default()).run(yes, no.clone(), no)
            }

            Some(Pending::Resume(next)) => next(),
        };

        loop {
            match outcome {
                Outcome::Exhausted => {
                    log::debug!(target: targets::TRAMPOLINE, "Exhausted after {} bounces and {} solutions", self.bounces, self.found);
                    return Ok(None);
                }

                Outcome::Solution(subst, next) => {
                    self.found += 1;
                    log::trace!(target: targets::TRAMPOLINE, "Solution {} after {} bounces", self.found, self.bounces);
                    self.pending = Some(Pending::Resume(next));
                    return Ok(Some(subst));
                }

                Outcome::Bounce(thunk) => {
                    self.bounces += 1;
                    self.check_limits()?;
                    outcome = thunk();
                }
            }
        }
    }

    fn check_limits(&self) -> Result<(), err::ResolutionError> {
        if let Some(limit) = self.bounce_limit {
            if self.bounces > limit {
                log::info!(target: targets::TRAMPOLINE, "Bounce limit of {limit} reached");
                return Err(err::ResolutionError::BounceLimit);
            }
        }

        if let (Some(limit), Some(started)) = (self.time_limit, self.started) {
            if self.bounces % TIME_CHECK_INTERVAL == 0 && started.elapsed() > limit {
                log::info!(target: targets::TRAMPOLINE, "Time limit of {limit:?} reached");
                return Err(err::ResolutionError::TimeLimit);
            }
        }

        Ok(())
    }
}

impl Iterator for Solutions {
    type Item = Subst;

    fn next(&mut self) -> Option<Self::Item> {
        match self.try_next() {
            Ok(solution) => solution,
            Err(e) => {
                log::warn!(target: targets::TRAMPOLINE, "Resolution ended early: {e:?}");
                None
            }
        }
    }
}

impl std::fmt::Debug for Solutions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Solutions")
            .field("pending", &self.pending.is_some())
            .field("bounces", &self.bounces)
            .field("found", &self.found)
            .finish()
    }
}
