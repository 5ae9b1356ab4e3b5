//! Explicit request lifecycle for fetch-on-mount views.
//!
//! DESIGN
//! ======
//! Every load is `Idle -> Loading -> Ready | Failed`. Each start issues a
//! [`Ticket`]; a completion is applied only if its ticket is still the
//! newest one, so a slow response for a previous asset id can never
//! overwrite state that belongs to the current one.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::fmt::Display;

/// Observable state of a single logical request.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> RequestState<T> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Generation number identifying one started request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Issues tickets and tells whether a ticket is still current.
#[derive(Clone, Debug, Default)]
pub struct RequestTracker {
    generation: u64,
}

impl RequestTracker {
    /// Start a new generation, superseding every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        Ticket(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.generation
    }

    /// Drop interest in any in-flight request without starting a new one.
    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// A [`RequestState`] guarded by a [`RequestTracker`].
#[derive(Clone, Debug)]
pub struct Request<T> {
    state: RequestState<T>,
    tracker: RequestTracker,
}

impl<T> Default for Request<T> {
    fn default() -> Self {
        Self { state: RequestState::Idle, tracker: RequestTracker::default() }
    }
}

impl<T> Request<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &RequestState<T> {
        &self.state
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.state.value()
    }

    /// Enter `Loading` and return the ticket the response must present.
    pub fn start(&mut self) -> Ticket {
        self.state = RequestState::Loading;
        self.tracker.begin()
    }

    /// Like [`Request::start`] but keeps the current value visible while
    /// the refresh is in flight.
    pub fn refresh(&mut self) -> Ticket {
        if self.state.value().is_none() {
            self.state = RequestState::Loading;
        }
        self.tracker.begin()
    }

    /// Apply a completed response. Returns `false` when the ticket is stale
    /// and the response was discarded.
    ///
    /// A failed refresh keeps the last good value; only a failure with
    /// nothing to show moves to `Failed`.
    pub fn finish<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if !self.tracker.is_current(ticket) {
            return false;
        }
        match result {
            Ok(value) => self.state = RequestState::Ready(value),
            Err(error) => {
                if self.state.value().is_none() {
                    self.state = RequestState::Failed(error.to_string());
                }
            }
        }
        true
    }

    /// Return to `Idle`, discarding any in-flight response.
    pub fn reset(&mut self) {
        self.tracker.invalidate();
        self.state = RequestState::Idle;
    }
}
