//! Interaction state for the search window.
//!
//! [`Session`] owns the input buffers and the current [`Phase`]. Submissions
//! hand out a [`Request`] for the caller to run against a backend; the result
//! comes back through [`Session::complete`].

use crate::backend::{Completion, Request, RequestKind, Ticket};

/// Separator placed between the existing results and an appended follow-up answer
const FOLLOW_UP_SEPARATOR: &str = "\n\n";

/// Lifecycle of the search view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Nothing searched yet
    Idle,
    /// Primary search outstanding. `previous` holds the results shown before
    /// a re-search and is `None` only for the first search.
    Searching {
        ticket: Ticket,
        previous: Option<String>,
    },
    /// Results on screen
    Results { text: String },
    /// Follow-up outstanding; its answer will be appended to `text`
    FollowUpSearching { ticket: Ticket, text: String },
}

impl Phase {
    fn outstanding(&self) -> Option<Ticket> {
        match self {
            Phase::Searching { ticket, .. } | Phase::FollowUpSearching { ticket, .. } => {
                Some(*ticket)
            }
            Phase::Idle | Phase::Results { .. } => None,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    query: String,
    follow_up: String,
    phase: Phase,
    last_error: Option<String>,
    next_ticket: Ticket,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            follow_up: String::new(),
            phase: Phase::Idle,
            last_error: None,
            next_ticket: 1,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn follow_up(&self) -> &str {
        &self.follow_up
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.outstanding().is_some()
    }

    /// Whether a primary search has ever completed
    pub fn has_searched(&self) -> bool {
        match &self.phase {
            Phase::Idle | Phase::Searching { previous: None, .. } => false,
            Phase::Searching { previous: Some(_), .. }
            | Phase::Results { .. }
            | Phase::FollowUpSearching { .. } => true,
        }
    }

    /// Result text to display, if any
    pub fn results(&self) -> Option<&str> {
        match &self.phase {
            Phase::Results { text } | Phase::FollowUpSearching { text, .. } => Some(text),
            Phase::Searching { previous, .. } => previous.as_deref(),
            Phase::Idle => None,
        }
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn set_follow_up(&mut self, follow_up: String) {
        self.follow_up = follow_up;
    }

    pub fn can_submit_query(&self) -> bool {
        !self.is_busy() && !self.query.trim().is_empty()
    }

    pub fn can_submit_follow_up(&self) -> bool {
        matches!(self.phase, Phase::Results { .. }) && !self.follow_up.trim().is_empty()
    }

    /// Start a primary search with the current query.
    ///
    /// Returns `None` when the query is blank or a search is already running.
    pub fn submit_query(&mut self) -> Option<Request> {
        if !self.can_submit_query() {
            tracing::debug!("Ignoring query submission (busy: {})", self.is_busy());
            return None;
        }

        let previous = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Results { text } => Some(text),
            _ => None,
        };
        let ticket = self.take_ticket();
        self.phase = Phase::Searching { ticket, previous };
        self.last_error = None;

        Some(Request {
            ticket,
            kind: RequestKind::Query,
            text: self.query.clone(),
        })
    }

    /// Ask a follow-up about the current results.
    ///
    /// Returns `None` when the follow-up is blank, a search is already
    /// running, or there are no results yet.
    pub fn submit_follow_up(&mut self) -> Option<Request> {
        if !self.can_submit_follow_up() {
            tracing::debug!("Ignoring follow-up submission (busy: {})", self.is_busy());
            return None;
        }

        let Phase::Results { text } = &mut self.phase else {
            return None;
        };
        let text = std::mem::take(text);
        let ticket = self.take_ticket();
        self.phase = Phase::FollowUpSearching { ticket, text };
        self.last_error = None;

        Some(Request {
            ticket,
            kind: RequestKind::FollowUp,
            text: self.follow_up.clone(),
        })
    }

    /// Apply the outcome of the outstanding request.
    ///
    /// Returns `false` if the completion does not belong to it.
    pub fn complete(&mut self, completion: Completion) -> bool {
        if self.phase.outstanding() != Some(completion.ticket) {
            tracing::warn!("Dropping stale completion #{}", completion.ticket);
            return false;
        }

        self.phase = match (std::mem::replace(&mut self.phase, Phase::Idle), completion.outcome) {
            (Phase::Searching { .. }, Ok(answer)) => Phase::Results { text: answer },
            (Phase::Searching { previous, .. }, Err(e)) => {
                tracing::warn!("Search #{} failed: {}", completion.ticket, e);
                self.last_error = Some(e.to_string());
                match previous {
                    Some(text) => Phase::Results { text },
                    None => Phase::Idle,
                }
            }
            (Phase::FollowUpSearching { mut text, .. }, Ok(answer)) => {
                text.push_str(FOLLOW_UP_SEPARATOR);
                text.push_str(&answer);
                self.follow_up.clear();
                Phase::Results { text }
            }
            (Phase::FollowUpSearching { text, .. }, Err(e)) => {
                tracing::warn!("Follow-up #{} failed: {}", completion.ticket, e);
                self.last_error = Some(e.to_string());
                Phase::Results { text }
            }
            (phase @ (Phase::Idle | Phase::Results { .. }), _) => phase,
        };
        true
    }

    fn take_ticket(&mut self) -> Ticket {
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        ticket
    }
}
