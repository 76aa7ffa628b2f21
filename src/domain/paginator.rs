// src/domain/paginator.rs

use crate::domain::filter::{filter_listings, FilterCriteria};
use crate::domain::listing::Listing;
use crate::domain::sort::{sort_listings, SortKey};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be at least 1, got {0}")]
    InvalidPageSize(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Exhausted,
}

/// Handed out by [`Paginator::begin_load`]; redeemed by [`Paginator::complete_load`].
/// A ticket from before the last `reset` is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub generation: u64,
    pub page: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Appended { page: usize, count: usize },
    Stale,
}

/// Reveals a filtered and sorted listing sequence one page at a time.
///
/// Lifecycle: `reset` → (`begin_load` → `complete_load`)* until exhausted.
/// The displayed list is always a prefix of the sequence.
#[derive(Debug)]
pub struct Paginator {
    page_size: usize,
    sequence: Vec<Arc<Listing>>,
    shown: usize,
    last_page_start: usize,
    page: usize,
    generation: u64,
    phase: Phase,
}

impl Paginator {
    /// An empty, exhausted paginator. Call [`Paginator::reset`] to give it data.
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize(page_size));
        }

        Ok(Self {
            page_size,
            sequence: Vec::new(),
            shown: 0,
            last_page_start: 0,
            page: 0,
            generation: 0,
            phase: Phase::Exhausted,
        })
    }

    /// Recomputes the sequence and starts over from page one.
    /// Any load still in flight becomes stale.
    pub fn reset(&mut self, listings: &[Arc<Listing>], criteria: &FilterCriteria, sort: SortKey) {
        let mut sequence = filter_listings(listings, criteria);
        sort_listings(&mut sequence, sort);

        if self.phase == Phase::Loading {
            tracing::debug!(generation = self.generation, "superseding in-flight page load");
        }

        self.sequence = sequence;
        self.shown = 0;
        self.last_page_start = 0;
        self.page = 0;
        self.generation += 1;
        self.phase = if self.sequence.is_empty() {
            Phase::Exhausted
        } else {
            Phase::Idle
        };
    }

    /// Starts loading the next page. `None` while a load is in flight or
    /// when nothing is left; callers treat that as a no-op.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.phase != Phase::Idle || !self.has_more() {
            return None;
        }

        self.phase = Phase::Loading;
        Some(LoadTicket {
            generation: self.generation,
            page: self.page + 1,
        })
    }

    /// Applies a finished load. Tickets from an older generation, or that
    /// were already redeemed, are discarded.
    pub fn complete_load(&mut self, ticket: LoadTicket) -> LoadOutcome {
        if ticket.generation != self.generation || self.phase != Phase::Loading {
            tracing::debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                page = ticket.page,
                "discarding stale page load"
            );
            return LoadOutcome::Stale;
        }

        let end = (self.shown + self.page_size).min(self.sequence.len());
        let count = end - self.shown;

        self.last_page_start = self.shown;
        self.shown = end;
        self.page = ticket.page;
        self.phase = if self.has_more() {
            Phase::Idle
        } else {
            Phase::Exhausted
        };

        LoadOutcome::Appended {
            page: self.page,
            count,
        }
    }

    /// Loads the next page synchronously. Returns `false` when it was a no-op.
    pub fn load_more(&mut self) -> bool {
        match self.begin_load() {
            Some(ticket) => matches!(self.complete_load(ticket), LoadOutcome::Appended { .. }),
            None => false,
        }
    }

    pub fn displayed(&self) -> &[Arc<Listing>] {
        &self.sequence[..self.shown]
    }

    /// The listings revealed by the most recent load.
    pub fn last_page(&self) -> &[Arc<Listing>] {
        &self.sequence[self.last_page_start..self.shown]
    }

    pub fn has_more(&self) -> bool {
        self.shown < self.sequence.len()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of pages revealed so far.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Length of the whole filtered and sorted sequence.
    pub fn total(&self) -> usize {
        self.sequence.len()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}
