//! View state snapshots
//!
//! Offset, page and records live in one immutable [`ViewState`]. Every
//! transition produces a new snapshot; nothing is mutated in place.

use crate::loader::SeedData;
use crate::pagination::{Navigation, PageCursor};
use crate::types::LaunchRecord;
use std::sync::Arc;

/// Everything a render needs, captured at one instant
#[derive(Debug, Clone)]
pub struct ViewState {
    cursor: PageCursor,
    records: Arc<[LaunchRecord]>,
    /// Records still come from the seed; cleared by the first applied fetch
    seeded: bool,
    /// Bumped on every offset change; identifies the only fetch allowed to land
    generation: u64,
}

/// Permission to replace the records of one particular navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    cursor: PageCursor,
}

impl FetchTicket {
    /// Generation the ticket was issued for
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Page to fetch
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }
}

impl ViewState {
    /// Initial snapshot showing the seed; requires no fetch
    pub fn from_seed(seed: &SeedData) -> Self {
        Self {
            cursor: seed.cursor(),
            records: seed.shared_records(),
            seeded: true,
            generation: 0,
        }
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn offset(&self) -> u64 {
        self.cursor.offset()
    }

    pub fn page(&self) -> u64 {
        self.cursor.page()
    }

    /// Launches currently displayed
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Whether the displayed records are still the seed
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Back is available (offset > 0)
    pub fn can_go_back(&self) -> bool {
        self.cursor.has_previous()
    }

    /// Move one page in `navigation`'s direction
    ///
    /// Returns `None` when the offset would not change (Back on the first
    /// page); otherwise the new snapshot, still showing the old records, and
    /// the ticket for the single fetch this navigation requires.
    pub fn navigate(&self, navigation: Navigation) -> Option<(Self, FetchTicket)> {
        let cursor = self.cursor.navigate(navigation);
        if cursor == self.cursor {
            return None;
        }

        let generation = self.generation + 1;
        let next = Self {
            cursor,
            records: Arc::clone(&self.records),
            seeded: self.seeded,
            generation,
        };
        Some((next, FetchTicket { generation, cursor }))
    }

    /// Whether a response for `ticket` may still be applied
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation && ticket.cursor == self.cursor
    }

    /// Replace the records with the response to `ticket`
    ///
    /// Returns `None` for a stale ticket: a newer navigation happened after
    /// it was issued, so its response must not overwrite newer state.
    pub fn apply(&self, ticket: &FetchTicket, records: Vec<LaunchRecord>) -> Option<Self> {
        if !self.is_current(ticket) {
            return None;
        }
        Some(Self {
            cursor: self.cursor,
            records: records.into(),
            seeded: false,
            generation: self.generation,
        })
    }
}
