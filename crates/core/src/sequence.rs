//! Daily sequence allocation for identifiers
//!
//! Counting today's rows and adding one races when two submissions arrive
//! together: both read the same count and format the same identifier.
//! [`DailySequence`] hands out numbers from a single counter per
//! `(kind, date)` under one lock, so each call gets a distinct value.
//!
//! Seed a counter from storage on startup with [`DailySequence::seed`];
//! seeding never moves a counter backwards.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleetzone_core::sequence::DailySequence;
//! use fleetzone_geo::IdentifierKind;
//!
//! let seq = DailySequence::new();
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//!
//! seq.seed(IdentifierKind::Transaction, today, 4);
//! assert_eq!(seq.next(IdentifierKind::Transaction, today).unwrap(), 5);
//! assert_eq!(seq.next(IdentifierKind::Catch, today).unwrap(), 1);
//! ```

use crate::error::{Error, ErrorCode, Result};
use chrono::NaiveDate;
use fleetzone_geo::IdentifierKind;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Key = (IdentifierKind, NaiveDate);

/// Per-kind, per-day monotonic counter
#[derive(Debug, Clone, Default)]
pub struct DailySequence {
    counters: Arc<Mutex<HashMap<Key, u32>>>,
}

impl DailySequence {
    /// Create an empty allocator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next sequence number, starting at 1
    pub fn next(&self, kind: IdentifierKind, date: NaiveDate) -> Result<u32> {
        // Handle poisoned lock by recovering the data (counters stay consistent)
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        let counter = counters.entry((kind, date)).or_insert(0);

        let next = counter.checked_add(1).ok_or_else(|| {
            Error::new(
                ErrorCode::SequenceExhausted,
                format!("Sequence for {kind} on {date} is exhausted"),
            )
        })?;
        *counter = next;

        tracing::debug!(%kind, %date, sequence = next, "allocated daily sequence");
        Ok(next)
    }

    /// Raise the counter to at least `existing` (records already stored)
    pub fn seed(&self, kind: IdentifierKind, date: NaiveDate, existing: u32) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        let counter = counters.entry((kind, date)).or_insert(0);
        *counter = (*counter).max(existing);
    }

    /// Last number handed out (0 if none)
    #[must_use]
    pub fn current(&self, kind: IdentifierKind, date: NaiveDate) -> u32 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(&(kind, date)).copied().unwrap_or(0)
    }

    /// Drop counters for days before `date`
    pub fn prune_before(&self, date: NaiveDate) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.retain(|(_, day), _| *day >= date);
    }

    /// Number of live `(kind, date)` counters
    #[must_use]
    pub fn len(&self) -> usize {
        self.counters.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when no counter exists
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
