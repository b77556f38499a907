//! Clock store
//!
//! Ordered collection of clock records keyed by id. Every mutation that
//! cannot apply (full store, unknown id) is a silent no-op reported through
//! the return value, never an error.

use crate::domain::{ClockId, ClockPatch, ClockPeriod, ClockRecord, TimeUnit};

/// Default maximum number of clocks
pub const DEFAULT_CAPACITY: usize = 5;

/// Ordered mapping of clock ids to records, capped at `capacity`
#[derive(Debug, Clone)]
pub struct ClockStore {
    /// Records in display order
    clocks: Vec<ClockRecord>,
    /// Maximum number of records
    capacity: usize,
    /// Next id to hand out
    next_id: u32,
}

impl Default for ClockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockStore {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` clocks
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clocks: Vec::with_capacity(capacity),
            capacity,
            next_id: 0,
        }
    }

    /// Add a clock at the end of the current order
    ///
    /// Returns `None` without touching the store when it is full.
    pub fn add(&mut self, length: ClockPeriod, unit: TimeUnit) -> Option<ClockId> {
        if self.is_full() {
            log::debug!("Store full ({} clocks), ignoring add", self.capacity);
            return None;
        }

        let id = ClockId::new(self.next_id);
        self.next_id += 1;
        self.clocks.push(ClockRecord::new(id, length, unit));
        log::debug!("Added clock {} ({}{})", id, length, unit.suffix());
        Some(id)
    }

    /// Merge `patch` into the clock with `id`
    ///
    /// Returns `false` if no such clock exists.
    pub fn update(&mut self, id: ClockId, patch: ClockPatch) -> bool {
        match self.clocks.iter_mut().find(|c| c.id == id) {
            Some(record) => {
                patch.apply_to(record);
                log::debug!(
                    "Updated clock {} to {}{}",
                    id,
                    record.length,
                    record.unit.suffix()
                );
                true
            }
            None => false,
        }
    }

    /// Remove the clock with `id`, returning it
    ///
    /// The returned record tells the caller which ring, label and settings
    /// row to drop. Returns `None` if no such clock exists.
    pub fn remove(&mut self, id: ClockId) -> Option<ClockRecord> {
        let position = self.clocks.iter().position(|c| c.id == id)?;
        let removed = self.clocks.remove(position);
        log::debug!("Removed clock {}", id);
        Some(removed)
    }

    /// Order clocks from longest to shortest effective duration
    ///
    /// The sort is stable: clocks with equal durations keep their relative
    /// order, so sorting twice gives the same result as sorting once.
    pub fn sort_by_effective_duration(&mut self) {
        self.clocks
            .sort_by_key(|c| std::cmp::Reverse(c.effective_duration()));
    }

    /// Check whether the clocks are already in sorted order
    pub fn is_sorted(&self) -> bool {
        self.clocks
            .windows(2)
            .all(|w| w[0].effective_duration() >= w[1].effective_duration())
    }

    /// Get a clock by id
    pub fn get(&self, id: ClockId) -> Option<&ClockRecord> {
        self.clocks.iter().find(|c| c.id == id)
    }

    /// Check whether a clock exists
    pub fn contains(&self, id: ClockId) -> bool {
        self.get(id).is_some()
    }

    /// Clocks in current order
    pub fn iter(&self) -> impl Iterator<Item = &ClockRecord> {
        self.clocks.iter()
    }

    /// Ids in current order
    pub fn ids(&self) -> Vec<ClockId> {
        self.clocks.iter().map(|c| c.id).collect()
    }

    /// Number of clocks
    pub fn len(&self) -> usize {
        self.clocks.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.clocks.is_empty()
    }

    /// Maximum number of clocks
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if no more clocks can be added
    pub fn is_full(&self) -> bool {
        self.clocks.len() >= self.capacity
    }
}
