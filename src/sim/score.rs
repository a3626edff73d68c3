//! Score accumulation
//!
//! A monotonic ledger: points are only ever awarded, never taken back.
//! Only the contact resolver writes to it.

/// Monotonically increasing score accumulator
#[derive(Debug, Clone, Default)]
pub struct ScoreLedger {
    total: u64,
}

impl ScoreLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to the ledger. There is no decrement operation.
    pub fn award(&mut self, points: u32) {
        self.total += u64::from(points);
    }

    /// Current total
    pub fn current(&self) -> u64 {
        self.total
    }
}
