use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe row counter for parallel field sampling.
/// Workers bump it lock-free as they finish rows.
pub struct FieldProgress {
    rows_done: AtomicUsize,
    total_rows: usize,
}

impl FieldProgress {
    /// Create a tracker for a field with the given number of rows.
    pub fn new(total_rows: usize) -> Self {
        Self {
            rows_done: AtomicUsize::new(0),
            total_rows,
        }
    }

    /// Record finished rows. Safe to call from multiple threads concurrently.
    pub fn increment(&self, rows: usize) {
        self.rows_done.fetch_add(rows, Ordering::Relaxed);
    }

    pub fn rows_done(&self) -> usize {
        self.rows_done.load(Ordering::Relaxed)
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Progress fraction (0.0 to 1.0).
    pub fn fraction(&self) -> f32 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.rows_done() as f32 / self.total_rows as f32
    }

    pub fn is_complete(&self) -> bool {
        self.rows_done() >= self.total_rows
    }

    pub fn reset(&self) {
        self.rows_done.store(0, Ordering::Relaxed);
    }
}
