use std::sync::atomic::{AtomicUsize, Ordering};

/// Size limit shared by several caches, one unit per entry.
///
/// Lock-free: units are reserved with a CAS loop and never exceed `limit`.
#[derive(Debug)]
pub struct SizeBudget {
    limit: usize,
    used: AtomicUsize,
}

impl SizeBudget {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            used: AtomicUsize::new(0),
        }
    }

    /// Reserve one unit. Returns `false` when the budget is exhausted.
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                (used < self.limit).then_some(used + 1)
            })
            .is_ok()
    }

    #[inline]
    pub fn release(&self, units: usize) {
        let _ = self
            .used
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |used| {
                Some(used.saturating_sub(units))
            });
    }

    pub fn used(&self) -> usize {
        self.used.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn available(&self) -> usize {
        self.limit.saturating_sub(self.used())
    }
}
