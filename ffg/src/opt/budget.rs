use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::config::FFGConfig;

/// Bounds the latency of a top-level call: an optional deadline plus a cancellation flag.
/// Checked by the packer before every design it attempts to place, by the grid scan once per row,
/// and by the multi-start optimizer before every trial.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    deadline: Option<Instant>,
    cancelled: Arc<AtomicBool>,
}

impl Budget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_time_limit(limit: Duration) -> Self {
        Self {
            deadline: Instant::now().checked_add(limit),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Budget starting now, limited by the configured time limit, if any
    pub fn from_config(config: &FFGConfig) -> Self {
        match config.time_limit_ms {
            Some(ms) => Self::with_time_limit(Duration::from_millis(ms)),
            None => Self::unlimited(),
        }
    }

    /// Handle through which another thread can cancel work running under this budget
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancelled.clone())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
            || self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[derive(Debug, Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellation_is_shared() {
        let budget = Budget::unlimited();
        let clone = budget.clone();
        assert!(!budget.is_exhausted());
        budget.cancel_handle().cancel();
        assert!(budget.is_exhausted());
        assert!(clone.is_exhausted());
    }

    #[test]
    fn zero_time_limit_is_exhausted() {
        assert!(Budget::with_time_limit(Duration::ZERO).is_exhausted());
        assert!(!Budget::with_time_limit(Duration::from_secs(3600)).is_exhausted());
    }
}
