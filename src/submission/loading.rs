//! Busy flag shared between a pipeline and whoever renders it

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable flag that is set while a submission is in flight
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Set the flag unless it is already set. The flag is cleared when the
    /// returned guard is dropped.
    pub fn try_begin(&self) -> Option<LoadingGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| LoadingGuard(self.clone()))
    }
}

/// Clears its [`LoadingFlag`] on drop
#[derive(Debug)]
pub struct LoadingGuard(LoadingFlag);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0 .0.store(false, Ordering::Release);
    }
}
