//! Cooperative cancellation for long sweeps.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::contour_error::ContourError;

/// Shared abort request. Cloning yields a handle to the same flag.
#[derive(Clone, Debug, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask running sweeps to stop at their next row boundary.
    pub fn request(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Clear a previous request so the owner can run again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// `Err(Aborted)` once a request has been made.
    #[inline]
    pub fn check(&self) -> Result<(), ContourError> {
        if self.is_requested() {
            Err(ContourError::Aborted)
        } else {
            Ok(())
        }
    }
}
