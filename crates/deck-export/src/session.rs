//! Serialized exports.

use std::sync::atomic::{AtomicBool, Ordering};

use deck_model::{ExportOutcome, ExportRequest};

use crate::error::{ExportError, Result};
use crate::service::ExportService;

/// Wraps a service and rejects an export while another is in flight.
#[derive(Debug)]
pub struct ExportSession<S> {
    service: S,
    exporting: AtomicBool,
}

/// Clears the flag when the export finishes, including on error or panic.
struct ExportingGuard<'a>(&'a AtomicBool);

impl Drop for ExportingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl<S: ExportService> ExportSession<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            exporting: AtomicBool::new(false),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    pub fn export(&self, request: &ExportRequest) -> Result<ExportOutcome> {
        if self
            .exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ExportError::AlreadyExporting);
        }
        let _guard = ExportingGuard(&self.exporting);
        self.service.export_mod(request)
    }
}
