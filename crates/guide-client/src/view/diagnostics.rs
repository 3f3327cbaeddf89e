//! Diagnostic sink for fetch failures
//!
//! Failures are reported here and nowhere else; the UI never shows them.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::FetchError;

pub trait Diagnostics {
    fn report(&self, error: &FetchError);
}

/// Reports through the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn report(&self, error: &FetchError) {
        log::error!("request failed: {}", error);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn report(&self, error: &FetchError) {
        (**self).report(error)
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Rc<D> {
    fn report(&self, error: &FetchError) {
        (**self).report(error)
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for Arc<D> {
    fn report(&self, error: &FetchError) {
        (**self).report(error)
    }
}
