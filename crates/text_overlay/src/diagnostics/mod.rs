//! Toolkit diagnostics
//!
//! Toolkit callbacks cannot unwind into the caller, so errors and warnings
//! they report are latched here and polled later.

mod error_latch;

pub use error_latch::{ErrorLatch, ErrorObserver, Severity, SharedErrorLatch};
