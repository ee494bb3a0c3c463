//! One-shot error latch
//!
//! `record` sets the flag, `check_and_clear` reads and resets it. The last
//! message survives reads so it can still be shown after the flag is cleared.
//! Messages are last-write-wins; nothing is queued.

use std::sync::{Arc, Mutex, MutexGuard};

use log::{trace, warn};

/// Severity of a toolkit event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Toolkit error event
    Error,
    /// Toolkit warning event
    Warning,
}

/// Pollable record of toolkit errors
#[derive(Debug, Clone, Default)]
pub struct ErrorLatch {
    occurred: bool,
    message: Option<String>,
    severity: Option<Severity>,
    event_count: u64,
}

impl ErrorLatch {
    /// Create a cleared latch
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error event
    pub fn record(&mut self, message: impl Into<String>) {
        self.record_event(Severity::Error, message);
    }

    /// Record an event with explicit severity
    pub fn record_event(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::Error => warn!("Toolkit error: {}", message),
            Severity::Warning => warn!("Toolkit warning: {}", message),
        }
        self.occurred = true;
        self.message = Some(message);
        self.severity = Some(severity);
        self.event_count += 1;
    }

    /// Return whether an event was recorded since the last call, then reset
    pub fn check_and_clear(&mut self) -> bool {
        let occurred = self.occurred;
        self.occurred = false;
        trace!("Error latch read: {}", occurred);
        occurred
    }

    /// Most recently recorded message, whether or not it has been checked
    pub fn last_message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Severity of the most recent event
    pub fn last_severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Total number of events recorded
    pub fn event_count(&self) -> u64 {
        self.event_count
    }
}

/// Thread-safe handle to an [`ErrorLatch`]
///
/// The flag and message sit behind one mutex and are always updated
/// together. A poisoned lock is recovered: the latch holds no invariant a
/// panic could break halfway.
#[derive(Debug, Clone, Default)]
pub struct SharedErrorLatch {
    inner: Arc<Mutex<ErrorLatch>>,
}

impl SharedErrorLatch {
    /// Create a cleared shared latch
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ErrorLatch> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// See [`ErrorLatch::record`]
    pub fn record(&self, message: impl Into<String>) {
        self.lock().record(message);
    }

    /// See [`ErrorLatch::record_event`]
    pub fn record_event(&self, severity: Severity, message: impl Into<String>) {
        self.lock().record_event(severity, message);
    }

    /// See [`ErrorLatch::check_and_clear`]
    pub fn check_and_clear(&self) -> bool {
        self.lock().check_and_clear()
    }

    /// See [`ErrorLatch::last_message`]; returns an owned copy
    pub fn last_message(&self) -> Option<String> {
        self.lock().last_message().map(str::to_owned)
    }

    /// See [`ErrorLatch::event_count`]
    pub fn event_count(&self) -> u64 {
        self.lock().event_count()
    }

    /// Copy of the current latch state
    pub fn snapshot(&self) -> ErrorLatch {
        self.lock().clone()
    }
}

/// Callback adapter matching the toolkit's `(event, message)` observer shape
#[derive(Debug, Clone, Default)]
pub struct ErrorObserver {
    latch: SharedErrorLatch,
}

impl ErrorObserver {
    /// Create an observer with its own latch
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an observer feeding an existing latch
    pub fn with_latch(latch: SharedErrorLatch) -> Self {
        Self { latch }
    }

    /// Handle a toolkit event; warning events are recorded as warnings
    pub fn observe(&self, event: &str, message: &str) {
        let severity = if event.contains("Warning") {
            Severity::Warning
        } else {
            Severity::Error
        };
        self.latch.record_event(severity, message);
    }

    /// Boxed callback suitable for registration with a toolkit
    pub fn callback(&self) -> Box<dyn FnMut(&str, &str) + Send> {
        let observer = self.clone();
        Box::new(move |event: &str, message: &str| observer.observe(event, message))
    }

    /// See [`ErrorLatch::check_and_clear`]
    pub fn error_occurred(&self) -> bool {
        self.latch.check_and_clear()
    }

    /// See [`ErrorLatch::last_message`]
    pub fn error_message(&self) -> Option<String> {
        self.latch.last_message()
    }

    /// Underlying latch
    pub fn latch(&self) -> &SharedErrorLatch {
        &self.latch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_latch_is_clear() {
        let mut latch = ErrorLatch::new();
        assert!(!latch.check_and_clear());
        assert_eq!(latch.last_message(), None);
        assert_eq!(latch.event_count(), 0);
    }

    #[test]
    fn test_check_and_clear_resets_flag() {
        let mut latch = ErrorLatch::new();
        latch.record("bad extent");
        assert!(latch.check_and_clear());
        assert!(!latch.check_and_clear());
    }

    #[test]
    fn test_last_write_wins() {
        let mut latch = ErrorLatch::new();
        latch.record("a");
        latch.record("b");
        assert!(latch.check_and_clear());
        assert_eq!(latch.last_message(), Some("b"));
        assert_eq!(latch.event_count(), 2);
    }

    #[test]
    fn test_message_retained_after_read() {
        let mut latch = ErrorLatch::new();
        latch.record("lost context");
        latch.check_and_clear();
        assert_eq!(latch.last_message(), Some("lost context"));
    }

    #[test]
    fn test_severity_tracked() {
        let mut latch = ErrorLatch::new();
        latch.record_event(Severity::Warning, "deprecated call");
        assert_eq!(latch.last_severity(), Some(Severity::Warning));
        latch.record("failure");
        assert_eq!(latch.last_severity(), Some(Severity::Error));
    }

    #[test]
    fn test_shared_latch_across_threads() {
        let latch = SharedErrorLatch::new();
        let worker = latch.clone();
        std::thread::spawn(move || worker.record("from render thread"))
            .join()
            .unwrap();

        assert!(latch.check_and_clear());
        assert!(!latch.check_and_clear());
        assert_eq!(latch.last_message().as_deref(), Some("from render thread"));
    }

    #[test]
    fn test_observer_callback() {
        let observer = ErrorObserver::new();
        let mut callback = observer.callback();
        callback("WarningEvent", "slow path");
        assert_eq!(observer.latch().snapshot().last_severity(), Some(Severity::Warning));

        callback("ErrorEvent", "no input");
        assert!(observer.error_occurred());
        assert!(!observer.error_occurred());
        assert_eq!(observer.error_message().as_deref(), Some("no input"));
    }
}
