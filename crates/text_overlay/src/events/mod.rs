//! Window notification registry
//!
//! Windows announce state changes through a coarse "modified" notification:
//! any change (size, position, focus) fires every registered observer, and
//! observers are expected to query whatever state they care about.
//!
//! Key properties:
//! - Registration returns an [`ObserverId`] used to unregister later
//! - Observers may register or unregister observers while being notified
//! - Dispatch is synchronous and single-threaded

use std::cell::{Cell, RefCell};

use log::{trace, warn};

/// Upper bound on dispatch passes triggered by re-entrant notifications
pub const MAX_DISPATCH_PASSES: u32 = 8;

/// Handle identifying a registered observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

/// Observer callback, invoked with no arguments on every notification
pub type Observer = Box<dyn FnMut()>;

/// Registry of observers for a single notification source
pub struct ObserverRegistry {
    next_id: Cell<u64>,
    observers: RefCell<Vec<(ObserverId, Observer)>>,
    dispatching: Cell<bool>,
    pending: Cell<bool>,
    // Observers taken out of `observers` for the current dispatch
    in_flight: RefCell<Vec<ObserverId>>,
    removed_in_flight: RefCell<Vec<ObserverId>>,
}

impl ObserverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            observers: RefCell::new(Vec::new()),
            dispatching: Cell::new(false),
            pending: Cell::new(false),
            in_flight: RefCell::new(Vec::new()),
            removed_in_flight: RefCell::new(Vec::new()),
        }
    }

    /// Register an observer, returning its handle
    pub fn add(&self, observer: Observer) -> ObserverId {
        let id = ObserverId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.observers.borrow_mut().push((id, observer));
        trace!("Registered observer {:?}", id);
        id
    }

    /// Unregister an observer, returning whether it was registered
    pub fn remove(&self, id: ObserverId) -> bool {
        {
            let mut observers = self.observers.borrow_mut();
            if let Some(index) = observers.iter().position(|(existing, _)| *existing == id) {
                drop(observers.remove(index));
                return true;
            }
        }

        if self.in_flight.borrow().contains(&id) {
            let mut removed = self.removed_in_flight.borrow_mut();
            if !removed.contains(&id) {
                removed.push(id);
                return true;
            }
        }
        false
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        let pending_removals = self.removed_in_flight.borrow().len();
        self.observers.borrow().len() + self.in_flight.borrow().len() - pending_removals
    }

    /// Whether no observers are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invoke every registered observer
    ///
    /// A notification raised from inside an observer is deferred: once the
    /// current pass finishes, every observer is invoked again so observers
    /// that already ran see the newer state. Passes stop after
    /// [`MAX_DISPATCH_PASSES`] if observers keep re-notifying.
    pub fn notify(&self) {
        if self.dispatching.replace(true) {
            trace!("Nested notification deferred");
            self.pending.set(true);
            return;
        }

        let mut passes = 0;
        loop {
            self.pending.set(false);
            self.dispatch_pass();
            passes += 1;

            if !self.pending.get() {
                break;
            }
            if passes == MAX_DISPATCH_PASSES {
                warn!("Observers still re-notifying after {} passes; stopping", passes);
                self.pending.set(false);
                break;
            }
        }

        self.dispatching.set(false);
    }

    fn dispatch_pass(&self) {
        let mut current = std::mem::take(&mut *self.observers.borrow_mut());
        *self.in_flight.borrow_mut() = current.iter().map(|(id, _)| *id).collect();

        for (id, observer) in &mut current {
            let removed = self.removed_in_flight.borrow().contains(id);
            if !removed {
                observer();
            }
        }

        let removed = std::mem::take(&mut *self.removed_in_flight.borrow_mut());
        self.in_flight.borrow_mut().clear();
        current.retain(|(id, _)| !removed.contains(id));

        // Keep registration order: survivors first, then anything added during dispatch
        let mut observers = self.observers.borrow_mut();
        current.append(&mut observers);
        *observers = current;
    }

    /// Remove all observers
    pub fn clear(&self) {
        self.observers.borrow_mut().clear();
        let in_flight = self.in_flight.borrow().clone();
        let mut removed = self.removed_in_flight.borrow_mut();
        for id in in_flight {
            if !removed.contains(&id) {
                removed.push(id);
            }
        }
    }
}

impl Default for ObserverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .field("dispatching", &self.dispatching.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn counter() -> (Rc<Cell<u32>>, Observer) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move || handle.set(handle.get() + 1)))
    }

    #[test]
    fn test_notify_calls_every_observer() {
        let registry = ObserverRegistry::new();
        let (first, observer) = counter();
        registry.add(observer);
        let (second, observer) = counter();
        registry.add(observer);

        registry.notify();
        registry.notify();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_observer() {
        let registry = ObserverRegistry::new();
        let (count, observer) = counter();
        let id = registry.add(observer);

        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        registry.notify();

        assert_eq!(count.get(), 0);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_during_dispatch() {
        let registry = Rc::new(ObserverRegistry::new());
        let (count, observer) = counter();

        // First observer unregisters the second before it runs
        let victim = Rc::new(Cell::new(None));
        let registry_handle = Rc::downgrade(&registry);
        let victim_handle = Rc::clone(&victim);
        registry.add(Box::new(move || {
            if let (Some(registry), Some(id)) = (registry_handle.upgrade(), victim_handle.get()) {
                assert!(registry.remove(id));
            }
        }));
        victim.set(Some(registry.add(observer)));

        registry.notify();
        assert_eq!(count.get(), 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_during_dispatch() {
        let registry = Rc::new(ObserverRegistry::new());
        let (count, observer) = counter();
        let pending = RefCell::new(Some(observer));
        let registry_handle = Rc::downgrade(&registry);
        registry.add(Box::new(move || {
            let observer = pending.borrow_mut().take();
            if let (Some(registry), Some(observer)) = (registry_handle.upgrade(), observer) {
                registry.add(observer);
            }
        }));

        registry.notify();
        // Added observers only see the next notification
        assert_eq!(count.get(), 0);
        assert_eq!(registry.len(), 2);

        registry.notify();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_nested_notify_reruns_earlier_observers() {
        let registry = Rc::new(ObserverRegistry::new());
        let (count, observer) = counter();
        registry.add(observer);

        // Second observer re-notifies once, after the first already ran
        let fired = Rc::new(Cell::new(false));
        let registry_handle = Rc::downgrade(&registry);
        let fired_handle = Rc::clone(&fired);
        registry.add(Box::new(move || {
            if !fired_handle.replace(true) {
                if let Some(registry) = registry_handle.upgrade() {
                    registry.notify();
                }
            }
        }));

        registry.notify();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_endless_renotify_is_bounded() {
        let registry = Rc::new(ObserverRegistry::new());
        let (count, observer) = counter();
        registry.add(observer);
        let registry_handle = Rc::downgrade(&registry);
        registry.add(Box::new(move || {
            if let Some(registry) = registry_handle.upgrade() {
                registry.notify();
            }
        }));

        registry.notify();
        assert_eq!(count.get(), MAX_DISPATCH_PASSES);

        // The registry is usable again afterwards
        registry.notify();
        assert_eq!(count.get(), 2 * MAX_DISPATCH_PASSES);
    }
}
