//! The subject side of the registry

use super::Observer;
use crate::config::{FailurePolicy, RegistryConfig};
use crate::error::{CompositionError, CompositionResult};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// A subscriber that failed during an isolated fan-out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub observer: String,
    pub error: String,
}

/// Outcome of one fan-out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifyReport {
    /// Number of successful deliveries
    pub delivered: usize,
    /// Failures skipped under `FailurePolicy::Isolate`
    pub failures: Vec<DeliveryFailure>,
}

impl NotifyReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

fn same_allocation<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// Owns a current state and the ordered subscriber list
pub struct Subject<S> {
    id: Uuid,
    config: RegistryConfig,
    subscribers: RwLock<Vec<Arc<dyn Observer<S>>>>,
    state: RwLock<Option<S>>,
}

impl<S> Default for Subject<S> {
    fn default() -> Self {
        Self::with_config(RegistryConfig::default())
    }
}

impl<S> Subject<S> {
    /// Create a subject with no state and no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            config,
            subscribers: RwLock::new(Vec::new()),
            state: RwLock::new(None),
        }
    }

    /// Seed the initial state without notifying anyone
    pub fn with_state(mut self, state: S) -> Self {
        self.state = RwLock::new(Some(state));
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Append `observer` to the subscriber list.
    ///
    /// Returns `false` only when deduplication is enabled and the observer
    /// is already subscribed.
    pub fn subscribe(&self, observer: Arc<dyn Observer<S>>) -> bool {
        let mut subscribers = self.subscribers.write();
        if self.config.deduplicate && subscribers.iter().any(|s| same_allocation(s, &observer)) {
            tracing::debug!(subject = %self.id, observer = observer.label(), "already subscribed");
            return false;
        }
        tracing::debug!(subject = %self.id, observer = observer.label(), "subscribed");
        subscribers.push(observer);
        true
    }

    /// Remove the first subscription of `observer`.
    ///
    /// Returns whether anything was removed; unknown observers are ignored.
    pub fn unsubscribe<O: ?Sized>(&self, observer: &Arc<O>) -> bool {
        let mut subscribers = self.subscribers.write();
        match subscribers.iter().position(|s| same_allocation(s, observer)) {
            Some(index) => {
                let removed = subscribers.remove(index);
                tracing::debug!(subject = %self.id, observer = removed.label(), "unsubscribed");
                true
            }
            None => false,
        }
    }

    pub fn is_subscribed<O: ?Sized>(&self, observer: &Arc<O>) -> bool {
        self.subscribers
            .read()
            .iter()
            .any(|s| same_allocation(s, observer))
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Labels of the current subscribers, in notification order
    pub fn subscriber_labels(&self) -> Vec<String> {
        self.subscribers
            .read()
            .iter()
            .map(|s| s.label().to_string())
            .collect()
    }

    pub fn clear(&self) {
        self.subscribers.write().clear();
    }

    /// Push `message` to every current subscriber, in order
    pub fn notify(&self, message: &S) -> CompositionResult<NotifyReport> {
        let snapshot: Vec<Arc<dyn Observer<S>>> = self.subscribers.read().clone();
        tracing::trace!(subject = %self.id, subscribers = snapshot.len(), "notifying");

        let mut report = NotifyReport::default();
        for observer in snapshot {
            match observer.update(message) {
                Ok(()) => report.delivered += 1,
                Err(source) => {
                    tracing::warn!(
                        subject = %self.id,
                        observer = observer.label(),
                        error = %source,
                        "observer update failed"
                    );
                    match self.config.failure_policy {
                        FailurePolicy::Abort => {
                            return Err(CompositionError::notification_aborted(
                                observer.label(),
                                source,
                            ));
                        }
                        FailurePolicy::Isolate => report.failures.push(DeliveryFailure {
                            observer: observer.label().to_string(),
                            error: source.to_string(),
                        }),
                    }
                }
            }
        }
        Ok(report)
    }
}

impl<S: Clone> Subject<S> {
    /// Current state, if one has been set
    pub fn state(&self) -> Option<S> {
        self.state.read().clone()
    }

    /// Replace the state, then notify every subscriber before returning
    pub fn set_state(&self, new_state: S) -> CompositionResult<NotifyReport> {
        *self.state.write() = Some(new_state.clone());
        tracing::debug!(subject = %self.id, "state changed");
        self.notify(&new_state)
    }
}

impl<S: fmt::Debug> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("subscribers", &self.subscriber_labels())
            .field("state", &*self.state.read())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{FnObserver, RecordingObserver};

    #[test]
    fn test_initial_state_is_absent() {
        let subject: Subject<String> = Subject::new();
        assert_eq!(subject.state(), None);
        assert_eq!(subject.subscriber_count(), 0);

        let seeded = Subject::new().with_state(7);
        assert_eq!(seeded.state(), Some(7));
    }

    #[test]
    fn test_set_state_updates_before_fan_out() {
        let subject = Arc::new(Subject::<u32>::new());
        let seen = Arc::new(parking_lot::Mutex::new(None));

        let watcher = {
            let subject = Arc::downgrade(&subject);
            let seen = Arc::clone(&seen);
            FnObserver::new("watcher", move |_: &u32| {
                *seen.lock() = subject.upgrade().and_then(|s| s.state());
                Ok(())
            })
        };
        subject.subscribe(Arc::new(watcher));
        subject.set_state(42).unwrap();

        assert_eq!(*seen.lock(), Some(42));
    }

    #[test]
    fn test_unsubscribe_removes_first_occurrence_only() {
        let subject: Subject<String> = Subject::new();
        let observer = Arc::new(RecordingObserver::<String>::new("dup"));
        subject.subscribe(observer.clone());
        subject.subscribe(observer.clone());

        assert!(subject.unsubscribe(&observer));
        assert_eq!(subject.subscriber_count(), 1);

        subject.set_state("x".to_string()).unwrap();
        assert_eq!(observer.received_count(), 1);
    }

    #[test]
    fn test_deduplicate_config() {
        let subject: Subject<i32> = Subject::with_config(RegistryConfig {
            deduplicate: true,
            ..RegistryConfig::default()
        });
        let observer = Arc::new(RecordingObserver::<i32>::new("once"));
        assert!(subject.subscribe(observer.clone()));
        assert!(!subject.subscribe(observer.clone()));

        let report = subject.set_state(1).unwrap();
        assert_eq!(report.delivered, 1);
        assert_eq!(observer.received(), vec![1]);
    }
}
