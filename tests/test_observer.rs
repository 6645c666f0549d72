use composition_rs::prelude::*;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};

fn three_observers(subject: &Subject<String>) -> Vec<Arc<RecordingObserver<String>>> {
    (1..=3)
        .map(|i| {
            let observer = Arc::new(RecordingObserver::<String>::new(format!("Observer {i}")));
            subject.subscribe(observer.clone());
            observer
        })
        .collect()
}

// ------------------------------------
// 1. Fan-out order and exactly-once delivery
// ------------------------------------
#[test]
fn test_notification_order_and_fan_out() {
    let subject: Subject<String> = Subject::new();
    let order = Arc::new(Mutex::new(Vec::new()));

    for label in ["O1", "O2", "O3"] {
        let order = Arc::clone(&order);
        subject.subscribe(Arc::new(FnObserver::new(label, move |state: &String| {
            order.lock().push(format!("{label}:{state}"));
            Ok(())
        })));
    }

    let report = subject.set_state("X".to_string()).unwrap();
    assert_eq!(report.delivered, 3);
    assert!(report.is_clean());
    assert_eq!(*order.lock(), vec!["O1:X", "O2:X", "O3:X"]);
}

#[test]
fn test_every_observer_sees_latest_state() {
    let subject: Subject<String> = Subject::new();
    let observers = three_observers(&subject);

    subject.set_state("S1".to_string()).unwrap();
    for observer in &observers {
        assert_eq!(observer.last_received().as_deref(), Some("S1"));
        assert_eq!(observer.received_count(), 1);
    }
    assert_eq!(subject.state().as_deref(), Some("S1"));
}

#[test]
fn test_notify_does_not_touch_state() {
    let subject: Subject<String> = Subject::new();
    let observers = three_observers(&subject);

    subject.notify(&"broadcast".to_string()).unwrap();
    assert_eq!(subject.state(), None);
    assert_eq!(observers[2].last_received().as_deref(), Some("broadcast"));
}

// ------------------------------------
// 2. Unsubscribe
// ------------------------------------
#[test]
fn test_unsubscribe_unknown_observer_is_noop() {
    let subject: Subject<String> = Subject::new();
    let _observers = three_observers(&subject);
    let stranger = Arc::new(RecordingObserver::<String>::new("stranger"));

    let before = subject.subscriber_labels();
    assert!(!subject.unsubscribe(&stranger));
    assert_eq!(subject.subscriber_labels(), before);
}

#[test]
fn test_unsubscribed_observer_misses_later_states() {
    let subject: Subject<String> = Subject::new();
    let observers = three_observers(&subject);

    subject.set_state("first".to_string()).unwrap();
    assert!(subject.unsubscribe(&observers[1]));
    subject.set_state("second".to_string()).unwrap();

    assert_eq!(observers[0].received(), vec!["first", "second"]);
    assert_eq!(observers[1].received(), vec!["first"]);
    assert_eq!(subject.subscriber_labels(), vec!["Observer 1", "Observer 3"]);
}

#[test]
fn test_clear_drops_every_subscriber() {
    let subject: Subject<String> = Subject::new();
    let observers = three_observers(&subject);

    subject.clear();
    assert_eq!(subject.subscriber_count(), 0);
    assert!(!subject.is_subscribed(&observers[0]));

    let report = subject.set_state("after".to_string()).unwrap();
    assert_eq!(report.delivered, 0);
    assert_eq!(subject.state().as_deref(), Some("after"));
    assert!(observers.iter().all(|observer| observer.received_count() == 0));
}

#[test]
fn test_duplicate_subscription_delivers_twice() {
    let subject: Subject<String> = Subject::new();
    let observer = Arc::new(RecordingObserver::<String>::new("twice"));
    subject.subscribe(observer.clone());
    subject.subscribe(observer.clone());

    let report = subject.set_state("S".to_string()).unwrap();
    assert_eq!(report.delivered, 2);
    assert_eq!(observer.received_count(), 2);
}

// ------------------------------------
// 3. Mutation during fan-out works on a snapshot
// ------------------------------------
struct OneShot {
    subject: Weak<Subject<String>>,
    me: Mutex<Weak<OneShot>>,
    seen: Mutex<Vec<String>>,
}

impl Observer<String> for OneShot {
    fn label(&self) -> &str {
        "one-shot"
    }

    fn update(&self, state: &String) -> ObserverResult {
        self.seen.lock().push(state.clone());
        if let (Some(subject), Some(me)) = (self.subject.upgrade(), self.me.lock().upgrade()) {
            subject.unsubscribe(&me);
        }
        Ok(())
    }
}

#[test]
fn test_self_unsubscribe_during_fan_out() {
    let subject = Arc::new(Subject::<String>::new());
    let before = Arc::new(RecordingObserver::<String>::new("before"));
    let one_shot = Arc::new(OneShot {
        subject: Arc::downgrade(&subject),
        me: Mutex::new(Weak::new()),
        seen: Mutex::new(Vec::new()),
    });
    *one_shot.me.lock() = Arc::downgrade(&one_shot);
    let after = Arc::new(RecordingObserver::<String>::new("after"));

    subject.subscribe(before.clone());
    subject.subscribe(one_shot.clone());
    subject.subscribe(after.clone());

    subject.set_state("1".to_string()).unwrap();
    // the observer after the one-shot still gets the state that was in flight
    assert_eq!(after.received(), vec!["1"]);
    assert_eq!(subject.subscriber_count(), 2);

    subject.set_state("2".to_string()).unwrap();
    assert_eq!(*one_shot.seen.lock(), vec!["1"]);
    assert_eq!(before.received(), vec!["1", "2"]);
    assert_eq!(after.received(), vec!["1", "2"]);
}

#[test]
fn test_subscribe_during_fan_out_applies_next_time() {
    let subject = Arc::new(Subject::<String>::new());
    let late = Arc::new(RecordingObserver::<String>::new("late"));

    let recruiter = {
        let subject = Arc::downgrade(&subject);
        let late = Arc::clone(&late);
        FnObserver::new("recruiter", move |_: &String| {
            if let Some(subject) = subject.upgrade() {
                if !subject.is_subscribed(&late) {
                    subject.subscribe(late.clone());
                }
            }
            Ok(())
        })
    };
    subject.subscribe(Arc::new(recruiter));

    subject.set_state("a".to_string()).unwrap();
    assert_eq!(late.received_count(), 0);

    subject.set_state("b".to_string()).unwrap();
    assert_eq!(late.received(), vec!["b"]);
}

// ------------------------------------
// 4. Failing subscribers
// ------------------------------------
fn failing(label: &'static str) -> Arc<dyn Observer<String>> {
    Arc::new(FnObserver::new(label, |_: &String| Err("display offline".into())))
}

#[test]
fn test_abort_policy_stops_fan_out() {
    let subject: Subject<String> = Subject::new();
    let first = Arc::new(RecordingObserver::<String>::new("first"));
    let last = Arc::new(RecordingObserver::<String>::new("last"));
    subject.subscribe(first.clone());
    subject.subscribe(failing("broken"));
    subject.subscribe(last.clone());

    let result = subject.set_state("S".to_string());
    match result {
        Err(CompositionError::NotificationAborted { observer, source }) => {
            assert_eq!(observer, "broken");
            assert_eq!(source.to_string(), "display offline");
        }
        other => panic!("Expected aborted notification, got {:?}", other),
    }

    // state was already replaced before the fan-out started
    assert_eq!(subject.state().as_deref(), Some("S"));
    assert_eq!(first.received_count(), 1);
    assert_eq!(last.received_count(), 0);
}

#[test]
fn test_isolate_policy_reports_and_continues() {
    let subject: Subject<String> = Subject::with_config(RegistryConfig {
        failure_policy: FailurePolicy::Isolate,
        ..RegistryConfig::default()
    });
    let last = Arc::new(RecordingObserver::<String>::new("last"));
    subject.subscribe(failing("broken"));
    subject.subscribe(last.clone());

    let report = subject.set_state("S".to_string()).unwrap();
    assert_eq!(report.delivered, 1);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].observer, "broken");
    assert_eq!(report.failures[0].error, "display offline");
    assert_eq!(last.received(), vec!["S"]);
}
