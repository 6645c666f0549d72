//! Ready-made subscribers

use super::{Observer, ObserverResult};
use parking_lot::Mutex;
use std::fmt;

/// Keeps every state it receives, oldest first
pub struct RecordingObserver<S> {
    label: String,
    received: Mutex<Vec<S>>,
}

impl<S: Clone> RecordingObserver<S> {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<S> {
        self.received.lock().clone()
    }

    pub fn last_received(&self) -> Option<S> {
        self.received.lock().last().cloned()
    }

    pub fn received_count(&self) -> usize {
        self.received.lock().len()
    }
}

impl<S: Clone + Send + Sync> Observer<S> for RecordingObserver<S> {
    fn label(&self) -> &str {
        &self.label
    }

    fn update(&self, state: &S) -> ObserverResult {
        self.received.lock().push(state.clone());
        Ok(())
    }
}

/// Prints `<label> received: <state>` to stdout
pub struct ConsoleObserver {
    label: String,
    last_line: Mutex<Option<String>>,
}

impl ConsoleObserver {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            last_line: Mutex::new(None),
        }
    }

    /// The last line this observer printed
    pub fn last_line(&self) -> Option<String> {
        self.last_line.lock().clone()
    }
}

impl<S: fmt::Display> Observer<S> for ConsoleObserver {
    fn label(&self) -> &str {
        &self.label
    }

    fn update(&self, state: &S) -> ObserverResult {
        let line = format!("{} received: {}", self.label, state);
        println!("{}", line);
        *self.last_line.lock() = Some(line);
        Ok(())
    }
}

/// Turns a closure into a subscriber
pub struct FnObserver<F> {
    label: String,
    func: F,
}

impl<F> FnObserver<F> {
    pub fn new<S>(label: impl Into<String>, func: F) -> Self
    where
        F: Fn(&S) -> ObserverResult + Send + Sync,
    {
        Self {
            label: label.into(),
            func,
        }
    }
}

impl<S, F> Observer<S> for FnObserver<F>
where
    F: Fn(&S) -> ObserverResult + Send + Sync,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn update(&self, state: &S) -> ObserverResult {
        (self.func)(state)
    }
}
