//! # Notification Registry
//!
//! A [`Subject`] keeps an ordered list of subscribers and pushes every state
//! change to them synchronously, in subscription order, before `set_state`
//! returns.
//!
//! ```rust
//! use composition_rs::observer::*;
//! use std::sync::Arc;
//!
//! let subject: Subject<String> = Subject::new();
//! let first = Arc::new(RecordingObserver::<String>::new("Observer 1"));
//! let second = Arc::new(RecordingObserver::<String>::new("Observer 2"));
//! subject.subscribe(first.clone());
//! subject.subscribe(second.clone());
//!
//! subject.set_state("New State 1".to_string())?;
//! assert_eq!(first.last_received().as_deref(), Some("New State 1"));
//! assert_eq!(second.last_received().as_deref(), Some("New State 1"));
//! # Ok::<(), composition_rs::CompositionError>(())
//! ```
//!
//! ## Fan-out semantics
//!
//! - Each fan-out iterates a snapshot of the subscriber list taken when it
//!   starts. Subscribers may subscribe or unsubscribe (themselves or others)
//!   from inside `update`; the change applies from the next fan-out on.
//! - A failing subscriber either aborts the fan-out or is skipped and
//!   reported, depending on [`FailurePolicy`](crate::config::FailurePolicy).
//! - Duplicate subscriptions are delivered twice unless the registry is
//!   configured to deduplicate.

pub mod observers;
pub mod subject;
pub mod weather;

pub use observers::*;
pub use subject::*;
pub use weather::*;

use crate::error::BoxError;

/// Result of a single subscriber update
pub type ObserverResult = Result<(), BoxError>;

/// Receives pushed state from a [`Subject`]
pub trait Observer<S>: Send + Sync {
    /// Identifying label, used in logs and failure reports
    fn label(&self) -> &str;

    fn update(&self, state: &S) -> ObserverResult;
}
