//! # Behavior Delegate
//!
//! Hosts delegate each capability to a behavior object held in a named slot.
//! The behavior is looked up at call time, so replacing a slot's behavior
//! takes effect on the very next call.
//!
//! ```rust
//! use composition_rs::strategy::*;
//!
//! let mut duck = Duck::model();
//! assert_eq!(duck.perform_fly().description, "I'm flying!!");
//!
//! duck.set_fly_behavior(fly_behavior(FlyRocketPowered));
//! assert_eq!(duck.perform_fly().description, "I'm flying with a rocket!");
//! ```
//!
//! Default behaviors are a property of the host's kind ([`DuckKind`],
//! [`CharacterKind`]), not of the host type itself.

pub mod behaviors;
pub mod builder;
pub mod character;
pub mod duck;

pub use behaviors::*;
pub use builder::*;
pub use character::*;
pub use duck::*;

use crate::error::CompositionResult;

/// Something that can introduce itself
pub trait Identity {
    fn display(&self) -> String;
}

/// A host entity exposing slot-addressed actions
pub trait Host: Identity {
    /// Slots this host carries, in a stable order
    fn slots(&self) -> &'static [Slot];

    /// Perform the action of `slot` with the behavior attached right now.
    ///
    /// Fails with `InvalidState` if the host has no such slot.
    fn perform(&self, slot: Slot) -> CompositionResult<Effect>;

    /// Perform every slot in order
    fn perform_all(&self) -> CompositionResult<Vec<Effect>> {
        self.slots().iter().map(|slot| self.perform(*slot)).collect()
    }
}
