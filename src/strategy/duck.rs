//! Ducks: hosts with a fly slot and a quack slot

use super::{
    fly_behavior, quack_behavior, Effect, FlyBehavior, FlyNoWay, FlyWithWings, Host, Identity,
    MuteQuack, Quack, QuackBehavior, Slot, Squeak,
};
use crate::error::{CompositionError, CompositionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// The kinds of duck the simulator knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckKind {
    Mallard,
    Redhead,
    Rubber,
    Model,
    Decoy,
}

impl DuckKind {
    pub const ALL: [DuckKind; 5] = [
        DuckKind::Mallard,
        DuckKind::Redhead,
        DuckKind::Rubber,
        DuckKind::Model,
        DuckKind::Decoy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DuckKind::Mallard => "mallard",
            DuckKind::Redhead => "redhead",
            DuckKind::Rubber => "rubber",
            DuckKind::Model => "model",
            DuckKind::Decoy => "decoy",
        }
    }

    /// Flight behavior a freshly built duck of this kind starts with
    pub fn default_fly(&self) -> Arc<dyn FlyBehavior> {
        match self {
            DuckKind::Mallard | DuckKind::Redhead | DuckKind::Model => fly_behavior(FlyWithWings),
            DuckKind::Rubber | DuckKind::Decoy => fly_behavior(FlyNoWay),
        }
    }

    /// Sound behavior a freshly built duck of this kind starts with
    pub fn default_quack(&self) -> Arc<dyn QuackBehavior> {
        match self {
            DuckKind::Mallard | DuckKind::Redhead => quack_behavior(Quack),
            DuckKind::Rubber => quack_behavior(Squeak),
            DuckKind::Model | DuckKind::Decoy => quack_behavior(MuteQuack),
        }
    }
}

impl fmt::Display for DuckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Identity for DuckKind {
    fn display(&self) -> String {
        match self {
            DuckKind::Mallard => "I'm a real Mallard duck",
            DuckKind::Redhead => "I'm a real Redhead duck",
            DuckKind::Rubber => "I'm a rubber duckie",
            DuckKind::Model => "I'm a model duck",
            DuckKind::Decoy => "I'm a duck decoy",
        }
        .to_string()
    }
}

/// A duck delegating flying and quacking to swappable behaviors
pub struct Duck {
    kind: DuckKind,
    fly_behavior: Arc<dyn FlyBehavior>,
    quack_behavior: Arc<dyn QuackBehavior>,
}

impl Duck {
    /// Create a duck of `kind` with that kind's default behaviors
    pub fn new(kind: DuckKind) -> Self {
        Self::with_behaviors(kind, kind.default_fly(), kind.default_quack())
    }

    /// Create a duck with explicit behaviors
    pub fn with_behaviors(
        kind: DuckKind,
        fly_behavior: Arc<dyn FlyBehavior>,
        quack_behavior: Arc<dyn QuackBehavior>,
    ) -> Self {
        Self {
            kind,
            fly_behavior,
            quack_behavior,
        }
    }

    pub fn mallard() -> Self {
        Self::new(DuckKind::Mallard)
    }

    pub fn redhead() -> Self {
        Self::new(DuckKind::Redhead)
    }

    pub fn rubber() -> Self {
        Self::new(DuckKind::Rubber)
    }

    pub fn model() -> Self {
        Self::new(DuckKind::Model)
    }

    pub fn decoy() -> Self {
        Self::new(DuckKind::Decoy)
    }

    pub fn kind(&self) -> DuckKind {
        self.kind
    }

    /// Shared handle to the current flight behavior
    pub fn fly_behavior(&self) -> Arc<dyn FlyBehavior> {
        Arc::clone(&self.fly_behavior)
    }

    /// Shared handle to the current sound behavior
    pub fn quack_behavior(&self) -> Arc<dyn QuackBehavior> {
        Arc::clone(&self.quack_behavior)
    }

    pub fn perform_fly(&self) -> Effect {
        self.fly_behavior.fly()
    }

    pub fn perform_quack(&self) -> Effect {
        self.quack_behavior.quack()
    }

    /// Replace the flight behavior; the next `perform_fly` uses it
    pub fn set_fly_behavior(&mut self, behavior: Arc<dyn FlyBehavior>) {
        tracing::debug!(duck = %self.kind, slot = %Slot::Fly, "attaching behavior");
        self.fly_behavior = behavior;
    }

    /// Replace the sound behavior; the next `perform_quack` uses it
    pub fn set_quack_behavior(&mut self, behavior: Arc<dyn QuackBehavior>) {
        tracing::debug!(duck = %self.kind, slot = %Slot::Quack, "attaching behavior");
        self.quack_behavior = behavior;
    }

    pub fn swim(&self) -> &'static str {
        "All ducks float, even decoys!"
    }
}

impl fmt::Debug for Duck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Duck")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Identity for Duck {
    fn display(&self) -> String {
        self.kind.display()
    }
}

impl Host for Duck {
    fn slots(&self) -> &'static [Slot] {
        &[Slot::Quack, Slot::Fly]
    }

    fn perform(&self, slot: Slot) -> CompositionResult<Effect> {
        match slot {
            Slot::Fly => Ok(self.perform_fly()),
            Slot::Quack => Ok(self.perform_quack()),
            Slot::Weapon => Err(CompositionError::invalid_state(format!(
                "{} duck has no {} slot",
                self.kind, slot
            ))),
        }
    }
}
