//! Sound behaviors

use super::{Effect, QuackBehavior, Slot};

#[derive(Debug, Default, Clone, Copy)]
pub struct Quack;

impl QuackBehavior for Quack {
    fn quack(&self) -> Effect {
        Effect::new(Slot::Quack, "Quack")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Squeak;

impl QuackBehavior for Squeak {
    fn quack(&self) -> Effect {
        Effect::new(Slot::Quack, "Squeak")
    }
}

/// Makes no sound at all
#[derive(Debug, Default, Clone, Copy)]
pub struct MuteQuack;

impl QuackBehavior for MuteQuack {
    fn quack(&self) -> Effect {
        Effect::new(Slot::Quack, "<< Silence >>")
    }
}

/// Duck call used by hunters; sounds like a quack but isn't one
#[derive(Debug, Default, Clone, Copy)]
pub struct FakeQuack;

impl QuackBehavior for FakeQuack {
    fn quack(&self) -> Effect {
        Effect::new(Slot::Quack, "Qwak")
    }
}
