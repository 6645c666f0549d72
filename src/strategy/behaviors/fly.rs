//! Flight behaviors

use super::{Effect, FlyBehavior, Slot};

/// Flaps real wings
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyWithWings;

impl FlyBehavior for FlyWithWings {
    fn fly(&self) -> Effect {
        Effect::new(Slot::Fly, "I'm flying!!")
    }
}

/// Grounded
#[derive(Debug, Default, Clone, Copy)]
pub struct FlyNoWay;

impl FlyBehavior for FlyNoWay {
    fn fly(&self) -> Effect {
        Effect::new(Slot::Fly, "I can't fly")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FlyRocketPowered;

impl FlyBehavior for FlyRocketPowered {
    fn fly(&self) -> Effect {
        Effect::new(Slot::Fly, "I'm flying with a rocket!")
    }
}
