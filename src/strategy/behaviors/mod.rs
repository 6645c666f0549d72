//! Capability traits and the stock behaviors that implement them.
//!
//! A behavior is a stateless value implementing exactly one capability. Hosts
//! hold behaviors as `Arc<dyn _>` so one behavior can be shared by any number
//! of hosts and swapped out without touching the host's type.

pub mod fly;
pub mod quack;
pub mod weapon;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub use fly::*;
pub use quack::*;
pub use weapon::*;

/// Named capability attachment point on a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Fly,
    Quack,
    Weapon,
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Slot::Fly => "fly",
            Slot::Quack => "quack",
            Slot::Weapon => "weapon",
        };
        f.write_str(name)
    }
}

/// Outcome of performing a slot's action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effect {
    pub slot: Slot,
    pub description: String,
}

impl Effect {
    pub fn new(slot: Slot, description: impl Into<String>) -> Self {
        Self {
            slot,
            description: description.into(),
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Capability: produce a flight effect
pub trait FlyBehavior: Send + Sync {
    fn fly(&self) -> Effect;
}

/// Capability: produce a sound effect
pub trait QuackBehavior: Send + Sync {
    fn quack(&self) -> Effect;
}

/// Capability: produce an attack effect
pub trait WeaponBehavior: Send + Sync {
    fn use_weapon(&self) -> Effect;
}

// === Closure-backed behaviors ===

/// Wraps a closure so it can fill any capability slot.
///
/// ```rust
/// use composition_rs::strategy::{fly_behavior, FnBehavior, FlyBehavior};
///
/// let glide = fly_behavior(FnBehavior::new(|| "I'm gliding".to_string()));
/// assert_eq!(glide.fly().description, "I'm gliding");
/// ```
pub struct FnBehavior<F> {
    pub func: F,
}

impl<F> FnBehavior<F> {
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> FlyBehavior for FnBehavior<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn fly(&self) -> Effect {
        Effect::new(Slot::Fly, (self.func)())
    }
}

impl<F> QuackBehavior for FnBehavior<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn quack(&self) -> Effect {
        Effect::new(Slot::Quack, (self.func)())
    }
}

impl<F> WeaponBehavior for FnBehavior<F>
where
    F: Fn() -> String + Send + Sync,
{
    fn use_weapon(&self) -> Effect {
        Effect::new(Slot::Weapon, (self.func)())
    }
}

// === Arc sharing helpers ===

/// Share any `FlyBehavior` as `Arc<dyn FlyBehavior>`
pub fn fly_behavior<T: FlyBehavior + 'static>(behavior: T) -> Arc<dyn FlyBehavior> {
    Arc::new(behavior)
}

/// Share any `QuackBehavior` as `Arc<dyn QuackBehavior>`
pub fn quack_behavior<T: QuackBehavior + 'static>(behavior: T) -> Arc<dyn QuackBehavior> {
    Arc::new(behavior)
}

/// Share any `WeaponBehavior` as `Arc<dyn WeaponBehavior>`
pub fn weapon_behavior<T: WeaponBehavior + 'static>(behavior: T) -> Arc<dyn WeaponBehavior> {
    Arc::new(behavior)
}
