//! # composition-rs
//!
//! Three independent object-composition mechanisms, each expressed with traits
//! and ownership instead of class hierarchies:
//!
//! - **Behavior Delegate** ([`strategy`]): hosts hold swappable behaviors in
//!   named slots and delegate to whatever is attached at call time.
//! - **Wrapper Chain** ([`decorator`]): decorators wrap a base value and add
//!   their own contribution to a description and a cost.
//! - **Notification Registry** ([`observer`]): a subject pushes each state
//!   change to its subscribers, synchronously and in subscription order.
//! - **Object Adapter** ([`adapter`]): a client interface placed in front of
//!   players whose native methods don't match it.
//!
//! The mechanisms do not depend on one another. Shared concerns live in
//! [`error`] and [`config`].
//!
//! ## Example
//!
//! ```rust
//! use composition_rs::prelude::*;
//! use std::sync::Arc;
//!
//! // Behavior Delegate
//! let mut knight = Character::knight();
//! knight.set_weapon(weapon_behavior(BowAndArrow));
//! assert_eq!(knight.attack().description, "Shooting an arrow with a bow");
//!
//! // Wrapper Chain
//! let coffee = BeverageBuilder::new(BaseKind::Espresso)
//!     .with(Condiment::Milk)
//!     .with(Condiment::Sugar)
//!     .build();
//! assert_eq!(coffee.cost(), Price::whole(21));
//!
//! // Notification Registry
//! let subject: Subject<String> = Subject::new();
//! let observer = Arc::new(RecordingObserver::<String>::new("Observer 1"));
//! subject.subscribe(observer.clone());
//! subject.set_state("S1".to_string())?;
//! assert_eq!(observer.last_received().as_deref(), Some("S1"));
//! # Ok::<(), CompositionError>(())
//! ```

// ============================================================================
// MODULES
// ============================================================================

pub mod adapter;
pub mod config;
pub mod decorator;
pub mod error;
pub mod observer;
pub mod strategy;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use config::{ChainConfig, CompositionConfig, FailurePolicy, RegistryConfig};
pub use error::{BoxError, CompositionError, CompositionResult};

/// Convenient re-exports for common types and traits
pub mod prelude {
    pub use crate::config::{ChainConfig, CompositionConfig, FailurePolicy, RegistryConfig};
    pub use crate::error::{CompositionError, CompositionResult};

    pub use crate::strategy::{
        fly_behavior, quack_behavior, weapon_behavior, Axe, BowAndArrow, Character,
        CharacterBuilder, CharacterKind, Duck, DuckBuilder, DuckKind, Effect, FakeQuack,
        FlyBehavior, FlyNoWay, FlyRocketPowered, FlyWithWings, FnBehavior, Host, Identity, Knife,
        MuteQuack, Quack, QuackBehavior, Slot, Squeak, Sword, WeaponBehavior,
    };

    pub use crate::decorator::{
        Ability, AbilityDecorator, BaseBeverage, BaseKind, BasicCharacter, Beverage,
        BeverageBuilder, BeverageOrder, Combatant, Condiment, CondimentDecorator, Price,
    };

    pub use crate::observer::{
        ConsoleObserver, FnObserver, NotifyReport, Observer, ObserverResult, RecordingObserver,
        Subject, WeatherData, WeatherStation,
    };

    pub use crate::adapter::{AudioPlayer, MediaAdapter, MediaFormat, MediaPlayer};
}

// ============================================================================
// INTEGRATION TESTS
// ============================================================================
