//! # Wrapper Chain
//!
//! A base value is wrapped by decorators, each of which delegates to the value
//! it wraps and adds its own contribution on top. Chains are built once,
//! inside-out, and never edited afterwards; to drop a decorator, build a new
//! chain.
//!
//! ```rust
//! use composition_rs::decorator::*;
//!
//! let coffee = BeverageBuilder::new(BaseKind::Espresso)
//!     .with(Condiment::Milk)
//!     .with(Condiment::Sugar)
//!     .build();
//!
//! assert_eq!(coffee.description(), "Espresso, Milk, Sugar");
//! assert_eq!(coffee.cost(), Price::whole(21));
//! assert_eq!(coffee.cost().to_string(), "$21.00");
//! ```
//!
//! Ownership makes every chain finite and acyclic: each decorator owns the
//! node it wraps, and the base owns nothing.

pub mod beverage;
pub mod builder;
pub mod combatant;
pub mod price;

pub use beverage::*;
pub use builder::*;
pub use combatant::*;
pub use price::Price;

/// Common interface of base beverages and condiment decorators
pub trait Beverage: Send + Sync {
    /// Full description, innermost first
    fn description(&self) -> String;

    /// Total cost of this node and everything it wraps
    fn cost(&self) -> Price;

    /// Number of decorators between this node and the base
    fn depth(&self) -> usize {
        0
    }
}

impl<B: Beverage + ?Sized> Beverage for Box<B> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn cost(&self) -> Price {
        (**self).cost()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}
