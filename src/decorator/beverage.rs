//! Base beverages and condiment decorators

use super::{Beverage, Price};
use crate::config::{ChainConfig, DEFAULT_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stock coffees on the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    Espresso,
    HouseBlend,
    DarkRoast,
    Decaf,
}

impl BaseKind {
    pub fn name(&self) -> &'static str {
        match self {
            BaseKind::Espresso => "Espresso",
            BaseKind::HouseBlend => "House Blend Coffee",
            BaseKind::DarkRoast => "Dark Roast Coffee",
            BaseKind::Decaf => "Decaf Coffee",
        }
    }

    pub fn cost(&self) -> Price {
        match self {
            BaseKind::Espresso => Price::whole(10),
            BaseKind::HouseBlend => Price::whole(8),
            BaseKind::DarkRoast => Price::whole(9),
            BaseKind::Decaf => Price::whole(7),
        }
    }
}

/// Innermost node of a chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseBeverage {
    name: String,
    cost: Price,
}

impl BaseBeverage {
    pub fn new(name: impl Into<String>, cost: Price) -> Self {
        Self {
            name: name.into(),
            cost,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl From<BaseKind> for BaseBeverage {
    fn from(kind: BaseKind) -> Self {
        Self {
            name: kind.name().to_string(),
            cost: kind.cost(),
        }
    }
}

impl Beverage for BaseBeverage {
    fn description(&self) -> String {
        self.name.clone()
    }

    fn cost(&self) -> Price {
        self.cost
    }
}

/// Add-ons that can wrap a beverage.
///
/// A custom surcharge is given in cents on the wire, e.g.
/// `{"custom": {"label": "Caramel", "surcharge": 250}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condiment {
    Milk,
    Sugar,
    Mocha,
    Soy,
    Whip,
    Custom { label: String, surcharge: Price },
}

impl Condiment {
    pub fn custom(label: impl Into<String>, surcharge: Price) -> Self {
        Condiment::Custom {
            label: label.into(),
            surcharge,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Condiment::Milk => "Milk",
            Condiment::Sugar => "Sugar",
            Condiment::Mocha => "Mocha",
            Condiment::Soy => "Soy",
            Condiment::Whip => "Whip",
            Condiment::Custom { label, .. } => label.as_str(),
        }
    }

    pub fn surcharge(&self) -> Price {
        match self {
            Condiment::Milk => Price::whole(5),
            Condiment::Sugar => Price::whole(6),
            Condiment::Mocha => Price::whole(2),
            Condiment::Soy => Price::whole(3),
            Condiment::Whip => Price::whole(1),
            Condiment::Custom { surcharge, .. } => *surcharge,
        }
    }
}

impl fmt::Display for Condiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wraps a beverage with one condiment
pub struct CondimentDecorator {
    wrapped: Box<dyn Beverage>,
    condiment: Condiment,
    separator: String,
}

impl CondimentDecorator {
    /// Wrap `inner` using the default separator
    pub fn wrap(inner: impl Beverage + 'static, condiment: Condiment) -> Self {
        Self::wrap_boxed(Box::new(inner), condiment, DEFAULT_SEPARATOR)
    }

    /// Wrap `inner` using the separator from `config`
    pub fn wrap_with(
        inner: impl Beverage + 'static,
        condiment: Condiment,
        config: &ChainConfig,
    ) -> Self {
        Self::wrap_boxed(Box::new(inner), condiment, &config.separator)
    }

    pub(crate) fn wrap_boxed(
        wrapped: Box<dyn Beverage>,
        condiment: Condiment,
        separator: &str,
    ) -> Self {
        Self {
            wrapped,
            condiment,
            separator: separator.to_string(),
        }
    }

    pub fn condiment(&self) -> &Condiment {
        &self.condiment
    }

    /// The node this decorator wraps
    pub fn inner(&self) -> &dyn Beverage {
        &*self.wrapped
    }
}

impl Beverage for CondimentDecorator {
    fn description(&self) -> String {
        format!(
            "{}{}{}",
            self.wrapped.description(),
            self.separator,
            self.condiment.label()
        )
    }

    fn cost(&self) -> Price {
        self.wrapped.cost() + self.condiment.surcharge()
    }

    fn depth(&self) -> usize {
        self.wrapped.depth() + 1
    }
}
