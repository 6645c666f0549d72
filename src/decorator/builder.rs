//! Fluent chain construction and JSON orders

use super::{BaseBeverage, BaseKind, Beverage, Condiment, CondimentDecorator};
use crate::config::ChainConfig;
use crate::error::CompositionResult;
use serde::{Deserialize, Serialize};

/// Builds a chain inside-out: the first condiment added is the innermost
pub struct BeverageBuilder {
    inner: Box<dyn Beverage>,
    config: ChainConfig,
}

impl BeverageBuilder {
    pub fn new(base: impl Into<BaseBeverage>) -> Self {
        Self::from_beverage(base.into())
    }

    /// Start from any existing node, including an already decorated one
    pub fn from_beverage(beverage: impl Beverage + 'static) -> Self {
        Self {
            inner: Box::new(beverage),
            config: ChainConfig::default(),
        }
    }

    /// Use `config` for every decorator added after this call
    pub fn with_config(mut self, config: ChainConfig) -> Self {
        self.config = config;
        self
    }

    /// Wrap the current chain with `condiment`
    pub fn with(self, condiment: Condiment) -> Self {
        tracing::trace!(condiment = %condiment, depth = self.inner.depth(), "wrapping beverage");
        let decorated =
            CondimentDecorator::wrap_boxed(self.inner, condiment, &self.config.separator);
        Self {
            inner: Box::new(decorated),
            config: self.config,
        }
    }

    pub fn with_all(self, condiments: impl IntoIterator<Item = Condiment>) -> Self {
        condiments
            .into_iter()
            .fold(self, |builder, condiment| builder.with(condiment))
    }

    /// Finish the chain
    pub fn build(self) -> Box<dyn Beverage> {
        self.inner
    }
}

/// A drink order as it arrives over the counter, e.g.
/// `{"base": "espresso", "condiments": ["milk", "sugar"]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageOrder {
    pub base: BaseKind,
    #[serde(default)]
    pub condiments: Vec<Condiment>,
}

impl BeverageOrder {
    /// Parse an order. Custom surcharges are whole cents; a negative or
    /// fractional value is a `Serialization` error.
    pub fn from_json_str(json: &str) -> CompositionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_beverage(self, config: &ChainConfig) -> Box<dyn Beverage> {
        BeverageBuilder::new(self.base)
            .with_config(config.clone())
            .with_all(self.condiments)
            .build()
    }
}
