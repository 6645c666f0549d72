//! Game characters gaining abilities through decoration.
//!
//! Unlike condiments, abilities are not purely additive: `DoubleDamage`
//! multiplies whatever the wrapped chain deals, so wrap order matters for the
//! damage total as well as for the description.

use serde::{Deserialize, Serialize};

const ABILITY_SEPARATOR: &str = " with ";

pub trait Combatant: Send + Sync {
    fn description(&self) -> String;
    fn damage(&self) -> u32;
}

impl<C: Combatant + ?Sized> Combatant for Box<C> {
    fn description(&self) -> String {
        (**self).description()
    }

    fn damage(&self) -> u32 {
        (**self).damage()
    }
}

/// Unadorned character dealing base damage
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicCharacter;

impl BasicCharacter {
    pub const BASE_DAMAGE: u32 = 10;
}

impl Combatant for BasicCharacter {
    fn description(&self) -> String {
        "Basic Character".to_string()
    }

    fn damage(&self) -> u32 {
        Self::BASE_DAMAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ability {
    DoubleDamage,
    Fireball,
    Invisibility,
}

impl Ability {
    pub fn label(&self) -> &'static str {
        match self {
            Ability::DoubleDamage => "Double Damage",
            Ability::Fireball => "Fireball",
            Ability::Invisibility => "Invisibility",
        }
    }

    /// Damage after this ability is applied to `inner` damage
    pub fn apply(&self, inner: u32) -> u32 {
        match self {
            Ability::DoubleDamage => inner.saturating_mul(2),
            Ability::Fireball => inner.saturating_add(20),
            Ability::Invisibility => inner,
        }
    }
}

pub struct AbilityDecorator {
    wrapped: Box<dyn Combatant>,
    ability: Ability,
}

impl AbilityDecorator {
    pub fn wrap(inner: impl Combatant + 'static, ability: Ability) -> Self {
        Self {
            wrapped: Box::new(inner),
            ability,
        }
    }

    pub fn ability(&self) -> Ability {
        self.ability
    }
}

impl Combatant for AbilityDecorator {
    fn description(&self) -> String {
        format!(
            "{}{}{}",
            self.wrapped.description(),
            ABILITY_SEPARATOR,
            self.ability.label()
        )
    }

    fn damage(&self) -> u32 {
        self.ability.apply(self.wrapped.damage())
    }
}

/// Apply `abilities` to `base` in order, innermost first
pub fn equip(
    base: impl Combatant + 'static,
    abilities: impl IntoIterator<Item = Ability>,
) -> Box<dyn Combatant> {
    abilities
        .into_iter()
        .fold(Box::new(base) as Box<dyn Combatant>, |inner, ability| {
            Box::new(AbilityDecorator::wrap(inner, ability))
        })
}
