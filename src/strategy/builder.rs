//! Fluent construction of hosts with explicit behaviors

use super::{Character, CharacterKind, Duck, DuckKind, FlyBehavior, QuackBehavior, WeaponBehavior};
use crate::error::{CompositionError, CompositionResult};
use std::sync::Arc;

/// Builds a [`Duck`], letting the caller override any slot
pub struct DuckBuilder {
    kind: DuckKind,
    fly_behavior: Option<Arc<dyn FlyBehavior>>,
    quack_behavior: Option<Arc<dyn QuackBehavior>>,
}

impl DuckBuilder {
    pub fn new(kind: DuckKind) -> Self {
        Self {
            kind,
            fly_behavior: None,
            quack_behavior: None,
        }
    }

    pub fn with_fly<T: FlyBehavior + 'static>(mut self, behavior: T) -> Self {
        self.fly_behavior = Some(Arc::new(behavior));
        self
    }

    /// Set the flight behavior (Arc version)
    pub fn with_fly_arc(mut self, behavior: Arc<dyn FlyBehavior>) -> Self {
        self.fly_behavior = Some(behavior);
        self
    }

    pub fn with_quack<T: QuackBehavior + 'static>(mut self, behavior: T) -> Self {
        self.quack_behavior = Some(Arc::new(behavior));
        self
    }

    /// Set the sound behavior (Arc version)
    pub fn with_quack_arc(mut self, behavior: Arc<dyn QuackBehavior>) -> Self {
        self.quack_behavior = Some(behavior);
        self
    }

    /// Build the duck, filling unset slots with the kind's defaults
    pub fn build(self) -> Duck {
        let kind = self.kind;
        Duck::with_behaviors(
            kind,
            self.fly_behavior.unwrap_or_else(|| kind.default_fly()),
            self.quack_behavior.unwrap_or_else(|| kind.default_quack()),
        )
    }

    /// Build the duck, failing if any slot was left unset
    pub fn build_strict(self) -> CompositionResult<Duck> {
        let kind = self.kind;
        Ok(Duck::with_behaviors(
            kind,
            self.fly_behavior.ok_or_else(|| {
                CompositionError::invalid_state(format!("{kind} duck built without a fly behavior"))
            })?,
            self.quack_behavior.ok_or_else(|| {
                CompositionError::invalid_state(format!(
                    "{kind} duck built without a quack behavior"
                ))
            })?,
        ))
    }
}

/// Builds a [`Character`] with an optional weapon override
pub struct CharacterBuilder {
    kind: CharacterKind,
    weapon: Option<Arc<dyn WeaponBehavior>>,
}

impl CharacterBuilder {
    pub fn new(kind: CharacterKind) -> Self {
        Self { kind, weapon: None }
    }

    pub fn with_weapon<T: WeaponBehavior + 'static>(mut self, weapon: T) -> Self {
        self.weapon = Some(Arc::new(weapon));
        self
    }

    pub fn with_weapon_arc(mut self, weapon: Arc<dyn WeaponBehavior>) -> Self {
        self.weapon = Some(weapon);
        self
    }

    pub fn build(self) -> Character {
        let kind = self.kind;
        Character::with_weapon(kind, self.weapon.unwrap_or_else(|| kind.default_weapon()))
    }

    pub fn build_strict(self) -> CompositionResult<Character> {
        let kind = self.kind;
        let weapon = self.weapon.ok_or_else(|| {
            CompositionError::invalid_state(format!("{kind} built without a weapon"))
        })?;
        Ok(Character::with_weapon(kind, weapon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BowAndArrow, FlyRocketPowered, Squeak};

    #[test]
    fn test_build_fills_missing_slots_from_kind() {
        let duck = DuckBuilder::new(DuckKind::Decoy)
            .with_quack(Squeak)
            .build();
        assert_eq!(duck.perform_fly().description, "I can't fly");
        assert_eq!(duck.perform_quack().description, "Squeak");
    }

    #[test]
    fn test_build_strict_requires_every_slot() {
        let result = DuckBuilder::new(DuckKind::Mallard)
            .with_fly(FlyRocketPowered)
            .build_strict();
        assert!(matches!(result, Err(CompositionError::InvalidState(_))));

        let duck = DuckBuilder::new(DuckKind::Mallard)
            .with_fly(FlyRocketPowered)
            .with_quack(Squeak)
            .build_strict()
            .unwrap();
        assert_eq!(duck.perform_fly().description, "I'm flying with a rocket!");
    }

    #[test]
    fn test_character_builder() {
        assert!(CharacterBuilder::new(CharacterKind::Troll)
            .build_strict()
            .is_err());

        let queen = CharacterBuilder::new(CharacterKind::Queen)
            .with_weapon(BowAndArrow)
            .build();
        assert_eq!(queen.attack().description, "Shooting an arrow with a bow");
    }
}
