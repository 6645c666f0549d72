//! Adventure game characters: hosts with a single weapon slot

use super::{weapon_behavior, Axe, Effect, Host, Identity, Knife, Slot, Sword, WeaponBehavior};
use crate::error::{CompositionError, CompositionResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterKind {
    King,
    Queen,
    Knight,
    Troll,
}

impl CharacterKind {
    pub const ALL: [CharacterKind; 4] = [
        CharacterKind::King,
        CharacterKind::Queen,
        CharacterKind::Troll,
        CharacterKind::Knight,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterKind::King => "King",
            CharacterKind::Queen => "Queen",
            CharacterKind::Knight => "Knight",
            CharacterKind::Troll => "Troll",
        }
    }

    /// Weapon a character of this kind starts with
    pub fn default_weapon(&self) -> Arc<dyn WeaponBehavior> {
        match self {
            CharacterKind::King => weapon_behavior(Sword),
            CharacterKind::Queen => weapon_behavior(Knife),
            CharacterKind::Knight | CharacterKind::Troll => weapon_behavior(Axe),
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Identity for CharacterKind {
    fn display(&self) -> String {
        format!("I am the {}", self.name())
    }
}

pub struct Character {
    kind: CharacterKind,
    weapon: Arc<dyn WeaponBehavior>,
}

impl Character {
    pub fn new(kind: CharacterKind) -> Self {
        Self::with_weapon(kind, kind.default_weapon())
    }

    pub fn with_weapon(kind: CharacterKind, weapon: Arc<dyn WeaponBehavior>) -> Self {
        Self { kind, weapon }
    }

    pub fn king() -> Self {
        Self::new(CharacterKind::King)
    }

    pub fn queen() -> Self {
        Self::new(CharacterKind::Queen)
    }

    pub fn knight() -> Self {
        Self::new(CharacterKind::Knight)
    }

    pub fn troll() -> Self {
        Self::new(CharacterKind::Troll)
    }

    pub fn kind(&self) -> CharacterKind {
        self.kind
    }

    pub fn attack(&self) -> Effect {
        self.weapon.use_weapon()
    }

    pub fn set_weapon(&mut self, weapon: Arc<dyn WeaponBehavior>) {
        tracing::debug!(character = %self.kind, slot = %Slot::Weapon, "attaching behavior");
        self.weapon = weapon;
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl Identity for Character {
    fn display(&self) -> String {
        self.kind.display()
    }
}

impl Host for Character {
    fn slots(&self) -> &'static [Slot] {
        &[Slot::Weapon]
    }

    fn perform(&self, slot: Slot) -> CompositionResult<Effect> {
        match slot {
            Slot::Weapon => Ok(self.attack()),
            other => Err(CompositionError::invalid_state(format!(
                "{} has no {} slot",
                self.kind, other
            ))),
        }
    }
}
