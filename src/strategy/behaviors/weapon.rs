//! Weapon behaviors for adventure game characters

use super::{Effect, Slot, WeaponBehavior};

#[derive(Debug, Default, Clone, Copy)]
pub struct Sword;

impl WeaponBehavior for Sword {
    fn use_weapon(&self) -> Effect {
        Effect::new(Slot::Weapon, "Swinging a sword")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Axe;

impl WeaponBehavior for Axe {
    fn use_weapon(&self) -> Effect {
        Effect::new(Slot::Weapon, "Chopping with an axe")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Knife;

impl WeaponBehavior for Knife {
    fn use_weapon(&self) -> Effect {
        Effect::new(Slot::Weapon, "Cutting with a knife")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BowAndArrow;

impl WeaponBehavior for BowAndArrow {
    fn use_weapon(&self) -> Effect {
        Effect::new(Slot::Weapon, "Shooting an arrow with a bow")
    }
}
