//! Adventure game: characters whose weapon can change mid-game

use composition_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    for kind in [CharacterKind::King, CharacterKind::Queen, CharacterKind::Troll] {
        let character = Character::new(kind);
        println!("{}", character.display());
        println!("{}", character.attack());
        println!("------");
    }

    let mut knight = Character::knight();
    println!("{}", knight.display());
    println!("{}", knight.attack());
    knight.set_weapon(weapon_behavior(BowAndArrow));
    println!("{}", knight.attack());
}
