//! Game characters stacking abilities through decoration

use composition_rs::decorator::{Ability, AbilityDecorator, BasicCharacter, Combatant, equip};
use tracing_subscriber::EnvFilter;

fn print_combatant(combatant: &dyn Combatant) {
    println!("{}", combatant.description());
    println!("{}", combatant.damage());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    print_combatant(&BasicCharacter);

    for ability in [Ability::DoubleDamage, Ability::Fireball, Ability::Invisibility] {
        print_combatant(&AbilityDecorator::wrap(BasicCharacter, ability));
    }

    let double_fireball = AbilityDecorator::wrap(
        AbilityDecorator::wrap(BasicCharacter, Ability::Fireball),
        Ability::DoubleDamage,
    );
    print_combatant(&double_fireball);

    let hidden = AbilityDecorator::wrap(double_fireball, Ability::Invisibility);
    print_combatant(&hidden);

    let reversed = equip(BasicCharacter, [Ability::DoubleDamage, Ability::Fireball]);
    print_combatant(reversed.as_ref());
}
