//! Duck simulator: ducks delegating to swappable fly and quack behaviors

use composition_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn show(duck: &Duck) {
    println!("{}", duck.display());
    println!("{}", duck.perform_quack());
    println!("{}", duck.perform_fly());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    for kind in [DuckKind::Mallard, DuckKind::Redhead, DuckKind::Rubber] {
        show(&Duck::new(kind));
        println!("---------------");
    }

    let mut model = Duck::model();
    println!("{}", model.display());
    println!("{}", model.perform_quack());
    model.set_quack_behavior(quack_behavior(FakeQuack));
    println!("{}", model.perform_quack());
    println!("{}", model.perform_fly());
    model.set_fly_behavior(fly_behavior(FlyRocketPowered));
    println!("{}", model.perform_fly());
    println!("{}", model.swim());
}
