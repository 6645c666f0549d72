//! Coffee shop: beverages wrapped by condiments

use composition_rs::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_drink(drink: &dyn Beverage) {
    println!("{} {}", drink.description(), drink.cost());
}

fn main() -> CompositionResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    let espresso = BaseBeverage::from(BaseKind::Espresso);
    print_drink(&espresso);

    let espresso_milk_sugar = CondimentDecorator::wrap(
        CondimentDecorator::wrap(espresso, Condiment::Milk),
        Condiment::Sugar,
    );
    print_drink(&espresso_milk_sugar);

    let dark_roast = BeverageBuilder::new(BaseKind::DarkRoast)
        .with(Condiment::Mocha)
        .with(Condiment::Mocha)
        .with(Condiment::Whip)
        .build();
    print_drink(dark_roast.as_ref());

    let order = BeverageOrder::from_json_str(
        r#"{ "base": "house_blend", "condiments": ["soy", "mocha", "whip"] }"#,
    )?;
    let house_blend = order.into_beverage(&ChainConfig::default());
    print_drink(house_blend.as_ref());

    Ok(())
}
