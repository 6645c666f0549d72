use composition_rs::prelude::*;

// ------------------------------------
// 1. Concrete scenario: Espresso + Milk + Sugar
// ------------------------------------
#[test]
fn test_espresso_milk_sugar() {
    let espresso = BaseBeverage::new("Espresso", Price::whole(10));
    let drink = CondimentDecorator::wrap(
        CondimentDecorator::wrap(espresso, Condiment::Milk),
        Condiment::Sugar,
    );

    assert_eq!(drink.description(), "Espresso, Milk, Sugar");
    assert_eq!(drink.cost(), Price::whole(21));
    assert_eq!(drink.cost().to_string(), "$21.00");
    assert_eq!(drink.depth(), 2);
}

// ------------------------------------
// 2. Description composition follows wrap order
// ------------------------------------
#[test]
fn test_description_reflects_wrap_order() {
    let a = BeverageBuilder::new(BaseKind::Decaf)
        .with(Condiment::Soy)
        .with(Condiment::Whip)
        .build();
    let b = BeverageBuilder::new(BaseKind::Decaf)
        .with(Condiment::Whip)
        .with(Condiment::Soy)
        .build();

    assert_eq!(a.description(), "Decaf Coffee, Soy, Whip");
    assert_eq!(b.description(), "Decaf Coffee, Whip, Soy");
    assert_eq!(a.cost(), b.cost());
}

// ------------------------------------
// 3. Cost additivity for every wrapping order
// ------------------------------------
fn permutations(items: &[Condiment]) -> Vec<Vec<Condiment>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for i in 0..items.len() {
        let mut rest = items.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

#[test]
fn test_cost_is_base_plus_surcharges_in_any_order() {
    let condiments = vec![
        Condiment::Milk,
        Condiment::Sugar,
        Condiment::Mocha,
        Condiment::custom("Caramel", Price::from_cents(450)),
    ];
    let expected = BaseKind::HouseBlend.cost()
        + condiments.iter().map(Condiment::surcharge).sum::<Price>();

    let orders = permutations(&condiments);
    assert_eq!(orders.len(), 24);
    for order in orders {
        let drink = BeverageBuilder::new(BaseKind::HouseBlend)
            .with_all(order)
            .build();
        assert_eq!(drink.cost(), expected);
        assert_eq!(drink.depth(), 4);
    }
}

#[test]
fn test_fractional_surcharges_sum_exactly_in_any_order() {
    let condiments = vec![
        Condiment::custom("Vanilla", Price::from_cents(10)),
        Condiment::custom("Hazelnut", Price::from_cents(20)),
        Condiment::custom("Cinnamon", Price::from_cents(30)),
    ];

    for order in permutations(&condiments) {
        let drink = BeverageBuilder::new(BaseBeverage::new("Hot Water", Price::ZERO))
            .with_all(order)
            .build();
        assert_eq!(drink.cost(), Price::from_cents(60));
        assert_eq!(drink.cost().to_string(), "$0.60");
    }
}

#[test]
fn test_custom_surcharge_never_lowers_cost() {
    let base = BaseBeverage::from(BaseKind::Espresso);
    let floor = base.cost();

    let wrapped = CondimentDecorator::wrap(base.clone(), Condiment::custom("Promo", Price::ZERO));
    assert_eq!(wrapped.cost(), floor);

    let built = BeverageBuilder::new(base)
        .with(Condiment::custom("Promo", Price::ZERO))
        .with(Condiment::custom("Syrup", Price::from_cents(75)))
        .build();
    assert!(built.cost() >= floor);
    assert_eq!(built.cost(), Price::from_cents(1075));

    // negative surcharges have no representation, even over JSON
    let refund = BeverageOrder::from_json_str(
        r#"{ "base": "espresso", "condiments": [{ "custom": { "label": "Refund", "surcharge": -50 } }] }"#,
    );
    assert!(matches!(refund, Err(CompositionError::Serialization(_))));
}

#[test]
fn test_repeated_condiment_counts_twice() {
    let drink = BeverageBuilder::new(BaseKind::DarkRoast)
        .with(Condiment::Mocha)
        .with(Condiment::Mocha)
        .with(Condiment::Whip)
        .build();
    assert_eq!(drink.description(), "Dark Roast Coffee, Mocha, Mocha, Whip");
    assert_eq!(drink.cost(), Price::whole(14));
}

// ------------------------------------
// 4. Depth zero is the identity
// ------------------------------------
#[test]
fn test_depth_zero_identity() {
    let base = BaseBeverage::from(BaseKind::Espresso);
    let chain = BeverageBuilder::new(base.clone()).build();
    assert_eq!(chain.description(), base.description());
    assert_eq!(chain.cost(), base.cost());
}

// ------------------------------------
// 5. Configured separator and JSON orders
// ------------------------------------
#[test]
fn test_order_with_configured_separator() {
    let config = CompositionConfig::from_json_str(r#"{ "chain": { "separator": " & " } }"#).unwrap();
    let order = BeverageOrder::from_json_str(r#"{ "base": "espresso", "condiments": ["milk", "sugar"] }"#)
        .unwrap();
    let drink = order.into_beverage(&config.chain);
    assert_eq!(drink.description(), "Espresso & Milk & Sugar");
    assert_eq!(drink.cost(), Price::whole(21));
}

// ------------------------------------
// 6. Character abilities
// ------------------------------------
#[test]
fn test_character_ability_chain() {
    let hero = AbilityDecorator::wrap(
        AbilityDecorator::wrap(
            AbilityDecorator::wrap(BasicCharacter, Ability::Fireball),
            Ability::DoubleDamage,
        ),
        Ability::Invisibility,
    );
    assert_eq!(
        hero.description(),
        "Basic Character with Fireball with Double Damage with Invisibility"
    );
    assert_eq!(hero.damage(), 60);
}
