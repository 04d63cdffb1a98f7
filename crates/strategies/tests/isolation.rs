//! Isolation guarantees every strategy must uphold, checked across all five.

use deepcopy_people::{Address, User};
use deepcopy_strategies::CopyStrategy;
use proptest::prelude::*;

fn prime_minister() -> User {
    User::new(
        "Prime",
        "Minister",
        Address::new("Downing St 10", "London", "England"),
    )
}

fn assert_distinct_allocations(copy: &User, source: &User, strategy: CopyStrategy) {
    assert!(!core::ptr::eq(copy, source), "{strategy}: same user");
    assert!(
        !core::ptr::eq(copy.address(), source.address()),
        "{strategy}: same address"
    );
    assert_ne!(
        copy.first_name().as_ptr(),
        source.first_name().as_ptr(),
        "{strategy}: first name buffer shared"
    );
    assert_ne!(
        copy.address().street().as_ptr(),
        source.address().street().as_ptr(),
        "{strategy}: street buffer shared"
    );
    assert_ne!(
        copy.address().country().as_ptr(),
        source.address().country().as_ptr(),
        "{strategy}: country buffer shared"
    );
}

#[test]
fn every_strategy_allocates_a_new_graph() {
    let pm = prime_minister();

    for strategy in CopyStrategy::ALL {
        let copy = strategy.copy(&pm).unwrap();
        assert_distinct_allocations(&copy, &pm, strategy);
    }
}

#[test]
fn every_strategy_copies_field_for_field() {
    let pm = prime_minister();

    for strategy in CopyStrategy::ALL {
        let copy = strategy.copy(&pm).unwrap();
        assert_eq!(copy, pm, "{strategy}");
        assert_eq!(copy.first_name(), "Prime");
        assert_eq!(copy.last_name(), "Minister");
        assert_eq!(copy.address().street(), "Downing St 10");
        assert_eq!(copy.address().city(), "London");
        assert_eq!(copy.address().country(), "England");
    }
}

#[test]
fn modifying_original_does_not_change_any_copy() {
    for strategy in CopyStrategy::ALL {
        let mut pm = prime_minister();
        let copy = strategy.copy(&pm).unwrap();

        pm.address_mut().set_country("Great Britain");

        assert_eq!(copy.address().country(), "England", "{strategy}");
        assert_ne!(copy.address().country(), pm.address().country(), "{strategy}");
    }
}

#[test]
fn modifying_copy_does_not_change_original() {
    let pm = prime_minister();

    for strategy in CopyStrategy::ALL {
        let mut copy = strategy.copy(&pm).unwrap();
        copy.address_mut().set_country("Wales");

        assert_eq!(pm.address().country(), "England", "{strategy}");
    }
}

#[test]
fn repeated_copies_are_mutually_independent() {
    let pm = prime_minister();

    for strategy in CopyStrategy::ALL {
        let mut first = strategy.copy(&pm).unwrap();
        let second = strategy.copy(&pm).unwrap();

        first.address_mut().set_country("Northern Ireland");

        assert_eq!(second.address().country(), "England", "{strategy}");
        assert_eq!(pm.address().country(), "England", "{strategy}");
    }
}

#[test]
fn empty_strings_survive_every_strategy() {
    let source = User::new("", "", Address::new("", "", ""));

    for strategy in CopyStrategy::ALL {
        let copy = strategy.copy(&source).unwrap();
        assert_eq!(copy, source, "{strategy}");
        assert_eq!(copy.address().country(), "");
    }
}

#[test]
fn quoting_and_unicode_survive_every_strategy() {
    let source = User::new(
        "Zoë \"the\" PM",
        "Ó Briain\\",
        Address::new("Rue de l'Église\n1", "Ζάκυνθος", "日本"),
    );

    for strategy in CopyStrategy::ALL {
        assert_eq!(strategy.copy(&source).unwrap(), source, "{strategy}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: every strategy round-trips arbitrary field values and stays
    /// isolated from later mutation of the source.
    #[test]
    fn all_strategies_round_trip_and_isolate(
        first in "\\PC{0,16}",
        last in "\\PC{0,16}",
        street in "\\PC{0,24}",
        city in "\\PC{0,16}",
        country in "\\PC{0,16}",
    ) {
        for strategy in CopyStrategy::ALL {
            let mut source = User::new(
                first.clone(),
                last.clone(),
                Address::new(street.clone(), city.clone(), country.clone()),
            );
            let copy = strategy.copy(&source).unwrap();
            prop_assert_eq!(&copy, &source);

            source.address_mut().set_country(format!("{country}-changed"));
            prop_assert_eq!(copy.address().country(), country.as_str());
        }
    }
}
