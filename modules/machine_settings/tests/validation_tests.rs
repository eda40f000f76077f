//! Validation behaviour seen through the Machine trait

use machine_settings::domain::units::convert;
use machine_settings::domain::validation::*;
use machine_settings::domain::Machine;
use machine_settings::{ProposedValue, SettingDefinition, UnitOfMeasure, ValidationError};
use std::collections::HashSet;
use std::sync::Arc;

mod common;
use common::{print_errors, print_test_header, MockSettingsStore, TestMachine};

fn machine() -> TestMachine {
    TestMachine::new(Arc::new(MockSettingsStore::new()))
}

fn has(errors: &[ValidationError], identifier: &str, message: &str) -> bool {
    errors
        .iter()
        .any(|e| e.identifier == identifier && e.message == message)
}

#[test]
fn test_flags_unknown_identifiers() {
    print_test_header(
        "test_flags_unknown_identifiers",
        &["Unknown identifiers are reported and not checked further."],
    );
    let errors = machine().verify(&[ProposedValue::new("doesNotExist", 1)]);
    print_errors(&errors);

    assert!(has(&errors, "doesNotExist", MSG_UNKNOWN));
    assert_eq!(errors.iter().filter(|e| e.identifier == "doesNotExist").count(), 1);
}

#[test]
fn test_flags_duplicate_identifiers() {
    print_test_header(
        "test_flags_duplicate_identifiers",
        &["Proposing an identifier twice yields exactly one duplicate error."],
    );
    let errors = machine().verify(&[
        ProposedValue::new("stringWithDefault", "a"),
        ProposedValue::new("stringWithDefault", "b"),
    ]);
    print_errors(&errors);

    let duplicates: Vec<_> = errors.iter().filter(|e| e.message == MSG_DUPLICATE).collect();
    assert_eq!(duplicates.len(), 1);
    assert_eq!(duplicates[0].identifier, "stringWithDefault");
}

#[test]
fn test_requires_values_for_non_nullable_without_defaults() {
    print_test_header(
        "test_requires_values_for_non_nullable_without_defaults",
        &["An omitted required setting without default is missing."],
    );
    let errors = machine().verify(&[]);
    print_errors(&errors);

    // stringWithDefault is defaulted and nullableNumber is nullable
    let expected: HashSet<ValidationError> = [
        ValidationError::new("requiredNoDefault", MSG_MISSING),
        ValidationError::new("tempC", MSG_MISSING),
        ValidationError::new("plainNumber", MSG_MISSING),
    ]
    .into();
    let actual: HashSet<ValidationError> = errors.into_iter().collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_validates_types() {
    print_test_header("test_validates_types", &["A number for a string setting is rejected."]);
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("stringWithDefault", 123),
    ]);
    print_errors(&errors);

    assert!(has(&errors, "stringWithDefault", MSG_NOT_STRING));
}

#[test]
fn test_checks_numeric_min_max() {
    print_test_header("test_checks_numeric_min_max", &["Out-of-range values are rejected."]);
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 120).with_unit(UnitOfMeasure::Celsius),
        ProposedValue::new("plainNumber", -1),
    ]);
    print_errors(&errors);

    assert!(has(&errors, "tempC", "Value must be <= 100"));
    assert!(has(&errors, "plainNumber", "Value must be >= 0"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_accepts_convertible_uom() {
    print_test_header(
        "test_accepts_convertible_uom",
        &["212°F converts to 100°C, exactly on the upper bound."],
    );
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 212).with_unit(UnitOfMeasure::Fahrenheit),
        ProposedValue::new("plainNumber", 5),
    ]);
    print_errors(&errors);

    assert!(errors.is_empty());
}

#[test]
fn test_rejects_converted_value_out_of_range() {
    print_test_header(
        "test_rejects_converted_value_out_of_range",
        &["213°F is above 100°C after conversion."],
    );
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 213).with_unit(UnitOfMeasure::Fahrenheit),
        ProposedValue::new("plainNumber", 5),
    ]);
    print_errors(&errors);

    assert_eq!(errors, vec![ValidationError::new("tempC", "Value must be <= 100")]);
}

#[test]
fn test_flags_non_convertible_uom() {
    print_test_header("test_flags_non_convertible_uom", &["bar cannot become °C."]);
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 10).with_unit(UnitOfMeasure::Bar),
        ProposedValue::new("plainNumber", 5),
    ]);
    print_errors(&errors);

    assert!(has(&errors, "tempC", MSG_UNIT_NOT_CONVERTIBLE));
}

#[test]
fn test_flags_uom_for_settings_that_dont_support_it() {
    print_test_header(
        "test_flags_uom_for_settings_that_dont_support_it",
        &["A unit on a unit-less numeric setting is rejected."],
    );
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("plainNumber", 5).with_unit(UnitOfMeasure::Second),
    ]);
    print_errors(&errors);

    assert!(has(&errors, "plainNumber", MSG_UNIT_NOT_SUPPORTED));
}

#[test]
fn test_flags_uom_on_boolean_setting() {
    let errors = machine().verify(&[
        ProposedValue::new("requiredNoDefault", true).with_unit(UnitOfMeasure::Rpm),
        ProposedValue::new("tempC", 20),
        ProposedValue::new("plainNumber", 5),
    ]);
    assert_eq!(
        errors,
        vec![ValidationError::new("requiredNoDefault", MSG_UNIT_NOT_NUMERIC)]
    );
}

#[test]
fn test_allows_missing_values_for_nullable() {
    print_test_header(
        "test_allows_missing_values_for_nullable",
        &["A nullable setting may be omitted or explicitly absent."],
    );
    let m = machine();
    let errors = m.verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 50),
        ProposedValue::new("plainNumber", 5),
    ]);
    assert!(errors.is_empty());

    let errors = m.verify(&[
        ProposedValue::new("requiredNoDefault", true),
        ProposedValue::new("tempC", 50),
        ProposedValue::new("plainNumber", 5),
        ProposedValue::absent("nullableNumber"),
    ]);
    assert!(errors.is_empty());
}

#[test]
fn test_collects_every_error_in_one_pass() {
    print_test_header(
        "test_collects_every_error_in_one_pass",
        &["All problems of a batch are reported together."],
    );
    let errors = machine().verify(&[
        ProposedValue::new("ghost", 1),
        ProposedValue::new("stringWithDefault", false),
        ProposedValue::new("stringWithDefault", "x"),
        ProposedValue::new("tempC", "hot"),
        ProposedValue::new("plainNumber", 11),
    ]);
    print_errors(&errors);

    let actual: HashSet<ValidationError> = errors.into_iter().collect();
    let expected: HashSet<ValidationError> = [
        ValidationError::new("stringWithDefault", MSG_DUPLICATE),
        ValidationError::new("ghost", MSG_UNKNOWN),
        ValidationError::new("requiredNoDefault", MSG_MISSING),
        ValidationError::new("stringWithDefault", MSG_NOT_STRING),
        ValidationError::new("tempC", MSG_NOT_NUMBER),
        ValidationError::new("plainNumber", "Value must be <= 10"),
    ]
    .into();
    assert_eq!(actual, expected);
}

#[test]
fn test_empty_batch_against_defaulted_definitions_is_clean() {
    let definitions = vec![
        SettingDefinition::string("a", "A").with_default("x"),
        SettingDefinition::boolean("b", "B").with_default(false),
        SettingDefinition::number("c", "C").nullable(),
    ];
    assert!(verify(&definitions, &[]).is_empty());
}

#[test]
fn test_every_unit_pair_agrees_with_validation() {
    // A proposal in `from` against a setting in `to` is accepted iff convert() succeeds
    for from in UnitOfMeasure::ALL {
        for to in UnitOfMeasure::ALL {
            let definitions = vec![SettingDefinition::number("n", "N").with_unit(to)];
            let errors = verify(&definitions, &[ProposedValue::new("n", 1).with_unit(from)]);
            let convertible = convert(1.0, from, to).is_some();
            assert_eq!(errors.is_empty(), convertible, "{from} -> {to}");
            if !convertible {
                assert_eq!(errors, vec![ValidationError::new("n", MSG_UNIT_NOT_CONVERTIBLE)]);
            }
        }
    }
}
