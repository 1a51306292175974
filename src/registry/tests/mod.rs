//! Unit tests for the settings registry
//!
//! Tests manifests, filter conjunction, and fail-fast validation.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::collections::BTreeSet;

use super::{
    SettingFilter, SettingFlags, SettingValue, SettingsRegistry, ValueType, enumerate_settings,
    provider::validate, setting::Setting,
};
use crate::core::ConfdocError;

const DBMS_A: Setting = Setting::new("dbms.a", ValueType::String).flags(SettingFlags::DYNAMIC);
const DBMS_B: Setting = Setting::new("dbms.b", ValueType::String);
const OTHER_C: Setting = Setting::new("other.c", ValueType::String).flags(SettingFlags::DYNAMIC);
const HIDDEN: Setting =
    Setting::new("internal.hidden", ValueType::Boolean).flags(SettingFlags::INTERNAL);

fn fixture() -> Vec<&'static Setting> {
    vec![&OTHER_C, &DBMS_B, &DBMS_A, &HIDDEN]
}

#[test]
fn prefix_and_dynamic_compose_by_conjunction() {
    let filter = SettingFilter {
        prefix: Some("dbms.".to_string()),
        dynamic_only: true,
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    let names: Vec<&str> = result.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["dbms.a"]);
}

#[test]
fn internal_settings_excluded_by_default() {
    let result = enumerate_settings(&fixture(), &SettingFilter::default()).unwrap();

    assert!(result.iter().all(|s| s.name != "internal.hidden"));
}

#[test]
fn internal_settings_included_on_override() {
    let filter = SettingFilter {
        include_internal: true,
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    assert!(result.iter().any(|s| s.name == "internal.hidden"));
}

#[test]
fn exact_name_filter_selects_one() {
    let filter = SettingFilter {
        name: Some("dbms.b".to_string()),
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    let names: Vec<&str> = result.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["dbms.b"]);
}

#[test]
fn name_set_filter_selects_members() {
    let names: BTreeSet<String> = ["dbms.a", "other.c"]
        .into_iter()
        .map(str::to_string)
        .collect();
    let filter = SettingFilter {
        names: Some(names),
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    let found: Vec<&str> = result.iter().map(|s| s.name).collect();
    assert_eq!(found, vec!["dbms.a", "other.c"]);
}

#[test]
fn over_restrictive_conjunction_yields_empty_result() {
    let filter = SettingFilter {
        name: Some("dbms.a".to_string()),
        prefix: Some("other.".to_string()),
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    assert!(result.is_empty());
}

#[test]
fn results_sorted_by_name_byte_order() {
    let filter = SettingFilter {
        include_internal: true,
        ..SettingFilter::default()
    };

    let result = enumerate_settings(&fixture(), &filter).unwrap();

    let names: Vec<&str> = result.iter().map(|s| s.name).collect();
    assert_eq!(names, vec!["dbms.a", "dbms.b", "internal.hidden", "other.c"]);
}

#[test]
fn duplicate_setting_name_aborts_enumeration() {
    const DUPLICATE: Setting = Setting::new("dbms.a", ValueType::Integer);
    let settings: Vec<&Setting> = vec![&DBMS_A, &DUPLICATE];

    let result = enumerate_settings(&settings, &SettingFilter::default());

    assert!(matches!(
        result,
        Err(ConfdocError::DuplicateSetting { name }) if name == "dbms.a"
    ));
}

#[test]
fn replacement_without_deprecation_aborts_enumeration() {
    const BROKEN: Setting =
        Setting::new("dbms.broken", ValueType::String).replaced_by(&["dbms.a"]);
    let settings: Vec<&Setting> = vec![&BROKEN];

    let result = validate(&settings);

    assert!(matches!(
        result,
        Err(ConfdocError::ManifestValidation { setting, .. }) if setting == "dbms.broken"
    ));
}

#[test]
fn builtin_manifests_are_consistent() {
    let filter = SettingFilter {
        include_internal: true,
        ..SettingFilter::default()
    };

    let result = SettingsRegistry::enumerate(&filter).unwrap();

    assert!(!result.is_empty());
    let names: Vec<&str> = result.iter().map(|s| s.name).collect();
    let unique: BTreeSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len());
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn enum_validation_message_lists_literals() {
    let value_type = ValueType::Enum(&["range", "trigram", "vector"]);

    assert_eq!(
        value_type.validation_message(),
        "one of [range, trigram, vector]"
    );
}

#[test]
fn list_validation_message_describes_elements() {
    let value_type = ValueType::ListOf(&ValueType::String);

    assert_eq!(
        value_type.validation_message(),
        "a comma-separated list where each element is a string"
    );
}

#[test]
fn setting_value_renders_programmatic_defaults() {
    assert_eq!(SettingValue::Bool(true).to_string(), "true");
    assert_eq!(SettingValue::Int(1000).to_string(), "1000");
    assert_eq!(SettingValue::Str("15m").to_string(), "15m");
}
