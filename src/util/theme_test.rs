#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_light_in_native_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(parse_stored(Some(storage_value(theme))), theme);
    }
}

#[test]
fn unknown_or_missing_value_is_light() {
    assert_eq!(parse_stored(None), Theme::Light);
    assert_eq!(parse_stored(Some("sepia")), Theme::Light);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
