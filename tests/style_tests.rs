// Host-side tests for pure style helpers and page hook constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod style {
    include!("../src/style.rs");
}

use constants::*;
use style::*;

#[test]
fn px_and_pct_format_css_values() {
    assert_eq!(px(12.0), "12.00px");
    assert_eq!(px(-3.456), "-3.46px");
    assert_eq!(pct(50.0), "50.000%");
    assert_eq!(pct(33.33333), "33.333%");
}

#[test]
fn parse_key_accepts_stamped_values_only() {
    assert_eq!(parse_key(Some("7".to_string())), Some(7));
    assert_eq!(parse_key(Some(" 12 ".to_string())), Some(12));
    assert_eq!(parse_key(Some("card".to_string())), None);
    assert_eq!(parse_key(Some("-1".to_string())), None);
    assert_eq!(parse_key(None), None);
}

#[test]
fn css_variables_are_custom_properties() {
    for var in [BG_X_VAR, BG_Y_VAR, SPOT_X_VAR, SPOT_Y_VAR] {
        assert!(var.starts_with("--"), "{var} is not a custom property");
    }
}

#[test]
fn interactive_selector_covers_cards() {
    let parts: Vec<&str> = INTERACTIVE_SELECTOR.split(',').map(str::trim).collect();
    assert!(parts.contains(&CARD_SELECTOR));
    assert!(parts.contains(&"a"));
    assert!(parts.contains(&"button"));
}

#[test]
fn capability_queries_are_media_features() {
    for q in [FINE_POINTER_QUERY, REDUCED_MOTION_QUERY] {
        assert!(q.starts_with('(') && q.ends_with(')'));
    }
}
