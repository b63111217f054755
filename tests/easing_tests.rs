// Host-side tests for the easing curves.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod spark {
    include!("../src/core/spark.rs");
}

use spark::Easing;

const ALL: [Easing; 4] = [
    Easing::Linear,
    Easing::EaseIn,
    Easing::EaseOut,
    Easing::EaseInOut,
];

#[test]
fn boundaries_are_exact() {
    for easing in ALL {
        assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
    }
}

#[test]
fn monotonic_easings_never_decrease() {
    for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut] {
        let mut prev = easing.apply(0.0);
        for i in 1..=100 {
            let v = easing.apply(i as f32 / 100.0);
            assert!(v >= prev, "{:?} decreased near t={}", easing, i);
            prev = v;
        }
    }
}

#[test]
fn ease_in_out_is_monotonic_on_each_half() {
    for range in [(0, 50), (50, 100)] {
        let mut prev = Easing::EaseInOut.apply(range.0 as f32 / 100.0);
        for i in (range.0 + 1)..=range.1 {
            let v = Easing::EaseInOut.apply(i as f32 / 100.0);
            assert!(v >= prev, "decreased near t={}", i);
            prev = v;
        }
    }
}

#[test]
fn known_midpoint_values() {
    assert!((Easing::Linear.apply(0.5) - 0.5).abs() < 1e-6);
    assert!((Easing::EaseIn.apply(0.5) - 0.25).abs() < 1e-6);
    assert!((Easing::EaseOut.apply(0.5) - 0.75).abs() < 1e-6);
    assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    // the two ease-in-out branches meet at t = 0.5
    assert!((Easing::EaseInOut.apply(0.4999) - Easing::EaseInOut.apply(0.5001)).abs() < 1e-3);
}

#[test]
fn parses_css_style_names() {
    assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
    assert_eq!(Easing::from_name("ease-in"), Some(Easing::EaseIn));
    assert_eq!(Easing::from_name("ease-out"), Some(Easing::EaseOut));
    assert_eq!(Easing::from_name("ease-in-out"), Some(Easing::EaseInOut));
    assert_eq!(Easing::from_name("bounce"), None);
    assert_eq!(Easing::from_name(""), None);
}

#[test]
fn default_is_ease_out() {
    assert_eq!(Easing::default(), Easing::EaseOut);
}
