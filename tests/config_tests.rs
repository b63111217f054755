// Host-side tests for config validation and color parsing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod spark {
    include!("../src/core/spark.rs");
}

use spark::*;

#[test]
fn defaults_match_the_shipped_component() {
    let cfg = SparkConfig::default();
    assert_eq!(cfg.color, SparkColor::Fixed("#121212".to_string()));
    assert_eq!(cfg.size_px, 10.0);
    assert_eq!(cfg.radius_px, 15.0);
    assert_eq!(cfg.count, 8);
    assert_eq!(cfg.duration_ms, 400.0);
    assert_eq!(cfg.easing, Easing::EaseOut);
    assert_eq!(cfg.extra_scale, 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn zero_count_is_rejected() {
    let cfg = SparkConfig {
        count: 0,
        ..SparkConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::ZeroCount));
    assert!(SparkEngine::new(cfg).is_err());
}

#[test]
fn degenerate_durations_are_rejected() {
    for duration_ms in [0.0, -400.0, f64::NAN, f64::INFINITY] {
        let cfg = SparkConfig {
            duration_ms,
            ..SparkConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidDuration),
            "duration {}",
            duration_ms
        );
    }
}

#[test]
fn degenerate_geometry_is_rejected() {
    let cfg = SparkConfig {
        size_px: 0.0,
        ..SparkConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidSize));

    let cfg = SparkConfig {
        radius_px: -1.0,
        ..SparkConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidRadius));

    let cfg = SparkConfig {
        extra_scale: -0.5,
        ..SparkConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidExtraScale));

    let cfg = SparkConfig {
        extra_scale: f32::NAN,
        ..SparkConfig::default()
    };
    assert_eq!(cfg.validate(), Err(ConfigError::InvalidExtraScale));
}

#[test]
fn zero_extra_scale_is_allowed() {
    // Sparks shrink in place without travelling; odd but not degenerate.
    let cfg = SparkConfig {
        extra_scale: 0.0,
        ..SparkConfig::default()
    };
    assert!(cfg.validate().is_ok());
}

#[test]
fn color_parse_recognizes_var_tokens() {
    assert_eq!(
        SparkColor::parse("var(--spark-color)"),
        SparkColor::Token("--spark-color".to_string())
    );
    assert_eq!(
        SparkColor::parse("  var( --accent )  "),
        SparkColor::Token("--accent".to_string())
    );
    assert_eq!(
        SparkColor::parse("#121212"),
        SparkColor::Fixed("#121212".to_string())
    );
    assert_eq!(
        SparkColor::parse(" rgb(18, 18, 18) "),
        SparkColor::Fixed("rgb(18, 18, 18)".to_string())
    );
    // unterminated var() is treated as a literal, not a token
    assert_eq!(
        SparkColor::parse("var(--oops"),
        SparkColor::Fixed("var(--oops".to_string())
    );
}

#[test]
fn engine_starts_with_fixed_color_resolved() {
    let eng = SparkEngine::new(SparkConfig {
        color: SparkColor::Fixed("#ff8800".to_string()),
        ..SparkConfig::default()
    })
    .unwrap();
    assert_eq!(eng.resolved_color(), "#ff8800");
}

#[test]
fn config_errors_render_readable_messages() {
    let err = SparkConfig {
        count: 0,
        ..SparkConfig::default()
    }
    .validate()
    .unwrap_err();
    assert_eq!(err.to_string(), "spark count must be at least 1");
}
