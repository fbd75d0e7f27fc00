mod common;

use common::temp_config;
use escape_epic::config::{Config, ConfigError, MAX_SCROLL_STEP};
use std::path::PathBuf;

/// Test that Config::default() produces the documented values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.slideshow.interval_ms, 4000);
    assert_eq!(config.slideshow.transition_ms, 600);
    assert_eq!(config.header.scroll_threshold, 50);
    assert_eq!(config.page.scroll_step, 20);
    assert_eq!(config.page.go_top_threshold, 300);
    assert!((config.page.reveal_ratio - 0.1).abs() < f32::EPSILON);
    assert!(config.contact.outbox.is_none());
    assert!(config.hero.is_empty());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("escape-epic/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = Config::load_from(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[slideshow]
interval_ms = 2500

[header]
scroll_threshold = 80
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.slideshow.interval_ms, 2500);
    assert_eq!(config.slideshow.transition_ms, 600);
    assert_eq!(config.header.scroll_threshold, 80);
    assert_eq!(config.page.scroll_step, 20);
}

#[test]
fn test_full_file_round_trips_fields() {
    let (_dir, path) = temp_config(
        r#"
[slideshow]
interval_ms = 5000
transition_ms = 0

[page]
scroll_step = 10
go_top_threshold = 120
reveal_ratio = 0.5

[contact]
outbox = "/tmp/escape-epic/outbox.jsonl"

[[hero]]
image = "img/fjord.jpg"
title = "Norway"
subtitle = "Fjords by ferry"

[[hero]]
image = "img/atlas.jpg"
title = "Morocco"
call_to_action = { label = "Plan it", target = "/contact" }
"#,
    );
    let config = Config::load_from(&path).expect("load");
    assert_eq!(config.slideshow.transition_ms, 0);
    assert_eq!(config.page.go_top_threshold, 120);
    assert_eq!(
        config.contact.outbox,
        Some(PathBuf::from("/tmp/escape-epic/outbox.jsonl"))
    );
    assert_eq!(config.hero.len(), 2);
    assert_eq!(config.hero[0].subtitle.as_deref(), Some("Fjords by ferry"));
    let cta = config.hero[1].call_to_action.as_ref().expect("cta");
    assert_eq!(cta.target, "/contact");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = temp_config("[slideshow\ninterval_ms = ");
    match Config::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[slideshow]\ninterval_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn test_reveal_ratio_out_of_range_fails_validation() {
    for ratio in ["0.0", "1.5", "-0.2"] {
        let (_dir, path) = temp_config(&format!("[page]\nreveal_ratio = {}\n", ratio));
        match Config::load_from(&path) {
            Err(ConfigError::ValidationError { message }) => {
                assert!(message.contains("reveal_ratio"), "{}", message)
            }
            other => panic!("expected ValidationError for {}, got {:?}", ratio, other),
        }
    }
}

#[test]
fn test_zero_scroll_step_fails_validation() {
    let (_dir, path) = temp_config("[page]\nscroll_step = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn test_oversized_scroll_step_fails_validation() {
    let (_dir, path) = temp_config("[page]\nscroll_step = 4294967295\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("scroll_step")),
        other => panic!("expected ValidationError, got {:?}", other),
    }

    let mut config = Config::default();
    config.page.scroll_step = MAX_SCROLL_STEP;
    assert!(config.validate().is_ok());
}

#[test]
fn test_hero_slide_without_title_fails_validation() {
    let (_dir, path) = temp_config("[[hero]]\nimage = \"img/x.jpg\"\ntitle = \"  \"\n");
    match Config::load_from(&path) {
        Err(ConfigError::ValidationError { message }) => assert!(message.contains("hero slide 1")),
        other => panic!("expected ValidationError, got {:?}", other),
    }
}

#[test]
fn test_directory_path_is_read_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    assert!(matches!(
        Config::load_from(dir.path()),
        Err(ConfigError::ReadError { .. })
    ));
}
