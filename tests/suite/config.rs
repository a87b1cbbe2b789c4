//! Config file to running app.

use std::fs;
use std::time::Duration;

use paws_config::{ConfigError, EnvOverrides, PawsConfig};
use paws_engine::{App, ContactId, Decision, Phase, Release};
use paws_types::OptionsError;
use tempfile::tempdir;

use crate::common::drag;

fn load(contents: &str) -> Result<PawsConfig, ConfigError> {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write config");
    PawsConfig::load_from(&path)
}

#[test]
fn file_settings_drive_the_session() {
    let config = load(
        r#"
[app]
reduced_motion = true

[deck]
size = 4
provider = "http://localhost:9000/"

[gesture]
swipe_threshold = 40
"#,
    )
    .unwrap();
    let resolved = config.resolve(EnvOverrides::default()).unwrap();
    let mut app = App::new(resolved);

    // Reduced motion skips the loading screen.
    assert_eq!(app.phase(), Phase::Swiping);
    assert_eq!(app.state().len(), 4);
    assert_eq!(
        app.state().sequence()[2].image_ref(),
        "http://localhost:9000/cat?2&width=500&height=600"
    );

    assert_eq!(
        drag(&mut app, ContactId(0), 41.0),
        Release::Committed(Decision::Like)
    );
    app.tick(Duration::ZERO);
    assert_eq!(app.state().current_index(), 1);
}

#[test]
fn environment_overrides_win() {
    let config = load("[deck]\nsize = 4\n").unwrap();
    let overrides = EnvOverrides {
        deck_size: Some(2),
        swipe_threshold: Some(300.0),
    };
    let app = App::new(config.resolve(overrides).unwrap());

    assert_eq!(app.state().len(), 2);
    assert!((app.options().gesture().swipe_threshold() - 300.0).abs() < f32::EPSILON);
}

#[test]
fn terminal_scale_changes_cell_mapping() {
    let config = load("[terminal]\ncolumn_units = 20.0\n").unwrap();
    let resolved = config.resolve(EnvOverrides::default()).unwrap();
    let mut app = App::new(resolved);
    app.tick(Duration::from_millis(500));
    assert_eq!(app.phase(), Phase::Swiping);

    let scale = app.pointer_scale();
    let point = scale.to_point(6, 2);
    assert!((point.x - 120.0).abs() < f32::EPSILON);
    assert!((point.y - 32.0).abs() < f32::EPSILON);
}

#[test]
fn invalid_values_are_typed_errors() {
    let config = load("[deck]\nsize = 0\n").unwrap();
    assert_eq!(
        config.resolve(EnvOverrides::default()),
        Err(OptionsError::EmptyDeck)
    );

    let config = load("[gesture]\nswipe_threshold = -5\n").unwrap();
    assert_eq!(
        config.resolve(EnvOverrides::default()),
        Err(OptionsError::InvalidThreshold(-5.0))
    );
}

#[test]
fn malformed_file_is_a_parse_error() {
    let err = load("[deck\nsize = 3").unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "{err}");
}

#[test]
fn bad_override_keeps_the_file() {
    let config = load("[app]\nascii_only = true\n\n[deck]\nsize = 4\n").unwrap();
    let overrides = EnvOverrides {
        deck_size: None,
        swipe_threshold: Some(0.0),
    };
    assert!(config.resolve(overrides).is_err());

    let resolved = config.resolve_or_default(overrides);
    assert!(resolved.ui.ascii_only);
    assert_eq!(resolved.session.deck_size().get(), 4);
    assert!((resolved.session.gesture().swipe_threshold() - 100.0).abs() < f32::EPSILON);
}

#[test]
fn invalid_file_falls_back_but_keeps_overrides() {
    let config = load("[app]\nascii_only = true\n\n[deck]\nsize = 0\n").unwrap();
    let overrides = EnvOverrides {
        deck_size: Some(3),
        swipe_threshold: None,
    };

    let resolved = config.resolve_or_default(overrides);
    assert!(!resolved.ui.ascii_only);
    assert_eq!(resolved.session.deck_size().get(), 3);

    let app = App::new(config.resolve_or_default(EnvOverrides::default()));
    assert_eq!(app.state().len(), 15);
}
