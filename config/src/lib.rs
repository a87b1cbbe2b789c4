//! Configuration loading for Paws.
//!
//! The TOML file is deserialized into raw structs where every field is
//! optional, then resolved into the validated types of `paws-types`.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//!
//! [deck]
//! size = 15
//! provider = "https://cataas.com"
//! image_width = 500
//! image_height = 600
//!
//! [gesture]
//! swipe_threshold = 100
//! fly_off_ms = 300
//! fly_off_distance = 1000
//! rotation_factor = 0.03
//!
//! [session]
//! load_delay_ms = 500
//! summary_delay_ms = 300
//!
//! [terminal]
//! column_units = 8.0
//! row_units = 16.0
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

use paws_types::ui::{PointerScale, UiOptions};
use paws_types::{
    DEFAULT_LOAD_DELAY, DeckSize, GestureSettings, ImageProvider, OptionsError, SessionOptions,
};

const CONFIG_ENV: &str = "PAWS_CONFIG";
const DECK_SIZE_ENV: &str = "PAWS_DECK_SIZE";
const SWIPE_THRESHOLD_ENV: &str = "PAWS_SWIPE_THRESHOLD";

#[derive(Debug, Default, Deserialize)]
pub struct PawsConfig {
    pub app: Option<AppConfig>,
    pub deck: Option<DeckConfig>,
    pub gesture: Option<GestureConfig>,
    pub session: Option<SessionConfig>,
    pub terminal: Option<TerminalConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for stamps and buttons.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Skip the fly-off animation and cosmetic delays.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeckConfig {
    pub size: Option<usize>,
    /// Base URL of the image provider, without the `/cat` path.
    pub provider: Option<String>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GestureConfig {
    /// Horizontal drag distance that commits a decision.
    pub swipe_threshold: Option<f32>,
    pub fly_off_ms: Option<u64>,
    pub fly_off_distance: Option<f32>,
    /// Degrees of tilt per unit of horizontal drag.
    pub rotation_factor: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SessionConfig {
    pub load_delay_ms: Option<u64>,
    /// Defaults to the fly-off duration.
    pub summary_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TerminalConfig {
    /// Distance units per terminal column.
    pub column_units: Option<f32>,
    /// Distance units per terminal row.
    pub row_units: Option<f32>,
}

/// Overrides taken from the environment at session start.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EnvOverrides {
    pub deck_size: Option<usize>,
    pub swipe_threshold: Option<f32>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            deck_size: parse_env(DECK_SIZE_ENV),
            swipe_threshold: parse_env(SWIPE_THRESHOLD_ENV),
        }
    }
}

fn parse_env<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("Ignoring unparsable {name}={raw:?}");
            None
        }
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved {
    pub session: SessionOptions,
    pub ui: UiOptions,
    pub pointer: PointerScale,
}

impl PawsConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let path = match config_path() {
            Some(path) => path,
            None => return Ok(None),
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Validate and merge with defaults. Environment overrides win over the file.
    pub fn resolve(&self, overrides: EnvOverrides) -> Result<Resolved, OptionsError> {
        let defaults = GestureSettings::default();
        let gesture = self.gesture.as_ref();
        let threshold = overrides
            .swipe_threshold
            .or_else(|| gesture.and_then(|g| g.swipe_threshold))
            .unwrap_or(defaults.swipe_threshold());
        let fly_off = gesture
            .and_then(|g| g.fly_off_ms)
            .map_or(defaults.fly_off(), Duration::from_millis);
        let gesture = GestureSettings::new(
            threshold,
            fly_off,
            gesture
                .and_then(|g| g.fly_off_distance)
                .unwrap_or(defaults.fly_off_distance()),
            gesture
                .and_then(|g| g.rotation_factor)
                .unwrap_or(defaults.rotation_factor()),
        )?;

        let deck = self.deck.as_ref();
        let deck_size = match overrides.deck_size.or_else(|| deck.and_then(|d| d.size)) {
            Some(count) => DeckSize::new(count)?,
            None => DeckSize::default(),
        };
        let provider = match deck {
            Some(d) if d.provider.is_some() || d.image_width.is_some() || d.image_height.is_some() => {
                let fallback = ImageProvider::default();
                ImageProvider::new(
                    d.provider
                        .clone()
                        .unwrap_or_else(|| fallback.base_url().to_string()),
                    d.image_width.unwrap_or(fallback.width()),
                    d.image_height.unwrap_or(fallback.height()),
                )?
            }
            _ => ImageProvider::default(),
        };

        let session = self.session.as_ref();
        let load_delay = session
            .and_then(|s| s.load_delay_ms)
            .map_or(DEFAULT_LOAD_DELAY, Duration::from_millis);
        let summary_delay = session
            .and_then(|s| s.summary_delay_ms)
            .map_or(gesture.fly_off(), Duration::from_millis);

        let app = self.app.as_ref();
        let ui = UiOptions {
            ascii_only: app.is_some_and(|a| a.ascii_only),
            high_contrast: app.is_some_and(|a| a.high_contrast),
        };

        let mut session = SessionOptions::default()
            .with_deck_size(deck_size)
            .with_gesture(gesture)
            .with_provider(provider)
            .with_load_delay(load_delay)
            .with_summary_delay(summary_delay);
        if app.is_some_and(|a| a.reduced_motion) {
            session = session.without_motion();
        }

        // Missing factors become NaN, which PointerScale replaces with its defaults.
        let pointer = self.terminal.as_ref().map_or_else(PointerScale::default, |t| {
            PointerScale::new(
                t.column_units.unwrap_or(f32::NAN),
                t.row_units.unwrap_or(f32::NAN),
            )
        });

        Ok(Resolved {
            session,
            ui,
            pointer,
        })
    }

    /// Resolve without failing. Invalid overrides are dropped and the file's
    /// values kept; an invalid file falls back to the built-in defaults.
    #[must_use]
    pub fn resolve_or_default(&self, overrides: EnvOverrides) -> Resolved {
        let defaults = PawsConfig::default();
        let base = match self.resolve(EnvOverrides::default()) {
            Ok(_) => self,
            Err(err) => {
                tracing::warn!("Invalid config, using defaults: {err}");
                &defaults
            }
        };
        base.resolve(overrides).unwrap_or_else(|err| {
            tracing::warn!("Ignoring invalid environment override: {err}");
            base.resolve(EnvOverrides::default()).unwrap_or_default()
        })
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_ENV)
        && !explicit.is_empty()
    {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".paws").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    fn parse(toml_str: &str) -> PawsConfig {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn parse_empty_config() {
        let config = parse("");
        assert!(config.app.is_none());
        assert!(config.deck.is_none());
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        assert_eq!(resolved, Resolved::default());
    }

    #[test]
    fn parse_full_config() {
        let config = parse(
            r#"
[app]
ascii_only = true
high_contrast = true

[deck]
size = 5
provider = "http://localhost:9000/"
image_width = 320
image_height = 240

[gesture]
swipe_threshold = 60
fly_off_ms = 450
fly_off_distance = 800
rotation_factor = 0.05

[session]
load_delay_ms = 0
summary_delay_ms = 120

[terminal]
column_units = 10.0
row_units = 20.0
"#,
        );
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        let session = &resolved.session;

        assert_eq!(session.deck_size().get(), 5);
        assert_eq!(
            session.provider().url_for(2),
            "http://localhost:9000/cat?2&width=320&height=240"
        );
        assert!((session.gesture().swipe_threshold() - 60.0).abs() < f32::EPSILON);
        assert_eq!(session.gesture().fly_off(), Duration::from_millis(450));
        assert_eq!(session.load_delay(), Duration::ZERO);
        assert_eq!(session.summary_delay(), Duration::from_millis(120));
        assert!(resolved.ui.ascii_only);
        assert!(resolved.ui.high_contrast);
        assert_eq!(resolved.pointer, PointerScale::new(10.0, 20.0));
    }

    #[test]
    fn summary_delay_follows_fly_off_by_default() {
        let config = parse("[gesture]\nfly_off_ms = 700\n");
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        assert_eq!(resolved.session.summary_delay(), Duration::from_millis(700));
    }

    #[test]
    fn partial_image_settings_keep_other_defaults() {
        let config = parse("[deck]\nimage_width = 100\n");
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        assert_eq!(
            resolved.session.provider().url_for(0),
            "https://cataas.com/cat?0&width=100&height=600"
        );
    }

    #[test]
    fn reduced_motion_collapses_delays() {
        let config = parse("[app]\nreduced_motion = true\n");
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        assert_eq!(resolved.ui, UiOptions::default());
        assert_eq!(resolved.session.gesture().fly_off(), Duration::ZERO);
        assert_eq!(resolved.session.load_delay(), Duration::ZERO);
        assert_eq!(resolved.session.summary_delay(), Duration::ZERO);
    }

    #[test]
    fn env_overrides_win_over_file() {
        let config = parse("[deck]\nsize = 5\n[gesture]\nswipe_threshold = 60\n");
        let overrides = EnvOverrides {
            deck_size: Some(3),
            swipe_threshold: Some(150.0),
        };
        let resolved = config.resolve(overrides).unwrap();
        assert_eq!(resolved.session.deck_size().get(), 3);
        assert!((resolved.session.gesture().swipe_threshold() - 150.0).abs() < f32::EPSILON);
    }

    #[test]
    fn lenient_resolve_drops_only_the_bad_override() {
        let config = parse("[deck]\nsize = 5\n");
        let overrides = EnvOverrides {
            deck_size: None,
            swipe_threshold: Some(f32::NAN),
        };
        let resolved = config.resolve_or_default(overrides);
        assert_eq!(resolved.session.deck_size().get(), 5);
        assert_eq!(resolved.session.gesture(), GestureSettings::default());
    }

    #[test]
    fn zero_deck_size_is_rejected() {
        let config = parse("[deck]\nsize = 0\n");
        assert_eq!(
            config.resolve(EnvOverrides::default()),
            Err(OptionsError::EmptyDeck)
        );
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = parse("[gesture]\nswipe_threshold = -5\n");
        assert!(matches!(
            config.resolve(EnvOverrides::default()),
            Err(OptionsError::InvalidThreshold(_))
        ));
    }

    #[test]
    fn fly_off_inside_threshold_is_rejected() {
        let config = parse("[gesture]\nswipe_threshold = 300\nfly_off_distance = 200\n");
        assert!(matches!(
            config.resolve(EnvOverrides::default()),
            Err(OptionsError::FlyOffTooShort { .. })
        ));
    }

    #[test]
    fn missing_terminal_factor_uses_default() {
        let config = parse("[terminal]\ncolumn_units = 4.0\n");
        let resolved = config.resolve(EnvOverrides::default()).unwrap();
        assert_eq!(resolved.pointer, PointerScale::new(4.0, 16.0));
    }

    #[test]
    fn load_from_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[deck]\nsize = 9").unwrap();
        let config = PawsConfig::load_from(file.path()).unwrap();
        assert_eq!(config.deck.unwrap().size, Some(9));
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[deck\nsize = ").unwrap();
        let err = PawsConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
    }

    #[test]
    fn load_from_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PawsConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("absent.toml"));
    }
}
