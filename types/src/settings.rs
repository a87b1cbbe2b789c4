//! Resolved session options shared across crates.
//!
//! These types represent fully-validated, resolved configuration state.
//! Raw TOML deserialization structs (with `Option` fields) stay private in
//! `paws-config`. The config loader resolves them into these types at the
//! parse boundary.
//!
//! Existence of a value is the proof of its validity.

use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_DECK_SIZE: usize = 15;
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 100.0;
pub const DEFAULT_FLY_OFF: Duration = Duration::from_millis(300);
pub const DEFAULT_FLY_OFF_DISTANCE: f32 = 1000.0;
/// Degrees of tilt per distance unit of horizontal drag.
pub const DEFAULT_ROTATION_FACTOR: f32 = 0.03;
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

const DEFAULT_PROVIDER: &str = "https://cataas.com";
const DEFAULT_IMAGE_WIDTH: u32 = 500;
const DEFAULT_IMAGE_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("deck size must be at least 1")]
    EmptyDeck,
    #[error("swipe threshold must be a positive finite number, got {0}")]
    InvalidThreshold(f32),
    #[error("fly-off distance {distance} must exceed the swipe threshold {threshold}")]
    FlyOffTooShort { distance: f32, threshold: f32 },
    #[error("rotation factor must be finite, got {0}")]
    InvalidRotation(f32),
    #[error("image provider must not be empty")]
    EmptyProvider,
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroImageSize { width: u32, height: u32 },
}

/// Number of cards generated per session. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckSize(NonZeroUsize);

impl DeckSize {
    pub fn new(count: usize) -> Result<Self, OptionsError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(OptionsError::EmptyDeck)
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for DeckSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_DECK_SIZE).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Drag-to-decision tuning.
///
/// Invariant: the threshold is positive and finite, and the fly-off target
/// lies beyond it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSettings {
    swipe_threshold: f32,
    fly_off: Duration,
    fly_off_distance: f32,
    rotation_factor: f32,
}

impl GestureSettings {
    pub fn new(
        swipe_threshold: f32,
        fly_off: Duration,
        fly_off_distance: f32,
        rotation_factor: f32,
    ) -> Result<Self, OptionsError> {
        if !swipe_threshold.is_finite() || swipe_threshold <= 0.0 {
            return Err(OptionsError::InvalidThreshold(swipe_threshold));
        }
        if !fly_off_distance.is_finite() || fly_off_distance <= swipe_threshold {
            return Err(OptionsError::FlyOffTooShort {
                distance: fly_off_distance,
                threshold: swipe_threshold,
            });
        }
        if !rotation_factor.is_finite() {
            return Err(OptionsError::InvalidRotation(rotation_factor));
        }
        Ok(Self {
            swipe_threshold,
            fly_off,
            fly_off_distance,
            rotation_factor,
        })
    }

    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    #[must_use]
    pub fn fly_off(&self) -> Duration {
        self.fly_off
    }

    #[must_use]
    pub fn fly_off_distance(&self) -> f32 {
        self.fly_off_distance
    }

    #[must_use]
    pub fn rotation_factor(&self) -> f32 {
        self.rotation_factor
    }

    #[must_use]
    pub fn with_fly_off(mut self, fly_off: Duration) -> Self {
        self.fly_off = fly_off;
        self
    }
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            fly_off: DEFAULT_FLY_OFF,
            fly_off_distance: DEFAULT_FLY_OFF_DISTANCE,
            rotation_factor: DEFAULT_ROTATION_FACTOR,
        }
    }
}

/// Where card images are referenced from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProvider {
    base_url: String,
    width: u32,
    height: u32,
}

impl ImageProvider {
    pub fn new(base_url: impl Into<String>, width: u32, height: u32) -> Result<Self, OptionsError> {
        let base_url: String = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(OptionsError::EmptyProvider);
        }
        if width == 0 || height == 0 {
            return Err(OptionsError::ZeroImageSize { width, height });
        }
        Ok(Self {
            base_url: base_url.to_string(),
            width,
            height,
        })
    }

    /// `<provider>/cat?<index>&width=<W>&height=<H>`
    #[must_use]
    pub fn url_for(&self, index: usize) -> String {
        format!(
            "{}/cat?{index}&width={}&height={}",
            self.base_url, self.width, self.height
        )
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for ImageProvider {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PROVIDER.to_string(),
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        }
    }
}

/// Everything a session needs, fixed at `start`.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    deck_size: DeckSize,
    gesture: GestureSettings,
    provider: ImageProvider,
    load_delay: Duration,
    summary_delay: Duration,
}

impl SessionOptions {
    #[must_use]
    pub fn deck_size(&self) -> DeckSize {
        self.deck_size
    }

    #[must_use]
    pub fn gesture(&self) -> GestureSettings {
        self.gesture
    }

    #[must_use]
    pub fn provider(&self) -> &ImageProvider {
        &self.provider
    }

    /// Minimum time the loading screen stays up. Cosmetic.
    #[must_use]
    pub fn load_delay(&self) -> Duration {
        self.load_delay
    }

    /// Pause between the last decision and the summary.
    #[must_use]
    pub fn summary_delay(&self) -> Duration {
        self.summary_delay
    }

    #[must_use]
    pub fn with_deck_size(mut self, deck_size: DeckSize) -> Self {
        self.deck_size = deck_size;
        self
    }

    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureSettings) -> Self {
        self.gesture = gesture;
        self
    }

    #[must_use]
    pub fn with_provider(mut self, provider: ImageProvider) -> Self {
        self.provider = provider;
        self
    }

    #[must_use]
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    #[must_use]
    pub fn with_summary_delay(mut self, delay: Duration) -> Self {
        self.summary_delay = delay;
        self
    }

    /// Collapse every timed transition to zero.
    #[must_use]
    pub fn without_motion(self) -> Self {
        let gesture = self.gesture.with_fly_off(Duration::ZERO);
        self.with_gesture(gesture)
            .with_load_delay(Duration::ZERO)
            .with_summary_delay(Duration::ZERO)
    }
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            deck_size: DeckSize::default(),
            gesture: GestureSettings::default(),
            provider: ImageProvider::default(),
            load_delay: DEFAULT_LOAD_DELAY,
            summary_delay: DEFAULT_FLY_OFF,
        }
    }
}
