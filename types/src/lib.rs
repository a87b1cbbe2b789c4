//! Core domain types for Paws.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory
#![allow(clippy::missing_panics_doc)] // Panics are documented in assertions

mod card;
mod geometry;
mod session;
mod settings;
pub mod ui;

pub use card::{CardId, CardItem};
pub use geometry::{Offset, Point};
pub use session::{Decision, Phase};
pub use settings::{
    DEFAULT_DECK_SIZE, DEFAULT_FLY_OFF, DEFAULT_FLY_OFF_DISTANCE, DEFAULT_LOAD_DELAY,
    DEFAULT_ROTATION_FACTOR, DEFAULT_SWIPE_THRESHOLD, DeckSize, GestureSettings, ImageProvider,
    OptionsError, SessionOptions,
};
