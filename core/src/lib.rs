//! Core domain logic for Paws.
//!
//! Everything here is synchronous and clock-free: time only moves when a
//! caller hands in a frame delta. That keeps the gesture and session state
//! machines deterministic under test.

mod controller;
mod deck;
pub mod gesture;
mod scheduler;
mod summary;

pub use controller::{DeckController, ExposedCards, SessionState};
pub use deck::{CatDeck, DeckSource, generate_deck};
pub use gesture::{ContactId, GestureInterpreter, GesturePhase, GestureView, Release};
pub use scheduler::{Scheduler, TimerToken};
pub use summary::{Summary, approval_percentage};
