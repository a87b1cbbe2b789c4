//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod hit;
mod options;

pub use animation::{EffectTimer, ease_out_cubic};
pub use hit::{CellRect, HitRegions, HitTarget};
pub use options::{PointerScale, UiOptions};
