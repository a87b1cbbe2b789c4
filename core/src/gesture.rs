//! Per-card drag gesture state machine.
//!
//! ```text
//! Idle --pointer_down--> Dragging --pointer_up (|x| > threshold)--> Resolving --fly-off done--> Idle
//!                           |                                          ^
//!                           +--pointer_up (|x| <= threshold)--> Idle   |
//! Idle/Dragging --decide (button)-----------------------------------+
//! ```
//!
//! Only the topmost card holds the interaction capability. Every entry point
//! checks it first; a card beneath the top ignores all input. Once a card has
//! emitted its decision the capability is revoked, so each card reports at
//! most one decision.

use std::time::Duration;

use tracing::{debug, trace};

use paws_types::ui::{EffectTimer, ease_out_cubic};
use paws_types::{CardId, Decision, GestureSettings, Offset, Point};

/// Identifies one pointer contact (mouse button, touch point).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContactId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
    Resolving,
}

/// Result of releasing the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Not dragging, or a different contact.
    Ignored,
    /// Threshold not crossed; the card returns to rest.
    SnappedBack,
    /// Threshold crossed; the fly-off has started.
    Committed(Decision),
}

#[derive(Debug, Clone)]
enum GestureState {
    Idle,
    Dragging {
        contact: ContactId,
        origin: Point,
        offset: Offset,
    },
    Resolving {
        decision: Decision,
        from: Offset,
        timer: EffectTimer,
    },
}

/// Everything the renderer needs from a card, derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureView {
    pub offset: Offset,
    /// Degrees, positive is clockwise.
    pub rotation: f32,
    pub like_intensity: f32,
    pub dislike_intensity: f32,
    /// Pointer is down; the renderer should not smooth movement.
    pub dragging: bool,
}

#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    card: CardId,
    settings: GestureSettings,
    topmost: bool,
    state: GestureState,
}

impl GestureInterpreter {
    /// Interpreter for the card beneath the top; it ignores input until promoted.
    #[must_use]
    pub fn beneath(card: CardId, settings: GestureSettings) -> Self {
        Self {
            card,
            settings,
            topmost: false,
            state: GestureState::Idle,
        }
    }

    #[must_use]
    pub fn topmost(card: CardId, settings: GestureSettings) -> Self {
        Self {
            topmost: true,
            ..Self::beneath(card, settings)
        }
    }

    /// Grant the interaction capability to a card that moved to the top.
    pub fn promote(&mut self) {
        self.topmost = true;
    }

    #[must_use]
    pub fn card(&self) -> &CardId {
        &self.card
    }

    #[must_use]
    pub fn is_topmost(&self) -> bool {
        self.topmost
    }

    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        match self.state {
            GestureState::Idle => GesturePhase::Idle,
            GestureState::Dragging { .. } => GesturePhase::Dragging,
            GestureState::Resolving { .. } => GesturePhase::Resolving,
        }
    }

    /// Begin a drag. Returns whether the drag started.
    pub fn pointer_down(&mut self, contact: ContactId, at: Point) -> bool {
        if !self.topmost {
            trace!(card = %self.card, "pointer down ignored: not topmost");
            return false;
        }
        if !matches!(self.state, GestureState::Idle) {
            return false;
        }
        debug!(card = %self.card, x = at.x, y = at.y, "drag started");
        self.state = GestureState::Dragging {
            contact,
            origin: at,
            offset: Offset::ZERO,
        };
        true
    }

    pub fn pointer_move(&mut self, contact: ContactId, at: Point) {
        if !self.topmost {
            return;
        }
        if let GestureState::Dragging {
            contact: tracked,
            origin,
            offset,
        } = &mut self.state
            && *tracked == contact
        {
            *offset = at - *origin;
        }
    }

    pub fn pointer_up(&mut self, contact: ContactId) -> Release {
        if !self.topmost {
            return Release::Ignored;
        }
        let offset = match self.state {
            GestureState::Dragging {
                contact: tracked,
                offset,
                ..
            } if tracked == contact => offset,
            _ => return Release::Ignored,
        };

        if offset.x.abs() > self.settings.swipe_threshold() {
            let decision = Decision::from_liked(offset.x > 0.0);
            self.begin_fly_off(decision, offset);
            Release::Committed(decision)
        } else {
            debug!(card = %self.card, dx = offset.x, "drag below threshold, snapping back");
            self.state = GestureState::Idle;
            Release::SnappedBack
        }
    }

    /// Programmatic decision (button press). Skips dragging and starts the
    /// fly-off from wherever the card currently is.
    pub fn decide(&mut self, decision: Decision) -> bool {
        if !self.topmost {
            trace!(card = %self.card, "decision ignored: not topmost");
            return false;
        }
        let from = match self.state {
            GestureState::Idle => Offset::ZERO,
            GestureState::Dragging { offset, .. } => offset,
            GestureState::Resolving { .. } => return false,
        };
        self.begin_fly_off(decision, from);
        true
    }

    /// Advance the fly-off. Returns the decision exactly once, when the
    /// animation completes; the card then gives up the top capability.
    pub fn advance(&mut self, delta: Duration) -> Option<Decision> {
        let GestureState::Resolving {
            decision, timer, ..
        } = &mut self.state
        else {
            return None;
        };
        timer.advance(delta);
        if !timer.is_finished() {
            return None;
        }

        let decision = *decision;
        debug!(card = %self.card, decision = decision.as_str(), "card resolved");
        self.state = GestureState::Idle;
        self.topmost = false;
        Some(decision)
    }

    #[must_use]
    pub fn offset(&self) -> Offset {
        match &self.state {
            GestureState::Idle => Offset::ZERO,
            GestureState::Dragging { offset, .. } => *offset,
            GestureState::Resolving {
                decision,
                from,
                timer,
            } => {
                let target = Offset::new(
                    decision.direction() * self.settings.fly_off_distance(),
                    from.y,
                );
                from.lerp(target, ease_out_cubic(timer.progress()))
            }
        }
    }

    #[must_use]
    pub fn view(&self) -> GestureView {
        let offset = self.offset();
        let (like_intensity, dislike_intensity) =
            intensities(offset, self.settings.swipe_threshold());
        GestureView {
            offset,
            rotation: rotation(offset, self.settings.rotation_factor()),
            like_intensity,
            dislike_intensity,
            dragging: matches!(self.state, GestureState::Dragging { .. }),
        }
    }

    fn begin_fly_off(&mut self, decision: Decision, from: Offset) {
        debug!(card = %self.card, decision = decision.as_str(), "fly-off started");
        self.state = GestureState::Resolving {
            decision,
            from,
            timer: EffectTimer::new(self.settings.fly_off()),
        };
    }
}

/// Tilt in degrees, linear in horizontal offset.
#[must_use]
pub fn rotation(offset: Offset, factor: f32) -> f32 {
    offset.x * factor
}

/// `(like, dislike)` indicator strengths in `[0, 1]`. Only the side the card
/// is leaning toward is non-zero.
#[must_use]
pub fn intensities(offset: Offset, threshold: f32) -> (f32, f32) {
    let strength = (offset.x.abs() / threshold).min(1.0);
    if offset.x > 0.0 {
        (strength, 0.0)
    } else if offset.x < 0.0 {
        (0.0, strength)
    } else {
        (0.0, 0.0)
    }
}
