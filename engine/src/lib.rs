//! Session orchestration for Paws.
//!
//! This crate contains the App state machine without TUI dependencies. The
//! renderer publishes [`HitRegions`] each frame, the input layer feeds pointer
//! events back in terminal cells, and the frame loop hands over elapsed time
//! through [`App::tick`].

mod stack;

use std::time::{Duration, Instant};

use tracing::{debug, trace};

pub use paws_config::{EnvOverrides, PawsConfig, Resolved};
pub use paws_core::{
    ContactId, DeckController, DeckSource, GesturePhase, GestureView, Release, SessionState,
    Summary,
};
pub use paws_types::ui::{CellRect, HitRegions, HitTarget, PointerScale, UiOptions};
pub use paws_types::{CardId, CardItem, Decision, Phase, Point, SessionOptions};

use stack::CardStack;

/// One exposed card as the renderer sees it.
#[derive(Debug, Clone, Copy)]
pub struct CardView<'a> {
    pub item: &'a CardItem,
    pub gesture: GestureView,
    /// Only the topmost card accepts pointer input.
    pub interactive: bool,
}

pub struct App {
    controller: DeckController,
    cards: CardStack,
    hit_regions: HitRegions,
    ui_options: UiOptions,
    pointer: PointerScale,
    should_quit: bool,
    last_frame: Instant,
}

impl App {
    /// Build the app from resolved configuration and start the first session.
    #[must_use]
    pub fn new(resolved: Resolved) -> Self {
        let Resolved {
            session,
            ui,
            pointer,
        } = resolved;
        Self::with_controller(DeckController::new(session), ui, pointer)
    }

    /// Start a session on an existing controller, e.g. one with a custom
    /// [`DeckSource`].
    #[must_use]
    pub fn with_controller(
        mut controller: DeckController,
        ui_options: UiOptions,
        pointer: PointerScale,
    ) -> Self {
        let count = controller.options().deck_size();
        controller.start(count);
        let mut app = Self {
            controller,
            cards: CardStack::default(),
            hit_regions: HitRegions::default(),
            ui_options,
            pointer,
            should_quit: false,
            last_frame: Instant::now(),
        };
        app.sync_cards();
        app
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        self.controller.state()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.controller.state().phase()
    }

    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        self.controller.summary()
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        self.controller.options()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    #[must_use]
    pub fn pointer_scale(&self) -> PointerScale {
        self.pointer
    }

    /// Exposed cards in paint order: beneath first, topmost last.
    #[must_use]
    pub fn cards(&self) -> Vec<CardView<'_>> {
        let exposed = self.controller.state().exposed_cards();
        let mut views = Vec::with_capacity(2);
        if let (Some(item), Some(interpreter)) = (exposed.beneath, self.cards.beneath()) {
            views.push(CardView {
                item,
                gesture: interpreter.view(),
                interactive: false,
            });
        }
        if let (Some(item), Some(interpreter)) = (exposed.top, self.cards.top()) {
            views.push(CardView {
                item,
                gesture: interpreter.view(),
                interactive: interpreter.is_topmost(),
            });
        }
        views
    }

    #[must_use]
    pub fn top_phase(&self) -> Option<GesturePhase> {
        self.cards.top().map(paws_core::GestureInterpreter::phase)
    }

    #[must_use]
    pub fn hit_regions(&self) -> &HitRegions {
        &self.hit_regions
    }

    /// The renderer rewrites this every frame.
    pub fn hit_regions_mut(&mut self) -> &mut HitRegions {
        &mut self.hit_regions
    }

    /// Pointer pressed at a terminal cell.
    pub fn pointer_down(&mut self, contact: ContactId, column: u16, row: u16) {
        let target = self.hit_regions.hit(column, row);
        let at = self.pointer.to_point(column, row);
        self.pointer_down_on(target, contact, at);
    }

    /// Pointer pressed on an already hit-tested target.
    pub fn pointer_down_on(&mut self, target: Option<HitTarget>, contact: ContactId, at: Point) {
        match target {
            Some(HitTarget::TopCard) => {
                if let Some(top) = self.cards.top_mut() {
                    top.pointer_down(contact, at);
                }
            }
            Some(HitTarget::BeneathCard) => {
                if let Some(beneath) = self.cards.beneath_mut() {
                    beneath.pointer_down(contact, at);
                }
            }
            Some(HitTarget::LikeButton) => self.decide(Decision::Like),
            Some(HitTarget::DislikeButton) => self.decide(Decision::Dislike),
            Some(HitTarget::RestartButton) => {
                if self.phase() == Phase::Summary {
                    self.restart();
                }
            }
            None => trace!(?contact, "pointer down outside any target"),
        }
    }

    /// Drag capture: moves go to the topmost card wherever the pointer is.
    pub fn pointer_move(&mut self, contact: ContactId, column: u16, row: u16) {
        let at = self.pointer.to_point(column, row);
        self.pointer_move_to(contact, at);
    }

    pub fn pointer_move_to(&mut self, contact: ContactId, at: Point) {
        if let Some(top) = self.cards.top_mut() {
            top.pointer_move(contact, at);
        }
    }

    pub fn pointer_up(&mut self, contact: ContactId) -> Release {
        self.cards
            .top_mut()
            .map_or(Release::Ignored, |top| top.pointer_up(contact))
    }

    /// Advance animations and timers by one frame.
    ///
    /// Controller time moves first so that a timer scheduled by this frame's
    /// decision counts from the end of the frame.
    pub fn tick(&mut self, delta: Duration) {
        self.controller.advance(delta);
        let decision = self
            .cards
            .top_mut()
            .and_then(|top| top.advance(delta));
        if let Some(decision) = decision {
            self.controller.report_decision(decision.liked());
        }
        self.sync_cards();
    }

    /// New deck of the same size. In-flight gestures are dropped.
    pub fn restart(&mut self) {
        debug!("restart requested");
        self.cards.clear();
        self.controller.restart();
        self.sync_cards();
    }

    pub fn frame_elapsed(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        elapsed
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    fn decide(&mut self, decision: Decision) {
        let accepted = self
            .cards
            .top_mut()
            .is_some_and(|top| top.decide(decision));
        if !accepted {
            trace!(decision = decision.as_str(), "button ignored");
        }
    }

    fn sync_cards(&mut self) {
        let settings = self.controller.options().gesture();
        let epoch = self.controller.epoch();
        self.cards
            .sync(self.controller.state().exposed_cards(), epoch, settings);
    }
}
