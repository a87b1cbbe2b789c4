//! Session state and linear deck advancement.

use std::time::Duration;

use tracing::{debug, info};

use paws_types::{CardItem, DeckSize, Phase, SessionOptions};

use crate::deck::{CatDeck, DeckSource};
use crate::scheduler::Scheduler;
use crate::summary::Summary;

/// State of one session. Only the [`DeckController`] mutates it.
///
/// Invariants:
/// - `current_index` never decreases within a session.
/// - `liked` is the in-order subsequence of `sequence[..current_index]`
///   that received a like.
/// - In `Phase::Summary`, `current_index >= sequence.len()`.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    sequence: Vec<CardItem>,
    current_index: usize,
    liked: Vec<CardItem>,
    phase: Phase,
}

/// The (at most) two cards the presentation layer may draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExposedCards<'a> {
    /// Interactive.
    pub top: Option<&'a CardItem>,
    /// Drawn under the top card, never interactive.
    pub beneath: Option<&'a CardItem>,
}

impl SessionState {
    #[must_use]
    pub fn sequence(&self) -> &[CardItem] {
        &self.sequence
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn liked_items(&self) -> &[CardItem] {
        &self.liked
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Every card has been decided.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.current_index >= self.sequence.len()
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&CardItem> {
        self.sequence.get(self.current_index)
    }

    /// Cards at `current_index` and `current_index + 1`, only while swiping.
    #[must_use]
    pub fn exposed_cards(&self) -> ExposedCards<'_> {
        if self.phase != Phase::Swiping {
            return ExposedCards {
                top: None,
                beneath: None,
            };
        }
        ExposedCards {
            top: self.sequence.get(self.current_index),
            beneath: self.sequence.get(self.current_index + 1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionTimer {
    FinishLoading,
    ShowSummary,
}

pub struct DeckController {
    options: SessionOptions,
    source: Box<dyn DeckSource>,
    state: SessionState,
    timers: Scheduler<SessionTimer>,
}

impl DeckController {
    /// Controller backed by the configured image provider. Call
    /// [`start`](Self::start) to begin the first session.
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        let source = CatDeck::new(options.provider().clone());
        Self::with_source(options, Box::new(source))
    }

    #[must_use]
    pub fn with_source(options: SessionOptions, source: Box<dyn DeckSource>) -> Self {
        Self {
            options,
            source,
            state: SessionState::default(),
            timers: Scheduler::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Bumped by every `start`/`restart`.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.timers.epoch()
    }

    #[must_use]
    pub fn summary(&self) -> Summary<'_> {
        Summary::of(&self.state)
    }

    /// Begin a new session of `count` cards.
    ///
    /// Anything still scheduled from a previous session is discarded first.
    pub fn start(&mut self, count: DeckSize) {
        let dropped = self.timers.invalidate();
        if dropped > 0 {
            debug!(dropped, "discarded pending timers from previous session");
        }

        self.options = self.options.clone().with_deck_size(count);
        self.state = SessionState {
            sequence: self.source.generate(count),
            current_index: 0,
            liked: Vec::new(),
            phase: Phase::Loading,
        };
        info!(
            cards = self.state.len(),
            epoch = self.epoch(),
            "session started"
        );

        let delay = self.options.load_delay();
        if delay.is_zero() {
            self.begin_swiping();
        } else {
            self.timers.schedule(delay, SessionTimer::FinishLoading);
        }
    }

    /// Start over with the same deck size.
    pub fn restart(&mut self) {
        self.start(self.options.deck_size());
    }

    /// Record the decision for the current card.
    ///
    /// Ignored unless swiping with an undecided card left. Returns whether
    /// the decision was applied. Callers report once per resolved card; no
    /// deduplication happens here.
    pub fn report_decision(&mut self, liked: bool) -> bool {
        if self.state.phase != Phase::Swiping {
            debug!(phase = self.state.phase.as_str(), "decision ignored");
            return false;
        }
        let Some(card) = self.state.current_card().cloned() else {
            debug!("decision ignored: deck exhausted");
            return false;
        };

        debug!(card = %card.id(), liked, "decision recorded");
        if liked {
            self.state.liked.push(card);
        }
        self.state.current_index += 1;

        if self.state.is_exhausted() {
            let delay = self.options.summary_delay();
            if delay.is_zero() {
                self.show_summary();
            } else {
                self.timers.schedule(delay, SessionTimer::ShowSummary);
            }
        }
        true
    }

    /// Move controller time forward, running timers of the current session.
    pub fn advance(&mut self, delta: Duration) {
        for timer in self.timers.advance(delta) {
            match timer {
                SessionTimer::FinishLoading if self.state.phase == Phase::Loading => {
                    self.begin_swiping();
                }
                SessionTimer::ShowSummary
                    if self.state.phase == Phase::Swiping && self.state.is_exhausted() =>
                {
                    self.show_summary();
                }
                other => debug!(?other, phase = self.state.phase.as_str(), "timer skipped"),
            }
        }
    }

    fn begin_swiping(&mut self) {
        self.state.current_index = 0;
        self.state.liked.clear();
        self.state.phase = Phase::Swiping;
        debug!("deck ready");
    }

    fn show_summary(&mut self) {
        self.state.phase = Phase::Summary;
        let summary = self.summary();
        info!(
            liked = summary.liked_count(),
            total = summary.total(),
            approval = summary.approval_percentage(),
            "session complete"
        );
    }
}
