//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use paws_engine::{
    App, CardId, CardItem, ContactId, DeckController, DeckSource, HitTarget, Point, PointerScale,
    Release, SessionOptions, UiOptions,
};
use paws_types::DeckSize;

pub const FRAME: Duration = Duration::from_millis(16);

/// Deck with fixed names, repeated if more cards are asked for.
pub struct NamedDeck(pub &'static [&'static str]);

impl DeckSource for NamedDeck {
    fn generate(&self, count: DeckSize) -> Vec<CardItem> {
        self.0
            .iter()
            .cycle()
            .take(count.get())
            .map(|name| CardItem::new(CardId::new(*name), format!("memory://{name}")))
            .collect()
    }
}

pub fn options(cards: usize) -> SessionOptions {
    SessionOptions::default().with_deck_size(DeckSize::new(cards).expect("non-zero deck"))
}

pub fn app(options: SessionOptions) -> App {
    App::with_controller(
        DeckController::new(options),
        UiOptions::default(),
        PointerScale::default(),
    )
}

pub fn app_with_deck(options: SessionOptions, deck: NamedDeck) -> App {
    App::with_controller(
        DeckController::with_source(options, Box::new(deck)),
        UiOptions::default(),
        PointerScale::default(),
    )
}

/// Press, move horizontally by `dx` distance units, release.
pub fn drag(app: &mut App, contact: ContactId, dx: f32) -> Release {
    app.pointer_down_on(Some(HitTarget::TopCard), contact, Point::new(0.0, 0.0));
    app.pointer_move_to(contact, Point::new(dx / 2.0, 0.0));
    app.pointer_move_to(contact, Point::new(dx, 0.0));
    app.pointer_up(contact)
}

/// Tick in whole frames until at least `total` has elapsed.
pub fn run_for(app: &mut App, total: Duration) {
    let mut elapsed = Duration::ZERO;
    while elapsed < total {
        app.tick(FRAME);
        elapsed += FRAME;
    }
}

pub fn liked_ids(app: &App) -> Vec<String> {
    app.summary()
        .liked_items()
        .iter()
        .map(|card| card.id().to_string())
        .collect()
}
