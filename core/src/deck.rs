use paws_types::{CardId, CardItem, DeckSize, ImageProvider};

/// Produces the ordered card sequence for one session.
pub trait DeckSource {
    fn generate(&self, count: DeckSize) -> Vec<CardItem>;
}

/// Index-derived cat cards referencing a remote image provider.
#[derive(Debug, Clone, Default)]
pub struct CatDeck {
    provider: ImageProvider,
}

impl CatDeck {
    #[must_use]
    pub fn new(provider: ImageProvider) -> Self {
        Self { provider }
    }
}

impl DeckSource for CatDeck {
    fn generate(&self, count: DeckSize) -> Vec<CardItem> {
        generate_deck(count, &self.provider)
    }
}

/// Card `i` gets id `cat-i` and the provider's image URL for `i`.
#[must_use]
pub fn generate_deck(count: DeckSize, provider: &ImageProvider) -> Vec<CardItem> {
    (0..count.get())
        .map(|index| CardItem::new(CardId::for_index(index), provider.url_for(index)))
        .collect()
}
