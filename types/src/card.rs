use std::fmt;

/// Stable identifier of a card within one deck (`cat-<index>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id derived from the card's position in the generated deck.
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        Self(format!("cat-{index}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One card of the deck. Immutable once created.
///
/// The image reference is opaque to the core: nothing checks that it
/// resolves to anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardItem {
    id: CardId,
    image_ref: String,
}

impl CardItem {
    #[must_use]
    pub fn new(id: CardId, image_ref: impl Into<String>) -> Self {
        Self {
            id,
            image_ref: image_ref.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }
}

#[cfg(test)]
mod tests {
    use super::{CardId, CardItem};

    #[test]
    fn index_derived_id() {
        assert_eq!(CardId::for_index(7).as_str(), "cat-7");
        assert_eq!(CardId::for_index(0).to_string(), "cat-0");
    }

    #[test]
    fn card_exposes_fields() {
        let card = CardItem::new(CardId::new("cat-3"), "https://example.test/cat?3");
        assert_eq!(card.id(), &CardId::new("cat-3"));
        assert_eq!(card.image_ref(), "https://example.test/cat?3");
    }
}
