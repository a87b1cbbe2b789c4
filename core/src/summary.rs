use paws_types::CardItem;

use crate::controller::SessionState;

/// Read-only view over a finished (or in-progress) session.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    liked: &'a [CardItem],
    total: usize,
}

impl<'a> Summary<'a> {
    #[must_use]
    pub fn of(state: &'a SessionState) -> Self {
        Self {
            liked: state.liked_items(),
            total: state.len(),
        }
    }

    #[must_use]
    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn approval_percentage(&self) -> u32 {
        approval_percentage(self.liked.len(), self.total)
    }

    /// Liked cards in the order they were decided.
    #[must_use]
    pub fn liked_items(&self) -> &'a [CardItem] {
        self.liked
    }
}

/// `round(100 * liked / total)`, halves rounding up. Zero for an empty deck.
#[must_use]
pub fn approval_percentage(liked: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let liked = liked.min(total) as u64;
    let total = total as u64;
    ((200 * liked + total) / (2 * total)) as u32
}
