//! Interpreters for the two exposed cards, kept in step with the controller.

use paws_core::{ExposedCards, GestureInterpreter};
use paws_types::{CardItem, GestureSettings};

#[derive(Debug, Default)]
pub(crate) struct CardStack {
    epoch: u64,
    top: Option<GestureInterpreter>,
    beneath: Option<GestureInterpreter>,
}

impl CardStack {
    pub(crate) fn top(&self) -> Option<&GestureInterpreter> {
        self.top.as_ref()
    }

    pub(crate) fn top_mut(&mut self) -> Option<&mut GestureInterpreter> {
        self.top.as_mut()
    }

    pub(crate) fn beneath(&self) -> Option<&GestureInterpreter> {
        self.beneath.as_ref()
    }

    pub(crate) fn beneath_mut(&mut self) -> Option<&mut GestureInterpreter> {
        self.beneath.as_mut()
    }

    pub(crate) fn clear(&mut self) {
        self.top = None;
        self.beneath = None;
    }

    /// Match the interpreters to the exposed cards.
    ///
    /// A card that moves from beneath to top keeps its interpreter and gains
    /// the topmost capability. A new session epoch drops everything, since
    /// card ids repeat across decks.
    pub(crate) fn sync(&mut self, exposed: ExposedCards<'_>, epoch: u64, settings: GestureSettings) {
        if epoch != self.epoch {
            self.clear();
            self.epoch = epoch;
        }

        let Some(top_card) = exposed.top else {
            self.clear();
            return;
        };

        let top_id = top_card.id();
        if !self.top.as_ref().is_some_and(|top| top.card() == top_id) {
            let promoted = self.beneath.take().filter(|beneath| beneath.card() == top_id);
            self.top = Some(match promoted {
                Some(mut interpreter) => {
                    interpreter.promote();
                    interpreter
                }
                None => GestureInterpreter::topmost(top_id.clone(), settings),
            });
        }

        let beneath_id = exposed.beneath.map(CardItem::id);
        let current = self.beneath.as_ref().map(GestureInterpreter::card);
        if current != beneath_id {
            self.beneath = beneath_id.map(|id| GestureInterpreter::beneath(id.clone(), settings));
        }
    }
}
