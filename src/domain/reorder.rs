//! Drag-and-drop reconciliation.
//!
//! A drop gesture is reduced to three facts: which card moved, which lane
//! received it, and which card (if any) now follows it. [`reorder`] turns
//! those facts into a fresh [`BoardState`] without touching the input.

use crate::domain::board::BoardState;
use crate::domain::card::{Card, CardId, Lane};
use serde::{Deserialize, Serialize};

/// Completed drag gesture, as reported by the drag-and-drop source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEvent {
    pub card: CardId,
    pub target: Lane,
    /// Card immediately after the drop position, `None` for end of lane
    pub sibling: Option<CardId>,
}

impl DropEvent {
    pub fn new(card: impl Into<CardId>, target: Lane, sibling: Option<CardId>) -> Self {
        Self {
            card: card.into(),
            target,
            sibling,
        }
    }

    /// Builds an event from the raw values the drag library hands over: the
    /// moved element's `data-id`, the receiving container's key and the
    /// following element's `data-id` (empty when there is none).
    pub fn from_raw(card_attr: &str, container: &str, sibling_attr: Option<&str>) -> Self {
        let sibling = sibling_attr
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(CardId::new);

        Self {
            card: CardId::new(card_attr.trim()),
            target: Lane::from_container(container),
            sibling,
        }
    }
}

/// Where the moved card is reinserted in the flattened list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InsertAt {
    Index(usize),
    End,
}

/// Moves `moved` into `destination`, placing it before `sibling` (or at the
/// end of the lane), and re-partitions the board.
///
/// `flattened` is backlog ++ in-progress ++ complete in display order. All
/// other cards keep their relative order. A sibling that cannot be found
/// means end of lane. If `moved` itself is not in the list there is nothing
/// to relocate and the input is returned re-partitioned as-is.
pub fn reorder(
    flattened: &[Card],
    moved: &CardId,
    destination: Lane,
    sibling: Option<&CardId>,
) -> BoardState {
    let mut cards = flattened.to_vec();

    let Some(old_index) = cards.iter().position(|card| &card.id == moved) else {
        tracing::warn!(card = %moved, lane = %destination, "dropped card not on board, ignoring");
        return BoardState::from_cards(cards);
    };

    // The slot just before the sibling, measured before removal
    let target = sibling
        .and_then(|id| cards.iter().position(|card| &card.id == id))
        .map_or(InsertAt::End, |sibling_index| {
            // Moving earlier: removal does not shift the sibling, so step
            // back over the -1. Covers the sibling being the card itself.
            if sibling_index <= old_index {
                InsertAt::Index(sibling_index)
            } else {
                InsertAt::Index(sibling_index - 1)
            }
        });

    let card = cards.remove(old_index).with_status(destination);

    let new_index = match target {
        InsertAt::Index(index) => index,
        InsertAt::End => cards.len(),
    };
    cards.insert(new_index, card);

    tracing::debug!(
        card = %moved,
        lane = %destination,
        old_index,
        new_index,
        "reordered card"
    );

    BoardState::from_cards(cards)
}

impl BoardState {
    /// Applies a drop, returning the resulting board
    pub fn apply(&self, event: &DropEvent) -> BoardState {
        reorder(
            &self.flatten(),
            &event.card,
            event.target,
            event.sibling.as_ref(),
        )
    }
}
