//! Board state container with explicit render subscriptions.
//!
//! The store owns exactly one [`BoardState`]. Every change installs a new
//! value in place of the old one and then notifies each subscribed
//! [`BoardView`] with the new state.

use crate::domain::{seed, BoardState, DropEvent};

/// Anything that can draw a board
pub trait BoardView {
    fn render(&mut self, state: &BoardState);
}

impl<F> BoardView for F
where
    F: FnMut(&BoardState),
{
    fn render(&mut self, state: &BoardState) {
        self(state)
    }
}

/// Handle returned by [`BoardStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Holds the current board and its subscribers
pub struct BoardStore {
    state: BoardState,
    views: Vec<(SubscriptionId, Box<dyn BoardView>)>,
    next_subscription: u64,
}

impl BoardStore {
    pub fn new(state: BoardState) -> Self {
        Self {
            state,
            views: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Store seeded with the built-in client dataset
    pub fn seeded() -> Self {
        Self::new(seed::default_board())
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Registers a view and renders the current state into it right away
    pub fn subscribe(&mut self, view: impl BoardView + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;

        let mut view: Box<dyn BoardView> = Box::new(view);
        view.render(&self.state);
        self.views.push((id, view));
        id
    }

    /// Removes a view. Returns false if it was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.views.len();
        self.views.retain(|(sub, _)| *sub != id);
        self.views.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.views.len()
    }

    /// Reconciles a completed drop and installs the resulting board
    pub fn dispatch(&mut self, event: &DropEvent) {
        tracing::debug!(
            card = %event.card,
            lane = %event.target,
            sibling = ?event.sibling.as_ref().map(|s| s.as_str()),
            "drop received"
        );
        let next = self.state.apply(event);
        self.replace(next);
    }

    /// Installs a new board and notifies subscribers
    pub fn replace(&mut self, state: BoardState) {
        self.state = state;
        self.notify();
    }

    fn notify(&mut self) {
        tracing::trace!(views = self.views.len(), "rendering board");
        for (_, view) in self.views.iter_mut() {
            view.render(&self.state);
        }
    }

    /// Drops every subscriber and hands back the final board
    pub fn teardown(self) -> BoardState {
        tracing::debug!(views = self.views.len(), "tearing down board store");
        self.state
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::seeded()
    }
}

impl std::fmt::Debug for BoardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardStore")
            .field("state", &self.state)
            .field("views", &self.views.len())
            .finish()
    }
}
