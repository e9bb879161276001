//! # Swimlane Core
//!
//! Board state and drag-and-drop reconciliation for a three-lane kanban
//! board (backlog, in progress, complete).
//!
//! The drag-and-drop layer only reports where a gesture ended. All list
//! changes are computed by [`reorder`] and installed wholesale by a
//! [`BoardStore`], which then re-renders every subscribed [`BoardView`].

pub mod domain;
pub mod error;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use domain::{
    board::{BoardConfig, BoardState, Column},
    card::{Card, CardId, Lane},
    reorder::{reorder, DropEvent},
};
pub use error::{Result, SwimlaneError};
pub use store::{BoardStore, BoardView, SubscriptionId};
pub use view::PlainTextView;
