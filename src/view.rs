use crate::domain::{BoardConfig, BoardState};
use crate::store::BoardView;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

/// Formats the board as titled lane sections, one line per card
pub fn render_text(config: &BoardConfig, state: &BoardState) -> String {
    let mut out = String::new();
    for column in &config.columns {
        let cards = state.lane(column.lane);
        let _ = writeln!(out, "== {} ({}) ==", column.title, cards.len());
        for card in cards {
            let _ = writeln!(out, "{:>4}  {} - {}", card.id.as_str(), card.name, card.description);
        }
    }
    out
}

/// Shared handle to the last frame a [`PlainTextView`] rendered
#[derive(Debug, Clone, Default)]
pub struct Frame(Rc<RefCell<String>>);

impl Frame {
    pub fn contents(&self) -> String {
        self.0.borrow().clone()
    }
}

/// View that re-renders the board as plain text on every update
#[derive(Debug)]
pub struct PlainTextView {
    config: BoardConfig,
    frame: Frame,
    renders: usize,
}

impl PlainTextView {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            frame: Frame::default(),
            renders: 0,
        }
    }

    /// Handle that stays readable after the view is moved into a store
    pub fn frame(&self) -> Frame {
        self.frame.clone()
    }

    pub fn renders(&self) -> usize {
        self.renders
    }
}

impl Default for PlainTextView {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl BoardView for PlainTextView {
    fn render(&mut self, state: &BoardState) {
        *self.frame.0.borrow_mut() = render_text(&self.config, state);
        self.renders += 1;
    }
}
