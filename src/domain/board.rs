use crate::domain::card::{Card, CardId, Lane};
use crate::error::{Result, SwimlaneError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Display configuration for one lane column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub title: String,
    pub lane: Lane,
}

impl Column {
    pub fn new(title: impl Into<String>, lane: Lane) -> Self {
        Self {
            title: title.into(),
            lane,
        }
    }
}

/// Board configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub name: String,
    pub columns: Vec<Column>,
}

impl BoardConfig {
    /// Loads a configuration from JSON, rejecting column sets that do not
    /// cover each lane exactly once
    pub fn from_json(json: &str) -> Result<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every lane has exactly one column
    pub fn validate(&self) -> Result<()> {
        for lane in Lane::ALL {
            let count = self.columns.iter().filter(|c| c.lane == lane).count();
            if count != 1 {
                return Err(SwimlaneError::ConfigError(format!(
                    "lane '{}' must have exactly one column, found {}",
                    lane, count
                )));
            }
        }
        Ok(())
    }

    /// Gets the column title for a lane
    pub fn title_for(&self, lane: Lane) -> &str {
        self.columns
            .iter()
            .find(|col| col.lane == lane)
            .map(|col| col.title.as_str())
            .unwrap_or_else(|| lane.title())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            name: "Clients".to_string(),
            columns: Lane::ALL
                .iter()
                .map(|lane| Column::new(lane.title(), *lane))
                .collect(),
        }
    }
}

/// Cards partitioned into the three lanes, each in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardState {
    pub backlog: Vec<Card>,
    pub in_progress: Vec<Card>,
    pub complete: Vec<Card>,
}

impl BoardState {
    /// Partitions cards by status, keeping their relative order
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut state = Self::default();
        for card in cards {
            state.lane_mut(card.status).push(card);
        }
        state
    }

    /// Like [`BoardState::from_cards`], but fails if two cards share an ID
    pub fn try_from_cards(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for card in cards {
            if !seen.insert(card.id.clone()) {
                return Err(SwimlaneError::DuplicateCard(card.id.to_string()));
            }
            unique.push(card);
        }
        Ok(Self::from_cards(unique))
    }

    /// Loads a board snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let state: BoardState = serde_json::from_str(json)?;
        // Re-partition so a card filed under the wrong key lands in its status lane
        Self::try_from_cards(state.flatten())
    }

    /// Serializes the board to pretty JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// All cards as backlog ++ in-progress ++ complete
    pub fn flatten(&self) -> Vec<Card> {
        self.cards().cloned().collect()
    }

    /// Iterates all cards in flattened order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.backlog
            .iter()
            .chain(self.in_progress.iter())
            .chain(self.complete.iter())
    }

    /// Gets the cards in a lane
    pub fn lane(&self, lane: Lane) -> &[Card] {
        match lane {
            Lane::Backlog => &self.backlog,
            Lane::InProgress => &self.in_progress,
            Lane::Complete => &self.complete,
        }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut Vec<Card> {
        match lane {
            Lane::Backlog => &mut self.backlog,
            Lane::InProgress => &mut self.in_progress,
            Lane::Complete => &mut self.complete,
        }
    }

    /// Finds a card by ID
    pub fn find(&self, id: &CardId) -> Option<&Card> {
        self.cards().find(|card| &card.id == id)
    }

    /// Gets the lane currently holding a card
    pub fn lane_of(&self, id: &CardId) -> Option<Lane> {
        self.find(id).map(|card| card.status)
    }

    /// Gets the card immediately after `id` within its lane
    pub fn next_in_lane(&self, id: &CardId) -> Option<&Card> {
        let lane = self.lane(self.lane_of(id)?);
        let pos = lane.iter().position(|card| &card.id == id)?;
        lane.get(pos + 1)
    }

    pub fn len(&self) -> usize {
        self.backlog.len() + self.in_progress.len() + self.complete.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, status: Lane) -> Card {
        Card::new(id, format!("Org {}", id), "", status)
    }

    fn ids(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_from_cards_partitions_in_order() {
        let state = BoardState::from_cards(vec![
            card("1", Lane::InProgress),
            card("2", Lane::Complete),
            card("3", Lane::Backlog),
            card("4", Lane::InProgress),
            card("5", Lane::Backlog),
        ]);

        assert_eq!(ids(&state.backlog), vec!["3", "5"]);
        assert_eq!(ids(&state.in_progress), vec!["1", "4"]);
        assert_eq!(ids(&state.complete), vec!["2"]);
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_flatten_concatenates_lanes() {
        let state = BoardState::from_cards(vec![
            card("1", Lane::Complete),
            card("2", Lane::InProgress),
            card("3", Lane::Backlog),
        ]);

        assert_eq!(ids(&state.flatten()), vec!["3", "2", "1"]);
    }

    #[test]
    fn test_try_from_cards_rejects_duplicates() {
        let result = BoardState::try_from_cards(vec![
            card("1", Lane::Backlog),
            card("1", Lane::Complete),
        ]);

        assert!(matches!(result, Err(SwimlaneError::DuplicateCard(id)) if id == "1"));
    }

    #[test]
    fn test_lookup_helpers() {
        let state = BoardState::from_cards(vec![
            card("a", Lane::Backlog),
            card("b", Lane::Backlog),
            card("c", Lane::Complete),
        ]);

        assert_eq!(state.lane_of(&CardId::new("c")), Some(Lane::Complete));
        assert_eq!(state.lane_of(&CardId::new("zz")), None);
        assert_eq!(
            state.next_in_lane(&CardId::new("a")).map(|c| c.id.as_str()),
            Some("b")
        );
        assert!(state.next_in_lane(&CardId::new("b")).is_none());
        assert!(state.next_in_lane(&CardId::new("c")).is_none());
    }

    #[test]
    fn test_empty_board() {
        let state = BoardState::default();
        assert!(state.is_empty());
        assert!(state.flatten().is_empty());
    }

    #[test]
    fn test_snapshot_uses_camel_case_lanes() {
        let state = BoardState::from_cards(vec![card("1", Lane::InProgress)]);
        let json = state.to_json().unwrap();
        assert!(json.contains("\"inProgress\""));

        let back = BoardState::from_json(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_snapshot_repartitions_misfiled_cards() {
        let json = r#"{
            "backlog": [{"id": "1", "name": "Wiza LLC", "description": "", "status": "complete"}],
            "inProgress": [],
            "complete": []
        }"#;

        let state = BoardState::from_json(json).unwrap();
        assert!(state.backlog.is_empty());
        assert_eq!(ids(&state.complete), vec!["1"]);
    }

    #[test]
    fn test_default_config_covers_every_lane() {
        let config = BoardConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.title_for(Lane::InProgress), "In Progress");
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{
            "name": "Clients",
            "columns": [
                {"title": "Backlooog", "lane": "backlog"},
                {"title": "Doing", "lane": "in-progress"},
                {"title": "Done", "lane": "complete"}
            ]
        }"#;

        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(config.title_for(Lane::Backlog), "Backlooog");
        assert_eq!(config.title_for(Lane::Complete), "Done");
    }

    #[test]
    fn test_config_missing_lane_is_rejected() {
        let json = r#"{
            "name": "Clients",
            "columns": [
                {"title": "Backlog", "lane": "backlog"},
                {"title": "Doing", "lane": "in-progress"}
            ]
        }"#;

        assert!(matches!(
            BoardConfig::from_json(json),
            Err(SwimlaneError::ConfigError(_))
        ));
    }
}
