use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::SwimlaneError;

/// Stable identifier for a card, as carried by the rendered element's `data-id`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Wraps an identifier without validation
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardId {
    type Err = SwimlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(SwimlaneError::InvalidCardId(s.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One of the three status lanes on the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Lane {
    #[default]
    Backlog,
    InProgress,
    Complete,
}

impl Lane {
    /// Lanes in display order
    pub const ALL: [Lane; 3] = [Lane::Backlog, Lane::InProgress, Lane::Complete];

    /// Wire form of the lane, as stored in a card's `status`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::InProgress => "in-progress",
            Self::Complete => "complete",
        }
    }

    /// Human-readable lane title
    pub fn title(&self) -> &'static str {
        match self {
            Self::Backlog => "Backlog",
            Self::InProgress => "In Progress",
            Self::Complete => "Complete",
        }
    }

    /// Resolves the lane a drop container belongs to.
    ///
    /// Unrecognised containers fall back to the backlog, which is where a
    /// drop lands when the target cannot be matched to a known lane.
    pub fn from_container(key: &str) -> Self {
        match key.trim() {
            "inProgress" | "in-progress" | "in_progress" => Self::InProgress,
            "complete" => Self::Complete,
            _ => Self::Backlog,
        }
    }
}

impl FromStr for Lane {
    type Err = SwimlaneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            // Cards without a status belong to the backlog
            "" | "backlog" => Ok(Self::Backlog),
            "in-progress" => Ok(Self::InProgress),
            "complete" => Ok(Self::Complete),
            other => Err(SwimlaneError::InvalidLane(other.to_string())),
        }
    }
}

impl TryFrom<String> for Lane {
    type Error = SwimlaneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Lane> for String {
    fn from(lane: Lane) -> Self {
        lane.as_str().to_string()
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A client card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    /// Organization name
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub status: Lane,
}

impl Card {
    /// Creates a new card in the given lane
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        description: impl Into<String>,
        status: Lane,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status,
        }
    }

    /// Builds a card from a raw `(id, name, description, status)` record
    pub fn from_record(id: &str, name: &str, description: &str, status: &str) -> crate::Result<Self> {
        Ok(Self {
            id: id.parse()?,
            name: name.to_string(),
            description: description.to_string(),
            status: status.parse()?,
        })
    }

    /// Returns a copy of the card placed in another lane
    pub fn with_status(mut self, status: Lane) -> Self {
        self.status = status;
        self
    }
}
