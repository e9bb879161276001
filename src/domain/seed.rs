use crate::domain::board::BoardState;
use crate::domain::card::Card;
use crate::error::Result;

/// Raw `(id, name, description, status)` record
pub type Record<'a> = (&'a str, &'a str, &'a str, &'a str);

const CLIENTS: &[Record<'static>] = &[
    ("1", "Stark, White and Abbott", "Cloned Optimal Architecture", "in-progress"),
    ("2", "Wiza LLC", "Exclusive Bandwidth-Monitored Implementation", "complete"),
    ("3", "Nolan LLC", "Vision-Oriented 4Thgeneration Graphicaluserinterface", "backlog"),
    ("4", "Thompson PLC", "Streamlined Regional Knowledgeuser", "in-progress"),
    ("5", "Walker-Williamson", "Team-Oriented 6Thgeneration Matrix", "in-progress"),
    ("6", "Boehm and Sons", "Automated Systematic Paradigm", "backlog"),
    ("7", "Runolfsson, Hegmann and Block", "Integrated Transitional Strategy", "backlog"),
    ("8", "Schumm-Labadie", "Operative Heuristic Challenge", "backlog"),
    ("9", "Kohler Group", "Re-Contextualized Multi-Tasking Attitude", "backlog"),
    ("10", "Romaguera Inc", "Managed Foreground Toolset", "backlog"),
    ("11", "Reilly-King", "Future-Proofed Interactive Toolset", "complete"),
    ("12", "Emard, Champlin and Runolfsdottir", "Devolved Needs-Based Capability", "backlog"),
    ("13", "Fritsch, Cronin and Wolff", "Open-Source 3Rdgeneration Website", "complete"),
    ("14", "Borer LLC", "Profit-Focused Incremental Orchestration", "backlog"),
    ("15", "Emmerich-Ankunding", "User-Centric Stable Extranet", "in-progress"),
    ("16", "Willms-Abbott", "Progressive Bandwidth-Monitored Access", "in-progress"),
    ("17", "Brekke PLC", "Intuitive User-Facing Customerloyalty", "complete"),
    ("18", "Bins, Toy and Klocko", "Integrated Assymetric Software", "backlog"),
    ("19", "Hodkiewicz-Hayes", "Programmable Systematic Securedline", "backlog"),
    ("20", "Murphy, Lang and Ferry", "Organized Explicit Access", "backlog"),
];

/// Builds cards from raw records, failing on a bad ID or status
pub fn cards_from_records(records: &[Record<'_>]) -> Result<Vec<Card>> {
    records
        .iter()
        .map(|(id, name, description, status)| Card::from_record(id, name, description, status))
        .collect()
}

/// Builds a board from raw records, failing on duplicates as well
pub fn board_from_records(records: &[Record<'_>]) -> Result<BoardState> {
    BoardState::try_from_cards(cards_from_records(records)?)
}

/// The built-in client dataset
pub fn clients() -> Vec<Card> {
    CLIENTS
        .iter()
        .filter_map(|(id, name, description, status)| {
            Card::from_record(id, name, description, status).ok()
        })
        .collect()
}

/// Board seeded with the built-in client dataset
pub fn default_board() -> BoardState {
    BoardState::from_cards(clients())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Lane;
    use crate::error::SwimlaneError;

    #[test]
    fn test_builtin_dataset_is_valid() {
        let cards = cards_from_records(CLIENTS).unwrap();
        assert_eq!(cards.len(), 20);
        assert_eq!(clients(), cards);
        assert!(board_from_records(CLIENTS).is_ok());
    }

    #[test]
    fn test_default_board_partitions() {
        let board = default_board();

        assert_eq!(board.backlog.len(), 11);
        assert_eq!(board.in_progress.len(), 5);
        assert_eq!(board.complete.len(), 4);

        assert_eq!(board.backlog[0].name, "Nolan LLC");
        assert_eq!(board.in_progress[0].id.as_str(), "1");
        assert!(board.complete.iter().all(|c| c.status == Lane::Complete));
    }

    #[test]
    fn test_records_with_empty_status_go_to_backlog() {
        let board = board_from_records(&[("1", "Acme", "Widgets", "")]).unwrap();
        assert_eq!(board.backlog.len(), 1);
    }

    #[test]
    fn test_records_with_duplicate_ids_are_rejected() {
        let result = board_from_records(&[
            ("1", "Acme", "Widgets", "backlog"),
            ("1", "Globex", "Gadgets", "complete"),
        ]);
        assert!(matches!(result, Err(SwimlaneError::DuplicateCard(_))));
    }

    #[test]
    fn test_records_with_unknown_status_are_rejected() {
        let result = cards_from_records(&[("1", "Acme", "Widgets", "blocked")]);
        assert!(matches!(result, Err(SwimlaneError::InvalidLane(_))));
    }
}
