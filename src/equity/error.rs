use crate::Position;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// Broad classes of failure, for callers that only need to branch on kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Rejected before any board was generated.
    InvalidInput,
    /// The hand evaluator refused a hole/board pair.
    Evaluation,
    /// Nothing was enumerated, so no percentages exist.
    DegenerateRun,
    /// The deadline passed before the run completed.
    Interrupted,
    /// The worker pool could not be started.
    Runtime,
}

/// Errors that can occur while configuring or running an equity calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquityError {
    TooFewPlayers(usize),
    TooManyPlayers(usize),
    HoleSize { player: Position, size: usize },
    TooManyBoardCards(usize),
    DuplicateCard(Card),
    ExhaustedDeck { missing: usize, unseen: usize },
    Evaluation { player: Position, board: Hand, reason: String },
    DegenerateRun,
    Interrupted { boards: u64 },
    Runtime(String),
}

impl EquityError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooFewPlayers(_)
            | Self::TooManyPlayers(_)
            | Self::HoleSize { .. }
            | Self::TooManyBoardCards(_)
            | Self::DuplicateCard(_)
            | Self::ExhaustedDeck { .. } => ErrorKind::InvalidInput,
            Self::Evaluation { .. } => ErrorKind::Evaluation,
            Self::DegenerateRun => ErrorKind::DegenerateRun,
            Self::Interrupted { .. } => ErrorKind::Interrupted,
            Self::Runtime(_) => ErrorKind::Runtime,
        }
    }
}

impl std::fmt::Display for EquityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooFewPlayers(n) => {
                let least = crate::MIN_PLAYERS;
                write!(f, "bad number of players: {} (need at least {})", n, least)
            }
            Self::TooManyPlayers(n) => {
                let most = crate::MAX_PLAYERS;
                write!(f, "bad number of players: {} (at most {})", n, most)
            }
            Self::HoleSize { player, size } => {
                let expected = crate::HOLE_SIZE;
                write!(f, "player {} holds {} cards, expected {}", player + 1, size, expected)
            }
            Self::TooManyBoardCards(n) => write!(f, "bad number of common cards: {}", n),
            Self::DuplicateCard(card) => write!(f, "card {} appears more than once", card),
            Self::ExhaustedDeck { missing, unseen } => {
                write!(f, "cannot deal {} board cards from {} unseen", missing, unseen)
            }
            Self::Evaluation { player, board, reason } => {
                write!(f, "error evaluating player {} on {}: {}", player + 1, board, reason)
            }
            Self::DegenerateRun => write!(f, "no boards were evaluated"),
            Self::Interrupted { boards } => write!(f, "interrupted after {} boards", boards),
            Self::Runtime(reason) => write!(f, "runtime failure: {}", reason),
        }
    }
}

impl std::error::Error for EquityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds() {
        assert_eq!(EquityError::TooFewPlayers(1).kind(), ErrorKind::InvalidInput);
        let duplicate = EquityError::DuplicateCard(Card::try_from("As").unwrap());
        assert_eq!(duplicate.kind(), ErrorKind::InvalidInput);
        assert_eq!(EquityError::DegenerateRun.kind(), ErrorKind::DegenerateRun);
        assert_eq!(EquityError::Interrupted { boards: 3 }.kind(), ErrorKind::Interrupted);
    }

    #[test]
    fn messages_name_the_problem() {
        let error = EquityError::DuplicateCard(Card::try_from("As").unwrap());
        assert_eq!(error.to_string(), "card As appears more than once");
        let error = EquityError::TooManyBoardCards(6);
        assert_eq!(error.to_string(), "bad number of common cards: 6");
    }
}
