use super::card::Card;
use super::hand::Hand;
use crate::BOARD_SIZE;

/// The community cards visible to all players.
///
/// Holds anywhere from zero to five cards. The known part of a board is
/// fixed for a whole run; runouts complete it to five.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Adds cards to the board. Overlap with existing board is a logic error.
    pub fn add(&mut self, hand: Hand) {
        self.0 = Hand::add(self.0, hand);
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Cards still to come before the river.
    pub fn missing(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.size())
    }
    pub fn is_complete(&self) -> bool {
        self.size() == BOARD_SIZE
    }
}

/// Board isomorphism
/// Board -> Hand is infallible
impl From<Hand> for Board {
    fn from(hand: Hand) -> Self {
        debug_assert!(hand.size() <= BOARD_SIZE);
        Self(hand)
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(self.0)
                .into_iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_at_five() {
        let mut board = Board::from(Hand::try_from("8c 6h 7h").unwrap());
        assert_eq!(board.missing(), 2);
        assert!(!board.is_complete());
        board.add(Hand::try_from("2d 2s").unwrap());
        assert_eq!(board.missing(), 0);
        assert!(board.is_complete());
        assert_eq!(board.to_string(), "2d 2s 6h 7h 8c");
    }
}
