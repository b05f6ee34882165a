use super::board::Board;
use super::hand::Hand;
use super::hands::SubsetIterator;
use crate::BOARD_USED;
use crate::HOLE_SIZE;
use crate::HOLE_USED;

/// A player's four private Omaha hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly four cards are present.
/// Every showdown hand uses exactly two of them with exactly three board cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// Every legal five-card hand: two of the hole cards plus three of the
    /// board cards. Sixty hands against a complete board.
    pub fn hands(self, board: Board) -> impl Iterator<Item = Hand> {
        let board = Hand::from(board);
        SubsetIterator::from((HOLE_USED, self.0)).flat_map(move |pair| {
            SubsetIterator::from((BOARD_USED, board)).map(move |three| Hand::add(pair, three))
        })
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            HOLE_SIZE => Ok(Self(hand)),
            n => Err(format!("hole must contain exactly {} cards, got {}", HOLE_SIZE, n)),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}
