use super::error::EquityError;
use crate::BOARD_SIZE;
use crate::cards::board::Board;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hands::HandIterator;
use rand::Rng;

/// Completions of a partially known board.
///
/// `known` holds the community cards already revealed and `excluded` every
/// card that can never reach the board (all hole cards and dead cards).
/// Completions are drawn from the unseen pool: the deck minus both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Runout {
    known: Hand,
    excluded: Hand,
}

impl Runout {
    pub fn new(known: Hand, excluded: Hand) -> Result<Self, EquityError> {
        if known.size() > BOARD_SIZE {
            return Err(EquityError::TooManyBoardCards(known.size()));
        }
        if let Some(card) = Hand::intersection(known, excluded).into_iter().next() {
            return Err(EquityError::DuplicateCard(card));
        }
        let runout = Self { known, excluded };
        match runout.missing() <= runout.unseen().size() {
            true => Ok(runout),
            false => Err(EquityError::ExhaustedDeck {
                missing: runout.missing(),
                unseen: runout.unseen().size(),
            }),
        }
    }

    pub fn known(&self) -> Hand {
        self.known
    }
    pub fn excluded(&self) -> Hand {
        self.excluded
    }
    /// Board cards still to come.
    pub fn missing(&self) -> usize {
        Board::from(self.known).missing()
    }
    /// Cards that may still appear on the board.
    pub fn unseen(&self) -> Hand {
        Hand::union(self.known, self.excluded).complement()
    }
    /// Number of distinct completions, C(unseen, missing).
    pub fn combinations(&self) -> usize {
        self.fills().combinations()
    }

    /// Every complete board exactly once, in a deterministic order.
    /// A board that is already complete yields itself once.
    pub fn exhaust(self) -> impl Iterator<Item = Hand> {
        let known = self.known;
        self.fills().map(move |fill| Hand::add(known, fill))
    }

    /// Exactly `m` complete boards. Cards within one board are distinct;
    /// boards are independent of each other.
    pub fn sample<R: Rng>(self, rng: &mut R, m: usize) -> impl Iterator<Item = Hand> {
        (0..m).map(move |_| self.draw(&mut *rng))
    }

    /// One uniformly random complete board.
    pub fn draw<R: Rng>(&self, rng: &mut R) -> Hand {
        let mut board = Board::from(self.known);
        board.add(Deck::from(self.unseen()).deal(self.missing(), rng));
        Hand::from(board)
    }

    fn fills(&self) -> HandIterator {
        HandIterator::from((self.missing(), Hand::union(self.known, self.excluded)))
    }
}
