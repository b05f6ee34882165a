use super::error::EquityError;
use super::runout::Runout;
use crate::cards::hand::Hand;
use crate::{HOLE_SIZE, MAX_PLAYERS, MIN_PLAYERS};

/// A validated showdown: every player's hole cards, the known board and
/// the dead cards, all pairwise disjoint. Immutable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    holes: Vec<Hand>,
    board: Hand,
    dead: Hand,
    runout: Runout,
}

impl Table {
    pub fn new(holes: Vec<Hand>, board: Hand, dead: Hand) -> Result<Self, EquityError> {
        match holes.len() {
            n if n < MIN_PLAYERS => return Err(EquityError::TooFewPlayers(n)),
            n if n > MAX_PLAYERS => return Err(EquityError::TooManyPlayers(n)),
            _ => {}
        }
        if let Some((player, hole)) = holes
            .iter()
            .enumerate()
            .find(|(_, h)| h.size() != HOLE_SIZE)
        {
            return Err(EquityError::HoleSize {
                player,
                size: hole.size(),
            });
        }
        let excluded = holes
            .iter()
            .copied()
            .chain(std::iter::once(dead))
            .try_fold(Hand::empty(), |seen, group| {
                match Hand::intersection(seen, group).into_iter().next() {
                    Some(card) => Err(EquityError::DuplicateCard(card)),
                    None => Ok(Hand::add(seen, group)),
                }
            })?;
        let runout = Runout::new(board, excluded)?;
        Ok(Self {
            holes,
            board,
            dead,
            runout,
        })
    }

    pub fn players(&self) -> usize {
        self.holes.len()
    }
    pub fn holes(&self) -> &[Hand] {
        &self.holes
    }
    pub fn board(&self) -> Hand {
        self.board
    }
    pub fn dead(&self) -> Hand {
        self.dead
    }
    /// All hole cards and dead cards.
    pub fn excluded(&self) -> Hand {
        self.runout.excluded()
    }
    pub fn runout(&self) -> Runout {
        self.runout
    }
}
