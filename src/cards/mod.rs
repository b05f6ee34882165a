//! Card primitives and Omaha hand evaluation.
//!
//! - [`Card`]: a single card encoded in one byte
//! - [`Hand`]: an unordered set of cards as a 64-bit mask
//! - [`HandIterator`]: every n-card subset of the cards not yet seen
//! - [`SubsetIterator`]: every n-card subset of a small hand
//! - [`Deck`]: uniform random draws for Monte Carlo runouts
//! - [`Hole`]: a player's four private cards
//! - [`Board`]: the community cards
//! - [`Strength`]: high-hand value; [`Lowball`]: 8-or-better low value
pub mod board;
pub use board::*;

pub mod card;
pub use card::*;

pub mod deck;
pub use deck::*;

pub mod evaluator;
pub use evaluator::*;

pub mod hand;
pub use hand::*;

pub mod hands;
pub use hands::*;

pub mod hole;
pub use hole::*;

pub mod kicks;
pub use kicks::*;

pub mod lowball;
pub use lowball::*;

pub mod rank;
pub use rank::*;

pub mod ranking;
pub use ranking::*;

pub mod strength;
pub use strength::*;

pub mod suit;
pub use suit::*;
