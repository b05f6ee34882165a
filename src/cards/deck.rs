use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] representing the remaining cards, with methods for
/// randomly drawing cards and dealing hands. The caller owns the random
/// source so that parallel samplers can be seeded independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Deck {
    /// Cards left to draw.
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Card {
        debug_assert!(self.0.size() > 0);
        let n = self.0.size();
        let i = rng.random_range(0..n);
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Draws `n` distinct cards, uniformly without replacement.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Hand {
        debug_assert!(n <= self.0.size());
        (0..n)
            .map(|_| self.draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::add)
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn draw_removes_card() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let mut deck = Deck::from(Hand::deck());
        let card = deck.draw(rng);
        assert!(!deck.contains(&card));
        assert_eq!(deck.size(), 51);
    }

    #[test]
    fn deal_stays_inside_deck() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let pool = Hand::try_from("2c 7d 9h Js Qc Ad").unwrap();
        for _ in 0..100 {
            let hand = Deck::from(pool).deal(3, rng);
            assert_eq!(hand.size(), 3);
            assert_eq!(Hand::intersection(hand, pool), hand);
        }
    }

    #[test]
    fn every_card_reachable() {
        let ref mut rng = SmallRng::seed_from_u64(13);
        let pool = Hand::try_from("2c 7d 9h").unwrap();
        let seen = (0..300)
            .map(|_| Deck::from(pool).draw(rng))
            .map(Hand::from)
            .fold(Hand::empty(), Hand::union);
        assert_eq!(seen, pool);
    }
}
