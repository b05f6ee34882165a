use super::error::EquityError;
use super::evaluate::Evaluate;
use crate::cards::hand::Hand;
use crate::{Chips, HALF_POT, POT, Position, Probability};
use std::cmp::Ordering;

/// A set of seats as a bitmask. Bit `i` is player `i`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seats(u16);

impl Seats {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn only(player: Position) -> Self {
        Self(1 << player)
    }
    pub fn insert(&mut self, player: Position) {
        self.0 |= 1 << player;
    }
    pub fn contains(&self, player: Position) -> bool {
        self.0 & (1 << player) != 0
    }
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    /// Seats in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + use<> {
        let mut bits = self.0;
        std::iter::from_fn(move || match bits {
            0 => None,
            _ => {
                let seat = bits.trailing_zeros() as Position;
                bits &= bits - 1;
                Some(seat)
            }
        })
    }
}

/// The outcome of one complete board: who takes the high half and who, if
/// anyone, takes the low half.
///
/// Shares are whole [`POT`] units so that every board distributes exactly
/// one pot regardless of how many ways it is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    high: Seats,
    low: Seats,
}

impl Settlement {
    /// Evaluate every player on `board` and collect the winners of each side.
    ///
    /// A player strictly better than the best so far replaces the winner
    /// set; an equal player joins it. Players without a qualifying low never
    /// contest the low side. The first evaluator failure aborts the board.
    pub fn resolve<E>(evaluator: &E, holes: &[Hand], board: Hand) -> Result<Self, EquityError>
    where
        E: Evaluate + ?Sized,
    {
        let mut best_high = None::<E::High>;
        let mut best_low = None::<E::Low>;
        let mut high = Seats::empty();
        let mut low = Seats::empty();
        for (player, hole) in holes.iter().enumerate() {
            let (hi, lo) = evaluator
                .evaluate(*hole, board)
                .map_err(|reason| EquityError::Evaluation {
                    player,
                    board,
                    reason,
                })?;
            match best_high.map(|best| hi.cmp(&best)) {
                None | Some(Ordering::Greater) => {
                    best_high = Some(hi);
                    high = Seats::only(player);
                }
                Some(Ordering::Equal) => high.insert(player),
                Some(Ordering::Less) => {}
            }
            if let Some(lo) = lo {
                match best_low.map(|best| lo.cmp(&best)) {
                    None | Some(Ordering::Less) => {
                        best_low = Some(lo);
                        low = Seats::only(player);
                    }
                    Some(Ordering::Equal) => low.insert(player),
                    Some(Ordering::Greater) => {}
                }
            }
        }
        Ok(Self { high, low })
    }

    pub fn high(&self) -> Seats {
        self.high
    }
    pub fn low(&self) -> Seats {
        self.low
    }
    /// Whether some player qualified for low, splitting the pot in halves.
    pub fn split(&self) -> bool {
        !self.low.is_empty()
    }
    /// Sole winner of the whole pot, with no low to split it.
    pub fn scoops(&self, player: Position) -> bool {
        !self.split() && self.high == Seats::only(player)
    }

    /// The player's share of this board's pot, in [`POT`] units.
    pub fn share(&self, player: Position) -> Chips {
        let half = match self.split() {
            true => HALF_POT,
            false => POT,
        };
        let high = match self.high.contains(player) {
            true => half / self.high.len() as Chips,
            false => 0,
        };
        let low = match self.low.contains(player) {
            true => HALF_POT / self.low.len() as Chips,
            false => 0,
        };
        high + low
    }
    /// The player's share of this board's pot, as a fraction of one.
    pub fn fraction(&self, player: Position) -> Probability {
        self.share(player) as Probability / POT as Probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scripted evaluator: each player's hole encodes its index in the
    /// lowest set card, which selects a fixed (high, low) result.
    struct Script(Vec<(u32, Option<u32>)>);
    impl Evaluate for Script {
        type High = u32;
        type Low = u32;
        fn evaluate(&self, hole: Hand, _: Hand) -> Result<(u32, Option<u32>), String> {
            let seat = u64::from(hole).trailing_zeros() as usize / 4;
            self.0.get(seat).copied().ok_or_else(|| String::from("unscripted seat"))
        }
    }

    fn seats(n: usize) -> Vec<Hand> {
        (0..n).map(|i| Hand::from(0xFu64 << (i * 4))).collect()
    }

    fn settle(script: Vec<(u32, Option<u32>)>) -> Settlement {
        let holes = seats(script.len());
        Settlement::resolve(&Script(script), &holes, Hand::empty()).unwrap()
    }

    fn total(settlement: &Settlement, n: usize) -> Chips {
        (0..n).map(|i| settlement.share(i)).sum()
    }

    #[test]
    fn sole_high_scoops() {
        let s = settle(vec![(5, None), (9, None), (7, None)]);
        assert_eq!(s.share(1), POT);
        assert!(s.scoops(1));
        assert_eq!(s.fraction(0), 0.0);
        assert_eq!(total(&s, 3), POT);
    }

    #[test]
    fn two_way_high_tie_without_low() {
        let s = settle(vec![(9, None), (3, None), (9, None)]);
        assert_eq!(s.fraction(0), 0.5);
        assert_eq!(s.fraction(2), 0.5);
        assert_eq!(s.share(1), 0);
        assert!(!s.scoops(0));
        assert_eq!(total(&s, 3), POT);
    }

    #[test]
    fn high_and_low_split() {
        let s = settle(vec![(9, Some(40)), (3, Some(20)), (5, None)]);
        assert!(s.split());
        assert_eq!(s.fraction(0), 0.5);
        assert_eq!(s.fraction(1), 0.5);
        assert_eq!(s.share(2), 0);
    }

    #[test]
    fn scoop_both_halves() {
        let s = settle(vec![(9, Some(20)), (3, Some(40))]);
        assert_eq!(s.share(0), POT);
        assert!(!s.scoops(0));
    }

    #[test]
    fn quartered() {
        let s = settle(vec![(9, Some(20)), (9, None), (3, Some(20))]);
        assert_eq!(s.fraction(0), 0.25 + 0.25);
        assert_eq!(s.fraction(1), 0.25);
        assert_eq!(s.fraction(2), 0.25);
        assert_eq!(total(&s, 3), POT);
    }

    #[test]
    fn prior_best_kept_in_tie_after_reset() {
        let s = settle(vec![(3, None), (7, None), (7, None), (5, None), (7, None)]);
        assert_eq!(s.high().iter().collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(total(&s, 5), POT);
    }

    #[test]
    fn every_split_is_exact() {
        for n in 2..=crate::MAX_PLAYERS {
            let s = settle(vec![(1, Some(1)); n]);
            assert_eq!(total(&s, n), POT);
            let s = settle((0..n).map(|i| (1, (i % 2 == 0).then_some(1))).collect());
            assert_eq!(total(&s, n), POT);
        }
    }

    #[test]
    fn evaluator_failure_names_player() {
        let holes = seats(3);
        let script = Script(vec![(1, None), (2, None)]);
        let err = Settlement::resolve(&script, &holes, Hand::empty()).unwrap_err();
        assert!(matches!(err, EquityError::Evaluation { player: 2, .. }));
    }

    #[test]
    fn seat_iteration() {
        let mut seats = Seats::only(3);
        seats.insert(0);
        seats.insert(8);
        assert_eq!(seats.len(), 3);
        assert_eq!(seats.iter().collect::<Vec<_>>(), vec![0, 3, 8]);
        assert!(Seats::empty().is_empty());
    }
}
