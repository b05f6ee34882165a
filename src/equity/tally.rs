use super::error::EquityError;
use super::mode::Mode;
use super::report::Report;
use super::settlement::Settlement;
use super::table::Table;
use crate::{Chips, POT, Position, Probability};

/// Running outcome counts for one player.
///
/// `wins`, `ties` and `losses` partition the boards: a win takes the whole
/// pot with no low to split it, a tie is any other nonzero share, and a
/// loss is no share at all. The `hi_*` and `lo_*` counts score each half of
/// the pot separately, so a player who wins high and ties low records one
/// of each. `equity` sums the pot share in [`POT`] units.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Counter {
    pub wins: u64,
    pub ties: u64,
    pub losses: u64,
    pub hi_wins: u64,
    pub hi_ties: u64,
    pub lo_wins: u64,
    pub lo_ties: u64,
    pub equity: Chips,
}

impl Counter {
    pub fn observe(&mut self, settlement: &Settlement, player: Position, weight: u64) {
        let share = settlement.share(player);
        match share {
            0 => self.losses += weight,
            _ if settlement.scoops(player) => self.wins += weight,
            _ => self.ties += weight,
        }
        let high = settlement.high();
        if high.contains(player) {
            match high.len() {
                1 => self.hi_wins += weight,
                _ => self.hi_ties += weight,
            }
        }
        let low = settlement.low();
        if low.contains(player) {
            match low.len() {
                1 => self.lo_wins += weight,
                _ => self.lo_ties += weight,
            }
        }
        self.equity += share * weight;
    }

    pub fn merge(&mut self, other: &Self) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.hi_wins += other.hi_wins;
        self.hi_ties += other.hi_ties;
        self.lo_wins += other.lo_wins;
        self.lo_ties += other.lo_ties;
        self.equity += other.equity;
    }

    /// Average pot share over `boards`, as a fraction of one pot.
    pub fn ev(&self, boards: u64) -> Probability {
        self.equity as Probability / (POT as Probability * boards as Probability)
    }
}

/// Counters for every player plus the number of boards they cover.
///
/// Each worker folds its own `Tally`; partial tallies are summed with
/// [`Tally::merge`], which is associative and commutative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    boards: u64,
    counters: Vec<Counter>,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Self {
            boards: 0,
            counters: vec![Counter::default(); players],
        }
    }
    pub fn boards(&self) -> u64 {
        self.boards
    }
    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Record one settled board `weight` times.
    pub fn observe(&mut self, settlement: &Settlement, weight: u64) {
        self.boards += weight;
        for (player, counter) in self.counters.iter_mut().enumerate() {
            counter.observe(settlement, player, weight);
        }
    }

    pub fn merge(mut self, other: Self) -> Self {
        debug_assert!(self.counters.len() == other.counters.len());
        self.boards += other.boards;
        for (mine, theirs) in self.counters.iter_mut().zip(other.counters.iter()) {
            mine.merge(theirs);
        }
        self
    }

    /// Derive percentages. Fails if no board was ever recorded.
    pub fn finish(self, table: &Table, mode: Mode) -> Result<Report, EquityError> {
        match self.boards {
            0 => Err(EquityError::DegenerateRun),
            _ => Ok(Report::new(table, mode, self.boards, &self.counters)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hand::Hand;
    use crate::equity::evaluate::Evaluate;

    struct Fixed(Vec<(u8, Option<u8>)>);
    impl Evaluate for Fixed {
        type High = u8;
        type Low = u8;
        fn evaluate(&self, hole: Hand, _: Hand) -> Result<(u8, Option<u8>), String> {
            Ok(self.0[u64::from(hole).trailing_zeros() as usize / 4])
        }
    }

    fn settle(script: Vec<(u8, Option<u8>)>) -> Settlement {
        let holes = (0..script.len())
            .map(|i| Hand::from(0xFu64 << (i * 4)))
            .collect::<Vec<Hand>>();
        Settlement::resolve(&Fixed(script), &holes, Hand::empty()).unwrap()
    }

    #[test]
    fn scoop_is_the_only_win() {
        let mut tally = Tally::new(2);
        tally.observe(&settle(vec![(9, None), (1, None)]), 1);
        tally.observe(&settle(vec![(9, Some(1)), (1, Some(2))]), 1);
        tally.observe(&settle(vec![(9, Some(2)), (1, Some(1))]), 1);
        let hero = tally.counters()[0];
        let villain = tally.counters()[1];
        assert_eq!((hero.wins, hero.ties, hero.losses), (1, 2, 0));
        assert_eq!((villain.wins, villain.ties, villain.losses), (0, 1, 2));
        assert_eq!((hero.hi_wins, hero.lo_wins), (3, 1));
        assert_eq!((villain.hi_wins, villain.lo_wins), (0, 1));
        assert_eq!(hero.equity + villain.equity, 3 * POT);
    }

    #[test]
    fn split_counters_see_ties() {
        let mut tally = Tally::new(3);
        tally.observe(&settle(vec![(9, Some(1)), (9, Some(1)), (1, None)]), 1);
        let c = tally.counters();
        assert_eq!((c[0].hi_ties, c[0].lo_ties, c[0].ties), (1, 1, 1));
        assert_eq!((c[2].hi_ties, c[2].lo_ties, c[2].losses), (0, 0, 1));
    }

    #[test]
    fn weight_multiplies() {
        let mut once = Tally::new(2);
        let settlement = settle(vec![(2, None), (2, None)]);
        for _ in 0..5 {
            once.observe(&settlement, 1);
        }
        let mut weighted = Tally::new(2);
        weighted.observe(&settlement, 5);
        assert_eq!(once, weighted);
        assert_eq!(weighted.counters()[0].ev(weighted.boards()), 0.5);
    }

    #[test]
    fn merge_sums_fieldwise() {
        let mut a = Tally::new(2);
        let mut b = Tally::new(2);
        let mut both = Tally::new(2);
        let x = settle(vec![(9, None), (1, None)]);
        let y = settle(vec![(1, Some(3)), (9, Some(4))]);
        a.observe(&x, 1);
        b.observe(&y, 2);
        both.observe(&y, 2);
        both.observe(&x, 1);
        assert_eq!(a.merge(b), both);
    }
}
