use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::ranking::Ranking;

/// A hand's strength.
///
/// This will always be constructed from a Hand, which is an unordered
/// set of Cards. The strength is determined by the Hand's value, and the
/// kicker cards are used to break ties.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.value
    }
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let value = evaluator.find_ranking();
        let kicks = evaluator.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn kickers_break_ties() {
        assert!(strength("As Ah Kd Qc Js") > strength("Ac Ad Kh Qd Ts"));
        assert!(strength("9s 9h 8d 7c 2s") < strength("9c 9d 8h 7d 3s"));
        assert_eq!(strength("As Kh Qd Jc 9s"), strength("Ac Kd Qh Js 9d"));
    }

    #[test]
    fn flush_kickers_decide_between_flushes() {
        assert!(strength("Ah Kh 9h 5h 3h") > strength("As Ks 9s 5s 2s"));
        assert!(strength("Ah Kh 9h 5h 3h") < strength("As Ks Ts 5s 2s"));
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = strength("As 2h 3d 4c 5s");
        let six = strength("2s 3h 4d 5c 6s");
        assert_eq!(wheel.ranking(), Ranking::Straight(Rank::Five));
        assert!(wheel < six);
        assert!(wheel > strength("As Ah Ad Kc Qs"));
    }
}
