use super::hand::Hand;
use super::rank::Rank;
use crate::LOW_QUALIFIER;

/// An ace-to-five low value for 8-or-better split pots.
///
/// Bit `k` is set when the rank whose low value is `k + 1` is present,
/// so the ace occupies bit 0 and the eight bit 7. Straights and flushes
/// do not count against a low.
///
/// Ordering follows the integer: a smaller value is a STRONGER low,
/// because the highest differing card decides between two lows of five
/// distinct ranks. The wheel (A2345) is the minimum.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Lowball(u8);

impl Lowball {
    /// The low value of a five-card hand, or `None` if it does not qualify:
    /// a qualifying low has five distinct ranks, none above the eight.
    pub fn qualify(hand: Hand) -> Option<Self> {
        let mut bits = 0u16;
        for card in hand {
            let low = card.rank().low();
            match low <= LOW_QUALIFIER && bits & (1 << (low - 1)) == 0 {
                true => bits |= 1 << (low - 1),
                false => return None,
            }
        }
        match bits.count_ones() {
            5 => Some(Self(bits as u8)),
            _ => None,
        }
    }
    /// Ranks making up the low, highest first.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..LOW_QUALIFIER)
            .rev()
            .filter(|bit| self.0 & (1 << bit) != 0)
            .map(|bit| match bit {
                0 => Rank::Ace,
                n => Rank::from(n - 1),
            })
            .collect()
    }
}

impl From<Lowball> for u8 {
    fn from(low: Lowball) -> Self {
        low.0
    }
}

impl std::fmt::Display for Lowball {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.ranks() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn low(s: &str) -> Option<Lowball> {
        Lowball::qualify(Hand::try_from(s).unwrap())
    }

    #[test]
    fn eight_or_better_qualifies() {
        assert!(low("8s 6h 4d 3c 2s").is_some());
        assert!(low("As 2h 3d 4c 5s").is_some());
    }

    #[test]
    fn nine_or_pair_does_not_qualify() {
        assert!(low("9s 6h 4d 3c 2s").is_none());
        assert!(low("8s 8h 4d 3c 2s").is_none());
        assert!(low("Ks Qh Jd Tc 9s").is_none());
    }

    #[test]
    fn wheel_is_nuts() {
        let wheel = low("As 2h 3d 4c 5s").unwrap();
        let six = low("6s 4h 3d 2c As").unwrap();
        let eight = low("8s 7h 6d 5c 4s").unwrap();
        assert!(wheel < six);
        assert!(six < eight);
    }

    #[test]
    fn highest_card_decides() {
        assert!(low("7s 6h 4d 3c 2s").unwrap() < low("8s 4h 3d 2c As").unwrap());
        assert!(low("8s 6h 4d 3c 2s").unwrap() < low("8s 6h 5d 3c 2s").unwrap());
        assert_eq!(low("8s 6h 4d 3c 2s"), low("8d 6c 4s 3h 2d"));
    }

    #[test]
    fn flushes_and_straights_still_count() {
        assert_eq!(low("5s 4s 3s 2s As"), low("5h 4d 3c 2s Ah"));
    }

    #[test]
    fn display_high_to_low() {
        assert_eq!(low("8s 6h 4d As 2s").unwrap().to_string(), "8642A");
    }
}
