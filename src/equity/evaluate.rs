use crate::BOARD_SIZE;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::lowball::Lowball;
use crate::cards::strength::Strength;

/// Maps one player's hole cards and a complete board to a showdown value.
///
/// `High` is ordered so that greater is stronger. `Low` is ordered so that
/// LESSER is stronger, and `None` means the player has no qualifying low.
/// Implementations must be pure: the calculator invokes them from many
/// threads at once.
pub trait Evaluate: Sync {
    type High: Ord + Copy;
    type Low: Ord + Copy;
    fn evaluate(&self, hole: Hand, board: Hand) -> Result<(Self::High, Option<Self::Low>), String>;
}

/// The built-in Omaha evaluators.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Omaha Hi/Lo, eight or better.
    #[default]
    HiLo,
    /// Omaha high only. Never produces a low.
    High,
}

impl Evaluate for Variant {
    type High = Strength;
    type Low = Lowball;
    fn evaluate(&self, hole: Hand, board: Hand) -> Result<(Strength, Option<Lowball>), String> {
        let hole = Hole::try_from(hole)?;
        if board.size() != BOARD_SIZE {
            let size = board.size();
            return Err(format!("board must contain exactly {} cards, got {}", BOARD_SIZE, size));
        }
        if !Hand::from(hole).disjoint(&board) {
            return Err(format!("hole {} overlaps board {}", hole, board));
        }
        let mut high = None::<Strength>;
        let mut low = None::<Lowball>;
        for hand in hole.hands(Board::from(board)) {
            high = high.max(Some(Strength::from(hand)));
            if let Variant::HiLo = self {
                low = match (low, Lowball::qualify(hand)) {
                    (Some(best), Some(this)) => Some(best.min(this)),
                    (best, this) => best.or(this),
                };
            }
        }
        high.map(|high| (high, low))
            .ok_or_else(|| String::from("no five-card hand available"))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Variant::HiLo => write!(f, "omaha hi/lo 8"),
            Variant::High => write!(f, "omaha hi"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::ranking::Ranking;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    #[test]
    fn must_use_exactly_two_hole_cards() {
        // four spades in hand and one on board is not a flush in omaha
        let board = hand("2s 7h 8d 9c 3h");
        let (high, _) = Variant::HiLo.evaluate(hand("As Ks Qs Js"), board).unwrap();
        assert_eq!(high.ranking(), Ranking::HighCard(Rank::Ace));
    }

    #[test]
    fn must_use_exactly_three_board_cards() {
        // a board straight does not play without two hole cards
        let board = hand("5h 6c 7d 8s 9h");
        let (high, _) = Variant::High.evaluate(hand("Kc Kd 2h 2s"), board).unwrap();
        assert_eq!(high.ranking(), Ranking::OnePair(Rank::King));
    }

    #[test]
    fn best_low_across_combinations() {
        let (_, low) = Variant::HiLo.evaluate(hand("Ac 2d Kh Kd"), hand("3s 4h 8c Qd Js")).unwrap();
        let expected = Lowball::qualify(hand("Ac 2d 3s 4h 8c"));
        assert_eq!(low, expected);
    }

    #[test]
    fn no_low_without_three_low_board_cards() {
        let (_, low) = Variant::HiLo.evaluate(hand("Ac 2d 3h 4s"), hand("5s 9h Tc Qd Js")).unwrap();
        assert_eq!(low, None);
    }

    #[test]
    fn high_variant_never_lows() {
        let (_, low) = Variant::High.evaluate(hand("Ac 2d Kh Kd"), hand("3s 4h 8c Qd Js")).unwrap();
        assert_eq!(low, None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(Variant::HiLo.evaluate(hand("Ac 2d Kh"), hand("3s 4h 8c Qd Js")).is_err());
        assert!(Variant::HiLo.evaluate(hand("Ac 2d Kh Kd"), hand("3s 4h 8c Qd")).is_err());
        assert!(Variant::HiLo.evaluate(hand("Ac 2d Kh Kd"), hand("Ac 4h 8c Qd Js")).is_err());
    }
}
