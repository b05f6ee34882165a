use super::mode::Mode;
use super::scoring::Scoring;
use super::table::Table;
use super::tally::Counter;
use crate::Probability;
use crate::cards::card::Card;
use crate::cards::hand::Hand;

/// One player's row of a finished run.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Line {
    pub cards: String,
    #[serde(flatten)]
    pub counter: Counter,
    pub win: Probability,
    pub tie: Probability,
    pub loss: Probability,
    pub hi_win: Probability,
    pub hi_tie: Probability,
    pub lo_win: Probability,
    pub lo_tie: Probability,
    pub ev: Probability,
}

impl Line {
    fn new(hole: Hand, counter: Counter, boards: u64) -> Self {
        let percent = |n: u64| 100.0 * n as Probability / boards as Probability;
        Self {
            cards: spaced(hole),
            counter,
            win: percent(counter.wins),
            tie: percent(counter.ties),
            loss: percent(counter.losses),
            hi_win: percent(counter.hi_wins),
            hi_tie: percent(counter.hi_ties),
            lo_win: percent(counter.lo_wins),
            lo_tie: percent(counter.lo_ties),
            ev: 100.0 * counter.ev(boards),
        }
    }
}

/// Final result of a run: how many boards were evaluated and every
/// player's counts and percentages over them.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    boards: u64,
    mode: Mode,
    board: String,
    dead: String,
    players: Vec<Line>,
    #[serde(skip)]
    scoring: Scoring,
}

impl Report {
    pub(crate) fn new(table: &Table, mode: Mode, boards: u64, counters: &[Counter]) -> Self {
        Self {
            boards,
            mode,
            board: spaced(table.board()),
            dead: spaced(table.dead()),
            players: table
                .holes()
                .iter()
                .zip(counters.iter())
                .map(|(hole, counter)| Line::new(*hole, *counter, boards))
                .collect(),
            scoring: Scoring::default(),
        }
    }
    /// Select the columns rendered by `Display`.
    pub fn scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }
    pub fn boards(&self) -> u64 {
        self.boards
    }
    pub fn mode(&self) -> Mode {
        self.mode
    }
    pub fn lines(&self) -> &[Line] {
        &self.players
    }
}

fn spaced(hand: Hand) -> String {
    Vec::<Card>::from(hand)
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} boards", self.boards)?;
        if !self.board.is_empty() {
            write!(f, " containing {} ", self.board)?;
        }
        if !self.dead.is_empty() {
            write!(f, " with {} removed ", self.dead)?;
        }
        writeln!(f)?;
        match self.scoring {
            Scoring::Combined => {
                writeln!(
                    f,
                    "  cards            win  %win       loss  %lose       tie  %tie      EV"
                )?;
                for line in self.players.iter() {
                    writeln!(
                        f,
                        "  {:<11}  {:>7} {:>6.2}   {:>7} {:>6.2}   {:>7} {:>6.2}     {:>6.2}%",
                        line.cards,
                        line.counter.wins,
                        line.win,
                        line.counter.losses,
                        line.loss,
                        line.counter.ties,
                        line.tie,
                        line.ev,
                    )?;
                }
            }
            Scoring::Split => {
                write!(f, "  cards         hi win %hiwin    hi tie %hitie")?;
                writeln!(f, "    lo win %lowin    lo tie %lotie      EV")?;
                for line in self.players.iter() {
                    write!(
                        f,
                        "  {:<11}  {:>7} {:>6.2}   {:>7} {:>6.2}   ",
                        line.cards,
                        line.counter.hi_wins,
                        line.hi_win,
                        line.counter.hi_ties,
                        line.hi_tie,
                    )?;
                    writeln!(
                        f,
                        "{:>7} {:>6.2}   {:>7} {:>6.2}     {:>6.2}%",
                        line.counter.lo_wins,
                        line.lo_win,
                        line.counter.lo_ties,
                        line.lo_tie,
                        line.ev,
                    )?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Hand {
        Hand::try_from(s).unwrap()
    }

    fn report() -> Report {
        let table = Table::new(
            vec![hand("Kh Tc Ac Th"), hand("2s 3s 4d 5d")],
            hand("8c 6h 7h"),
            hand("Qd"),
        )
        .unwrap();
        let hero = Counter {
            wins: 3,
            ties: 1,
            losses: 0,
            hi_wins: 4,
            equity: 3 * crate::POT + crate::HALF_POT,
            ..Counter::default()
        };
        let villain = Counter {
            ties: 1,
            losses: 3,
            lo_wins: 1,
            equity: crate::HALF_POT,
            ..Counter::default()
        };
        Report::new(&table, Mode::Exhaustive, 4, &[hero, villain])
    }

    #[test]
    fn percentages() {
        let report = report();
        let hero = &report.lines()[0];
        assert_eq!(hero.win, 75.0);
        assert_eq!(hero.tie, 25.0);
        assert_eq!(hero.loss, 0.0);
        assert_eq!(hero.ev, 87.5);
        assert_eq!(report.lines()[1].ev, 12.5);
        assert_eq!(report.lines()[1].lo_win, 25.0);
    }

    #[test]
    fn combined_table() {
        let text = report().to_string();
        let mut rows = text.lines();
        assert_eq!(rows.next(), Some("4 boards containing 6h 7h 8c  with Qd removed "));
        let header = "  cards            win  %win       loss  %lose       tie  %tie      EV";
        let row = "  Tc Th Kh Ac        3  75.00         0   0.00         1  25.00      87.50%";
        assert_eq!(rows.next(), Some(header));
        assert_eq!(rows.next(), Some(row));
        assert_eq!(rows.count(), 1);
    }

    #[test]
    fn split_table() {
        let text = report().scoring(Scoring::Split).to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.lines().nth(1).is_some_and(|header| header.contains("lo win")));
        assert!(text.lines().nth(3).is_some_and(|row| row.starts_with("  2s 3s 4d 5d")));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn json_fields() {
        let json = serde_json::to_value(report()).unwrap();
        assert_eq!(json["boards"], 4);
        assert_eq!(json["players"][0]["wins"], 3);
        assert_eq!(json["players"][1]["lo_win"], 25.0);
    }
}
