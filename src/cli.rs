//! Command line surface of the `omahacmp` binary.
//!
//! ```text
//! omahacmp [-m <iterations>] [-d <dead-cards>]... <p1-cards> .. <p9-cards> [-- <board-cards>]
//! ```
use crate::HOLE_SIZE;
use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::equity::{Calculator, Mode, Scoring, Table, Variant};
use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(
    name = "omahacmp",
    version,
    about = "Win, tie and loss percentages for Omaha Hi/Lo hands",
    long_about = None
)]
pub struct Args {
    /// Hole cards, four per player, given together ("KhTcAcTh") or apart ("Kh Tc Ac Th")
    #[arg(required = true, value_name = "CARDS")]
    pub cards: Vec<String>,
    /// Community cards, after a bare `--`
    #[arg(last = true, value_name = "BOARD")]
    pub common: Vec<String>,
    /// Community cards, as an alternative to `--`
    #[arg(short, long)]
    pub board: Option<String>,
    /// Cards removed from play (repeatable)
    #[arg(short, long)]
    pub dead: Vec<String>,
    /// Sample this many boards instead of enumerating every board
    #[arg(short = 'm', long)]
    pub iterations: Option<usize>,
    /// Seed for Monte Carlo sampling
    #[arg(long)]
    pub seed: Option<u64>,
    /// Worker threads [default: number of cpus]
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// Score high only, without an eight-or-better low
    #[arg(long)]
    pub high: bool,
    /// Report high and low halves separately
    #[arg(long)]
    pub split: bool,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// Give up after this long, e.g. 30s, 5m, 2h
    #[arg(long, value_parser = parse_timeout)]
    pub timeout: Option<Duration>,
    /// More logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Also write debug logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Group the positional cards into fours and validate the table.
    pub fn table(&self) -> anyhow::Result<Table> {
        let cards = Card::parse(&self.cards.join(""))
            .map_err(anyhow::Error::msg)
            .context("bad player cards")?;
        let holes = cards
            .chunks(HOLE_SIZE)
            .map(|chunk| chunk.iter().map(|c| c.to_string()).collect::<String>())
            .map(|hole| Hand::try_from(hole.as_str()))
            .collect::<Result<Vec<Hand>, String>>()
            .map_err(anyhow::Error::msg)
            .context("bad player cards")?;
        let board = self
            .common
            .iter()
            .chain(self.board.iter())
            .cloned()
            .collect::<String>();
        let board = Hand::try_from(board.as_str())
            .map_err(anyhow::Error::msg)
            .context("bad board cards")?;
        let dead = self
            .dead
            .iter()
            .map(|d| Card::parse(d))
            .collect::<Result<Vec<Vec<Card>>, String>>()
            .map_err(anyhow::Error::msg)
            .context("bad dead cards")?
            .into_iter()
            .flatten()
            .map(Hand::from)
            .fold(Hand::empty(), Hand::union);
        Ok(Table::new(holes, board, dead)?)
    }

    pub fn mode(&self) -> Mode {
        match self.iterations {
            Some(m) => Mode::MonteCarlo(m),
            None => Mode::Exhaustive,
        }
    }

    pub fn variant(&self) -> Variant {
        match self.high {
            true => Variant::High,
            false => Variant::HiLo,
        }
    }

    pub fn scoring(&self) -> Scoring {
        match self.split {
            true => Scoring::Split,
            false => Scoring::Combined,
        }
    }

    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn calculator(&self) -> anyhow::Result<Calculator> {
        let mut calculator = Calculator::new(self.table()?)
            .mode(self.mode())
            .variant(self.variant());
        if let Some(threads) = self.threads {
            calculator = calculator.threads(threads);
        }
        if let Some(seed) = self.seed {
            calculator = calculator.seed(seed);
        }
        if let Some(timeout) = self.timeout {
            calculator = calculator.deadline(Instant::now() + timeout);
        }
        Ok(calculator)
    }
}

fn parse_timeout(s: &str) -> Result<Duration, String> {
    crate::parse_duration(s).ok_or_else(|| format!("invalid duration: {} (try 30s, 5m, 2h)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equity::EquityError;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("omahacmp").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn groups_cards_into_holes() {
        let args = parse(&["KhTcAcTh", "2s", "3s", "4d", "5d", "--", "8c", "6h", "7h"]);
        let table = args.table().unwrap();
        assert_eq!(table.players(), 2);
        assert_eq!(table.holes()[1], Hand::try_from("2s 3s 4d 5d").unwrap());
        assert_eq!(table.board(), Hand::try_from("8c 6h 7h").unwrap());
        assert_eq!(args.mode(), Mode::Exhaustive);
    }

    #[test]
    fn options() {
        let args = parse(&[
            "-m", "5000", "-d", "Qd", "-d", "JsQd", "--seed", "9", "--high", "--split", "-vv",
            "--timeout", "30s", "KhTcAcTh", "2s3s4d5d", "-b", "8c6h7h",
        ]);
        let table = args.table().unwrap();
        assert_eq!(table.dead(), Hand::try_from("Qd Js").unwrap());
        assert_eq!(table.board().size(), 3);
        assert_eq!(args.mode(), Mode::MonteCarlo(5000));
        assert_eq!(args.variant(), Variant::High);
        assert_eq!(args.scoring(), Scoring::Split);
        assert_eq!(args.level(), log::LevelFilter::Debug);
        assert_eq!(args.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(Args::try_parse_from(["omahacmp"]).is_err());
        assert!(Args::try_parse_from(["omahacmp", "KhTcAcTh", "--timeout", "soon"]).is_err());
        assert!(Args::try_parse_from(["omahacmp", "KhTcAcTh", "--timeout", "5é"]).is_err());
        assert!(parse(&["KhTcAcTh", "2s3s4d5x"]).table().is_err());
        assert!(parse(&["KhTcAcTh", "2s3s4d5d", "--", "8c", "8c"]).table().is_err());
    }

    #[test]
    fn table_errors_survive_context() {
        let err = parse(&["KhTcAcTh", "2s3s4d"]).table().unwrap_err();
        let err = err.downcast::<EquityError>().unwrap();
        assert_eq!(err, EquityError::HoleSize { player: 1, size: 3 });
        let err = parse(&["KhTcAcTh"]).table().unwrap_err();
        assert_eq!(err.downcast::<EquityError>().unwrap(), EquityError::TooFewPlayers(1));
    }
}
