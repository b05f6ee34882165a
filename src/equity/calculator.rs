use super::error::EquityError;
use super::evaluate::{Evaluate, Variant};
use super::mode::Mode;
use super::progress::Progress;
use super::report::Report;
use super::settlement::Settlement;
use super::table::Table;
use super::tally::Tally;
use crate::SAMPLING_CHUNK;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use std::time::Instant;

/// Runs a [`Table`] to completion on a dedicated worker pool.
///
/// Exhaustive runs split the completions across workers. Monte Carlo runs
/// split the iterations into chunks of [`SAMPLING_CHUNK`], and chunk `j`
/// samples from its own generator seeded with `seed + j`: a given seed
/// reproduces the same report whatever the number of threads.
///
/// Each worker folds a private [`Tally`]; the partial tallies are merged
/// once at the end, and nothing is reported before that.
pub struct Calculator<E = Variant> {
    table: Table,
    mode: Mode,
    evaluator: E,
    threads: usize,
    seed: u64,
    deadline: Option<Instant>,
}

impl Calculator<Variant> {
    pub fn new(table: Table) -> Self {
        Self {
            table,
            mode: Mode::default(),
            evaluator: Variant::default(),
            threads: num_cpus::get(),
            seed: rand::random(),
            deadline: None,
        }
    }
}

impl<E: Evaluate> Calculator<E> {
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
    pub fn variant<F: Evaluate>(self, evaluator: F) -> Calculator<F> {
        Calculator {
            table: self.table,
            mode: self.mode,
            evaluator,
            threads: self.threads,
            seed: self.seed,
            deadline: self.deadline,
        }
    }
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    /// Abandon the run with [`EquityError::Interrupted`] once this passes.
    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn run(&self) -> Result<Report, EquityError> {
        let runout = self.table.runout();
        let total = match self.mode {
            Mode::Exhaustive => runout.combinations() as u64,
            Mode::MonteCarlo(m) => m as u64,
        };
        log::info!(
            "evaluating {} boards ({}) for {} players on {} threads",
            total,
            self.mode,
            self.table.players(),
            self.threads,
        );
        log::debug!(
            "known board [{}] dead [{}] unseen {} missing {} seed {}",
            self.table.board(),
            self.table.dead(),
            runout.unseen().size(),
            runout.missing(),
            self.seed,
        );
        let progress = Progress::new(total);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .build()
            .map_err(|e| EquityError::Runtime(e.to_string()))?;
        let tally = pool.install(|| match self.mode {
            Mode::Exhaustive => self.exhaust(&progress),
            Mode::MonteCarlo(m) => self.sample(m, &progress),
        })?;
        log::info!(
            "evaluated {} boards in {:.2?}",
            tally.boards(),
            progress.elapsed()
        );
        tally.finish(&self.table, self.mode)
    }

    fn exhaust(&self, progress: &Progress) -> Result<Tally, EquityError> {
        let players = self.table.players();
        self.table
            .runout()
            .exhaust()
            .collect::<Vec<Hand>>()
            .into_par_iter()
            .try_fold(
                || Tally::new(players),
                |tally, board| self.settle(tally, board, 1, progress),
            )
            .try_reduce(|| Tally::new(players), |a, b| Ok(a.merge(b)))
    }

    fn sample(&self, m: usize, progress: &Progress) -> Result<Tally, EquityError> {
        let players = self.table.players();
        let runout = self.table.runout();
        if Board::from(runout.known()).is_complete() {
            // every sample is the same board
            return match m {
                0 => Ok(Tally::new(players)),
                _ => self.settle(Tally::new(players), runout.known(), m as u64, progress),
            };
        }
        (0..m.div_ceil(SAMPLING_CHUNK))
            .into_par_iter()
            .map(|chunk| {
                let size = SAMPLING_CHUNK.min(m - chunk * SAMPLING_CHUNK);
                let mut rng = SmallRng::seed_from_u64(self.seed.wrapping_add(chunk as u64));
                runout
                    .sample(&mut rng, size)
                    .try_fold(Tally::new(players), |tally, board| {
                        self.settle(tally, board, 1, progress)
                    })
            })
            .try_reduce(|| Tally::new(players), |a, b| Ok(a.merge(b)))
    }

    fn settle(
        &self,
        mut tally: Tally,
        board: Hand,
        weight: u64,
        progress: &Progress,
    ) -> Result<Tally, EquityError> {
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(EquityError::Interrupted {
                boards: progress.ticks(),
            });
        }
        let settlement = Settlement::resolve(&self.evaluator, self.table.holes(), board)?;
        tally.observe(&settlement, weight);
        progress.tick(weight);
        Ok(tally)
    }
}
