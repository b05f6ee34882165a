//! Runout enumeration, showdown settlement and equity accumulation.
//!
//! - [`Runout`]: every (or a random sample of) completion of the board
//! - [`Settlement`]: who takes each half of the pot on one complete board
//! - [`Tally`]: per-player counters folded over many settlements
//! - [`Calculator`]: parallel orchestration producing a [`Report`]
pub mod calculator;
pub use calculator::*;

pub mod error;
pub use error::*;

pub mod evaluate;
pub use evaluate::*;

pub mod mode;
pub use mode::*;

pub mod progress;
pub use progress::*;

pub mod report;
pub use report::*;

pub mod runout;
pub use runout::*;

pub mod scoring;
pub use scoring::*;

pub mod settlement;
pub use settlement::*;

pub mod table;
pub use table::*;

pub mod tally;
pub use tally::*;
