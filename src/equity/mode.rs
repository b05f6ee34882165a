/// How board completions are generated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Every completion of the board exactly once.
    #[default]
    Exhaustive,
    /// This many independently sampled completions.
    MonteCarlo(usize),
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Mode::Exhaustive => write!(f, "exhaustive"),
            Mode::MonteCarlo(n) => write!(f, "monte carlo ({} iterations)", n),
        }
    }
}
