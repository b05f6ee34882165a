/// Which counters a [`Report`](super::report::Report) renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// Win means scooping the whole pot; any other share is a tie.
    #[default]
    Combined,
    /// High and low halves counted separately, each as win or tie.
    Split,
}
