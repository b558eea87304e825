use thiserror::Error;

/// Structural failure modes of problem construction and solver configuration.
///
/// Algorithmic outcomes such as an unbounded problem or an exhausted iteration
/// budget are not errors; they are reported through
/// [`SolveOutcome`](crate::solvers::SolveOutcome) because they represent a
/// completed, well-defined computation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinearProgramError {
    #[error("The constraint matrix is empty, or one of its rows is empty or of deviating length.")]
    InvalidInput,
    #[error("The dimensions of your cost- and constraint arrays do not align.")]
    IncompatibleInputDimensions,
    #[error("A parameter was set to an invalid value: {0}")]
    InvalidParameter(&'static str),
}
