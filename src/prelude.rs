#[doc(no_inline)]
pub use crate::error::LinearProgramError;
#[doc(no_inline)]
pub use crate::float::Float;
#[doc(no_inline)]
pub use crate::linear_program::{Problem, ProblemBuilder};
#[doc(no_inline)]
pub use crate::report::{maximize, SolveReport, SolveStatus};
#[doc(no_inline)]
pub use crate::solvers::revised_simplex::{Observer, PivotRule, RevisedSimplex, TraceEvent};
#[doc(no_inline)]
pub use crate::solvers::{OptimizeResult, SolveOutcome, Solver};
