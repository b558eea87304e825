//! Flat call contract for callers that do not want to handle outcomes and
//! errors separately: one status code, a solution vector and an objective
//! value, whatever happened.
use ndarray::Array1;

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{RevisedSimplex, SolveOutcome, Solver};

/// Everything that can come out of a solve call, flattened into one code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// An optimal vertex was found; `solution` and `optimal_value` are meaningful.
    Optimal,
    /// The objective is unbounded above; no solution exists.
    Unbounded,
    /// The iteration cap was hit. A solver failure, not an LP classification.
    MaxIterations,
    /// The constraint matrix was empty, jagged, or had an empty row.
    InvalidInput,
    /// The cost or right-hand-side vector does not match the matrix shape.
    DimensionMismatch,
    /// Anything not anticipated above. No partial solution is returned.
    Error,
}

impl From<LinearProgramError> for SolveStatus {
    fn from(err: LinearProgramError) -> SolveStatus {
        match err {
            LinearProgramError::InvalidInput => SolveStatus::InvalidInput,
            LinearProgramError::IncompatibleInputDimensions => SolveStatus::DimensionMismatch,
            _ => SolveStatus::Error,
        }
    }
}

/// The flattened result of a solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveReport<F> {
    pub status: SolveStatus,
    /// The structural variables of the optimal vertex; empty unless `status`
    /// is [`SolveStatus::Optimal`].
    pub solution: Array1<F>,
    /// The maximized objective value; meaningful only when `status` is
    /// [`SolveStatus::Optimal`].
    pub optimal_value: F,
}

impl<F: Float> SolveReport<F> {
    fn failure(status: SolveStatus) -> SolveReport<F> {
        SolveReport {
            status,
            solution: Array1::zeros(0),
            optimal_value: F::zero(),
        }
    }
}

/// Maximize `c'x` subject to `rows · x <= b` and `x >= 0` with the default
/// [`RevisedSimplex`] solver, reporting every outcome through the status code.
///
/// ```rust
/// use simplex::{maximize, SolveStatus};
///
/// let report = maximize(&[vec![1.0f64, 1.], vec![2., 1.]], &[3., 4.], &[4., 5.]);
/// assert_eq!(report.status, SolveStatus::Optimal);
/// assert!((report.optimal_value - 16.).abs() < 1e-6);
/// ```
pub fn maximize<F: Float>(rows: &[Vec<F>], c: &[F], b: &[F]) -> SolveReport<F> {
    let problem = match Problem::from_rows(rows, c, b) {
        Ok(problem) => problem,
        Err(err) => return SolveReport::failure(err.into()),
    };
    report(&RevisedSimplex::default(), &problem)
}

/// Run `solver` on `problem` and flatten the outcome into a [`SolveReport`].
pub fn report<F: Float, S: Solver<F>>(solver: &S, problem: &Problem<F>) -> SolveReport<F> {
    match solver.solve(problem) {
        Ok(SolveOutcome::Optimal(res)) => SolveReport {
            status: SolveStatus::Optimal,
            optimal_value: *res.fun(),
            solution: res.x().clone(),
        },
        Ok(SolveOutcome::Unbounded) => SolveReport::failure(SolveStatus::Unbounded),
        Ok(SolveOutcome::IterationLimitExceeded) => {
            SolveReport::failure(SolveStatus::MaxIterations)
        }
        Err(err) => SolveReport::failure(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn optimal_report_carries_solution_and_value() {
        let report = maximize(&[vec![1.0f64, 1.], vec![2., 1.]], &[3., 4.], &[4., 5.]);
        assert_eq!(report.status, SolveStatus::Optimal);
        assert_abs_diff_eq!(report.solution, array![0., 4.], epsilon = 1e-6);
        assert_abs_diff_eq!(report.optimal_value, 16., epsilon = 1e-6);
    }

    #[test]
    fn failures_carry_an_empty_solution() {
        let report = maximize(&[vec![1.0f64, -1.]], &[1., 1.], &[1.]);
        assert_eq!(report.status, SolveStatus::Unbounded);
        assert!(report.solution.is_empty());
    }

    #[test]
    fn structural_errors_map_to_their_own_statuses() {
        let jagged = maximize(&[vec![1.0f64, 2.], vec![3.]], &[1., 1.], &[1., 1.]);
        assert_eq!(jagged.status, SolveStatus::InvalidInput);

        let mismatched = maximize(&[vec![1.0f64, 2.]], &[1.], &[1.]);
        assert_eq!(mismatched.status, SolveStatus::DimensionMismatch);

        assert_eq!(
            SolveStatus::from(LinearProgramError::InvalidParameter("x")),
            SolveStatus::Error
        );
    }

    #[test]
    fn iteration_cap_maps_to_max_iterations() {
        let problem =
            Problem::from_rows(&[vec![1.0f64, 1.], vec![2., 1.]], &[3., 4.], &[4., 5.]).unwrap();
        let solver = RevisedSimplex::custom().max_iter(1).build().unwrap();
        assert_eq!(report(&solver, &problem).status, SolveStatus::MaxIterations);
    }
}
