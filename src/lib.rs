//! A pure-Rust revised simplex solver for linear programs with inequality constraints.
//!
//! # Linear programs
//!
//! A problem is stated in maximization form:
//!
//! ```text
//!    max_x c'x
//!    st  A x <= b
//!          x >= 0
//! ```
//!
//! The builder converts it to standard (slack) form, and the solver runs the
//! revised simplex method on it: the inverse of the current basis matrix is
//! kept explicitly and updated with one eta-matrix multiplication per pivot,
//! so no tableau is ever rewritten. The initial basis is the all-slack basis,
//! which is feasible whenever `b >= 0`; there is no Phase 1 procedure, so
//! problems with negative right-hand sides are not detected as infeasible.
//!
//! # Example
//! ```
//! use approx::assert_abs_diff_eq;
//! use ndarray::array;
//!
//! use simplex::prelude::*;
//!
//! let a = array![[1.0f64, 1.], [2., 1.]];
//! let b = array![4., 5.];
//! let c = array![3., 4.];
//!
//! let problem = Problem::maximize(&c).subject_to(&a, &b).build().unwrap();
//!
//!     // These are the default values you can overwrite.
//!     // You may omit any option for which the default is good enough for you
//! let solver = RevisedSimplex::custom()
//!     .tol(1e-10)
//!     .max_iter(1000)
//!     .disp(false)
//!     .pivot_rule(PivotRule::Dantzig)
//!     .build()
//!     .unwrap();
//!
//! match solver.solve(&problem).unwrap() {
//!     SolveOutcome::Optimal(res) => {
//!         assert_abs_diff_eq!(*res.x(), array![0., 4.], epsilon = 1e-6);
//!         assert_abs_diff_eq!(*res.fun(), 16., epsilon = 1e-6);
//!     }
//!     other => panic!("expected an optimal vertex, got {other:?}"),
//! }
//! ```
//!
//! Callers that feed in plain row vectors and want a single status code back
//! can use [`maximize`] instead of the builder and outcome types.

pub mod error;
pub(crate) mod float;
pub mod linear_program;
pub mod prelude;
pub mod report;
pub mod solvers;

pub use float::Float;
pub use linear_program::{Problem, ProblemBuilder};
pub use report::{maximize, SolveReport, SolveStatus};
pub use solvers::{OptimizeResult, SolveOutcome};

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use crate::report::{maximize, SolveStatus};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1, Array2};

    /// The solution must respect every constraint and the sign restriction,
    /// and the reported value must match the objective evaluated at it.
    fn assert_feasible_and_consistent(
        A: &Array2<f64>,
        b: &Array1<f64>,
        c: &Array1<f64>,
        solution: &Array1<f64>,
        optimal_value: f64,
    ) {
        for (lhs, &rhs) in A.dot(solution).iter().zip(b) {
            assert!(*lhs <= rhs + 1e-9, "constraint violated: {lhs} > {rhs}");
        }
        for v in solution {
            assert!(*v >= -1e-9, "negative variable: {v}");
        }
        assert_abs_diff_eq!(c.dot(solution), optimal_value, epsilon = 1e-6);
    }

    #[test]
    fn single_variable() {
        let report = maximize(&[vec![1.0f64]], &[1.], &[1.]);
        assert_eq!(report.status, SolveStatus::Optimal);
        assert_abs_diff_eq!(report.solution, array![1.], epsilon = 1e-6);
        assert_abs_diff_eq!(report.optimal_value, 1., epsilon = 1e-6);
    }

    #[test]
    fn two_by_two() {
        let report = maximize(&[vec![1.0f64, 1.], vec![2., 1.]], &[3., 4.], &[4., 5.]);
        assert_eq!(report.status, SolveStatus::Optimal);
        assert_abs_diff_eq!(report.solution, array![0., 4.], epsilon = 1e-6);
        assert_abs_diff_eq!(report.optimal_value, 16., epsilon = 1e-6);
        assert_feasible_and_consistent(
            &array![[1., 1.], [2., 1.]],
            &array![4., 5.],
            &array![3., 4.],
            &report.solution,
            report.optimal_value,
        );
    }

    #[test]
    fn box_constraints() {
        let report = maximize(&[vec![1.0f64, 0.], vec![0., 1.]], &[1., 1.], &[1., 1.]);
        assert_eq!(report.status, SolveStatus::Optimal);
        assert_abs_diff_eq!(report.solution, array![1., 1.], epsilon = 1e-6);
        assert_abs_diff_eq!(report.optimal_value, 2., epsilon = 1e-6);
    }

    #[test]
    fn three_variables() {
        let A = array![[1., 1., 1.], [2., 1., 3.], [1., 2., 1.]];
        let b = array![3., 6., 4.];
        let c = array![2., 3., 4.];
        let report = maximize(
            &[vec![1.0f64, 1., 1.], vec![2., 1., 3.], vec![1., 2., 1.]],
            &[2., 3., 4.],
            &[3., 6., 4.],
        );
        assert_eq!(report.status, SolveStatus::Optimal);
        assert_abs_diff_eq!(report.solution, array![0., 1.2, 1.6], epsilon = 1e-6);
        assert_abs_diff_eq!(report.optimal_value, 10., epsilon = 1e-6);
        assert_feasible_and_consistent(&A, &b, &c, &report.solution, report.optimal_value);
    }

    #[test]
    fn unbounded_problem() {
        let report = maximize(&[vec![1.0f64, -1.]], &[1., 1.], &[1.]);
        assert_eq!(report.status, SolveStatus::Unbounded);
        assert!(report.solution.is_empty());
    }

    #[test]
    fn negative_rhs_reports_optimal() {
        // there is no Phase 1, so this infeasible problem is not detected;
        // the solver terminates "optimal" at a non-meaningful vertex
        let report = maximize(&[vec![1.0f64, 1.]], &[1., 1.], &[-1.]);
        assert_eq!(report.status, SolveStatus::Optimal);
    }

    #[test]
    fn resolving_the_same_input_is_deterministic() {
        let rows = [vec![1.0f64, 1., 1.], vec![2., 1., 3.], vec![1., 2., 1.]];
        let c = [2., 3., 4.];
        let b = [3., 6., 4.];
        let first = maximize(&rows, &c, &b);
        let second = maximize(&rows, &c, &b);
        assert_eq!(first, second);
    }
}
