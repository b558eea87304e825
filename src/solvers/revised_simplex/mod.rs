//! Implementation of the revised simplex method with explicit basis-inverse
//! maintenance.
//!
//! Instead of rewriting the whole tableau at every pivot, the solver keeps the
//! inverse of the current basis matrix and updates it with one eta-matrix
//! (product form of the inverse) multiplication per pivot. Slack columns of
//! the augmented matrix are unit vectors, so pricing them reads a column of
//! the basis inverse instead of taking a matrix-vector product.
//!
//! The method starts from the all-slack basis, which is feasible whenever the
//! right-hand side is non-negative. There is no Phase 1 procedure: a problem
//! with negative right-hand-side entries is not detected as infeasible and may
//! terminate "optimal" at a meaningless vertex. There is no anti-cycling rule
//! either; the iteration cap bounds degenerate pivot sequences.
mod pivot;
mod state;
mod trace;

pub use pivot::PivotRule;
pub use trace::{NoTrace, Observer, PrintTrace, TraceEvent};

use ndarray::Array1;

use crate::error::LinearProgramError;
use crate::float::Float;
use crate::linear_program::Problem;
use crate::solvers::{OptimizeResult, SolveOutcome, Solver};
use pivot::ratio_candidates;
use state::SimplexState;

/// Tolerance below which a reduced cost counts as non-negative and a
/// ratio-test denominator counts as zero.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Hard cap on the number of pivot iterations before the solver gives up.
pub const DEFAULT_ITERATION_LIMIT: usize = 1000;

/// Builder struct to customize the [`RevisedSimplex`] solver.
///
/// After constructing the default solver with [`RevisedSimplexBuilder::new`],
/// use the other methods to update specific settings, and finally call
/// [`build`](RevisedSimplexBuilder::build) to validate the customized settings
/// and create the solver.
pub struct RevisedSimplexBuilder<F> {
    tol: F,
    disp: bool,
    max_iter: usize,
    rule: PivotRule,
}

impl<F: Float> RevisedSimplexBuilder<F> {
    pub(crate) fn new() -> RevisedSimplexBuilder<F> {
        RevisedSimplexBuilder {
            tol: F::cast(DEFAULT_TOLERANCE),
            disp: false,
            max_iter: DEFAULT_ITERATION_LIMIT,
            rule: PivotRule::default(),
        }
    }

    /// Set the numerical tolerance. It governs both the optimality test
    /// (reduced costs above `-tol` do not enter) and the ratio test
    /// (direction components below `tol` are treated as zero), so it trades
    /// spurious pivots on rounding noise against degenerate near-zero steps.
    /// Must be a small positive value.
    pub fn tol(mut self, tol: F) -> Self {
        self.tol = tol;
        self
    }

    /// Set to true to print every pricing pass, ratio test and pivot to stdout.
    pub fn disp(mut self, disp: bool) -> Self {
        self.disp = disp;
        self
    }

    /// Maximum number of pivot iterations before the solver reports
    /// [`SolveOutcome::IterationLimitExceeded`]. This is the sole mitigation
    /// against cycling on degenerate problems.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// The policy that selects the entering column and leaving row, including
    /// its tie-breaks. Currently only [`PivotRule::Dantzig`].
    pub fn pivot_rule(mut self, rule: PivotRule) -> Self {
        self.rule = rule;
        self
    }

    /// Validate the settings and create the solver.
    /// Returns an `InvalidParameter` error if the tolerance is not positive.
    pub fn build(self) -> Result<RevisedSimplex<F>, LinearProgramError> {
        if self.tol <= F::zero() {
            return Err(LinearProgramError::InvalidParameter(
                "the tolerance must be positive",
            ));
        }
        Ok(RevisedSimplex {
            tol: self.tol,
            disp: self.disp,
            max_iter: self.max_iter,
            rule: self.rule,
        })
    }
}

/// Revised simplex solver for maximization problems with "≤" constraints.
///
/// To get started quickly, use the [`default`](RevisedSimplex::default)
/// method to initialize the solver with default parameters. See
/// [`custom`](RevisedSimplex::custom) for customization options through the
/// builder pattern.
#[derive(Debug, PartialEq)]
pub struct RevisedSimplex<F> {
    tol: F,
    disp: bool,
    max_iter: usize,
    rule: PivotRule,
}

impl<F: Float> Default for RevisedSimplex<F> {
    /// The revised simplex solver with default configuration.
    fn default() -> Self {
        RevisedSimplexBuilder::new().build().unwrap()
    }
}

impl<F: Float> Solver<F> for RevisedSimplex<F> {
    fn solve(&self, problem: &Problem<F>) -> Result<SolveOutcome<F>, LinearProgramError> {
        if self.disp {
            self.solve_observed(problem, &mut PrintTrace)
        } else {
            self.solve_observed(problem, &mut NoTrace)
        }
    }
}

enum Loop<F> {
    Optimal {
        x_slack: Array1<F>,
        basis: Vec<usize>,
        pivots: usize,
    },
    Unbounded,
    IterationLimit,
}

impl<F: Float> RevisedSimplex<F> {
    /// Construct a new solver, to be customized through the builder pattern.
    ///
    /// ```rust
    /// use approx::assert_abs_diff_eq;
    /// use ndarray::array;
    /// use simplex::prelude::*;
    ///
    /// let a = array![[1.0f64, 1.], [2., 1.]];
    /// let b = array![4., 5.];
    /// let c = array![3., 4.];
    ///
    /// let problem = Problem::maximize(&c).subject_to(&a, &b).build().unwrap();
    /// let solver = RevisedSimplex::custom().tol(1e-9).build().unwrap();
    ///
    /// match solver.solve(&problem).unwrap() {
    ///     SolveOutcome::Optimal(res) => {
    ///         assert_abs_diff_eq!(*res.x(), array![0., 4.], epsilon = 1e-6);
    ///         assert_abs_diff_eq!(*res.fun(), 16., epsilon = 1e-6);
    ///     }
    ///     other => panic!("expected an optimal vertex, got {other:?}"),
    /// }
    /// ```
    pub fn custom() -> RevisedSimplexBuilder<F> {
        RevisedSimplexBuilder::new()
    }

    /// Like [`Solver::solve`], but reports every pricing pass, ratio test and
    /// pivot to `observer`.
    pub fn solve_observed<O: Observer<F>>(
        &self,
        problem: &Problem<F>,
        observer: &mut O,
    ) -> Result<SolveOutcome<F>, LinearProgramError> {
        Ok(match self.pivot_loop(problem, observer) {
            Loop::Optimal {
                x_slack,
                basis,
                pivots,
            } => {
                let fun = problem.denormalize_target(&x_slack);
                let x = problem.denormalize_x_into(x_slack);
                SolveOutcome::Optimal(OptimizeResult::new(x, fun, basis, pivots))
            }
            Loop::Unbounded => SolveOutcome::Unbounded,
            Loop::IterationLimit => SolveOutcome::IterationLimitExceeded,
        })
    }

    fn pivot_loop<O: Observer<F>>(&self, problem: &Problem<F>, observer: &mut O) -> Loop<F> {
        let mut state = SimplexState::initial(problem);

        for iteration in 1..=self.max_iter {
            let reduced_costs = state.reduced_costs(problem);
            observer.observe(TraceEvent::Pricing {
                iteration,
                reduced_costs: &reduced_costs,
            });

            let entering = match self.rule.entering(&reduced_costs, self.tol) {
                Some(column) => column,
                None => {
                    let basis = state.basis().to_vec();
                    return Loop::Optimal {
                        x_slack: state.into_x(),
                        basis,
                        pivots: iteration - 1,
                    };
                }
            };

            let direction = state.column_through_basis(problem, entering);
            let candidates = ratio_candidates(&state.basic_values(), &direction, self.tol);
            observer.observe(TraceEvent::RatioTest {
                iteration,
                entering,
                ratios: &candidates,
            });

            let (leaving_row, theta) = match self.rule.leaving(&candidates) {
                Some(choice) => choice,
                None => return Loop::Unbounded,
            };
            observer.observe(TraceEvent::Pivot {
                iteration,
                entering,
                leaving_row,
                leaving_variable: state.basis()[leaving_row],
                theta,
            });

            state.pivot(entering, leaving_row, &direction);
        }
        Loop::IterationLimit
    }
}
