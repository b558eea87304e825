//! Solvers for linear programs.
pub mod revised_simplex;

pub use revised_simplex::RevisedSimplex;

use ndarray::Array1;

use crate::{error::LinearProgramError, linear_program::Problem};

/// Solver trait that any solver should implement to make experimentation with different solvers more easy.
pub trait Solver<F> {
    /// Solve a linear programming problem. The algorithmic verdict, including an
    /// unbounded problem or an exhausted iteration budget, is carried by
    /// [`SolveOutcome`]; a [`LinearProgramError`] is only returned for structural
    /// problems with the inputs.
    fn solve(&self, problem: &Problem<F>) -> Result<SolveOutcome<F>, LinearProgramError>;
}

/// The verdict of a completed solve attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome<F> {
    /// An optimal vertex was found.
    Optimal(OptimizeResult<F>),
    /// The objective can be improved without bound; no solution vector exists.
    Unbounded,
    /// The iteration cap was reached before the optimality test was satisfied.
    /// This is a solver failure, not a classification of the problem.
    IterationLimitExceeded,
}

/// An optimal solution and the work it took to find it.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizeResult<F> {
    /// The solution vector
    x: Array1<F>,

    /// The objective value of the original maximization problem
    fun: F,

    /// The optimal basis: for each constraint row, the augmented-problem
    /// column that is basic in it
    basis: Vec<usize>,

    /// The number of pivots needed to find the solution
    iteration: usize,
}

impl<F> OptimizeResult<F> {
    pub(crate) fn new(x: Array1<F>, fun: F, basis: Vec<usize>, iteration: usize) -> Self {
        Self {
            x,
            fun,
            basis,
            iteration,
        }
    }

    /// The optimal basis: for each constraint row, the augmented-problem
    /// column that is basic in it. Columns `n..n+m` are the slack variables.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// The number of pivots needed to find the solution
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// The objective value of the original maximization problem
    pub fn fun(&self) -> &F {
        &self.fun
    }

    /// The solution vector
    pub fn x(&self) -> &Array1<F> {
        &self.x
    }
}
