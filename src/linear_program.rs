#![allow(non_snake_case)]
//! Definition of a linear program and its conversion to standard form.
//!
//! To get started, see the documentation of [`Problem`] on how to build a [`Problem`] through the builder pattern.
use crate::{error::LinearProgramError, float::Float};
use ndarray::{concatenate, prelude::*};

/// A maximization problem in augmented/slack form.
///
/// A user-supplied problem
/// ```text
/// max_x c ' x
/// st    A ' x <= b
///           x >= 0
/// ```
/// is stored as the equivalent minimization problem over equality constraints,
/// ```text
/// min_{x,s} -c ' x + 0 ' s
/// st   [ A I ] [x s] == b
///              [x s] >= 0
/// ```
/// with one non-negative slack variable per constraint row. Columns `0..n` of the
/// stored matrix belong to the structural variables, columns `n..n+m` to the slacks.
///
/// To construct a problem, use [`Problem::maximize`] or, when the coefficients come
/// in as plain row vectors of unverified shape, [`Problem::from_rows`].
#[derive(Debug)]
pub struct Problem<F> {
    A: Array2<F>,
    b: Array1<F>,
    c: Array1<F>,
    n_slack: usize,
}

impl<F: Float> Problem<F> {
    /// Build a problem in slack form using the builder pattern.
    ///
    /// Specify the cost vector `c` for which `c'x` will be maximized.
    /// Returns a [`ProblemBuilder`] that takes the inequality constraints.
    pub fn maximize(c: &Array1<F>) -> ProblemBuilder<F> {
        ProblemBuilder::new(c)
    }

    /// Build a problem from plain row vectors, validating rectangularity first.
    ///
    /// Returns [`LinearProgramError::InvalidInput`] if `rows` is empty, contains an
    /// empty row, or contains rows of unequal length, and
    /// [`LinearProgramError::IncompatibleInputDimensions`] if `c` or `b` do not
    /// match the matrix shape. Negative entries in `b` are accepted as-is; such
    /// problems are outside the slack basis' feasible region and the solver will
    /// not detect them as infeasible.
    pub fn from_rows(rows: &[Vec<F>], c: &[F], b: &[F]) -> Result<Problem<F>, LinearProgramError> {
        let m = rows.len();
        let n = rows.first().map_or(0, Vec::len);
        if m == 0 || n == 0 || rows.iter().any(|row| row.len() != n) {
            return Err(LinearProgramError::InvalidInput);
        }
        if c.len() != n || b.len() != m {
            return Err(LinearProgramError::IncompatibleInputDimensions);
        }
        let mut A = Array2::zeros((m, n));
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                A[[i, j]] = v;
            }
        }
        let c = Array1::from(c.to_vec());
        let b = Array1::from(b.to_vec());
        Problem::maximize(&c).subject_to(&A, &b).build()
    }

    /// Return the augmented constraint matrix `[A I]`, of shape m×(n+m).
    pub fn A(&self) -> &Array2<F> {
        &self.A
    }

    /// Return the right-hand-side vector
    pub fn b(&self) -> &Array1<F> {
        &self.b
    }

    /// Return the augmented cost vector `[-c 0]` of the minimization form
    pub fn c(&self) -> &Array1<F> {
        &self.c
    }

    /// The number of structural (user) variables
    pub fn n_structural(&self) -> usize {
        self.c.len() - self.n_slack
    }

    /// The number of slack variables, equal to the number of constraint rows
    pub fn n_slack(&self) -> usize {
        self.n_slack
    }

    /// The initial basis: all slacks, one per constraint row.
    pub(crate) fn initial_basis(&self) -> Vec<usize> {
        (self.n_structural()..self.c.len()).collect()
    }

    /// The initial basic feasible solution: slacks equal to `b`, structural variables at 0.
    pub(crate) fn initial_x(&self) -> Array1<F> {
        let mut x = Array1::zeros(self.c.len());
        let n = self.n_structural();
        for (i, &bi) in self.b.iter().enumerate() {
            x[n + i] = bi;
        }
        x
    }

    /// The inverse of the initial (slack) basis matrix, which is the identity.
    pub(crate) fn initial_basis_inverse(&self) -> Array2<F> {
        Array2::eye(self.n_slack)
    }

    /// Translate the minimized objective of a slack-form vector back to the
    /// maximization value of the original problem.
    pub(crate) fn denormalize_target(&self, x_slack: &Array1<F>) -> F {
        -self.c.dot(x_slack)
    }

    /// Strip the slack entries, keeping the structural variables only.
    pub(crate) fn denormalize_x_into(&self, x_slack: Array1<F>) -> Array1<F> {
        x_slack
            .slice(s![..x_slack.len() - self.n_slack])
            .into_owned()
    }
}

/// Construct a maximization problem in slack form from "≤" constraints.
pub struct ProblemBuilder<'a, F> {
    c: &'a Array1<F>,
    ub: Option<(&'a Array2<F>, &'a Array1<F>)>,
}

impl<'a, F: Float> ProblemBuilder<'a, F> {
    /// Start building a problem. Takes the cost vector `c` for which the goal is to maximize `c'x`.
    pub fn new(c: &'a Array1<F>) -> ProblemBuilder<'a, F> {
        ProblemBuilder { c, ub: None }
    }

    /// Constrain the problem with `A ' x <= b`, one constraint per row of `A`.
    pub fn subject_to(mut self, A: &'a Array2<F>, b: &'a Array1<F>) -> Self {
        self.ub = Some((A, b));
        self
    }

    /// Construct a linear program from the provided inputs, validating the input values.
    /// Converts the problem to slack form: appends an identity block for the slack
    /// variables and negates the costs to obtain a minimization problem.
    ///
    /// Returns an error if no constraints were given, the constraint matrix has no
    /// rows or no columns, or the dimensions of `c` and `b` do not match it.
    pub fn build(self) -> Result<Problem<F>, LinearProgramError> {
        let (A, b) = self.ub.ok_or(LinearProgramError::InvalidInput)?;
        let (m, n) = A.dim();
        if m == 0 || n == 0 {
            return Err(LinearProgramError::InvalidInput);
        }
        if n != self.c.len() || m != b.len() {
            return Err(LinearProgramError::IncompatibleInputDimensions);
        }

        let A = concatenate(Axis(1), &[A.view(), Array2::eye(m).view()])
            .or(Err(LinearProgramError::IncompatibleInputDimensions))?;
        let neg_c = self.c.mapv(|v| -v);
        let c = concatenate(Axis(0), &[neg_c.view(), Array1::zeros(m).view()])
            .or(Err(LinearProgramError::IncompatibleInputDimensions))?;
        Ok(Problem {
            A,
            b: b.clone(),
            c,
            n_slack: m,
        })
    }
}
