use ndarray::{Array1, Array2};

use crate::float::Float;
use crate::linear_program::Problem;

/// The mutable state of one solve call: the basis, the primal vector and the
/// explicit basis inverse.
///
/// Invariants at every iteration boundary: the basis indices are distinct,
/// `basis_inverse` is exactly the inverse of the basis submatrix of the
/// augmented constraint matrix, and the basic entries of `x` equal
/// `basis_inverse · b` while all non-basic entries are zero. All three are
/// maintained incrementally, never recomputed from scratch.
pub(crate) struct SimplexState<F> {
    basis: Vec<usize>,
    x: Array1<F>,
    basis_inverse: Array2<F>,
}

impl<F: Float> SimplexState<F> {
    /// Start from the all-slack basis, which is trivially feasible for `b >= 0`.
    pub(crate) fn initial(problem: &Problem<F>) -> SimplexState<F> {
        SimplexState {
            basis: problem.initial_basis(),
            x: problem.initial_x(),
            basis_inverse: problem.initial_basis_inverse(),
        }
    }

    pub(crate) fn basis(&self) -> &[usize] {
        &self.basis
    }

    pub(crate) fn x(&self) -> &Array1<F> {
        &self.x
    }

    pub(crate) fn into_x(self) -> Array1<F> {
        self.x
    }

    /// The current values of the basic variables, one per constraint row.
    pub(crate) fn basic_values(&self) -> Array1<F> {
        Array1::from_shape_fn(self.basis.len(), |i| self.x[self.basis[i]])
    }

    /// `B_inv · A'_j` for column `j` of the augmented matrix.
    ///
    /// Slack columns are unit vectors, so for them the product is simply a
    /// column of the basis inverse; structural columns take a full
    /// matrix-vector product.
    pub(crate) fn column_through_basis(&self, problem: &Problem<F>, j: usize) -> Array1<F> {
        let n = problem.n_structural();
        if j >= n {
            self.basis_inverse.column(j - n).to_owned()
        } else {
            self.basis_inverse.dot(&problem.A().column(j))
        }
    }

    /// The reduced cost of every column: `c'_j - c'_B · (B_inv · A'_j)`.
    /// Basic columns price out to zero up to rounding.
    pub(crate) fn reduced_costs(&self, problem: &Problem<F>) -> Array1<F> {
        let c = problem.c();
        Array1::from_shape_fn(c.len(), |j| {
            let y = self.column_through_basis(problem, j);
            self.basis
                .iter()
                .enumerate()
                .fold(c[j], |acc, (i, &basic)| acc - c[basic] * y[i])
        })
    }

    /// Exchange `basis[leaving_row]` for `entering` and restore the invariants:
    /// step the basic values along `direction` and premultiply the basis
    /// inverse by the eta matrix of the pivot.
    pub(crate) fn pivot(&mut self, entering: usize, leaving_row: usize, direction: &Array1<F>) {
        let leaving_variable = self.basis[leaving_row];
        let theta = self.x[leaving_variable] / direction[leaving_row];
        for (i, &basic) in self.basis.iter().enumerate() {
            if i != leaving_row {
                self.x[basic] = self.x[basic] - theta * direction[i];
            }
        }
        self.x[leaving_variable] = F::zero();
        self.x[entering] = theta;
        self.basis[leaving_row] = entering;
        self.basis_inverse = eta_matrix(direction, leaving_row).dot(&self.basis_inverse);
    }
}

/// The product-form-of-the-inverse update matrix: the identity except for
/// column `leaving_row`, which holds `1/d_r` on the diagonal and `-d_i/d_r`
/// elsewhere. Premultiplying the basis inverse by this matrix turns it into
/// the inverse of the post-pivot basis.
fn eta_matrix<F: Float>(direction: &Array1<F>, leaving_row: usize) -> Array2<F> {
    let pivot = direction[leaving_row];
    let mut eta = Array2::eye(direction.len());
    for (i, &d) in direction.iter().enumerate() {
        eta[[i, leaving_row]] = if i == leaving_row {
            F::one() / pivot
        } else {
            -d / pivot
        };
    }
    eta
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn example_problem() -> Problem<f64> {
        let a = array![[1., 1.], [2., 1.]];
        let b = array![4., 5.];
        let c = array![3., 4.];
        Problem::maximize(&c).subject_to(&a, &b).build().unwrap()
    }

    #[test]
    fn eta_matrix_values() {
        let eta = eta_matrix(&array![1., 1.], 0);
        assert_abs_diff_eq!(eta, array![[1., 0.], [-1., 1.]], epsilon = 0.0);

        let eta = eta_matrix(&array![2., 4., 1.], 1);
        assert_abs_diff_eq!(
            eta,
            array![[1., -0.5, 0.], [0., 0.25, 0.], [0., -0.25, 1.]],
            epsilon = 1e-15
        );
    }

    #[test]
    fn initial_reduced_costs_equal_the_cost_vector() {
        let problem = example_problem();
        let state = SimplexState::initial(&problem);
        assert_abs_diff_eq!(
            state.reduced_costs(&problem),
            array![-3., -4., 0., 0.],
            epsilon = 1e-12
        );
    }

    #[test]
    fn slack_columns_read_straight_from_the_basis_inverse() {
        let problem = example_problem();
        let state = SimplexState::initial(&problem);
        assert_abs_diff_eq!(
            state.column_through_basis(&problem, 3),
            array![0., 1.],
            epsilon = 0.0
        );
        assert_abs_diff_eq!(
            state.column_through_basis(&problem, 0),
            array![1., 2.],
            epsilon = 0.0
        );
    }

    #[test]
    fn pivot_maintains_the_basis_inverse_and_basic_values() {
        let problem = example_problem();
        let mut state = SimplexState::initial(&problem);

        // bring column 1 into the basis on row 0
        let direction = state.column_through_basis(&problem, 1);
        state.pivot(1, 0, &direction);

        assert_eq!(state.basis(), &[1, 3]);
        // the basis matrix is now [[1, 0], [1, 1]], whose inverse is [[1, 0], [-1, 1]]
        assert_abs_diff_eq!(
            state.basis_inverse,
            array![[1., 0.], [-1., 1.]],
            epsilon = 1e-12
        );
        // x_B must equal B_inv · b = [4, 1]
        assert_abs_diff_eq!(state.x(), &array![0., 4., 0., 1.], epsilon = 1e-12);
        assert_abs_diff_eq!(state.basic_values(), array![4., 1.], epsilon = 1e-12);
    }
}
