#![allow(non_snake_case)]
//! Maximization over the unit cube: every variable is bounded by 1 and every
//! cost is 1, so the all-ones vertex is optimal and one pivot per variable is
//! needed to walk there from the slack basis.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;
use simplex::prelude::*;

fn main() {
    let problem_size = 32;

    let A_ub = Array2::<f64>::eye(problem_size);
    let b_ub = Array1::ones(problem_size);
    let c = Array1::ones(problem_size);

    let problem = Problem::maximize(&c).subject_to(&A_ub, &b_ub).build().unwrap();
    let solver = RevisedSimplex::custom().disp(true).build().unwrap();

    match solver.solve(&problem).unwrap() {
        SolveOutcome::Optimal(res) => {
            println!("solution found, maximal value: {}", res.fun());
            println!("required number of pivots: {}", res.iteration());
            assert_abs_diff_eq!(*res.x(), Array1::ones(problem_size), epsilon = 1e-9);
        }
        other => panic!("expected an optimal vertex, got {other:?}"),
    }
}
