//! Structured tracing of the pivot loop.
//!
//! The solver reports every pricing pass, ratio test and pivot to an
//! [`Observer`]. [`NoTrace`] discards the events and is what
//! [`Solver::solve`](crate::solvers::Solver::solve) uses by default;
//! [`PrintTrace`] writes one line per event to stdout and backs the solver's
//! `disp` setting. Tests can record the events to assert on the exact pivot
//! sequence without the solver growing a logging side channel.
use ndarray::Array1;

use crate::float::Float;

/// One step of the pivot loop, borrowed from the solver's working state.
#[derive(Debug, Clone, Copy)]
pub enum TraceEvent<'a, F> {
    /// The reduced costs of all columns at the start of an iteration.
    Pricing {
        iteration: usize,
        reduced_costs: &'a Array1<F>,
    },
    /// The ratio-test candidates (row index, ratio) for the entering column.
    RatioTest {
        iteration: usize,
        entering: usize,
        ratios: &'a [(usize, F)],
    },
    /// The basis exchange that ends the iteration.
    Pivot {
        iteration: usize,
        entering: usize,
        leaving_row: usize,
        leaving_variable: usize,
        theta: F,
    },
}

/// Receives [`TraceEvent`]s as the solver produces them.
pub trait Observer<F> {
    fn observe(&mut self, event: TraceEvent<'_, F>);
}

/// Discards all events.
pub struct NoTrace;

impl<F> Observer<F> for NoTrace {
    fn observe(&mut self, _event: TraceEvent<'_, F>) {}
}

/// Prints one line per event to stdout.
pub struct PrintTrace;

impl<F: Float> Observer<F> for PrintTrace {
    fn observe(&mut self, event: TraceEvent<'_, F>) {
        match event {
            TraceEvent::Pricing {
                iteration,
                reduced_costs,
            } => println!("iter {iteration}: reduced costs {reduced_costs}"),
            TraceEvent::RatioTest {
                iteration,
                entering,
                ratios,
            } => println!("iter {iteration}: column {entering} enters, ratios {ratios:?}"),
            TraceEvent::Pivot {
                iteration,
                entering,
                leaving_row,
                leaving_variable,
                theta,
            } => println!(
                "iter {iteration}: x{entering} replaces x{leaving_variable} in row {leaving_row}, step {theta}"
            ),
        }
    }
}
