//! Batch gradient descent with a fixed iteration count.

use log::{debug, trace};

use crate::{Matrix, Vector};

/// Runs `iterations` steps of `θ ← θ − α·(1/m)·grad_fn(θ, X, y, m)` from a copy
/// of `initial_theta` and returns the final parameters.
///
/// There is no convergence test and no divergence check: choosing a stable
/// `alpha` is up to the caller. `m` is `y.len()`; an empty `y` yields NaN.
pub fn gradient_descent<F>(
    x: &Matrix,
    y: &Vector,
    grad_fn: F,
    initial_theta: &Vector,
    alpha: f64,
    iterations: usize,
) -> Vector
where
    F: Fn(&Vector, &Matrix, &Vector, usize) -> Vector,
{
    descend(x, y, &grad_fn, initial_theta, alpha, iterations, |_| {})
}

fn descend<F, S>(
    x: &Matrix,
    y: &Vector,
    grad_fn: &F,
    initial_theta: &Vector,
    alpha: f64,
    iterations: usize,
    mut on_step: S,
) -> Vector
where
    F: Fn(&Vector, &Matrix, &Vector, usize) -> Vector,
    S: FnMut(&Vector),
{
    let m = y.len();
    let step = alpha * (1.0 / m as f64);
    let mut theta = initial_theta.clone();

    debug!(
        "gradient descent: {} iterations, alpha {}, {} samples, {} parameters",
        iterations,
        alpha,
        m,
        theta.len()
    );

    for _ in 0..iterations {
        let gradient = grad_fn(&theta, x, y, m);
        theta = &theta - &(gradient * step);
        on_step(&theta);
    }

    debug!("gradient descent finished at {}", theta);
    theta
}

#[derive(Clone, Debug)]
pub struct GradientDescent {
    learning_rate: f64,
    iterations: usize,
}

impl GradientDescent {
    pub fn new() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        if !(learning_rate > 0.0) {
            panic!("learning_rate must be positive, got {}", learning_rate);
        }
        self.learning_rate = learning_rate;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn optimize<F>(&self, x: &Matrix, y: &Vector, grad_fn: F, initial_theta: &Vector) -> Vector
    where
        F: Fn(&Vector, &Matrix, &Vector, usize) -> Vector,
    {
        gradient_descent(
            x,
            y,
            grad_fn,
            initial_theta,
            self.learning_rate,
            self.iterations,
        )
    }

    /// Like [`optimize`](Self::optimize), also returning `cost_fn` evaluated
    /// after every step.
    pub fn optimize_with_history<F, C>(
        &self,
        x: &Matrix,
        y: &Vector,
        grad_fn: F,
        cost_fn: C,
        initial_theta: &Vector,
    ) -> (Vector, Vec<f64>)
    where
        F: Fn(&Vector, &Matrix, &Vector, usize) -> Vector,
        C: Fn(&Vector) -> f64,
    {
        let mut history = Vec::with_capacity(self.iterations);
        let theta = descend(
            x,
            y,
            &grad_fn,
            initial_theta,
            self.learning_rate,
            self.iterations,
            |theta| {
                let cost = cost_fn(theta);
                trace!("iteration {} cost {}", history.len(), cost);
                history.push(cost);
            },
        );
        (theta, history)
    }
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self::new()
    }
}
