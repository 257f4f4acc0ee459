//! Finite-difference gradients for validating analytic ones.
//!
//! ```rust
//! use gradlin::{check_gradient, cost, grad};
//! use ndarray::array;
//!
//! let x = array![[1.0, 0.5], [1.0, 1.5], [1.0, -2.0]];
//! let y = array![1.0, 0.0, 2.0];
//! let theta = array![0.3, -0.7];
//!
//! let report = check_gradient(|t| cost(&x, &y, t), &grad(&x, &y, &theta), &theta, 1e-4);
//! assert!(report.passes(1e-7));
//! ```

use log::debug;

use crate::Vector;

/// Central-difference estimate of the gradient of `cost_fn` at `theta`.
///
/// Each coordinate is perturbed alone by `±epsilon` and restored before the
/// next one, giving `(J(θ+εeᵢ) − J(θ−εeᵢ)) / 2ε` with `O(ε²)` truncation
/// error. Too small an `epsilon` trades that for cancellation error; `1e-4` is
/// a reasonable default. `epsilon` is not validated.
pub fn numerical_gradient<C>(cost_fn: C, theta: &Vector, epsilon: f64) -> Vector
where
    C: Fn(&Vector) -> f64,
{
    let mut num_grad = Vector::zeros(theta.len());
    let mut probe = theta.clone();

    for i in 0..theta.len() {
        let original = probe[i];

        probe[i] = original - epsilon;
        let loss_minus = cost_fn(&probe);
        probe[i] = original + epsilon;
        let loss_plus = cost_fn(&probe);
        probe[i] = original;

        num_grad[i] = (loss_plus - loss_minus) / (2.0 * epsilon);
    }

    num_grad
}

/// `‖a − b‖ / (‖a‖ + ‖b‖)`, zero when both vectors are zero.
pub fn relative_difference(a: &Vector, b: &Vector) -> f64 {
    let diff = a - b;
    let denominator = a.dot(a).sqrt() + b.dot(b).sqrt();
    if denominator == 0.0 {
        return 0.0;
    }
    diff.dot(&diff).sqrt() / denominator
}

/// Outcome of comparing an analytic gradient with its numerical estimate.
#[derive(Clone, Debug)]
pub struct GradientCheck {
    pub numerical: Vector,
    pub analytic: Vector,
    pub max_abs_diff: f64,
    pub relative_diff: f64,
}

impl GradientCheck {
    pub fn passes(&self, tolerance: f64) -> bool {
        self.relative_diff < tolerance
    }
}

pub fn check_gradient<C>(cost_fn: C, analytic: &Vector, theta: &Vector, epsilon: f64) -> GradientCheck
where
    C: Fn(&Vector) -> f64,
{
    let numerical = numerical_gradient(cost_fn, theta, epsilon);

    let max_abs_diff = (&numerical - analytic)
        .iter()
        .fold(0.0_f64, |acc, d| acc.max(d.abs()));
    let relative_diff = relative_difference(&numerical, analytic);
    debug!(
        "gradient check: max abs diff {:e}, relative diff {:e}",
        max_abs_diff, relative_diff
    );

    GradientCheck {
        numerical,
        analytic: analytic.clone(),
        max_abs_diff,
        relative_diff,
    }
}
