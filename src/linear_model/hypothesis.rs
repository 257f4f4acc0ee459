use crate::{Matrix, Vector};

/// Linear hypothesis `Xθ`.
pub fn hypothesis(x: &Matrix, theta: &Vector) -> Vector {
    x.dot(theta)
}

/// Halved mean squared error `(1/2m)·(Xθ − y)ᵀ(Xθ − y)`.
///
/// `m = 0` divides by zero and yields NaN.
pub fn cost(x: &Matrix, y: &Vector, theta: &Vector) -> f64 {
    let m = y.len() as f64;
    let residual = hypothesis(x, theta) - y;
    residual.dot(&residual) / (2.0 * m)
}

/// Analytic gradient of [`cost`], `(1/m)·Xᵀ(Xθ − y)`.
pub fn grad(x: &Matrix, y: &Vector, theta: &Vector) -> Vector {
    let m = y.len() as f64;
    x.t().dot(&(hypothesis(x, theta) - y)) / m
}

/// Un-averaged gradient `Xᵀ(Xθ − y)` in the `(θ, X, y, m)` convention of
/// [`gradient_descent`](crate::gradient_descent), which applies the `1/m` itself.
pub fn descent_direction(theta: &Vector, x: &Matrix, y: &Vector, _m: usize) -> Vector {
    x.t().dot(&(hypothesis(x, theta) - y))
}

/// Applies trained parameters to new samples. Same formula as [`hypothesis`].
pub fn predict(x: &Matrix, theta: &Vector) -> Vector {
    hypothesis(x, theta)
}
