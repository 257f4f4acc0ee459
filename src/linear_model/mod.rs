//! Linear models for regression.
//!
//! This module provides:
//! - the pure formulas: `hypothesis`, `cost`, `grad`, `predict`
//! - `normal_equation`: closed-form least squares
//! - `LinearRegression`: fit / predict / score on top of either solver
//!
//! # Examples
//!
//! ## Formulas
//! ```rust
//! use gradlin::{cost, grad, normal_equation};
//! use ndarray::array;
//!
//! let x = array![[1.0, 1.0], [1.0, 2.0], [1.0, 3.0]];
//! let y = array![1.0, 2.0, 3.0];
//!
//! let theta = normal_equation(&x, &y).unwrap();
//! assert!(cost(&x, &y, &theta) < 1e-12);
//! assert!(grad(&x, &y, &theta).iter().all(|g| g.abs() < 1e-9));
//! ```
//!
//! ## Linear Regression
//! ```rust
//! use gradlin::{GradientDescent, LinearRegression, Solver};
//! use ndarray::array;
//!
//! let x = array![[1.0], [2.0], [3.0]];
//! let y = array![2.0, 4.0, 6.0];
//!
//! let mut model = LinearRegression::new()
//!     .solver(Solver::GradientDescent(GradientDescent::new().learning_rate(0.1).iterations(2000)));
//! model.fit(&x, &y).unwrap();
//! let predictions = model.predict(&x).unwrap();
//! ```

mod hypothesis;
mod linear_regression;
mod normal_equation;

pub use hypothesis::{cost, descent_direction, grad, hypothesis, predict};
pub use linear_regression::{LinearRegression, Solver};
pub use normal_equation::{normal_equation, normal_equation_or_zeros};
