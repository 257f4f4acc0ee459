//! Linear regression from first principles.
//!
//! The crate exposes the textbook building blocks: a linear hypothesis with its
//! halved mean-squared-error cost and analytic gradient, a fixed-step gradient
//! descent optimizer, a central-difference gradient checker, the normal
//! equation, and feature normalization. `LinearRegression` wraps them in the
//! usual fit / predict / score shape.
//!
//! ```rust
//! use gradlin::{add_bias_column, descent_direction, gradient_descent, normal_equation};
//! use ndarray::array;
//!
//! let x = add_bias_column(&array![[1.0], [2.0], [3.0]]);
//! let y = array![1.0, 2.0, 3.0];
//!
//! let closed_form = normal_equation(&x, &y).unwrap();
//! let descended = gradient_descent(&x, &y, descent_direction, &array![0.0, 0.0], 0.1, 5000);
//! assert!((&closed_form - &descended).iter().all(|d| d.abs() < 1e-3));
//! ```

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod dataset;
pub mod error;
pub mod gradient_check;
pub mod linear_model;
pub mod metrics;
pub mod optimize;
pub mod preprocessing;

pub use dataset::{add_bias_column, Dataset};
pub use error::{LinRegError, Result};
pub use gradient_check::{check_gradient, numerical_gradient, relative_difference, GradientCheck};
pub use linear_model::{
    cost, descent_direction, grad, hypothesis, normal_equation, normal_equation_or_zeros, predict,
    LinearRegression, Solver,
};
pub use optimize::{gradient_descent, GradientDescent};
pub use preprocessing::{denormalize, feature_normalize, StandardScaler};

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;
