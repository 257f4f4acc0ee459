use log::debug;

use crate::dataset::add_bias_column;
use crate::error::{LinRegError, Result};
use crate::linear_model::{descent_direction, normal_equation, predict};
use crate::optimize::GradientDescent;
use crate::{Matrix, Vector};

/// How [`LinearRegression`] estimates its parameters.
#[derive(Clone, Debug)]
pub enum Solver {
    NormalEquation,
    GradientDescent(GradientDescent),
}

#[derive(Clone, Debug)]
pub struct LinearRegression {
    pub coefficients: Option<Vector>,
    pub intercept: Option<f64>,
    fit_intercept: bool,
    solver: Solver,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self {
            coefficients: None,
            intercept: None,
            fit_intercept: true,
            solver: Solver::NormalEquation,
        }
    }

    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    pub fn solver(mut self, solver: Solver) -> Self {
        self.solver = solver;
        self
    }

    pub fn fit(&mut self, x: &Matrix, y: &Vector) -> Result<()> {
        if x.nrows() != y.len() {
            return Err(LinRegError::ShapeMismatch {
                what: "labels",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        if x.nrows() == 0 {
            return Err(LinRegError::EmptyInput);
        }

        let design = if self.fit_intercept {
            add_bias_column(x)
        } else {
            x.clone()
        };

        let theta = match &self.solver {
            Solver::NormalEquation => normal_equation(&design, y)?,
            Solver::GradientDescent(optimizer) => {
                let initial_theta = Vector::zeros(design.ncols());
                optimizer.optimize(&design, y, descent_direction, &initial_theta)
            }
        };
        debug!("fitted parameters {}", theta);

        let (coeffs, intercept) = if self.fit_intercept {
            (theta.slice(ndarray::s![1..]).to_owned(), theta[0])
        } else {
            (theta, 0.0)
        };

        self.coefficients = Some(coeffs);
        self.intercept = Some(intercept);
        Ok(())
    }

    /// Parameters in the layout of the design matrix used by `fit`: intercept
    /// first when fitting one, the bare coefficients otherwise.
    pub fn theta(&self) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or(LinRegError::NotFitted)?;
        if !self.fit_intercept {
            return Ok(coeffs.clone());
        }
        let intercept = self.intercept.unwrap_or(0.0);

        let mut theta = Vector::zeros(coeffs.len() + 1);
        theta[0] = intercept;
        theta.slice_mut(ndarray::s![1..]).assign(coeffs);
        Ok(theta)
    }

    pub fn predict(&self, x: &Matrix) -> Result<Vector> {
        let coeffs = self.coefficients.as_ref().ok_or(LinRegError::NotFitted)?;
        let intercept = self.intercept.unwrap_or(0.0);

        if x.ncols() != coeffs.len() {
            return Err(LinRegError::ShapeMismatch {
                what: "features",
                got: x.ncols(),
                expected: coeffs.len(),
            });
        }

        Ok(predict(x, coeffs) + intercept)
    }

    pub fn score(&self, x: &Matrix, y: &Vector) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::metrics::r2_score(y, &y_pred)
    }
}

impl Default for LinearRegression {
    fn default() -> Self {
        Self::new()
    }
}
