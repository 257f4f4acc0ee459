use ndarray::s;
use ndarray_rand::rand_distr::{Normal, Uniform};
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{LinRegError, Result};
use crate::{Matrix, Vector};

/// Prepends the all-ones bias column, turning `m × k` features into an
/// `m × (k + 1)` design matrix whose first parameter is the intercept.
pub fn add_bias_column(x: &Matrix) -> Matrix {
    let mut design = Matrix::ones((x.nrows(), x.ncols() + 1));
    design.slice_mut(s![.., 1..]).assign(x);
    design
}

#[derive(Clone, Debug)]
pub struct Dataset {
    pub features: Matrix,
    pub labels: Vector,
}

impl Dataset {
    pub fn new(features: Matrix, labels: Vector) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(LinRegError::ShapeMismatch {
                what: "labels",
                got: labels.len(),
                expected: features.nrows(),
            });
        }

        Ok(Self { features, labels })
    }

    /// Samples `y = intercept + X·coefficients + N(0, noise²)` with features
    /// drawn uniformly from `[-1, 1)`. The same seed always gives the same data.
    pub fn synthetic_linear(
        n_samples: usize,
        coefficients: &Vector,
        intercept: f64,
        noise: f64,
        seed: u64,
    ) -> Result<Self> {
        if !(noise >= 0.0 && noise.is_finite()) {
            return Err(LinRegError::InvalidParameter(format!(
                "noise must be a finite non-negative number, got {}",
                noise
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let features = Matrix::random_using(
            (n_samples, coefficients.len()),
            Uniform::new(-1.0, 1.0),
            &mut rng,
        );

        let mut labels = features.dot(coefficients) + intercept;
        if noise > 0.0 {
            let normal = Normal::new(0.0, noise)
                .map_err(|err| LinRegError::InvalidParameter(err.to_string()))?;
            labels += &Vector::random_using(n_samples, normal, &mut rng);
        }

        Self::new(features, labels)
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn design_matrix(&self) -> Matrix {
        add_bias_column(&self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_model::normal_equation;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_dataset_creation() {
        let features = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let targets = array![1.0, 2.0, 3.0];

        let dataset = Dataset::new(features, targets).unwrap();
        assert_eq!(dataset.n_samples(), 3);
        assert_eq!(dataset.n_features(), 2);
    }

    #[test]
    fn test_dataset_mismatch() {
        let features = array![[1.0], [2.0]];
        let targets = array![1.0, 2.0, 3.0];

        assert!(Dataset::new(features, targets).is_err());
    }

    #[test]
    fn test_add_bias_column() {
        let x = array![[2.0, 3.0], [4.0, 5.0]];

        let design = add_bias_column(&x);
        assert_eq!(design, array![[1.0, 2.0, 3.0], [1.0, 4.0, 5.0]]);
    }

    #[test]
    fn test_synthetic_linear_is_reproducible() {
        let coefficients = array![2.0, -1.0];

        let a = Dataset::synthetic_linear(20, &coefficients, 0.5, 0.1, 7).unwrap();
        let b = Dataset::synthetic_linear(20, &coefficients, 0.5, 0.1, 7).unwrap();

        assert_eq!(a.n_samples(), 20);
        assert_eq!(a.n_features(), 2);
        assert_eq!(a.features, b.features);
        assert_eq!(a.labels, b.labels);
        assert!(a.features.iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn test_synthetic_linear_noiseless_recovers_parameters() {
        let coefficients = array![2.0, -1.0, 0.5];
        let dataset = Dataset::synthetic_linear(50, &coefficients, 3.0, 0.0, 42).unwrap();

        let theta = normal_equation(&dataset.design_matrix(), &dataset.labels).unwrap();
        assert_abs_diff_eq!(theta, array![3.0, 2.0, -1.0, 0.5], epsilon = 1e-8);
    }

    #[test]
    fn test_synthetic_linear_rejects_negative_noise() {
        let result = Dataset::synthetic_linear(5, &array![1.0], 0.0, -1.0, 0);
        assert!(matches!(result, Err(LinRegError::InvalidParameter(_))));
    }
}
