use ndarray::Axis;

use crate::error::{LinRegError, Result};
use crate::{Matrix, Vector};

/// Z-score normalization with a single mean and standard deviation taken over
/// every entry of `x`.
///
/// Returns `(x_norm, mu, sigma)`. The statistics are global, not per column;
/// use [`StandardScaler`] for per-feature scaling. A constant matrix has
/// `sigma == 0` and produces NaN entries.
pub fn feature_normalize(x: &Matrix) -> (Matrix, f64, f64) {
    let mu = x.mean().unwrap_or(f64::NAN);
    let sigma = x.std(0.0);

    let x_norm = x.mapv(|v| (v - mu) / sigma);
    (x_norm, mu, sigma)
}

/// Reverses [`feature_normalize`].
pub fn denormalize(x_norm: &Matrix, mu: f64, sigma: f64) -> Matrix {
    x_norm.mapv(|v| v * sigma + mu)
}

#[derive(Clone, Debug, Default)]
pub struct StandardScaler {
    mean: Option<Vector>,
    std: Option<Vector>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self {
            mean: None,
            std: None,
        }
    }

    pub fn fit(&mut self, data: &Matrix) -> Result<()> {
        let mean = data.mean_axis(Axis(0)).ok_or(LinRegError::EmptyInput)?;
        let std = data.std_axis(Axis(0), 0.0);

        self.mean = Some(mean);
        self.std = Some(std);
        Ok(())
    }

    pub fn transform(&self, data: &Matrix) -> Result<Matrix> {
        let (mean, std) = self.fitted(data)?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row -= mean;
            row /= std;
        }

        Ok(result)
    }

    pub fn fit_transform(&mut self, data: &Matrix) -> Result<Matrix> {
        self.fit(data)?;
        self.transform(data)
    }

    pub fn inverse_transform(&self, data: &Matrix) -> Result<Matrix> {
        let (mean, std) = self.fitted(data)?;

        let mut result = data.clone();
        for mut row in result.axis_iter_mut(Axis(0)) {
            row *= std;
            row += mean;
        }

        Ok(result)
    }

    pub fn mean(&self) -> Option<&Vector> {
        self.mean.as_ref()
    }

    pub fn std(&self) -> Option<&Vector> {
        self.std.as_ref()
    }

    fn fitted(&self, data: &Matrix) -> Result<(&Vector, &Vector)> {
        let mean = self.mean.as_ref().ok_or(LinRegError::NotFitted)?;
        let std = self.std.as_ref().ok_or(LinRegError::NotFitted)?;

        if data.ncols() != mean.len() {
            return Err(LinRegError::ShapeMismatch {
                what: "features",
                got: data.ncols(),
                expected: mean.len(),
            });
        }

        Ok((mean, std))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_feature_normalize_global_statistics() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];

        let (x_norm, mu, sigma) = feature_normalize(&data);

        assert_abs_diff_eq!(mu, 2.5, epsilon = 1e-12);
        assert_abs_diff_eq!(sigma, 1.25_f64.sqrt(), epsilon = 1e-12);
        assert_abs_diff_eq!(x_norm.mean().unwrap(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x_norm.std(0.0), 1.0, epsilon = 1e-12);
        // columns are not individually centered
        assert!(x_norm.column(0).mean().unwrap() < 0.0);
    }

    #[test]
    fn test_feature_normalize_round_trip() {
        let data = array![[1.0, 100.0, -3.0], [2.0, 250.0, 0.5], [7.0, 80.0, 4.0]];

        let (x_norm, mu, sigma) = feature_normalize(&data);
        assert_abs_diff_eq!(denormalize(&x_norm, mu, sigma), data, epsilon = 1e-9);
        assert_abs_diff_eq!(x_norm.mapv(|v| v * sigma) + mu, data, epsilon = 1e-9);
    }

    #[test]
    fn test_feature_normalize_constant_matrix() {
        let data = array![[2.0, 2.0], [2.0, 2.0]];

        let (x_norm, _, sigma) = feature_normalize(&data);
        assert_eq!(sigma, 0.0);
        assert!(x_norm.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn test_standard_scaler() {
        let data = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let mut scaler = StandardScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        assert_eq!(scaled.shape(), data.shape());
        for column in scaled.columns() {
            assert_abs_diff_eq!(column.mean().unwrap(), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(column.std(0.0), 1.0, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(scaler.mean().unwrap().clone(), array![3.0, 4.0], epsilon = 1e-12);
    }

    #[test]
    fn test_standard_scaler_round_trip() {
        let data = array![[1.0, 100.0], [2.0, 250.0], [7.0, 80.0]];
        let mut scaler = StandardScaler::new();

        let scaled = scaler.fit_transform(&data).unwrap();
        let restored = scaler.inverse_transform(&scaled).unwrap();
        assert_abs_diff_eq!(restored, data, epsilon = 1e-9);
    }

    #[test]
    fn test_standard_scaler_errors() {
        let scaler = StandardScaler::new();
        assert_eq!(scaler.transform(&array![[1.0]]), Err(LinRegError::NotFitted));

        let mut scaler = StandardScaler::new();
        assert_eq!(scaler.fit(&Matrix::zeros((0, 2))), Err(LinRegError::EmptyInput));

        scaler.fit(&array![[1.0, 2.0], [3.0, 5.0]]).unwrap();
        assert!(matches!(
            scaler.transform(&array![[1.0, 2.0, 3.0]]),
            Err(LinRegError::ShapeMismatch { .. })
        ));
    }
}
