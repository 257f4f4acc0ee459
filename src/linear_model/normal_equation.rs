use log::{debug, warn};

use crate::error::{LinRegError, Result};
use crate::{Matrix, Vector};

/// Cholesky pivots of the unit-diagonal scaled `XᵀX` at or below this count as zero.
const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Closed-form least squares, `θ = (XᵀX)⁻¹Xᵀy`.
///
/// `XᵀX` is symmetric positive semi-definite, so the inverse is never formed:
/// the system is scaled to a unit diagonal and solved with a Cholesky
/// factorization. Fails with [`LinRegError::SingularMatrix`] when `XᵀX` is not
/// invertible, e.g. with duplicated feature columns or fewer samples than
/// parameters. The scaling makes the test independent of each feature's units.
pub fn normal_equation(x: &Matrix, y: &Vector) -> Result<Vector> {
    let xt = x.t();
    let gram = xt.dot(x);
    let moment = xt.dot(y);

    solve_gram_system(&gram, &moment)
}

/// [`normal_equation`] with the legacy fallback: a singular `XᵀX` returns a
/// zero vector of length `x.ncols() + 1` instead of an error.
///
/// The fallback length does not match the parameter count of `x`, so callers
/// cannot use it as a model. Prefer [`normal_equation`].
pub fn normal_equation_or_zeros(x: &Matrix, y: &Vector) -> Vector {
    match normal_equation(x, y) {
        Ok(theta) => theta,
        Err(err) => {
            warn!("normal equation failed ({err}), returning zero placeholder");
            Vector::zeros(x.ncols() + 1)
        }
    }
}

/// Solves `Aθ = b` for symmetric positive definite `A` as `D·S·D` with
/// `D = diag(1/√Aᵢᵢ)`, factoring `S = LLᵀ`.
fn solve_gram_system(gram: &Matrix, moment: &Vector) -> Result<Vector> {
    let n = gram.nrows();

    let mut scale = Vector::zeros(n);
    for (i, d) in scale.iter_mut().enumerate() {
        let diag = gram[(i, i)];
        if !(diag > 0.0) {
            debug!("feature column {} is all zeros", i);
            return Err(LinRegError::SingularMatrix { column: i });
        }
        *d = diag.sqrt().recip();
    }

    let mut lower = Matrix::zeros((n, n));
    for j in 0..n {
        let row_j = lower.row(j).slice(ndarray::s![..j]).to_owned();
        let pivot = gram[(j, j)] * scale[j] * scale[j] - row_j.dot(&row_j);
        if !(pivot > SINGULAR_TOLERANCE) {
            debug!("cholesky pivot {} is {:e}", j, pivot);
            return Err(LinRegError::SingularMatrix { column: j });
        }
        let pivot = pivot.sqrt();
        lower[(j, j)] = pivot;

        for i in (j + 1)..n {
            let row_i = lower.row(i).slice(ndarray::s![..j]).to_owned();
            let scaled = gram[(i, j)] * scale[i] * scale[j];
            lower[(i, j)] = (scaled - row_i.dot(&row_j)) / pivot;
        }
    }

    // L z = D b
    let mut z = moment * &scale;
    for i in 0..n {
        for k in 0..i {
            z[i] -= lower[(i, k)] * z[k];
        }
        z[i] /= lower[(i, i)];
    }

    // Lᵀ w = z, θ = D w
    let mut w = z;
    for i in (0..n).rev() {
        for k in (i + 1)..n {
            w[i] -= lower[(k, i)] * w[k];
        }
        w[i] /= lower[(i, i)];
    }

    Ok(w * &scale)
}
