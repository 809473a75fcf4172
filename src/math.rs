//! Shared numerical primitives anchored on `nalgebra`.

use nalgebra::Vector3;

use crate::errors::{CoilError, Result};

/// Primary scalar type used across the crate.
pub type Scalar = f64;
/// Convenient alias for three-dimensional real vectors.
pub type R3 = Vector3<Scalar>;

/// Generates `n` linearly spaced samples in [start, stop], inclusive endpoints.
#[must_use]
pub fn linspace(start: Scalar, stop: Scalar, n: usize) -> Vec<Scalar> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n as Scalar - 1.0);
            (0..n).map(|i| start + step * i as Scalar).collect()
        }
    }
}

/// One-dimensional natural cubic spline interpolant.
///
/// Fitted over strictly increasing knots; the interpolant passes through
/// every knot exactly. Degenerate knot counts fall back gracefully: one
/// knot yields a constant, two knots a straight line.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    knots: Vec<Scalar>,
    values: Vec<Scalar>,
    /// Second derivatives at the knots (zero at both ends).
    moments: Vec<Scalar>,
}

impl CubicSpline {
    /// Fits a natural cubic spline through `(knots[i], values[i])`.
    ///
    /// # Errors
    ///
    /// `EmptyGeometry` if no knots are supplied, `DimensionMismatch` if the
    /// two slices disagree in length.
    pub fn fit(knots: &[Scalar], values: &[Scalar]) -> Result<Self> {
        if knots.is_empty() {
            return Err(CoilError::EmptyGeometry("cubic spline needs at least one knot"));
        }
        if knots.len() != values.len() {
            return Err(CoilError::DimensionMismatch(format!(
                "{} knots vs {} values",
                knots.len(),
                values.len()
            )));
        }

        let n = knots.len();
        let mut moments = vec![0.0; n];
        if n > 2 {
            // Tridiagonal moment system with natural end conditions,
            // solved in place (Thomas algorithm).
            let m = n - 2;
            let mut lower = vec![0.0; m];
            let mut diag = vec![0.0; m];
            let mut upper = vec![0.0; m];
            let mut rhs = vec![0.0; m];
            for k in 0..m {
                let i = k + 1;
                let h0 = knots[i] - knots[i - 1];
                let h1 = knots[i + 1] - knots[i];
                lower[k] = h0;
                diag[k] = 2.0 * (h0 + h1);
                upper[k] = h1;
                rhs[k] = 6.0 * ((values[i + 1] - values[i]) / h1 - (values[i] - values[i - 1]) / h0);
            }
            for k in 1..m {
                let w = lower[k] / diag[k - 1];
                diag[k] -= w * upper[k - 1];
                rhs[k] -= w * rhs[k - 1];
            }
            moments[m] = rhs[m - 1] / diag[m - 1];
            for k in (0..m - 1).rev() {
                moments[k + 1] = (rhs[k] - upper[k] * moments[k + 2]) / diag[k];
            }
        }

        Ok(Self {
            knots: knots.to_vec(),
            values: values.to_vec(),
            moments,
        })
    }

    /// Evaluates the spline at parameter `t`, clamped to the knot range.
    #[must_use]
    pub fn eval(&self, t: Scalar) -> Scalar {
        let n = self.knots.len();
        if n == 1 {
            return self.values[0];
        }
        let t = t.clamp(self.knots[0], self.knots[n - 1]);
        let idx = match self.knots.partition_point(|&k| k <= t) {
            0 => 0,
            p => (p - 1).min(n - 2),
        };
        let h = self.knots[idx + 1] - self.knots[idx];
        let a = self.knots[idx + 1] - t;
        let b = t - self.knots[idx];
        (self.moments[idx] * a * a * a + self.moments[idx + 1] * b * b * b) / (6.0 * h)
            + (self.values[idx] / h - self.moments[idx] * h / 6.0) * a
            + (self.values[idx + 1] / h - self.moments[idx + 1] * h / 6.0) * b
    }
}
