//! Geometric transforms on filaments.
//!
//! All transforms are pure functions of the point sequence: cubic
//! resampling over the index parameter, uniform magnification about the
//! centroid, and expansion of the filament into a rectangular-cross-section
//! tube skeleton.

use crate::errors::{CoilError, Result};
use crate::filament::{mean_point, Closure, Filament, CLOSURE_TOL};
use crate::math::{linspace, CubicSpline, Scalar, R3};

/// Skeleton of a rectangular tube swept along a filament.
///
/// `edges[k][i]` is corner `k` of the cross-section at curve sample `i`;
/// the fifth edge repeats the first so each cross-section ring is closed.
/// Shape is (5, N) per coordinate axis for an N-point filament.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct RectangularTube {
    /// Four corner curves plus the repeated first corner.
    pub edges: [Vec<R3>; 5],
}

impl RectangularTube {
    /// The x coordinates of edge `k` as a plain array.
    #[must_use]
    pub fn xs(&self, k: usize) -> Vec<Scalar> {
        self.edges[k].iter().map(|p| p.x).collect()
    }

    /// The y coordinates of edge `k` as a plain array.
    #[must_use]
    pub fn ys(&self, k: usize) -> Vec<Scalar> {
        self.edges[k].iter().map(|p| p.y).collect()
    }

    /// The z coordinates of edge `k` as a plain array.
    #[must_use]
    pub fn zs(&self, k: usize) -> Vec<Scalar> {
        self.edges[k].iter().map(|p| p.z).collect()
    }
}

impl Filament {
    /// Resamples the filament to exactly `target_count` points.
    ///
    /// A normalized parameter in [0, 1] with one sample per existing point
    /// (uniform spacing, inclusive endpoints) is fitted with a cubic spline
    /// per coordinate axis and evaluated at `target_count` uniform
    /// parameters. The parameter is point index, not arc length, so
    /// curvature is not equalized.
    ///
    /// # Errors
    ///
    /// `EmptyGeometry` if the filament has no points.
    pub fn resample(&mut self, target_count: usize) -> Result<()> {
        if self.points.is_empty() {
            return Err(CoilError::EmptyGeometry("resample needs at least one point"));
        }
        let ts = linspace(0.0, 1.0, self.points.len());
        let sx = CubicSpline::fit(&ts, &self.xs())?;
        let sy = CubicSpline::fit(&ts, &self.ys())?;
        let sz = CubicSpline::fit(&ts, &self.zs())?;
        self.points = linspace(0.0, 1.0, target_count)
            .into_iter()
            .map(|t| R3::new(sx.eval(t), sy.eval(t), sz.eval(t)))
            .collect();
        Ok(())
    }

    /// Scales the filament about its centroid by `ratio`.
    ///
    /// A closed filament (endpoints coinciding within [`CLOSURE_TOL`]) is
    /// scaled over its first N-1 points and re-closed; an open filament is
    /// scaled whole and left open.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if fewer than two distinct points exist.
    pub fn magnify(&mut self, ratio: Scalar) -> Result<()> {
        let n = self.points.len();
        let closed = self.closure(CLOSURE_TOL) == Closure::Closed;
        let effective = if closed { n - 1 } else { n };
        if effective < 2 {
            return Err(CoilError::InvalidGeometry(format!(
                "magnify needs at least two distinct points, filament `{}` has {effective}",
                self.name
            )));
        }
        let centroid = mean_point(&self.points[..effective]);
        for p in &mut self.points[..effective] {
            *p = centroid + (*p - centroid) * ratio;
        }
        if closed {
            self.points[n - 1] = self.points[0];
        }
        Ok(())
    }

    /// Expands the filament into a rectangular tube skeleton of the given
    /// `width` and `height` (meters).
    ///
    /// Each sample gets a local frame: the tangent from the index-wise
    /// central-difference gradient of the point sequence, a pseudo-normal
    /// from the curve centroid to the sample, and their cross product as
    /// binormal, all normalized. Corners are offset by ±width/2 along the
    /// binormal and ±height/2 along the pseudo-normal in a fixed winding
    /// order.
    ///
    /// The frame is point-wise, not a Frenet frame integrated along the
    /// curve; tubes around sharply curved or self-intersecting geometry may
    /// self-intersect. Zero-length gradients (repeated interior points)
    /// produce non-finite corners rather than being masked.
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if the filament has fewer than two points.
    pub fn rectangular_cross_section(&self, width: Scalar, height: Scalar) -> Result<RectangularTube> {
        let n = self.points.len();
        if n < 2 {
            return Err(CoilError::InvalidGeometry(format!(
                "cross-section of filament `{}` needs at least two points, got {n}",
                self.name
            )));
        }
        let centroid = mean_point(&self.points[..n - 1]);

        let mut edges: [Vec<R3>; 5] = std::array::from_fn(|_| Vec::with_capacity(n));
        for i in 0..n {
            let tangent = index_gradient(&self.points, i).normalize();
            let normal = (self.points[i] - centroid).normalize();
            let binormal = tangent.cross(&normal).normalize();

            let dw = binormal * (width / 2.0);
            let dh = normal * (height / 2.0);
            let p = self.points[i];
            let corners = [p - dw + dh, p + dw + dh, p + dw - dh, p - dw - dh];
            for (edge, corner) in edges.iter_mut().zip(corners.iter().chain(&corners[..1])) {
                edge.push(*corner);
            }
        }
        Ok(RectangularTube { edges })
    }
}

/// Central-difference gradient over point index: one-sided at the two ends,
/// centered inside (the `np.gradient` stencil).
fn index_gradient(points: &[R3], i: usize) -> R3 {
    let n = points.len();
    if i == 0 {
        points[1] - points[0]
    } else if i == n - 1 {
        points[n - 1] - points[n - 2]
    } else {
        (points[i + 1] - points[i - 1]) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::field::circular_filament;

    fn unit_square() -> Filament {
        Filament::new(
            vec![
                R3::new(1.0, 1.0, 0.0),
                R3::new(-1.0, 1.0, 0.0),
                R3::new(-1.0, -1.0, 0.0),
                R3::new(1.0, -1.0, 0.0),
                R3::new(1.0, 1.0, 0.0),
            ],
            1.0,
            "square",
            1,
        )
    }

    #[test]
    fn magnify_by_one_is_identity() {
        let mut coil = circular_filament(1.3, 33, 1.0, "pf", 1);
        let original = coil.points.clone();
        coil.magnify(1.0).unwrap();
        for (p, q) in coil.points.iter().zip(&original) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1.0e-12);
        }
    }

    #[test]
    fn magnify_scales_about_centroid_and_recloses() {
        let mut square = unit_square();
        square.magnify(2.0).unwrap();
        assert_relative_eq!(square.points[0].x, 2.0, epsilon = 1.0e-12);
        assert_relative_eq!(square.points[0].y, 2.0, epsilon = 1.0e-12);
        // still closed
        assert_relative_eq!(
            (square.points[0] - square.points[4]).norm(),
            0.0,
            epsilon = 1.0e-12
        );
    }

    #[test]
    fn magnify_leaves_open_curves_open() {
        let mut arc = Filament::new(
            vec![
                R3::new(0.0, 0.0, 0.0),
                R3::new(1.0, 0.0, 0.0),
                R3::new(2.0, 1.0, 0.0),
            ],
            1.0,
            "arc",
            1,
        );
        arc.magnify(3.0).unwrap();
        assert!((arc.points[0] - arc.points[2]).norm() > 1.0);
        // centroid of all three points is preserved
        let c = mean_point(&arc.points);
        assert_relative_eq!(c.x, 1.0, epsilon = 1.0e-12);
        assert_relative_eq!(c.y, 1.0 / 3.0, epsilon = 1.0e-12);
    }

    #[test]
    fn magnify_needs_two_distinct_points() {
        let mut dot = Filament::new(vec![R3::new(1.0, 0.0, 0.0)], 1.0, "dot", 1);
        assert!(matches!(
            dot.magnify(2.0),
            Err(CoilError::InvalidGeometry(_))
        ));
        // two coincident points classify as closed with one distinct point
        let mut pair = Filament::new(
            vec![R3::new(1.0, 0.0, 0.0), R3::new(1.0, 0.0, 0.0)],
            1.0,
            "pair",
            1,
        );
        assert!(pair.magnify(2.0).is_err());
    }

    #[test]
    fn resample_yields_exact_count() {
        let mut coil = circular_filament(1.0, 17, 1.0, "pf", 1);
        coil.resample(65).unwrap();
        assert_eq!(coil.len(), 65);
        coil.resample(9).unwrap();
        assert_eq!(coil.len(), 9);
    }

    #[test]
    fn resample_to_same_count_reproduces_points() {
        let mut coil = circular_filament(1.0, 33, 1.0, "pf", 1);
        let original = coil.points.clone();
        coil.resample(33).unwrap();
        for (p, q) in coil.points.iter().zip(&original) {
            assert_relative_eq!((p - q).norm(), 0.0, epsilon = 1.0e-9);
        }
    }

    #[test]
    fn resample_rejects_empty_filament() {
        let mut empty = Filament::new(Vec::new(), 1.0, "none", 1);
        assert!(matches!(
            empty.resample(16),
            Err(CoilError::EmptyGeometry(_))
        ));
    }

    #[test]
    fn cross_section_has_five_by_n_shape_with_closed_rings() {
        let coil = circular_filament(1.0, 21, 1.0, "pf", 1);
        let tube = coil.rectangular_cross_section(0.1, 0.2).unwrap();
        for edge in &tube.edges {
            assert_eq!(edge.len(), 21);
        }
        for i in 0..21 {
            assert_relative_eq!(
                (tube.edges[4][i] - tube.edges[0][i]).norm(),
                0.0,
                epsilon = 1.0e-15
            );
        }
        assert_eq!(tube.xs(0).len(), 21);
    }

    #[test]
    fn cross_section_offsets_match_requested_dimensions() {
        let coil = circular_filament(1.0, 65, 1.0, "pf", 1);
        let tube = coil.rectangular_cross_section(0.1, 0.2).unwrap();
        // opposite corners across the width direction
        let w = (tube.edges[1][3] - tube.edges[0][3]).norm();
        let h = (tube.edges[1][3] - tube.edges[2][3]).norm();
        assert_relative_eq!(w, 0.1, epsilon = 1.0e-12);
        assert_relative_eq!(h, 0.2, epsilon = 1.0e-12);
    }

    #[test]
    fn cross_section_needs_two_points() {
        let dot = Filament::new(vec![R3::new(1.0, 0.0, 0.0)], 1.0, "dot", 1);
        assert!(dot.rectangular_cross_section(0.1, 0.1).is_err());
    }
}
