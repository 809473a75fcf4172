//! Discretized coil filaments.
//!
//! A filament is a single coil approximated as an ordered sequence of 3D
//! points carrying one scalar current. The point order defines the current
//! direction. Filaments are conventionally closed (last point repeating the
//! first), but closure is a classification, not an enforced invariant; see
//! [`Filament::closure`].

use crate::errors::{CoilError, Result};
use crate::math::{Scalar, R3};

/// Distance tolerance used to decide whether a filament's endpoints coincide.
pub const CLOSURE_TOL: Scalar = 1.0e-8;

/// Whether a filament's last point coincides with its first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Closure {
    /// Endpoints coincide within tolerance; the curve is a loop.
    Closed,
    /// Endpoints are distinct (or the filament has no points).
    Open,
}

/// A single coil represented as discrete points in Cartesian coordinates.
///
/// Coordinates are in meters, the current in amperes. Storing points as
/// `R3` triples makes the equal-length invariant on the three coordinate
/// sequences hold by construction; [`Filament::from_coordinates`] validates
/// it for per-axis input.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct Filament {
    /// Ordered curve samples in meters.
    pub points: Vec<R3>,
    /// Signed current in amperes; flow direction follows point order.
    pub current: Scalar,
    /// Display/bookkeeping name, not required to be unique.
    pub name: String,
    /// Integer classification id (coil family / symmetry group).
    pub group: i32,
}

impl Filament {
    /// Creates a filament from already-assembled points.
    #[must_use]
    pub fn new(points: Vec<R3>, current: Scalar, name: impl Into<String>, group: i32) -> Self {
        Self {
            points,
            current,
            name: name.into(),
            group,
        }
    }

    /// Creates a filament from per-axis coordinate slices.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the three slices disagree in length; nothing
    /// is constructed on failure.
    pub fn from_coordinates(
        x: &[Scalar],
        y: &[Scalar],
        z: &[Scalar],
        current: Scalar,
        name: impl Into<String>,
        group: i32,
    ) -> Result<Self> {
        if x.len() != y.len() || y.len() != z.len() {
            return Err(CoilError::DimensionMismatch(format!(
                "coordinate lengths disagree: x={}, y={}, z={}",
                x.len(),
                y.len(),
                z.len()
            )));
        }
        let points = x
            .iter()
            .zip(y)
            .zip(z)
            .map(|((&x, &y), &z)| R3::new(x, y, z))
            .collect();
        Ok(Self::new(points, current, name, group))
    }

    /// Number of curve samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the filament has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of straight segments in the piecewise-linear decomposition.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Classifies the filament as closed or open by comparing its endpoints
    /// within `tol`.
    #[must_use]
    pub fn closure(&self, tol: Scalar) -> Closure {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if (first - last).norm() <= tol => Closure::Closed,
            _ => Closure::Open,
        }
    }

    /// Centroid of the first N-1 points (closed-curve convention: the
    /// repeated endpoint is not double counted).
    ///
    /// # Errors
    ///
    /// `InvalidGeometry` if the filament has fewer than two points.
    pub fn centroid(&self) -> Result<R3> {
        let n = self.points.len();
        if n < 2 {
            return Err(CoilError::InvalidGeometry(format!(
                "centroid of filament `{}` needs at least two points, got {n}",
                self.name
            )));
        }
        Ok(mean_point(&self.points[..n - 1]))
    }

    /// The x coordinates as a plain array, for mesh/plot collaborators.
    #[must_use]
    pub fn xs(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y coordinates as a plain array.
    #[must_use]
    pub fn ys(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// The z coordinates as a plain array.
    #[must_use]
    pub fn zs(&self) -> Vec<Scalar> {
        self.points.iter().map(|p| p.z).collect()
    }
}

/// Arithmetic mean of a point slice. NaN-propagating, zero for empty input.
pub(crate) fn mean_point(points: &[R3]) -> R3 {
    if points.is_empty() {
        return R3::zeros();
    }
    let sum = points.iter().fold(R3::zeros(), |acc, p| acc + p);
    sum / points.len() as Scalar
}
