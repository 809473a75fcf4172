//! Convenience re-exports for building coil workflows.

pub use crate::coilset::CoilSet;
pub use crate::constants::{MU0_OVER_4PI, VACUUM_PERMEABILITY};
pub use crate::errors::{CoilError, Result};
pub use crate::field::{circular_filament, segment_field};
pub use crate::filament::{Closure, Filament, CLOSURE_TOL};
pub use crate::geometry::RectangularTube;
pub use crate::io::{read_makegrid, read_makegrid_from, write_makegrid, write_makegrid_to};
pub use crate::math::{linspace, CubicSpline, Scalar, R3};
