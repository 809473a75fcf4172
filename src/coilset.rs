//! Ordered collections of coil filaments.

use crate::errors::{CoilError, Result};
use crate::filament::Filament;
use crate::math::Scalar;

/// An ordered set of filaments with optional file-header metadata.
///
/// The set exclusively owns its filaments; insertion order is the coil
/// index order and is preserved by iteration and file round-trips. The
/// header holds the three raw text lines of a parsed MAKEGRID file
/// verbatim, and is empty for programmatically built sets.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct CoilSet {
    /// The coils, in coil index order.
    pub filaments: Vec<Filament>,
    /// Opaque passthrough header captured from a parsed file.
    pub header: String,
}

impl CoilSet {
    /// Creates a coil set from owned filaments with an empty header.
    #[must_use]
    pub fn new(filaments: Vec<Filament>) -> Self {
        Self {
            filaments,
            header: String::new(),
        }
    }

    /// Creates a coil set with a captured file header.
    #[must_use]
    pub fn with_header(filaments: Vec<Filament>, header: String) -> Self {
        Self { filaments, header }
    }

    /// Creates a coil set from six per-coil input sequences: per-coil x, y
    /// and z coordinate arrays, currents, names, and group ids.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the six outer lengths disagree (checked before
    /// any filament is built) or if any coil's x/y/z arrays disagree in
    /// length. Zero coils is a valid, empty set.
    pub fn from_arrays(
        xx: &[Vec<Scalar>],
        yy: &[Vec<Scalar>],
        zz: &[Vec<Scalar>],
        currents: &[Scalar],
        names: &[String],
        groups: &[i32],
    ) -> Result<Self> {
        let n = xx.len();
        if [yy.len(), zz.len(), currents.len(), names.len(), groups.len()]
            .iter()
            .any(|&len| len != n)
        {
            return Err(CoilError::DimensionMismatch(format!(
                "coil input sequences disagree: x={}, y={}, z={}, currents={}, names={}, groups={}",
                n,
                yy.len(),
                zz.len(),
                currents.len(),
                names.len(),
                groups.len()
            )));
        }
        let mut filaments = Vec::with_capacity(n);
        for i in 0..n {
            filaments.push(Filament::from_coordinates(
                &xx[i],
                &yy[i],
                &zz[i],
                currents[i],
                names[i].clone(),
                groups[i],
            )?);
        }
        Ok(Self::new(filaments))
    }

    /// Number of filaments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filaments.len()
    }

    /// True if the set holds no filaments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filaments.is_empty()
    }

    /// The filament at coil index `i`, if any.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<&Filament> {
        self.filaments.get(i)
    }

    /// Appends a filament at the end of the coil order.
    pub fn push(&mut self, filament: Filament) {
        self.filaments.push(filament);
    }

    /// Iterates the filaments in coil index order. The iterator carries its
    /// own position, so nested traversals are safe.
    pub fn iter(&self) -> std::slice::Iter<'_, Filament> {
        self.filaments.iter()
    }

    /// Mutably iterates the filaments in coil index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Filament> {
        self.filaments.iter_mut()
    }
}

impl<'a> IntoIterator for &'a CoilSet {
    type Item = &'a Filament;
    type IntoIter = std::slice::Iter<'a, Filament>;

    fn into_iter(self) -> Self::IntoIter {
        self.filaments.iter()
    }
}

impl<'a> IntoIterator for &'a mut CoilSet {
    type Item = &'a mut Filament;
    type IntoIter = std::slice::IterMut<'a, Filament>;

    fn into_iter(self) -> Self::IntoIter {
        self.filaments.iter_mut()
    }
}

impl IntoIterator for CoilSet {
    type Item = Filament;
    type IntoIter = std::vec::IntoIter<Filament>;

    fn into_iter(self) -> Self::IntoIter {
        self.filaments.into_iter()
    }
}
