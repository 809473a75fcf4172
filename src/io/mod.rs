//! File interchange formats for coil sets.

pub mod makegrid;

pub use makegrid::{read_makegrid, read_makegrid_from, write_makegrid, write_makegrid_to};
