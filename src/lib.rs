//! Bounding volumes for geographic terrain tiles on an ellipsoidal globe.
//!
//! The entry point is [`OrientedBoundingBox::from_extent`]: given a
//! geographic [`Extent`], it builds a tight oriented box in Earth-centered
//! Cartesian space that bounds the curved tile surface. The box can later be
//! extruded in height with [`OrientedBoundingBox::extrude`] as terrain
//! elevation bounds become known, without rebuilding its footprint.

mod ellipsoid;
mod error;
pub mod geometry;
pub mod math;

pub use ellipsoid::*;
pub use error::*;
pub use geometry::*;
pub use math::*;
