use thiserror::Error;

use crate::geometry::Crs;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// The supplied extent is not expressed in a geographic (longitude,
    /// latitude, radians) CRS. Bounding-box construction cannot proceed and
    /// the owning tile should abort its setup.
    #[error("extent CRS {0:?} is not a geographic CRS")]
    InvalidCrs(Crs),
}
