use std::f64::consts::{FRAC_PI_2, PI};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::math::Cartographic;

/// Coordinate reference system of an [`Extent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crs {
    /// Longitude/latitude in radians.
    Geographic,
    /// Projected web-mercator meters. Carried by tiling schemes but rejected
    /// by the bounding-box builder.
    WebMercator,
}

/// A rectangular region of the globe, with bounds expressed in the units of
/// its CRS (radians for [`Crs::Geographic`]).
///
/// Invariant: `west < east` and `south < north`. Inputs violating it are a
/// caller bug; zero-area extents are tolerated and produce degenerate
/// bounding volumes rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub crs: Crs,
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}
impl Extent {
    pub const MAX_VALUE: Extent = Extent {
        crs: Crs::Geographic,
        west: -PI,
        south: -FRAC_PI_2,
        east: PI,
        north: FRAC_PI_2,
    };
    pub fn new(crs: Crs, west: f64, south: f64, east: f64, north: f64) -> Self {
        Extent {
            crs,
            west,
            south,
            east,
            north,
        }
    }
    pub fn from_radians(west: f64, south: f64, east: f64, north: f64) -> Self {
        Extent::new(Crs::Geographic, west, south, east, north)
    }
    pub fn from_degrees(west: f64, south: f64, east: f64, north: f64) -> Self {
        Extent::new(
            Crs::Geographic,
            west.to_radians(),
            south.to_radians(),
            east.to_radians(),
            north.to_radians(),
        )
    }
    pub fn is_geographic(&self) -> bool {
        self.crs == Crs::Geographic
    }
    pub fn compute_width(&self) -> f64 {
        self.east - self.west
    }
    pub fn compute_height(&self) -> f64 {
        self.north - self.south
    }
    /// Width and height of the extent, in the units of its CRS.
    pub fn dimensions(&self) -> DVec2 {
        DVec2::new(self.compute_width(), self.compute_height())
    }
    pub fn center(&self) -> Cartographic {
        Cartographic::from_radians(
            (self.west + self.east) * 0.5,
            (self.south + self.north) * 0.5,
            0.0,
        )
    }
    pub fn validate(&self) -> bool {
        self.west < self.east
            && self.south < self.north
            && self.west >= -PI
            && self.east <= PI
            && self.south >= -FRAC_PI_2
            && self.north <= FRAC_PI_2
    }
    pub fn equals_epsilon(&self, right: &Extent, absolute_epsilon: f64) -> bool {
        self.crs == right.crs
            && (self.west - right.west).abs() <= absolute_epsilon
            && (self.south - right.south).abs() <= absolute_epsilon
            && (self.east - right.east).abs() <= absolute_epsilon
            && (self.north - right.north).abs() <= absolute_epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::EPSILON14;

    #[test]
    fn center_and_dimensions() {
        let extent = Extent::from_radians(0.1, -0.2, 0.3, 0.4);
        let center = extent.center();
        assert!((center.longitude - 0.2).abs() < EPSILON14);
        assert!((center.latitude - 0.1).abs() < EPSILON14);
        assert_eq!(center.height, 0.0);

        let dimensions = extent.dimensions();
        assert!((dimensions.x - 0.2).abs() < EPSILON14);
        assert!((dimensions.y - 0.6).abs() < EPSILON14);
    }

    #[test]
    fn from_degrees_matches_radians() {
        let a = Extent::from_degrees(-180.0, -90.0, 180.0, 90.0);
        assert!(a.equals_epsilon(&Extent::MAX_VALUE, EPSILON14));
    }

    #[test]
    fn validate_rejects_inverted_bounds() {
        assert!(Extent::from_radians(0.0, 0.0, 0.1, 0.1).validate());
        assert!(!Extent::from_radians(0.1, 0.0, 0.0, 0.1).validate());
        assert!(!Extent::from_radians(0.0, 0.1, 0.1, 0.0).validate());
    }
}
