use serde::{Deserialize, Serialize};

use crate::math::equals_epsilon;

/// A geographic position: longitude and latitude in radians, height in meters
/// above the ellipsoid surface.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cartographic {
    pub longitude: f64,
    pub latitude: f64,
    pub height: f64,
}
impl Cartographic {
    pub const ZERO: Cartographic = Cartographic {
        longitude: 0.0,
        latitude: 0.0,
        height: 0.0,
    };
    pub fn from_radians(longitude: f64, latitude: f64, height: f64) -> Self {
        Cartographic {
            longitude,
            latitude,
            height,
        }
    }
    pub fn from_degrees(longitude: f64, latitude: f64, height: f64) -> Self {
        Cartographic {
            longitude: longitude.to_radians(),
            latitude: latitude.to_radians(),
            height,
        }
    }
    pub fn equals_epsilon(&self, right: &Cartographic, epsilon: f64) -> bool {
        equals_epsilon(self.longitude, right.longitude, None, Some(epsilon))
            && equals_epsilon(self.latitude, right.latitude, None, Some(epsilon))
            && equals_epsilon(self.height, right.height, None, Some(epsilon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn from_degrees_converts_angles_only() {
        let c = Cartographic::from_degrees(45.0, -45.0, 1000.0);
        assert!(c.equals_epsilon(
            &Cartographic::from_radians(FRAC_PI_4, -FRAC_PI_4, 1000.0),
            crate::math::EPSILON14,
        ));
    }
}
