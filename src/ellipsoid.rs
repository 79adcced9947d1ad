use glam::DVec3;

use crate::math::Cartographic;

/// Conversion from a geographic coordinate to a point in a fixed
/// Earth-centered Cartesian frame.
///
/// The bounding-box builder only needs this one operation from the geodesy
/// layer, so it is a trait rather than a hard dependency on [`Ellipsoid`];
/// tests inject simplified converters through it.
pub trait CartographicToCartesian {
    fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3;
}

/// An ellipsoid of revolution centered at the origin, with its axes aligned
/// to the Cartesian axes and the z axis through the poles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    pub radii: DVec3,
    pub radii_squared: DVec3,
}
impl Ellipsoid {
    pub const WGS84: Ellipsoid = Ellipsoid::new(6378137.0, 6378137.0, 6356752.3142451793);
    pub const UNIT_SPHERE: Ellipsoid = Ellipsoid::new(1.0, 1.0, 1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Ellipsoid {
            radii: DVec3::new(x, y, z),
            radii_squared: DVec3::new(x * x, y * y, z * z),
        }
    }
    /// Unit normal of the sphere through `position`, i.e. the direction from
    /// the ellipsoid center to the point.
    pub fn geocentric_surface_normal(position: DVec3) -> DVec3 {
        position.normalize()
    }
    /// Unit normal of the ellipsoid surface at a geographic coordinate.
    pub fn geodetic_surface_normal_cartographic(&self, cartographic: &Cartographic) -> DVec3 {
        let cos_latitude = cartographic.latitude.cos();
        DVec3::new(
            cos_latitude * cartographic.longitude.cos(),
            cos_latitude * cartographic.longitude.sin(),
            cartographic.latitude.sin(),
        )
        .normalize()
    }
    pub fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        let n = self.geodetic_surface_normal_cartographic(cartographic);
        let mut k = self.radii_squared * n;
        let gamma = n.dot(k).sqrt();
        k /= gamma;
        k + n * cartographic.height
    }
}
impl CartographicToCartesian for Ellipsoid {
    fn cartographic_to_cartesian(&self, cartographic: &Cartographic) -> DVec3 {
        Ellipsoid::cartographic_to_cartesian(self, cartographic)
    }
}
