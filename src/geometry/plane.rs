use glam::DVec3;

/// A plane in Hessian normal form: `normal.dot(p) + distance == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Plane {
    pub normal: DVec3,
    pub distance: f64,
}
impl Plane {
    /// Plane through the origin with the given unit normal.
    pub fn from_normal(normal: DVec3) -> Self {
        Plane {
            normal,
            distance: 0.0,
        }
    }
    pub fn from_point_normal(point: DVec3, normal: DVec3) -> Self {
        Plane {
            normal,
            distance: -normal.dot(point),
        }
    }
    /// Signed distance from `point` to the plane, positive on the normal side.
    pub fn get_point_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.distance
    }
    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point_onto_plane(&self, point: DVec3) -> DVec3 {
        point - self.normal * self.get_point_distance(point)
    }
}
