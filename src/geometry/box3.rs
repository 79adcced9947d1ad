use glam::DVec3;

/// An axis-aligned box given by its minimum and maximum corners.
///
/// Corner indexing is fixed and shared with the oriented-bounding-box world
/// corner cache:
///
/// ```text
/// 0: (min, min, min)   4: (min, min, max)
/// 1: (max, min, min)   5: (max, min, max)
/// 2: (max, max, min)   6: (max, max, max)
/// 3: (min, max, min)   7: (min, max, max)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Box3 {
    pub min: DVec3,
    pub max: DVec3,
}
impl Box3 {
    pub const ZERO: Box3 = Box3 {
        min: DVec3::ZERO,
        max: DVec3::ZERO,
    };
    pub fn from_corners(min: DVec3, max: DVec3) -> Self {
        Box3 { min, max }
    }
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
    pub fn corner(&self, index: usize) -> DVec3 {
        let x = if index == 1 || index == 2 || index == 5 || index == 6 {
            self.max.x
        } else {
            self.min.x
        };
        let y = if index == 2 || index == 3 || index == 6 || index == 7 {
            self.max.y
        } else {
            self.min.y
        };
        let z = if index >= 4 { self.max.z } else { self.min.z };
        DVec3::new(x, y, z)
    }
    pub fn corners(&self) -> [DVec3; 8] {
        [
            self.corner(0),
            self.corner(1),
            self.corner(2),
            self.corner(3),
            self.corner(4),
            self.corner(5),
            self.corner(6),
            self.corner(7),
        ]
    }
    pub fn contains_point(&self, point: DVec3, epsilon: f64) -> bool {
        point.x >= self.min.x - epsilon
            && point.x <= self.max.x + epsilon
            && point.y >= self.min.y - epsilon
            && point.y <= self.max.y + epsilon
            && point.z >= self.min.z - epsilon
            && point.z <= self.max.z + epsilon
    }
}
