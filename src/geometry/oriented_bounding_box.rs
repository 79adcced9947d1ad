use std::f64::consts::FRAC_PI_2;

use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::ellipsoid::{CartographicToCartesian, Ellipsoid};
use crate::error::GeometryError;
use crate::geometry::{Box3, Extent, Plane};
use crate::math::Cartographic;

/// Height bounds last applied by [`OrientedBoundingBox::extrude`], in meters
/// relative to the ellipsoid surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: f64,
    pub max: f64,
}

/// Diagnostics returned by [`OrientedBoundingBox::extrude`]: how much the
/// box's half height grew compared to the natural box, and the translation
/// applied along the local height axis. Callers use this to reconcile
/// dependent visual bounds; it is not stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrusion {
    pub half_height_delta: f64,
    pub z_translation: f64,
}

/// An oriented bounding box for a geographic tile: an axis-aligned box in a
/// local tangent frame plus a rigid transform into the Earth-centered world
/// frame.
///
/// Built once per tile from its extent and mutated in place by [`extrude`]
/// whenever the tile's known elevation range changes. The local frame has x
/// along the east-west tangent direction, y along north-south and z along the
/// surface normal at the extent's center.
///
/// Known approximation: the asymmetry of the ellipsoid is corrected on the
/// north-south axis only, from the south edge midpoint sample. The fit is
/// exact for equator-symmetric tiles and tight for modest tiles away from the
/// poles; tiny extents at the poles are not special-cased and may be
/// ill-conditioned because longitude is undefined there.
///
/// [`extrude`]: OrientedBoundingBox::extrude
#[derive(Debug, PartialEq)]
pub struct OrientedBoundingBox {
    /// Current box in the local frame; z bounds move under extrusion.
    pub local_box: Box3,
    /// The box as originally computed, never mutated after construction.
    /// Extrusions are always derived from it so they never accumulate.
    pub natural_box: Box3,
    /// Rotation mapping the local frame to world space.
    pub orientation: DQuat,
    /// World-space translation of the local frame's origin.
    pub position: DVec3,
    /// `position` as of construction, before any height-driven shift.
    pub origin_position: DVec3,
    pub height_range: HeightRange,
    /// The 8 box corners in world space, kept consistent with `local_box`,
    /// `orientation` and `position`.
    pub world_corners: [DVec3; 8],
    /// World-space position of the extent's center on the ellipsoid.
    pub center_world: DVec3,
}

impl OrientedBoundingBox {
    /// Builds the bounding box of `extent` on `ellipsoid` (WGS84 when
    /// `None`), extruded to `[min_height, max_height]` when either bound is
    /// nonzero.
    ///
    /// Fails with [`GeometryError::InvalidCrs`] when the extent is not
    /// geographic. Zero-area extents are not rejected; they produce a box of
    /// zero thickness on the degenerate axis.
    pub fn from_extent(
        extent: &Extent,
        min_height: f64,
        max_height: f64,
        ellipsoid: Option<&Ellipsoid>,
    ) -> Result<Self, GeometryError> {
        let ellipsoid = ellipsoid.unwrap_or(&Ellipsoid::WGS84);
        Self::from_extent_with(extent, min_height, max_height, ellipsoid)
    }

    /// Same as [`from_extent`] with an injected geographic-to-Cartesian
    /// conversion.
    ///
    /// The box is aligned to the tangent plane at the extent's center and
    /// sized from 9 cardinal samples: the 4 corners, the 4 edge midpoints and
    /// the center. The signed span of the samples' distances to the tangent
    /// plane bounds the height axis.
    ///
    /// [`from_extent`]: OrientedBoundingBox::from_extent
    pub fn from_extent_with<C: CartographicToCartesian>(
        extent: &Extent,
        min_height: f64,
        max_height: f64,
        converter: &C,
    ) -> Result<Self, GeometryError> {
        if !extent.is_geographic() {
            return Err(GeometryError::InvalidCrs(extent.crs));
        }

        let center = extent.center();
        let center_world = converter.cartographic_to_cartesian(&center);
        let normal = Ellipsoid::geocentric_surface_normal(center_world);

        let dimensions = extent.dimensions();
        let mid_longitude = extent.west + dimensions.x * 0.5;
        let mid_latitude = extent.south + dimensions.y * 0.5;

        // Cardinal samples, clockwise from the north-west corner, center last:
        //      0---1---2
        //      |       |
        //      7   8   3
        //      |       |
        //      6---5---4
        let cardinals = [
            Cartographic::from_radians(extent.west, extent.north, 0.0),
            Cartographic::from_radians(mid_longitude, extent.north, 0.0),
            Cartographic::from_radians(extent.east, extent.north, 0.0),
            Cartographic::from_radians(extent.east, mid_latitude, 0.0),
            Cartographic::from_radians(extent.east, extent.south, 0.0),
            Cartographic::from_radians(mid_longitude, extent.south, 0.0),
            Cartographic::from_radians(extent.west, extent.south, 0.0),
            Cartographic::from_radians(extent.west, mid_latitude, 0.0),
            center,
        ];

        // Scan rotation: align the center normal with +Z, then rotate the
        // center longitude out about Z so every tile's east-west direction
        // lands on the same axis.
        let rotate_extent =
            DQuat::from_rotation_z(-center.longitude) * DQuat::from_rotation_arc(normal, DVec3::Z);

        // The plane passes through the origin, not through the tile center:
        // each sample's tangential offset is measured from the planet
        // center's projection, which cancels out of the min/max spans.
        let tangent_plane = Plane::from_normal(normal);

        let mut min_sag = f64::MAX;
        let mut max_sag = f64::MIN;
        let mut min = DVec2::MAX;
        let mut max = DVec2::MIN;
        let mut south_mid_offset = 0.0;
        for (index, cardinal) in cardinals.iter().enumerate() {
            let world = converter.cartographic_to_cartesian(cardinal);
            let projected = tangent_plane.project_point_onto_plane(world);
            // The surface curves away from the tangent plane between the
            // samples. The sag is signed: the plane normal is geocentric, so
            // away from the equator it tilts off the geodetic surface and
            // samples can sit above the plane as well as below it. The box's
            // height axis covers the whole signed interval.
            let sag = tangent_plane.get_point_distance(world - center_world);
            min_sag = min_sag.min(sag);
            max_sag = max_sag.max(sag);

            let rotated = rotate_extent * projected;
            min = min.min(DVec2::new(rotated.x, rotated.y));
            max = max.max(DVec2::new(rotated.x, rotated.y));
            if index == 5 {
                south_mid_offset = rotated.x;
            }
        }

        let half_length = (max.y - min.y) * 0.5;
        let half_width = (max.x - min.x) * 0.5;
        let half_max_height = (max_sag - min_sag) * 0.5;
        // Midpoint of the sag interval; the center sample sags by exactly
        // zero, so this is -half_max_height for equator-symmetric tiles.
        let sag_offset = (max_sag + min_sag) * 0.5;
        let natural_box = Box3::from_corners(
            DVec3::new(-half_length, -half_width, -half_max_height),
            DVec3::new(half_length, half_width, half_max_height),
        );

        // Cardinals 6, 5 and 4 are not collinear on the ellipsoid; shifting
        // the box on its width axis by the gap between the south edge
        // midpoint and the corner-derived half width recenters it over the
        // curvature bulge.
        let delta = half_width - south_mid_offset.abs();

        // Local x = east-west, y = north-south, z = surface normal.
        let orientation = rotate_extent.inverse() * DQuat::from_rotation_z(FRAC_PI_2);
        let origin_position = center_world + orientation * DVec3::new(0.0, delta, sag_offset);

        let mut obb = OrientedBoundingBox {
            local_box: natural_box,
            natural_box,
            orientation,
            position: origin_position,
            origin_position,
            height_range: HeightRange::default(),
            world_corners: [DVec3::ZERO; 8],
            center_world,
        };
        obb.refresh_world_corners();
        trace!(
            half_length,
            half_width,
            half_max_height,
            "built oriented bounding box from extent"
        );
        if min_height != 0.0 || max_height != 0.0 {
            obb.extrude(min_height, max_height);
        }
        Ok(obb)
    }

    /// Moves the box's height bounds to `[min_height, max_height]` relative
    /// to the natural box, keeping the box symmetric about its local origin
    /// and pushing the asymmetry into the world transform.
    ///
    /// Always computed from `natural_box` and `origin_position`, so repeated
    /// calls do not accumulate: extruding twice with the same bounds is a
    /// no-op the second time, and a later call fully replaces an earlier one.
    pub fn extrude(&mut self, min_height: f64, max_height: f64) -> Extrusion {
        self.height_range = HeightRange {
            min: min_height,
            max: max_height,
        };
        let depth = (self.natural_box.min.z - self.natural_box.max.z).abs();
        self.local_box.min.z = self.natural_box.min.z + min_height;
        self.local_box.max.z = self.natural_box.max.z + max_height;

        let half_size = (self.local_box.min.z - self.local_box.max.z).abs() * 0.5;
        let z_translation = self.local_box.min.z + half_size;
        self.local_box.min.z = -half_size;
        self.local_box.max.z = half_size;

        self.position = self.origin_position + self.orientation * DVec3::new(0.0, 0.0, z_translation);
        self.refresh_world_corners();
        trace!(min_height, max_height, z_translation, "extruded bounding box");
        Extrusion {
            half_height_delta: half_size - depth * 0.5,
            z_translation,
        }
    }

    /// Recomputes the cached world-space corners from the current local box
    /// and transform. Must follow every mutation of `local_box`,
    /// `orientation` or `position`.
    pub fn refresh_world_corners(&mut self) {
        let corners = self.local_box.corners();
        for (world, local) in self.world_corners.iter_mut().zip(corners.iter()) {
            *world = self.position + self.orientation * *local;
        }
    }
}

impl Clone for OrientedBoundingBox {
    /// A clone restarts from the natural box: it shares no mutable state with
    /// the source, carries the source's transform, and drops any extrusion
    /// (its `height_range` is zero) so that later extrusions of either box
    /// leave the other untouched.
    fn clone(&self) -> Self {
        let mut obb = OrientedBoundingBox {
            local_box: self.natural_box,
            natural_box: self.natural_box,
            orientation: self.orientation,
            position: self.position,
            origin_position: self.origin_position,
            height_range: HeightRange::default(),
            world_corners: [DVec3::ZERO; 8],
            center_world: self.center_world,
        };
        obb.refresh_world_corners();
        obb
    }
}
