//! Miter cut descriptor: a triangular prism to subtract from a part.

use serde::{Deserialize, Serialize};

/// Point in the native X-Z plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointXz {
    pub x: f64,
    pub z: f64,
}

impl PointXz {
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// Extrusion span along the native Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YRange {
    pub start: f64,
    pub end: f64,
}

impl YRange {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length of the span (negative when reversed).
    pub fn span(&self) -> f64 {
        self.end - self.start
    }
}

/// Which half of the collision zone a cut removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoveFrom {
    /// The triangle on the front (smaller z) side of the diagonal.
    CollisionZoneFront,
    /// The triangle on the back (larger z) side of the diagonal.
    CollisionZoneBack,
}

/// Triangular-prism cutter for a mitered corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MiterCut {
    /// Triangle cross-section in the X-Z plane.
    pub vertices_xz: [PointXz; 3],
    /// Extrusion span along Y.
    pub y_range: YRange,
    /// Nominal joint angle in degrees.
    pub miter_angle: f64,
    /// Which half of the collision zone is removed.
    pub remove_from: RemoveFrom,
}

impl MiterCut {
    /// Signed area of the triangle (positive when counter-clockwise in X-Z).
    pub fn signed_area(&self) -> f64 {
        let [a, b, c] = self.vertices_xz;
        ((b.x - a.x) * (c.z - a.z) - (c.x - a.x) * (b.z - a.z)) / 2.0
    }

    /// Whether the triangle has a non-zero area.
    pub fn is_non_collinear(&self) -> bool {
        self.signed_area().abs() > crate::config::EPS * crate::config::EPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cut(vertices: [(f64, f64); 3]) -> MiterCut {
        MiterCut {
            vertices_xz: vertices.map(|(x, z)| PointXz::new(x, z)),
            y_range: YRange::new(0.0, 30.0),
            miter_angle: 45.0,
            remove_from: RemoveFrom::CollisionZoneFront,
        }
    }

    #[test]
    fn test_signed_area() {
        let c = cut([(-1.0, 0.0), (-0.25, 1.0), (-0.25, 0.0)]);
        assert!((c.signed_area().abs() - 0.375).abs() < 1e-12);
        assert!(c.is_non_collinear());
    }

    #[test]
    fn test_collinear() {
        let c = cut([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        assert!(!c.is_non_collinear());
    }

    #[test]
    fn test_remove_from_tags() {
        let json = serde_json::to_string(&RemoveFrom::CollisionZoneBack).unwrap();
        assert_eq!(json, "\"collision_zone_back\"");
    }
}
