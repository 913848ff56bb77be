//! Construction standards and shared constants.
//!
//! All lengths are in inches.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Tolerance used when checking that parts "touch and add up".
pub const POSITION_TOLERANCE: f64 = 0.001;

/// Drawer box side/front/back thickness (1/2" Baltic birch).
pub const DRAWER_BOX_THICKNESS: f64 = 0.5;

/// Drawer box bottom thickness (1/4" plywood).
pub const DRAWER_BOTTOM_THICKNESS: f64 = 0.25;

/// Distance from the bottom edge of a drawer side to its dado.
pub const DADO_HEIGHT: f64 = 0.5;

/// Depth of the dado groove the drawer bottom sits in.
pub const DADO_DEPTH: f64 = 0.25;

/// Clearance between the drawer box and the back of the cavity.
pub const DRAWER_REAR_CLEARANCE: f64 = 1.0;

/// Nominal miter angle in degrees. The cut triangle already encodes it.
pub const MITER_ANGLE: f64 = 45.0;

/// Default drawer face overlay on each side of its opening.
pub const DEFAULT_OVERLAY: f64 = 0.5;

/// Default reveal between adjacent faces.
pub const DEFAULT_REVEAL: f64 = 0.125;

/// Default height of a top drawer or false front opening.
pub const DEFAULT_TOP_COMPONENT_HEIGHT: f64 = 6.0;

/// Number of drawers in a default drawer base.
pub const DEFAULT_DRAWER_BASE_COUNT: usize = 3;

/// Shop construction standards.
///
/// Every field has a standard value; a spec file may override any subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionStandards {
    /// Carcass panel thickness (sides, bottom, stretchers).
    pub material_thickness: f64,
    /// Back panel thickness.
    pub back_panel_thickness: f64,
    /// Depth reserved at the front of the box for the face frame.
    pub face_frame_stile_depth: f64,
    /// Face frame stile width.
    pub face_frame_stile_width: f64,
    /// Face frame rail width.
    pub face_frame_rail_width: f64,
    /// Stretcher depth (front to back).
    pub stretcher_depth: f64,
    /// Gap between components and the cavity walls.
    pub component_gap: f64,
    /// Toe kick height for floor-standing cabinets.
    pub toe_kick_height: f64,
    /// Toe kick setback from the cabinet front.
    pub toe_kick_recess: f64,
    /// Gap between a cabinet side and its finished end panel.
    pub finished_end_gap: f64,
    /// Extra finished end depth toward the wall for scribing.
    pub finished_end_wall_extension: f64,
}

impl Default for ConstructionStandards {
    fn default() -> Self {
        Self {
            material_thickness: 0.75,
            back_panel_thickness: 0.25,
            face_frame_stile_depth: 1.5,
            face_frame_stile_width: 1.5,
            face_frame_rail_width: 1.5,
            stretcher_depth: 3.0,
            component_gap: 0.125,
            toe_kick_height: 4.5,
            toe_kick_recess: 3.0,
            finished_end_gap: 0.25,
            finished_end_wall_extension: 0.5,
        }
    }
}

impl ConstructionStandards {
    /// Names and values of every standard, for validation messages.
    pub fn entries(&self) -> [(&'static str, f64); 11] {
        [
            ("material_thickness", self.material_thickness),
            ("back_panel_thickness", self.back_panel_thickness),
            ("face_frame_stile_depth", self.face_frame_stile_depth),
            ("face_frame_stile_width", self.face_frame_stile_width),
            ("face_frame_rail_width", self.face_frame_rail_width),
            ("stretcher_depth", self.stretcher_depth),
            ("component_gap", self.component_gap),
            ("toe_kick_height", self.toe_kick_height),
            ("toe_kick_recess", self.toe_kick_recess),
            ("finished_end_gap", self.finished_end_gap),
            ("finished_end_wall_extension", self.finished_end_wall_extension),
        ]
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if two floats agree within an explicit tolerance.
    #[inline]
    pub fn within(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_standards() {
        let s = ConstructionStandards::default();
        assert_eq!(s.material_thickness, 0.75);
        assert_eq!(s.back_panel_thickness, 0.25);
        assert_eq!(s.face_frame_stile_depth, 1.5);
        assert_eq!(s.component_gap, 0.125);
        assert_eq!(s.stretcher_depth, 3.0);
    }

    #[test]
    fn test_partial_override_from_json() {
        let s: ConstructionStandards =
            serde_json::from_str(r#"{"toe_kick_height": 4.0}"#).expect("valid json");
        assert_eq!(s.toe_kick_height, 4.0);
        assert_eq!(s.material_thickness, 0.75);
    }

    #[test]
    fn test_float_cmp() {
        assert!(float_cmp::approx_eq(1.0, 1.00001));
        assert!(!float_cmp::approx_eq(1.0, 1.001));
        assert!(float_cmp::within(16.0, 16.0005, 0.001));
    }
}
