//! Derived dimensions of a cabinet box.
//!
//! Everything downstream of the envelope is computed here once, so the layout
//! engine never re-derives interior sizes on its own.

use crate::config::ConstructionStandards;
use crate::error::{CabinetError, Result};
use crate::model::CabinetEnvelope;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Interior clear space between the sides, bottom, stretchers and back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteriorDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

/// A rectangular face frame opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub width: f64,
    pub height: f64,
}

/// Dimensions derived from an envelope and the construction standards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedDimensions {
    /// Toe kick height (0 for wall cabinets).
    pub toe_kick_height: f64,
    /// Box height above the toe kick.
    pub box_height: f64,
    /// Interior clear space.
    pub interior: InteriorDimensions,
    /// Usable depth for drawers and shelves.
    pub cavity_depth: f64,
    /// Face frame opening between the outer stiles and rails.
    pub face_frame_opening: Opening,
}

fn require_positive(quantity: &str, value: f64) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CabinetError::invalid(quantity, value))
    }
}

fn require_non_negative(quantity: &str, value: f64) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CabinetError::invalid(quantity, value))
    }
}

/// Check the construction standards before they feed any arithmetic.
fn validate_standards(standards: &ConstructionStandards) -> Result<()> {
    for (name, value) in standards.entries() {
        match name {
            "component_gap" | "toe_kick_recess" | "finished_end_gap"
            | "finished_end_wall_extension" => {
                require_non_negative(name, value)?;
            }
            _ => {
                require_positive(name, value)?;
            }
        }
    }
    Ok(())
}

/// Derive toe kick, box height, interior, cavity and face frame opening.
///
/// Fails with [`CabinetError::InvalidConfiguration`] naming the first
/// envelope or derived quantity that is not positive.
pub fn derive_dimensions(
    envelope: &CabinetEnvelope,
    standards: &ConstructionStandards,
) -> Result<DerivedDimensions> {
    let width = require_positive("width", envelope.width)?;
    let height = require_positive("height", envelope.height)?;
    let depth = require_positive("depth", envelope.depth)?;
    validate_standards(standards)?;

    let mt = standards.material_thickness;

    let toe_kick_height = if envelope.cabinet_type.is_floor_standing() {
        require_non_negative(
            "toe_kick_height",
            envelope
                .toe_kick_height
                .unwrap_or(standards.toe_kick_height),
        )?
    } else {
        0.0
    };

    let box_height = require_positive("box_height", height - toe_kick_height)?;

    let interior = InteriorDimensions {
        width: require_positive("interior.width", width - 2.0 * mt)?,
        height: require_positive(
            "interior.height",
            box_height - standards.stretcher_depth - mt,
        )?,
        depth: require_positive(
            "interior.depth",
            depth - standards.face_frame_stile_depth - standards.back_panel_thickness,
        )?,
    };

    let cavity_depth = require_positive("cavity_depth", interior.depth - standards.component_gap)?;

    let face_frame_opening = Opening {
        width: require_positive(
            "face_frame_opening.width",
            width - 2.0 * standards.face_frame_stile_width,
        )?,
        height: require_positive(
            "face_frame_opening.height",
            box_height - 2.0 * standards.face_frame_rail_width,
        )?,
    };

    debug!(
        "Derived {}: box {:.4}\" tall, interior {:.4} x {:.4} x {:.4}",
        envelope.cabinet_type, box_height, interior.width, interior.height, interior.depth
    );

    Ok(DerivedDimensions {
        toe_kick_height,
        box_height,
        interior,
        cavity_depth,
        face_frame_opening,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::model::CabinetType;

    fn derive(envelope: CabinetEnvelope) -> Result<DerivedDimensions> {
        derive_dimensions(&envelope, &ConstructionStandards::default())
    }

    // ==================== Base Cabinet ====================

    #[test]
    fn test_base_cabinet() {
        let d = derive(CabinetEnvelope::new(36.0, 34.5, 24.0, CabinetType::Base)).unwrap();
        assert_eq!(d.toe_kick_height, 4.5);
        assert_eq!(d.box_height, 30.0);
        assert_eq!(d.interior.width, 34.5);
        assert_eq!(d.interior.height, 26.25);
        assert_eq!(d.interior.depth, 22.25);
        assert_eq!(d.cavity_depth, 22.125);
        assert_eq!(d.face_frame_opening.width, 33.0);
        assert_eq!(d.face_frame_opening.height, 27.0);
    }

    #[test]
    fn test_width_adds_up() {
        for width in [12.0, 18.0, 24.5, 36.0, 41.75] {
            let d = derive(CabinetEnvelope::new(width, 34.5, 24.0, CabinetType::Base)).unwrap();
            assert!((0.75 + d.interior.width + 0.75 - width).abs() < 1e-9);
        }
    }

    #[test]
    fn test_toe_kick_override() {
        let env = CabinetEnvelope::new(24.0, 34.5, 24.0, CabinetType::Vanity).with_toe_kick(4.0);
        let d = derive(env).unwrap();
        assert_eq!(d.toe_kick_height, 4.0);
        assert_eq!(d.box_height + d.toe_kick_height, 34.5);
    }

    // ==================== Wall Cabinet ====================

    #[test]
    fn test_wall_has_no_toe_kick() {
        let env = CabinetEnvelope::new(30.0, 30.0, 12.0, CabinetType::Wall).with_toe_kick(4.5);
        let d = derive(env).unwrap();
        assert_eq!(d.toe_kick_height, 0.0);
        assert_eq!(d.box_height, 30.0);
    }

    #[test]
    fn test_custom_has_no_toe_kick() {
        let d = derive(CabinetEnvelope::new(30.0, 34.5, 24.0, CabinetType::Custom)).unwrap();
        assert_eq!(d.toe_kick_height, 0.0);
        assert_eq!(d.box_height, 34.5);
    }

    // ==================== Invalid Configuration ====================

    #[test]
    fn test_non_positive_envelope() {
        let err = derive(CabinetEnvelope::new(0.0, 34.5, 24.0, CabinetType::Base)).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfiguration);
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn test_shallow_cabinet_fails_on_interior_depth() {
        let err = derive(CabinetEnvelope::new(24.0, 34.5, 1.5, CabinetType::Base)).unwrap_err();
        match err {
            CabinetError::InvalidConfiguration { quantity, value } => {
                assert_eq!(quantity, "interior.depth");
                assert_eq!(value, -0.25);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_height_below_toe_kick() {
        let err = derive(CabinetEnvelope::new(24.0, 4.0, 24.0, CabinetType::Base)).unwrap_err();
        assert!(err.to_string().contains("box_height"));
    }

    #[test]
    fn test_non_positive_standard() {
        let standards = ConstructionStandards {
            material_thickness: 0.0,
            ..Default::default()
        };
        let env = CabinetEnvelope::new(24.0, 34.5, 24.0, CabinetType::Base);
        let err = derive_dimensions(&env, &standards).unwrap_err();
        assert!(err.to_string().contains("material_thickness"));
    }
}
