//! Position validation: carcass parts must touch and add up.

use crate::config::{float_cmp::within, POSITION_TOLERANCE};
use crate::derive::DerivedDimensions;
use crate::model::{CabinetEnvelope, PartList};
use serde::Serialize;

/// Validation result with warnings.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }

    /// Record an error unless `actual` is within tolerance of `expected`.
    fn check(&mut self, what: &str, actual: f64, expected: f64) {
        if !within(actual, expected, POSITION_TOLERANCE) {
            self.add_error(format!("{what} should be {expected}, got {actual}"));
        }
    }
}

fn validate_box(parts: &PartList, envelope: &CabinetEnvelope, box_height: f64) -> ValidationResult {
    let mut result = ValidationResult::ok();

    let Some(bottom) = parts.get("bottom") else {
        return ValidationResult::error("Bottom panel missing");
    };
    result.check("Bottom panel Y", bottom.position.y, 0.0);
    let bottom_top = bottom.y_max();

    for (key, label) in [("left_side", "Left side"), ("right_side", "Right side")] {
        let Some(side) = parts.get(key) else {
            result.add_error(format!("{label} missing"));
            continue;
        };
        result.check(&format!("{label} Y (on top of bottom)"), side.position.y, bottom_top);
        let top = side.y_max();
        if !within(top, box_height, POSITION_TOLERANCE)
            && !within(top, box_height - bottom.dimensions.h, POSITION_TOLERANCE)
        {
            result.add_error(format!(
                "{label} top should be at box height {box_height}, got {top}"
            ));
        }
    }

    if let Some(left) = parts.get("left_side") {
        result.check("Left side X", left.position.x, 0.0);
    }
    if let Some(right) = parts.get("right_side") {
        result.check("Right side right edge", right.x_max(), envelope.width);
    }

    match parts.get("back") {
        Some(back) => result.check("Back rear face Z", back.z_max(), envelope.depth),
        None => result.add_warning("Back panel missing"),
    }

    result
}

fn validate_toe_kick(parts: &PartList, derived: &DerivedDimensions) -> ValidationResult {
    let mut result = ValidationResult::ok();
    if derived.toe_kick_height <= 0.0 {
        return result;
    }
    match parts.get("toe_kick") {
        Some(toe_kick) => {
            result.check("Toe kick Y", toe_kick.position.y, -derived.toe_kick_height);
            result.check("Top of toe kick", toe_kick.y_max(), 0.0);
        }
        None => result.add_warning("Toe kick missing on a floor-standing cabinet"),
    }
    result
}

/// Check that the carcass parts touch and add up to the envelope.
pub fn validate_positions(
    parts: &PartList,
    envelope: &CabinetEnvelope,
    derived: &DerivedDimensions,
) -> ValidationResult {
    let mut result = validate_box(parts, envelope, derived.box_height);
    result.merge(validate_toe_kick(parts, derived));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConstructionStandards;
    use crate::derive::derive_dimensions;
    use crate::layout::{layout_parts, LayoutOptions};
    use crate::model::CabinetType;

    fn build(envelope: &CabinetEnvelope) -> (PartList, DerivedDimensions) {
        let standards = ConstructionStandards::default();
        let derived = derive_dimensions(envelope, &standards).unwrap();
        let outcome = layout_parts(envelope, &derived, &LayoutOptions::default(), &standards).unwrap();
        (outcome.parts, derived)
    }

    // ==================== ValidationResult ====================

    #[test]
    fn test_merge_propagates_failure() {
        let mut result = ValidationResult::ok();
        result.add_warning("w");
        result.merge(ValidationResult::error("e"));
        assert!(!result.passed);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.errors.len(), 1);
    }

    // ==================== Position Checks ====================

    #[test]
    fn test_layout_passes() {
        for cabinet_type in [CabinetType::Base, CabinetType::Wall, CabinetType::Tall, CabinetType::SinkBase] {
            let env = CabinetEnvelope::new(30.0, 34.5, 24.0, cabinet_type);
            let (parts, derived) = build(&env);
            let result = validate_positions(&parts, &env, &derived);
            assert!(result.passed, "{cabinet_type}: {:?}", result.errors);
            assert!(result.warnings.is_empty());
        }
    }

    #[test]
    fn test_moved_side_fails() {
        let env = CabinetEnvelope::new(30.0, 34.5, 24.0, CabinetType::Base);
        let (mut parts, derived) = build(&env);
        parts.get_mut("right_side").unwrap().position.x += 0.125;
        let result = validate_positions(&parts, &env, &derived);
        assert!(!result.passed);
        assert!(result.errors[0].contains("Right side right edge"));
    }

    #[test]
    fn test_missing_bottom() {
        let env = CabinetEnvelope::new(30.0, 34.5, 24.0, CabinetType::Base);
        let (_, derived) = build(&env);
        let result = validate_positions(&PartList::new(), &env, &derived);
        assert!(!result.passed);
    }
}
