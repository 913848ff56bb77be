//! Miter cuts from the collision zone of two overlapping parts.
//!
//! The overlap of the two X-Z footprints is split along the diagonal from its
//! outer-front corner to its inner-back corner. The front member keeps the
//! front triangle and the back member keeps the back triangle, so each part
//! removes the other half.

use crate::config::MITER_ANGLE;
use crate::error::{CabinetError, Result};
use crate::model::{MiterCut, Part, PartList, PointXz, RemoveFrom, YRange};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Which outside corner of the cabinet a joint is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    Left,
    Right,
}

/// Joints applied after layout: (end panel, stile, corner).
const CORNER_JOINTS: [(&str, &str, Corner); 2] = [
    ("left_end_panel", "left_stile", Corner::Left),
    ("right_end_panel", "right_stile", Corner::Right),
];

fn miter_error(part: &Part, reason: impl Into<String>) -> CabinetError {
    CabinetError::MiterGeometry {
        part: part.key.clone(),
        reason: reason.into(),
    }
}

/// Cuts for both parts of a corner joint, in argument order.
///
/// Returns `Ok(None)` when the footprints do not overlap.
pub fn miter_pair(a: &Part, b: &Part, corner: Corner) -> Result<Option<(MiterCut, MiterCut)>> {
    let x_min = a.position.x.max(b.position.x);
    let x_max = a.x_max().min(b.x_max());
    let z_min = a.position.z.max(b.position.z);
    let z_max = a.z_max().min(b.z_max());
    if x_max <= x_min || z_max <= z_min {
        return Ok(None);
    }

    if a.y_max().min(b.y_max()) <= a.position.y.max(b.position.y) {
        return Err(miter_error(
            a,
            format!("no vertical overlap with '{}'", b.key),
        ));
    }

    let (outer_x, inner_x) = match corner {
        Corner::Left => (x_min, x_max),
        Corner::Right => (x_max, x_min),
    };
    let outer_front = PointXz::new(outer_x, z_min);
    let inner_back = PointXz::new(inner_x, z_max);
    let inner_front = PointXz::new(inner_x, z_min);
    let outer_back = PointXz::new(outer_x, z_max);

    // Each cut runs the full height of its own part.
    let cut = |part: &Part, vertices_xz: [PointXz; 3], remove_from: RemoveFrom| MiterCut {
        vertices_xz,
        y_range: YRange::new(part.position.y, part.y_max()),
        miter_angle: MITER_ANGLE,
        remove_from,
    };
    let back_triangle = [outer_front, inner_back, outer_back];
    let front_triangle = [outer_front, inner_back, inner_front];

    let (a_cut, b_cut) = if a.center_z() <= b.center_z() {
        (
            cut(a, back_triangle, RemoveFrom::CollisionZoneBack),
            cut(b, front_triangle, RemoveFrom::CollisionZoneFront),
        )
    } else {
        (
            cut(a, front_triangle, RemoveFrom::CollisionZoneFront),
            cut(b, back_triangle, RemoveFrom::CollisionZoneBack),
        )
    };
    if !a_cut.is_non_collinear() || !b_cut.is_non_collinear() {
        return Err(miter_error(
            a,
            format!("collision zone with '{}' is too thin to split", b.key),
        ));
    }

    Ok(Some((a_cut, b_cut)))
}

/// The cut `part` needs where it meets `other`.
pub fn compute_miter(part: &Part, other: &Part, corner: Corner) -> Result<Option<MiterCut>> {
    Ok(miter_pair(part, other, corner)?.map(|(cut, _)| cut))
}

/// Miter every stile against its finished end panel.
///
/// A joint that cannot be computed leaves both parts as plain boxes; the
/// returned messages describe each one.
pub fn apply_miter_joints(parts: &mut PartList) -> Vec<String> {
    let mut warnings = Vec::new();

    for (panel_key, stile_key, corner) in CORNER_JOINTS {
        let (Some(panel), Some(stile)) = (parts.get(panel_key), parts.get(stile_key)) else {
            continue;
        };

        match miter_pair(panel, stile, corner) {
            Ok(Some((panel_cut, stile_cut))) => {
                debug!("Mitered {} against {}", stile_key, panel_key);
                if let Some(p) = parts.get_mut(panel_key) {
                    p.miter_cut = Some(panel_cut);
                }
                if let Some(s) = parts.get_mut(stile_key) {
                    s.miter_cut = Some(stile_cut);
                }
            }
            Ok(None) => {
                debug!("{} does not meet {}; no miter", stile_key, panel_key);
            }
            Err(e) => {
                let message = format!("{}; leaving corner unmitered", e);
                warn!("{}", message);
                warnings.push(message);
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConstructionStandards;
    use crate::derive::derive_dimensions;
    use crate::layout::{layout_parts, LayoutOptions};
    use crate::model::{CabinetEnvelope, CabinetType, Dimensions, PartType, Vec3};

    fn part(key: &str, part_type: PartType, pos: (f64, f64, f64), dims: (f64, f64, f64)) -> Part {
        Part::new(
            key,
            key,
            part_type,
            Vec3::new(pos.0, pos.1, pos.2),
            Dimensions::new(dims.0, dims.1, dims.2),
        )
    }

    fn point_set(cut: &MiterCut) -> Vec<(f64, f64)> {
        let mut pts: Vec<(f64, f64)> = cut.vertices_xz.iter().map(|p| (p.x, p.z)).collect();
        pts.sort_by(|a, b| a.partial_cmp(b).unwrap());
        pts
    }

    // ==================== Sample Fixture ====================

    #[test]
    fn test_sample_stile_end_panel_diagonal() {
        let stile = part("left_stile", PartType::FaceFrame, (-1.0, -4.0, 0.0), (1.75, 32.75, 1.0));
        let panel = part("left_end_panel", PartType::FinishedEnd, (-1.0, -4.0, 0.0), (0.75, 32.75, 19.25));

        let (stile_cut, panel_cut) = miter_pair(&stile, &panel, Corner::Left).unwrap().unwrap();

        for cut in [&stile_cut, &panel_cut] {
            assert_eq!(cut.vertices_xz[0], PointXz::new(-1.0, 0.0));
            assert_eq!(cut.vertices_xz[1], PointXz::new(-0.25, 1.0));
            assert_eq!(cut.y_range, YRange::new(-4.0, 28.75));
        }
        assert_eq!(stile_cut.remove_from, RemoveFrom::CollisionZoneBack);
        assert_eq!(panel_cut.remove_from, RemoveFrom::CollisionZoneFront);
        assert_eq!(point_set(&stile_cut), vec![(-1.0, 0.0), (-1.0, 1.0), (-0.25, 1.0)]);
        assert_eq!(point_set(&panel_cut), vec![(-1.0, 0.0), (-0.25, 0.0), (-0.25, 1.0)]);
    }

    #[test]
    fn test_pair_order_does_not_change_roles() {
        let stile = part("left_stile", PartType::FaceFrame, (-1.0, 0.0, 0.0), (1.5, 30.0, 1.5));
        let panel = part("left_end_panel", PartType::FinishedEnd, (-1.0, -4.5, 0.0), (0.75, 34.5, 21.5));
        let from_stile = compute_miter(&stile, &panel, Corner::Left).unwrap().unwrap();
        let (_, from_panel_pair) = miter_pair(&panel, &stile, Corner::Left).unwrap().unwrap();
        assert_eq!(from_stile, from_panel_pair);
    }

    #[test]
    fn test_each_cut_spans_its_own_part() {
        let stile = part("left_stile", PartType::FaceFrame, (-1.0, 0.0, 0.0), (2.5, 30.0, 1.5));
        let panel = part("left_end_panel", PartType::FinishedEnd, (-1.0, -4.5, 0.0), (0.75, 34.5, 21.5));
        let (stile_cut, panel_cut) = miter_pair(&stile, &panel, Corner::Left).unwrap().unwrap();
        assert_eq!(stile_cut.y_range, YRange::new(0.0, 30.0));
        assert_eq!(panel_cut.y_range, YRange::new(-4.5, 30.0));
        assert_eq!(stile_cut.vertices_xz[1], panel_cut.vertices_xz[1]);
    }

    // ==================== Right Corner ====================

    #[test]
    fn test_right_corner_mirrors() {
        let stile = part("right_stile", PartType::FaceFrame, (29.5, 0.0, 0.0), (1.5, 30.0, 1.5));
        let panel = part("right_end_panel", PartType::FinishedEnd, (30.25, -4.5, 0.0), (0.75, 34.5, 21.5));
        let cut = compute_miter(&stile, &panel, Corner::Right).unwrap().unwrap();
        assert_eq!(cut.vertices_xz[0], PointXz::new(31.0, 0.0));
        assert_eq!(cut.vertices_xz[1], PointXz::new(30.25, 1.5));
        assert_eq!(cut.y_range, YRange::new(0.0, 30.0));
    }

    // ==================== Failure Modes ====================

    #[test]
    fn test_no_overlap() {
        let a = part("a", PartType::FaceFrame, (0.0, 0.0, 0.0), (1.5, 30.0, 1.5));
        let b = part("b", PartType::FinishedEnd, (5.0, 0.0, 0.0), (0.75, 30.0, 20.0));
        assert_eq!(compute_miter(&a, &b, Corner::Left).unwrap(), None);
    }

    #[test]
    fn test_empty_y_range_is_error() {
        let a = part("a", PartType::FaceFrame, (0.0, 0.0, 0.0), (1.5, 10.0, 1.5));
        let b = part("b", PartType::FinishedEnd, (0.0, 10.0, 0.0), (0.75, 10.0, 20.0));
        let err = compute_miter(&a, &b, Corner::Left).unwrap_err();
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_apply_leaves_failed_corner_unmitered() {
        let mut parts = PartList::new();
        parts.push(part("left_stile", PartType::FaceFrame, (0.0, 0.0, 0.0), (1.5, 10.0, 1.5)));
        parts.push(part("left_end_panel", PartType::FinishedEnd, (0.0, 10.0, 0.0), (0.75, 10.0, 20.0)));
        let warnings = apply_miter_joints(&mut parts);
        assert_eq!(warnings.len(), 1);
        assert!(!parts.get("left_stile").unwrap().is_mitered());
        assert!(!parts.get("left_end_panel").unwrap().is_mitered());
    }

    // ==================== Layout Grid ====================

    #[test]
    fn test_left_stile_miter_non_collinear_across_sizes() {
        let standards = ConstructionStandards::default();
        for width in [15.0, 24.0, 30.0, 36.0, 48.0] {
            for depth in [12.0, 18.0, 21.0, 24.0] {
                let env = CabinetEnvelope::new(width, 34.5, depth, CabinetType::Vanity);
                let derived = derive_dimensions(&env, &standards).unwrap();
                let mut parts = layout_parts(&env, &derived, &LayoutOptions::default(), &standards)
                    .unwrap()
                    .parts;
                assert!(apply_miter_joints(&mut parts).is_empty());
                for key in ["left_stile", "right_stile", "left_end_panel"] {
                    let cut = parts.get(key).unwrap().miter_cut.clone().unwrap();
                    assert!(cut.is_non_collinear(), "{key} at {width} x {depth}");
                    assert!(cut.y_range.span() > 0.0);
                }
            }
        }
    }
}
