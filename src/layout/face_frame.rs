//! Face frame: stiles, rails and the vertical component stack.

use super::{DrawerOpening, FalseFront, FinishedEnds, LayoutBuilder};
use crate::config::{ConstructionStandards, EPS};
use crate::error::{CabinetError, Result};
use crate::model::{Dimensions, Part, PartType, Vec3};
use tracing::debug;

/// Horizontal extent of the face frame and the rail span between its stiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceFrameSpan {
    /// Left edge of the left stile.
    pub frame_x: f64,
    /// Overall frame width, stile to stile.
    pub frame_width: f64,
    /// Left end of the rails.
    pub rail_x: f64,
    /// Rail length between the outer stiles.
    pub rail_length: f64,
    /// Standard stile width, used for center stiles.
    pub stile_width: f64,
    pub left_stile_width: f64,
    pub right_stile_width: f64,
}

impl FaceFrameSpan {
    /// Frame over a cabinet of exterior `width`.
    ///
    /// The inner edges of the outer stiles stay one stile width in from the
    /// carcass edges. A stile on a finished-end side is widened outward by
    /// the end panel gap plus its thickness so it meets the panel.
    pub fn new(width: f64, finished_ends: FinishedEnds, standards: &ConstructionStandards) -> Self {
        let extension = standards.finished_end_gap + standards.material_thickness;
        let left = if finished_ends.left { extension } else { 0.0 };
        let right = if finished_ends.right { extension } else { 0.0 };
        let stile_width = standards.face_frame_stile_width;
        Self {
            frame_x: -left,
            frame_width: width + left + right,
            rail_x: stile_width,
            rail_length: width - 2.0 * stile_width,
            stile_width,
            left_stile_width: stile_width + left,
            right_stile_width: stile_width + right,
        }
    }

    /// Right edge of the right stile.
    pub fn frame_x_max(&self) -> f64 {
        self.frame_x + self.frame_width
    }

    /// Width of each of `count` equal openings split by center stiles.
    pub fn opening_width(&self, count: usize) -> f64 {
        let n = count as f64;
        (self.rail_length - (n - 1.0) * self.stile_width) / n
    }
}

/// What fills a stacked opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKind {
    FalseFront,
    Drawer { drawer_height: Option<f64> },
}

impl SlotKind {
    fn label(&self) -> &'static str {
        match self {
            SlotKind::FalseFront => "False front",
            SlotKind::Drawer { .. } => "Drawer",
        }
    }

    fn is_drawer(&self) -> bool {
        matches!(self, SlotKind::Drawer { .. })
    }
}

/// One placed opening in the stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackSlot {
    pub kind: SlotKind,
    /// 1-based index among slots of the same kind.
    pub index: usize,
    /// Bottom of the opening.
    pub opening_y: f64,
    pub height: f64,
}

/// A mid rail below a stacked opening.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MidRail {
    /// Bottom of the rail.
    pub y: f64,
    /// Whether the openings above and below are both drawers.
    pub between_drawers: bool,
}

/// Vertical layout of the face frame opening, top down.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackPlan {
    pub slots: Vec<StackSlot>,
    pub mid_rails: Vec<MidRail>,
    /// Bottom of the lowest rail above the door zone.
    pub door_zone_top: f64,
    /// Top of the bottom rail.
    pub door_zone_bottom: f64,
}

impl StackPlan {
    pub fn door_zone_height(&self) -> f64 {
        self.door_zone_top - self.door_zone_bottom
    }
}

/// Stack false fronts, then drawers, from the top rail downward.
///
/// A component that does not fit ends the stack with a warning.
pub(crate) fn plan_stack(
    builder: &mut LayoutBuilder,
    false_fronts: &[FalseFront],
    drawers: &[DrawerOpening],
    box_height: f64,
    rail_width: f64,
) -> StackPlan {
    let opening_bottom = rail_width;
    let mut cursor = box_height - rail_width;
    let mut slots: Vec<StackSlot> = Vec::new();
    let mut rail_ys: Vec<f64> = Vec::new();

    let components = false_fronts
        .iter()
        .enumerate()
        .map(|(i, f)| (SlotKind::FalseFront, i + 1, f.height))
        .chain(drawers.iter().enumerate().map(|(i, d)| {
            (
                SlotKind::Drawer {
                    drawer_height: d.drawer_height,
                },
                i + 1,
                d.height,
            )
        }));

    let mut closed = false;
    for (kind, index, height) in components {
        let available = cursor - opening_bottom;
        if closed || height > available + EPS {
            builder.warn(format!(
                "{} {} ({}\") does not fit in the remaining {:.4}\" of opening; stack truncated",
                kind.label(),
                index,
                height,
                available.max(0.0)
            ));
            break;
        }
        if height <= 0.0 {
            builder.warn(format!(
                "{} {} has non-positive height {}; skipped",
                kind.label(),
                index,
                height
            ));
            continue;
        }

        cursor -= height;
        slots.push(StackSlot {
            kind,
            index,
            opening_y: cursor,
            height,
        });

        if cursor - opening_bottom > rail_width + EPS {
            cursor -= rail_width;
            rail_ys.push(cursor);
        } else {
            closed = true;
        }
    }

    let mid_rails = rail_ys
        .into_iter()
        .enumerate()
        .map(|(i, y)| MidRail {
            y,
            between_drawers: slots[i].kind.is_drawer()
                && slots.get(i + 1).is_some_and(|s| s.kind.is_drawer()),
        })
        .collect();

    StackPlan {
        slots,
        mid_rails,
        door_zone_top: cursor,
        door_zone_bottom: opening_bottom,
    }
}

/// Stiles, rails, mid rails and center stiles.
pub(crate) fn emit_face_frame(
    builder: &mut LayoutBuilder,
    span: &FaceFrameSpan,
    plan: &StackPlan,
    box_height: f64,
    opening_count: usize,
    standards: &ConstructionStandards,
) -> Result<()> {
    let depth = standards.face_frame_stile_depth;
    let rail_w = standards.face_frame_rail_width;

    let member = |key: &str, name: &str, x: f64, y: f64, w: f64, h: f64| {
        Part::new(
            key,
            name,
            PartType::FaceFrame,
            Vec3::new(x, y, 0.0),
            Dimensions::new(w, h, depth),
        )
    };

    builder.push(member(
        "left_stile",
        "Left Stile",
        span.frame_x,
        0.0,
        span.left_stile_width,
        box_height,
    ))?;
    builder.push(member(
        "right_stile",
        "Right Stile",
        span.frame_x_max() - span.right_stile_width,
        0.0,
        span.right_stile_width,
        box_height,
    ))?;
    builder.push(member(
        "top_rail",
        "Top Rail",
        span.rail_x,
        box_height - rail_w,
        span.rail_length,
        rail_w,
    ))?;
    builder.push(member(
        "bottom_rail",
        "Bottom Rail",
        span.rail_x,
        0.0,
        span.rail_length,
        rail_w,
    ))?;

    for (i, rail) in plan.mid_rails.iter().enumerate() {
        builder.push(member(
            &format!("mid_rail_{}", i + 1),
            &format!("Mid Rail {}", i + 1),
            span.rail_x,
            rail.y,
            span.rail_length,
            rail_w,
        ))?;
    }

    if opening_count < 2 {
        return Ok(());
    }
    let opening = span.opening_width(opening_count);
    if opening <= 0.0 {
        return Err(CabinetError::invalid("face_frame.opening_width", opening));
    }
    let door_height = plan.door_zone_height();
    if door_height <= EPS {
        debug!("No door zone; skipping {} center stiles", opening_count - 1);
        return Ok(());
    }

    let stile_w = span.stile_width;
    for k in 1..opening_count {
        let kf = k as f64;
        builder.push(member(
            &format!("center_stile_{k}"),
            &format!("Center Stile {k}"),
            span.rail_x + kf * opening + (kf - 1.0) * stile_w,
            plan.door_zone_bottom,
            stile_w,
            door_height,
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DegeneratePolicy;

    fn plan(false_fronts: &[FalseFront], drawers: &[DrawerOpening]) -> (StackPlan, usize) {
        let mut builder = LayoutBuilder::new(DegeneratePolicy::Drop);
        let plan = plan_stack(&mut builder, false_fronts, drawers, 30.0, 1.5);
        let warnings = builder.finish().warnings.len();
        (plan, warnings)
    }

    #[test]
    fn test_span_without_finished_ends() {
        let span = FaceFrameSpan::new(36.0, FinishedEnds::none(), &ConstructionStandards::default());
        assert_eq!(span.frame_x, 0.0);
        assert_eq!(span.rail_x, 1.5);
        assert_eq!(span.rail_length, 33.0);
    }

    #[test]
    fn test_span_with_left_finished_end() {
        let ends = FinishedEnds {
            left: true,
            right: false,
        };
        let span = FaceFrameSpan::new(36.0, ends, &ConstructionStandards::default());
        assert_eq!(span.frame_x, -1.0);
        assert_eq!(span.frame_x_max(), 36.0);
        assert_eq!(span.left_stile_width, 2.5);
        assert_eq!(span.right_stile_width, 1.5);
        assert_eq!(span.rail_x, 1.5);
        assert_eq!(span.rail_length, 33.0);
    }

    #[test]
    fn test_opening_width() {
        let span = FaceFrameSpan::new(36.0, FinishedEnds::both(), &ConstructionStandards::default());
        assert_eq!(span.opening_width(1), 33.0);
        assert_eq!(span.opening_width(2), 15.75);
        assert!(span.opening_width(30) < 0.0);
    }

    #[test]
    fn test_too_many_openings_is_invalid() {
        let standards = ConstructionStandards::default();
        let span = FaceFrameSpan::new(36.0, FinishedEnds::none(), &standards);
        let mut builder = LayoutBuilder::new(DegeneratePolicy::Drop);
        let stack = plan_stack(&mut builder, &[], &[], 30.0, 1.5);
        let err = emit_face_frame(&mut builder, &span, &stack, 30.0, 30, &standards).unwrap_err();
        assert_eq!(err.code(), crate::error::ErrorCode::InvalidConfiguration);
        assert!(err.to_string().contains("face_frame.opening_width"));
    }

    #[test]
    fn test_single_drawer_over_doors() {
        let (plan, warnings) = plan(&[], &[DrawerOpening::new(6.0)]);
        assert_eq!(warnings, 0);
        assert_eq!(plan.slots[0].opening_y, 22.5);
        assert_eq!(plan.mid_rails.len(), 1);
        assert_eq!(plan.mid_rails[0].y, 21.0);
        assert!(!plan.mid_rails[0].between_drawers);
        assert_eq!(plan.door_zone_height(), 19.5);
    }

    #[test]
    fn test_false_front_stacks_above_drawers() {
        let (plan, _) = plan(
            &[FalseFront { height: 4.0 }],
            &[DrawerOpening::new(6.0), DrawerOpening::new(6.0)],
        );
        assert_eq!(plan.slots[0].kind, SlotKind::FalseFront);
        assert_eq!(plan.slots[1].opening_y, 28.5 - 4.0 - 1.5 - 6.0);
        assert!(!plan.mid_rails[0].between_drawers);
        assert!(plan.mid_rails[1].between_drawers);
        assert!(!plan.mid_rails[2].between_drawers);
    }

    #[test]
    fn test_full_stack_closes_door_zone() {
        let (plan, warnings) = plan(&[], &[DrawerOpening::new(8.0); 3]);
        assert_eq!(warnings, 0);
        assert_eq!(plan.mid_rails.len(), 2);
        assert!(plan.door_zone_height().abs() < EPS);
    }

    #[test]
    fn test_component_after_closed_stack_warns() {
        let (plan, warnings) = plan(&[], &[DrawerOpening::new(27.0), DrawerOpening::new(1.0)]);
        assert_eq!(plan.slots.len(), 1);
        assert_eq!(warnings, 1);
    }
}
