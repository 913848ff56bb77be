//! Carcass panels: bottom, sides, back, toe kick, stretchers, shelves and
//! finished ends.

use super::face_frame::StackPlan;
use super::{FinishedEnds, LayoutBuilder};
use crate::config::ConstructionStandards;
use crate::derive::DerivedDimensions;
use crate::error::Result;
use crate::model::{CabinetEnvelope, Dimensions, MaterialKey, Part, PartType, Vec3};
use tracing::debug;

pub(crate) const BACK_KEY: &str = "back";

/// Bottom, both sides and the back.
///
/// Sides sit on the bottom panel; the back covers the full box height
/// between the sides.
pub(crate) fn emit_box(
    builder: &mut LayoutBuilder,
    envelope: &CabinetEnvelope,
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let mt = standards.material_thickness;
    let f = standards.face_frame_stile_depth;
    let w = envelope.width;
    let h = derived.box_height;
    let depth = derived.interior.depth;

    builder.push(Part::new(
        "bottom",
        "Bottom",
        PartType::CabinetBox,
        Vec3::new(mt, 0.0, f),
        Dimensions::new(w - 2.0 * mt, mt, depth),
    ))?;
    builder.push(Part::new(
        "left_side",
        "Left Side",
        PartType::CabinetBox,
        Vec3::new(0.0, mt, f),
        Dimensions::new(mt, h - mt, depth),
    ))?;
    builder.push(Part::new(
        "right_side",
        "Right Side",
        PartType::CabinetBox,
        Vec3::new(w - mt, mt, f),
        Dimensions::new(mt, h - mt, depth),
    ))?;

    let mut back = Part::new(
        BACK_KEY,
        "Back",
        PartType::CabinetBox,
        Vec3::new(mt, 0.0, f + depth),
        Dimensions::new(w - 2.0 * mt, h, standards.back_panel_thickness),
    );
    back.material = MaterialKey::Plywood14;
    back.edgeband = None;
    builder.push(back)
}

/// Recessed toe kick under floor-standing cabinets. A zero-height toe kick
/// goes through the degenerate-part policy like any other part.
pub(crate) fn emit_toe_kick(
    builder: &mut LayoutBuilder,
    envelope: &CabinetEnvelope,
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let t = derived.toe_kick_height;
    if !envelope.cabinet_type.is_floor_standing() {
        debug!("No toe kick for {}", envelope.cabinet_type);
        return Ok(());
    }
    let mt = standards.material_thickness;
    builder.push(Part::new(
        "toe_kick",
        "Toe Kick",
        PartType::ToeKick,
        Vec3::new(mt, -t, standards.toe_kick_recess),
        Dimensions::new(envelope.width - 2.0 * mt, t, mt),
    ))
}

fn stretcher(
    key: String,
    name: String,
    y: f64,
    z: f64,
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Part {
    let mt = standards.material_thickness;
    Part::new(
        key,
        name,
        PartType::Stretcher,
        Vec3::new(mt, y, z),
        Dimensions::new(derived.interior.width, mt, standards.stretcher_depth),
    )
}

/// Front and back stretchers across the top of the box.
pub(crate) fn emit_top_stretchers(
    builder: &mut LayoutBuilder,
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let y = derived.box_height - standards.material_thickness;
    let f = standards.face_frame_stile_depth;
    builder.push(stretcher(
        "front_stretcher".into(),
        "Front Stretcher".into(),
        y,
        f,
        derived,
        standards,
    ))?;
    builder.push(stretcher(
        "back_stretcher".into(),
        "Back Stretcher".into(),
        y,
        f + derived.interior.depth - standards.stretcher_depth,
        derived,
        standards,
    ))
}

/// A stretcher behind every mid rail that separates two drawers, centered
/// on the rail.
pub(crate) fn emit_divider_stretchers(
    builder: &mut LayoutBuilder,
    plan: &StackPlan,
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let offset = (standards.face_frame_rail_width - standards.material_thickness) / 2.0;
    let dividers = plan.mid_rails.iter().filter(|rail| rail.between_drawers);
    for (i, rail) in dividers.enumerate() {
        builder.push(stretcher(
            format!("divider_stretcher_{}", i + 1),
            format!("Divider Stretcher {}", i + 1),
            rail.y + offset,
            standards.face_frame_stile_depth,
            derived,
            standards,
        ))?;
    }
    Ok(())
}

/// Adjustable shelves at the given heights above the box bottom.
pub(crate) fn emit_shelves(
    builder: &mut LayoutBuilder,
    heights: &[f64],
    derived: &DerivedDimensions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let mt = standards.material_thickness;
    for (i, &y) in heights.iter().enumerate() {
        builder.push(Part::new(
            format!("shelf_{}", i + 1),
            format!("Shelf {}", i + 1),
            PartType::Shelf,
            Vec3::new(mt, y, standards.face_frame_stile_depth),
            Dimensions::new(
                derived.interior.width,
                mt,
                derived.interior.depth - standards.component_gap,
            ),
        ))?;
    }
    Ok(())
}

/// End panels standing off the sides, floor to box top, scribed past the
/// back toward the wall.
pub(crate) fn emit_finished_ends(
    builder: &mut LayoutBuilder,
    envelope: &CabinetEnvelope,
    derived: &DerivedDimensions,
    ends: FinishedEnds,
    standards: &ConstructionStandards,
) -> Result<()> {
    let mt = standards.material_thickness;
    let gap = standards.finished_end_gap;
    let t = derived.toe_kick_height;
    let dims = Dimensions::new(
        mt,
        derived.box_height + t,
        envelope.depth + standards.finished_end_wall_extension,
    );

    if ends.left {
        builder.push(Part::new(
            "left_end_panel",
            "Left End Panel",
            PartType::FinishedEnd,
            Vec3::new(-gap - mt, -t, 0.0),
            dims,
        ))?;
    }
    if ends.right {
        builder.push(Part::new(
            "right_end_panel",
            "Right End Panel",
            PartType::FinishedEnd,
            Vec3::new(envelope.width + gap, -t, 0.0),
            dims,
        ))?;
    }
    Ok(())
}
