//! Drawer faces, drawer boxes and false fronts.

use super::face_frame::{FaceFrameSpan, SlotKind, StackPlan};
use super::{LayoutBuilder, LayoutOptions};
use crate::config::{
    ConstructionStandards, DADO_DEPTH, DADO_HEIGHT, DRAWER_BOTTOM_THICKNESS, DRAWER_BOX_THICKNESS,
    DRAWER_REAR_CLEARANCE,
};
use crate::derive::DerivedDimensions;
use crate::error::Result;
use crate::model::{Dimensions, Part, PartType, SlideSpec, Vec3};

/// Outside dimensions of a drawer box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerBoxSize {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl DrawerBoxSize {
    fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.depth > 0.0
    }
}

/// Face rectangle in the X-Y plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerFaceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Drawer box envelope for an opening and slide.
///
/// The depth never goes below the slide's minimum, even when the cavity is
/// shallower.
pub fn calculate_drawer_box(
    opening_width: f64,
    drawer_height: f64,
    cavity_depth: f64,
    slide: &SlideSpec,
) -> DrawerBoxSize {
    DrawerBoxSize {
        width: opening_width - 2.0 * slide.side_deduction,
        height: drawer_height - slide.height_deduction,
        depth: (cavity_depth - DRAWER_REAR_CLEARANCE).max(slide.min_depth),
    }
}

/// Overlay face over an opening, inset by half the reveal top and bottom.
pub fn calculate_drawer_face(
    opening_x: f64,
    opening_y: f64,
    opening_width: f64,
    opening_height: f64,
    overlay: f64,
    reveal: f64,
) -> DrawerFaceRect {
    DrawerFaceRect {
        x: opening_x - overlay,
        y: opening_y + reveal / 2.0,
        width: opening_width + 2.0 * overlay,
        height: opening_height - reveal,
    }
}

fn face_part(key: String, name: String, part_type: PartType, rect: DrawerFaceRect, mt: f64) -> Part {
    Part::new(
        key,
        name,
        part_type,
        Vec3::new(rect.x, rect.y, -mt),
        Dimensions::new(rect.width, rect.height, mt),
    )
}

/// The five panels of a drawer box: two sides, front, back and bottom.
///
/// Sides run behind the front; the bottom sits in dados cut `DADO_HEIGHT`
/// above the side bottoms.
fn drawer_box_parts(prefix: &str, label: &str, origin: Vec3, size: DrawerBoxSize) -> Vec<Part> {
    let b = DRAWER_BOX_THICKNESS;
    let (bw, bh, bd) = (size.width, size.height, size.depth);
    let panel = |suffix: &str, name: &str, part_type, pos: Vec3, dims: Dimensions| {
        Part::new(
            format!("{prefix}_{suffix}"),
            format!("{label} {name}"),
            part_type,
            pos,
            dims,
        )
    };

    vec![
        panel(
            "left_side",
            "Left Side",
            PartType::DrawerBox,
            Vec3::new(origin.x, origin.y, origin.z + b),
            Dimensions::new(b, bh, bd - b),
        ),
        panel(
            "right_side",
            "Right Side",
            PartType::DrawerBox,
            Vec3::new(origin.x + bw - b, origin.y, origin.z + b),
            Dimensions::new(b, bh, bd - b),
        ),
        panel(
            "front",
            "Front",
            PartType::DrawerBox,
            Vec3::new(origin.x + b, origin.y, origin.z),
            Dimensions::new(bw - 2.0 * b, bh, b),
        ),
        panel(
            "back",
            "Back",
            PartType::DrawerBox,
            Vec3::new(origin.x + b, origin.y, origin.z + bd - b),
            Dimensions::new(bw - 2.0 * b, bh, b),
        ),
        panel(
            "bottom",
            "Bottom",
            PartType::DrawerBoxBottom,
            Vec3::new(
                origin.x + b - DADO_DEPTH,
                origin.y + DADO_HEIGHT,
                origin.z + DADO_DEPTH,
            ),
            Dimensions::new(
                bw - 2.0 * b + 2.0 * DADO_DEPTH,
                DRAWER_BOTTOM_THICKNESS,
                bd - b + DADO_DEPTH,
            ),
        ),
    ]
}

/// Faces, boxes and backings for every stacked opening.
pub(crate) fn emit_stack(
    builder: &mut LayoutBuilder,
    span: &FaceFrameSpan,
    plan: &StackPlan,
    derived: &DerivedDimensions,
    options: &LayoutOptions,
    standards: &ConstructionStandards,
) -> Result<()> {
    let mt = standards.material_thickness;
    let slide = options.slide_type.spec();

    for slot in &plan.slots {
        let face = calculate_drawer_face(
            span.rail_x,
            slot.opening_y,
            span.rail_length,
            slot.height,
            options.overlay,
            options.reveal,
        );

        match slot.kind {
            SlotKind::FalseFront => {
                let prefix = format!("false_front_{}", slot.index);
                let label = format!("False Front {}", slot.index);
                builder.push(face_part(
                    format!("{prefix}_face"),
                    format!("{label} Face"),
                    PartType::FalseFront,
                    face,
                    mt,
                ))?;
                builder.push(Part::new(
                    format!("{prefix}_backing"),
                    format!("{label} Backing"),
                    PartType::FalseFrontBacking,
                    Vec3::new(
                        mt,
                        slot.opening_y + (slot.height - mt) / 2.0,
                        standards.face_frame_stile_depth,
                    ),
                    Dimensions::new(derived.interior.width, mt, standards.stretcher_depth),
                ))?;
            }
            SlotKind::Drawer { drawer_height } => {
                let prefix = format!("drawer_{}", slot.index);
                let label = format!("Drawer {}", slot.index);
                builder.push(face_part(
                    format!("{prefix}_face"),
                    format!("{label} Face"),
                    PartType::DrawerFace,
                    face,
                    mt,
                ))?;

                let size = calculate_drawer_box(
                    span.rail_length,
                    drawer_height.unwrap_or(slot.height),
                    derived.cavity_depth,
                    &slide,
                );
                let box_prefix = format!("{prefix}_box");
                let box_label = format!("{label} Box");
                if !size.is_positive() {
                    // Report the box as a whole rather than panel by panel.
                    builder.push(Part::new(
                        box_prefix,
                        box_label,
                        PartType::DrawerBox,
                        Vec3::default(),
                        Dimensions::new(size.width, size.height, size.depth),
                    ))?;
                    continue;
                }
                let origin = Vec3::new(
                    span.rail_x + slide.side_deduction,
                    slot.opening_y + slide.bottom_clearance,
                    standards.face_frame_stile_depth,
                );
                for part in drawer_box_parts(&box_prefix, &box_label, origin, size) {
                    builder.push(part)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SlideType;

    // ==================== Drawer Box ====================

    #[test]
    fn test_drawer_box_width_per_slide() {
        let cases = [
            (SlideType::BlumTandem, 16.0),
            (SlideType::SideMount, 16.25),
            (SlideType::Undermount, 16.25),
        ];
        for (slide, expected) in cases {
            let size = calculate_drawer_box(17.25, 6.0, 20.0, &slide.spec());
            assert_eq!(size.width, expected, "{slide:?}");
        }
    }

    #[test]
    fn test_drawer_box_height_and_depth() {
        let size = calculate_drawer_box(17.25, 6.0, 22.125, &SlideType::BlumTandem.spec());
        assert_eq!(size.height, 5.1875);
        assert_eq!(size.depth, 21.125);
    }

    #[test]
    fn test_drawer_box_min_depth() {
        let size = calculate_drawer_box(17.25, 6.0, 9.0, &SlideType::SideMount.spec());
        assert_eq!(size.depth, 10.0);
    }

    #[test]
    fn test_box_panels() {
        let size = DrawerBoxSize {
            width: 16.0,
            height: 5.0,
            depth: 18.0,
        };
        let parts = drawer_box_parts("d", "D", Vec3::new(2.0, 1.0, 1.5), size);
        assert_eq!(parts.len(), 5);

        let left = &parts[0];
        assert_eq!(left.position.z, 2.0);
        assert_eq!(left.dimensions.d, 17.5);
        assert_eq!(left.z_max(), 19.5);

        let front = &parts[2];
        assert_eq!(front.dimensions.w, 15.0);
        assert_eq!(front.position.x, 2.5);

        let bottom = &parts[4];
        assert_eq!(bottom.part_type, PartType::DrawerBoxBottom);
        assert_eq!(bottom.position.x, 2.25);
        assert_eq!(bottom.position.y, 1.5);
        assert_eq!(bottom.dimensions.w, 15.5);
        assert_eq!(bottom.dimensions.d, 17.75);
        assert_eq!(bottom.z_max(), 19.5);
    }

    // ==================== Drawer Face ====================

    #[test]
    fn test_drawer_face_overlay_and_reveal() {
        let face = calculate_drawer_face(1.5, 22.5, 33.0, 6.0, 0.5, 0.125);
        assert_eq!(face.x, 1.0);
        assert_eq!(face.width, 34.0);
        assert_eq!(face.y, 22.5625);
        assert_eq!(face.height, 5.875);
    }
}
