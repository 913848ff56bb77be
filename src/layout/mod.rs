//! Part layout: derived dimensions to an ordered part list.
//!
//! Parts are emitted in a fixed order: carcass, toe kick, stretchers, face
//! frame, stacked components, shelves, finished ends.

mod carcass;
mod drawers;
mod face_frame;

pub use drawers::{calculate_drawer_box, calculate_drawer_face, DrawerBoxSize, DrawerFaceRect};
pub use face_frame::{FaceFrameSpan, MidRail, SlotKind, StackPlan, StackSlot};

use crate::config::{
    ConstructionStandards, DEFAULT_DRAWER_BASE_COUNT, DEFAULT_OVERLAY, DEFAULT_REVEAL,
    DEFAULT_TOP_COMPONENT_HEIGHT,
};
use crate::derive::DerivedDimensions;
use crate::error::{CabinetError, Result};
use crate::model::{CabinetEnvelope, CabinetType, MaterialKey, Part, PartList, PartType, SlideType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// A drawer in the component stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawerOpening {
    /// Opening height in the face frame.
    pub height: f64,
    /// Drawer height before the slide deduction; defaults to the opening height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawer_height: Option<f64>,
}

impl DrawerOpening {
    pub fn new(height: f64) -> Self {
        Self {
            height,
            drawer_height: None,
        }
    }
}

/// A false front (tilt-out-less sink panel) in the component stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FalseFront {
    /// Opening height in the face frame.
    pub height: f64,
}

/// Which sides get a finished end panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinishedEnds {
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
}

impl FinishedEnds {
    pub fn both() -> Self {
        Self {
            left: true,
            right: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }
}

/// How a stile meets a finished end panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JointStyle {
    #[default]
    Miter,
    Butt,
}

/// What to do with a part that comes out with a non-positive dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Drop the part and record a warning.
    #[default]
    Drop,
    /// Fail the build.
    Reject,
}

/// Layout options. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Material overrides per part type. The back panel ignores these.
    pub materials: BTreeMap<PartType, MaterialKey>,
    /// Drawer slide hardware.
    pub slide_type: SlideType,
    /// Number of door openings side by side; defaults by cabinet type.
    pub opening_count: Option<usize>,
    /// Drawers, top to bottom; defaults by cabinet type.
    pub drawers: Option<Vec<DrawerOpening>>,
    /// False fronts, top to bottom, stacked above the drawers; defaults by cabinet type.
    pub false_fronts: Option<Vec<FalseFront>>,
    /// Shelf heights above the box bottom.
    pub shelves: Vec<f64>,
    /// Finished end sides; defaults by cabinet type.
    pub finished_ends: Option<FinishedEnds>,
    pub joint_style: JointStyle,
    /// Drawer face overlay on each side of its opening.
    pub overlay: f64,
    /// Reveal between adjacent faces.
    pub reveal: f64,
    pub degenerate_policy: DegeneratePolicy,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            materials: BTreeMap::new(),
            slide_type: SlideType::default(),
            opening_count: None,
            drawers: None,
            false_fronts: None,
            shelves: Vec::new(),
            finished_ends: None,
            joint_style: JointStyle::default(),
            overlay: DEFAULT_OVERLAY,
            reveal: DEFAULT_REVEAL,
            degenerate_policy: DegeneratePolicy::default(),
        }
    }
}

impl LayoutOptions {
    /// Opening count after applying the per-type default.
    pub fn resolved_opening_count(&self, cabinet_type: CabinetType) -> usize {
        self.opening_count
            .unwrap_or(match cabinet_type {
                CabinetType::SinkBase => 2,
                _ => 1,
            })
            .max(1)
    }

    /// Finished end sides after applying the per-type default.
    pub fn resolved_finished_ends(&self, cabinet_type: CabinetType) -> FinishedEnds {
        self.finished_ends.unwrap_or(if cabinet_type.has_finished_ends_by_default() {
            FinishedEnds::both()
        } else {
            FinishedEnds::none()
        })
    }

    /// False fronts after applying the per-type default.
    pub fn resolved_false_fronts(&self, cabinet_type: CabinetType) -> Vec<FalseFront> {
        match &self.false_fronts {
            Some(fronts) => fronts.clone(),
            None if cabinet_type == CabinetType::SinkBase => vec![FalseFront {
                height: DEFAULT_TOP_COMPONENT_HEIGHT,
            }],
            None => Vec::new(),
        }
    }

    /// Drawers after applying the per-type default.
    ///
    /// A drawer base fills its whole opening with equal drawers separated by
    /// mid rails.
    pub fn resolved_drawers(
        &self,
        cabinet_type: CabinetType,
        opening_height: f64,
        rail_width: f64,
    ) -> Vec<DrawerOpening> {
        if let Some(drawers) = &self.drawers {
            return drawers.clone();
        }
        match cabinet_type {
            CabinetType::Base | CabinetType::Vanity | CabinetType::Corner => {
                vec![DrawerOpening::new(DEFAULT_TOP_COMPONENT_HEIGHT)]
            }
            CabinetType::DrawerBase => {
                let n = DEFAULT_DRAWER_BASE_COUNT;
                let height = (opening_height - (n - 1) as f64 * rail_width) / n as f64;
                vec![DrawerOpening::new(height); n]
            }
            _ => Vec::new(),
        }
    }
}

/// Parts plus the non-fatal findings collected while laying them out.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutOutcome {
    pub parts: PartList,
    pub warnings: Vec<String>,
}

/// Collects parts, enforcing the degenerate-part policy.
pub(crate) struct LayoutBuilder {
    policy: DegeneratePolicy,
    outcome: LayoutOutcome,
}

impl LayoutBuilder {
    pub(crate) fn new(policy: DegeneratePolicy) -> Self {
        Self {
            policy,
            outcome: LayoutOutcome::default(),
        }
    }

    /// Add a part, or drop it if any dimension is not positive.
    pub(crate) fn push(&mut self, part: Part) -> Result<()> {
        if part.dimensions.is_positive() {
            self.outcome.parts.push(part);
            return Ok(());
        }
        let dims = part.dimensions;
        match self.policy {
            DegeneratePolicy::Reject => Err(CabinetError::DegeneratePart {
                key: part.key,
                w: dims.w,
                h: dims.h,
                d: dims.d,
            }),
            DegeneratePolicy::Drop => {
                self.warn(format!(
                    "Dropped degenerate part '{}' ({} x {} x {})",
                    part.key, dims.w, dims.h, dims.d
                ));
                Ok(())
            }
        }
    }

    pub(crate) fn warn(&mut self, message: String) {
        warn!("{}", message);
        self.outcome.warnings.push(message);
    }

    fn finish(self) -> LayoutOutcome {
        self.outcome
    }
}

/// Lay out every part of a cabinet.
pub fn layout_parts(
    envelope: &CabinetEnvelope,
    derived: &DerivedDimensions,
    options: &LayoutOptions,
    standards: &ConstructionStandards,
) -> Result<LayoutOutcome> {
    let cabinet_type = envelope.cabinet_type;
    let finished_ends = options.resolved_finished_ends(cabinet_type);
    let mut builder = LayoutBuilder::new(options.degenerate_policy);

    let span = FaceFrameSpan::new(envelope.width, finished_ends, standards);
    let drawers = options.resolved_drawers(
        cabinet_type,
        derived.face_frame_opening.height,
        standards.face_frame_rail_width,
    );
    let false_fronts = options.resolved_false_fronts(cabinet_type);
    let plan = face_frame::plan_stack(
        &mut builder,
        &false_fronts,
        &drawers,
        derived.box_height,
        standards.face_frame_rail_width,
    );

    carcass::emit_box(&mut builder, envelope, derived, standards)?;
    carcass::emit_toe_kick(&mut builder, envelope, derived, standards)?;
    carcass::emit_top_stretchers(&mut builder, derived, standards)?;
    carcass::emit_divider_stretchers(&mut builder, &plan, derived, standards)?;

    face_frame::emit_face_frame(
        &mut builder,
        &span,
        &plan,
        derived.box_height,
        options.resolved_opening_count(cabinet_type),
        standards,
    )?;
    drawers::emit_stack(&mut builder, &span, &plan, derived, options, standards)?;
    carcass::emit_shelves(&mut builder, &options.shelves, derived, standards)?;
    carcass::emit_finished_ends(&mut builder, envelope, derived, finished_ends, standards)?;

    let mut outcome = builder.finish();
    apply_material_overrides(&mut outcome.parts, &options.materials);

    debug!(
        "Laid out {} parts for {} ({} warnings)",
        outcome.parts.len(),
        cabinet_type,
        outcome.warnings.len()
    );
    Ok(outcome)
}

fn apply_material_overrides(parts: &mut PartList, materials: &BTreeMap<PartType, MaterialKey>) {
    if materials.is_empty() {
        return;
    }
    let keys: Vec<String> = parts.keys().into_iter().map(str::to_string).collect();
    for key in keys {
        if key == carcass::BACK_KEY {
            continue;
        }
        if let Some(part) = parts.get_mut(&key) {
            if let Some(material) = materials.get(&part.part_type) {
                part.material = *material;
            }
        }
    }
}
