//! Per-part manufacturing labels attached to rendered solids.

use super::id::{part_id, CabinetIdentity};
use crate::model::{Dimensions, Part, PartList, PartType};
use serde::{Deserialize, Serialize};

/// Manufacturing record for one part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartLabel {
    pub part_id: String,
    pub cabinet_id: String,
    pub project_code: String,
    pub part_type: PartType,
    pub part_name: String,
    pub material: String,
    /// Stock thickness of the material.
    pub thickness: f64,
    /// First face dimension, in width, height, depth order.
    pub cut_width: f64,
    /// Second face dimension.
    pub cut_length: f64,
    pub grain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edgeband: Option<String>,
}

impl PartLabel {
    pub fn new(identity: &CabinetIdentity, part: &Part) -> Self {
        let (cut_width, cut_length) = face_dimensions(part.dimensions);
        Self {
            part_id: part_id(&identity.cabinet_id, &part.name),
            cabinet_id: identity.cabinet_id.clone(),
            project_code: identity.project_code.clone(),
            part_type: part.part_type,
            part_name: part.name.clone(),
            material: part.material.as_str().to_string(),
            thickness: part.material.spec().thickness,
            cut_width,
            cut_length,
            grain: part.grain.as_str().to_string(),
            edgeband: part.edgeband.clone(),
        }
    }

    /// Key/value user text in the `TCS_*` namespace, in a fixed order.
    pub fn user_text(&self) -> Vec<(&'static str, String)> {
        let mut text = vec![
            ("TCS_PART_ID", self.part_id.clone()),
            ("TCS_CABINET_ID", self.cabinet_id.clone()),
            ("TCS_PROJECT_CODE", self.project_code.clone()),
            ("TCS_PART_TYPE", self.part_type.as_str().to_string()),
            ("TCS_PART_NAME", self.part_name.clone()),
            ("TCS_MATERIAL", self.material.clone()),
            ("TCS_THICKNESS", self.thickness.to_string()),
            ("TCS_CUT_WIDTH", self.cut_width.to_string()),
            ("TCS_CUT_LENGTH", self.cut_length.to_string()),
            ("TCS_GRAIN", self.grain.clone()),
        ];
        if let Some(edgeband) = &self.edgeband {
            text.push(("TCS_EDGEBAND", edgeband.clone()));
        }
        text
    }
}

/// The two dimensions of a part's face, dropping its thickness (the
/// smallest dimension) and keeping width, height, depth order.
fn face_dimensions(dims: Dimensions) -> (f64, f64) {
    let Dimensions { w, h, d } = dims;
    if w <= h && w <= d {
        (h, d)
    } else if h <= d {
        (w, d)
    } else {
        (w, h)
    }
}

/// Label every part, in part order.
pub fn label_parts(identity: &CabinetIdentity, parts: &PartList) -> Vec<PartLabel> {
    parts.iter().map(|part| PartLabel::new(identity, part)).collect()
}
