//! Standard sheet and solid-stock materials, and the per-part-type
//! material/grain/edge-banding tables.

use super::PartType;
use crate::error::CabinetError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Physical properties of a standard material.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaterialSpec {
    /// Stock thickness in inches.
    pub thickness: f64,
    /// Layer/display color.
    pub color: Rgb,
    /// Human-readable description.
    pub description: &'static str,
}

/// The closed set of shop materials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialKey {
    #[serde(rename = "3-4_PreFin")]
    PreFin34,
    #[serde(rename = "3-4_Medex")]
    Medex34,
    #[serde(rename = "3-4_RiftWO")]
    RiftWhiteOak34,
    #[serde(rename = "1-2_Baltic")]
    Baltic12,
    #[serde(rename = "1-4_Plywood")]
    Plywood14,
    #[serde(rename = "5-4_Hardwood")]
    Hardwood54,
}

impl MaterialKey {
    /// All materials, in table order.
    pub const ALL: [MaterialKey; 6] = [
        MaterialKey::PreFin34,
        MaterialKey::Medex34,
        MaterialKey::RiftWhiteOak34,
        MaterialKey::Baltic12,
        MaterialKey::Plywood14,
        MaterialKey::Hardwood54,
    ];

    /// Layer-style name, e.g. `1-4_Plywood`.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKey::PreFin34 => "3-4_PreFin",
            MaterialKey::Medex34 => "3-4_Medex",
            MaterialKey::RiftWhiteOak34 => "3-4_RiftWO",
            MaterialKey::Baltic12 => "1-2_Baltic",
            MaterialKey::Plywood14 => "1-4_Plywood",
            MaterialKey::Hardwood54 => "5-4_Hardwood",
        }
    }

    /// Thickness, color and description.
    pub fn spec(&self) -> MaterialSpec {
        let (thickness, color, description) = match self {
            MaterialKey::PreFin34 => (0.75, Rgb(139, 90, 43), "3/4\" Prefinished Plywood"),
            MaterialKey::Medex34 => (0.75, Rgb(65, 105, 225), "3/4\" Medex MDF"),
            MaterialKey::RiftWhiteOak34 => (0.75, Rgb(210, 180, 140), "3/4\" Rift White Oak"),
            MaterialKey::Baltic12 => (0.5, Rgb(255, 228, 181), "1/2\" Baltic Birch"),
            MaterialKey::Plywood14 => (0.25, Rgb(240, 230, 200), "1/4\" Plywood"),
            MaterialKey::Hardwood54 => (1.0, Rgb(205, 133, 63), "5/4\" Hardwood"),
        };
        MaterialSpec {
            thickness,
            color,
            description,
        }
    }

    /// Default material for a part type.
    pub fn default_for(part_type: PartType) -> Self {
        match part_type {
            PartType::CabinetBox => MaterialKey::PreFin34,
            PartType::ToeKick => MaterialKey::Medex34,
            PartType::FaceFrame => MaterialKey::Hardwood54,
            PartType::DrawerFace | PartType::FinishedEnd | PartType::FalseFront => {
                MaterialKey::RiftWhiteOak34
            }
            PartType::Stretcher | PartType::FalseFrontBacking => MaterialKey::PreFin34,
            PartType::DrawerBox => MaterialKey::Baltic12,
            PartType::DrawerBoxBottom => MaterialKey::Plywood14,
            PartType::Shelf | PartType::Divider => MaterialKey::PreFin34,
        }
    }
}

impl FromStr for MaterialKey {
    type Err = CabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MaterialKey::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CabinetError::UnknownMaterial(s.to_string()))
    }
}

impl std::fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Grain direction of a part's face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grain {
    Vertical,
    Horizontal,
    None,
}

impl Grain {
    /// Grain direction for a part type.
    pub fn for_part_type(part_type: PartType) -> Self {
        match part_type {
            PartType::CabinetBox | PartType::FaceFrame | PartType::FinishedEnd => Grain::Vertical,
            PartType::DrawerFace
            | PartType::FalseFront
            | PartType::FalseFrontBacking
            | PartType::Stretcher
            | PartType::DrawerBox
            | PartType::Shelf => Grain::Horizontal,
            PartType::ToeKick | PartType::DrawerBoxBottom | PartType::Divider => Grain::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grain::Vertical => "vertical",
            Grain::Horizontal => "horizontal",
            Grain::None => "none",
        }
    }
}

/// Edge-banding code (`F` = front, `T` = top) for a part type, if banded.
pub fn edgeband_for(part_type: PartType) -> Option<&'static str> {
    match part_type {
        PartType::CabinetBox | PartType::Stretcher | PartType::Shelf => Some("F"),
        PartType::FinishedEnd => Some("F,T"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_table() {
        assert_eq!(MaterialKey::Plywood14.spec().thickness, 0.25);
        assert_eq!(MaterialKey::Hardwood54.spec().thickness, 1.0);
        assert_eq!(MaterialKey::Medex34.spec().color, Rgb(65, 105, 225));
    }

    #[test]
    fn test_material_roundtrip_names() {
        for m in MaterialKey::ALL {
            assert_eq!(m.as_str().parse::<MaterialKey>().unwrap(), m);
            let json = serde_json::to_string(&m).unwrap();
            assert_eq!(json, format!("\"{}\"", m.as_str()));
        }
        assert!("3-4_Walnut".parse::<MaterialKey>().is_err());
    }

    #[test]
    fn test_default_assignments() {
        assert_eq!(MaterialKey::default_for(PartType::FaceFrame), MaterialKey::Hardwood54);
        assert_eq!(MaterialKey::default_for(PartType::ToeKick), MaterialKey::Medex34);
        assert_eq!(MaterialKey::default_for(PartType::DrawerBox), MaterialKey::Baltic12);
        assert_eq!(Grain::for_part_type(PartType::DrawerFace), Grain::Horizontal);
        assert_eq!(edgeband_for(PartType::FinishedEnd), Some("F,T"));
        assert_eq!(edgeband_for(PartType::FaceFrame), None);
    }
}
