//! Part definition: one physical piece of a cabinet, positioned in the
//! cabinet's native frame.

use super::material::{edgeband_for, Grain, MaterialKey};
use super::miter::MiterCut;
use serde::{Deserialize, Serialize};

/// Point or offset in the native cabinet frame.
///
/// x runs left to right from the cabinet's left exterior face, y runs up from
/// the bottom of the box (the toe kick is in negative y), z runs from the
/// cabinet front toward the wall.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Part size along the native x (w), y (h) and z (d) axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub w: f64,
    pub h: f64,
    pub d: f64,
}

impl Dimensions {
    pub fn new(w: f64, h: f64, d: f64) -> Self {
        Self { w, h, d }
    }

    /// Whether every dimension is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.w > 0.0 && self.h > 0.0 && self.d > 0.0
    }
}

/// Part category, used for material, grain and layer assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartType {
    CabinetBox,
    FaceFrame,
    Stretcher,
    ToeKick,
    FinishedEnd,
    FalseFront,
    FalseFrontBacking,
    DrawerFace,
    DrawerBox,
    DrawerBoxBottom,
    Shelf,
    Divider,
}

impl PartType {
    /// Snake-case tag, as written to part metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartType::CabinetBox => "cabinet_box",
            PartType::FaceFrame => "face_frame",
            PartType::Stretcher => "stretcher",
            PartType::ToeKick => "toe_kick",
            PartType::FinishedEnd => "finished_end",
            PartType::FalseFront => "false_front",
            PartType::FalseFrontBacking => "false_front_backing",
            PartType::DrawerFace => "drawer_face",
            PartType::DrawerBox => "drawer_box",
            PartType::DrawerBoxBottom => "drawer_box_bottom",
            PartType::Shelf => "shelf",
            PartType::Divider => "divider",
        }
    }
}

impl std::fmt::Display for PartType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single cabinet part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Stable key within one build (e.g. `left_side`).
    pub key: String,
    /// Human-readable label (e.g. `Left Side`).
    pub name: String,
    /// Part category.
    pub part_type: PartType,
    /// Left-bottom-front corner.
    pub position: Vec3,
    /// Size along x/y/z.
    pub dimensions: Dimensions,
    /// Material removed at a mitered corner, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub miter_cut: Option<MiterCut>,
    /// Assigned material.
    pub material: MaterialKey,
    /// Grain direction.
    pub grain: Grain,
    /// Edge-banding code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edgeband: Option<String>,
}

impl Part {
    /// Create a part with the default material, grain and banding for its type.
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        part_type: PartType,
        position: Vec3,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            part_type,
            position,
            dimensions,
            miter_cut: None,
            material: MaterialKey::default_for(part_type),
            grain: Grain::for_part_type(part_type),
            edgeband: edgeband_for(part_type).map(str::to_string),
        }
    }

    /// Get the right edge X coordinate.
    pub fn x_max(&self) -> f64 {
        self.position.x + self.dimensions.w
    }

    /// Get the top edge Y coordinate.
    pub fn y_max(&self) -> f64 {
        self.position.y + self.dimensions.h
    }

    /// Get the back edge Z coordinate.
    pub fn z_max(&self) -> f64 {
        self.position.z + self.dimensions.d
    }

    /// Get the center Z coordinate.
    pub fn center_z(&self) -> f64 {
        self.position.z + self.dimensions.d / 2.0
    }

    /// Check if this part has a miter cut.
    pub fn is_mitered(&self) -> bool {
        self.miter_cut.is_some()
    }
}

/// Ordered collection of parts, addressable by key.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartList {
    parts: Vec<Part>,
}

impl PartList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a part. A part with an existing key replaces it in place.
    pub fn push(&mut self, part: Part) {
        match self.parts.iter_mut().find(|p| p.key == part.key) {
            Some(existing) => *existing = part,
            None => self.parts.push(part),
        }
    }

    /// Look up a part by key.
    pub fn get(&self, key: &str) -> Option<&Part> {
        self.parts.iter().find(|p| p.key == key)
    }

    /// Mutable lookup by key.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Part> {
        self.parts.iter_mut().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Part> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Keys in emission order.
    pub fn keys(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.key.as_str()).collect()
    }

    /// Parts of one type, in emission order.
    pub fn of_type(&self, part_type: PartType) -> impl Iterator<Item = &Part> {
        self.parts.iter().filter(move |p| p.part_type == part_type)
    }
}

impl<'a> IntoIterator for &'a PartList {
    type Item = &'a Part;
    type IntoIter = std::slice::Iter<'a, Part>;

    fn into_iter(self) -> Self::IntoIter {
        self.parts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel(key: &str, x: f64) -> Part {
        Part::new(
            key,
            key,
            PartType::CabinetBox,
            Vec3::new(x, 0.0, 0.0),
            Dimensions::new(0.75, 30.0, 20.0),
        )
    }

    #[test]
    fn test_new_part_gets_type_defaults() {
        let p = Part::new(
            "left_stile",
            "Left Stile",
            PartType::FaceFrame,
            Vec3::default(),
            Dimensions::new(1.5, 30.0, 1.5),
        );
        assert_eq!(p.material, MaterialKey::Hardwood54);
        assert_eq!(p.grain, Grain::Vertical);
        assert_eq!(p.edgeband, None);
        assert!(!p.is_mitered());
    }

    #[test]
    fn test_extents() {
        let p = panel("side", 10.0);
        assert_eq!(p.x_max(), 10.75);
        assert_eq!(p.y_max(), 30.0);
        assert_eq!(p.z_max(), 20.0);
        assert_eq!(p.center_z(), 10.0);
    }

    #[test]
    fn test_part_list_preserves_order_and_replaces_by_key() {
        let mut list = PartList::new();
        list.push(panel("b", 0.0));
        list.push(panel("a", 1.0));
        list.push(panel("b", 2.0));
        assert_eq!(list.keys(), vec!["b", "a"]);
        assert_eq!(list.get("b").unwrap().position.x, 2.0);
        assert!(list.contains("a"));
        assert!(!list.contains("c"));
    }

    #[test]
    fn test_dimensions_positive() {
        assert!(Dimensions::new(1.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(0.0, 1.0, 1.0).is_positive());
        assert!(!Dimensions::new(1.0, -1.0, 1.0).is_positive());
    }
}
