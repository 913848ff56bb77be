//! Legacy drawing migration: material layer names and part types.
//!
//! Rules are ordered and the first match wins. A pattern matches when each
//! of its phrases appears in the name as a run of whole tokens, ignoring
//! case and punctuation, so `Baltic` never matches inside a longer word.

use crate::model::{MaterialKey, PartType};

/// Parent layer of every material layer.
pub const MATERIAL_LAYER_PREFIX: &str = "TCS_Materials::";

/// One ordered rule: every phrase in `pattern` must occur in the name.
#[derive(Debug, Clone, PartialEq)]
pub struct MigrationRule<T> {
    pub pattern: Vec<String>,
    pub target: T,
}

impl<T> MigrationRule<T> {
    pub fn new(pattern: &[&str], target: T) -> Self {
        Self {
            pattern: pattern.iter().map(|p| p.to_string()).collect(),
            target,
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let tokens = tokenize(name);
        self.pattern
            .iter()
            .all(|phrase| contains_run(&tokens, &tokenize(phrase)))
    }
}

fn tokenize(s: &str) -> Vec<String> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn contains_run(tokens: &[String], run: &[String]) -> bool {
    !run.is_empty() && tokens.windows(run.len()).any(|w| w == run)
}

fn first_match<'a, T>(rules: &'a [MigrationRule<T>], name: &str) -> Option<&'a T> {
    rules.iter().find(|r| r.matches(name)).map(|r| &r.target)
}

/// Legacy material layer names, most specific first.
pub fn layer_migration_rules() -> Vec<MigrationRule<MaterialKey>> {
    use MaterialKey::*;
    vec![
        MigrationRule::new(&["3/4 Rift WO"], RiftWhiteOak34),
        MigrationRule::new(&["Rift White Oak"], RiftWhiteOak34),
        MigrationRule::new(&["Rift WO"], RiftWhiteOak34),
        MigrationRule::new(&["RiftWO"], RiftWhiteOak34),
        MigrationRule::new(&["3/4 Medex"], Medex34),
        MigrationRule::new(&["Medex"], Medex34),
        MigrationRule::new(&["3/4 PreFin"], PreFin34),
        MigrationRule::new(&["1/2 Baltic"], Baltic12),
        MigrationRule::new(&["Baltic Birch"], Baltic12),
        MigrationRule::new(&["Baltic"], Baltic12),
        MigrationRule::new(&["1/4 Plywood"], Plywood14),
        MigrationRule::new(&["5/4 Hardwood"], Hardwood54),
    ]
}

/// Part types inferred from object names. Drawer rules come before the
/// generic carcass rules they would otherwise shadow.
pub fn part_type_rules() -> Vec<MigrationRule<PartType>> {
    use PartType::*;
    vec![
        MigrationRule::new(&["drawer", "face"], DrawerFace),
        MigrationRule::new(&["drawer front"], DrawerFace),
        MigrationRule::new(&["drawer", "bottom"], DrawerBoxBottom),
        MigrationRule::new(&["drawer", "side"], DrawerBox),
        MigrationRule::new(&["drawer", "back"], DrawerBox),
        MigrationRule::new(&["drawer", "box"], DrawerBox),
        MigrationRule::new(&["false front", "backing"], FalseFrontBacking),
        MigrationRule::new(&["false front"], FalseFront),
        MigrationRule::new(&["end panel"], FinishedEnd),
        MigrationRule::new(&["finished end"], FinishedEnd),
        MigrationRule::new(&["toe kick"], ToeKick),
        MigrationRule::new(&["toekick"], ToeKick),
        MigrationRule::new(&["face frame"], FaceFrame),
        MigrationRule::new(&["stile"], FaceFrame),
        MigrationRule::new(&["rail"], FaceFrame),
        MigrationRule::new(&["stretcher"], Stretcher),
        MigrationRule::new(&["shelf"], Shelf),
        MigrationRule::new(&["divider"], Divider),
    ]
}

/// New layer path for a legacy material layer. Layers already under the
/// material parent, and unrecognized layers, give `None`.
pub fn migrate_layer_name(layer: &str) -> Option<String> {
    if layer.starts_with(MATERIAL_LAYER_PREFIX) {
        return None;
    }
    first_match(&layer_migration_rules(), layer)
        .map(|material| format!("{}{}", MATERIAL_LAYER_PREFIX, material.as_str()))
}

/// Material for an object on `layer`, defaulting to prefinished plywood.
pub fn infer_material_from_layer(layer: &str) -> MaterialKey {
    if let Some(name) = layer.strip_prefix(MATERIAL_LAYER_PREFIX) {
        if let Ok(material) = name.parse::<MaterialKey>() {
            return material;
        }
    }
    first_match(&layer_migration_rules(), layer)
        .copied()
        .unwrap_or(MaterialKey::PreFin34)
}

/// Part type for an object name, defaulting to a carcass panel.
pub fn infer_part_type(name: &str) -> PartType {
    first_match(&part_type_rules(), name)
        .copied()
        .unwrap_or(PartType::CabinetBox)
}

/// Whether `name` looks like a legacy cabinet id: `B36`, `W3030-002`,
/// `VAN36-001`.
pub fn is_cabinet_id_format(name: &str) -> bool {
    let upper = name.to_ascii_uppercase();
    let rest = ["VAN", "B", "W", "T"]
        .iter()
        .find_map(|prefix| upper.strip_prefix(prefix));
    let Some(rest) = rest else {
        return false;
    };
    let (size, sequence) = match rest.split_once('-') {
        Some((size, sequence)) => (size, Some(sequence)),
        None => (rest, None),
    };
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    all_digits(size) && sequence.map_or(true, all_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Layer Migration ====================

    #[test]
    fn test_migrate_inch_mark_variants() {
        assert_eq!(
            migrate_layer_name("3/4\" Rift WO").as_deref(),
            Some("TCS_Materials::3-4_RiftWO")
        );
        assert_eq!(
            migrate_layer_name("3/4 Medex").as_deref(),
            Some("TCS_Materials::3-4_Medex")
        );
        assert_eq!(
            migrate_layer_name("1/2\" Baltic").as_deref(),
            Some("TCS_Materials::1-2_Baltic")
        );
    }

    #[test]
    fn test_migrate_matches_whole_tokens_only() {
        assert_eq!(migrate_layer_name("Balticstyle Trim"), None);
        assert_eq!(
            migrate_layer_name("Drawer Boxes - Baltic").as_deref(),
            Some("TCS_Materials::1-2_Baltic")
        );
    }

    #[test]
    fn test_migrate_skips_existing_layers() {
        assert_eq!(migrate_layer_name("TCS_Materials::3-4_Medex"), None);
        assert_eq!(migrate_layer_name("Dimensions"), None);
    }

    #[test]
    fn test_infer_material() {
        assert_eq!(infer_material_from_layer("TCS_Materials::5-4_Hardwood"), MaterialKey::Hardwood54);
        assert_eq!(infer_material_from_layer("Rift White Oak Panels"), MaterialKey::RiftWhiteOak34);
        assert_eq!(infer_material_from_layer("Layer 01"), MaterialKey::PreFin34);
    }

    // ==================== Part Type Inference ====================

    #[test]
    fn test_drawer_rules_come_first() {
        assert_eq!(infer_part_type("Drawer 1 Face"), PartType::DrawerFace);
        assert_eq!(infer_part_type("Drawer Front"), PartType::DrawerFace);
        assert_eq!(infer_part_type("Drawer 2 Box Bottom"), PartType::DrawerBoxBottom);
        assert_eq!(infer_part_type("Drawer Side L"), PartType::DrawerBox);
    }

    #[test]
    fn test_generic_rules() {
        assert_eq!(infer_part_type("Left Side"), PartType::CabinetBox);
        assert_eq!(infer_part_type("Center Stile 1"), PartType::FaceFrame);
        assert_eq!(infer_part_type("Toe Kick"), PartType::ToeKick);
        assert_eq!(infer_part_type("Left End Panel"), PartType::FinishedEnd);
        assert_eq!(infer_part_type("False Front 1 Backing"), PartType::FalseFrontBacking);
        assert_eq!(infer_part_type("Guardrail"), PartType::CabinetBox);
    }

    #[test]
    fn test_cabinet_id_format() {
        assert!(is_cabinet_id_format("B36-001"));
        assert!(is_cabinet_id_format("w3030-002"));
        assert!(is_cabinet_id_format("VAN36"));
        assert!(!is_cabinet_id_format("Base 36"));
        assert!(!is_cabinet_id_format("B36-"));
        assert!(!is_cabinet_id_format("VANITY"));
    }
}
