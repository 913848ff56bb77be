//! Helpers for the edges of the system: caching, loose part records from
//! other tools, legacy drawing migration and persisted dimension overrides.

pub mod cache;
pub mod migration;
pub mod normalize;
pub mod overrides;

pub use cache::{Clock, ManualClock, SystemClock, TtlCache};
pub use migration::{
    infer_material_from_layer, infer_part_type, is_cabinet_id_format, layer_migration_rules,
    migrate_layer_name, part_type_rules, MigrationRule, MATERIAL_LAYER_PREFIX,
};
pub use normalize::{normalize_part, NormalizedPart};
pub use overrides::{
    load_overrides, override_key, save_overrides, CabinetOverrides, MemoryOverrideStore,
    OverrideStore,
};
