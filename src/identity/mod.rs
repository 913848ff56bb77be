//! Cabinet identifiers and per-part manufacturing labels.

mod id;
mod label;

pub use id::{build_identity, part_id, short_project_code, CabinetIdentity, IdentitySource};
pub use label::{label_parts, PartLabel};
