//! Cabinet and part identifiers.

use serde::{Deserialize, Serialize};

/// Where a cabinet's identifier comes from.
///
/// In JSON the two forms are told apart by their fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdentitySource {
    /// ERP project number plus cabinet number, e.g.
    /// `TCS-001-9AustinFarmRoad` and `BTH1-B1-C1`.
    Erp {
        project_number: String,
        cabinet_number: String,
    },
    /// Shop project code, type code and sequence, e.g. `SANK`, `B36`, `1`.
    Simple {
        project_code: String,
        cabinet_type: String,
        sequence: u32,
    },
}

/// A cabinet's identifier and the project code it starts with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetIdentity {
    pub cabinet_id: String,
    pub project_code: String,
}

impl CabinetIdentity {
    /// Wrap an existing cabinet id. The project code is its first segment.
    pub fn from_cabinet_id(cabinet_id: impl Into<String>) -> Self {
        let cabinet_id = cabinet_id.into();
        let project_code = cabinet_id
            .split('-')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            cabinet_id,
            project_code,
        }
    }
}

/// Build the cabinet identity.
pub fn build_identity(source: &IdentitySource) -> CabinetIdentity {
    let cabinet_id = match source {
        IdentitySource::Erp {
            project_number,
            cabinet_number,
        } => format!("{}-{}", short_project_code(project_number), cabinet_number),
        IdentitySource::Simple {
            project_code,
            cabinet_type,
            sequence,
        } => format!(
            "{}-{}-{:03}",
            project_code.to_uppercase(),
            cabinet_type.to_uppercase(),
            sequence
        ),
    };
    CabinetIdentity::from_cabinet_id(cabinet_id)
}

/// Four-character project code from an ERP project number.
///
/// Uses the third dash segment with its leading street number removed, along
/// with a compass letter that directly follows the number (`15WSankaty`).
/// Without a third segment, falls back to the first four letters overall.
pub fn short_project_code(project_number: &str) -> String {
    let segments: Vec<&str> = project_number.split('-').collect();

    let Some(name) = segments.get(2) else {
        return project_number
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .take(4)
            .collect::<String>()
            .to_uppercase();
    };

    let rest = name.trim_start_matches(|c: char| c.is_ascii_digit());
    let had_digits = rest.len() < name.len();
    let mut chars = rest.chars();
    let rest = match (chars.next(), chars.next()) {
        (Some('N' | 'S' | 'E' | 'W'), Some(next)) if had_digits && next.is_ascii_uppercase() => {
            &rest[1..]
        }
        _ => rest,
    };

    rest.chars().take(4).collect::<String>().to_uppercase()
}

/// Part identifier: cabinet id plus the part name with spaces and dashes
/// replaced by underscores.
pub fn part_id(cabinet_id: &str, name: &str) -> String {
    format!("{}-{}", cabinet_id, name.replace([' ', '-'], "_"))
}
