//! tcs-cabinet - Parametric cabinet part derivation.
//!
//! Given a cabinet's exterior width, height, depth and construction type,
//! this library derives the position and size of every part (carcass panels,
//! face frame members, stretchers, drawer boxes and faces, toe kick, finished
//! ends), the miter cuts where stiles meet end panels, and the identifiers
//! and manufacturing labels attached to each part.
//!
//! # Example
//!
//! ```no_run
//! use tcs_cabinet::{build_cabinet, load_cabinet_spec};
//! use std::path::Path;
//!
//! let spec = load_cabinet_spec(Path::new("cabinet.json")).unwrap();
//! let build = build_cabinet(&spec).unwrap();
//! for label in &build.labels {
//!     println!("{} {}", label.part_id, label.material);
//! }
//! ```

pub mod boundary;
pub mod config;
pub mod derive;
pub mod error;
pub mod identity;
pub mod joint;
pub mod layout;
pub mod model;
pub mod render;
pub mod validation;

// Re-exports for convenience
pub use config::ConstructionStandards;
pub use derive::{derive_dimensions, DerivedDimensions};
pub use error::{CabinetError, ErrorCode, Result};
pub use identity::{build_identity, label_parts, CabinetIdentity, IdentitySource, PartLabel};
pub use joint::{apply_miter_joints, compute_miter, Corner};
pub use layout::{layout_parts, DegeneratePolicy, JointStyle, LayoutOptions, LayoutOutcome};
pub use model::{
    CabinetEnvelope, CabinetType, Dimensions, MaterialKey, MiterCut, Part, PartList, PartType,
    SlideType, Vec3,
};
pub use render::{render_cabinet, GeometryKernel, RecordingKernel};
pub use validation::{validate_positions, ValidationResult};

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Project code used when a spec carries no identity.
pub const DEFAULT_PROJECT_CODE: &str = "CAB";

/// Everything needed to build one cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetSpec {
    pub envelope: CabinetEnvelope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<IdentitySource>,
    #[serde(default)]
    pub options: LayoutOptions,
    #[serde(default)]
    pub standards: ConstructionStandards,
}

impl CabinetSpec {
    pub fn new(envelope: CabinetEnvelope) -> Self {
        Self {
            envelope,
            identity: None,
            options: LayoutOptions::default(),
            standards: ConstructionStandards::default(),
        }
    }

    /// Identity source, falling back to `CAB-{TYPE}-001`.
    pub fn identity_source(&self) -> IdentitySource {
        self.identity.clone().unwrap_or_else(|| IdentitySource::Simple {
            project_code: DEFAULT_PROJECT_CODE.to_string(),
            cabinet_type: self.envelope.cabinet_type.as_str().to_string(),
            sequence: 1,
        })
    }
}

/// A built cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetBuild {
    pub identity: CabinetIdentity,
    pub envelope: CabinetEnvelope,
    pub derived: DerivedDimensions,
    pub parts: PartList,
    pub labels: Vec<PartLabel>,
    /// Non-fatal findings: dropped parts, truncated stacks, unmitered
    /// corners and position check failures.
    pub warnings: Vec<String>,
}

/// Load a cabinet spec from a JSON file.
pub fn load_cabinet_spec(path: &Path) -> Result<CabinetSpec> {
    if !path.exists() {
        return Err(CabinetError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Build a cabinet.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Derive interior and opening dimensions
/// 2. Lay out every part
/// 3. Miter stiles against finished end panels
/// 4. Check part positions
/// 5. Build the identity and part labels
pub fn build_cabinet(spec: &CabinetSpec) -> Result<CabinetBuild> {
    let derived = derive_dimensions(&spec.envelope, &spec.standards)?;

    let LayoutOutcome {
        mut parts,
        mut warnings,
    } = layout_parts(&spec.envelope, &derived, &spec.options, &spec.standards)?;

    if spec.options.joint_style == JointStyle::Miter {
        warnings.extend(apply_miter_joints(&mut parts));
    }

    let validation = validate_positions(&parts, &spec.envelope, &derived);
    for message in validation.errors.iter().chain(&validation.warnings) {
        warn!("{}", message);
        warnings.push(message.clone());
    }

    let identity = build_identity(&spec.identity_source());
    let labels = label_parts(&identity, &parts);
    debug!(
        "Built {} with {} parts ({} warnings)",
        identity.cabinet_id,
        parts.len(),
        warnings.len()
    );

    Ok(CabinetBuild {
        identity,
        envelope: spec.envelope.clone(),
        derived,
        parts,
        labels,
        warnings,
    })
}
