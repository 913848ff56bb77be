//! Data model types for cabinet part derivation.

mod envelope;
mod material;
mod miter;
mod part;
mod slide;

pub use envelope::{CabinetEnvelope, CabinetType};
pub use material::{edgeband_for, Grain, MaterialKey, MaterialSpec, Rgb};
pub use miter::{MiterCut, PointXz, RemoveFrom, YRange};
pub use part::{Dimensions, Part, PartList, PartType, Vec3};
pub use slide::{SlideSpec, SlideType};
