//! Envelope to derived-dimension calculation.

mod dimensions;

pub use dimensions::{derive_dimensions, DerivedDimensions, InteriorDimensions, Opening};
