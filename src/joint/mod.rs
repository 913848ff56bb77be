//! Corner joints between face frame stiles and finished end panels.

mod miter;

pub use miter::{apply_miter_joints, compute_miter, miter_pair, Corner};
