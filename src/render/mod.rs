//! Geometry kernel boundary.
//!
//! The layout works in the cabinet's native frame; the axis swap into the
//! kernel's frame happens only here.

mod kernel;
mod recording;

pub use kernel::{render_cabinet, to_kernel, GeometryKernel, KernelPoint, RenderReport};
pub use recording::{KernelOp, RecordingKernel};
