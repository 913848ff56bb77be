//! Kernel trait and part rendering.

use crate::error::{CabinetError, Result};
use crate::identity::PartLabel;
use crate::model::{MiterCut, Part, Rgb, Vec3};
use crate::CabinetBuild;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Point in the kernel frame: x right, y toward the wall, z up from the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Map a native point into the kernel frame.
///
/// Native depth becomes kernel y, and native height is lifted by the toe
/// kick so the floor sits at kernel z = 0.
pub fn to_kernel(point: Vec3, toe_kick_height: f64) -> KernelPoint {
    KernelPoint {
        x: point.x,
        y: point.z,
        z: point.y + toe_kick_height,
    }
}

/// Operations a CAD geometry kernel must provide.
pub trait GeometryKernel {
    /// Handle to a solid owned by the kernel.
    type Solid: Clone;

    /// Box from its eight corners: bottom face, then top face, counter-clockwise.
    fn create_box(&mut self, corners: [KernelPoint; 8]) -> Result<Self::Solid>;

    /// Triangle extruded along `extrusion`.
    fn create_triangular_prism(
        &mut self,
        triangle: [KernelPoint; 3],
        extrusion: KernelPoint,
    ) -> Result<Self::Solid>;

    /// Boolean difference. Consumes both inputs on success.
    fn subtract(&mut self, target: &Self::Solid, cutter: &Self::Solid) -> Result<Self::Solid>;

    fn set_name(&mut self, solid: &Self::Solid, name: &str) -> Result<()>;

    fn set_color(&mut self, solid: &Self::Solid, color: Rgb) -> Result<()>;

    fn set_user_text(&mut self, solid: &Self::Solid, key: &str, value: &str) -> Result<()>;
}

/// Solids created for a build, in part order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderReport<S> {
    pub solids: Vec<(String, S)>,
    pub warnings: Vec<String>,
}

fn box_corners(part: &Part, toe_kick_height: f64) -> [KernelPoint; 8] {
    let Vec3 { x, y, z } = part.position;
    let (w, h, d) = (part.dimensions.w, part.dimensions.h, part.dimensions.d);
    [
        Vec3::new(x, y, z),
        Vec3::new(x + w, y, z),
        Vec3::new(x + w, y, z + d),
        Vec3::new(x, y, z + d),
        Vec3::new(x, y + h, z),
        Vec3::new(x + w, y + h, z),
        Vec3::new(x + w, y + h, z + d),
        Vec3::new(x, y + h, z + d),
    ]
    .map(|p| to_kernel(p, toe_kick_height))
}

fn cutter_profile(cut: &MiterCut, toe_kick_height: f64) -> ([KernelPoint; 3], KernelPoint) {
    let triangle = cut
        .vertices_xz
        .map(|v| to_kernel(Vec3::new(v.x, cut.y_range.start, v.z), toe_kick_height));
    let extrusion = KernelPoint {
        x: 0.0,
        y: 0.0,
        z: cut.y_range.span(),
    };
    (triangle, extrusion)
}

fn kernel_context<T>(result: Result<T>, context: impl FnOnce() -> String) -> Result<T> {
    result.map_err(|e| match e {
        CabinetError::Kernel { message, .. } => CabinetError::Kernel {
            context: context(),
            message,
        },
        other => other,
    })
}

/// Subtract a miter cutter, keeping the plain box if the kernel refuses.
fn apply_miter<K: GeometryKernel>(
    kernel: &mut K,
    solid: K::Solid,
    part: &Part,
    cut: &MiterCut,
    toe_kick_height: f64,
    warnings: &mut Vec<String>,
) -> K::Solid {
    let (triangle, extrusion) = cutter_profile(cut, toe_kick_height);
    let result = kernel
        .create_triangular_prism(triangle, extrusion)
        .and_then(|cutter| kernel.subtract(&solid, &cutter));
    match result {
        Ok(mitered) => {
            debug!("Applied miter to {}", part.key);
            mitered
        }
        Err(e) => {
            let message = format!("Miter not applied to '{}': {}", part.key, e);
            warn!("{}", message);
            warnings.push(message);
            solid
        }
    }
}

fn render_part<K: GeometryKernel>(
    kernel: &mut K,
    part: &Part,
    label: Option<&PartLabel>,
    toe_kick_height: f64,
    warnings: &mut Vec<String>,
) -> Result<K::Solid> {
    let mut solid = kernel_context(
        kernel.create_box(box_corners(part, toe_kick_height)),
        || format!("creating '{}'", part.key),
    )?;

    if let Some(cut) = &part.miter_cut {
        solid = apply_miter(kernel, solid, part, cut, toe_kick_height, warnings);
    }

    kernel_context(
        kernel
            .set_name(&solid, &part.name)
            .and_then(|_| kernel.set_color(&solid, part.material.spec().color)),
        || format!("styling '{}'", part.key),
    )?;

    if let Some(label) = label {
        for (key, value) in label.user_text() {
            kernel_context(kernel.set_user_text(&solid, key, &value), || {
                format!("labelling '{}'", part.key)
            })?;
        }
    }
    Ok(solid)
}

/// Create one solid per part, mitered where the part carries a cut, named,
/// colored by material and labelled.
pub fn render_cabinet<K: GeometryKernel>(
    kernel: &mut K,
    build: &CabinetBuild,
) -> Result<RenderReport<K::Solid>> {
    let toe_kick_height = build.derived.toe_kick_height;
    let mut report = RenderReport {
        solids: Vec::with_capacity(build.parts.len()),
        warnings: Vec::new(),
    };

    for (i, part) in build.parts.iter().enumerate() {
        let label = build.labels.get(i).filter(|l| l.part_name == part.name);
        let solid = render_part(kernel, part, label, toe_kick_height, &mut report.warnings)?;
        report.solids.push((part.key.clone(), solid));
    }

    debug!("Rendered {} solids", report.solids.len());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dimensions, PartType};

    #[test]
    fn test_to_kernel_swaps_axes_and_lifts() {
        let p = to_kernel(Vec3::new(1.0, -4.5, 2.0), 4.5);
        assert_eq!(p, KernelPoint { x: 1.0, y: 2.0, z: 0.0 });
    }

    #[test]
    fn test_box_corners() {
        let part = Part::new(
            "toe_kick",
            "Toe Kick",
            PartType::ToeKick,
            Vec3::new(0.75, -4.5, 3.0),
            Dimensions::new(34.5, 4.5, 0.75),
        );
        let corners = box_corners(&part, 4.5);
        assert_eq!(corners[0], KernelPoint { x: 0.75, y: 3.0, z: 0.0 });
        assert_eq!(corners[6], KernelPoint { x: 35.25, y: 3.75, z: 4.5 });
    }
}
