//! In-memory kernel that records every operation.

use super::kernel::{GeometryKernel, KernelPoint};
use crate::error::{CabinetError, Result};
use crate::model::Rgb;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// One recorded kernel call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum KernelOp {
    CreateBox {
        solid: usize,
        corners: [KernelPoint; 8],
    },
    CreateTriangularPrism {
        solid: usize,
        triangle: [KernelPoint; 3],
        extrusion: KernelPoint,
    },
    Subtract {
        target: usize,
        cutter: usize,
        result: usize,
    },
    SetName {
        solid: usize,
        name: String,
    },
    SetColor {
        solid: usize,
        color: Rgb,
    },
    SetUserText {
        solid: usize,
        key: String,
        value: String,
    },
}

/// Kernel that hands out integer solid ids and logs each call.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    ops: Vec<KernelOp>,
    next_id: usize,
    live: HashSet<usize>,
    names: BTreeMap<usize, String>,
    user_text: BTreeMap<usize, BTreeMap<String, String>>,
    fail_subtract: bool,
}

impl RecordingKernel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A kernel whose boolean difference always fails.
    pub fn failing_subtract() -> Self {
        Self {
            fail_subtract: true,
            ..Self::default()
        }
    }

    pub fn ops(&self) -> &[KernelOp] {
        &self.ops
    }

    pub fn name_of(&self, solid: usize) -> Option<&str> {
        self.names.get(&solid).map(String::as_str)
    }

    pub fn user_text_of(&self, solid: usize) -> Option<&BTreeMap<String, String>> {
        self.user_text.get(&solid)
    }

    /// Number of solids still alive.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    fn allocate(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        id
    }

    fn check_live(&self, solid: usize, context: &str) -> Result<()> {
        if self.live.contains(&solid) {
            Ok(())
        } else {
            Err(CabinetError::Kernel {
                context: context.to_string(),
                message: format!("solid {solid} does not exist"),
            })
        }
    }
}

impl GeometryKernel for RecordingKernel {
    type Solid = usize;

    fn create_box(&mut self, corners: [KernelPoint; 8]) -> Result<usize> {
        let solid = self.allocate();
        self.ops.push(KernelOp::CreateBox { solid, corners });
        Ok(solid)
    }

    fn create_triangular_prism(
        &mut self,
        triangle: [KernelPoint; 3],
        extrusion: KernelPoint,
    ) -> Result<usize> {
        let solid = self.allocate();
        self.ops.push(KernelOp::CreateTriangularPrism {
            solid,
            triangle,
            extrusion,
        });
        Ok(solid)
    }

    fn subtract(&mut self, target: &usize, cutter: &usize) -> Result<usize> {
        self.check_live(*target, "subtract")?;
        self.check_live(*cutter, "subtract")?;
        if self.fail_subtract {
            self.live.remove(cutter);
            return Err(CabinetError::Kernel {
                context: "subtract".to_string(),
                message: "boolean difference produced no solid".to_string(),
            });
        }
        self.live.remove(target);
        self.live.remove(cutter);
        let result = self.allocate();
        self.ops.push(KernelOp::Subtract {
            target: *target,
            cutter: *cutter,
            result,
        });
        Ok(result)
    }

    fn set_name(&mut self, solid: &usize, name: &str) -> Result<()> {
        self.check_live(*solid, "set_name")?;
        self.names.insert(*solid, name.to_string());
        self.ops.push(KernelOp::SetName {
            solid: *solid,
            name: name.to_string(),
        });
        Ok(())
    }

    fn set_color(&mut self, solid: &usize, color: Rgb) -> Result<()> {
        self.check_live(*solid, "set_color")?;
        self.ops.push(KernelOp::SetColor {
            solid: *solid,
            color,
        });
        Ok(())
    }

    fn set_user_text(&mut self, solid: &usize, key: &str, value: &str) -> Result<()> {
        self.check_live(*solid, "set_user_text")?;
        self.user_text
            .entry(*solid)
            .or_default()
            .insert(key.to_string(), value.to_string());
        self.ops.push(KernelOp::SetUserText {
            solid: *solid,
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> KernelPoint {
        KernelPoint {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[test]
    fn test_subtract_consumes_inputs() {
        let mut kernel = RecordingKernel::new();
        let target = kernel.create_box([origin(); 8]).unwrap();
        let cutter = kernel.create_triangular_prism([origin(); 3], origin()).unwrap();
        let result = kernel.subtract(&target, &cutter).unwrap();
        assert_eq!(kernel.live_count(), 1);
        assert!(kernel.set_name(&target, "gone").is_err());
        kernel.set_name(&result, "Left Stile").unwrap();
        assert_eq!(kernel.name_of(result), Some("Left Stile"));
    }

    #[test]
    fn test_failing_subtract_keeps_target() {
        let mut kernel = RecordingKernel::failing_subtract();
        let target = kernel.create_box([origin(); 8]).unwrap();
        let cutter = kernel.create_triangular_prism([origin(); 3], origin()).unwrap();
        assert!(kernel.subtract(&target, &cutter).is_err());
        assert_eq!(kernel.live_count(), 1);
        assert!(kernel.set_name(&target, "kept").is_ok());
    }
}
