//! Drawer slide types and their clearance deductions.

use crate::error::CabinetError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Drawer slide hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideType {
    /// Blum Tandem undermount (563H).
    #[default]
    #[serde(alias = "blum_563h")]
    BlumTandem,
    /// Generic side-mount ball-bearing slide.
    SideMount,
    /// Generic undermount slide.
    Undermount,
}

/// Deductions that shrink a drawer opening to the drawer box envelope.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Width removed on each side of the box.
    pub side_deduction: f64,
    /// Height removed from the drawer height.
    pub height_deduction: f64,
    /// Gap between the opening bottom and the box bottom.
    pub bottom_clearance: f64,
    /// Shortest box the slide supports.
    pub min_depth: f64,
}

impl SlideType {
    pub const ALL: [SlideType; 3] = [
        SlideType::BlumTandem,
        SlideType::SideMount,
        SlideType::Undermount,
    ];

    /// Clearance table entry for this slide.
    pub fn spec(&self) -> SlideSpec {
        match self {
            SlideType::BlumTandem => SlideSpec {
                side_deduction: 0.625,
                height_deduction: 0.8125,
                bottom_clearance: 0.5,
                min_depth: 12.0,
            },
            SlideType::SideMount => SlideSpec {
                side_deduction: 0.5,
                height_deduction: 0.5,
                bottom_clearance: 0.25,
                min_depth: 10.0,
            },
            SlideType::Undermount => SlideSpec {
                side_deduction: 0.5,
                height_deduction: 0.75,
                bottom_clearance: 0.375,
                min_depth: 12.0,
            },
        }
    }
}

impl FromStr for SlideType {
    type Err = CabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blum_tandem" | "blum_563h" => Ok(SlideType::BlumTandem),
            "side_mount" => Ok(SlideType::SideMount),
            "undermount" => Ok(SlideType::Undermount),
            _ => Err(CabinetError::UnknownSlideType(s.to_string())),
        }
    }
}
