//! Cabinet exterior envelope and construction type.

use crate::error::CabinetError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Cabinet construction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinetType {
    /// Standard base cabinet.
    Base,
    /// Wall (upper) cabinet, hung without a toe kick.
    #[serde(alias = "upper")]
    Wall,
    /// Tall pantry/utility cabinet.
    Tall,
    /// Bathroom vanity.
    Vanity,
    /// Base cabinet with a full drawer stack.
    DrawerBase,
    /// Base cabinet with a false front over the sink.
    SinkBase,
    /// Corner base cabinet.
    Corner,
    /// Anything else; built as a plain box without a toe kick.
    Custom,
}

impl CabinetType {
    /// Whether the cabinet stands on the floor on a toe kick.
    pub fn is_floor_standing(&self) -> bool {
        matches!(
            self,
            CabinetType::Base
                | CabinetType::Tall
                | CabinetType::Vanity
                | CabinetType::DrawerBase
                | CabinetType::SinkBase
                | CabinetType::Corner
        )
    }

    /// Whether the cabinet gets finished end panels unless told otherwise.
    pub fn has_finished_ends_by_default(&self) -> bool {
        matches!(self, CabinetType::Vanity | CabinetType::Tall)
    }

    /// Snake-case tag used in JSON and reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinetType::Base => "base",
            CabinetType::Wall => "wall",
            CabinetType::Tall => "tall",
            CabinetType::Vanity => "vanity",
            CabinetType::DrawerBase => "drawer_base",
            CabinetType::SinkBase => "sink_base",
            CabinetType::Corner => "corner",
            CabinetType::Custom => "custom",
        }
    }
}

impl FromStr for CabinetType {
    type Err = CabinetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "base" => Ok(CabinetType::Base),
            "wall" | "upper" => Ok(CabinetType::Wall),
            "tall" => Ok(CabinetType::Tall),
            "vanity" => Ok(CabinetType::Vanity),
            "drawer_base" => Ok(CabinetType::DrawerBase),
            "sink_base" => Ok(CabinetType::SinkBase),
            "corner" => Ok(CabinetType::Corner),
            "custom" => Ok(CabinetType::Custom),
            _ => Err(CabinetError::UnknownCabinetType(s.to_string())),
        }
    }
}

impl std::fmt::Display for CabinetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Exterior envelope of a cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CabinetEnvelope {
    /// Exterior width.
    pub width: f64,
    /// Exterior height, floor to top of box.
    pub height: f64,
    /// Exterior depth, front of face frame to wall.
    pub depth: f64,
    /// Construction type.
    pub cabinet_type: CabinetType,
    /// Toe kick height override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toe_kick_height: Option<f64>,
}

impl CabinetEnvelope {
    /// Create an envelope without a toe kick override.
    pub fn new(width: f64, height: f64, depth: f64, cabinet_type: CabinetType) -> Self {
        Self {
            width,
            height,
            depth,
            cabinet_type,
            toe_kick_height: None,
        }
    }

    /// Set the toe kick height override.
    pub fn with_toe_kick(mut self, toe_kick_height: f64) -> Self {
        self.toe_kick_height = Some(toe_kick_height);
        self
    }
}
