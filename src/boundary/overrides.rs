//! Persisted per-cabinet dimension overrides.
//!
//! Overrides are stored as a JSON string under `OVERRIDES_{cabinet_id}` in
//! whatever key/value store the host document provides.

use crate::error::Result;
use crate::model::CabinetEnvelope;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Key/value string storage.
pub trait OverrideStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryOverrideStore {
    values: HashMap<String, String>,
}

impl MemoryOverrideStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverrideStore for MemoryOverrideStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// User overrides for one cabinet. Unset fields keep the computed value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl CabinetOverrides {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Envelope with the overridden dimensions substituted.
    pub fn apply_to_envelope(&self, envelope: &CabinetEnvelope) -> CabinetEnvelope {
        CabinetEnvelope {
            width: self.width.unwrap_or(envelope.width),
            height: self.height.unwrap_or(envelope.height),
            depth: self.depth.unwrap_or(envelope.depth),
            ..envelope.clone()
        }
    }
}

/// Storage key for a cabinet's overrides.
pub fn override_key(cabinet_id: &str) -> String {
    format!("OVERRIDES_{cabinet_id}")
}

/// Load a cabinet's overrides; an absent key means no overrides.
pub fn load_overrides(store: &dyn OverrideStore, cabinet_id: &str) -> Result<CabinetOverrides> {
    match store.get(&override_key(cabinet_id)) {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(CabinetOverrides::default()),
    }
}

/// Save a cabinet's overrides. Empty overrides clear the key.
pub fn save_overrides(
    store: &mut dyn OverrideStore,
    cabinet_id: &str,
    overrides: &CabinetOverrides,
) -> Result<()> {
    let key = override_key(cabinet_id);
    if overrides.is_empty() {
        store.remove(&key);
    } else {
        store.set(&key, serde_json::to_string(overrides)?);
    }
    Ok(())
}
