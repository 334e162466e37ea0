//! Generator settings: noise field parameters plus seed selection
//!
//! Settings load from a JSON file; missing keys fall back to the reference
//! defaults (500x500, 3 octaves, random seed).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::noise::NoiseFieldConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Fixed seed; a fresh one is drawn from the OS when absent
    pub seed: Option<i32>,
    pub field: NoiseFieldConfig,
    /// Evaluate pixel stripes on the rayon pool
    pub parallel: bool,
}

impl GeneratorSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|reason| Error::Config {
            path: path.display().to_string(),
            reason,
        })
    }

    fn from_json(text: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// The configured seed, or a non-deterministic one
    pub fn resolve_seed(&self) -> Result<i32> {
        match self.seed {
            Some(seed) => Ok(seed),
            None => random_seed(),
        }
    }
}

pub fn random_seed() -> Result<i32> {
    let mut bytes = [0u8; 4];
    getrandom::getrandom(&mut bytes).map_err(|e| Error::Seed(e.to_string()))?;
    Ok(i32::from_le_bytes(bytes))
}
