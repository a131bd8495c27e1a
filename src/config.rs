use crate::calculators::NitroxCalculator;
use crate::constants::{MAX_DECO_PPO2, MAX_END_M, MAX_WORKING_PPO2, O2_FRACTION_IN_AIR};
use crate::depth_converter::{DepthConverter, surface_pressure_at};
use crate::error::{PhysicsError, Result};
use crate::gas::Gas;
use crate::water::WaterType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Dive-site and limit settings the calculators are built from.
///
/// Every field has a default, so `{}` is a valid configuration
/// (salt water at sea level, ppO2 1.4 / 1.6, END limit 30 m).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentConfig {
    pub water: WaterType,
    pub altitude_m: f64,
    /// Training calibration: 1 bar surface, 10 m per bar. Ignores `water` and `altitude_m`.
    pub simple: bool,
    pub o2_in_air: f64,
    pub max_ppo2: f64,
    pub deco_ppo2: f64,
    pub max_end_m: f64,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            water: WaterType::Salt,
            altitude_m: 0.0,
            simple: false,
            o2_in_air: O2_FRACTION_IN_AIR,
            max_ppo2: MAX_WORKING_PPO2,
            deco_ppo2: MAX_DECO_PPO2,
            max_end_m: MAX_END_M,
        }
    }
}

impl EnvironmentConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EnvironmentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading environment config");
        let json = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "failed to read environment config");
            PhysicsError::Config(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.simple {
            surface_pressure_at(self.altitude_m).map_err(|e| invalid(e.to_string()))?;
        }
        if !(self.o2_in_air > 0.0 && self.o2_in_air < 1.0) {
            return Err(invalid(format!("o2_in_air must be in (0, 1), got {}", self.o2_in_air)));
        }
        for (name, value) in [
            ("max_ppo2", self.max_ppo2),
            ("deco_ppo2", self.deco_ppo2),
            ("max_end_m", self.max_end_m),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }
        Ok(())
    }

    pub fn depth_converter(&self) -> Result<DepthConverter> {
        if self.simple {
            Ok(DepthConverter::simple())
        } else {
            DepthConverter::for_water(self.water, self.altitude_m)
        }
    }

    pub fn nitrox_calculator(&self) -> Result<NitroxCalculator> {
        Ok(NitroxCalculator::with_o2_in_air(self.depth_converter()?, self.o2_in_air))
    }

    /// MOD in meters of `gas` at the working ppO2 limit
    pub fn working_mod(&self, gas: &Gas) -> Result<f64> {
        self.nitrox_calculator()?.mod_depth(gas, self.max_ppo2)
    }

    /// MOD in meters of `gas` used as a decompression gas
    pub fn deco_mod(&self, gas: &Gas) -> Result<f64> {
        self.nitrox_calculator()?.mod_depth(gas, self.deco_ppo2)
    }

    /// Deepest depth in meters at which `gas` stays within the END limit
    pub fn narcotic_limit(&self, gas: &Gas) -> Result<f64> {
        self.nitrox_calculator()?.mnd(gas, self.max_end_m)
    }
}

fn invalid(message: String) -> PhysicsError {
    warn!(%message, "invalid environment config");
    PhysicsError::Config(message)
}
