use crate::constants::STANDARD_PRESSURE_BAR;
use crate::depth_converter::surface_pressure_at;
use crate::error::{PhysicsError, Result};
use crate::pressure_utils::{altitude_at_pressure, bar_to_pascal, pascal_to_bar, pressure_at_altitude};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Keeps a dive-site altitude and its surface pressure in step, and scales
/// an actual dive depth to the sea-level depth used by dive tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AltitudeCalculator {
    /// Actual depth of the altitude dive in fresh water meters
    pub altitude_depth: f64,
    altitude: f64,
    pressure: f64,
}

impl Default for AltitudeCalculator {
    fn default() -> Self {
        Self {
            altitude_depth: 20.0,
            altitude: 300.0,
            pressure: Self::to_pressure(300.0),
        }
    }
}

impl AltitudeCalculator {
    /// Fails when the barometric model has no positive pressure at `altitude`
    pub fn new(altitude_depth: f64, altitude: f64) -> Result<Self> {
        Ok(Self {
            altitude_depth,
            altitude,
            pressure: surface_pressure_at(altitude)?,
        })
    }

    /// Altitude in meters
    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    /// Surface pressure in bar
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Set the altitude in meters. On error the calculator is unchanged.
    pub fn set_altitude(&mut self, altitude: f64) -> Result<()> {
        self.pressure = surface_pressure_at(altitude)?;
        self.altitude = altitude;
        Ok(())
    }

    /// Set the surface pressure in bar; pressures above standard give altitude 0.
    /// Non-positive or non-finite pressures are rejected and leave the calculator unchanged.
    pub fn set_pressure(&mut self, pressure: f64) -> Result<()> {
        if !pressure.is_finite() || pressure <= 0.0 {
            debug!(pressure, "rejected surface pressure");
            return Err(PhysicsError::NonPositivePressure(pressure));
        }
        self.pressure = pressure;
        self.altitude = Self::to_altitude(pressure);
        Ok(())
    }

    /// Sea-level equivalent of `altitude_depth`
    pub fn theoretical_depth(&self) -> f64 {
        self.altitude_depth * STANDARD_PRESSURE_BAR / self.pressure
    }

    pub fn to_altitude(pressure: f64) -> f64 {
        altitude_at_pressure(bar_to_pascal(pressure))
    }

    pub fn to_pressure(altitude: f64) -> f64 {
        pascal_to_bar(pressure_at_altitude(altitude))
    }
}
