use crate::constants::{
    SIMPLE_GRAVITY, SIMPLE_SURFACE_PRESSURE_BAR, STANDARD_GRAVITY, STANDARD_PRESSURE_BAR,
    STANDARD_PRESSURE_PASCALS,
};
use crate::error::{PhysicsError, Result};
use crate::pressure_utils::{bar_to_atm, bar_to_pascal, pascal_to_bar, pressure_at_altitude};
use crate::water::WaterType;
use serde::Serialize;
use tracing::debug;

/// Converts between depth in meters and absolute pressure in bar
/// for a given water density and dive-site altitude.
///
/// The surface pressure is derived from the altitude once, at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DepthConverter {
    density_kg_m3: f64,
    altitude_m: f64,
    gravity: f64,
    surface_pressure: f64,
}

impl DepthConverter {
    /// Create a converter for an arbitrary density (kg/m³) at the given altitude (m).
    ///
    /// Fails on a non-positive density, and on an altitude for which the
    /// barometric model gives no positive surface pressure (above ~44 km or NaN).
    pub fn new(density_kg_m3: f64, altitude_m: f64) -> Result<Self> {
        if !density_kg_m3.is_finite() || density_kg_m3 <= 0.0 {
            debug!(density_kg_m3, "rejected water density");
            return Err(PhysicsError::InvalidDensity(density_kg_m3));
        }
        let surface_pressure = surface_pressure_at(altitude_m)?;
        Ok(Self {
            density_kg_m3,
            altitude_m,
            gravity: STANDARD_GRAVITY,
            surface_pressure,
        })
    }

    pub fn for_water(water: WaterType, altitude_m: f64) -> Result<Self> {
        Self::new(water.density_kg_m3(), altitude_m)
    }

    pub fn for_salt_water(altitude_m: f64) -> Result<Self> {
        Self::for_water(WaterType::Salt, altitude_m)
    }

    pub fn for_brackish_water(altitude_m: f64) -> Result<Self> {
        Self::for_water(WaterType::Brackish, altitude_m)
    }

    pub fn for_fresh_water(altitude_m: f64) -> Result<Self> {
        Self::for_water(WaterType::Fresh, altitude_m)
    }

    /// `water` at sea level, where the surface pressure is the standard atmosphere
    pub fn at_sea_level(water: WaterType) -> Self {
        Self {
            density_kg_m3: water.density_kg_m3(),
            altitude_m: 0.0,
            gravity: STANDARD_GRAVITY,
            surface_pressure: pascal_to_bar(STANDARD_PRESSURE_PASCALS),
        }
    }

    /// Training calibration: fresh water, 1 bar at the surface and g = 10,
    /// so every 10 m adds exactly 1 bar.
    pub fn simple() -> Self {
        Self {
            density_kg_m3: WaterType::Fresh.density_kg_m3(),
            altitude_m: 0.0,
            gravity: SIMPLE_GRAVITY,
            surface_pressure: SIMPLE_SURFACE_PRESSURE_BAR,
        }
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density_kg_m3
    }

    pub fn altitude_m(&self) -> f64 {
        self.altitude_m
    }

    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Atmospheric pressure at the dive site in bar
    pub fn surface_pressure(&self) -> f64 {
        self.surface_pressure
    }

    fn weight_density(&self) -> f64 {
        self.density_kg_m3 * self.gravity
    }

    /// Absolute pressure in bar at `depth_m`. Negative depths are not rejected.
    pub fn to_bar(&self, depth_m: f64) -> f64 {
        pascal_to_bar(depth_m * self.weight_density()) + self.surface_pressure
    }

    /// Absolute pressure in atm at `depth_m`
    pub fn to_atm(&self, depth_m: f64) -> f64 {
        bar_to_atm(self.to_bar(depth_m))
    }

    /// Depth in meters for an absolute pressure in bar.
    ///
    /// Fails when the pressure is lower than the surface pressure, or NaN.
    pub fn from_bar(&self, bars: f64) -> Result<f64> {
        if bars.is_nan() || bars < self.surface_pressure {
            debug!(bars, surface = self.surface_pressure, "pressure below surface");
            return Err(PhysicsError::BelowSurfacePressure {
                pressure: bars,
                surface: self.surface_pressure,
            });
        }

        let pascals = bar_to_pascal(bars - self.surface_pressure);
        Ok(pascals / self.weight_density())
    }

    /// Depth an altitude dive corresponds to at sea level, for use with sea-level tables
    pub fn depth_at_sea_level(&self, depth_m: f64) -> f64 {
        depth_m * STANDARD_PRESSURE_BAR / self.surface_pressure
    }
}

/// Surface pressure in bar at `altitude_m`, rejecting altitudes the barometric
/// model cannot place a positive atmosphere at.
pub fn surface_pressure_at(altitude_m: f64) -> Result<f64> {
    let surface_pressure = pascal_to_bar(pressure_at_altitude(altitude_m));
    if !altitude_m.is_finite() || !surface_pressure.is_finite() || surface_pressure <= 0.0 {
        debug!(altitude_m, surface_pressure, "no atmosphere at altitude");
        return Err(PhysicsError::InvalidAltitude { altitude: altitude_m, surface_pressure });
    }
    Ok(surface_pressure)
}
