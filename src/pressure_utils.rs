//! Utilities for converting between pressure units and between
//! altitude and atmospheric pressure using the barometric formula.

use crate::constants::{
    ATM_TO_BAR, BAR_TO_ATM, BAROMETRIC_EXPONENT, LAPSE_RATE_K_PER_M, PASCALS_PER_BAR,
    STANDARD_PRESSURE_PASCALS, STANDARD_TEMPERATURE_K,
};

/// Converts pascals to bar.
pub fn pascal_to_bar(pascals: f64) -> f64 {
    pascals / PASCALS_PER_BAR
}

/// Converts bar to pascals.
pub fn bar_to_pascal(bars: f64) -> f64 {
    bars * PASCALS_PER_BAR
}

pub fn bar_to_atm(bars: f64) -> f64 {
    bars * BAR_TO_ATM
}

pub fn atm_to_bar(atm: f64) -> f64 {
    atm * ATM_TO_BAR
}

pub fn pascal_to_atm(pascals: f64) -> f64 {
    bar_to_atm(pascal_to_bar(pascals))
}

pub fn atm_to_pascal(atm: f64) -> f64 {
    bar_to_pascal(atm_to_bar(atm))
}

/// Atmospheric pressure at the given altitude.
///
/// # Arguments
/// - `altitude_m`: altitude above sea level in meters; negative values are
///   evaluated as-is (pressure above standard)
///
/// # Returns
/// Pressure in pascals
pub fn pressure_at_altitude(altitude_m: f64) -> f64 {
    let base = STANDARD_TEMPERATURE_K / (STANDARD_TEMPERATURE_K + LAPSE_RATE_K_PER_M * altitude_m);
    STANDARD_PRESSURE_PASCALS * base.powf(BAROMETRIC_EXPONENT)
}

/// Altitude for the given atmospheric pressure.
///
/// Pressures at or above standard sea-level pressure saturate to 0 m.
///
/// # Arguments
/// - `pascals`: atmospheric pressure in pascals
///
/// # Returns
/// Altitude in meters
pub fn altitude_at_pressure(pascals: f64) -> f64 {
    if pascals >= STANDARD_PRESSURE_PASCALS {
        return 0.0;
    }

    let normalized = pascals / STANDARD_PRESSURE_PASCALS;
    let base = normalized.powf(1.0 / BAROMETRIC_EXPONENT);
    (STANDARD_TEMPERATURE_K / base - STANDARD_TEMPERATURE_K) / LAPSE_RATE_K_PER_M
}
