use crate::constants::O2_FRACTION_IN_AIR;
use crate::depth_converter::DepthConverter;
use crate::error::Result;
use crate::gas::{Gas, partial_pressure};
use crate::water::WaterType;
use serde::Serialize;
use std::fmt;

/// Gas metrics in meters of water for one dive site.
///
/// Wraps the pressure-based [`Gas`] formulas with a [`DepthConverter`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NitroxCalculator {
    depth_converter: DepthConverter,
    o2_in_air: f64,
}

impl Default for NitroxCalculator {
    fn default() -> Self {
        Self::new(DepthConverter::at_sea_level(WaterType::Salt))
    }
}

impl NitroxCalculator {
    pub fn new(depth_converter: DepthConverter) -> Self {
        Self::with_o2_in_air(depth_converter, O2_FRACTION_IN_AIR)
    }

    pub fn with_o2_in_air(depth_converter: DepthConverter, o2_in_air: f64) -> Self {
        Self { depth_converter, o2_in_air }
    }

    pub fn depth_converter(&self) -> &DepthConverter {
        &self.depth_converter
    }

    pub fn o2_in_air(&self) -> f64 {
        self.o2_in_air
    }

    /// Convert a pressure to meters, reporting anything at or above the surface as 0 m
    fn depth_or_surface(&self, bars: f64) -> Result<f64> {
        if bars <= self.depth_converter.surface_pressure() {
            return Ok(0.0);
        }
        self.depth_converter.from_bar(bars)
    }

    /// Equivalent air depth in meters for `gas` at `depth_m`
    pub fn ead(&self, gas: &Gas, depth_m: f64) -> Result<f64> {
        let bars = self.depth_converter.to_bar(depth_m);
        self.depth_or_surface(gas.ead_for_air(bars, self.o2_in_air))
    }

    /// Equivalent narcotic depth in meters for `gas` at `depth_m`
    pub fn end(&self, gas: &Gas, depth_m: f64, o2_is_narcotic: bool) -> Result<f64> {
        let bars = self.depth_converter.to_bar(depth_m);
        self.depth_or_surface(gas.end(bars, o2_is_narcotic))
    }

    /// Deepest depth in meters at which `gas` stays within `end_m` of narcotic depth
    pub fn mnd(&self, gas: &Gas, end_m: f64) -> Result<f64> {
        let narcotic_bars = self.depth_converter.to_bar(end_m);
        self.depth_converter.from_bar(gas.mnd(narcotic_bars)?)
    }

    /// O2 fraction (0-1) giving `ppo2` at `depth_m`
    pub fn best_mix(&self, ppo2: f64, depth_m: f64) -> Result<f64> {
        Gas::best_mix(ppo2, self.depth_converter.to_bar(depth_m))
    }

    /// Maximum operating depth in meters for `gas` at the `ppo2` limit
    pub fn mod_depth(&self, gas: &Gas, ppo2: f64) -> Result<f64> {
        self.depth_converter.from_bar(gas.mod_bar(ppo2)?)
    }

    /// Shallowest depth in meters at which `gas` is breathable; 0 for hyperoxic mixes
    pub fn ceiling(&self, gas: &Gas) -> Result<f64> {
        let surface_pressure = self.depth_converter.surface_pressure();
        self.depth_converter.from_bar(gas.ceiling(surface_pressure)?)
    }

    /// Partial pressure in bar of a component with `fraction` at `depth_m`
    pub fn partial_pressure(&self, fraction: f64, depth_m: f64) -> f64 {
        partial_pressure(self.depth_converter.to_bar(depth_m), fraction)
    }
}

impl fmt::Display for NitroxCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Nitrox Calculator: Density: {}, Altitude: {}",
            self.depth_converter.density_kg_m3(),
            self.depth_converter.altitude_m()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_deviation;
    use crate::error::PhysicsError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mod_salt_water() {
        let calculator = NitroxCalculator::default();
        let ean32 = Gas::nitrox(0.32).unwrap();
        let mod_m = calculator.mod_depth(&ean32, 1.4).unwrap();

        // 4.375 bar absolute
        assert_abs_diff_eq!(mod_m, 33.28, epsilon = 0.01);
        assert_deviation!(mod_m, 33.4, 1.0, "EAN32 MOD at 1.4 bar");
    }

    #[test]
    fn test_mod_in_training_calibration() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        let ean32 = Gas::nitrox(0.32).unwrap();
        assert_abs_diff_eq!(calculator.mod_depth(&ean32, 1.4).unwrap(), 33.75, epsilon = 1e-9);

        let oxygen = Gas::oxygen();
        assert_abs_diff_eq!(calculator.mod_depth(&oxygen, 1.6).unwrap(), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ead_nitrox_is_shallower() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        let ean32 = Gas::nitrox(0.32).unwrap();
        // 3 bar · 0.68 / 0.791
        let expected = (3.0 * 0.68 / 0.791 - 1.0) * 10.0;
        assert_abs_diff_eq!(calculator.ead(&ean32, 20.0).unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_ead_is_zero_near_surface() {
        let calculator = NitroxCalculator::default();
        let ean50 = Gas::nitrox(0.5).unwrap();
        assert_eq!(calculator.ead(&ean50, 0.0).unwrap(), 0.0);
        assert_eq!(calculator.ead(&ean50, 3.0).unwrap(), 0.0);
    }

    #[test]
    fn test_end_and_mnd() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        let trimix = Gas::new(0.21, 0.35).unwrap();

        let end = calculator.end(&trimix, 50.0, true).unwrap();
        assert_abs_diff_eq!(end, (6.0 * 0.65 - 1.0) * 10.0, epsilon = 1e-9);

        let mnd = calculator.mnd(&trimix, end).unwrap();
        assert_abs_diff_eq!(mnd, 50.0, epsilon = 1e-9);
    }

    #[test]
    fn test_best_mix() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        assert_abs_diff_eq!(calculator.best_mix(1.4, 30.0).unwrap(), 0.35, epsilon = 1e-12);
        assert_eq!(calculator.best_mix(1.6, 0.0).unwrap(), 1.0);
        assert_eq!(calculator.best_mix(-1.4, 30.0), Err(PhysicsError::InvalidPpo2(-1.4)));
    }

    #[test]
    fn test_best_mix_at_altitude() {
        let calculator = NitroxCalculator::new(DepthConverter::for_fresh_water(3000.0).unwrap());
        let best = calculator.best_mix(1.4, 25.0).unwrap();
        assert_abs_diff_eq!(best, 1.4 / calculator.depth_converter().to_bar(25.0), epsilon = 1e-12);
    }

    #[test]
    fn test_ceiling() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        let hypoxic = Gas::new(0.12, 0.6).unwrap();
        assert_abs_diff_eq!(calculator.ceiling(&hypoxic).unwrap(), 5.0, epsilon = 1e-9);
        assert_eq!(calculator.ceiling(&Gas::air()).unwrap(), 0.0);
    }

    #[test]
    fn test_mod_shallower_than_surface_fails() {
        let calculator = NitroxCalculator::default();
        let air = Gas::air();
        let result = calculator.mod_depth(&air, 0.1);
        assert!(matches!(result, Err(PhysicsError::BelowSurfacePressure { .. })));
    }

    #[test]
    fn test_partial_pressure() {
        let calculator = NitroxCalculator::new(DepthConverter::simple());
        assert_abs_diff_eq!(calculator.partial_pressure(0.21, 40.0), 1.05, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        let calculator = NitroxCalculator::new(DepthConverter::for_fresh_water(300.0).unwrap());
        assert_eq!(calculator.to_string(), "Nitrox Calculator: Density: 1000, Altitude: 300");
    }
}
