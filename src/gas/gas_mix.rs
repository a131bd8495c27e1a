use crate::constants::{
    FRACTION_TOLERANCE, HYPOXIC_O2_PERCENT, MIN_PPO2, O2_FRACTION_IN_AIR, SIMPLE_O2_PERCENT_IN_AIR,
};
use crate::error::{PhysicsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub const AIR_NAME: &str = "Air";
pub const OXYGEN_NAME: &str = "Oxygen";

/// Oxygen band a mix falls into, by rounded O2 percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GasCategory {
    /// Under 18 % O2, not breathable at the surface
    Hypoxic,
    Normoxic,
    /// Over 21 % O2
    Hyperoxic,
}

/// A breathing mixture of oxygen, helium and nitrogen.
///
/// Fractions are in 0-1; nitrogen is whatever O2 and He leave over.
/// Instances are only obtainable through validating constructors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gas {
    o2: f64,
    he: f64,
    n2: f64,
}

impl Gas {
    /// Create a mix from O2 and He fractions (0-1).
    ///
    /// Fails when either fraction is outside 0-1 or they sum above 1.
    pub fn new(o2: f64, he: f64) -> Result<Self> {
        let in_range = |f: f64| f.is_finite() && (0.0..=1.0).contains(&f);
        if !in_range(o2) || !in_range(he) || o2 + he > 1.0 + FRACTION_TOLERANCE {
            debug!(o2, he, "rejected gas composition");
            return Err(PhysicsError::InvalidComposition { o2, he });
        }

        Ok(Self::from_fractions(o2, he))
    }

    pub(crate) fn from_fractions(o2: f64, he: f64) -> Self {
        let n2 = (1.0 - o2 - he).max(0.0);
        Self { o2, he, n2 }
    }

    pub fn air() -> Self {
        Self::from_fractions(O2_FRACTION_IN_AIR, 0.0)
    }

    pub fn oxygen() -> Self {
        Self::from_fractions(1.0, 0.0)
    }

    pub fn nitrox(o2: f64) -> Result<Self> {
        Self::new(o2, 0.0)
    }

    pub fn trimix(o2: f64, he: f64) -> Result<Self> {
        Self::new(o2, he)
    }

    pub fn fraction_o2(&self) -> f64 {
        self.o2
    }

    pub fn fraction_he(&self) -> f64 {
        self.he
    }

    pub fn fraction_n2(&self) -> f64 {
        self.n2
    }

    fn percent_o2(&self) -> i64 {
        (self.o2 * 100.0).round_ties_even() as i64
    }

    fn percent_he(&self) -> i64 {
        (self.he * 100.0).round_ties_even() as i64
    }

    pub fn category(&self) -> GasCategory {
        let percent_o2 = self.percent_o2();
        if percent_o2 < HYPOXIC_O2_PERCENT {
            GasCategory::Hypoxic
        } else if percent_o2 > SIMPLE_O2_PERCENT_IN_AIR {
            GasCategory::Hyperoxic
        } else {
            GasCategory::Normoxic
        }
    }

    /// Display name derived from the rounded percentages, e.g. "EAN32" or "Trimix 18/45".
    ///
    /// Empty when the mix rounds to 0 % oxygen.
    pub fn name(&self) -> String {
        let percent_o2 = self.percent_o2();
        let percent_he = self.percent_he();

        if percent_o2 <= 0 {
            return String::new();
        }

        if percent_he <= 0 {
            if percent_o2 >= 100 {
                return OXYGEN_NAME.to_string();
            }
            if percent_o2 == SIMPLE_O2_PERCENT_IN_AIR {
                return AIR_NAME.to_string();
            }
            return format!("EAN{}", percent_o2);
        }

        let prefix = if percent_o2 >= SIMPLE_O2_PERCENT_IN_AIR { "Helitrox" } else { "Trimix" };
        format!("{} {}/{}", prefix, percent_o2, percent_he)
    }

    /// Maximum operating depth as absolute pressure in bar for the given ppO2 limit
    pub fn mod_bar(&self, ppo2: f64) -> Result<f64> {
        if self.o2 <= 0.0 {
            debug!(ppo2, "MOD requested for gas without oxygen");
            return Err(PhysicsError::ZeroOxygen);
        }
        Ok(ppo2 / self.o2)
    }

    /// Share of the mix that is narcotic. Helium never is; O2 counts only when
    /// `o2_is_narcotic` is set.
    pub fn narcotic_index(&self, o2_is_narcotic: bool) -> f64 {
        let o2_part = if o2_is_narcotic { self.o2 } else { 0.0 };
        o2_part + self.n2
    }

    /// Equivalent narcotic depth in bar. May fall below surface pressure for lean trimix.
    pub fn end(&self, current_depth_bar: f64, o2_is_narcotic: bool) -> f64 {
        current_depth_bar * self.narcotic_index(o2_is_narcotic)
    }

    /// Maximum narcotic depth in bar for an END given in bar (O2 counted as narcotic)
    pub fn mnd(&self, narcotic_depth_bar: f64) -> Result<f64> {
        let index = self.narcotic_index(true);
        if index <= 0.0 {
            debug!(narcotic_depth_bar, "MND requested for non-narcotic gas");
            return Err(PhysicsError::ZeroNarcoticIndex);
        }
        Ok(narcotic_depth_bar / index)
    }

    /// Equivalent air depth in bar: the pressure on air giving the same nitrogen load.
    /// Not clamped; may be below surface pressure.
    pub fn ead(&self, depth_bar: f64) -> f64 {
        self.ead_for_air(depth_bar, O2_FRACTION_IN_AIR)
    }

    /// [`Gas::ead`] against air with a different oxygen fraction
    pub fn ead_for_air(&self, depth_bar: f64, o2_in_air: f64) -> f64 {
        self.end(depth_bar, false) / (1.0 - o2_in_air)
    }

    /// Shallowest pressure in bar at which the mix still delivers the minimum ppO2.
    /// Hyperoxic mixes are clamped to `surface_pressure`.
    pub fn ceiling(&self, surface_pressure: f64) -> Result<f64> {
        if self.o2 <= 0.0 {
            debug!(surface_pressure, "ceiling requested for gas without oxygen");
            return Err(PhysicsError::ZeroOxygen);
        }

        let bars = MIN_PPO2 / self.o2 * surface_pressure;
        if bars < surface_pressure {
            return Ok(surface_pressure);
        }
        Ok(bars)
    }

    /// Oxygen partial pressure in bar at the given ambient pressure
    pub fn ppo2(&self, ambient_pressure: f64) -> f64 {
        partial_pressure(ambient_pressure, self.o2)
    }

    /// Richest O2 fraction that keeps ppO2 at `ppo2` for the given ambient pressure, capped at 1
    pub fn best_mix(ppo2: f64, ambient_pressure: f64) -> Result<f64> {
        if ambient_pressure.is_nan() || ambient_pressure <= 0.0 {
            debug!(ppo2, ambient_pressure, "best mix requested at non-positive pressure");
            return Err(PhysicsError::NonPositivePressure(ambient_pressure));
        }
        if !ppo2.is_finite() || ppo2 < 0.0 {
            debug!(ppo2, ambient_pressure, "best mix requested for invalid ppO2");
            return Err(PhysicsError::InvalidPpo2(ppo2));
        }
        Ok((ppo2 / ambient_pressure).min(1.0))
    }
}

impl Default for Gas {
    fn default() -> Self {
        Self::air()
    }
}

impl fmt::Display for Gas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Deserialize)]
struct GasFractions {
    o2: f64,
    #[serde(default)]
    he: f64,
}

impl<'de> Deserialize<'de> for Gas {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fractions = GasFractions::deserialize(deserializer)?;
        Gas::new(fractions.o2, fractions.he).map_err(serde::de::Error::custom)
    }
}

/// Partial pressure in bar of a component with `volume_fraction` at `abs_pressure` bar
pub fn partial_pressure(abs_pressure: f64, volume_fraction: f64) -> f64 {
    abs_pressure * volume_fraction
}
