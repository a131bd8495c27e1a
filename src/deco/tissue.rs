use crate::constants::{COMPARTMENT_COUNT, N2_FRACTION_IN_AIR, WATER_VAPOUR_PRESSURE_BAR};
use crate::deco::compartment::{Compartment, ZHL16C_COMPARTMENTS};
use crate::error::{PhysicsError, Result};
use crate::gas::partial_pressure;
use serde::Serialize;
use std::ops::Index;
use tracing::debug;

/// Inert gas state of one compartment.
///
/// `a` and `b` are the Bühlmann coefficients blended by the current N2/He
/// pressures; they are recomputed every time the pressures change, so the
/// pressures can only be set through [`Tissue::set_partial_pressures`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tissue {
    compartment: Compartment,
    p_n2: f64,
    p_he: f64,
    a: f64,
    b: f64,
}

fn validate_partial_pressures(p_n2: f64, p_he: f64) -> Result<()> {
    let valid = |p: f64| p.is_finite() && p >= 0.0;
    if !valid(p_n2) || !valid(p_he) || p_n2 + p_he <= 0.0 {
        debug!(p_n2, p_he, "rejected tissue partial pressures");
        return Err(PhysicsError::InvalidPartialPressure { p_n2, p_he });
    }
    Ok(())
}

impl Tissue {
    /// A compartment saturated with air at `surface_pressure` bar: N2 at the
    /// inspired pressure, no helium.
    pub fn new(compartment: Compartment, surface_pressure: f64) -> Result<Self> {
        let p_n2 = Self::inspired_n2_pressure(surface_pressure);
        validate_partial_pressures(p_n2, 0.0)?;
        Ok(Self::saturated(compartment, p_n2, 0.0))
    }

    fn saturated(compartment: Compartment, p_n2: f64, p_he: f64) -> Self {
        let mut tissue = Self { compartment, p_n2, p_he, a: 0.0, b: 0.0 };
        tissue.update_coefficients();
        tissue
    }

    /// Pressure of the inhaled gas once humidified in the lungs
    pub fn pressure_in_lungs(ambient_pressure: f64) -> f64 {
        ambient_pressure - WATER_VAPOUR_PRESSURE_BAR
    }

    /// N2 partial pressure reaching the alveoli when breathing air at `ambient_pressure`
    pub fn inspired_n2_pressure(ambient_pressure: f64) -> f64 {
        partial_pressure(Self::pressure_in_lungs(ambient_pressure), N2_FRACTION_IN_AIR)
    }

    /// Re-saturate the tissue. Rejects negative pressures and an empty tissue
    /// (both zero), for which `a`/`b` have no value.
    pub fn set_partial_pressures(&mut self, p_n2: f64, p_he: f64) -> Result<()> {
        validate_partial_pressures(p_n2, p_he)?;
        self.p_n2 = p_n2;
        self.p_he = p_he;
        self.update_coefficients();
        Ok(())
    }

    fn update_coefficients(&mut self) {
        let c = &self.compartment;
        let p_total = self.p_total();
        self.a = (c.n2_a * self.p_n2 + c.he_a * self.p_he) / p_total;
        self.b = (c.n2_b * self.p_n2 + c.he_b * self.p_he) / p_total;
    }

    pub fn compartment(&self) -> &Compartment {
        &self.compartment
    }

    pub fn p_n2(&self) -> f64 {
        self.p_n2
    }

    pub fn p_he(&self) -> f64 {
        self.p_he
    }

    pub fn p_total(&self) -> f64 {
        self.p_n2 + self.p_he
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    /// Maximum tolerated inert gas pressure at `ambient_pressure` bar
    pub fn m_value(&self, ambient_pressure: f64) -> f64 {
        self.a + ambient_pressure / self.b
    }

    /// How far the loading sits between ambient pressure (0) and the M-value (1).
    /// Never negative.
    pub fn gradient_factor(&self, ambient_pressure: f64) -> f64 {
        let m_value = self.m_value(ambient_pressure);
        let result = (self.p_total() - ambient_pressure) / (m_value - ambient_pressure);
        result.max(0.0)
    }

    /// Negative while the tissue is below ambient pressure (`p_total / ambient - 1`),
    /// otherwise the gradient factor.
    pub fn saturation_ratio(&self, ambient_pressure: f64) -> f64 {
        let p_total = self.p_total();
        if p_total < ambient_pressure {
            return p_total / ambient_pressure - 1.0;
        }
        self.gradient_factor(ambient_pressure)
    }
}

/// The 16 ZH-L16C tissues of one diver, index-aligned with [`ZHL16C_COMPARTMENTS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tissues {
    tissues: [Tissue; COMPARTMENT_COUNT],
}

impl Tissues {
    /// All compartments saturated with air at `surface_pressure` bar
    pub fn new(surface_pressure: f64) -> Result<Self> {
        let p_n2 = Tissue::inspired_n2_pressure(surface_pressure);
        validate_partial_pressures(p_n2, 0.0)?;
        let tissues = std::array::from_fn(|i| Tissue::saturated(ZHL16C_COMPARTMENTS[i], p_n2, 0.0));
        Ok(Self { tissues })
    }

    pub const fn len(&self) -> usize {
        COMPARTMENT_COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<&Tissue> {
        self.tissues.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tissue> {
        self.tissues.get_mut(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tissue> {
        self.tissues.iter()
    }

    /// Index and gradient factor of the most loaded compartment at `ambient_pressure`.
    /// Ties go to the faster compartment.
    pub fn leading_compartment(&self, ambient_pressure: f64) -> (usize, f64) {
        let mut leading = 0;
        let mut max_gf = self.tissues[0].gradient_factor(ambient_pressure);
        for (i, tissue) in self.tissues.iter().enumerate().skip(1) {
            let gf = tissue.gradient_factor(ambient_pressure);
            if gf > max_gf {
                max_gf = gf;
                leading = i;
            }
        }
        (leading, max_gf)
    }
}

impl Index<usize> for Tissues {
    type Output = Tissue;

    fn index(&self, index: usize) -> &Tissue {
        &self.tissues[index]
    }
}

impl<'a> IntoIterator for &'a Tissues {
    type Item = &'a Tissue;
    type IntoIter = std::slice::Iter<'a, Tissue>;

    fn into_iter(self) -> Self::IntoIter {
        self.tissues.iter()
    }
}
