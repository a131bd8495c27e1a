use crate::constants::COMPARTMENT_COUNT;
use serde::Serialize;

/// One Bühlmann tissue compartment: half-times in minutes and the
/// M-value coefficients for nitrogen and helium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Compartment {
    pub n2_half_time: f64,
    pub n2_a: f64,
    pub n2_b: f64,
    pub he_half_time: f64,
    pub he_a: f64,
    pub he_b: f64,
}

const fn compartment(
    n2_half_time: f64,
    n2_a: f64,
    n2_b: f64,
    he_half_time: f64,
    he_a: f64,
    he_b: f64,
) -> Compartment {
    Compartment { n2_half_time, n2_a, n2_b, he_half_time, he_a, he_b }
}

/// ZH-L16C coefficients, fastest compartment first.
///
/// Compartment 1b replaces 1 (same as Subsurface); the A (table) and
/// B variants are not provided.
pub const ZHL16C_COMPARTMENTS: [Compartment; COMPARTMENT_COUNT] = [
    compartment(5.0, 1.1696, 0.5578, 1.88, 1.6189, 0.4770),
    compartment(8.0, 1.0000, 0.6514, 3.02, 1.3830, 0.5747),
    compartment(12.5, 0.8618, 0.7222, 4.72, 1.1919, 0.6527),
    compartment(18.5, 0.7562, 0.7826, 6.99, 1.0458, 0.7223),
    compartment(27.0, 0.6200, 0.8125, 10.21, 0.9220, 0.7582),
    compartment(38.3, 0.5043, 0.8434, 14.48, 0.8205, 0.7957),
    compartment(54.3, 0.4410, 0.8693, 20.53, 0.7305, 0.8279),
    compartment(77.0, 0.4000, 0.8910, 29.11, 0.6502, 0.8553),
    compartment(109.0, 0.3750, 0.9092, 41.20, 0.5950, 0.8757),
    compartment(146.0, 0.3500, 0.9222, 55.19, 0.5545, 0.8903),
    compartment(187.0, 0.3295, 0.9319, 70.69, 0.5333, 0.8997),
    compartment(239.0, 0.3065, 0.9403, 90.34, 0.5189, 0.9073),
    compartment(305.0, 0.2835, 0.9477, 115.29, 0.5181, 0.9122),
    compartment(390.0, 0.2610, 0.9544, 147.42, 0.5176, 0.9171),
    compartment(498.0, 0.2480, 0.9602, 188.24, 0.5172, 0.9217),
    compartment(635.0, 0.2327, 0.9653, 240.03, 0.5119, 0.9267),
];

pub fn compartment_at(index: usize) -> Option<&'static Compartment> {
    ZHL16C_COMPARTMENTS.get(index)
}
