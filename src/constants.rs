pub const PASCALS_PER_BAR: f64 = 100_000.0;
pub const BAR_TO_ATM: f64 = 0.986923;
pub const ATM_TO_BAR: f64 = 1.01325;

// Standard atmosphere
pub const STANDARD_PRESSURE_BAR: f64 = 1.01325; // sea level
pub const STANDARD_PRESSURE_PASCALS: f64 = STANDARD_PRESSURE_BAR * PASCALS_PER_BAR;
pub const STANDARD_GRAVITY: f64 = 9.80665; // m/s²
pub const SIMPLE_GRAVITY: f64 = 10.0; // training calibration
pub const SIMPLE_SURFACE_PRESSURE_BAR: f64 = 1.0;

// Barometric formula
pub const GAS_CONSTANT: f64 = 8.31432; // J/(mol·K) for air
pub const STANDARD_TEMPERATURE_K: f64 = 288.15; // 15 °C
pub const LAPSE_RATE_K_PER_M: f64 = -0.0065;
pub const MOLAR_MASS_AIR: f64 = 0.0289644; // kg/mol
pub const BAROMETRIC_EXPONENT: f64 =
    (STANDARD_GRAVITY * MOLAR_MASS_AIR) / (GAS_CONSTANT * LAPSE_RATE_K_PER_M);

// Water densities at 0 °C
pub const DENSITY_FRESH_KGM3: f64 = 1000.0;
pub const DENSITY_BRACKISH_KGM3: f64 = 1020.0; // EN13319
pub const DENSITY_SALT_KGM3: f64 = 1030.0;

// Breathing gas
pub const O2_FRACTION_IN_AIR: f64 = 0.209;
pub const N2_FRACTION_IN_AIR: f64 = 1.0 - O2_FRACTION_IN_AIR;
pub const MIN_PPO2: f64 = 0.18; // lowest breathable ppO2
pub const MAX_WORKING_PPO2: f64 = 1.4;
pub const MAX_DECO_PPO2: f64 = 1.6;
pub const MAX_END_M: f64 = 30.0;
pub const FRACTION_TOLERANCE: f64 = 1e-9;

// Percent O2 thresholds used for naming and classification
pub const SIMPLE_O2_PERCENT_IN_AIR: i64 = 21;
pub const HYPOXIC_O2_PERCENT: i64 = 18;

/// Alveolar water vapour pressure at 37 °C, bar.
pub const WATER_VAPOUR_PRESSURE_BAR: f64 = 0.0627;

pub const COMPARTMENT_COUNT: usize = 16;
