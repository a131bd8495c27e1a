pub type Result<T> = std::result::Result<T, PhysicsError>;

/// Errors raised by the gas and pressure calculations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    #[error("invalid gas composition: O2 {o2}, He {he} (fractions must be in 0-1 and sum to at most 1)")]
    InvalidComposition { o2: f64, he: f64 },

    #[error("pressure {pressure} bar is below surface pressure {surface} bar and has no depth")]
    BelowSurfacePressure { pressure: f64, surface: f64 },

    #[error("gas contains no oxygen")]
    ZeroOxygen,

    #[error("gas has no narcotic component")]
    ZeroNarcoticIndex,

    #[error("ambient pressure must be positive, got {0} bar")]
    NonPositivePressure(f64),

    #[error("no positive surface pressure at altitude {altitude} m (got {surface_pressure} bar)")]
    InvalidAltitude { altitude: f64, surface_pressure: f64 },

    #[error("ppO2 must be finite and not negative, got {0} bar")]
    InvalidPpo2(f64),

    #[error("water density must be positive, got {0} kg/m³")]
    InvalidDensity(f64),

    #[error("invalid tissue partial pressures: N2 {p_n2} bar, He {p_he} bar")]
    InvalidPartialPressure { p_n2: f64, p_he: f64 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        PhysicsError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_values() {
        let err = PhysicsError::BelowSurfacePressure { pressure: 0.5, surface: 1.01325 };
        let message = err.to_string();
        assert!(message.contains("0.5"));
        assert!(message.contains("1.01325"));
    }

    #[test]
    fn test_json_errors_become_config_errors() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{ nope").unwrap_err();
        match PhysicsError::from(parse_err) {
            PhysicsError::Config(msg) => assert!(!msg.is_empty()),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
