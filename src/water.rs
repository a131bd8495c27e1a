use crate::constants::{DENSITY_BRACKISH_KGM3, DENSITY_FRESH_KGM3, DENSITY_SALT_KGM3};
use serde::{Deserialize, Serialize};

/// Water body a dive takes place in; decides the density used for hydrostatic pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaterType {
    Fresh,
    Brackish,
    #[default]
    Salt,
}

impl WaterType {
    pub const ALL: [WaterType; 3] = [WaterType::Fresh, WaterType::Brackish, WaterType::Salt];

    pub fn density_kg_m3(&self) -> f64 {
        match self {
            WaterType::Fresh => DENSITY_FRESH_KGM3,
            WaterType::Brackish => DENSITY_BRACKISH_KGM3,
            WaterType::Salt => DENSITY_SALT_KGM3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WaterType::Fresh => "fresh",
            WaterType::Brackish => "brackish",
            WaterType::Salt => "salt",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "fresh" => Some(WaterType::Fresh),
            "brackish" => Some(WaterType::Brackish),
            "salt" => Some(WaterType::Salt),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_densities_increase_with_salinity() {
        assert_eq!(WaterType::Fresh.density_kg_m3(), 1000.0);
        assert_eq!(WaterType::Brackish.density_kg_m3(), 1020.0);
        assert_eq!(WaterType::Salt.density_kg_m3(), 1030.0);
    }

    #[test]
    fn test_name_roundtrip() {
        for water in WaterType::ALL {
            assert_eq!(WaterType::from_str(water.as_str()), Some(water));
        }
        assert_eq!(WaterType::from_str("lava"), None);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&WaterType::Brackish).unwrap();
        assert_eq!(json, "\"brackish\"");
        let parsed: WaterType = serde_json::from_str("\"fresh\"").unwrap();
        assert_eq!(parsed, WaterType::Fresh);
    }
}
