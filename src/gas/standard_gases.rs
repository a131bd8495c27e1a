// src/gas/standard_gases.rs - Catalogue of commonly blended gases and name lookup

use crate::gas::gas_mix::{AIR_NAME, Gas, OXYGEN_NAME};
use once_cell::sync::Lazy;
use regex::Regex;

/// Number of leading catalogue entries that carry no helium.
const NITROX_COUNT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardGas {
    pub name: &'static str,
    pub gas: Gas,
}

/// Standard mixes in display order: nitrox first, then helium mixes by falling O2.
///
/// Typical usable ranges on salt water at ppO2 1.4 / 1.6 deco:
/// Oxygen 0-6 m, EAN50 0-21 m, Air 0-56 m, Trimix 10/70 8-120 m.
pub static STANDARD_GASES: Lazy<Vec<StandardGas>> = Lazy::new(|| {
    let entry = |name: &'static str, o2: f64, he: f64| StandardGas {
        name,
        gas: Gas::from_fractions(o2, he),
    };

    vec![
        entry(AIR_NAME, 0.209, 0.0),
        entry("EAN32", 0.32, 0.0),
        entry("EAN36", 0.36, 0.0),
        entry("EAN38", 0.38, 0.0),
        entry("EAN50", 0.5, 0.0),
        entry(OXYGEN_NAME, 1.0, 0.0),
        entry("Helitrox 35/25", 0.35, 0.25),
        entry("Helitrox 25/25", 0.25, 0.25),
        entry("Helitrox 21/35", 0.21, 0.35),
        entry("Trimix 18/45", 0.18, 0.45),
        entry("Trimix 15/55", 0.15, 0.55),
        entry("Trimix 12/60", 0.12, 0.6),
        entry("Trimix 10/70", 0.1, 0.7),
    ]
});

static NITROX_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:ean|nitrox\s*)(?P<o2>\d{1,3})\s*$").expect("nitrox name pattern")
});

static TRIMIX_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*(?:(?:trimix|helitrox|tx)\s*)?(?P<o2>\d{1,3})\s*/\s*(?P<he>\d{1,3})\s*$")
        .expect("trimix name pattern")
});

pub struct StandardGases;

impl StandardGases {
    /// Names of the helium-free entries
    pub fn nitrox_names() -> Vec<&'static str> {
        STANDARD_GASES.iter().take(NITROX_COUNT).map(|g| g.name).collect()
    }

    pub fn all_names() -> Vec<&'static str> {
        STANDARD_GASES.iter().map(|g| g.name).collect()
    }

    pub fn get(index: usize) -> Option<&'static StandardGas> {
        STANDARD_GASES.get(index)
    }

    /// Find a gas by name, ignoring case.
    ///
    /// Names outside the catalogue are parsed as "EANxx"/"Nitrox xx" or "xx/yy"
    /// (O2/He percent). Returns `None` for anything else, including zero fractions.
    pub fn by_name(name: &str) -> Option<Gas> {
        if let Some(found) = STANDARD_GASES.iter().find(|g| g.name.eq_ignore_ascii_case(name.trim())) {
            return Some(found.gas);
        }

        if let Some(caps) = NITROX_NAME.captures(name) {
            let o2 = parse_percent(&caps["o2"])?;
            if o2 > 0.0 {
                return Gas::nitrox(o2).ok();
            }
            return None;
        }

        if let Some(caps) = TRIMIX_NAME.captures(name) {
            let o2 = parse_percent(&caps["o2"])?;
            let he = parse_percent(&caps["he"])?;
            if o2 > 0.0 && he > 0.0 {
                return Gas::trimix(o2, he).ok();
            }
        }

        None
    }
}

fn parse_percent(digits: &str) -> Option<f64> {
    digits.parse::<u32>().ok().map(|p| p as f64 / 100.0)
}
