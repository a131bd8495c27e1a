// Worked dive-planning scenarios on salt water at sea level
// Each test follows a diver's question from depth to gas choice to tissue state

use approx::assert_abs_diff_eq;
use scuba_calc_rust::assert_deviation;
use scuba_calc_rust::math_utils::round_floor;
use scuba_calc_rust::{
    DepthConverter, EnvironmentConfig, Gas, NitroxCalculator, PhysicsError, StandardGases, Tissues,
};

#[test]
fn test_salt_water_surface_and_ten_meters() {
    println!("🌊 Salt water at sea level");

    let converter = DepthConverter::for_salt_water(0.0).unwrap();
    println!("   Surface pressure: {:.5} bar", converter.surface_pressure());
    assert_abs_diff_eq!(converter.surface_pressure(), 1.01325, epsilon = 1e-9);

    let ten_m = converter.to_bar(10.0);
    println!("   Pressure at 10 m: {:.5} bar", ten_m);
    assert_abs_diff_eq!(ten_m, 2.02, epsilon = 0.01);
    assert_abs_diff_eq!(ten_m - converter.surface_pressure(), 1.010085, epsilon = 1e-6);
}

#[test]
fn test_ean32_mod_at_1_4() {
    println!("🫧 EAN32 maximum operating depth at ppO2 1.4");

    let converter = DepthConverter::for_salt_water(0.0).unwrap();
    let ean32 = Gas::nitrox(0.32).unwrap();

    let mod_bar = ean32.mod_bar(1.4).unwrap();
    assert_abs_diff_eq!(mod_bar, 4.375, epsilon = 1e-12);

    let mod_m = converter.from_bar(mod_bar).unwrap();
    println!("   MOD: {:.3} bar -> {:.2} m (reported {:.2} m)", mod_bar, mod_m, round_floor(mod_m));
    assert_deviation!(mod_m, 33.4, 1.0);
    assert!(round_floor(mod_m) <= mod_m);
}

#[test]
fn test_air_ead_at_four_bar() {
    let air = Gas::new(0.21, 0.0).unwrap();
    let ead = air.ead(4.0);
    println!("   EAD of 21% at 4 bar: {:.4} bar", ead);
    assert_abs_diff_eq!(ead, 3.995, epsilon = 1e-3);
}

#[test]
fn test_hypoxic_trimix_ceiling() {
    let tx1260 = StandardGases::by_name("Trimix 12/60").unwrap();
    assert_abs_diff_eq!(tx1260.ceiling(1.0).unwrap(), 1.5, epsilon = 1e-12);

    let calculator = NitroxCalculator::default();
    let ceiling_m = calculator.ceiling(&tx1260).unwrap();
    println!("   Trimix 12/60 ceiling: {:.2} m", ceiling_m);
    assert!(ceiling_m > 4.0 && ceiling_m < 6.0);
}

#[test]
fn test_pressure_below_surface_has_no_depth() {
    let converter = DepthConverter::for_salt_water(0.0).unwrap();
    match converter.from_bar(0.5) {
        Err(PhysicsError::BelowSurfacePressure { pressure, surface }) => {
            assert_eq!(pressure, 0.5);
            assert_abs_diff_eq!(surface, 1.01325, epsilon = 1e-9);
        }
        other => panic!("expected BelowSurfacePressure, got {:?}", other),
    }
}

#[test]
fn test_plan_from_config() {
    println!("📋 Planning a 30 m dive from a JSON site description");

    let config = EnvironmentConfig::from_json_str(r#"{"water": "salt", "max_ppo2": 1.4}"#).unwrap();
    let calculator = config.nitrox_calculator().unwrap();

    let best = calculator.best_mix(config.max_ppo2, 30.0).unwrap();
    let blend = round_floor(best);
    println!("   Best mix for 30 m: {:.4} -> blend {:.2}", best, blend);
    assert!(blend <= best);

    let gas = Gas::nitrox(blend).unwrap();
    let mod_m = calculator.mod_depth(&gas, config.max_ppo2).unwrap();
    println!("   {} MOD: {:.2} m", gas, mod_m);
    assert!(mod_m >= 30.0);

    let ead = calculator.ead(&gas, 30.0).unwrap();
    println!("   {} EAD at 30 m: {:.2} m", gas, ead);
    assert!(ead < 30.0);
}

#[test]
fn test_tissues_after_saturation_on_deep_trimix() {
    println!("🧪 Saturating every compartment on Trimix 18/45 at 60 m");

    let converter = DepthConverter::for_salt_water(0.0).unwrap();
    let mut tissues = Tissues::new(converter.surface_pressure()).unwrap();

    let ambient = converter.to_bar(60.0);
    let gas = StandardGases::by_name("Trimix 18/45").unwrap();
    let lungs = ambient - 0.0627;
    let p_n2 = lungs * gas.fraction_n2();
    let p_he = lungs * gas.fraction_he();

    for i in 0..tissues.len() {
        tissues.get_mut(i).unwrap().set_partial_pressures(p_n2, p_he).unwrap();
    }

    // Saturated at depth: below ambient there, no gradient
    for tissue in &tissues {
        assert_eq!(tissue.gradient_factor(ambient), 0.0);
        assert!(tissue.saturation_ratio(ambient) < 0.0);
    }

    // Direct ascent: every compartment is past its M-value, and the slowest
    // one has the smallest M-value margin at the surface
    let surface = converter.surface_pressure();
    let (leading, gf) = tissues.leading_compartment(surface);
    println!("   Leading compartment at the surface: {} (GF {:.2})", leading + 1, gf);
    assert!(tissues.iter().all(|t| t.gradient_factor(surface) > 1.0));
    assert_eq!(leading, 15);
}
