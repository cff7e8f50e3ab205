//! 견적 파이프라인 통합 테스트. 구성 검증부터 내역 계산까지 한 흐름으로 확인한다.
use envtest_cost_toolbox::cost::{estimate_test_cost, EstimateError, Pricing};
use envtest_cost_toolbox::plan::{
    Equipment, TestPlan, ThermalMethod, ThermalShockMethod, VibrationMethod,
};
use envtest_cost_toolbox::rate_db::{RateError, RateTable};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn tunisia_pricing(age_factor: f64) -> Pricing {
    Pricing {
        location: "Tunisia".to_string(),
        rh_eur: 210.0,
        transport_eur: 150.0,
        age_factor,
        maintenance_tasks_total_eur: None,
    }
}

#[test]
fn cold_test_on_thermal_chamber() {
    // A: 5.5kW x 16h = 88 kWh; 88 x 0.135 = 11.88; 고정비 210+150+16x5 = 440
    let plan = TestPlan::Thermal {
        method: ThermalMethod::ColdA {
            low_temp_c: -40.0,
            duration_hours: 16.0,
        },
        equipment: Equipment::ThermalChamber,
    };
    let est = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect("estimate");
    assert_eq!(est.duration_hours, 16.0);
    assert_eq!(est.total_power_kw, 5.5);
    assert_close("energy", est.breakdown.energy_consumption_kwh, 88.0, 1e-9);
    assert_close("energy_cost", est.breakdown.energy_cost_eur, 11.88, 1e-9);
    assert_close("fixed", est.breakdown.total_fixed_costs_eur, 440.0, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 451.88, 1e-9);
    assert_close("co2", est.breakdown.carbon_footprint_kg_co2, 51.04, 1e-9);
}

#[test]
fn thermal_shock_uses_dedicated_chamber_rates() {
    // Na: 12kW x 4h = 48 kWh; 장비 단가 7.5 EUR/h
    let plan = TestPlan::ThermalShock {
        method: ThermalShockMethod::ShockNa {
            low_temp_c: -40.0,
            high_temp_c: 125.0,
            duration_hours: 4.0,
        },
        equipment: Equipment::ThermalShockChamber,
    };
    let est = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect("estimate");
    assert_eq!(est.total_power_kw, 12.0);
    assert_close("energy_cost", est.breakdown.energy_cost_eur, 6.48, 1e-9);
    assert_close("fixed", est.breakdown.total_fixed_costs_eur, 390.0, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 396.48, 1e-9);
}

#[test]
fn combined_sums_power_and_takes_longer_duration() {
    // B(복합기) 6.3kW + Fc(복합기) 13.5kW = 19.8kW; 기간 max(5, 12) = 12h
    let plan = TestPlan::Combined {
        thermal: ThermalMethod::DryHeatB {
            high_temp_c: 85.0,
            duration_hours: 5.0,
        },
        vibration: VibrationMethod::SinusoidalFc {
            duration_hours: 12.0,
        },
    };
    let est = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect("estimate");
    assert_eq!(est.duration_hours, 12.0);
    assert_close("power", est.total_power_kw, 19.8, 1e-9);
    assert_close("energy", est.breakdown.energy_consumption_kwh, 237.6, 1e-9);
    assert_close("energy_cost", est.breakdown.energy_cost_eur, 32.076, 1e-9);
    // 복합 시험기 단가 105 EUR/h: 210 + 150 + 12x105 = 1620
    assert_close("fixed", est.breakdown.total_fixed_costs_eur, 1620.0, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 1652.076, 1e-9);
    assert_close("co2", est.breakdown.carbon_footprint_kg_co2, 137.808, 1e-9);
}

#[test]
fn cyclic_method_duration_flows_into_costs() {
    // Db 2주기 = 48h; 6.5kW x 48h = 312 kWh
    let plan = TestPlan::Thermal {
        method: ThermalMethod::DampHeatCyclicDb {
            high_temp_c: 55.0,
            variant: 2,
            duration_cycles: 2,
        },
        equipment: Equipment::ThermalChamber,
    };
    let est = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect("estimate");
    assert_eq!(est.duration_hours, 48.0);
    assert_close("energy", est.breakdown.energy_consumption_kwh, 312.0, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 642.12, 1e-9);
}

#[test]
fn ageing_increases_total() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: 5.0,
    };
    let est = estimate_test_cost(&plan, &tunisia_pricing(1.5), &RateTable::builtin())
        .expect("estimate");
    assert_close("additional", est.breakdown.additional_cost_eur, 5.675, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 377.025, 1e-9);
}

#[test]
fn maintenance_total_included_when_present() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: 5.0,
    };
    let mut pricing = tunisia_pricing(1.0);
    pricing.maintenance_tasks_total_eur = Some(306.0);
    let est = estimate_test_cost(&plan, &pricing, &RateTable::builtin()).expect("estimate");
    assert_close("fixed", est.breakdown.total_fixed_costs_eur, 676.0, 1e-9);
    assert_close("total", est.breakdown.total_cost_eur, 677.35, 1e-9);
}

#[test]
fn location_changes_energy_price_and_emissions() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: 5.0,
    };
    let mut pricing = tunisia_pricing(1.0);
    pricing.location = "France".to_string();
    let est = estimate_test_cost(&plan, &pricing, &RateTable::builtin()).expect("estimate");
    assert_close("energy_cost", est.breakdown.energy_cost_eur, 2.2, 1e-9);
    assert_close("co2", est.breakdown.carbon_footprint_kg_co2, 0.5, 1e-9);
}

#[test]
fn age_factor_below_one_rejected() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: 5.0,
    };
    let err = estimate_test_cost(&plan, &tunisia_pricing(0.5), &RateTable::builtin())
        .expect_err("age 0.5");
    assert!(matches!(err, EstimateError::BadAgeFactor { value } if value == 0.5));
}

#[test]
fn shock_method_on_combined_rig_fails_at_rate_lookup() {
    // 장비 계열 검증은 통과하지만 전력 테이블이 조합을 거부한다
    let plan = TestPlan::ThermalShock {
        method: ThermalShockMethod::ShockNa {
            low_temp_c: -40.0,
            high_temp_c: 125.0,
            duration_hours: 4.0,
        },
        equipment: Equipment::CombinedVibrationThermal,
    };
    let err = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect_err("Na on combined");
    assert!(matches!(
        err,
        EstimateError::Rate(RateError::MethodEquipmentMismatch { .. })
    ));
}

#[test]
fn unknown_location_surfaces_as_rate_error() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: 5.0,
    };
    let mut pricing = tunisia_pricing(1.0);
    pricing.location = "Atlantis".to_string();
    let err =
        estimate_test_cost(&plan, &pricing, &RateTable::builtin()).expect_err("unknown location");
    assert!(matches!(
        err,
        EstimateError::Rate(RateError::UnknownLocation { .. })
    ));
}

#[test]
fn zero_duration_surfaces_as_duration_error() {
    let plan = TestPlan::CustomSingle {
        equipment: Equipment::VibratingPot,
        duration_hours: 0.0,
        power_kw: 8.0,
    };
    let err = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect_err("zero duration");
    assert!(matches!(err, EstimateError::Duration(_)));
}

#[test]
fn invalid_method_surfaces_as_validation_error() {
    let plan = TestPlan::Thermal {
        method: ThermalMethod::DampHeatCyclicDb {
            high_temp_c: 70.0,
            variant: 1,
            duration_cycles: 2,
        },
        equipment: Equipment::ThermalChamber,
    };
    let err = estimate_test_cost(&plan, &tunisia_pricing(1.0), &RateTable::builtin())
        .expect_err("bad severity");
    assert!(matches!(err, EstimateError::Validation(_)));
}
