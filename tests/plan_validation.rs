//! 시험 구성 검증 테스트. 방법별 파라미터 범위와 장비 호환성을 확인한다.
use envtest_cost_toolbox::plan::{
    Equipment, TestPlan, ThermalMethod, ThermalShockMethod, ValidationError, VibrationMethod,
};

fn thermal_on_chamber(method: ThermalMethod) -> TestPlan {
    TestPlan::Thermal {
        method,
        equipment: Equipment::ThermalChamber,
    }
}

#[test]
fn damp_heat_cyclic_severity_must_be_catalogued() {
    // Db 상한 온도는 40 또는 55만 허용
    let err = thermal_on_chamber(ThermalMethod::DampHeatCyclicDb {
        high_temp_c: 60.0,
        variant: 1,
        duration_cycles: 2,
    })
    .validate()
    .expect_err("60C");
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: "high_temp_c", .. }
    ));
}

#[test]
fn damp_heat_cyclic_variant_must_be_one_or_two() {
    let err = thermal_on_chamber(ThermalMethod::DampHeatCyclicDb {
        high_temp_c: 55.0,
        variant: 3,
        duration_cycles: 2,
    })
    .validate()
    .expect_err("variant 3");
    assert!(matches!(err, ValidationError::OutOfRange { field: "variant", .. }));
}

#[test]
fn cyclic_methods_need_at_least_one_cycle() {
    let err = thermal_on_chamber(ThermalMethod::TempHumidityCyclicZad { duration_cycles: 0 })
        .validate()
        .expect_err("0 cycles");
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: "duration_cycles", .. }
    ));
}

#[test]
fn temperature_change_rate_must_be_positive() {
    let err = thermal_on_chamber(ThermalMethod::TemperatureChangeNb {
        low_temp_c: -40.0,
        high_temp_c: 85.0,
        rate_c_per_min: 0.0,
        duration_hours: 6.0,
    })
    .validate()
    .expect_err("rate 0");
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: "rate_c_per_min", .. }
    ));
}

#[test]
fn low_temperature_must_stay_below_high() {
    let err = TestPlan::ThermalShock {
        method: ThermalShockMethod::ShockNa {
            low_temp_c: 125.0,
            high_temp_c: -40.0,
            duration_hours: 4.0,
        },
        equipment: Equipment::ThermalShockChamber,
    }
    .validate()
    .expect_err("inverted temps");
    assert!(matches!(err, ValidationError::OutOfRange { field: "low_temp_c", .. }));
}

#[test]
fn steady_damp_heat_humidity_is_a_percentage() {
    let err = thermal_on_chamber(ThermalMethod::DampHeatSteadyCab {
        high_temp_c: 40.0,
        humidity_pct: 130.0,
        duration_hours: 96.0,
    })
    .validate()
    .expect_err("130%");
    assert!(matches!(
        err,
        ValidationError::OutOfRange { field: "humidity_pct", .. }
    ));
}

#[test]
fn non_finite_parameter_rejected() {
    let err = thermal_on_chamber(ThermalMethod::ColdA {
        low_temp_c: f64::NAN,
        duration_hours: 16.0,
    })
    .validate()
    .expect_err("nan temp");
    assert!(matches!(err, ValidationError::NotFinite { field: "low_temp_c" }));
}

#[test]
fn vibration_cannot_run_on_thermal_chamber() {
    let err = TestPlan::Vibration {
        method: VibrationMethod::SinusoidalFc { duration_hours: 8.0 },
        equipment: Equipment::ThermalChamber,
    }
    .validate()
    .expect_err("wrong rig");
    assert!(matches!(
        err,
        ValidationError::EquipmentNotAllowed {
            equipment: Equipment::ThermalChamber,
            ..
        }
    ));
}

#[test]
fn thermal_cannot_run_on_vibrating_pot() {
    let err = TestPlan::Thermal {
        method: ThermalMethod::DryHeatB {
            high_temp_c: 85.0,
            duration_hours: 16.0,
        },
        equipment: Equipment::VibratingPot,
    }
    .validate()
    .expect_err("wrong rig");
    assert!(matches!(err, ValidationError::EquipmentNotAllowed { .. }));
}

#[test]
fn vibration_on_combined_rig_is_allowed() {
    TestPlan::Vibration {
        method: VibrationMethod::BroadbandRandomFh { duration_hours: 8.0 },
        equipment: Equipment::CombinedVibrationThermal,
    }
    .validate()
    .expect("combined rig");
}

#[test]
fn custom_power_cannot_be_negative() {
    let err = TestPlan::CustomSingle {
        equipment: Equipment::ThermalChamber,
        duration_hours: 2.0,
        power_kw: -5.0,
    }
    .validate()
    .expect_err("negative power");
    assert!(matches!(err, ValidationError::OutOfRange { field: "power_kw", .. }));
}

#[test]
fn catalogued_severities_pass() {
    thermal_on_chamber(ThermalMethod::DampHeatCyclicDb {
        high_temp_c: 40.0,
        variant: 2,
        duration_cycles: 6,
    })
    .validate()
    .expect("Db 40/2");
    thermal_on_chamber(ThermalMethod::DampHeatCyclicDb {
        high_temp_c: 55.0,
        variant: 1,
        duration_cycles: 1,
    })
    .validate()
    .expect("Db 55/1");
}
