//! 시험 기간 해석 테스트. 주기 환산과 복합 시험의 동시 진행 모델을 검증한다.
use envtest_cost_toolbox::plan::{
    resolve_duration_hours, DurationError, Equipment, TestPlan, ThermalMethod, ThermalShockMethod,
    VibrationMethod, HOURS_PER_CYCLE,
};

#[test]
fn one_cycle_is_twenty_four_hours() {
    let plan = TestPlan::Thermal {
        method: ThermalMethod::DampHeatCyclicDb {
            high_temp_c: 55.0,
            variant: 1,
            duration_cycles: 1,
        },
        equipment: Equipment::ThermalChamber,
    };
    let hours = resolve_duration_hours(&plan).expect("duration");
    assert_eq!(hours, HOURS_PER_CYCLE);
}

#[test]
fn composite_cycles_scale_linearly() {
    let one = TestPlan::Thermal {
        method: ThermalMethod::TempHumidityCyclicZad { duration_cycles: 1 },
        equipment: Equipment::ThermalChamber,
    };
    assert_eq!(resolve_duration_hours(&one).expect("duration"), HOURS_PER_CYCLE);

    let three = TestPlan::Thermal {
        method: ThermalMethod::TempHumidityCyclicZad { duration_cycles: 3 },
        equipment: Equipment::ThermalChamber,
    };
    assert_eq!(resolve_duration_hours(&three).expect("duration"), 72.0);
}

#[test]
fn combined_takes_longer_part() {
    // 두 파트가 동시에 진행되므로 5h와 12h 중 12h
    let plan = TestPlan::Combined {
        thermal: ThermalMethod::DryHeatB {
            high_temp_c: 85.0,
            duration_hours: 5.0,
        },
        vibration: VibrationMethod::SinusoidalFc {
            duration_hours: 12.0,
        },
    };
    assert_eq!(resolve_duration_hours(&plan).expect("duration"), 12.0);
}

#[test]
fn custom_combined_takes_longer_part() {
    let plan = TestPlan::CustomCombined {
        thermal_duration_hours: 30.0,
        thermal_power_kw: 6.0,
        vibration_duration_hours: 8.0,
        vibration_power_kw: 10.0,
    };
    assert_eq!(resolve_duration_hours(&plan).expect("duration"), 30.0);
}

#[test]
fn zero_hours_rejected() {
    let plan = TestPlan::Thermal {
        method: ThermalMethod::ColdA {
            low_temp_c: -40.0,
            duration_hours: 0.0,
        },
        equipment: Equipment::ThermalChamber,
    };
    let err = resolve_duration_hours(&plan).expect_err("zero hours");
    assert!(matches!(err, DurationError::NotPositive { hours } if hours == 0.0));
}

#[test]
fn negative_hours_rejected() {
    let plan = TestPlan::ThermalShock {
        method: ThermalShockMethod::ShockNa {
            low_temp_c: -40.0,
            high_temp_c: 125.0,
            duration_hours: -2.0,
        },
        equipment: Equipment::ThermalShockChamber,
    };
    let err = resolve_duration_hours(&plan).expect_err("negative hours");
    assert!(matches!(err, DurationError::NotPositive { .. }));
}

#[test]
fn non_finite_hours_rejected() {
    let plan = TestPlan::Vibration {
        method: VibrationMethod::ShockEa {
            duration_hours: f64::NAN,
        },
        equipment: Equipment::VibratingPot,
    };
    let err = resolve_duration_hours(&plan).expect_err("nan hours");
    assert!(matches!(err, DurationError::NotFinite));
}

#[test]
fn combined_rejects_one_bad_part() {
    // 한 파트만 0이어도 전체가 실패해야 한다
    let plan = TestPlan::Combined {
        thermal: ThermalMethod::DryHeatB {
            high_temp_c: 85.0,
            duration_hours: 0.0,
        },
        vibration: VibrationMethod::SinusoidalFc { duration_hours: 4.0 },
    };
    assert!(resolve_duration_hours(&plan).is_err());
}
