//! 요율 테이블 조회 테스트. 계열 불일치와 데이터 없음을 구분해 보고하는지 확인한다.
use envtest_cost_toolbox::plan::{Equipment, MethodId};
use envtest_cost_toolbox::rate_db::{
    equipment_hourly_cost_eur, LocationRate, PowerEntry, RateError, RateTable,
};

#[test]
fn shock_method_on_shock_chamber_resolves() {
    let rates = RateTable::builtin();
    let kw = rates
        .power_kw(MethodId::ThermalShockNa, Equipment::ThermalShockChamber)
        .expect("Na power");
    assert_eq!(kw, 12.0);
}

#[test]
fn shock_method_on_combined_rig_is_mismatch() {
    // Na는 2조식 전용 챔버에서만 가능하다. 복합 시험기에는 데이터가 없는 게 아니라
    // 계열 자체가 맞지 않는다.
    let rates = RateTable::builtin();
    let err = rates
        .power_kw(MethodId::ThermalShockNa, Equipment::CombinedVibrationThermal)
        .expect_err("mismatch");
    assert!(matches!(
        err,
        RateError::MethodEquipmentMismatch {
            method: MethodId::ThermalShockNa,
            equipment: Equipment::CombinedVibrationThermal,
        }
    ));
}

#[test]
fn vibration_method_on_thermal_chamber_is_mismatch() {
    let rates = RateTable::builtin();
    let err = rates
        .power_kw(MethodId::VibrationSinusoidalFc, Equipment::ThermalChamber)
        .expect_err("mismatch");
    assert!(matches!(err, RateError::MethodEquipmentMismatch { .. }));
}

#[test]
fn compatible_combo_missing_from_table_is_no_data() {
    // 계열은 맞지만 주입된 테이블에 항목이 없는 경우
    let partial = RateTable::new(
        vec![PowerEntry {
            method: MethodId::ColdA,
            equipment: Equipment::ThermalChamber,
            power_kw: 5.5,
        }],
        vec![LocationRate {
            name: "Tunisia".to_string(),
            electricity_eur_per_kwh: 0.135,
            emission_kg_co2_per_kwh: 0.58,
        }],
    );
    let err = partial
        .power_kw(MethodId::DryHeatB, Equipment::ThermalChamber)
        .expect_err("no data");
    assert!(matches!(
        err,
        RateError::NoData {
            method: MethodId::DryHeatB,
            equipment: Equipment::ThermalChamber,
        }
    ));
}

#[test]
fn builtin_covers_every_thermal_method_on_both_rigs() {
    let rates = RateTable::builtin();
    let thermal = [
        MethodId::ColdA,
        MethodId::DryHeatB,
        MethodId::TemperatureChangeNb,
        MethodId::DampHeatCyclicDb,
        MethodId::TempHumidityCyclicZad,
        MethodId::DampHeatSteadyCab,
    ];
    for method in thermal {
        let chamber = rates
            .power_kw(method, Equipment::ThermalChamber)
            .expect("chamber entry");
        let combined = rates
            .power_kw(method, Equipment::CombinedVibrationThermal)
            .expect("combined entry");
        // 복합 시험기는 대기 부하만큼 약간 높다
        assert!(
            combined > chamber,
            "{}: combined {combined} <= chamber {chamber}",
            method.code()
        );
    }
}

#[test]
fn location_lookup_ignores_case() {
    let rates = RateTable::builtin();
    let lower = rates.location("tunisia").expect("lower case");
    let upper = rates.location("TUNISIA").expect("upper case");
    assert_eq!(lower.electricity_eur_per_kwh, 0.135);
    assert_eq!(upper.emission_kg_co2_per_kwh, 0.58);
}

#[test]
fn unknown_location_reports_name() {
    let rates = RateTable::builtin();
    let err = rates.location("Atlantis").expect_err("unknown");
    assert!(matches!(err, RateError::UnknownLocation { name } if name == "Atlantis"));
}

#[test]
fn hourly_cost_per_rig() {
    assert_eq!(equipment_hourly_cost_eur(Equipment::ThermalChamber), 5.0);
    assert_eq!(equipment_hourly_cost_eur(Equipment::ThermalShockChamber), 7.5);
    assert_eq!(equipment_hourly_cost_eur(Equipment::VibratingPot), 100.0);
    assert_eq!(
        equipment_hourly_cost_eur(Equipment::CombinedVibrationThermal),
        105.0
    );
}
