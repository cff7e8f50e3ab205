//! 비용 계산 엔진 회귀 테스트. 내역 항목 간 합산 관계와 기준 시나리오 값을 검증한다.
use envtest_cost_toolbox::cost::{calculate_costs, CostInput, FixedCosts};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn base_input() -> CostInput {
    CostInput {
        duration_hours: 2.0,
        total_power_kw: 5.0,
        electricity_eur_per_kwh: 0.135,
        emission_kg_co2_per_kwh: 0.58,
        fixed: FixedCosts {
            rh_eur: 210.0,
            transport_eur: 150.0,
            equipment_hourly_eur: 5.0,
            maintenance_tasks_total_eur: None,
        },
        age_factor: 1.0,
    }
}

#[test]
fn reference_scenario_without_ageing() {
    // 2h x 5kW = 10 kWh; 10 x 0.135 = 1.35 EUR; 고정비 210 + 150 + 2x5 = 370
    let b = calculate_costs(&base_input());
    assert_close("energy", b.energy_consumption_kwh, 10.0, 1e-12);
    assert_close("energy_cost", b.energy_cost_eur, 1.35, 1e-12);
    assert_close("fixed", b.total_fixed_costs_eur, 370.0, 1e-12);
    assert_close("additional", b.additional_cost_eur, 0.0, 1e-12);
    assert_close("total", b.total_cost_eur, 371.35, 1e-12);
    assert_close("co2", b.carbon_footprint_kg_co2, 5.8, 1e-12);
}

#[test]
fn total_is_sum_of_parts() {
    let mut input = base_input();
    input.age_factor = 1.3;
    input.fixed.maintenance_tasks_total_eur = Some(306.0);
    let b = calculate_costs(&input);
    assert_close(
        "total identity",
        b.total_cost_eur,
        b.energy_cost_eur + b.total_fixed_costs_eur + b.additional_cost_eur,
        1e-12,
    );
}

#[test]
fn age_factor_one_adds_nothing() {
    let b = calculate_costs(&base_input());
    assert_eq!(b.additional_cost_eur, 0.0);
}

#[test]
fn ageing_surcharge_applies_to_variable_costs_only() {
    // 변동비 = 에너지 1.35 + 장비 가동 10 = 11.35; 할증 = 11.35 x 0.5
    let mut input = base_input();
    input.age_factor = 1.5;
    let b = calculate_costs(&input);
    assert_close("additional", b.additional_cost_eur, 5.675, 1e-12);
    assert_close("total", b.total_cost_eur, 377.025, 1e-12);
    // 고정비는 노화와 무관하다
    assert_close("fixed", b.total_fixed_costs_eur, 370.0, 1e-12);
}

#[test]
fn maintenance_total_joins_fixed_costs() {
    let mut input = base_input();
    input.fixed.maintenance_tasks_total_eur = Some(306.0);
    let b = calculate_costs(&input);
    assert_close("fixed", b.total_fixed_costs_eur, 676.0, 1e-12);
    assert_close("total", b.total_cost_eur, 677.35, 1e-12);
}

#[test]
fn same_input_same_output() {
    let input = base_input();
    assert_eq!(calculate_costs(&input), calculate_costs(&input));
}

#[test]
fn zero_power_still_accrues_fixed_and_hourly_costs() {
    // 소비 전력 0이어도 장비 가동/인건비/운송비는 남는다
    let mut input = base_input();
    input.total_power_kw = 0.0;
    let b = calculate_costs(&input);
    assert_eq!(b.energy_consumption_kwh, 0.0);
    assert_eq!(b.energy_cost_eur, 0.0);
    assert_eq!(b.carbon_footprint_kg_co2, 0.0);
    assert_close("fixed", b.total_fixed_costs_eur, 370.0, 1e-12);
    assert_close("total", b.total_cost_eur, 370.0, 1e-12);
}
