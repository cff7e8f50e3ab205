//! 시험 비용 계산 엔진. 부수 효과 없는 순수 계산만 담당하며,
//! 입력 검증은 호출 측(시험 구성 검증, 기간 해석)에서 끝낸 뒤 들어온다.

/// 고정비 묶음.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCosts {
    /// 인건비 [EUR]
    pub rh_eur: f64,
    /// 운송비 [EUR]
    pub transport_eur: f64,
    /// 장비 가동 단가 [EUR/h]
    pub equipment_hourly_eur: f64,
    /// 준비 작업 총액 [EUR] (있을 때만 고정비에 합산)
    pub maintenance_tasks_total_eur: Option<f64>,
}

/// 비용 계산 입력.
///
/// 전제 조건: `duration_hours > 0`, `total_power_kw >= 0`, `age_factor >= 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct CostInput {
    /// 시험 시간 [h]
    pub duration_hours: f64,
    /// 총 소비 전력 [kW]
    pub total_power_kw: f64,
    /// 전기 요금 [EUR/kWh]
    pub electricity_eur_per_kwh: f64,
    /// 탄소 배출 계수 [kgCO2/kWh]
    pub emission_kg_co2_per_kwh: f64,
    /// 고정비 묶음
    pub fixed: FixedCosts,
    /// 장비 노화 계수 (1 = 할증 없음)
    pub age_factor: f64,
}

/// 비용 계산 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct CostBreakdown {
    /// 에너지 사용량 [kWh]
    pub energy_consumption_kwh: f64,
    /// 에너지 비용 [EUR]
    pub energy_cost_eur: f64,
    /// 고정비 합계 [EUR]
    pub total_fixed_costs_eur: f64,
    /// 노화 할증분 [EUR] (변동비 중 노화로 인한 증가분만)
    pub additional_cost_eur: f64,
    /// 총 비용 [EUR]
    pub total_cost_eur: f64,
    /// 탄소 배출량 [kgCO2]
    pub carbon_footprint_kg_co2: f64,
}

/// 시험 비용 내역을 계산한다.
///
/// 같은 입력에는 항상 같은 결과를 내고, 표시 전까지 반올림하지 않는다.
pub fn calculate_costs(input: &CostInput) -> CostBreakdown {
    let energy_consumption_kwh = input.total_power_kw * input.duration_hours;
    let energy_cost_eur = energy_consumption_kwh * input.electricity_eur_per_kwh;
    let equipment_operational_eur = input.fixed.equipment_hourly_eur * input.duration_hours;

    let mut total_fixed_costs_eur =
        input.fixed.rh_eur + input.fixed.transport_eur + equipment_operational_eur;
    if let Some(maintenance_eur) = input.fixed.maintenance_tasks_total_eur {
        total_fixed_costs_eur += maintenance_eur;
    }

    let variable_costs_eur = energy_cost_eur + equipment_operational_eur;
    let additional_cost_eur = variable_costs_eur * (input.age_factor - 1.0);
    let total_cost_eur = energy_cost_eur + total_fixed_costs_eur + additional_cost_eur;
    let carbon_footprint_kg_co2 = energy_consumption_kwh * input.emission_kg_co2_per_kwh;

    CostBreakdown {
        energy_consumption_kwh,
        energy_cost_eur,
        total_fixed_costs_eur,
        additional_cost_eur,
        total_cost_eur,
        carbon_footprint_kg_co2,
    }
}
