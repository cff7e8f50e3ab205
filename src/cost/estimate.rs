//! 견적 파이프라인. 시험 구성 검증, 기간 해석, 요율 조회를 거쳐
//! 비용 계산 엔진을 호출하는 한 번의 동기 흐름이다.

use crate::cost::engine::{calculate_costs, CostBreakdown, CostInput, FixedCosts};
use crate::plan::{
    resolve_duration_hours, DurationError, TestPlan, ValidationError,
};
use crate::rate_db::{equipment_hourly_cost_eur, RateError, RateTable};

/// 견적 맥락: 지역과 고정비, 노화 계수.
#[derive(Debug, Clone)]
pub struct Pricing {
    /// 지역명 (요율 테이블 키)
    pub location: String,
    /// 인건비 [EUR]
    pub rh_eur: f64,
    /// 운송비 [EUR]
    pub transport_eur: f64,
    /// 장비 노화 계수 (1 이상)
    pub age_factor: f64,
    /// 준비 작업 총액 [EUR]
    pub maintenance_tasks_total_eur: Option<f64>,
}

/// 견적 결과. 내역과 함께 해석된 기간/전력도 보고한다.
#[derive(Debug, Clone)]
pub struct TestEstimate {
    pub duration_hours: f64,
    pub total_power_kw: f64,
    pub breakdown: CostBreakdown,
}

/// 견적 오류.
#[derive(Debug)]
pub enum EstimateError {
    Validation(ValidationError),
    Duration(DurationError),
    Rate(RateError),
    /// 노화 계수가 1 미만이거나 유한하지 않음
    BadAgeFactor { value: f64 },
}

impl std::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateError::Validation(err) => write!(f, "시험 구성 오류: {err}"),
            EstimateError::Duration(err) => write!(f, "시험 기간 오류: {err}"),
            EstimateError::Rate(err) => write!(f, "요율 조회 오류: {err}"),
            EstimateError::BadAgeFactor { value } => {
                write!(f, "노화 계수는 1 이상이어야 합니다: {value}")
            }
        }
    }
}

impl std::error::Error for EstimateError {}

impl From<ValidationError> for EstimateError {
    fn from(err: ValidationError) -> Self {
        EstimateError::Validation(err)
    }
}

impl From<DurationError> for EstimateError {
    fn from(err: DurationError) -> Self {
        EstimateError::Duration(err)
    }
}

impl From<RateError> for EstimateError {
    fn from(err: RateError) -> Self {
        EstimateError::Rate(err)
    }
}

/// 시험 구성 하나의 비용을 견적한다.
pub fn estimate_test_cost(
    plan: &TestPlan,
    pricing: &Pricing,
    rates: &RateTable,
) -> Result<TestEstimate, EstimateError> {
    plan.validate()?;
    if !pricing.age_factor.is_finite() || pricing.age_factor < 1.0 {
        return Err(EstimateError::BadAgeFactor {
            value: pricing.age_factor,
        });
    }

    let duration_hours = resolve_duration_hours(plan)?;
    let total_power_kw = resolve_total_power_kw(plan, rates)?;
    let location = rates.location(&pricing.location)?;

    let input = CostInput {
        duration_hours,
        total_power_kw,
        electricity_eur_per_kwh: location.electricity_eur_per_kwh,
        emission_kg_co2_per_kwh: location.emission_kg_co2_per_kwh,
        fixed: FixedCosts {
            rh_eur: pricing.rh_eur,
            transport_eur: pricing.transport_eur,
            equipment_hourly_eur: equipment_hourly_cost_eur(plan.equipment()),
            maintenance_tasks_total_eur: pricing.maintenance_tasks_total_eur,
        },
        age_factor: pricing.age_factor,
    };
    Ok(TestEstimate {
        duration_hours,
        total_power_kw,
        breakdown: calculate_costs(&input),
    })
}

/// 총 소비 전력을 해석한다. 복합 시험은 두 파트가 동시에 가동되므로
/// 파트별 조회 결과를 합산한다.
fn resolve_total_power_kw(plan: &TestPlan, rates: &RateTable) -> Result<f64, RateError> {
    let equipment = plan.equipment();
    let power_kw = match plan {
        TestPlan::Thermal { method, .. } => rates.power_kw(method.id(), equipment)?,
        TestPlan::ThermalShock { method, .. } => rates.power_kw(method.id(), equipment)?,
        TestPlan::Vibration { method, .. } => rates.power_kw(method.id(), equipment)?,
        TestPlan::Combined { thermal, vibration } => {
            rates.power_kw(thermal.id(), equipment)? + rates.power_kw(vibration.id(), equipment)?
        }
        TestPlan::CustomSingle { power_kw, .. } => *power_kw,
        TestPlan::CustomCombined {
            thermal_power_kw,
            vibration_power_kw,
            ..
        } => thermal_power_kw + vibration_power_kw,
    };
    Ok(power_kw)
}
