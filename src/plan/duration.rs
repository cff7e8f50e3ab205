//! 시험 기간 해석. 주기 기반 방법(Db, Z/AD)은 1주기 = 24시간으로 환산하고,
//! 복합 시험은 두 파트가 동시에 진행되므로 더 긴 파트의 시간을 쓴다.

use super::{TestPlan, ThermalMethod, ThermalShockMethod, VibrationMethod};

/// 주기 기반 방법의 1주기 환산 시간.
pub const HOURS_PER_CYCLE: f64 = 24.0;

/// 기간 해석 오류.
#[derive(Debug)]
pub enum DurationError {
    /// 해석된 시험 시간이 0 이하
    NotPositive { hours: f64 },
    /// 해석된 시험 시간이 유한한 수가 아님
    NotFinite,
}

impl std::fmt::Display for DurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationError::NotPositive { hours } => {
                write!(f, "시험 시간은 양수여야 합니다: {hours}시간")
            }
            DurationError::NotFinite => write!(f, "시험 시간이 유한한 수가 아닙니다"),
        }
    }
}

impl std::error::Error for DurationError {}

/// 구성 전체의 시험 시간을 시간 단위로 해석한다.
pub fn resolve_duration_hours(plan: &TestPlan) -> Result<f64, DurationError> {
    let hours = match plan {
        TestPlan::Thermal { method, .. } => check(thermal_method_hours(method))?,
        TestPlan::ThermalShock { method, .. } => {
            let ThermalShockMethod::ShockNa { duration_hours, .. } = method;
            check(*duration_hours)?
        }
        TestPlan::Vibration { method, .. } => check(vibration_method_hours(method))?,
        TestPlan::Combined { thermal, vibration } => {
            let t = check(thermal_method_hours(thermal))?;
            let v = check(vibration_method_hours(vibration))?;
            t.max(v)
        }
        TestPlan::CustomSingle { duration_hours, .. } => check(*duration_hours)?,
        TestPlan::CustomCombined {
            thermal_duration_hours,
            vibration_duration_hours,
            ..
        } => {
            let t = check(*thermal_duration_hours)?;
            let v = check(*vibration_duration_hours)?;
            t.max(v)
        }
    };
    Ok(hours)
}

/// 열 계열 방법 하나의 시험 시간.
pub fn thermal_method_hours(method: &ThermalMethod) -> f64 {
    match method {
        ThermalMethod::ColdA { duration_hours, .. }
        | ThermalMethod::DryHeatB { duration_hours, .. }
        | ThermalMethod::TemperatureChangeNb { duration_hours, .. }
        | ThermalMethod::DampHeatSteadyCab { duration_hours, .. } => *duration_hours,
        ThermalMethod::DampHeatCyclicDb {
            duration_cycles, ..
        }
        | ThermalMethod::TempHumidityCyclicZad { duration_cycles } => {
            f64::from(*duration_cycles) * HOURS_PER_CYCLE
        }
    }
}

/// 진동 계열 방법 하나의 시험 시간.
pub fn vibration_method_hours(method: &VibrationMethod) -> f64 {
    let (VibrationMethod::SinusoidalFc { duration_hours }
    | VibrationMethod::ShockEa { duration_hours }
    | VibrationMethod::BroadbandRandomFh { duration_hours }) = method;
    *duration_hours
}

fn check(hours: f64) -> Result<f64, DurationError> {
    if !hours.is_finite() {
        return Err(DurationError::NotFinite);
    }
    if hours <= 0.0 {
        return Err(DurationError::NotPositive { hours });
    }
    Ok(hours)
}
