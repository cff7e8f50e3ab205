//! 시험 구성 모델. 시험 종류/방법/장비를 합 타입으로 표현하고 제출 전에 한 번 검증한다.

pub mod duration;
pub mod methods;

pub use duration::*;
pub use methods::*;

use crate::i18n::keys;

/// 시험 장비 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Equipment {
    /// 온도(항온항습) 챔버
    ThermalChamber,
    /// 열충격 챔버 (2조)
    ThermalShockChamber,
    /// 진동 시험기
    VibratingPot,
    /// 복합(진동+온도) 시험기
    CombinedVibrationThermal,
}

impl Equipment {
    /// 설정/외부 인터페이스용 식별자.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Equipment::ThermalChamber => "thermal_chamber",
            Equipment::ThermalShockChamber => "thermal_shock_chamber",
            Equipment::VibratingPot => "vibrating_pot",
            Equipment::CombinedVibrationThermal => "combined_vibration_thermal",
        }
    }

    pub const fn label_key(&self) -> &'static str {
        match self {
            Equipment::ThermalChamber => keys::EQUIPMENT_THERMAL_CHAMBER,
            Equipment::ThermalShockChamber => keys::EQUIPMENT_THERMAL_SHOCK_CHAMBER,
            Equipment::VibratingPot => keys::EQUIPMENT_VIBRATING_POT,
            Equipment::CombinedVibrationThermal => keys::EQUIPMENT_COMBINED,
        }
    }

    pub const ALL: [Equipment; 4] = [
        Equipment::ThermalChamber,
        Equipment::ThermalShockChamber,
        Equipment::VibratingPot,
        Equipment::CombinedVibrationThermal,
    ];
}

/// 시험 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestKind {
    Thermal,
    ThermalShock,
    Vibration,
    Combined,
}

impl TestKind {
    pub const fn label_key(&self) -> &'static str {
        match self {
            TestKind::Thermal => keys::TEST_TYPE_THERMAL,
            TestKind::ThermalShock => keys::TEST_TYPE_THERMAL_SHOCK,
            TestKind::Vibration => keys::TEST_TYPE_VIBRATION,
            TestKind::Combined => keys::TEST_TYPE_COMBINED,
        }
    }
}

/// 검증된 시험 구성. 각 변형이 자신의 필수 필드만 가진다.
///
/// 복합 시험과 사용자 정의 복합 시험은 구조상 복합 시험기에서만 수행되므로
/// 장비 필드를 따로 두지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub enum TestPlan {
    Thermal {
        method: ThermalMethod,
        equipment: Equipment,
    },
    ThermalShock {
        method: ThermalShockMethod,
        equipment: Equipment,
    },
    Vibration {
        method: VibrationMethod,
        equipment: Equipment,
    },
    Combined {
        thermal: ThermalMethod,
        vibration: VibrationMethod,
    },
    /// 사용자 정의 규격: 시간과 전력을 직접 입력한다.
    CustomSingle {
        equipment: Equipment,
        duration_hours: f64,
        power_kw: f64,
    },
    /// 사용자 정의 규격의 복합 시험: 파트별 시간/전력을 직접 입력한다.
    CustomCombined {
        thermal_duration_hours: f64,
        thermal_power_kw: f64,
        vibration_duration_hours: f64,
        vibration_power_kw: f64,
    },
}

/// 시험 구성 검증 오류.
#[derive(Debug)]
pub enum ValidationError {
    /// 시험 종류에 허용되지 않는 장비
    EquipmentNotAllowed {
        test_type: TestKind,
        equipment: Equipment,
    },
    /// 필드 값이 허용 범위를 벗어남
    OutOfRange {
        field: &'static str,
        value: f64,
        allowed: &'static str,
    },
    /// 필드 값이 유한한 수가 아님
    NotFinite { field: &'static str },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EquipmentNotAllowed {
                test_type,
                equipment,
            } => write!(
                f,
                "시험 종류 {test_type:?}에 허용되지 않는 장비: {}",
                equipment.as_str()
            ),
            ValidationError::OutOfRange {
                field,
                value,
                allowed,
            } => write!(f, "{field} 값 {value}은(는) 허용 범위 밖 (허용: {allowed})"),
            ValidationError::NotFinite { field } => write!(f, "{field} 값이 유한한 수가 아님"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl TestPlan {
    pub fn kind(&self) -> TestKind {
        match self {
            TestPlan::Thermal { .. } => TestKind::Thermal,
            TestPlan::ThermalShock { .. } => TestKind::ThermalShock,
            TestPlan::Vibration { .. } => TestKind::Vibration,
            TestPlan::Combined { .. } | TestPlan::CustomCombined { .. } => TestKind::Combined,
            // 사용자 정의 단일 시험의 종류는 장비 계열을 따른다.
            TestPlan::CustomSingle { equipment, .. } => match equipment {
                Equipment::ThermalChamber | Equipment::CombinedVibrationThermal => {
                    TestKind::Thermal
                }
                Equipment::ThermalShockChamber => TestKind::ThermalShock,
                Equipment::VibratingPot => TestKind::Vibration,
            },
        }
    }

    /// 고정비(장비 가동 단가) 산정에 쓰이는 장비.
    pub fn equipment(&self) -> Equipment {
        match self {
            TestPlan::Thermal { equipment, .. }
            | TestPlan::ThermalShock { equipment, .. }
            | TestPlan::Vibration { equipment, .. }
            | TestPlan::CustomSingle { equipment, .. } => *equipment,
            TestPlan::Combined { .. } | TestPlan::CustomCombined { .. } => {
                Equipment::CombinedVibrationThermal
            }
        }
    }

    /// 구성 전체를 한 번에 검증한다. 시간 필드의 양수 여부는 기간 해석 단계에서 따로 검사한다.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self {
            TestPlan::Thermal { method, equipment } => {
                check_thermal_family_equipment(TestKind::Thermal, *equipment)?;
                validate_thermal_method(method)
            }
            TestPlan::ThermalShock { method, equipment } => {
                check_thermal_family_equipment(TestKind::ThermalShock, *equipment)?;
                let ThermalShockMethod::ShockNa {
                    low_temp_c,
                    high_temp_c,
                    duration_hours,
                } = method;
                check_finite("low_temp_c", *low_temp_c)?;
                check_finite("high_temp_c", *high_temp_c)?;
                check_finite("duration_hours", *duration_hours)?;
                check_temp_order(*low_temp_c, *high_temp_c)
            }
            TestPlan::Vibration { method, equipment } => {
                check_vibration_equipment(TestKind::Vibration, *equipment)?;
                let (VibrationMethod::SinusoidalFc { duration_hours }
                | VibrationMethod::ShockEa { duration_hours }
                | VibrationMethod::BroadbandRandomFh { duration_hours }) = method;
                check_finite("duration_hours", *duration_hours)
            }
            TestPlan::Combined { thermal, vibration } => {
                validate_thermal_method(thermal)?;
                let (VibrationMethod::SinusoidalFc { duration_hours }
                | VibrationMethod::ShockEa { duration_hours }
                | VibrationMethod::BroadbandRandomFh { duration_hours }) = vibration;
                check_finite("duration_hours", *duration_hours)
            }
            TestPlan::CustomSingle {
                duration_hours,
                power_kw,
                ..
            } => {
                check_finite("duration_hours", *duration_hours)?;
                check_power("power_kw", *power_kw)
            }
            TestPlan::CustomCombined {
                thermal_duration_hours,
                thermal_power_kw,
                vibration_duration_hours,
                vibration_power_kw,
            } => {
                check_finite("thermal_duration_hours", *thermal_duration_hours)?;
                check_finite("vibration_duration_hours", *vibration_duration_hours)?;
                check_power("thermal_power_kw", *thermal_power_kw)?;
                check_power("vibration_power_kw", *vibration_power_kw)
            }
        }
    }
}

/// 열 계열 시험은 열 기능이 있는 장비에서만 수행 가능하다.
/// 방법-장비의 세부 조합(예: Na는 열충격 챔버 전용)은 전력 테이블 조회에서 판정한다.
fn check_thermal_family_equipment(
    kind: TestKind,
    equipment: Equipment,
) -> Result<(), ValidationError> {
    match equipment {
        Equipment::ThermalChamber
        | Equipment::ThermalShockChamber
        | Equipment::CombinedVibrationThermal => Ok(()),
        Equipment::VibratingPot => Err(ValidationError::EquipmentNotAllowed {
            test_type: kind,
            equipment,
        }),
    }
}

fn check_vibration_equipment(kind: TestKind, equipment: Equipment) -> Result<(), ValidationError> {
    match equipment {
        Equipment::VibratingPot | Equipment::CombinedVibrationThermal => Ok(()),
        Equipment::ThermalChamber | Equipment::ThermalShockChamber => {
            Err(ValidationError::EquipmentNotAllowed {
                test_type: kind,
                equipment,
            })
        }
    }
}

fn validate_thermal_method(method: &ThermalMethod) -> Result<(), ValidationError> {
    match method {
        ThermalMethod::ColdA {
            low_temp_c,
            duration_hours,
        } => {
            check_finite("low_temp_c", *low_temp_c)?;
            check_finite("duration_hours", *duration_hours)
        }
        ThermalMethod::DryHeatB {
            high_temp_c,
            duration_hours,
        } => {
            check_finite("high_temp_c", *high_temp_c)?;
            check_finite("duration_hours", *duration_hours)
        }
        ThermalMethod::TemperatureChangeNb {
            low_temp_c,
            high_temp_c,
            rate_c_per_min,
            duration_hours,
        } => {
            check_finite("low_temp_c", *low_temp_c)?;
            check_finite("high_temp_c", *high_temp_c)?;
            check_finite("rate_c_per_min", *rate_c_per_min)?;
            check_finite("duration_hours", *duration_hours)?;
            check_temp_order(*low_temp_c, *high_temp_c)?;
            if *rate_c_per_min <= 0.0 {
                return Err(ValidationError::OutOfRange {
                    field: "rate_c_per_min",
                    value: *rate_c_per_min,
                    allowed: "0보다 커야 함",
                });
            }
            Ok(())
        }
        ThermalMethod::DampHeatCyclicDb {
            high_temp_c,
            variant,
            duration_cycles,
        } => {
            check_finite("high_temp_c", *high_temp_c)?;
            if *high_temp_c != 40.0 && *high_temp_c != 55.0 {
                return Err(ValidationError::OutOfRange {
                    field: "high_temp_c",
                    value: *high_temp_c,
                    allowed: "40 또는 55",
                });
            }
            if *variant != 1 && *variant != 2 {
                return Err(ValidationError::OutOfRange {
                    field: "variant",
                    value: f64::from(*variant),
                    allowed: "1 또는 2",
                });
            }
            check_cycles(*duration_cycles)
        }
        ThermalMethod::TempHumidityCyclicZad { duration_cycles } => check_cycles(*duration_cycles),
        ThermalMethod::DampHeatSteadyCab {
            high_temp_c,
            humidity_pct,
            duration_hours,
        } => {
            check_finite("high_temp_c", *high_temp_c)?;
            check_finite("humidity_pct", *humidity_pct)?;
            check_finite("duration_hours", *duration_hours)?;
            if !(0.0..=100.0).contains(humidity_pct) {
                return Err(ValidationError::OutOfRange {
                    field: "humidity_pct",
                    value: *humidity_pct,
                    allowed: "0~100",
                });
            }
            Ok(())
        }
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite { field })
    }
}

fn check_temp_order(low: f64, high: f64) -> Result<(), ValidationError> {
    if low < high {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: "low_temp_c",
            value: low,
            allowed: "고온보다 낮아야 함",
        })
    }
}

fn check_cycles(cycles: u32) -> Result<(), ValidationError> {
    if cycles >= 1 {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            field: "duration_cycles",
            value: f64::from(cycles),
            allowed: "1 이상",
        })
    }
}

fn check_power(field: &'static str, power_kw: f64) -> Result<(), ValidationError> {
    check_finite(field, power_kw)?;
    if power_kw < 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value: power_kw,
            allowed: "0 이상",
        });
    }
    Ok(())
}
