//! 요율 데이터베이스. (시험 방법, 장비) 조합의 소비 전력과
//! 지역별 전기 요금/배출 계수를 정적 테이블로 제공한다.

use crate::plan::{Equipment, MethodId};

/// (방법, 장비) 조합의 소비 전력 항목.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerEntry {
    pub method: MethodId,
    pub equipment: Equipment,
    pub power_kw: f64,
}

const fn pe(method: MethodId, equipment: Equipment, power_kw: f64) -> PowerEntry {
    PowerEntry {
        method,
        equipment,
        power_kw,
    }
}

/// 지역별 전기 요금과 탄소 배출 계수.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationRate {
    pub name: String,
    pub electricity_eur_per_kwh: f64,
    pub emission_kg_co2_per_kwh: f64,
}

struct LocationSeed {
    name: &'static str,
    electricity_eur_per_kwh: f64,
    emission_kg_co2_per_kwh: f64,
}

const fn loc(
    name: &'static str,
    electricity_eur_per_kwh: f64,
    emission_kg_co2_per_kwh: f64,
) -> LocationSeed {
    LocationSeed {
        name,
        electricity_eur_per_kwh,
        emission_kg_co2_per_kwh,
    }
}

/// 기본 소비 전력 테이블 (kW).
pub const POWER_TABLE: &[PowerEntry] = &[
    // 온도 챔버
    pe(MethodId::ColdA, Equipment::ThermalChamber, 5.5),
    pe(MethodId::DryHeatB, Equipment::ThermalChamber, 6.0),
    pe(MethodId::TemperatureChangeNb, Equipment::ThermalChamber, 7.0),
    pe(MethodId::DampHeatCyclicDb, Equipment::ThermalChamber, 6.5),
    pe(MethodId::TempHumidityCyclicZad, Equipment::ThermalChamber, 7.5),
    pe(MethodId::DampHeatSteadyCab, Equipment::ThermalChamber, 6.8),
    // 열충격 챔버 (Na 전용)
    pe(MethodId::ThermalShockNa, Equipment::ThermalShockChamber, 12.0),
    // 진동 시험기
    pe(MethodId::VibrationSinusoidalFc, Equipment::VibratingPot, 8.0),
    pe(MethodId::ShockEa, Equipment::VibratingPot, 9.5),
    pe(MethodId::VibrationBroadbandFh, Equipment::VibratingPot, 8.5),
    // 복합 시험기 (진동 계열)
    pe(
        MethodId::VibrationSinusoidalFc,
        Equipment::CombinedVibrationThermal,
        13.5,
    ),
    pe(MethodId::ShockEa, Equipment::CombinedVibrationThermal, 15.0),
    pe(
        MethodId::VibrationBroadbandFh,
        Equipment::CombinedVibrationThermal,
        14.0,
    ),
    // 복합 시험기는 열 계열 단독 시험도 수행 가능 (대기 부하만큼 약간 높음)
    pe(MethodId::ColdA, Equipment::CombinedVibrationThermal, 5.8),
    pe(MethodId::DryHeatB, Equipment::CombinedVibrationThermal, 6.3),
    pe(
        MethodId::TemperatureChangeNb,
        Equipment::CombinedVibrationThermal,
        7.5,
    ),
    pe(
        MethodId::DampHeatCyclicDb,
        Equipment::CombinedVibrationThermal,
        6.8,
    ),
    pe(
        MethodId::TempHumidityCyclicZad,
        Equipment::CombinedVibrationThermal,
        7.8,
    ),
    pe(
        MethodId::DampHeatSteadyCab,
        Equipment::CombinedVibrationThermal,
        7.1,
    ),
];

const LOCATION_TABLE: &[LocationSeed] = &[
    loc("Tunisia", 0.135, 0.58),
    loc("France", 0.22, 0.05),
    loc("Germany", 0.45, 0.40),
];

/// 장비 가동 단가 (EUR/h).
pub const fn equipment_hourly_cost_eur(equipment: Equipment) -> f64 {
    match equipment {
        Equipment::ThermalChamber => 5.0,
        Equipment::ThermalShockChamber => 7.5,
        Equipment::VibratingPot => 100.0,
        Equipment::CombinedVibrationThermal => 105.0,
    }
}

/// 요율 조회 오류.
#[derive(Debug)]
pub enum RateError {
    /// 방법과 장비의 계열이 맞지 않음 (예: 열충격 방법을 전용 챔버 외 장비에 요청)
    MethodEquipmentMismatch {
        method: MethodId,
        equipment: Equipment,
    },
    /// 계열은 맞지만 해당 조합의 데이터가 없음
    NoData {
        method: MethodId,
        equipment: Equipment,
    },
    /// 등록되지 않은 지역
    UnknownLocation { name: String },
}

impl std::fmt::Display for RateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateError::MethodEquipmentMismatch { method, equipment } => write!(
                f,
                "방법 {}은(는) 장비 '{}'에서 수행할 수 없습니다",
                method.code(),
                equipment.as_str()
            ),
            RateError::NoData { method, equipment } => write!(
                f,
                "조합 ({}, {})의 소비 전력 데이터가 없습니다",
                method.code(),
                equipment.as_str()
            ),
            RateError::UnknownLocation { name } => write!(f, "등록되지 않은 지역: {name}"),
        }
    }
}

impl std::error::Error for RateError {}

/// 요율 테이블. 기본 내장 데이터로 쓰거나 외부 데이터로 주입할 수 있다.
#[derive(Debug, Clone)]
pub struct RateTable {
    power: Vec<PowerEntry>,
    locations: Vec<LocationRate>,
}

impl RateTable {
    /// 내장 기본 테이블.
    pub fn builtin() -> Self {
        RateTable {
            power: POWER_TABLE.to_vec(),
            locations: LOCATION_TABLE
                .iter()
                .map(|seed| LocationRate {
                    name: seed.name.to_string(),
                    electricity_eur_per_kwh: seed.electricity_eur_per_kwh,
                    emission_kg_co2_per_kwh: seed.emission_kg_co2_per_kwh,
                })
                .collect(),
        }
    }

    /// 외부에서 읽어 온 데이터로 테이블을 구성한다.
    pub fn new(power: Vec<PowerEntry>, locations: Vec<LocationRate>) -> Self {
        RateTable { power, locations }
    }

    /// (방법, 장비) 조합의 소비 전력을 조회한다.
    ///
    /// 계열 자체가 맞지 않는 조합과 데이터만 없는 조합을 구분해 보고한다.
    /// 둘 다 해당 요청에 대해 복구 불가능하며 기본값으로 대체하지 않는다.
    pub fn power_kw(&self, method: MethodId, equipment: Equipment) -> Result<f64, RateError> {
        if !class_compatible(method, equipment) {
            return Err(RateError::MethodEquipmentMismatch { method, equipment });
        }
        self.power
            .iter()
            .find(|entry| entry.method == method && entry.equipment == equipment)
            .map(|entry| entry.power_kw)
            .ok_or(RateError::NoData { method, equipment })
    }

    /// 지역 요율을 조회한다. 지역명은 대소문자를 구분하지 않는다.
    pub fn location(&self, name: &str) -> Result<&LocationRate, RateError> {
        self.locations
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| RateError::UnknownLocation {
                name: name.to_string(),
            })
    }

    pub fn power_entries(&self) -> &[PowerEntry] {
        &self.power
    }

    pub fn location_rates(&self) -> &[LocationRate] {
        &self.locations
    }
}

/// 방법 계열과 장비 계열의 호환 여부.
const fn class_compatible(method: MethodId, equipment: Equipment) -> bool {
    match method {
        MethodId::ThermalShockNa => matches!(equipment, Equipment::ThermalShockChamber),
        MethodId::ColdA
        | MethodId::DryHeatB
        | MethodId::TemperatureChangeNb
        | MethodId::DampHeatCyclicDb
        | MethodId::TempHumidityCyclicZad
        | MethodId::DampHeatSteadyCab => matches!(
            equipment,
            Equipment::ThermalChamber | Equipment::CombinedVibrationThermal
        ),
        MethodId::VibrationSinusoidalFc | MethodId::ShockEa | MethodId::VibrationBroadbandFh => {
            matches!(
                equipment,
                Equipment::VibratingPot | Equipment::CombinedVibrationThermal
            )
        }
    }
}

// NOTE: 소비 전력 값은 장비별 대표값이다. 실측 데이터가 확보되면 외부 파일 주입으로 교체한다.
