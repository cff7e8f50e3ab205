use crate::i18n::keys;

/// IEC 60068-2 시험 방법 식별자. 전력 테이블 조회 키로 사용한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodId {
    /// 2-1:A 저온
    ColdA,
    /// 2-2:B 고온(건열)
    DryHeatB,
    /// 2-14:Na 열충격 (2조 챔버)
    ThermalShockNa,
    /// 2-14:Nb 온도 변화
    TemperatureChangeNb,
    /// 2-30:Db 사이클 습열
    DampHeatCyclicDb,
    /// 2-38:Z/AD 온습도 복합 사이클
    TempHumidityCyclicZad,
    /// 2-78:Cab 정상 습열
    DampHeatSteadyCab,
    /// 2-6:Fc 정현파 진동
    VibrationSinusoidalFc,
    /// 2-27:Ea 충격
    ShockEa,
    /// 2-64:Fh 광대역 랜덤 진동
    VibrationBroadbandFh,
}

impl MethodId {
    /// 규격 표기 문자열 (예: "2-1:A").
    pub const fn code(&self) -> &'static str {
        match self {
            MethodId::ColdA => "2-1:A",
            MethodId::DryHeatB => "2-2:B",
            MethodId::ThermalShockNa => "2-14:Na",
            MethodId::TemperatureChangeNb => "2-14:Nb",
            MethodId::DampHeatCyclicDb => "2-30:Db",
            MethodId::TempHumidityCyclicZad => "2-38:Z/AD",
            MethodId::DampHeatSteadyCab => "2-78:Cab",
            MethodId::VibrationSinusoidalFc => "2-6:Fc",
            MethodId::ShockEa => "2-27:Ea",
            MethodId::VibrationBroadbandFh => "2-64:Fh",
        }
    }

    /// 표시용 이름의 i18n 키.
    pub const fn label_key(&self) -> &'static str {
        match self {
            MethodId::ColdA => keys::METHOD_COLD_A,
            MethodId::DryHeatB => keys::METHOD_DRY_HEAT_B,
            MethodId::ThermalShockNa => keys::METHOD_THERMAL_SHOCK_NA,
            MethodId::TemperatureChangeNb => keys::METHOD_TEMP_CHANGE_NB,
            MethodId::DampHeatCyclicDb => keys::METHOD_DAMP_HEAT_DB,
            MethodId::TempHumidityCyclicZad => keys::METHOD_TEMP_HUMIDITY_ZAD,
            MethodId::DampHeatSteadyCab => keys::METHOD_DAMP_HEAT_CAB,
            MethodId::VibrationSinusoidalFc => keys::METHOD_VIBRATION_FC,
            MethodId::ShockEa => keys::METHOD_SHOCK_EA,
            MethodId::VibrationBroadbandFh => keys::METHOD_BROADBAND_FH,
        }
    }
}

/// 열 시험 방법. 각 변형이 자신에게 필요한 필드만 가진다.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalMethod {
    /// 2-1:A 저온 유지
    ColdA { low_temp_c: f64, duration_hours: f64 },
    /// 2-2:B 고온 유지
    DryHeatB { high_temp_c: f64, duration_hours: f64 },
    /// 2-14:Nb 온도 변화 (변화율 지정)
    TemperatureChangeNb {
        low_temp_c: f64,
        high_temp_c: f64,
        rate_c_per_min: f64,
        duration_hours: f64,
    },
    /// 2-30:Db 사이클 습열. 상한 온도는 40/55°C, 변형은 1/2만 허용.
    DampHeatCyclicDb {
        high_temp_c: f64,
        variant: u8,
        duration_cycles: u32,
    },
    /// 2-38:Z/AD 온습도 복합 사이클
    TempHumidityCyclicZad { duration_cycles: u32 },
    /// 2-78:Cab 정상 습열
    DampHeatSteadyCab {
        high_temp_c: f64,
        humidity_pct: f64,
        duration_hours: f64,
    },
}

impl ThermalMethod {
    pub fn id(&self) -> MethodId {
        match self {
            ThermalMethod::ColdA { .. } => MethodId::ColdA,
            ThermalMethod::DryHeatB { .. } => MethodId::DryHeatB,
            ThermalMethod::TemperatureChangeNb { .. } => MethodId::TemperatureChangeNb,
            ThermalMethod::DampHeatCyclicDb { .. } => MethodId::DampHeatCyclicDb,
            ThermalMethod::TempHumidityCyclicZad { .. } => MethodId::TempHumidityCyclicZad,
            ThermalMethod::DampHeatSteadyCab { .. } => MethodId::DampHeatSteadyCab,
        }
    }
}

/// 열충격 시험 방법. 현재는 2-14:Na 단일 방법이다.
#[derive(Debug, Clone, PartialEq)]
pub enum ThermalShockMethod {
    /// 2-14:Na 2조 챔버 급속 이동
    ShockNa {
        low_temp_c: f64,
        high_temp_c: f64,
        duration_hours: f64,
    },
}

impl ThermalShockMethod {
    pub fn id(&self) -> MethodId {
        match self {
            ThermalShockMethod::ShockNa { .. } => MethodId::ThermalShockNa,
        }
    }
}

/// 진동 시험 방법.
#[derive(Debug, Clone, PartialEq)]
pub enum VibrationMethod {
    /// 2-6:Fc 정현파 스윕
    SinusoidalFc { duration_hours: f64 },
    /// 2-27:Ea 충격
    ShockEa { duration_hours: f64 },
    /// 2-64:Fh 광대역 랜덤
    BroadbandRandomFh { duration_hours: f64 },
}

impl VibrationMethod {
    pub fn id(&self) -> MethodId {
        match self {
            VibrationMethod::SinusoidalFc { .. } => MethodId::VibrationSinusoidalFc,
            VibrationMethod::ShockEa { .. } => MethodId::ShockEa,
            VibrationMethod::BroadbandRandomFh { .. } => MethodId::VibrationBroadbandFh,
        }
    }
}
