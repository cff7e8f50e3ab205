use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::cost::TRANSPORT_EUR_PER_TEST;
use crate::maintenance::{DEFAULT_TIMEOUT_SECS, MAX_HISTORY_CHARS};
use crate::rate_db::{LocationRate, RateTable};

/// 시험 지역 설정. 내장 요율을 쓰되 필요하면 값을 재정의할 수 있다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// 지역명 (요율 테이블 키)
    pub name: String,
    /// 전기 요금 재정의 [EUR/kWh]
    pub electricity_eur_per_kwh: Option<f64>,
    /// 탄소 배출 계수 재정의 [kgCO2/kWh]
    pub emission_kg_co2_per_kwh: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            name: "Tunisia".to_string(),
            electricity_eur_per_kwh: None,
            emission_kg_co2_per_kwh: None,
        }
    }
}

/// 견적 기본값.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateDefaults {
    /// 인건비 기본값 [EUR]
    pub rh_eur: f64,
    /// 운송비 기본값 [EUR]
    pub transport_eur: f64,
    /// 장비 노화 계수 기본값
    pub age_factor: f64,
}

impl Default for EstimateDefaults {
    fn default() -> Self {
        Self {
            rh_eur: 210.0,
            transport_eur: TRANSPORT_EUR_PER_TEST,
            age_factor: 1.0,
        }
    }
}

/// 예지 보전 예측 설정.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// 외부 예측 서비스 주소. 없으면 내장 휴리스틱을 쓴다.
    pub endpoint: Option<String>,
    /// 원격 호출 제한 시간 [초]
    pub timeout_secs: u64,
    /// 요청에 실을 이력 텍스트 최대 길이 [문자]
    pub max_history_chars: usize,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_history_chars: MAX_HISTORY_CHARS,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// 언어 코드 (예: "ko", "en"). 없으면 시스템 로캘을 따른다.
    pub language: Option<String>,
    pub location: LocationConfig,
    pub estimate: EstimateDefaults,
    pub prediction: PredictionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            location: LocationConfig::default(),
            estimate: EstimateDefaults::default(),
            prediction: PredictionConfig::default(),
        }
    }
}

impl Config {
    /// 설정의 지역 재정의를 반영한 요율 테이블을 만든다.
    ///
    /// 내장 지역이면 재정의된 값만 바꾼다. 내장에 없는 지역은 두 값이
    /// 모두 재정의되어 있을 때만 새 항목으로 등록한다.
    pub fn rate_table(&self) -> RateTable {
        let builtin = RateTable::builtin();
        let mut locations: Vec<LocationRate> = builtin.location_rates().to_vec();
        let power = builtin.power_entries().to_vec();

        if let Some(entry) = locations
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(&self.location.name))
        {
            if let Some(rate) = self.location.electricity_eur_per_kwh {
                entry.electricity_eur_per_kwh = rate;
            }
            if let Some(factor) = self.location.emission_kg_co2_per_kwh {
                entry.emission_kg_co2_per_kwh = factor;
            }
        } else if let (Some(rate), Some(factor)) = (
            self.location.electricity_eur_per_kwh,
            self.location.emission_kg_co2_per_kwh,
        ) {
            locations.push(LocationRate {
                name: self.location.name.clone(),
                electricity_eur_per_kwh: rate,
                emission_kg_co2_per_kwh: factor,
            });
        }
        RateTable::new(power, locations)
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }
}
