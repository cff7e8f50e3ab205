//! 예지 보전 비용 예측. 과거 정비 이력(CSV 텍스트)과 장비 정보를 외부
//! 생성형 서비스에 보내고 구조화된 응답을 받아 온다.
//!
//! 예측 실패는 연성 실패다. 호출 측은 예측 없이도 비용 견적을 그대로
//! 보여 줄 수 있어야 한다.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::PredictionConfig;

/// 요청에 실어 보내는 이력 텍스트의 최대 길이 [문자].
pub const MAX_HISTORY_CHARS: usize = 5000;
/// 이력이 잘렸음을 알리는 표식. 서비스가 잘린 데이터임을 인지하도록 끝에 덧붙인다.
pub const TRUNCATION_MARKER: &str = "\n... (data truncated)";
/// 원격 호출 기본 제한 시간 [초].
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 예측 요청. 외부 서비스의 camelCase 필드명을 그대로 따른다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub historical_csv_content: String,
    pub equipment_age_years: f64,
    pub equipment_type: String,
}

/// 예측 응답.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePrediction {
    /// 내년 예상 정비 비용 (유체 제외) [EUR]
    pub predicted_maintenance_cost: f64,
    /// 내년 예상 유체 교체 비용 [EUR]
    pub fluid_replacement_cost: f64,
    /// 신뢰성 점수 (0 = 매우 불안정, 100 = 매우 안정)
    pub reliability_score: f64,
    /// 권장 정비 조치
    pub suggested_maintenance_actions: String,
}

/// 예측 오류. 어느 쪽이든 견적 자체를 무효화하지 않는다.
#[derive(Debug)]
pub enum PredictError {
    /// 서비스 호출 실패 (연결 불가, 응답 시간 초과, HTTP 오류)
    Unavailable { reason: String },
    /// 응답이 스키마를 만족하지 않음 (필드 누락, 점수 범위 밖, 수가 아닌 비용)
    BadResponse { reason: String },
}

impl std::fmt::Display for PredictError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredictError::Unavailable { reason } => {
                write!(f, "예측 서비스를 사용할 수 없습니다: {reason}")
            }
            PredictError::BadResponse { reason } => {
                write!(f, "예측 응답이 올바르지 않습니다: {reason}")
            }
        }
    }
}

impl std::error::Error for PredictError {}

/// 이력 텍스트를 최대 길이로 자른다. 잘린 경우에만 표식을 덧붙인다.
pub fn truncate_history(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut truncated: String = content.chars().take(max_chars).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// 응답 스키마 검증. 비용은 유한한 수, 점수는 0~100이어야 한다.
pub fn validate_prediction(prediction: &MaintenancePrediction) -> Result<(), PredictError> {
    if !prediction.predicted_maintenance_cost.is_finite() {
        return Err(PredictError::BadResponse {
            reason: "predictedMaintenanceCost가 유한한 수가 아님".to_string(),
        });
    }
    if !prediction.fluid_replacement_cost.is_finite() {
        return Err(PredictError::BadResponse {
            reason: "fluidReplacementCost가 유한한 수가 아님".to_string(),
        });
    }
    if !prediction.reliability_score.is_finite()
        || !(0.0..=100.0).contains(&prediction.reliability_score)
    {
        return Err(PredictError::BadResponse {
            reason: format!(
                "reliabilityScore가 0~100 범위 밖: {}",
                prediction.reliability_score
            ),
        });
    }
    Ok(())
}

/// 응답 본문(JSON)을 파싱하고 검증한다.
pub fn parse_prediction(body: &str) -> Result<MaintenancePrediction, PredictError> {
    let prediction: MaintenancePrediction =
        serde_json::from_str(body).map_err(|err| PredictError::BadResponse {
            reason: err.to_string(),
        })?;
    validate_prediction(&prediction)?;
    Ok(prediction)
}

/// 예측 서비스 추상화. 원격 LLM, 내장 휴리스틱 등 요청/응답 스키마만
/// 지키면 어떤 구현이든 바꿔 끼울 수 있다.
pub trait MaintenancePredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<MaintenancePrediction, PredictError>;
}

/// HTTP로 외부 예측 서비스를 호출하는 구현.
pub struct HttpPredictor {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl HttpPredictor {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, PredictError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| PredictError::Unavailable {
                reason: err.to_string(),
            })?;
        Ok(HttpPredictor { endpoint, client })
    }
}

impl MaintenancePredictor for HttpPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<MaintenancePrediction, PredictError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .map_err(|err| {
                let reason = if err.is_timeout() {
                    "응답 시간 초과".to_string()
                } else {
                    err.to_string()
                };
                PredictError::Unavailable { reason }
            })?;
        if !response.status().is_success() {
            return Err(PredictError::Unavailable {
                reason: format!("HTTP {}", response.status()),
            });
        }
        let body = response.text().map_err(|err| PredictError::Unavailable {
            reason: err.to_string(),
        })?;
        parse_prediction(&body)
    }
}

/// 외부 서비스 없이 동작하는 내장 휴리스틱.
///
/// 이력 레코드 수와 장비 연식만으로 결정적인 예측을 만들어 오프라인
/// 환경과 테스트에서 쓴다. 같은 입력에는 항상 같은 출력을 낸다.
pub struct HeuristicPredictor;

impl MaintenancePredictor for HeuristicPredictor {
    fn predict(&self, request: &PredictionRequest) -> Result<MaintenancePrediction, PredictError> {
        let age = request.equipment_age_years.max(0.0);
        let records = history_record_count(&request.historical_csv_content) as f64;
        let predicted_maintenance_cost = 150.0 + 45.0 * age + 12.0 * records;
        let fluid_replacement_cost = 60.0 + 18.0 * age;
        let reliability_score = (100.0 - 5.0 * age - 1.5 * records).clamp(5.0, 98.0);
        Ok(MaintenancePrediction {
            predicted_maintenance_cost,
            fluid_replacement_cost,
            reliability_score,
            suggested_maintenance_actions: suggested_actions(&request.equipment_type),
        })
    }
}

/// 이력 CSV의 데이터 행 수. 첫 줄은 헤더로 보고 제외한다.
fn history_record_count(csv: &str) -> usize {
    csv.lines()
        .filter(|line| !line.trim().is_empty())
        .count()
        .saturating_sub(1)
}

fn suggested_actions(equipment_type: &str) -> String {
    let lower = equipment_type.to_ascii_lowercase();
    if lower.contains("vibrat") {
        "Inspect vibration dampers and armature mounts quarterly; verify amplifier cooling airflow."
            .to_string()
    } else if lower.contains("shock") {
        "Check the basket transfer mechanism for wear monthly; verify both zone setpoints against a reference probe."
            .to_string()
    } else {
        "Calibrate temperature and humidity sensors twice a year; replace door seals at the first sign of leakage."
            .to_string()
    }
}

/// 설정에 따라 예측기를 고른다. 엔드포인트가 없으면 내장 휴리스틱을 쓴다.
pub fn predictor_from_config(
    config: &PredictionConfig,
) -> Result<Box<dyn MaintenancePredictor>, PredictError> {
    match &config.endpoint {
        Some(endpoint) => Ok(Box::new(HttpPredictor::new(
            endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )?)),
        None => Ok(Box::new(HeuristicPredictor)),
    }
}
