use crate::config::Config;
use crate::cost::{EstimateError, PrepCostError};
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 한 실행 동안만 유지되는 세션 상태.
///
/// 준비 작업 메뉴에서 계산한 총액을 다음 견적의 유지보수 항목으로
/// 넘겨줄 때 쓴다.
#[derive(Debug, Default)]
pub struct SessionState {
    pub last_prep_total_eur: Option<f64>,
}

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(crate::config::ConfigError),
    /// 시험 비용 견적 오류
    Estimate(EstimateError),
    /// 준비 작업 비용 계산 오류
    Prep(PrepCostError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Estimate(e) => write!(f, "견적 오류: {e}"),
            AppError::Prep(e) => write!(f, "준비 작업 오류: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<crate::config::ConfigError> for AppError {
    fn from(value: crate::config::ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<EstimateError> for AppError {
    fn from(value: EstimateError) -> Self {
        AppError::Estimate(value)
    }
}

impl From<PrepCostError> for AppError {
    fn from(value: PrepCostError) -> Self {
        AppError::Prep(value)
    }
}

/// 도메인 오류는 출력하고 메뉴로 돌아간다. 입출력/설정 오류만 위로 올린다.
fn print_or_raise(tr: &Translator, result: Result<(), AppError>) -> Result<(), AppError> {
    match result {
        Err(err @ (AppError::Estimate(_) | AppError::Prep(_))) => {
            println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            Ok(())
        }
        other => other,
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    let mut session = SessionState::default();
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Estimate => {
                print_or_raise(tr, ui_cli::handle_estimate(tr, config, &mut session))?;
            }
            MenuChoice::PrepTasks => {
                print_or_raise(tr, ui_cli::handle_prep_tasks(tr, &mut session))?;
            }
            MenuChoice::Prediction => ui_cli::handle_prediction(tr, config, None)?,
            MenuChoice::Rates => ui_cli::handle_rates(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
