//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 뿐 아니라 추후 보고서 렌더러 연동도 쉽게 한다.

pub mod app;
pub mod config;
pub mod cost;
pub mod i18n;
pub mod maintenance;
pub mod plan;
pub mod rate_db;
pub mod ui_cli;
