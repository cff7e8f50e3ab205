//! 예지 보전 예측 모듈.

pub mod predict;

pub use predict::*;
