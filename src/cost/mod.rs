//! 비용 계산 모듈 모음.

pub mod engine;
pub mod estimate;
pub mod prep_tasks;

pub use engine::*;
pub use estimate::*;
pub use prep_tasks::*;
