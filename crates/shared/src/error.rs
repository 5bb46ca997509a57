use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("performance rating {0} is outside 1..=5")]
    PerformanceOutOfRange(u8),
    #[error("unknown department: {0}")]
    UnknownDepartment(String),
}
