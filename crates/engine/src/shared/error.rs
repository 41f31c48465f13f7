use thiserror::Error;

/// Ошибки вычислений над набором данных
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// Аргумент вне допустимой области (ранг перцентиля, число записей, справочник)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Операции нужно хотя бы одно значение
    #[error("Empty input: {0} requires at least one value")]
    EmptyInput(&'static str),
}

pub type StatsResult<T> = Result<T, StatsError>;
