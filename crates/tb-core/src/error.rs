use thiserror::Error;

pub type TbResult<T> = Result<T, TbError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TbError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
