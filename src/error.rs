use crate::domain::payment::PaymentId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("payment {0} already exists")]
    AlreadyExists(PaymentId),
    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
