use crate::domain::payment::PaymentId;
use crate::domain::ports::Validator;
use crate::domain::user::{User, UserId, UserStatus};
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// Default `Validator` implementation.
///
/// Stateless, so a single instance can be shared freely and checks can run
/// in any order.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicValidator;

impl BasicValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BasicValidator {
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal> {
        match amount {
            None => Err(PaymentError::InvalidInput("amount is missing".to_string())),
            Some(amount) if amount <= Decimal::ZERO => Err(PaymentError::InvalidInput(format!(
                "amount must be positive, got {amount}"
            ))),
            Some(amount) => Ok(amount),
        }
    }

    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId> {
        id.ok_or_else(|| PaymentError::InvalidInput("payment id is missing".to_string()))
    }

    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId> {
        id.ok_or_else(|| PaymentError::InvalidInput("user id is missing".to_string()))
    }

    fn validate_user(&self, user: &User) -> Result<()> {
        if user.status == UserStatus::Active {
            Ok(())
        } else {
            Err(PaymentError::InvalidInput(format!(
                "user {} is not active",
                user.id
            )))
        }
    }

    fn validate_message(&self, message: Option<String>) -> Result<String> {
        match message {
            None => Err(PaymentError::InvalidInput("message is missing".to_string())),
            Some(message) if message.is_empty() => {
                Err(PaymentError::InvalidInput("message is empty".to_string()))
            }
            Some(message) => Ok(message),
        }
    }
}
