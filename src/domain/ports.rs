use crate::domain::payment::{Payment, PaymentId};
use crate::domain::user::{User, UserId};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// The validation gate every mutating operation passes through.
///
/// Checks are pure and stateless: each one takes a raw input and either
/// returns the validated value or fails with `PaymentError::InvalidInput`.
/// Absent inputs are modelled as `None`.
#[cfg_attr(test, mockall::automock)]
pub trait Validator: Send + Sync {
    /// Fails when the amount is absent or not strictly positive.
    fn validate_amount(&self, amount: Option<Decimal>) -> Result<Decimal>;
    /// Fails when the id is absent.
    fn validate_payment_id(&self, id: Option<PaymentId>) -> Result<PaymentId>;
    /// Fails when the id is absent. Zero and negative ids are accepted.
    fn validate_user_id(&self, id: Option<UserId>) -> Result<UserId>;
    /// Fails when the user is not `Active`.
    fn validate_user(&self, user: &User) -> Result<()>;
    /// Fails when the message is absent or empty.
    fn validate_message(&self, message: Option<String>) -> Result<String>;
}

/// Keyed storage for payment records, unique by payment id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Inserts a payment and returns it. Fails with `AlreadyExists` when a
    /// payment with the same id is already stored.
    async fn save(&self, payment: Payment) -> Result<Payment>;
    /// Looks up a payment by id. "Not found" is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>>;
    /// Returns all stored payments in insertion order.
    async fn find_all(&self) -> Result<Vec<Payment>>;
    /// Replaces the message of the payment with the given id and returns the
    /// updated record. Fails with `NotFound` when no payment has the id.
    async fn edit_message(&self, id: PaymentId, new_message: String) -> Result<Payment>;
}

/// Read-only lookup into the external user directory.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>>;
}

pub type ValidatorBox = Box<dyn Validator>;
pub type PaymentStoreBox = Box<dyn PaymentStore>;
pub type UserDirectoryBox = Box<dyn UserDirectory>;
