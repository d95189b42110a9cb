use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::{PaymentStoreBox, UserDirectoryBox, ValidatorBox};
use crate::domain::user::UserId;
use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;

/// The business-logic layer composing validation, user resolution and store
/// access into each public operation.
///
/// Validation of raw inputs always runs before any store or directory
/// access, and primitive checks precede entity-level checks. When several
/// problems exist at once, the first invalid input wins; callers can rely on
/// that ordering. No operation leaves the store partially modified on
/// failure.
pub struct PaymentOrchestrator {
    validator: ValidatorBox,
    payment_store: PaymentStoreBox,
    user_directory: UserDirectoryBox,
}

impl PaymentOrchestrator {
    /// Creates a new `PaymentOrchestrator` instance.
    ///
    /// # Arguments
    ///
    /// * `validator` - The validation gate for raw inputs.
    /// * `payment_store` - The store for payment records.
    /// * `user_directory` - The external directory resolving user ids.
    pub fn new(
        validator: ValidatorBox,
        payment_store: PaymentStoreBox,
        user_directory: UserDirectoryBox,
    ) -> Self {
        Self {
            validator,
            payment_store,
            user_directory,
        }
    }

    /// Creates and persists a payment on behalf of the given user.
    ///
    /// The referenced user must exist in the directory and be active. The
    /// stored payment carries a generated message of the form
    /// `"Payment from user {name}"`.
    pub async fn create_payment(
        &self,
        user_id: Option<UserId>,
        amount: Option<Decimal>,
    ) -> Result<Payment> {
        let user_id = self.validator.validate_user_id(user_id)?;
        let amount = self.validator.validate_amount(amount)?;

        let user = self
            .user_directory
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| PaymentError::NotFound(format!("no user with id {user_id}")))?;
        self.validator.validate_user(&user)?;

        let payment = Payment::new(user_id, amount, format!("Payment from user {}", user.name));
        self.payment_store.save(payment).await
    }

    /// Replaces the message of an existing payment.
    ///
    /// Propagates the store's `NotFound` unchanged when no payment has the
    /// given id.
    pub async fn edit_payment_message(
        &self,
        payment_id: Option<PaymentId>,
        new_message: Option<String>,
    ) -> Result<Payment> {
        let payment_id = self.validator.validate_payment_id(payment_id)?;
        let new_message = self.validator.validate_message(new_message)?;
        self.payment_store.edit_message(payment_id, new_message).await
    }

    /// Returns all payments whose amount is strictly greater than the
    /// threshold, in the store's enumeration order.
    ///
    /// The threshold is not validated; anything below every stored amount
    /// returns everything.
    pub async fn get_all_by_amount_exceeding(&self, threshold: Decimal) -> Result<Vec<Payment>> {
        let payments = self.payment_store.find_all().await?;
        Ok(payments
            .into_iter()
            .filter(|payment| payment.amount > threshold)
            .collect())
    }
}
