use crate::domain::user::UserId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type PaymentId = Uuid;

/// A persisted record of a monetary transfer request.
///
/// The id is generated at construction and is never caller-supplied; it is
/// the payment's identity for storage purposes. `user_id` is informational
/// only, not an ownership relation. Everything except `message` is immutable
/// once stored.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Payment {
    pub payment_id: PaymentId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub message: String,
}

impl Payment {
    pub fn new(user_id: UserId, amount: Decimal, message: impl Into<String>) -> Self {
        Self {
            payment_id: Uuid::new_v4(),
            user_id,
            amount,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_ids_are_unique() {
        let a = Payment::new(1, dec!(1.0), "msg");
        let b = Payment::new(1, dec!(1.0), "msg");
        assert_ne!(a.payment_id, b.payment_id);
    }

    #[test]
    fn test_payment_serialization_round_trip() {
        let payment = Payment::new(7, dec!(12.5), "Payment from user John");
        let json = serde_json::to_string(&payment).unwrap();
        let back: Payment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payment);
    }
}
