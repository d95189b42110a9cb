use crate::domain::payment::{Payment, PaymentId};
use crate::domain::ports::{PaymentStore, UserDirectory};
use crate::domain::user::{User, UserId};
use crate::error::{PaymentError, Result};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for payments.
///
/// Uses `Arc<RwLock<IndexMap<PaymentId, Payment>>>` to allow shared
/// concurrent access. The `IndexMap` preserves insertion order, which is the
/// enumeration order `find_all` promises.
#[derive(Default, Clone)]
pub struct InMemoryPaymentStore {
    payments: Arc<RwLock<IndexMap<PaymentId, Payment>>>,
}

impl InMemoryPaymentStore {
    /// Creates a new, empty in-memory payment store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn save(&self, payment: Payment) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.payment_id) {
            return Err(PaymentError::AlreadyExists(payment.payment_id));
        }
        payments.insert(payment.payment_id, payment.clone());
        Ok(payment)
    }

    async fn find_by_id(&self, id: PaymentId) -> Result<Option<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Payment>> {
        let payments = self.payments.read().await;
        Ok(payments.values().cloned().collect())
    }

    async fn edit_message(&self, id: PaymentId, new_message: String) -> Result<Payment> {
        let mut payments = self.payments.write().await;
        let payment = payments
            .get_mut(&id)
            .ok_or_else(|| PaymentError::NotFound(format!("no payment with id {id}")))?;
        payment.message = new_message;
        Ok(payment.clone())
    }
}

/// An in-memory user directory with a fixed set of users.
///
/// Read-only: lookups return clones, nothing ever mutates the records.
#[derive(Default, Clone)]
pub struct InMemoryUserDirectory {
    users: Arc<HashMap<UserId, User>>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: Arc::new(users.into_iter().map(|user| (user.id, user)).collect()),
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self.users.get(&id).cloned())
    }
}
