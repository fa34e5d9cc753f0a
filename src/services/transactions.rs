use crate::{
    db::DbPool,
    entities::{
        batch, customer,
        transaction::{self, PaymentMethod, TransactionType},
        transaction_item, user,
    },
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

/// Fields for a new checkout transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub transaction_type: TransactionType,
    pub customer_id: Option<i32>,
    pub doctor_name: Option<String>,
    pub patient_name: Option<String>,
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub cashier_id: i32,
}

/// One sale line against a specific batch.
#[derive(Debug, Clone)]
pub struct NewTransactionItem {
    pub transaction_id: i32,
    pub drug_id: i32,
    pub batch_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub discount_amount: Decimal,
    pub subtotal: Decimal,
}

/// Service for checkout transactions and their line items
#[derive(Clone)]
pub struct TransactionService {
    db: Arc<DbPool>,
}

impl TransactionService {
    /// Creates a new transaction service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Records a checkout header. The cashier (and the customer, when one
    /// is attached) must already exist.
    #[instrument(skip(self, new_transaction), fields(cashier_id = new_transaction.cashier_id))]
    pub async fn create_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<transaction::Model, ServiceError> {
        let cashier = user::Entity::find_by_id(new_transaction.cashier_id)
            .one(&*self.db)
            .await?;
        if cashier.is_none() {
            return Err(ServiceError::NotFound(format!(
                "Cashier with id {} not found",
                new_transaction.cashier_id
            )));
        }

        if let Some(customer_id) = new_transaction.customer_id {
            let customer = customer::Entity::find_by_id(customer_id).one(&*self.db).await?;
            if customer.is_none() {
                return Err(ServiceError::NotFound(format!(
                    "Customer with id {} not found",
                    customer_id
                )));
            }
        }

        let now = Utc::now();
        let model = transaction::ActiveModel {
            transaction_number: Set(generate_transaction_number()),
            transaction_type: Set(new_transaction.transaction_type),
            customer_id: Set(new_transaction.customer_id),
            doctor_name: Set(new_transaction.doctor_name),
            patient_name: Set(new_transaction.patient_name),
            subtotal: Set(new_transaction.subtotal),
            discount_amount: Set(new_transaction.discount_amount),
            total_amount: Set(new_transaction.total_amount),
            payment_method: Set(new_transaction.payment_method),
            cashier_id: Set(new_transaction.cashier_id),
            transaction_date: Set(now),
            created_at: Set(now),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(
            transaction_id = created.id,
            transaction_number = %created.transaction_number,
            "Transaction recorded"
        );
        Ok(created)
    }

    /// Records one sale line and takes its quantity out of the batch.
    ///
    /// The decrement is a single conditional update guarded by
    /// `quantity >= requested`, executed in the same database transaction
    /// as the line-item insert, so two concurrent sales against one batch
    /// can never drive it negative. Zero affected rows means the batch is
    /// missing or short; neither path leaves any mutation behind.
    #[instrument(skip(self, new_item), fields(batch_id = new_item.batch_id, quantity = new_item.quantity))]
    pub async fn create_transaction_item(
        &self,
        new_item: NewTransactionItem,
    ) -> Result<transaction_item::Model, ServiceError> {
        if new_item.quantity <= 0 {
            return Err(ServiceError::InvalidInput(
                "quantity must be a positive integer".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let deducted = batch::Entity::update_many()
            .col_expr(
                batch::Column::Quantity,
                Expr::col(batch::Column::Quantity).sub(new_item.quantity),
            )
            .filter(batch::Column::Id.eq(new_item.batch_id))
            .filter(batch::Column::Quantity.gte(new_item.quantity))
            .exec(&txn)
            .await?;

        if deducted.rows_affected == 0 {
            txn.rollback().await?;
            return match batch::Entity::find_by_id(new_item.batch_id).one(&*self.db).await? {
                None => Err(ServiceError::NotFound(format!(
                    "Batch with id {} not found",
                    new_item.batch_id
                ))),
                Some(short) => {
                    warn!(
                        batch_id = short.id,
                        available = short.quantity,
                        requested = new_item.quantity,
                        "Sale rejected for insufficient stock"
                    );
                    Err(ServiceError::InsufficientStock(format!(
                        "batch {} holds {} units, requested {}",
                        short.id, short.quantity, new_item.quantity
                    )))
                }
            };
        }

        let model = transaction_item::ActiveModel {
            transaction_id: Set(new_item.transaction_id),
            drug_id: Set(new_item.drug_id),
            batch_id: Set(new_item.batch_id),
            quantity: Set(new_item.quantity),
            unit_price: Set(new_item.unit_price),
            discount_amount: Set(new_item.discount_amount),
            subtotal: Set(new_item.subtotal),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&txn).await.map_err(ServiceError::from_db)?;

        txn.commit().await?;

        info!(
            item_id = created.id,
            transaction_id = created.transaction_id,
            "Line item recorded"
        );
        Ok(created)
    }
}

fn generate_transaction_number() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("TXN-{}", suffix[..12].to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transaction_numbers_carry_the_prefix() {
        let number = generate_transaction_number();
        assert!(number.starts_with("TXN-"));
        assert_eq!(number.len(), "TXN-".len() + 12);
    }

    #[test]
    fn transaction_numbers_are_unique_enough() {
        let a = generate_transaction_number();
        let b = generate_transaction_number();
        assert_ne!(a, b);
    }
}
