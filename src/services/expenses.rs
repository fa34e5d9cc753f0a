use crate::{
    db::DbPool,
    entities::expense::{self, ExpenseType},
    errors::ServiceError,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct NewExpense {
    pub expense_type: ExpenseType,
    pub description: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub created_by: i32,
}

/// Service for operational expense records
#[derive(Clone)]
pub struct ExpenseService {
    db: Arc<DbPool>,
}

impl ExpenseService {
    /// Creates a new expense service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Records an operational expense
    #[instrument(skip(self, new_expense), fields(created_by = new_expense.created_by))]
    pub async fn create_expense(
        &self,
        new_expense: NewExpense,
    ) -> Result<expense::Model, ServiceError> {
        let model = expense::ActiveModel {
            expense_type: Set(new_expense.expense_type),
            description: Set(new_expense.description),
            amount: Set(new_expense.amount),
            expense_date: Set(new_expense.expense_date),
            created_by: Set(new_expense.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(expense_id = created.id, "Expense recorded");
        Ok(created)
    }
}
