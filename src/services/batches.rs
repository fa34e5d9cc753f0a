use crate::{
    db::DbPool,
    entities::batch,
    errors::ServiceError,
};
use chrono::{Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fields for a newly received lot.
#[derive(Debug, Clone)]
pub struct NewBatch {
    pub drug_id: i32,
    pub batch_number: String,
    pub expiration_date: NaiveDate,
    pub quantity: i32,
    pub purchase_price: Decimal,
    pub supplier_id: i32,
    pub received_date: NaiveDate,
}

/// Service for batch-level stock
#[derive(Clone)]
pub struct BatchService {
    db: Arc<DbPool>,
}

impl BatchService {
    /// Creates a new batch service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Records a received batch
    #[instrument(skip(self, new_batch), fields(drug_id = new_batch.drug_id, batch_number = %new_batch.batch_number))]
    pub async fn create_batch(&self, new_batch: NewBatch) -> Result<batch::Model, ServiceError> {
        let model = batch::ActiveModel {
            drug_id: Set(new_batch.drug_id),
            batch_number: Set(new_batch.batch_number),
            expiration_date: Set(new_batch.expiration_date),
            quantity: Set(new_batch.quantity),
            purchase_price: Set(new_batch.purchase_price),
            supplier_id: Set(new_batch.supplier_id),
            received_date: Set(new_batch.received_date),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(batch_id = created.id, quantity = created.quantity, "Batch received");
        Ok(created)
    }

    /// Gets a batch by ID
    #[instrument(skip(self))]
    pub async fn get_batch(&self, batch_id: i32) -> Result<Option<batch::Model>, ServiceError> {
        let found = batch::Entity::find_by_id(batch_id).one(&*self.db).await?;

        Ok(found)
    }

    /// All batches of one drug, oldest expiration first (FIFO pick order)
    #[instrument(skip(self))]
    pub async fn get_batches_by_drug(&self, drug_id: i32) -> Result<Vec<batch::Model>, ServiceError> {
        let batches = batch::Entity::find()
            .filter(batch::Column::DrugId.eq(drug_id))
            .order_by_asc(batch::Column::ExpirationDate)
            .all(&*self.db)
            .await?;

        Ok(batches)
    }

    /// Batches expiring within `[today, today + months_ahead]`, both ends
    /// inclusive. Already-expired batches are excluded.
    #[instrument(skip(self))]
    pub async fn get_expiring_batches(
        &self,
        months_ahead: u32,
    ) -> Result<Vec<batch::Model>, ServiceError> {
        let today = Utc::now().date_naive();
        let until = expiry_window_end(today, months_ahead).ok_or_else(|| {
            ServiceError::InvalidInput(format!("months_ahead {} is out of range", months_ahead))
        })?;

        let batches = batch::Entity::find()
            .filter(batch::Column::ExpirationDate.gte(today))
            .filter(batch::Column::ExpirationDate.lte(until))
            .order_by_asc(batch::Column::ExpirationDate)
            .all(&*self.db)
            .await?;

        Ok(batches)
    }
}

fn expiry_window_end(today: NaiveDate, months_ahead: u32) -> Option<NaiveDate> {
    today.checked_add_months(Months::new(months_ahead))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_end_lands_on_same_day_of_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            expiry_window_end(today, 6),
            Some(NaiveDate::from_ymd_opt(2024, 9, 10).unwrap())
        );
    }

    #[test]
    fn window_end_clamps_short_months() {
        // Aug 31 + 6 months clamps to Feb 28/29
        let today = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        assert_eq!(
            expiry_window_end(today, 6),
            Some(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap())
        );
    }

    #[test]
    fn zero_months_keeps_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(expiry_window_end(today, 0), Some(today));
    }
}
