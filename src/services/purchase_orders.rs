use crate::{
    db::DbPool,
    entities::purchase_order::{self, PurchaseOrderStatus},
    errors::ServiceError,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewPurchaseOrder {
    pub supplier_id: i32,
    pub total_amount: Decimal,
    pub order_date: NaiveDate,
    pub expected_delivery: Option<NaiveDate>,
    pub created_by: i32,
}

/// Service for procurement purchase orders
#[derive(Clone)]
pub struct PurchaseOrderService {
    db: Arc<DbPool>,
}

impl PurchaseOrderService {
    /// Creates a new purchase order service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Opens a purchase order against a supplier. Orders start `pending`;
    /// receiving and cancellation are handled outside this service.
    #[instrument(skip(self, new_po), fields(supplier_id = new_po.supplier_id))]
    pub async fn create_purchase_order(
        &self,
        new_po: NewPurchaseOrder,
    ) -> Result<purchase_order::Model, ServiceError> {
        let model = purchase_order::ActiveModel {
            po_number: Set(generate_po_number()),
            supplier_id: Set(new_po.supplier_id),
            status: Set(PurchaseOrderStatus::Pending),
            total_amount: Set(new_po.total_amount),
            order_date: Set(new_po.order_date),
            expected_delivery: Set(new_po.expected_delivery),
            created_by: Set(new_po.created_by),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(po_id = created.id, po_number = %created.po_number, "Purchase order opened");
        Ok(created)
    }
}

fn generate_po_number() -> String {
    format!("PO-{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn po_numbers_carry_the_prefix() {
        let number = generate_po_number();
        assert!(number.starts_with("PO-"));
        assert_ne!(number, generate_po_number());
    }
}
