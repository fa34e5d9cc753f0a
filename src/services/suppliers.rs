use crate::{db::DbPool, entities::supplier, errors::ServiceError};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct NewSupplier {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Service for managing suppliers
#[derive(Clone)]
pub struct SupplierService {
    db: Arc<DbPool>,
}

impl SupplierService {
    /// Creates a new supplier service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Creates a new supplier
    #[instrument(skip(self, new_supplier), fields(name = %new_supplier.name))]
    pub async fn create_supplier(
        &self,
        new_supplier: NewSupplier,
    ) -> Result<supplier::Model, ServiceError> {
        let model = supplier::ActiveModel {
            name: Set(new_supplier.name),
            contact_person: Set(new_supplier.contact_person),
            phone: Set(new_supplier.phone),
            email: Set(new_supplier.email),
            address: Set(new_supplier.address),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(supplier_id = created.id, "Supplier created");
        Ok(created)
    }

    /// Lists all suppliers
    #[instrument(skip(self))]
    pub async fn list_suppliers(&self) -> Result<Vec<supplier::Model>, ServiceError> {
        let suppliers = supplier::Entity::find()
            .order_by_asc(supplier::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(suppliers)
    }
}
