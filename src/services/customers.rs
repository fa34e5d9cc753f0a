use crate::{db::DbPool, entities::customer, errors::ServiceError};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, Set};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub insurance_info: Option<String>,
}

/// Service for managing customers
#[derive(Clone)]
pub struct CustomerService {
    db: Arc<DbPool>,
}

impl CustomerService {
    /// Creates a new customer service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Creates a new customer
    #[instrument(skip(self, new_customer), fields(name = %new_customer.name))]
    pub async fn create_customer(
        &self,
        new_customer: NewCustomer,
    ) -> Result<customer::Model, ServiceError> {
        let model = customer::ActiveModel {
            name: Set(new_customer.name),
            phone: Set(new_customer.phone),
            email: Set(new_customer.email),
            address: Set(new_customer.address),
            insurance_info: Set(new_customer.insurance_info),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(customer_id = created.id, "Customer created");
        Ok(created)
    }
}
