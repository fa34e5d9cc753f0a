use crate::{
    db::DbPool,
    entities::drug::{self, DrugCategory},
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, Statement,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Fields for a new catalog entry.
#[derive(Debug, Clone)]
pub struct NewDrug {
    pub name: String,
    pub active_ingredient: String,
    pub producer: String,
    pub category: DrugCategory,
    pub unit: String,
    pub purchase_price: Decimal,
    pub prescription_price: Decimal,
    pub general_price: Decimal,
    pub insurance_price: Decimal,
    pub barcode: Option<String>,
    pub minimum_stock: i32,
    pub storage_location: Option<String>,
}

/// Low-stock compares the summed batch quantities per drug against its
/// minimum; a drug without batches counts as zero stock.
const LOW_STOCK_SQL: &str = r#"
SELECT d.* FROM drugs d
LEFT JOIN batches b ON b.drug_id = d.id
GROUP BY d.id
HAVING COALESCE(SUM(b.quantity), 0) < d.minimum_stock
"#;

/// Service for the drug catalog
#[derive(Clone)]
pub struct DrugService {
    db: Arc<DbPool>,
}

impl DrugService {
    /// Creates a new drug service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Creates a new drug in the catalog
    #[instrument(skip(self, new_drug), fields(name = %new_drug.name))]
    pub async fn create_drug(&self, new_drug: NewDrug) -> Result<drug::Model, ServiceError> {
        let now = Utc::now();
        let model = drug::ActiveModel {
            name: Set(new_drug.name),
            active_ingredient: Set(new_drug.active_ingredient),
            producer: Set(new_drug.producer),
            category: Set(new_drug.category),
            unit: Set(new_drug.unit),
            purchase_price: Set(new_drug.purchase_price),
            prescription_price: Set(new_drug.prescription_price),
            general_price: Set(new_drug.general_price),
            insurance_price: Set(new_drug.insurance_price),
            barcode: Set(new_drug.barcode),
            minimum_stock: Set(new_drug.minimum_stock),
            storage_location: Set(new_drug.storage_location),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(ServiceError::from_db)?;

        info!(drug_id = created.id, "Drug created");
        Ok(created)
    }

    /// Lists the whole catalog in insertion order
    #[instrument(skip(self))]
    pub async fn list_drugs(&self) -> Result<Vec<drug::Model>, ServiceError> {
        let drugs = drug::Entity::find()
            .order_by_asc(drug::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(drugs)
    }

    /// Case-insensitive substring search over name, active ingredient and
    /// barcode. A blank query returns nothing without touching the store.
    #[instrument(skip(self))]
    pub async fn search_drugs(&self, query: &str) -> Result<Vec<drug::Model>, ServiceError> {
        let term = query.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = format!("%{}%", term.to_lowercase());
        let matches_pattern = |column: drug::Column| {
            Expr::expr(Func::lower(Expr::col((drug::Entity, column)))).like(pattern.clone())
        };

        let drugs = drug::Entity::find()
            .filter(
                Condition::any()
                    .add(matches_pattern(drug::Column::Name))
                    .add(matches_pattern(drug::Column::ActiveIngredient))
                    .add(matches_pattern(drug::Column::Barcode)),
            )
            .order_by_asc(drug::Column::Id)
            .all(&*self.db)
            .await?;

        Ok(drugs)
    }

    /// Drugs whose total batch stock sits below their configured minimum
    #[instrument(skip(self))]
    pub async fn low_stock_drugs(&self) -> Result<Vec<drug::Model>, ServiceError> {
        let backend = self.db.get_database_backend();
        let drugs = drug::Entity::find()
            .from_raw_sql(Statement::from_string(backend, LOW_STOCK_SQL))
            .all(&*self.db)
            .await?;

        Ok(drugs)
    }
}
