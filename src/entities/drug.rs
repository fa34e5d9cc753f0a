use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Regulatory classification printed on the drug label; drives how a drug
/// may be dispensed (narcotics require a prescription, free drugs do not).
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "snake_case")]
pub enum DrugCategory {
    #[sea_orm(string_value = "hard")]
    Hard,
    #[sea_orm(string_value = "free")]
    Free,
    #[sea_orm(string_value = "limited_free")]
    LimitedFree,
    #[sea_orm(string_value = "narcotics_psychotropics")]
    NarcoticsPsychotropics,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "drugs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub active_ingredient: String,
    pub producer: String,
    pub category: DrugCategory,
    pub unit: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub purchase_price: rust_decimal::Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub prescription_price: rust_decimal::Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub general_price: rust_decimal::Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub insurance_price: rust_decimal::Decimal,
    pub barcode: Option<String>,
    pub minimum_stock: i32,
    pub storage_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::batch::Entity")]
    Batches,
    #[sea_orm(has_many = "super::transaction_item::Entity")]
    TransactionItems,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batches.def()
    }
}

impl Related<super::transaction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransactionItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
