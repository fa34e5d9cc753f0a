pub mod batches;
pub mod common;
pub mod customers;
pub mod drugs;
pub mod expenses;
pub mod health;
pub mod purchase_orders;
pub mod reports;
pub mod suppliers;
pub mod transactions;

use crate::db::DbPool;
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub drugs: Arc<crate::services::drugs::DrugService>,
    pub batches: Arc<crate::services::batches::BatchService>,
    pub suppliers: Arc<crate::services::suppliers::SupplierService>,
    pub customers: Arc<crate::services::customers::CustomerService>,
    pub transactions: Arc<crate::services::transactions::TransactionService>,
    pub expenses: Arc<crate::services::expenses::ExpenseService>,
    pub purchase_orders: Arc<crate::services::purchase_orders::PurchaseOrderService>,
    pub reports: Arc<crate::services::reports::ReportService>,
}

impl AppServices {
    /// Build the full services container over one connection pool.
    pub fn new(db: Arc<DbPool>) -> Self {
        Self {
            drugs: Arc::new(crate::services::drugs::DrugService::new(db.clone())),
            batches: Arc::new(crate::services::batches::BatchService::new(db.clone())),
            suppliers: Arc::new(crate::services::suppliers::SupplierService::new(db.clone())),
            customers: Arc::new(crate::services::customers::CustomerService::new(db.clone())),
            transactions: Arc::new(crate::services::transactions::TransactionService::new(
                db.clone(),
            )),
            expenses: Arc::new(crate::services::expenses::ExpenseService::new(db.clone())),
            purchase_orders: Arc::new(crate::services::purchase_orders::PurchaseOrderService::new(
                db.clone(),
            )),
            reports: Arc::new(crate::services::reports::ReportService::new(db)),
        }
    }
}
