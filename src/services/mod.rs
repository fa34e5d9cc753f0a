pub mod batches;
pub mod customers;
pub mod drugs;
pub mod expenses;
pub mod purchase_orders;
pub mod reports;
pub mod suppliers;
pub mod transactions;
