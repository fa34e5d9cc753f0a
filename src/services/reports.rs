use crate::{
    db::DbPool,
    entities::transaction::{self, PaymentMethod},
    errors::ServiceError,
};
use chrono::{Duration, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use serde::Serialize;
use std::sync::Arc;
use tracing::instrument;

/// Revenue for one calendar day, bucketed by payment method. Debit and
/// credit cards are reported as one card bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySalesSummary {
    pub date: NaiveDate,
    pub total_transactions: u64,
    pub total_revenue: Decimal,
    pub cash_sales: Decimal,
    pub card_sales: Decimal,
    pub qris_sales: Decimal,
    pub receivable_sales: Decimal,
}

impl DailySalesSummary {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            total_transactions: 0,
            total_revenue: Decimal::ZERO,
            cash_sales: Decimal::ZERO,
            card_sales: Decimal::ZERO,
            qris_sales: Decimal::ZERO,
            receivable_sales: Decimal::ZERO,
        }
    }
}

/// Service for sales reporting
#[derive(Clone)]
pub struct ReportService {
    db: Arc<DbPool>,
}

impl ReportService {
    /// Creates a new report service instance
    pub fn new(db: Arc<DbPool>) -> Self {
        Self { db }
    }

    /// Sums transaction totals for the UTC calendar day of `date`.
    /// A day without transactions yields an all-zero summary.
    #[instrument(skip(self))]
    pub async fn daily_sales_summary(
        &self,
        date: NaiveDate,
    ) -> Result<DailySalesSummary, ServiceError> {
        let day_start = date.and_time(NaiveTime::MIN).and_utc();
        let day_end = day_start + Duration::days(1);

        let transactions = transaction::Entity::find()
            .filter(transaction::Column::TransactionDate.gte(day_start))
            .filter(transaction::Column::TransactionDate.lt(day_end))
            .all(&*self.db)
            .await?;

        Ok(summarize(date, &transactions))
    }
}

fn summarize(date: NaiveDate, transactions: &[transaction::Model]) -> DailySalesSummary {
    let mut summary = DailySalesSummary::empty(date);

    for tx in transactions {
        summary.total_transactions += 1;
        summary.total_revenue += tx.total_amount;
        match tx.payment_method {
            PaymentMethod::Cash => summary.cash_sales += tx.total_amount,
            PaymentMethod::DebitCard | PaymentMethod::CreditCard => {
                summary.card_sales += tx.total_amount
            }
            PaymentMethod::Qris => summary.qris_sales += tx.total_amount,
            PaymentMethod::Receivable => summary.receivable_sales += tx.total_amount,
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::transaction::TransactionType;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn paid(total: Decimal, method: PaymentMethod) -> transaction::Model {
        let now = Utc::now();
        transaction::Model {
            id: 0,
            transaction_number: "TXN-TEST".to_string(),
            transaction_type: TransactionType::NonPrescription,
            customer_id: None,
            doctor_name: None,
            patient_name: None,
            subtotal: total,
            discount_amount: Decimal::ZERO,
            total_amount: total,
            payment_method: method,
            cashier_id: 1,
            transaction_date: now,
            created_at: now,
        }
    }

    #[test]
    fn empty_day_is_all_zero() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let summary = summarize(date, &[]);
        assert_eq!(summary.total_transactions, 0);
        assert_eq!(summary.total_revenue, Decimal::ZERO);
        assert_eq!(summary.cash_sales, Decimal::ZERO);
        assert_eq!(summary.card_sales, Decimal::ZERO);
        assert_eq!(summary.qris_sales, Decimal::ZERO);
        assert_eq!(summary.receivable_sales, Decimal::ZERO);
    }

    #[test]
    fn card_bucket_merges_debit_and_credit() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let transactions = vec![
            paid(dec!(100.00), PaymentMethod::Cash),
            paid(dec!(25.50), PaymentMethod::DebitCard),
            paid(dec!(74.50), PaymentMethod::CreditCard),
            paid(dec!(40.00), PaymentMethod::Qris),
            paid(dec!(10.00), PaymentMethod::Receivable),
        ];

        let summary = summarize(date, &transactions);
        assert_eq!(summary.total_transactions, 5);
        assert_eq!(summary.cash_sales, dec!(100.00));
        assert_eq!(summary.card_sales, dec!(100.00));
        assert_eq!(summary.qris_sales, dec!(40.00));
        assert_eq!(summary.receivable_sales, dec!(10.00));
        assert_eq!(summary.total_revenue, dec!(250.00));
    }

    #[test]
    fn revenue_equals_sum_of_buckets() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let transactions = vec![
            paid(dec!(12.34), PaymentMethod::Cash),
            paid(dec!(56.78), PaymentMethod::Qris),
            paid(dec!(9.99), PaymentMethod::DebitCard),
        ];

        let summary = summarize(date, &transactions);
        let bucket_sum = summary.cash_sales
            + summary.card_sales
            + summary.qris_sales
            + summary.receivable_sales;
        assert_eq!(summary.total_revenue, bucket_sum);
    }
}
