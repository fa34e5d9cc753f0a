use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_suppliers_table::Migration),
            Box::new(m20240101_000003_create_customers_table::Migration),
            Box::new(m20240101_000004_create_drugs_table::Migration),
            Box::new(m20240101_000005_create_batches_table::Migration),
            Box::new(m20240101_000006_create_transactions_tables::Migration),
            Box::new(m20240101_000007_create_expenses_table::Migration),
            Box::new(m20240101_000008_create_purchase_orders_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_users_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_users_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Users::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Users::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Users::Username)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Users::FullName).string().not_null())
                        .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                        .col(ColumnDef::new(Users::Role).string().not_null())
                        .col(
                            ColumnDef::new(Users::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(ColumnDef::new(Users::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Users::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Users {
        Table,
        Id,
        Username,
        FullName,
        PasswordHash,
        Role,
        IsActive,
        CreatedAt,
    }
}

mod m20240101_000002_create_suppliers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_suppliers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::ContactPerson).string().null())
                        .col(ColumnDef::new(Suppliers::Phone).string().null())
                        .col(ColumnDef::new(Suppliers::Email).string().null())
                        .col(ColumnDef::new(Suppliers::Address).string().null())
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Name,
        ContactPerson,
        Phone,
        Email,
        Address,
        CreatedAt,
    }
}

mod m20240101_000003_create_customers_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_customers_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Customers::Name).string().not_null())
                        .col(ColumnDef::new(Customers::Phone).string().null())
                        .col(ColumnDef::new(Customers::Email).string().null())
                        .col(ColumnDef::new(Customers::Address).string().null())
                        .col(ColumnDef::new(Customers::InsuranceInfo).string().null())
                        .col(ColumnDef::new(Customers::CreatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Customers {
        Table,
        Id,
        Name,
        Phone,
        Email,
        Address,
        InsuranceInfo,
        CreatedAt,
    }
}

mod m20240101_000004_create_drugs_table {

    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_drugs_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Drugs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Drugs::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Drugs::Name).string().not_null())
                        .col(ColumnDef::new(Drugs::ActiveIngredient).string().not_null())
                        .col(ColumnDef::new(Drugs::Producer).string().not_null())
                        .col(ColumnDef::new(Drugs::Category).string_len(32).not_null())
                        .col(ColumnDef::new(Drugs::Unit).string().not_null())
                        .col(
                            ColumnDef::new(Drugs::PurchasePrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Drugs::PrescriptionPrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Drugs::GeneralPrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Drugs::InsurancePrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Drugs::Barcode).string().null())
                        .col(
                            ColumnDef::new(Drugs::MinimumStock)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Drugs::StorageLocation).string().null())
                        .col(ColumnDef::new(Drugs::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Drugs::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            // Search hits name, active ingredient and barcode
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_drugs_name")
                        .table(Drugs::Table)
                        .col(Drugs::Name)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_drugs_barcode")
                        .table(Drugs::Table)
                        .col(Drugs::Barcode)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Drugs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Drugs {
        Table,
        Id,
        Name,
        ActiveIngredient,
        Producer,
        Category,
        Unit,
        PurchasePrice,
        PrescriptionPrice,
        GeneralPrice,
        InsurancePrice,
        Barcode,
        MinimumStock,
        StorageLocation,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000005_create_batches_table {

    use super::m20240101_000002_create_suppliers_table::Suppliers;
    use super::m20240101_000004_create_drugs_table::Drugs;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_batches_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Batches::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Batches::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Batches::DrugId).integer().not_null())
                        .col(ColumnDef::new(Batches::BatchNumber).string().not_null())
                        .col(ColumnDef::new(Batches::ExpirationDate).date().not_null())
                        .col(ColumnDef::new(Batches::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(Batches::PurchasePrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Batches::SupplierId).integer().not_null())
                        .col(ColumnDef::new(Batches::ReceivedDate).date().not_null())
                        .col(ColumnDef::new(Batches::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_batches_drug_id")
                                .from(Batches::Table, Batches::DrugId)
                                .to(Drugs::Table, Drugs::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_batches_supplier_id")
                                .from(Batches::Table, Batches::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_batches_drug_id")
                        .table(Batches::Table)
                        .col(Batches::DrugId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_batches_expiration_date")
                        .table(Batches::Table)
                        .col(Batches::ExpirationDate)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Batches::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Batches {
        Table,
        Id,
        DrugId,
        BatchNumber,
        ExpirationDate,
        Quantity,
        PurchasePrice,
        SupplierId,
        ReceivedDate,
        CreatedAt,
    }
}

mod m20240101_000006_create_transactions_tables {

    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000003_create_customers_table::Customers;
    use super::m20240101_000004_create_drugs_table::Drugs;
    use super::m20240101_000005_create_batches_table::Batches;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_transactions_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Transactions::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Transactions::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Transactions::TransactionNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Transactions::Type).string_len(32).not_null())
                        .col(ColumnDef::new(Transactions::CustomerId).integer().null())
                        .col(ColumnDef::new(Transactions::DoctorName).string().null())
                        .col(ColumnDef::new(Transactions::PatientName).string().null())
                        .col(
                            ColumnDef::new(Transactions::Subtotal)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::DiscountAmount)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Transactions::TotalAmount)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::PaymentMethod)
                                .string_len(32)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Transactions::CashierId).integer().not_null())
                        .col(
                            ColumnDef::new(Transactions::TransactionDate)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Transactions::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transactions_customer_id")
                                .from(Transactions::Table, Transactions::CustomerId)
                                .to(Customers::Table, Customers::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transactions_cashier_id")
                                .from(Transactions::Table, Transactions::CashierId)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;

            // Daily summaries scan by timestamp
            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_transactions_transaction_date")
                        .table(Transactions::Table)
                        .col(Transactions::TransactionDate)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(TransactionItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(TransactionItems::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::TransactionId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::DrugId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::BatchId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::UnitPrice)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::DiscountAmount)
                                .decimal_len(10, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::Subtotal)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(TransactionItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transaction_items_transaction_id")
                                .from(TransactionItems::Table, TransactionItems::TransactionId)
                                .to(Transactions::Table, Transactions::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transaction_items_drug_id")
                                .from(TransactionItems::Table, TransactionItems::DrugId)
                                .to(Drugs::Table, Drugs::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_transaction_items_batch_id")
                                .from(TransactionItems::Table, TransactionItems::BatchId)
                                .to(Batches::Table, Batches::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_transaction_items_transaction_id")
                        .table(TransactionItems::Table)
                        .col(TransactionItems::TransactionId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(TransactionItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Transactions::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Transactions {
        Table,
        Id,
        TransactionNumber,
        Type,
        CustomerId,
        DoctorName,
        PatientName,
        Subtotal,
        DiscountAmount,
        TotalAmount,
        PaymentMethod,
        CashierId,
        TransactionDate,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum TransactionItems {
        Table,
        Id,
        TransactionId,
        DrugId,
        BatchId,
        Quantity,
        UnitPrice,
        DiscountAmount,
        Subtotal,
        CreatedAt,
    }
}

mod m20240101_000007_create_expenses_table {

    use super::m20240101_000001_create_users_table::Users;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_expenses_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Expenses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Expenses::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Expenses::Type).string_len(32).not_null())
                        .col(ColumnDef::new(Expenses::Description).string().not_null())
                        .col(
                            ColumnDef::new(Expenses::Amount)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Expenses::ExpenseDate).date().not_null())
                        .col(ColumnDef::new(Expenses::CreatedBy).integer().not_null())
                        .col(ColumnDef::new(Expenses::CreatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_expenses_created_by")
                                .from(Expenses::Table, Expenses::CreatedBy)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Expenses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Expenses {
        Table,
        Id,
        Type,
        Description,
        Amount,
        ExpenseDate,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240101_000008_create_purchase_orders_table {

    use super::m20240101_000001_create_users_table::Users;
    use super::m20240101_000002_create_suppliers_table::Suppliers;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_purchase_orders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PurchaseOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseOrders::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::PoNumber)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::SupplierId)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::Status)
                                .string_len(32)
                                .not_null()
                                .default("pending"),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::TotalAmount)
                                .decimal_len(10, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(PurchaseOrders::OrderDate).date().not_null())
                        .col(
                            ColumnDef::new(PurchaseOrders::ExpectedDelivery)
                                .date()
                                .null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::CreatedBy)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_purchase_orders_supplier_id")
                                .from(PurchaseOrders::Table, PurchaseOrders::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_purchase_orders_created_by")
                                .from(PurchaseOrders::Table, PurchaseOrders::CreatedBy)
                                .to(Users::Table, Users::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_purchase_orders_supplier_id")
                        .table(PurchaseOrders::Table)
                        .col(PurchaseOrders::SupplierId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PurchaseOrders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum PurchaseOrders {
        Table,
        Id,
        PoNumber,
        SupplierId,
        Status,
        TotalAmount,
        OrderDate,
        ExpectedDelivery,
        CreatedBy,
        CreatedAt,
    }
}
