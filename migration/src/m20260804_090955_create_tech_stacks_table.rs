use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechStacks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TechStacks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(TechStacks::Category).text().not_null())
                    .col(ColumnDef::new(TechStacks::Name).text().not_null())
                    .col(ColumnDef::new(TechStacks::Icon).text())
                    .col(
                        ColumnDef::new(TechStacks::Preferred)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(TechStacks::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(TechStacks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(TechStacks::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TechStacks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TechStacks {
    Table,
    Id,
    Category,
    Name,
    Icon,
    Preferred,
    Order,
    CreatedAt,
    UpdatedAt,
}
