use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // "references" is a reserved word; sea-query quotes every identifier,
        // so the table name is safe.
        manager
            .create_table(
                Table::create()
                    .table(References::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(References::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(References::Name).text().not_null())
                    .col(ColumnDef::new(References::Position).text().not_null())
                    .col(ColumnDef::new(References::Company).text().not_null())
                    .col(ColumnDef::new(References::Relationship).text().not_null())
                    .col(ColumnDef::new(References::Testimonial).text().not_null())
                    .col(ColumnDef::new(References::Email).text())
                    .col(ColumnDef::new(References::Phone).text())
                    .col(ColumnDef::new(References::Linkedin).text())
                    .col(ColumnDef::new(References::Avatar).text())
                    .col(
                        ColumnDef::new(References::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(References::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(References::UpdatedAt)
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
            .drop_table(Table::drop().table(References::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum References {
    Table,
    Id,
    Name,
    Position,
    Company,
    Relationship,
    Testimonial,
    Email,
    Phone,
    Linkedin,
    Avatar,
    Order,
    CreatedAt,
    UpdatedAt,
}
