pub use sea_orm_migration::prelude::*;

mod m20260803_101500_create_users_table;
mod m20260803_102240_create_profiles_table;
mod m20260803_103055_create_experiences_table;
mod m20260803_104112_create_projects_table;
mod m20260804_090310_create_skills_table;
mod m20260804_090955_create_tech_stacks_table;
mod m20260804_091820_create_references_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260803_101500_create_users_table::Migration),
            Box::new(m20260803_102240_create_profiles_table::Migration),
            Box::new(m20260803_103055_create_experiences_table::Migration),
            Box::new(m20260803_104112_create_projects_table::Migration),
            Box::new(m20260804_090310_create_skills_table::Migration),
            Box::new(m20260804_090955_create_tech_stacks_table::Migration),
            Box::new(m20260804_091820_create_references_table::Migration),
        ]
    }
}
