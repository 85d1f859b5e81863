pub mod sea_orm_store;
