//! The singleton resource: at most one profile row is ever meaningful, so the
//! routes carry no ids and PUT doubles as create-on-first-write.

pub mod adapter;
pub mod application;
