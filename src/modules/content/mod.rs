//! The generic CRUD resource engine and the five collection resources it
//! serves. The singleton profile lives in its own module.

pub mod adapter;
pub mod application;
pub mod resources;
