//! SeaORM entity definitions.

pub mod employee;
