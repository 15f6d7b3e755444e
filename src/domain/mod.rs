//! Domain layer: value objects and business rules with no knowledge of how
//! they are delivered.

pub mod employee;
