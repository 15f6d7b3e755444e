//! Batch delivery: employee ids in, one CSV outcome row per id out.

pub mod employee_reader;
pub mod payroll_writer;
