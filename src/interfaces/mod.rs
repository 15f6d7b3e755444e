//! Delivery mechanisms for the application layer.
//!
//! Each adapter builds a request, registers callbacks that speak its own
//! language (HTTP statuses, terminal output, CSV rows) and runs the use case.

pub mod cli;
pub mod csv;
pub mod http;
