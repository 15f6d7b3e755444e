//! Application layer containing the use cases.
//!
//! A use case takes a request value and returns a typed outcome. Delivery
//! mechanisms (HTTP, CLI, batch files) decide how that outcome is presented by
//! registering callbacks on a [`response::ResponseDispatcher`].

pub mod pay_employee;
pub mod response;
pub mod use_case;
