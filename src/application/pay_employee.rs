use super::use_case::UseCase;
use crate::domain::employee::EmployeeId;
use crate::error::PayEmployeeError;
use std::fmt;
use tracing::debug;

/// Input to [`PayEmployee`]: the employee id exactly as the caller supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayEmployeeRequest {
    employee_id: String,
}

impl PayEmployeeRequest {
    pub fn new(employee_id: impl Into<String>) -> Self {
        Self {
            employee_id: employee_id.into(),
        }
    }

    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

/// Confirmation that an employee was paid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaidEmployee {
    pub employee_id: EmployeeId,
    pub message: String,
}

impl fmt::Display for PaidEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Pays an employee if their number is within the payable range.
#[derive(Debug, Default, Clone, Copy)]
pub struct PayEmployee;

impl PayEmployee {
    pub fn new() -> Self {
        Self
    }
}

impl UseCase for PayEmployee {
    type Request = PayEmployeeRequest;
    type Response = PaidEmployee;
    type Error = PayEmployeeError;

    fn perform(&self, request: PayEmployeeRequest) -> Result<PaidEmployee, PayEmployeeError> {
        let employee_id: EmployeeId = request.employee_id().parse()?;

        if !employee_id.is_payable() {
            debug!(%employee_id, "refusing to pay employee");
            return Err(PayEmployeeError::IllegalEmployeeNumber {
                id: employee_id.value(),
            });
        }

        debug!(%employee_id, "paying employee");
        Ok(PaidEmployee {
            employee_id,
            message: format!("paid employee {}", request.employee_id()),
        })
    }
}
