use crate::application::pay_employee::{PaidEmployee, PayEmployee, PayEmployeeRequest};
use crate::application::response::ResponseDispatcher;
use crate::application::use_case::UseCase;
use crate::error::{PayEmployeeError, Result};

/// What the terminal should show for a single payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    /// Printed on stdout.
    Paid(String),
    /// Reported as a diagnostic on stderr with a failing exit code.
    Refused(String),
}

/// Runs the pay-employee use case for one id given on the command line.
pub fn pay_employee(employee_id: &str) -> Result<Report> {
    let request = PayEmployeeRequest::new(employee_id);
    let raw_id = employee_id.to_string();

    let dispatcher = ResponseDispatcher::respond(|r| {
        r.register_success(|paid: PaidEmployee| Report::Paid(paid.message))
            .register_failure(move |e: PayEmployeeError| {
                Report::Refused(format!("could not find {raw_id}: {e}"))
            });
    });

    PayEmployee::new().perform_with(request, dispatcher)
}
