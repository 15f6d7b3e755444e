use crate::application::pay_employee::{PaidEmployee, PayEmployee, PayEmployeeRequest};
use crate::application::response::{Outcome, ResponseDispatcher};
use crate::application::use_case::UseCase;
use crate::error::{PayEmployeeError, Result};
use serde::Serialize;
use std::io::Write;

/// One output row of a payroll batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayrollRecord {
    pub employee_id: String,
    pub outcome: Outcome,
    pub message: String,
}

impl PayrollRecord {
    /// Runs the pay-employee use case and turns its outcome into a row.
    pub fn pay(request: PayEmployeeRequest) -> Result<Self> {
        let success_id = request.employee_id().to_string();
        let failure_id = success_id.clone();

        let dispatcher = ResponseDispatcher::respond(|r| {
            r.register_success(move |paid: PaidEmployee| PayrollRecord {
                employee_id: success_id,
                outcome: Outcome::Success,
                message: paid.message,
            })
            .register_failure(move |e: PayEmployeeError| PayrollRecord {
                message: format!("could not find {failure_id}: {e}"),
                employee_id: failure_id,
                outcome: Outcome::Failure,
            });
        });

        PayEmployee::new().perform_with(request, dispatcher)
    }
}

/// Writes payroll rows as CSV with an `employee_id,outcome,message` header.
pub struct PayrollWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> PayrollWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_record(&mut self, record: &PayrollRecord) -> Result<()> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_success_record() {
        let record = PayrollRecord::pay(PayEmployeeRequest::new("2")).unwrap();
        assert_eq!(
            record,
            PayrollRecord {
                employee_id: "2".to_string(),
                outcome: Outcome::Success,
                message: "paid employee 2".to_string(),
            }
        );
    }

    #[test]
    fn test_pay_failure_record() {
        let record = PayrollRecord::pay(PayEmployeeRequest::new("9")).unwrap();
        assert_eq!(record.outcome, Outcome::Failure);
        assert_eq!(record.message, "could not find 9: Illegal employee number!");
    }

    #[test]
    fn test_writer_output() {
        let mut buf = Vec::new();
        {
            let mut writer = PayrollWriter::new(&mut buf);
            for id in ["1", "3"] {
                let record = PayrollRecord::pay(PayEmployeeRequest::new(id)).unwrap();
                writer.write_record(&record).unwrap();
            }
            writer.flush().unwrap();
        }

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            vec![
                "employee_id,outcome,message",
                "1,success,paid employee 1",
                "3,failure,could not find 3: Illegal employee number!",
            ]
        );
    }
}
