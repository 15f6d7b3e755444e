use crate::application::pay_employee::PayEmployeeRequest;
use crate::error::{PayrollError, Result};
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct EmployeeRow {
    employee_id: String,
}

/// Reads pay requests from a CSV source with an `employee_id` column.
///
/// Whitespace around fields is trimmed and extra columns are ignored. Ids are
/// passed through as text; validating them is the use case's job.
pub struct EmployeeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EmployeeReader<R> {
    /// Creates a new `EmployeeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads one request per row.
    pub fn requests(self) -> impl Iterator<Item = Result<PayEmployeeRequest>> {
        self.reader.into_deserialize().map(|row| {
            row.map(|EmployeeRow { employee_id }| PayEmployeeRequest::new(employee_id))
                .map_err(PayrollError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "employee_id, name\n1, Ada\n 7 , Grace\nabc, Linus";
        let reader = EmployeeReader::new(data.as_bytes());
        let results: Vec<Result<PayEmployeeRequest>> = reader.requests().collect();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().employee_id(), "1");
        assert_eq!(results[1].as_ref().unwrap().employee_id(), "7");
        // Non-numeric ids are read as-is
        assert_eq!(results[2].as_ref().unwrap().employee_id(), "abc");
    }

    #[test]
    fn test_reader_missing_column() {
        let data = "id\n1";
        let reader = EmployeeReader::new(data.as_bytes());
        let results: Vec<Result<PayEmployeeRequest>> = reader.requests().collect();

        assert!(matches!(results[0], Err(PayrollError::CsvError(_))));
    }
}
