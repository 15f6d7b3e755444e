use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

#[test]
fn test_batch_trims_and_ignores_extra_columns() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "employee_id, department").unwrap();
    writeln!(csv, " 1 , accounting").unwrap();
    writeln!(csv, "10, sales").unwrap();

    let mut cmd = Command::new(cargo_bin!("payroll"));
    cmd.arg("batch").arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,success,paid employee 1"))
        .stdout(predicate::str::contains(
            "10,failure,could not find 10: Illegal employee number!",
        ));
}

#[test]
fn test_batch_reports_unreadable_rows() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    // Wrong header: every row is missing the employee_id column
    writeln!(csv, "id").unwrap();
    writeln!(csv, "1").unwrap();

    let mut cmd = Command::new(cargo_bin!("payroll"));
    cmd.arg("batch").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading employee"))
        .stdout(predicate::str::contains("success").not());
}

#[test]
fn test_batch_empty_ids_are_refused() {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "employee_id,name").unwrap();
    writeln!(csv, ",nobody").unwrap();
    writeln!(csv, "2,somebody").unwrap();

    let mut cmd = Command::new(cargo_bin!("payroll"));
    cmd.arg("batch").arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "failure,could not find : Malformed employee number!",
        ))
        .stdout(predicate::str::contains("2,success,paid employee 2"));
}
