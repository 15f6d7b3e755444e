use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result, miette};
use payroll::interfaces::cli::{Report, pay_employee};
use payroll::interfaces::csv::employee_reader::EmployeeReader;
use payroll::interfaces::csv::payroll_writer::{PayrollRecord, PayrollWriter};
use payroll::interfaces::http;
use std::fs::File;
use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the payroll HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "PAYROLL_ADDR", default_value = "127.0.0.1:5678")]
        addr: SocketAddr,
    },
    /// Pay a single employee
    Pay {
        /// Employee number
        employee_id: String,
    },
    /// Pay every employee listed in a CSV file with an `employee_id` column
    Batch {
        /// Input CSV file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays usable for results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { addr } => http::serve(addr).await.into_diagnostic()?,
        Command::Pay { employee_id } => match pay_employee(&employee_id).into_diagnostic()? {
            Report::Paid(message) => println!("{message}"),
            Report::Refused(message) => return Err(miette!("{message}")),
        },
        Command::Batch { input } => {
            let file = File::open(input).into_diagnostic()?;
            let reader = EmployeeReader::new(file);
            let stdout = io::stdout();
            let mut writer = PayrollWriter::new(stdout.lock());

            for request in reader.requests() {
                match request {
                    Ok(request) => {
                        let record = PayrollRecord::pay(request).into_diagnostic()?;
                        writer.write_record(&record).into_diagnostic()?;
                    }
                    Err(e) => eprintln!("Error reading employee: {}", e),
                }
            }

            writer.flush().into_diagnostic()?;
        }
    }

    Ok(())
}
