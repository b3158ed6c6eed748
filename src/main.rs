use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use overtime_engine::api::{AppState, create_router};
use overtime_engine::calculation::{CalculationInput, PayrollCalculator};
use overtime_engine::config::ConfigLoader;
use overtime_engine::error::PayrollError;
use overtime_engine::export::{ExportFormat, write_report};
use overtime_engine::storage::{EntryStore, JsonFileStore};

#[derive(Parser, Debug)]
#[command(name = "overtime-engine", version, about = "Overtime pay calculator")]
struct Cli {
    /// Configuration directory containing payroll.yaml
    #[arg(long, global = true, env = "OVERTIME_CONFIG", default_value = "./config/default")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, env = "OVERTIME_BIND", default_value = "127.0.0.1:3000")]
        bind: String,
    },

    /// Record overtime hours for a date in an entry file
    Record {
        /// JSON entry file
        #[arg(long)]
        entries: PathBuf,

        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,

        /// Overtime hours (0 clears the date from the report)
        #[arg(long)]
        hours: Decimal,
    },

    /// Price the entries in an entry file and print the report
    Report {
        /// JSON entry file
        #[arg(long)]
        entries: PathBuf,

        /// Employee name
        #[arg(long)]
        name: String,

        /// Monthly salary
        #[arg(long)]
        salary: Decimal,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("overtime_engine=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            eprintln!("❌ {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), PayrollError> {
    match cli.command {
        Commands::Serve { bind } => {
            let config = ConfigLoader::load(&cli.config)?.into_config();
            let app = create_router(AppState::new(PayrollCalculator::new(config)));

            let listener = tokio::net::TcpListener::bind(&bind)
                .await
                .map_err(|e| PayrollError::server(&bind, e))?;
            info!(bind = %bind, config = %cli.config.display(), "Listening");

            axum::serve(listener, app)
                .await
                .map_err(|e| PayrollError::server(&bind, e))
        }

        Commands::Record {
            entries,
            date,
            hours,
        } => {
            let mut store = JsonFileStore::new(entries);
            let mut ledger = store.load_entries()?;
            let previous = ledger.record(date, hours)?;
            store.save_entries(&ledger)?;

            match previous {
                Some(old) => println!("✅ {}: {} h (was {} h)", date, hours, old),
                None => println!("✅ {}: {} h", date, hours),
            }
            Ok(())
        }

        Commands::Report {
            entries,
            name,
            salary,
            format,
        } => {
            let config = ConfigLoader::load(&cli.config)?.into_config();
            let calculator = PayrollCalculator::new(config);
            let ledger = JsonFileStore::new(entries).load_entries()?;

            let report = calculator.calculate(&CalculationInput {
                employee_name: name,
                monthly_salary: Some(salary),
                entries: ledger,
            })?;

            for warning in &report.calendar_warnings {
                eprintln!("⚠️  {}: {}", warning.year, warning.message);
            }

            write_report(io::stdout().lock(), &report, format)
        }
    }
}
