use std::path::PathBuf;

use chrono::{Local, NaiveDate, Utc};
use clap::{Args, Parser, Subcommand, ValueEnum};
use settlement_comparator::api::{AppState, create_router};
use settlement_comparator::calculation::compare_scenarios_audited;
use settlement_comparator::config::ConfigLoader;
use settlement_comparator::error::EngineResult;
use settlement_comparator::export::render_summary;
use settlement_comparator::form::SettlementForm;
use settlement_comparator::models::{AuditTrace, ComparisonReport};
use settlement_comparator::telemetry;
use tracing::info;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[derive(Parser, Debug)]
#[command(
    name = "settlement-comparator",
    about = "Compare resignation against indirect termination settlements",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Run a single comparison and print it
    Compare(CompareArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
    /// Configuration directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CompareArgs {
    /// Gross monthly salary (e.g. 3000 or 3.000,00)
    #[arg(long)]
    salary: String,
    /// Severance fund balance
    #[arg(long)]
    fund: String,
    /// Hire date (YYYY-MM-DD)
    #[arg(long)]
    hire_date: String,
    /// Exit date (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    exit_date: Option<String>,
    /// Reason tag: harassment, wage_delay, fund_non_payment or voluntary_exit
    #[arg(long)]
    reason: String,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Configuration directory
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> EngineResult<()> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Compare(args) => run_compare(args),
    }
}

async fn run_server(mut args: ServeArgs) -> EngineResult<()> {
    telemetry::init(telemetry::DEFAULT_LOG_LEVEL)?;

    let config_dir = args
        .config
        .take()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
    let mut loader = ConfigLoader::load(&config_dir)?;

    let server = loader.config_mut().server_mut();
    if let Some(host) = args.host.take() {
        server.host = host;
    }
    if let Some(port) = args.port.take() {
        server.port = port;
    }

    let addr = loader.config().server().address();
    info!(
        name = %loader.metadata().name,
        version = %loader.metadata().version,
        config = %config_dir.display(),
        %addr,
        "settlement comparator ready"
    );

    let app = create_router(AppState::new(loader));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn run_compare(args: CompareArgs) -> EngineResult<()> {
    let output = render_compare(args, Local::now().date_naive())?;
    println!("{output}");
    Ok(())
}

/// Runs one comparison and renders it in the requested format.
///
/// A blank exit date falls back to `today`.
fn render_compare(args: CompareArgs, today: NaiveDate) -> EngineResult<String> {
    let form = SettlementForm {
        gross_monthly_salary: args.salary,
        severance_fund_balance: args.fund,
        hire_date: args.hire_date,
        exit_date: args.exit_date.unwrap_or_default(),
        reason: args.reason,
    };
    let input = form.submit(today)?;

    let start_time = std::time::Instant::now();
    let audited = compare_scenarios_audited(&input);
    let duration_us = start_time.elapsed().as_micros() as u64;

    match args.format {
        OutputFormat::Text => {
            let config_dir = args
                .config
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));
            let loader = ConfigLoader::load(config_dir)?;
            Ok(format!(
                "{}\n\n{}",
                loader.metadata().name,
                render_summary(&input, &audited.result)
            ))
        }
        OutputFormat::Json => {
            let report = ComparisonReport {
                calculation_id: uuid::Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                input,
                result: audited.result,
                audit_trace: AuditTrace {
                    steps: audited.audit_steps,
                    duration_us,
                },
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}
