use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymethods::application::checkout::Checkout;
use paymethods::domain::InstallmentPlan;
use paymethods::interfaces::csv::receipt_writer::{ReceiptFormat, ReceiptWriter};
use paymethods::interfaces::csv::request_reader::RequestReader;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payment requests CSV file
    input: PathBuf,

    /// Installments for Klarna requests that do not specify a count
    #[arg(long, default_value_t = InstallmentPlan::DEFAULT_INSTALLMENTS)]
    installments: u32,

    /// Write receipts for processed payments to this file
    #[arg(long)]
    receipts: Option<PathBuf>,

    /// Encoding of the receipts file
    #[arg(long, value_enum, default_value_t = ReceiptFormat::Csv)]
    receipt_format: ReceiptFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    let plan = InstallmentPlan::new(cli.installments).into_diagnostic()?;

    let file = File::open(&cli.input).into_diagnostic()?;
    let reader = RequestReader::new(file);

    let stdout = io::stdout();
    let mut checkout = Checkout::new(stdout.lock(), plan);
    for request in reader.requests() {
        match request {
            Ok(request) => {
                if let Err(e) = checkout.process_request(request) {
                    error!("Error processing payment: {}", e);
                }
            }
            Err(e) => {
                error!("Error reading payment request: {}", e);
            }
        }
    }

    let receipts = checkout.into_receipts().into_diagnostic()?;
    info!(processed = receipts.len(), "batch complete");

    if let Some(path) = cli.receipts {
        let file = File::create(path).into_diagnostic()?;
        let mut writer = ReceiptWriter::new(BufWriter::new(file), cli.receipt_format);
        writer.write_receipts(receipts).into_diagnostic()?;
    }

    Ok(())
}
