use crate::domain::receipt::Receipt;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

/// Output encoding for receipts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReceiptFormat {
    /// `method,amount,success` with a header row.
    #[default]
    Csv,
    /// One JSON object per line.
    Json,
}

/// Writes processed receipts to any `Write` destination.
pub struct ReceiptWriter<W: Write> {
    out: W,
    format: ReceiptFormat,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(out: W, format: ReceiptFormat) -> Self {
        Self { out, format }
    }

    pub fn write_receipts(&mut self, receipts: impl IntoIterator<Item = Receipt>) -> Result<()> {
        match self.format {
            ReceiptFormat::Csv => {
                let mut writer = csv::Writer::from_writer(&mut self.out);
                for receipt in receipts {
                    writer.serialize(receipt)?;
                }
                writer.flush()?;
            }
            ReceiptFormat::Json => {
                for receipt in receipts {
                    serde_json::to_writer(&mut self.out, &receipt)?;
                    writeln!(self.out)?;
                }
                self.out.flush()?;
            }
        }
        Ok(())
    }
}
