#![allow(dead_code)]

use rand::Rng;
use rust_decimal::Decimal;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 7] = [
    "method",
    "amount",
    "card_number",
    "holder_name",
    "email",
    "account_id",
    "installments",
];

/// Writes `rows` requests cycling through credit card, PayPal and Klarna.
pub fn generate_requests_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    let mut rng = rand::thread_rng();
    for i in 0..rows {
        let cents: i64 = rng.gen_range(-100_000..=100_000);
        let amount = Decimal::new(cents, 2).to_string();
        let id = i.to_string();
        let record = match i % 3 {
            0 => ["credit_card", amount.as_str(), "4111111111111234", "Ada Lovelace", "", "", ""],
            1 => ["paypal", amount.as_str(), "", "", "buyer@example.com", "", ""],
            _ => ["klarna", amount.as_str(), "", "", "", id.as_str(), "3"],
        };
        wtr.write_record(record)?;
    }

    wtr.flush()?;
    Ok(())
}
