use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_malformed_csv_handling() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "method, amount, card_number, holder_name, email, account_id, installments"
    )
    .unwrap();
    // Valid PayPal payment
    writeln!(file, "paypal, 1.0, , , a@example.com, ,").unwrap();
    // Unknown method
    writeln!(file, "bitcoin, 1.0, , , , ,").unwrap();
    // Amount is not a number
    writeln!(file, "paypal, lots, , , a@example.com, ,").unwrap();
    // Valid PayPal payment again
    writeln!(file, "paypal, 2.0, , , b@example.com, ,").unwrap();

    let mut cmd = Command::new(cargo_bin!("paymethods"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading payment request"))
        .stdout(
            "Processing PayPal payment of $1.00 from a@example.com...\n\
             Processing PayPal payment of $2.00 from b@example.com...\n",
        );
}

#[test]
fn test_invalid_requests_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "method, amount, card_number, holder_name, email, account_id, installments"
    )
    .unwrap();
    // Card without a holder
    writeln!(file, "credit_card, 1.0, 4111111111111234, , , ,").unwrap();
    // Zero installments
    writeln!(file, "klarna, 100, , , , acct_1, 0").unwrap();
    // Valid Klarna payment
    writeln!(file, "klarna, 100, , , , acct_1, 2").unwrap();

    let mut cmd = Command::new(cargo_bin!("paymethods"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Missing field: holder_name"))
        .stderr(predicate::str::contains("Installments must be positive"))
        .stdout(
            "Processing Klarna payment of $100.00 as 2 installments of $50.00 for account acct_1...\n",
        );
}

#[test]
fn test_zero_and_negative_amounts_succeed() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "method, amount, card_number, holder_name, email, account_id, installments"
    )
    .unwrap();
    writeln!(file, "credit_card, 0, 4111111111111234, Ada Lovelace, , ,").unwrap();
    writeln!(file, "klarna, -8, , , , acct_1,").unwrap();

    let mut cmd = Command::new(cargo_bin!("paymethods"));
    cmd.arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error").not())
        .stdout(predicate::str::contains("Charging $0.00 to card 1234..."))
        .stdout(predicate::str::contains(
            "Processing Klarna payment of $-8.00 as 4 installments of $-2.00 for account acct_1...",
        ));
}
