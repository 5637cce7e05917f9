use crate::domain::request::PaymentRequest;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Streams payment requests out of a headed CSV file.
///
/// Columns are matched by header name. A row may stop early: any column it
/// omits, or leaves blank, comes back as `None`, so a PayPal row only needs
/// `method`, `amount` and `email`.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Wraps `source`, trimming whitespace around every field.
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one item per data row; a row that fails to parse is an `Err` and
    /// does not stop the rows after it.
    pub fn requests(self) -> impl Iterator<Item = Result<PaymentRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
