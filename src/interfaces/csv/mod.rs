pub mod receipt_writer;
pub mod request_reader;
