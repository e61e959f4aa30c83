#![deny(unsafe_code)]

pub mod csv_table;
pub mod error;

pub use csv_table::{read_csv, read_csv_file, read_template_headers, write_csv};
pub use error::{IngestError, Result};
