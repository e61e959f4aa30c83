#![deny(unsafe_code)]

pub mod error;
pub mod mapping;
pub mod schema;
pub mod table;

pub use error::{ModelError, Result};
pub use mapping::{HeaderMapping, Reconciliation};
pub use schema::TemplateSchema;
pub use table::CsvTable;
