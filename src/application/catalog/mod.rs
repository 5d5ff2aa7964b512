mod catalog_service;
mod errors;
mod fine_ledger;

pub use catalog_service::Catalog;
pub use errors::{CatalogError, Result};
pub use fine_ledger::FineLedger;
