pub mod config;
pub mod error;
pub mod query;
pub mod table;
pub mod views;

pub use error::QueryError;
pub use table::Table;
