mod schema;

pub use schema::{Config, LookupConfig, OutputConfig};
