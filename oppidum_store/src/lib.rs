pub mod ingest;
pub mod repository;

pub use ingest::{load_catalog_csv, load_trait_table_csv};
pub use repository::{JsonCollectionRepository, JsonProfileRepository};
