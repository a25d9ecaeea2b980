pub mod configure;
pub mod ingest;
pub mod purge;
pub mod scan;
