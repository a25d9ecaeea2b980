// NOTE: docket layout
//
// Two flows share one record schema:
// - ingest: notification JSON -> Normalizer -> CanonicalRecord -> store
// - review: store scan -> Renderer -> one summary line per record
//
// Summaries are computed on read from the stored typed payload, so wording can
// change without touching anything already stored.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ScanArgs};
pub use commands::run;
