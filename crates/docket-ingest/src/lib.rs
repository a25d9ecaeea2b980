// Error types
pub mod error;

// Detail-type dispatch into typed payloads
pub mod decoders;

// Raw notification -> canonical record
pub mod normalizer;

pub use decoders::{DecodeFn, VariantDecoders};
pub use error::{Error, Result};
pub use normalizer::{Normalizer, RETENTION_WINDOW_SECS};
