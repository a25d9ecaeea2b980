pub mod detail_type;
pub mod error;
pub mod event;

pub use detail_type::*;
pub use error::{Error, Result};
pub use event::*;
