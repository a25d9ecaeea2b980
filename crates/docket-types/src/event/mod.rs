pub mod detail;
pub mod notification;
pub mod record;

pub use detail::*;
pub use notification::*;
pub use record::*;
