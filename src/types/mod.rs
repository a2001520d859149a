pub mod entry;
pub mod errors;
pub mod expiry;
pub mod owner;
pub mod records;
pub mod stats;

pub use entry::*;
pub use errors::*;
pub use expiry::*;
pub use owner::*;
pub use records::*;
pub use stats::*;
