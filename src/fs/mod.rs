pub mod dir;
pub mod meta;

pub use dir::read_children;
pub use meta::{stat_entry, stat_target};
