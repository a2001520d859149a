pub mod identity;
pub mod metadata;

pub use identity::{IdentityResolver, PasswdResolver};
pub use metadata::{FsMetadataSource, MetadataSource};
