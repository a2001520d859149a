//! Identity resolution: map a uid/gid pair to an [`Owner`].
use crate::types::Owner;

/// Resolves an owner identity for a uid/gid pair. Implementations must be
/// total: classification never blocks on identity resolution, so a lookup
/// miss synthesizes a name instead of failing.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, uid: u32, gid: u32) -> Owner;
}

/// Default resolver backed by the system passwd database. A uid with no
/// passwd entry resolves deterministically to `user<UID>`.
#[derive(Copy, Clone, Debug, Default)]
pub struct PasswdResolver;

impl IdentityResolver for PasswdResolver {
    fn resolve(&self, uid: u32, gid: u32) -> Owner {
        let name = uzers::get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("user{uid}"));
        Owner { name, uid, gid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmapped_uid_synthesizes_name() {
        // A uid far outside any realistic passwd range.
        let owner = PasswdResolver.resolve(4_000_000_000, 4_000_000_000);
        assert_eq!(owner.name, "user4000000000");
        assert_eq!(owner.uid, 4_000_000_000);
        assert_eq!(owner.gid, 4_000_000_000);
    }
}
