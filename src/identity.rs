//! Per type singleton identity tags and the process wide registry that hands them out.
//!
//! # Design
//! - A tag's identity is its address and nothing else. Two tag references denote the same
//!   registered type exactly when they point at the same [IdentityTag] instance, so an
//!   identity check is one pointer comparison with no locking and no allocation.
//! - Tags are created lazily on first request for a type, and are then leaked so the
//!   address stays valid and unchanged for the remainder of the process. A registered type
//!   can never be unregistered - the registry only ever grows.
//! - The tag struct is deliberately not zero sized. Rust gives no guarantee that separate
//!   zero sized allocations receive distinct addresses, and distinct addresses are the
//!   entire point. The payload we keep is the registered type's name, which doubles as
//!   cheap diagnostics on [Debug] output.

use indexmap::IndexMap;
use std::any::{type_name, TypeId};
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock};

/// An opaque per type singleton marker. One instance exists per registered type for the
/// life of the process and identity is determined solely by instance address - compare
/// with [IdentityTag::same_as] or [std::ptr::eq], never by value.
pub struct IdentityTag {
    type_name: &'static str,
}

impl IdentityTag {
    /// Name of the type this tag was registered for. Diagnostic only - never use names
    /// for identity decisions, [std::any::type_name] output is not guaranteed unique.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True if both references point at the same singleton tag instance.
    pub fn same_as(&self, other: &IdentityTag) -> bool {
        std::ptr::eq(self, other)
    }
}

impl fmt::Debug for IdentityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IdentityTag({} @ {:p})",
            self.type_name, self as *const IdentityTag
        )
    }
}

// # Internal Design
//
// A static inside a generic item would be the obvious place to keep one tag per type but
// rust shares such statics across every instantiation, so the per type storage has to be
// an explicit map keyed by TypeId. This is the only place TypeId appears in the crate:
// it keys registration, it never participates in cast-time identity checks.
//
// The map sits behind a std RwLock so the steady state (tag already registered, which is
// every access after the first per type) is a read lock and a hash lookup. Creation takes
// the write lock and re-checks through the entry API, so when two threads race the first
// request for one type a single winner inserts and the loser observes the winner's tag.
fn registry() -> &'static RwLock<IndexMap<TypeId, &'static IdentityTag>> {
    static REGISTRY: OnceLock<RwLock<IndexMap<TypeId, &'static IdentityTag>>> = OnceLock::new();

    REGISTRY.get_or_init(|| RwLock::new(IndexMap::new()))
}

/// Returns the singleton [IdentityTag] for `T`, creating it on first request.
///
/// The first caller for a given `T` wins the creation race; every caller, including the
/// racers that lost, observes the same address for the rest of the process.
//
// Lock poisoning is recovered with into_inner rather than propagated. The registry is
// insert only and the leaked tag is fully built before insertion, so a panic in another
// thread cannot leave a torn entry behind.
pub fn tag_of<T: 'static>() -> &'static IdentityTag {
    let key = TypeId::of::<T>();

    {
        let map = registry().read().unwrap_or_else(PoisonError::into_inner);

        if let Some(tag) = map.get(&key).copied() {
            return tag;
        }
    }

    let mut map = registry().write().unwrap_or_else(PoisonError::into_inner);

    *map.entry(key).or_insert_with(|| {
        Box::leak(Box::new(IdentityTag {
            type_name: type_name::<T>(),
        }))
    })
}

/// Number of types registered so far. Tests use this to confirm that registration is
/// lazy and monotonic.
#[cfg(test)]
pub(crate) fn registered_tag_count() -> usize {
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}
