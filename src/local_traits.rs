//! The capability trait that lets a custom leaf type participate directly in the identity
//! mechanism, plus the factory that stamps such a type into a handle.
//!
//! # Design
//! - [CoroLocal] is the compile time query that selects the derived-type cast path: only
//!   types that opt in through it can be targets of
//!   [cast_derived](crate::local_handle::LocalHandle::cast_derived). Plain value types
//!   never implement it - they go through [crate::local_value::wrap] instead.
//! - Must be [Send] and `'static` so a handle can travel with its owning coroutine frame
//!   across threads. [Sync] is deliberately not required: a handle is single owner and is
//!   never accessed from two threads at once.
//! - Handle construction is restricted on purpose. The stamping constructor of
//!   [LocalHandle] is crate private and [from_local] is the only way to obtain a handle
//!   whose tag is the one registered for a custom leaf type, so a stamped tag is always
//!   paired with a boxed value of exactly that type. The unsafe cast paths in
//!   [crate::local_handle] rely on this.

use crate::identity::tag_of;
use crate::local_handle::LocalHandle;

/// Marker capability for custom leaf types stored directly behind a [LocalHandle].
///
/// Implementing this trait is the analogue of deriving from the typed base in a classic
/// intrusive design: it gives the type its own singleton identity tag, distinct from the
/// tag any wrapped plain value would receive.
pub trait CoroLocal: Send + 'static {
    /// True if `handle` currently holds an instance of this leaf type.
    ///
    /// O(1) - a single pointer comparison against this type's singleton tag.
    fn is_instance_of(handle: &LocalHandle) -> bool
    where
        Self: Sized,
    {
        match handle.identity() {
            Some(tag) => tag.same_as(tag_of::<Self>()),
            None => false,
        }
    }
}

/// Object safe ownership bound for the boxed payload inside a [LocalHandle].
///
/// Exists so the handle can drop any payload through one vtable without knowing its type.
/// Deliberately crate private: it carries no operations, and exposing it would invite
/// implementations that bypass the stamping factories.
pub(crate) trait LocalSlot: Send + 'static {}

impl<T> LocalSlot for T where T: Send + 'static {}

/// Builds an owning [LocalHandle] around a custom leaf type, stamping it with the leaf
/// type's singleton identity tag.
///
/// The tag is created lazily on the first ever handle for `D` and reused for every later
/// one, so two independently constructed instances of the same leaf type always satisfy
/// [CoroLocal::is_instance_of] through the same tag address.
pub fn from_local<D>(local: D) -> LocalHandle
where
    D: CoroLocal,
{
    LocalHandle::stamped(tag_of::<D>(), Box::new(local))
}
