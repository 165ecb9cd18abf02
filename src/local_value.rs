//! The generic wrapper that lets any plain value type live behind a [LocalHandle] without
//! implementing anything itself.
//!
//! # Design
//! - [LocalValue] is a synthesized leaf type: the identity stamped into the handle is the
//!   one registered for `LocalValue<T>`, not for `T`. That keeps wrapped values in a
//!   namespace of their own, so a custom [crate::local_traits::CoroLocal] type named `T`
//!   and a wrapped plain `T` can coexist without ever matching each other's casts.
//! - The value field is public, like the data field of a single value storage: a caller
//!   that has recovered the wrapper itself may reach through it freely. Most callers never
//!   see the wrapper at all -
//!   [cast_wrapped](crate::local_handle::LocalHandle::cast_wrapped) hands back the
//!   embedded value directly.

use std::fmt;

use crate::identity::tag_of;
use crate::local_handle::LocalHandle;

/// Embeds an arbitrary payload value so it can participate in identity tagged storage.
pub struct LocalValue<T> {
    pub value: T,
}

impl<T> LocalValue<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> fmt::Debug for LocalValue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LocalValue").field(&self.value).finish()
    }
}

/// Builds an owning [LocalHandle] around a plain value, stamping it with the identity tag
/// registered for `LocalValue<T>`.
///
/// The value is moved into the handle's box; nothing about `T` is required beyond [Send]
/// and `'static`, so primitives and third party types participate unmodified. If building
/// the value can fail, build it first and wrap the result - this layer adds no error
/// handling of its own.
pub fn wrap<T>(value: T) -> LocalHandle
where
    T: Send + 'static,
{
    LocalHandle::stamped(tag_of::<LocalValue<T>>(), Box::new(LocalValue::new(value)))
}
