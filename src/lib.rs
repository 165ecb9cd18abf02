//! Coro Local provides the identity and downcasting mechanism behind coroutine local
//! storage: a single owning [LocalHandle](local_handle::LocalHandle) that can hold a value
//! of any type and later hand it back through a runtime verified, statically typed cast.
//! Type identity is established with per type singleton address tags rather than the
//! language's built in dynamic type machinery, which keeps every check down to a single
//! pointer comparison on the hot path.
//!
//! # Features
//!
//! * One polymorphic handle type, [LocalHandle](local_handle::LocalHandle), that a storage
//!   slot can own without knowing anything about the stored type.
//! * Custom leaf types can participate directly by implementing
//!   [CoroLocal](local_traits::CoroLocal) and being built with
//!   [from_local](local_traits::from_local).
//! * Arbitrary unmodified value types (primitives, third party types) participate through
//!   [wrap](local_value::wrap) and the [LocalValue](local_value::LocalValue) wrapper.
//! * Cast misses are a normal outcome reported as [None] - never a panic, never an
//!   allocation.
//! * Tag creation is lazy and race safe: the first caller for a type wins and every other
//!   caller observes the same singleton address for the rest of the process.

// ----------------------------------------------------------------------------------------------
//
// # Internal Design
//
// The mechanism deliberately avoids building identity on top of `dyn Any` / `TypeId`
// comparisons at cast time. Identity lives in per type singleton tag addresses handed out
// by a process wide registry (see [identity]). `TypeId` is used exactly once per type, as
// the registry key during get-or-create, never on the cast path. The cast path is then a
// pointer compare followed by a thin pointer cast of the boxed payload - the same
// check-identity-then-cast shape used for trait object to sized casts.
//
// ## Safety
//
// The crate has four small unsafe expressions, all in [local_handle], all of the same
// shape: after the stored tag has been pointer compared against the target type's
// singleton tag, the boxed payload is cast from its erased trait object pointer to the
// concrete type. Soundness rests on a single crate wide invariant: a handle stamped with
// `tag_of::<T>()` always boxes a value whose concrete type is exactly `T`. The stamping
// constructor is crate private and the only public producers ([local_traits::from_local]
// and [local_value::wrap]) pair the tag and the boxed value off the same generic
// parameter, so the invariant cannot be broken from outside the crate.
//
// ## Alternatives that were considered
//
// - A `static` tag inside the generic factory would mirror the per type inline-static
//   trick common in other languages, but statics inside generic items are shared across
//   every instantiation in rust, so all types would receive one address. The registry is
//   the workaround. See tests/experiments/static_tag_sharing.rs
// - Building on `dyn Any` and `TypeId` equality works and needs no unsafe at all, but it
//   ties identity to the built in type machinery this mechanism exists to replace.
//   See tests/experiments/any_identity.rs

pub mod identity;
pub mod local_handle;
pub mod local_traits;
pub mod local_value;
