use std::fmt;

use crate::{
    identity::{tag_of, IdentityTag},
    local_traits::{CoroLocal, LocalSlot},
    local_value::LocalValue,
};

/// The single owning handle behind every coroutine local slot.
///
/// A handle is either empty, or it owns exactly one type erased value together with the
/// singleton [IdentityTag] of that value's concrete type. The stored tag lets the slot
/// check what a handle holds at runtime without locks, allocation, or the language's
/// built in dynamic type machinery - every check is one pointer comparison.
///
/// Three cast operations are exposed, one per target category. The caller picks the
/// operation by what it is asking for:
/// * [cast_base](LocalHandle::cast_base) - the handle itself; always succeeds.
/// * [cast_derived](LocalHandle::cast_derived) - a custom [CoroLocal] leaf type.
/// * [cast_wrapped](LocalHandle::cast_wrapped) - a plain value stored via
///   [wrap](crate::local_value::wrap).
//
// ---------------------------------------------------------------------------------------------
//
// # Internal Design
//
// ## Why two fields and not a trait object alone
//
// The payload box exists purely for ownership: dropping the handle drops the payload
// through the `dyn LocalSlot` vtable, which is the dynamic destructor chain the storage
// slot contract needs. Everything identity related lives in the tag field so that
// emptiness and identity queries never touch the box at all.
//
// ## Safety
//
// The tag checked cast paths recover the concrete type of the boxed payload with a
// thin pointer cast: `&dyn LocalSlot as *const dyn LocalSlot as *const D` discards the
// vtable half of the fat pointer and keeps the data address, which for a boxed `D` is the
// address of the `D` itself.
//
// The casts are sound because of the crate wide stamping invariant: the only constructors
// that produce a non empty handle ([crate::local_traits::from_local] and
// [crate::local_value::wrap]) derive the tag and the boxed value from the same generic
// parameter, and `stamped` is crate private so no outside code can pair a tag with a
// mismatched payload. A successful pointer compare against `tag_of::<D>()` therefore
// proves the boxed concrete type is exactly `D`.
//
// ## Alternatives
//
// - Holding `Box<dyn Any>` and leaning on `downcast_ref` would remove the unsafe code but
//   reintroduces TypeId equality on every access, which is exactly the dependency this
//   mechanism removes. See tests/experiments/any_identity.rs for the comparison.
// - An intrusive layout (payload struct embedding the base at offset zero, as the
//   original intrusive designs do) needs `#[repr(C)]` on every participating type plus
//   container-of pointer arithmetic. The box-plus-tag split keeps participants layout
//   free, at the cost of one heap allocation per stored local, which the slot performs
//   once per declaration site anyway.
pub struct LocalHandle
{
    // None denotes the empty handle. Once stamped the tag never changes for the life of
    // the handle and always names the concrete type inside `slot`.
    tag: Option<&'static IdentityTag>,

    // Owns the stored value; None exactly when `tag` is None.
    slot: Option<Box<dyn LocalSlot>>,
}

impl LocalHandle
{
    /// Produces a handle with no associated type. Every cast except
    /// [cast_base](LocalHandle::cast_base) misses on it.
    pub fn empty() -> Self
    {
        Self {
            tag: None,
            slot: None,
        }
    }

    // The single stamping constructor. Callers must pair `tag` with a boxed value whose
    // concrete type is the one `tag` was registered for - the cast paths depend on it.
    pub(crate) fn stamped(tag: &'static IdentityTag, slot: Box<dyn LocalSlot>) -> Self
    {
        Self {
            tag: Some(tag),
            slot: Some(slot),
        }
    }

    /// True if this handle was produced by [LocalHandle::empty] and holds nothing.
    pub fn is_empty(&self) -> bool
    {
        self.tag.is_none()
    }

    /// The identity tag of the stored value's concrete type, or [None] for the empty
    /// handle. Lock free metadata, usable for logging or slot bookkeeping.
    pub fn identity(&self) -> Option<&'static IdentityTag>
    {
        self.tag
    }

    // ----------------------------------------------------------
    // Casting
    // ----------------------------------------------------------

    /// Cast to the base handle type itself. Always succeeds, empty or not, and returns
    /// this handle's own address.
    ///
    /// Exists so call sites that select a cast operation from a type descriptor have a
    /// uniform spelling for all three target categories.
    pub fn cast_base(&self) -> &LocalHandle
    {
        self
    }

    /// Cast to a custom leaf type built with [from_local](crate::local_traits::from_local).
    ///
    /// Returns [None] on the empty handle and on any identity mismatch. A miss performs
    /// no allocation and has no side effects, it is a normal outcome the slot checks for.
    pub fn cast_derived<D>(&self) -> Option<&D>
    where
        D: CoroLocal,
    {
        let tag = self.tag?;

        if !tag.same_as(tag_of::<D>())
        {
            return None;
        }

        let slot: &dyn LocalSlot = self.slot.as_deref()?;

        // Tag match proves the boxed concrete type is exactly D
        let ptr = slot as *const dyn LocalSlot as *const D;

        Some(unsafe { &*ptr })
    }

    /// Mutable variant of [cast_derived](LocalHandle::cast_derived).
    pub fn cast_derived_mut<D>(&mut self) -> Option<&mut D>
    where
        D: CoroLocal,
    {
        let tag = self.tag?;

        if !tag.same_as(tag_of::<D>())
        {
            return None;
        }

        let slot: &mut dyn LocalSlot = self.slot.as_deref_mut()?;

        let ptr = slot as *mut dyn LocalSlot as *mut D;

        Some(unsafe { &mut *ptr })
    }

    /// Cast to a plain value stored via [wrap](crate::local_value::wrap), yielding a
    /// reference to the embedded value itself rather than to its wrapper.
    ///
    /// The identity compared against is the one registered for `LocalValue<T>`, so a
    /// value wrapped as `T` can never collide with a custom leaf type `T` stored through
    /// [from_local](crate::local_traits::from_local).
    pub fn cast_wrapped<T>(&self) -> Option<&T>
    where
        T: Send + 'static,
    {
        let tag = self.tag?;

        if !tag.same_as(tag_of::<LocalValue<T>>())
        {
            return None;
        }

        let slot: &dyn LocalSlot = self.slot.as_deref()?;

        let ptr = slot as *const dyn LocalSlot as *const LocalValue<T>;

        Some(unsafe { &(*ptr).value })
    }

    /// Mutable variant of [cast_wrapped](LocalHandle::cast_wrapped).
    pub fn cast_wrapped_mut<T>(&mut self) -> Option<&mut T>
    where
        T: Send + 'static,
    {
        let tag = self.tag?;

        if !tag.same_as(tag_of::<LocalValue<T>>())
        {
            return None;
        }

        let slot: &mut dyn LocalSlot = self.slot.as_deref_mut()?;

        let ptr = slot as *mut dyn LocalSlot as *mut LocalValue<T>;

        Some(unsafe { &mut (*ptr).value })
    }
}

impl Default for LocalHandle
{
    fn default() -> Self
    {
        Self::empty()
    }
}

impl fmt::Debug for LocalHandle
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self.tag
        {
            Some(tag) => write!(f, "LocalHandle({})", tag.type_name()),
            None => write!(f, "LocalHandle(empty)"),
        }
    }
}
