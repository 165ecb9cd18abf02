// This experiment documents the rust behavior that forced the registry design in
// src/identity.rs.
//
// In languages with per instantiation static storage, a template can carry
// `inline static Tag tag;` and every concrete type gets its own tag address for free.
// The straightforward rust translation is a `static` inside a generic function - but rust
// statics are not monomorphized: one item, one storage location, shared by every `T`.
// The assertions below pin that down. Because of this, per type singleton addresses have
// to come from somewhere keyed by the type at runtime, which is the TypeId keyed
// get-or-create registry the library uses.

#[cfg(test)]
mod tests {

    fn shared_static_address<T: 'static>() -> usize {
        static NOT_PER_TYPE: u8 = 0;

        &NOT_PER_TYPE as *const u8 as usize
    }

    #[test]
    fn generic_statics_are_shared_across_instantiations() {
        let for_u32 = shared_static_address::<u32>();
        let for_string = shared_static_address::<String>();

        // One address for all instantiations - useless as a type identity
        assert_eq!(for_u32, for_string);
    }

    #[test]
    fn registry_tags_are_per_type_where_the_static_is_not() {
        use coro_local::identity::tag_of;

        let for_u32 = tag_of::<u32>() as *const _ as usize;
        let for_string = tag_of::<String>() as *const _ as usize;

        assert_ne!(for_u32, for_string);
    }
}
