// The downcast-rs / Any rendition of the coroutine local mechanism. This is the approach
// the library deliberately does not use, preserved here as its motivational counterpart.
//
// It is entirely safe code and needs no registry, which is attractive. What it costs:
// - every access runs a TypeId comparison through the Any machinery instead of one
//   pointer compare against a singleton address
// - TypeId identity is owned by the toolchain, and separately compiled / dynamically
//   loaded artifacts have historically been able to disagree about it, whereas a leaked
//   singleton address is process-unique by construction
// - there is no place to hang extra per type metadata (the registry tag carries the
//   registered type name for diagnostics)

#[cfg(test)]
mod tests {
    use downcast_rs::{impl_downcast, Downcast};

    trait AnyLocal: Downcast + Send {}
    impl_downcast!(AnyLocal);

    struct Counter {
        hits: u32,
    }

    impl AnyLocal for Counter {}

    struct Unrelated;

    impl AnyLocal for Unrelated {}

    #[test]
    fn any_based_round_trip() {
        let mut slot: Box<dyn AnyLocal> = Box::new(Counter { hits: 1 });

        assert!(slot.is::<Counter>());
        assert!(!slot.is::<Unrelated>());

        slot.downcast_mut::<Counter>().unwrap().hits += 1;

        assert_eq!(slot.downcast_ref::<Counter>().unwrap().hits, 2);
        assert!(slot.downcast_ref::<Unrelated>().is_none());
    }

    #[test]
    fn any_based_wrapped_value() {
        // Plain values need no wrapper struct at all in this rendition - Box<dyn Any>
        // erases them directly. The library's LocalValue wrapper exists only because
        // address tags need a concrete leaf type to register.
        let slot: Box<dyn std::any::Any> = Box::new(42_i32);

        assert_eq!(*slot.downcast_ref::<i32>().unwrap(), 42);
        assert!(slot.downcast_ref::<f64>().is_none());
    }
}
