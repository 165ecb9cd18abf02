// A parking_lot Mutex based sketch of the tag registry. This was the other candidate for
// guarding get-or-create in src/identity.rs.
//
// Upsides: no lock poisoning to think about, and a plain Mutex makes the single winner
// property very easy to read off the code. Downside: the steady state of the real
// registry is overwhelmingly reads (every cast-adjacent tag_of after the first per type),
// and a Mutex serializes those where the std RwLock read path does not. Since the library
// otherwise has no need for parking_lot, the std RwLock won and this sketch stays here as
// the paper trail.

#[cfg(test)]
mod tests {
    use parking_lot::Mutex;
    use std::any::TypeId;
    use std::collections::HashMap;
    use std::sync::{Arc, Barrier};
    use std::thread;

    struct Tag {
        type_name: &'static str,
    }

    fn registry() -> &'static Mutex<HashMap<TypeId, &'static Tag>> {
        static REGISTRY: std::sync::OnceLock<Mutex<HashMap<TypeId, &'static Tag>>> =
            std::sync::OnceLock::new();

        REGISTRY.get_or_init(|| Mutex::new(HashMap::new()))
    }

    fn tag_of<T: 'static>() -> &'static Tag {
        *registry()
            .lock()
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                Box::leak(Box::new(Tag {
                    type_name: std::any::type_name::<T>(),
                }))
            })
    }

    #[test]
    fn mutex_registry_single_winner() {
        struct Raced;

        const THREADS: usize = 8;

        let barrier = Arc::new(Barrier::new(THREADS));

        let addresses: Vec<usize> = (0..THREADS)
            .map(|_| {
                let barrier = barrier.clone();
                thread::spawn(move || {
                    barrier.wait();
                    tag_of::<Raced>() as *const Tag as usize
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect();

        assert!(addresses.windows(2).all(|w| w[0] == w[1]));
        assert!(tag_of::<Raced>().type_name.contains("Raced"));
    }
}
