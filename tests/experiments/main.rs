// This module is for testing and demonstrating alternative approaches
// that didn't make the cut for various reasons into the library
// Having this nested sub folder under tests along with its own main.rs
// is the suggested approach from the cargo docs for having a nested folder
// under tests.
// See: https://doc.rust-lang.org/stable/cargo/guide/project-layout.html

#![cfg(feature = "experiments")]

// Demonstrates why the tag registry exists at all: a static inside a generic
// item is shared across every instantiation, so it cannot serve as a per type
// singleton address in rust
mod static_tag_sharing;

// The Any / TypeId based rendition of the same mechanism. Works fine, kept here
// as the motivational counterpart for the address tag design
mod any_identity;

// A parking_lot Mutex based registry, the lock choice that lost out to the
// std RwLock fast read path
mod parking_lot_registry;
