//! The owning polymorphic handle that coroutine local storage slots hold, and its three
//! cast operations. See [LocalHandle] for details

pub mod handle;

pub use handle::*;
